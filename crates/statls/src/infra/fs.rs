use std::ffi::{OsStr, OsString};
use std::future::Future;
use std::io;
use std::path::{Path, PathBuf};
use std::pin::Pin;

use crate::domain::{EntryKind, EntryMetadata};

/// Boxed async result used by [`FsClient`] trait methods.
pub type FsFuture<T> = Pin<Box<dyn Future<Output = T> + Send>>;

/// Async filesystem boundary used by the metadata collector.
///
/// Production uses [`RealFsClient`], while tests can inject
/// `MockFsClient` to control listing contents, failures, and per-entry
/// query latency.
#[cfg_attr(test, mockall::automock)]
pub trait FsClient: Send + Sync {
    /// Lists the names directly contained in `dir`, in the order the
    /// platform returns them.
    ///
    /// # Errors
    /// Returns an error when `dir` does not exist, is not a directory, or
    /// cannot be read.
    fn list(&self, dir: PathBuf) -> FsFuture<io::Result<Vec<OsString>>>;

    /// Reads the type of `path` without following symbolic links.
    ///
    /// # Errors
    /// Returns an error when `path` vanished or cannot be inspected.
    fn query(&self, path: PathBuf) -> FsFuture<io::Result<EntryMetadata>>;
}

/// Production [`FsClient`] backed by `tokio::fs`.
pub struct RealFsClient;

impl FsClient for RealFsClient {
    fn list(&self, dir: PathBuf) -> FsFuture<io::Result<Vec<OsString>>> {
        Box::pin(async move { list_names(dir).await })
    }

    fn query(&self, path: PathBuf) -> FsFuture<io::Result<EntryMetadata>> {
        Box::pin(async move { query_metadata(path).await })
    }
}

/// Joins `name` onto `dir` without touching the filesystem.
pub fn join_entry_path(dir: &Path, name: &OsStr) -> PathBuf {
    dir.join(name)
}

async fn list_names(dir: PathBuf) -> io::Result<Vec<OsString>> {
    let mut read_dir = tokio::fs::read_dir(&dir).await?;
    let mut names = Vec::new();

    while let Some(entry) = read_dir.next_entry().await? {
        names.push(entry.file_name());
    }

    Ok(names)
}

async fn query_metadata(path: PathBuf) -> io::Result<EntryMetadata> {
    let metadata = tokio::fs::symlink_metadata(&path).await?;

    Ok(EntryMetadata::new(EntryKind::from(metadata.file_type())))
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_join_entry_path_appends_name() {
        // Arrange
        let dir = Path::new("/srv/data");

        // Act
        let path = join_entry_path(dir, OsStr::new("report.csv"));

        // Assert
        assert_eq!(path, PathBuf::from("/srv/data/report.csv"));
    }

    #[tokio::test]
    async fn test_real_fs_client_lists_every_entry() {
        // Arrange
        let dir = tempdir().expect("failed to create temp dir");
        std::fs::write(dir.path().join("a.txt"), "a").expect("failed to write file");
        std::fs::create_dir(dir.path().join("nested")).expect("failed to create dir");

        // Act
        let mut names = RealFsClient
            .list(dir.path().to_path_buf())
            .await
            .expect("failed to list dir");
        names.sort();

        // Assert
        assert_eq!(
            names,
            vec![OsString::from("a.txt"), OsString::from("nested")]
        );
    }

    #[tokio::test]
    async fn test_real_fs_client_list_fails_for_missing_dir() {
        // Arrange
        let dir = tempdir().expect("failed to create temp dir");
        let missing = dir.path().join("missing");

        // Act
        let result = RealFsClient.list(missing).await;

        // Assert
        let error = result.expect_err("listing a missing dir should fail");
        assert_eq!(error.kind(), io::ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_real_fs_client_query_classifies_file_and_directory() {
        // Arrange
        let dir = tempdir().expect("failed to create temp dir");
        let file_path = dir.path().join("file.txt");
        std::fs::write(&file_path, "data").expect("failed to write file");
        let subdir_path = dir.path().join("subdir");
        std::fs::create_dir(&subdir_path).expect("failed to create dir");

        // Act
        let file = RealFsClient.query(file_path).await.expect("file query");
        let subdir = RealFsClient.query(subdir_path).await.expect("dir query");

        // Assert
        assert!(file.is_file());
        assert_eq!(subdir.kind(), EntryKind::Directory);
        assert!(!subdir.is_file());
    }

    #[tokio::test]
    async fn test_real_fs_client_query_fails_for_vanished_entry() {
        // Arrange
        let dir = tempdir().expect("failed to create temp dir");
        let vanished = dir.path().join("gone.txt");

        // Act
        let result = RealFsClient.query(vanished).await;

        // Assert
        assert!(result.is_err());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_real_fs_client_query_does_not_follow_broken_symlink() {
        // Arrange
        let dir = tempdir().expect("failed to create temp dir");
        let link = dir.path().join("broken-link");
        std::os::unix::fs::symlink(dir.path().join("nowhere"), &link)
            .expect("failed to create symlink");

        // Act
        let metadata = RealFsClient.query(link).await.expect("link query");

        // Assert
        assert_eq!(metadata.kind(), EntryKind::Symlink);
        assert!(!metadata.is_file());
    }
}
