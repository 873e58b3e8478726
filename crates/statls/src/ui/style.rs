use crossterm::style::Stylize;

use crate::error::MetadataQueryFailed;

/// Decorates entry names according to their classification.
pub trait EntryStyle: Send + Sync {
    /// Formats a regular file name.
    fn file(&self, name: &str) -> String;

    /// Formats a directory, symlink, or special file name.
    fn non_file(&self, name: &str) -> String;

    /// Formats an entry whose metadata query failed.
    fn failed(&self, name: &str, failure: &MetadataQueryFailed) -> String;
}

/// Terminal highlighting: bold blue non-files and red failures.
pub struct HighlightStyle;

impl EntryStyle for HighlightStyle {
    fn file(&self, name: &str) -> String {
        name.to_string()
    }

    fn non_file(&self, name: &str) -> String {
        name.bold().blue().to_string()
    }

    fn failed(&self, name: &str, failure: &MetadataQueryFailed) -> String {
        failed_line(name, failure).red().to_string()
    }
}

/// Escape-free output for pipes and `NO_COLOR`; non-files get a trailing
/// `/`.
pub struct PlainStyle;

impl EntryStyle for PlainStyle {
    fn file(&self, name: &str) -> String {
        name.to_string()
    }

    fn non_file(&self, name: &str) -> String {
        format!("{name}/")
    }

    fn failed(&self, name: &str, failure: &MetadataQueryFailed) -> String {
        failed_line(name, failure)
    }
}

fn failed_line(name: &str, failure: &MetadataQueryFailed) -> String {
    format!("{name} [error: {failure}]")
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::path::PathBuf;

    use super::*;

    fn not_found() -> MetadataQueryFailed {
        MetadataQueryFailed {
            path: PathBuf::from("dir/broken-link"),
            kind: io::ErrorKind::NotFound,
            message: "No such file or directory".to_string(),
        }
    }

    #[test]
    fn test_highlight_style_leaves_files_untouched() {
        // Arrange
        let style = HighlightStyle;

        // Act
        let line = style.file("file.txt");

        // Assert
        assert_eq!(line, "file.txt");
    }

    #[test]
    fn test_highlight_style_decorates_non_files() {
        // Arrange
        let style = HighlightStyle;

        // Act
        let line = style.non_file("subdir");

        // Assert
        assert!(line.contains("subdir"));
        assert!(line.contains('\u{1b}'));
        assert_ne!(line, "subdir");
    }

    #[test]
    fn test_highlight_style_marks_failures() {
        // Arrange
        let style = HighlightStyle;

        // Act
        let line = style.failed("broken-link", &not_found());

        // Assert
        assert!(line.contains("broken-link [error: No such file or directory]"));
    }

    #[test]
    fn test_plain_style_uses_trailing_slash_for_non_files() {
        // Arrange
        let style = PlainStyle;

        // Act
        let file = style.file("file.txt");
        let directory = style.non_file("subdir");
        let failed = style.failed("broken-link", &not_found());

        // Assert
        assert_eq!(file, "file.txt");
        assert_eq!(directory, "subdir/");
        assert_eq!(failed, "broken-link [error: No such file or directory]");
    }
}
