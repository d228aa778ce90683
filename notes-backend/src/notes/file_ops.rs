//! File operations for the note store
//!
//! Blocking primitives over the backing text file. Callers on the async side
//! go through [`super::NoteStore`], which moves these onto the blocking pool.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

/// Read the whole note file, returning empty string if not found.
///
/// Invalid UTF-8 sequences are replaced with U+FFFD rather than failing the read.
pub fn read_notes(path: &Path) -> io::Result<String> {
    match fs::read(path) {
        Ok(bytes) => Ok(String::from_utf8_lossy(&bytes).into_owned()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(String::new()),
        Err(e) => Err(e),
    }
}

/// Whether the directory that holds `path` exists. A bare filename lives in the cwd.
pub fn parent_dir_exists(path: &Path) -> bool {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.is_dir(),
        _ => true,
    }
}

/// Format a single stored line: the text plus its terminator
pub fn format_line(text: &str) -> String {
    let mut line = String::with_capacity(text.len() + 1);
    line.push_str(text);
    line.push('\n');
    line
}

/// Append one line to the note file (creates the file and parent directories as needed).
///
/// The line is written with a single `write_all` on an append-mode handle so
/// existing bytes are never rewritten.
pub fn append_line(path: &Path, text: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(format_line(text).as_bytes())?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_read_notes_not_found() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nonexistent.txt");
        let content = read_notes(&path).unwrap();
        assert!(content.is_empty());
    }

    #[test]
    fn test_append_then_read() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("notes.txt");

        append_line(&path, "first").unwrap();
        append_line(&path, "second").unwrap();
        assert_eq!(read_notes(&path).unwrap(), "first\nsecond\n");
    }

    #[test]
    fn test_append_preserves_existing_content() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        fs::write(&path, "seeded without newline").unwrap();

        append_line(&path, "next").unwrap();
        assert_eq!(read_notes(&path).unwrap(), "seeded without newlinenext\n");
    }

    #[test]
    fn test_append_empty_text_adds_blank_line() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("notes.txt");

        append_line(&path, "").unwrap();
        assert_eq!(read_notes(&path).unwrap(), "\n");
    }

    #[test]
    fn test_append_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("volume/data/notes.txt");

        append_line(&path, "hello").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello\n");
    }

    #[test]
    fn test_read_notes_on_directory_errors() {
        let dir = tempdir().unwrap();
        assert!(read_notes(dir.path()).is_err());
    }

    #[test]
    fn test_read_notes_invalid_utf8_is_lossy() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        fs::write(&path, b"caf\xe9\nok\n").unwrap();

        assert_eq!(read_notes(&path).unwrap(), "caf\u{FFFD}\nok\n");
    }

    #[test]
    fn test_parent_dir_exists() {
        let dir = tempdir().unwrap();
        assert!(parent_dir_exists(&dir.path().join("notes.txt")));
        assert!(!parent_dir_exists(&dir.path().join("missing/notes.txt")));
        assert!(parent_dir_exists(Path::new("notes.txt")));
    }

    #[test]
    fn test_format_line() {
        assert_eq!(format_line("buy milk"), "buy milk\n");
        assert_eq!(format_line(""), "\n");
    }
}
