//! Append-only JSONL writer, one file per session per day.

use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use super::entry::JsonLogEntry;

/// Writer for `logs/raw/<date>_<session>.jsonl`
pub struct SessionLogWriter {
    session: String,
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl SessionLogWriter {
    /// Open (or create) today's file for `session`, creating `raw/` as needed.
    pub fn new(logs_dir: impl AsRef<Path>, session: impl Into<String>) -> std::io::Result<Self> {
        let session = session.into();
        let raw_dir = logs_dir.as_ref().join("raw");
        fs::create_dir_all(&raw_dir)?;

        let date = chrono::Local::now().format("%Y-%m-%d");
        let path = raw_dir.join(format!("{}_{}.jsonl", date, session));

        let file = OpenOptions::new().create(true).append(true).open(&path)?;

        Ok(Self {
            session,
            writer: Mutex::new(BufWriter::new(file)),
            path,
        })
    }

    pub fn session(&self) -> &str {
        &self.session
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one entry as a single line and flush.
    pub fn write(&self, entry: &JsonLogEntry<'_>) -> std::io::Result<()> {
        let json = entry
            .to_json_line()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

        let mut writer = self.writer.lock();
        writeln!(writer, "{}", json)?;
        writer.flush()
    }

    pub fn flush(&self) -> std::io::Result<()> {
        self.writer.lock().flush()
    }
}

impl Drop for SessionLogWriter {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_writer_creates_directory_structure() {
        let temp = TempDir::new().unwrap();
        let logs_dir = temp.path().join("logs");

        let writer = SessionLogWriter::new(&logs_dir, "desktop").unwrap();

        assert!(logs_dir.join("raw").exists());
        assert!(writer.path().exists());
        assert!(writer.path().to_string_lossy().ends_with("_desktop.jsonl"));
    }

    #[test]
    fn test_writer_appends_lines() {
        let temp = TempDir::new().unwrap();
        let logs_dir = temp.path().join("logs");

        let writer = SessionLogWriter::new(&logs_dir, "desktop").unwrap();
        writer
            .write(&JsonLogEntry::new("info", "desktop", "test", "First"))
            .unwrap();
        writer
            .write(&JsonLogEntry::new("warn", "desktop", "test", "Second"))
            .unwrap();
        let path = writer.path().to_path_buf();
        drop(writer);

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<serde_json::Value> = content
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["msg"], "First");
        assert_eq!(lines[1]["level"], "warn");
    }

    #[test]
    fn test_reopen_appends_to_same_file() {
        let temp = TempDir::new().unwrap();
        let first = SessionLogWriter::new(temp.path(), "desktop").unwrap();
        first.write(&JsonLogEntry::new("info", "desktop", "t", "one")).unwrap();
        let path = first.path().to_path_buf();
        drop(first);

        let second = SessionLogWriter::new(temp.path(), "desktop").unwrap();
        assert_eq!(second.path(), path);
        second.write(&JsonLogEntry::new("info", "desktop", "t", "two")).unwrap();
        drop(second);

        assert_eq!(fs::read_to_string(&path).unwrap().lines().count(), 2);
    }
}
