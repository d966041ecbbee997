/// Append-only file sink
use once_cell::sync::Lazy;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::Mutex;

pub struct FileSink {
    writer: BufWriter<File>,
}

impl FileSink {
    /// Open (or create) the file in append mode
    pub fn open(path: &Path) -> std::io::Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            writer: BufWriter::new(file),
        })
    }

    pub fn write_line(&mut self, line: &str) -> std::io::Result<()> {
        writeln!(self.writer, "{}", line)
    }

    pub fn flush(&mut self) -> std::io::Result<()> {
        self.writer.flush()
    }
}

static FILE_SINK: Lazy<Mutex<Option<FileSink>>> = Lazy::new(|| Mutex::new(None));

/// Install the file sink; on failure logging continues console-only
pub fn init_file_logging(path: Option<&Path>) -> std::io::Result<()> {
    let sink = match path {
        Some(path) => Some(FileSink::open(path)?),
        None => None,
    };
    if let Ok(mut guard) = FILE_SINK.lock() {
        if let Some(previous) = guard.as_mut() {
            let _ = previous.flush();
        }
        *guard = sink;
    }
    Ok(())
}

pub fn write_to_file(line: &str) {
    if let Ok(mut guard) = FILE_SINK.lock() {
        if let Some(sink) = guard.as_mut() {
            // Flushed per line so the log survives an abrupt exit
            let _ = sink.write_line(line).and_then(|_| sink.flush());
        }
    }
}

pub fn flush_file_logging() {
    if let Ok(mut guard) = FILE_SINK.lock() {
        if let Some(sink) = guard.as_mut() {
            let _ = sink.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sink_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("checker.log");

        let mut sink = FileSink::open(&path).unwrap();
        sink.write_line("first").unwrap();
        sink.flush().unwrap();
        drop(sink);

        let mut sink = FileSink::open(&path).unwrap();
        sink.write_line("second").unwrap();
        sink.flush().unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "first\nsecond\n");
    }
}
