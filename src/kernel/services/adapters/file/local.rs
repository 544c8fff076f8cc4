//! Local filesystem provider.
//!
//! Reads line by line and re-terminates each line with `\n`; `\n`, `\r\n` and a lone `\r`
//! all end a line. Writes rope chunks verbatim. File handles live only for the duration of
//! each call.

use crate::kernel::services::ports::file::{FileError, FileProvider, Result};
use ropey::Rope;
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

pub struct LocalFileProvider;

impl LocalFileProvider {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFileProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl FileProvider for LocalFileProvider {
    fn read_text(&self, path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(FileError::NotFound(path.to_path_buf()));
        }
        if !path.is_file() {
            return Err(FileError::NotAFile(path.to_path_buf()));
        }

        let mut reader = BufReader::new(File::open(path)?);
        let mut content = String::new();
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            push_lines(&mut content, &buf)?;
        }
        Ok(content)
    }

    fn write_text(&self, path: &Path, text: &Rope) -> Result<()> {
        if path.is_dir() {
            return Err(FileError::NotAFile(path.to_path_buf()));
        }
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut writer = BufWriter::new(File::create(path)?);
        for chunk in text.chunks() {
            writer.write_all(chunk.as_bytes())?;
        }
        writer.flush()?;
        Ok(())
    }
}

/// Appends the lines of one `read_until` chunk. The chunk ends at `\n` or at EOF, so a
/// `\r\n` pair is never split across chunks.
fn push_lines(content: &mut String, chunk: &[u8]) -> io::Result<()> {
    let (body, terminated) = match chunk.strip_suffix(b"\n") {
        Some(body) => (body.strip_suffix(b"\r").unwrap_or(body), true),
        None => (chunk, false),
    };

    let mut pieces = body.split(|b| *b == b'\r').peekable();
    while let Some(piece) = pieces.next() {
        // A lone `\r` at EOF ends the last line; it does not open another.
        if pieces.peek().is_none() && piece.is_empty() && !terminated {
            break;
        }
        let line = std::str::from_utf8(piece)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        content.push_str(line);
        content.push('\n');
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../../../../tests/unit/kernel/services/adapters/file/local.rs"]
mod tests;
