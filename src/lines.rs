//! Meaningful line counting for text files.
//!
//! A line is meaningful when, after stripping leading whitespace, it is
//! non-empty and does not start with `#`. Lines end at `\n`, `\r\n` or a
//! lone `\r`.
//!
//! ```no_run
//! use quatern::lines::meaningful_line_count;
//!
//! let n = meaningful_line_count("setup.cfg")?;
//! println!("{n} meaningful lines");
//! # Ok::<(), quatern::lines::LineCountError>(())
//! ```

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Comment marker; a line whose first non-blank character is this is skipped.
pub const COMMENT_MARKER: char = '#';

/// Errors from line counting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineCountError {
    /// The file could not be opened (missing, permissions, ...).
    Open { path: PathBuf, kind: io::ErrorKind },
    /// Reading failed at the given 1-based line, including invalid UTF-8.
    Read { line: usize, kind: io::ErrorKind },
}

impl core::fmt::Display for LineCountError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            LineCountError::Open { path, kind } => {
                write!(f, "cannot open {}: {}", path.display(), kind)
            }
            LineCountError::Read { line, kind } => {
                write!(f, "read failed at line {}: {}", line, kind)
            }
        }
    }
}

impl std::error::Error for LineCountError {}

/// True if `line` counts as meaningful.
#[inline]
pub fn is_meaningful(line: &str) -> bool {
    let trimmed = line.trim_start();
    !trimmed.is_empty() && !trimmed.starts_with(COMMENT_MARKER)
}

/// Count meaningful lines from any buffered reader.
///
/// `\n`, `\r\n` and a lone `\r` all end a line.
pub fn count_meaningful_lines<R: BufRead>(mut reader: R) -> Result<usize, LineCountError> {
    let mut buf = Vec::new();
    let mut line_no = 0;
    let mut count = 0;
    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .map_err(|e| LineCountError::Read {
                line: line_no + 1,
                kind: e.kind(),
            })?;
        if read == 0 {
            break;
        }
        let chunk = core::str::from_utf8(&buf).map_err(|_| LineCountError::Read {
            line: line_no + 1,
            kind: io::ErrorKind::InvalidData,
        })?;
        let chunk = chunk.strip_suffix('\n').unwrap_or(chunk);
        let chunk = chunk.strip_suffix('\r').unwrap_or(chunk);
        // Anything left containing `\r` holds old Mac-style line breaks.
        for line in chunk.split('\r') {
            line_no += 1;
            if is_meaningful(line) {
                count += 1;
            } else {
                log::trace!("skipping line {}", line_no);
            }
        }
    }
    Ok(count)
}

/// Count meaningful lines in the file at `path`.
///
/// # Errors
///
/// Returns [`LineCountError::Open`] if the file cannot be opened and
/// [`LineCountError::Read`] if reading fails part-way through.
pub fn meaningful_line_count(path: impl AsRef<Path>) -> Result<usize, LineCountError> {
    let path = path.as_ref();
    log::debug!("counting meaningful lines in {}", path.display());
    let file = File::open(path).map_err(|e| LineCountError::Open {
        path: path.to_path_buf(),
        kind: e.kind(),
    })?;
    let count = count_meaningful_lines(BufReader::new(file))?;
    log::debug!("{}: {} meaningful lines", path.display(), count);
    Ok(count)
}
