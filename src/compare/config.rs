use std::io;
use std::path::{Path, PathBuf};

use crate::common::io::SlurpError;
use crate::lines::LineSeq;

/// Comparison strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompareMode {
    /// Line diff; ignoring case folds ASCII only.
    TextAscii,
    /// Line diff; ignoring case folds with the full Unicode mapping.
    TextUnicode,
    /// Byte-for-byte comparison.
    Binary,
    /// Sniff both files and pick text or binary.
    #[default]
    Auto,
}

/// Default minimum run of matching lines treated as a stable anchor.
pub const DEFAULT_RESYNC_LINES: usize = 2;

/// Default line-buffer sizing hint.
pub const DEFAULT_BUFFER_LINES: usize = 100;

/// Configuration for one comparison.
#[derive(Debug, Clone)]
pub struct CompareConfig {
    pub mode: CompareMode,
    /// Case-insensitive line matching (/C).
    pub ignore_case: bool,
    /// Drop spaces and tabs before matching (/W).
    pub ignore_whitespace: bool,
    /// Forwarded to the callback context (/N); the engine ignores it.
    pub show_line_numbers: bool,
    /// Keep raw tabs instead of expanding each to four spaces (/T).
    pub preserve_raw_tabs: bool,
    /// Minimum consecutive matching lines that form a stable anchor.
    /// Zero behaves as one.
    pub resync_lines: usize,
    /// Reserved sizing hint; the engine loads whole files.
    pub buffer_lines: usize,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            mode: CompareMode::Auto,
            ignore_case: false,
            ignore_whitespace: false,
            show_line_numbers: false,
            preserve_raw_tabs: false,
            resync_lines: DEFAULT_RESYNC_LINES,
            buffer_lines: DEFAULT_BUFFER_LINES,
        }
    }
}

/// The two normal comparison outcomes. Everything else is a
/// `CompareError`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Identical,
    Different,
}

/// Comparison failures.
#[derive(Debug, thiserror::Error)]
pub enum CompareError {
    #[error("{}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
    #[error("out of memory: {0}")]
    Memory(String),
}

impl CompareError {
    pub(crate) fn io(path: &Path, source: io::Error) -> Self {
        CompareError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn slurp(path: &Path, e: SlurpError) -> Self {
        match e {
            SlurpError::Io(source) => CompareError::io(path, source),
            SlurpError::TooLarge(n) => CompareError::Memory(format!(
                "{}: file too large ({} bytes)",
                path.display(),
                n
            )),
            SlurpError::Alloc(n) => CompareError::Memory(format!(
                "{}: cannot allocate {} bytes",
                path.display(),
                n
            )),
        }
    }
}

/// Kind of a line-level edit block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Change,
    Add,
    Delete,
}

/// One reported difference.
///
/// Line ranges are end-exclusive indices into the normalized line
/// sequences; the empty side of an add or delete carries the insertion
/// point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffBlock {
    Lines {
        kind: LineKind,
        a_start: usize,
        a_end: usize,
        b_start: usize,
        b_end: usize,
    },
    Bytes {
        offset: u64,
        byte_a: u8,
        byte_b: u8,
    },
    Size {
        size_a: u64,
        size_b: u64,
    },
}

/// Passed to the diff callback alongside each block. Line sequences are
/// present for text comparisons only. Blocks and context are borrowed
/// for the duration of one invocation; the callback copies anything it
/// keeps.
#[derive(Debug, Clone, Copy)]
pub struct DiffContext<'a> {
    pub path_a: &'a Path,
    pub path_b: &'a Path,
    pub lines_a: Option<&'a LineSeq>,
    pub lines_b: Option<&'a LineSeq>,
    pub show_line_numbers: bool,
}
