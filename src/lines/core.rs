use crate::hash::line_hash;

/// Case-folding strategy applied when hashing a normalized line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaseFold {
    /// Hash the bytes as-is.
    #[default]
    None,
    /// Fold ASCII uppercase to lowercase inline while hashing.
    Ascii,
    /// Lowercase with the full Unicode mapping before hashing.
    Unicode,
}

/// How raw lines are normalized before hashing.
#[derive(Debug, Clone, Copy)]
pub struct NormalizeOptions {
    /// Replace every tab with four literal spaces.
    pub expand_tabs: bool,
    /// Remove every space and tab; lines left empty by this are dropped.
    pub strip_blanks: bool,
    pub fold: CaseFold,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            expand_tabs: true,
            strip_blanks: false,
            fold: CaseFold::None,
        }
    }
}

/// One normalized line: the text after tab expansion and blank elision,
/// plus the 32-bit hash used for matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub text: Vec<u8>,
    pub hash: u32,
}

/// An ordered sequence of normalized lines from one file. Owns its lines
/// for the duration of one comparison.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineSeq {
    pub lines: Vec<Line>,
}

impl LineSeq {
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn line(&self, index: usize) -> &Line {
        &self.lines[index]
    }

    #[inline]
    pub fn hash_at(&self, index: usize) -> u32 {
        self.lines[index].hash
    }
}

/// Split a buffer into normalized, hashed lines.
///
/// A line is a maximal nonempty run of bytes containing neither LF nor
/// CR; each run of terminator bytes, in any mix, is a single separator,
/// so a `\r\n` pair produces one break. A trailing terminator adds no
/// empty line; an unterminated trailing line is kept.
pub fn parse_lines(data: &[u8], opts: &NormalizeOptions) -> LineSeq {
    let mut lines = Vec::with_capacity(estimate_line_count(data));
    let mut pos = 0;
    while pos < data.len() {
        let line_end = match memchr::memchr2(b'\n', b'\r', &data[pos..]) {
            Some(off) => pos + off,
            None => data.len(),
        };
        if line_end > pos {
            if let Some(line) = normalize_line(&data[pos..line_end], opts) {
                lines.push(line);
            }
        }
        pos = line_end;
        while pos < data.len() && (data[pos] == b'\n' || data[pos] == b'\r') {
            pos += 1;
        }
    }
    LineSeq { lines }
}

/// Upper bound on the number of lines, from a SIMD newline count.
fn estimate_line_count(data: &[u8]) -> usize {
    if data.is_empty() {
        return 0;
    }
    memchr::memchr_iter(b'\n', data).count() + 1
}

/// Normalize one raw line. Returns None when blank elision leaves
/// nothing, which drops the line from the sequence.
fn normalize_line(raw: &[u8], opts: &NormalizeOptions) -> Option<Line> {
    let mut text = if opts.expand_tabs && raw.contains(&b'\t') {
        let tabs = raw.iter().filter(|&&b| b == b'\t').count();
        let mut expanded = Vec::with_capacity(raw.len() + 3 * tabs);
        for &b in raw {
            if b == b'\t' {
                expanded.extend_from_slice(b"    ");
            } else {
                expanded.push(b);
            }
        }
        expanded
    } else {
        raw.to_vec()
    };

    if opts.strip_blanks {
        text.retain(|&b| b != b' ' && b != b'\t');
        if text.is_empty() {
            return None;
        }
    }

    let hash = hash_normalized(&text, opts);
    Some(Line { text, hash })
}

fn hash_normalized(text: &[u8], opts: &NormalizeOptions) -> u32 {
    match opts.fold {
        CaseFold::Unicode => {
            // Invalid UTF-8 folds through U+FFFD; the hash contract
            // tolerates collisions, never false inequality.
            let lowered = String::from_utf8_lossy(text).to_lowercase();
            line_hash(lowered.as_bytes(), false, opts.strip_blanks)
        }
        CaseFold::Ascii => line_hash(text, true, opts.strip_blanks),
        CaseFold::None => line_hash(text, false, opts.strip_blanks),
    }
}
