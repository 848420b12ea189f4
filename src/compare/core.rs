use std::fs::File;
use std::path::Path;

use super::config::{CompareConfig, CompareError, CompareMode, DiffBlock, DiffContext, Outcome};
use super::emit::emit_blocks;
use crate::binary;
use crate::common::io;
use crate::lcs;
use crate::lines::{self, CaseFold, NormalizeOptions};
use crate::sniff;

/// Compare two files and report differences through `emit`.
///
/// The mode selects the strategy: the text modes load both files fully
/// and diff normalized lines; binary mode compares mapped bytes; auto
/// mode sniffs a prefix of each file through a single open handle and
/// then reuses that handle for whichever path it picks.
pub fn compare(
    path_a: &Path,
    path_b: &Path,
    config: &CompareConfig,
    emit: &mut impl FnMut(&DiffContext<'_>, &DiffBlock),
) -> Result<Outcome, CompareError> {
    match config.mode {
        CompareMode::TextAscii | CompareMode::TextUnicode => {
            let data_a =
                io::read_file_bytes(path_a).map_err(|e| CompareError::slurp(path_a, e))?;
            let data_b =
                io::read_file_bytes(path_b).map_err(|e| CompareError::slurp(path_b, e))?;
            compare_text(path_a, &data_a, path_b, &data_b, config, emit)
        }
        CompareMode::Binary => {
            let file_a = File::open(path_a).map_err(|e| CompareError::io(path_a, e))?;
            let file_b = File::open(path_b).map_err(|e| CompareError::io(path_b, e))?;
            let ctx = binary_context(path_a, path_b, config);
            binary::compare_open(&ctx, &file_a, &file_b, emit)
        }
        CompareMode::Auto => {
            let mut file_a = File::open(path_a).map_err(|e| CompareError::io(path_a, e))?;
            let mut file_b = File::open(path_b).map_err(|e| CompareError::io(path_b, e))?;
            let prefix_a = io::read_prefix(&mut file_a, sniff::SNIFF_WINDOW)
                .map_err(|e| CompareError::io(path_a, e))?;
            let prefix_b = io::read_prefix(&mut file_b, sniff::SNIFF_WINDOW)
                .map_err(|e| CompareError::io(path_b, e))?;

            if sniff::looks_like_text(&prefix_a) && sniff::looks_like_text(&prefix_b) {
                let data_a = io::read_rest(file_a, prefix_a)
                    .map_err(|e| CompareError::slurp(path_a, e))?;
                let data_b = io::read_rest(file_b, prefix_b)
                    .map_err(|e| CompareError::slurp(path_b, e))?;
                compare_text(path_a, &data_a, path_b, &data_b, config, emit)
            } else {
                let ctx = binary_context(path_a, path_b, config);
                binary::compare_open(&ctx, &file_a, &file_b, emit)
            }
        }
    }
}

/// UTF-8 entry point: validates the path bytes and delegates.
pub fn compare_utf8(
    path_a: &[u8],
    path_b: &[u8],
    config: &CompareConfig,
    emit: &mut impl FnMut(&DiffContext<'_>, &DiffBlock),
) -> Result<Outcome, CompareError> {
    let a = std::str::from_utf8(path_a)
        .map_err(|_| CompareError::InvalidParameter("path is not valid UTF-8".into()))?;
    let b = std::str::from_utf8(path_b)
        .map_err(|_| CompareError::InvalidParameter("path is not valid UTF-8".into()))?;
    compare(Path::new(a), Path::new(b), config, emit)
}

/// The text pipeline: normalize, align, filter, report.
fn compare_text(
    path_a: &Path,
    data_a: &[u8],
    path_b: &Path,
    data_b: &[u8],
    config: &CompareConfig,
    emit: &mut impl FnMut(&DiffContext<'_>, &DiffBlock),
) -> Result<Outcome, CompareError> {
    let opts = normalize_options(config);
    let seq_a = lines::parse_lines(data_a, &opts);
    let seq_b = lines::parse_lines(data_b, &opts);

    let anchors = lcs::longest_common(&seq_a, &seq_b);
    // Equal sequences are identical no matter the resync threshold, so
    // the check precedes the run filter: a two-line threshold must not
    // flag a matching one-line file.
    if anchors.len() == seq_a.len() && anchors.len() == seq_b.len() {
        return Ok(Outcome::Identical);
    }

    let stable = lcs::filter_runs(&anchors, config.resync_lines.max(1));

    let ctx = DiffContext {
        path_a,
        path_b,
        lines_a: Some(&seq_a),
        lines_b: Some(&seq_b),
        show_line_numbers: config.show_line_numbers,
    };
    Ok(emit_blocks(&ctx, &stable, seq_a.len(), seq_b.len(), emit))
}

fn normalize_options(config: &CompareConfig) -> NormalizeOptions {
    NormalizeOptions {
        expand_tabs: !config.preserve_raw_tabs,
        strip_blanks: config.ignore_whitespace,
        fold: if !config.ignore_case {
            CaseFold::None
        } else if config.mode == CompareMode::TextUnicode {
            CaseFold::Unicode
        } else {
            // Auto-detected text folds the fast way.
            CaseFold::Ascii
        },
    }
}

fn binary_context<'a>(
    path_a: &'a Path,
    path_b: &'a Path,
    config: &CompareConfig,
) -> DiffContext<'a> {
    DiffContext {
        path_a,
        path_b,
        lines_a: None,
        lines_b: None,
        show_line_numbers: config.show_line_numbers,
    }
}
