use std::fs::File;

use crate::common::io;
use crate::compare::{CompareError, DiffBlock, DiffContext, Outcome};

/// Chunk size for the memcmp fast path. Equal chunks are skipped in one
/// slice comparison; unequal chunks are rescanned byte-by-byte so the
/// callback stays byte-granular.
const CMP_CHUNK: usize = 64 * 1024;

/// Compare two files byte-for-byte from already-open handles.
///
/// Sizes are checked first: a mismatch reports one size block without
/// reading any content. Equal-sized files are mapped read-only and
/// scanned from offset zero; one block is emitted per mismatching byte,
/// in increasing offset order. The mappings cover whole files, so
/// handles that already served a sniff prefix compare the same as fresh
/// ones.
pub fn compare_open(
    ctx: &DiffContext<'_>,
    file_a: &File,
    file_b: &File,
    emit: &mut impl FnMut(&DiffContext<'_>, &DiffBlock),
) -> Result<Outcome, CompareError> {
    let size_a = file_a
        .metadata()
        .map_err(|e| CompareError::io(ctx.path_a, e))?
        .len();
    let size_b = file_b
        .metadata()
        .map_err(|e| CompareError::io(ctx.path_b, e))?
        .len();

    if size_a != size_b {
        emit(ctx, &DiffBlock::Size { size_a, size_b });
        return Ok(Outcome::Different);
    }
    if size_a == 0 {
        return Ok(Outcome::Identical);
    }

    let map_a = io::map_open(file_a).map_err(|e| CompareError::io(ctx.path_a, e))?;
    let map_b = io::map_open(file_b).map_err(|e| CompareError::io(ctx.path_b, e))?;

    let mut fired = false;
    let mut offset = 0usize;
    for (chunk_a, chunk_b) in map_a.chunks(CMP_CHUNK).zip(map_b.chunks(CMP_CHUNK)) {
        if chunk_a != chunk_b {
            for (pos, (&byte_a, &byte_b)) in chunk_a.iter().zip(chunk_b.iter()).enumerate() {
                if byte_a != byte_b {
                    emit(
                        ctx,
                        &DiffBlock::Bytes {
                            offset: (offset + pos) as u64,
                            byte_a,
                            byte_b,
                        },
                    );
                    fired = true;
                }
            }
        }
        offset += chunk_a.len();
    }

    Ok(if fired {
        Outcome::Different
    } else {
        Outcome::Identical
    })
}
