use super::config::{DiffBlock, DiffContext, LineKind, Outcome};
use crate::lcs::Anchors;

/// Walk the stable anchors and report the gaps between them.
///
/// The cursors trail one past each consumed anchor. The ends of both
/// files act as a synthetic final anchor that the cursors stop at
/// rather than step over. A gap open on both sides is a change, on the
/// second side only an add, on the first side only a delete.
pub fn emit_blocks(
    ctx: &DiffContext<'_>,
    anchors: &Anchors,
    len_a: usize,
    len_b: usize,
    emit: &mut impl FnMut(&DiffContext<'_>, &DiffBlock),
) -> Outcome {
    let count = anchors.len();
    if count == len_a && count == len_b {
        return Outcome::Identical;
    }

    let mut a_start = 0;
    let mut b_start = 0;
    let mut fired = false;
    for i in 0..=count {
        let (a_end, b_end) = if i < count {
            (anchors.a[i], anchors.b[i])
        } else {
            (len_a, len_b)
        };

        if a_start < a_end && b_start < b_end {
            emit(
                ctx,
                &DiffBlock::Lines {
                    kind: LineKind::Change,
                    a_start,
                    a_end,
                    b_start,
                    b_end,
                },
            );
            fired = true;
        } else if b_start < b_end {
            emit(
                ctx,
                &DiffBlock::Lines {
                    kind: LineKind::Add,
                    a_start,
                    a_end,
                    b_start,
                    b_end,
                },
            );
            fired = true;
        } else if a_start < a_end {
            emit(
                ctx,
                &DiffBlock::Lines {
                    kind: LineKind::Delete,
                    a_start,
                    a_end,
                    b_start,
                    b_end,
                },
            );
            fired = true;
        }

        a_start = if i < count { a_end + 1 } else { a_end };
        b_start = if i < count { b_end + 1 } else { b_end };
    }

    if fired {
        Outcome::Different
    } else {
        Outcome::Identical
    }
}
