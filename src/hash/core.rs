/// 32-bit rolling hash over a line's normalized bytes.
///
/// The recurrence is `h = h * 31 + byte`, wrapping, seeded at zero, so two
/// identically-normalized inputs hash identically on every platform. Case
/// folding and blank elision are applied inline: hashing stays a single
/// pass, and a caller whose text was already folded or stripped gets the
/// same value back (the filters are idempotent).
///
/// Lines with different hashes are guaranteed unequal; equal hashes may
/// collide, which the downstream consumers tolerate.
#[inline]
pub fn line_hash(bytes: &[u8], fold_ascii_case: bool, skip_blanks: bool) -> u32 {
    let mut h: u32 = 0;
    for &b in bytes {
        if skip_blanks && (b == b' ' || b == b'\t') {
            continue;
        }
        let b = if fold_ascii_case {
            b.to_ascii_lowercase()
        } else {
            b
        };
        h = h.wrapping_mul(31).wrapping_add(u32::from(b));
    }
    h
}
