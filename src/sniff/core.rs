/// How many leading bytes the dispatcher feeds the sniffer.
pub const SNIFF_WINDOW: usize = 4096;

const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];
const UTF16_LE_BOM: [u8; 2] = [0xFF, 0xFE];
const UTF16_BE_BOM: [u8; 2] = [0xFE, 0xFF];

/// Classify a byte prefix as likely-text.
///
/// An empty buffer is binary. A recognized BOM is text. Any zero byte is
/// binary. Otherwise at least 90% of the bytes must be printable ASCII
/// (32-126) or tab/LF/CR. Executables and compressed data are rich in
/// zeros and non-printables, so the heuristic errs toward binary for
/// them while passing ASCII and mostly-ASCII UTF-8.
pub fn looks_like_text(buf: &[u8]) -> bool {
    if buf.is_empty() {
        return false;
    }
    if buf.starts_with(&UTF8_BOM)
        || buf.starts_with(&UTF16_LE_BOM)
        || buf.starts_with(&UTF16_BE_BOM)
    {
        return true;
    }
    if memchr::memchr(0, buf).is_some() {
        return false;
    }

    let printable = buf
        .iter()
        .filter(|&&b| matches!(b, 9 | 10 | 13 | 32..=126))
        .count();
    // printable / total >= 0.90, kept in integers
    printable as u64 * 10 >= buf.len() as u64 * 9
}
