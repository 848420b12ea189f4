use super::*;

#[test]
fn test_empty_is_binary() {
    assert!(!looks_like_text(b""));
}

#[test]
fn test_utf8_bom_is_text() {
    assert!(looks_like_text(&[0xEF, 0xBB, 0xBF]));
    assert!(looks_like_text(&[0xEF, 0xBB, 0xBF, 0x00, 0x01]));
}

#[test]
fn test_utf16_boms_are_text() {
    assert!(looks_like_text(&[0xFF, 0xFE, 0x41, 0x00]));
    assert!(looks_like_text(&[0xFE, 0xFF, 0x00, 0x41]));
}

#[test]
fn test_plain_ascii_is_text() {
    assert!(looks_like_text(b"Hello, world!\nSecond line\r\n"));
}

#[test]
fn test_zero_byte_is_binary() {
    assert!(!looks_like_text(b"mostly text\x00but a NUL"));
}

#[test]
fn test_tabs_and_newlines_count_as_printable() {
    assert!(looks_like_text(b"\tindented\n\r"));
}

#[test]
fn test_ratio_boundary_exactly_ninety_percent() {
    // 9 printable bytes + 1 non-printable, non-zero byte: 90%, text.
    let mut buf = b"aaaaaaaaa".to_vec();
    buf.push(0x01);
    assert!(looks_like_text(&buf));
}

#[test]
fn test_ratio_below_ninety_percent() {
    // 8 printable + 2 non-printable: 80%, binary.
    let mut buf = b"aaaaaaaa".to_vec();
    buf.extend_from_slice(&[0x01, 0x02]);
    assert!(!looks_like_text(&buf));
}

#[test]
fn test_high_bit_heavy_is_binary() {
    let buf = vec![0x80u8; 64];
    assert!(!looks_like_text(&buf));
}

#[test]
fn test_mostly_ascii_utf8_without_bom_is_text() {
    // Two multibyte sequences in a long ASCII line keep the
    // non-printable share under 10%.
    let text = "caf\u{e9} and na\u{ef}ve but otherwise plain ASCII text\n";
    assert!(looks_like_text(text.as_bytes()));
}
