use super::*;
use std::fs::File;

use crate::compare::{DiffBlock, DiffContext, Outcome};

fn run(bytes_a: &[u8], bytes_b: &[u8]) -> (Outcome, Vec<DiffBlock>) {
    let dir = tempfile::tempdir().unwrap();
    let path_a = dir.path().join("a.bin");
    let path_b = dir.path().join("b.bin");
    std::fs::write(&path_a, bytes_a).unwrap();
    std::fs::write(&path_b, bytes_b).unwrap();

    let file_a = File::open(&path_a).unwrap();
    let file_b = File::open(&path_b).unwrap();
    let ctx = DiffContext {
        path_a: &path_a,
        path_b: &path_b,
        lines_a: None,
        lines_b: None,
        show_line_numbers: false,
    };
    let mut blocks = Vec::new();
    let outcome = compare_open(&ctx, &file_a, &file_b, &mut |_, block| blocks.push(*block))
        .unwrap();
    (outcome, blocks)
}

#[test]
fn test_identical_files() {
    let (outcome, blocks) = run(&[1, 2, 3, 4, 5], &[1, 2, 3, 4, 5]);
    assert_eq!(outcome, Outcome::Identical);
    assert!(blocks.is_empty());
}

#[test]
fn test_both_empty() {
    let (outcome, blocks) = run(&[], &[]);
    assert_eq!(outcome, Outcome::Identical);
    assert!(blocks.is_empty());
}

#[test]
fn test_middle_byte_change() {
    let (outcome, blocks) = run(&[1, 2, 3, 4, 5], &[1, 2, 99, 4, 5]);
    assert_eq!(outcome, Outcome::Different);
    assert_eq!(
        blocks,
        [DiffBlock::Bytes {
            offset: 2,
            byte_a: 3,
            byte_b: 99
        }]
    );
}

#[test]
fn test_size_mismatch_short_circuits() {
    let (outcome, blocks) = run(&[1, 2, 3], &[1, 2, 3, 4]);
    assert_eq!(outcome, Outcome::Different);
    assert_eq!(blocks, [DiffBlock::Size { size_a: 3, size_b: 4 }]);
}

#[test]
fn test_one_empty_is_a_size_mismatch() {
    let (outcome, blocks) = run(&[], &[7]);
    assert_eq!(outcome, Outcome::Different);
    assert_eq!(blocks, [DiffBlock::Size { size_a: 0, size_b: 1 }]);
}

#[test]
fn test_every_mismatch_reported_in_order() {
    let (outcome, blocks) = run(&[0, 1, 2, 3], &[9, 1, 8, 3]);
    assert_eq!(outcome, Outcome::Different);
    assert_eq!(
        blocks,
        [
            DiffBlock::Bytes {
                offset: 0,
                byte_a: 0,
                byte_b: 9
            },
            DiffBlock::Bytes {
                offset: 2,
                byte_a: 2,
                byte_b: 8
            },
        ]
    );
}

#[test]
fn test_first_and_last_byte() {
    let (outcome, blocks) = run(&[5, 0, 0, 5], &[6, 0, 0, 7]);
    assert_eq!(outcome, Outcome::Different);
    assert_eq!(blocks.len(), 2);
    assert_eq!(
        blocks[0],
        DiffBlock::Bytes {
            offset: 0,
            byte_a: 5,
            byte_b: 6
        }
    );
    assert_eq!(
        blocks[1],
        DiffBlock::Bytes {
            offset: 3,
            byte_a: 5,
            byte_b: 7
        }
    );
}

#[test]
fn test_mismatches_across_chunks() {
    // Two differing bytes far enough apart to land in separate
    // comparison chunks.
    let len = 200 * 1024;
    let a = vec![0u8; len];
    let mut b = vec![0u8; len];
    b[10] = 1;
    b[len - 10] = 2;
    let (outcome, blocks) = run(&a, &b);
    assert_eq!(outcome, Outcome::Different);
    assert_eq!(
        blocks,
        [
            DiffBlock::Bytes {
                offset: 10,
                byte_a: 0,
                byte_b: 1
            },
            DiffBlock::Bytes {
                offset: (len - 10) as u64,
                byte_a: 0,
                byte_b: 2
            },
        ]
    );
}

#[test]
fn test_mismatch_count_equals_differing_positions() {
    let a: Vec<u8> = (0..=255).collect();
    let mut b = a.clone();
    for pos in [3usize, 17, 99, 200, 255] {
        b[pos] ^= 0xFF;
    }
    let (outcome, blocks) = run(&a, &b);
    assert_eq!(outcome, Outcome::Different);
    assert_eq!(blocks.len(), 5);
}
