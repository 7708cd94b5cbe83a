// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn equality_is_byte_for_byte() {
    let a = Fingerprint::from("abc");
    let b = Fingerprint::new(b"abc".to_vec());
    assert_eq!(a, b);
}

#[test]
fn distinct_bytes_are_distinct() {
    assert_ne!(Fingerprint::from("aa"), Fingerprint::from("bb"));
}

#[test]
fn display_is_hex() {
    let fp = Fingerprint::new(vec![0xde, 0xad, 0xbe, 0xef]);
    assert_eq!(fp.to_string(), "deadbeef");
}

#[test]
fn usable_as_hash_map_key() {
    use std::collections::HashMap;
    let mut m = HashMap::new();
    m.insert(Fingerprint::from("aa"), 1);
    assert_eq!(m.get(&Fingerprint::from("aa")), Some(&1));
}
