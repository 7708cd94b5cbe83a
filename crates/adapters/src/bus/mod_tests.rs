// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn raw_message_equality() {
    let a = RawMessage { partition: 1, offset: 2, payload: vec![1, 2, 3] };
    let b = a.clone();
    assert_eq!(a, b);
}
