// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn emit_does_not_panic() {
    let sink = LoggingStatsSink;
    let mut counters = BTreeMap::new();
    counters.insert("consumed_since_start".to_string(), "3".to_string());
    sink.emit(&export_tags("0"), &counters);
}
