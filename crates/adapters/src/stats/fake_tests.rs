// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn records_snapshots_in_order() {
    let sink = FakeStatsSink::new();
    let tags = export_tags("3");
    let mut counters = BTreeMap::new();
    counters.insert("consumed_since_start".to_string(), "1".to_string());
    sink.emit(&tags, &counters);
    assert_eq!(
        sink.snapshots(),
        vec![StatsSnapshot { tags, counters }]
    );
}
