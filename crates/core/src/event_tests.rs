// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::request::Request;

#[test]
fn tags_match_wire_names() {
    assert_eq!(Event::AddSeeds(vec![]).tag(), "add_seeds");
    assert_eq!(Event::Offset { partition: 0, offset: 0 }.tag(), "offset");
    assert_eq!(Event::Unknown("weird".into()).tag(), "unknown");
}

#[test]
fn links_extracted_carries_origin_and_links() {
    let origin = Request::new("aa", "http://example.com/a");
    let link = Request::new("bb", "http://example.com/b");
    let ev = Event::LinksExtracted(origin.clone(), vec![link.clone()]);
    match ev {
        Event::LinksExtracted(o, links) => {
            assert_eq!(o, origin);
            assert_eq!(links, vec![link]);
        }
        _ => unreachable!(),
    }
}

#[test]
fn state_default_is_not_crawled() {
    assert_eq!(State::default(), State::NotCrawled);
}
