// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn new_request_has_no_job_id() {
    let r = Request::new("aa", "http://example.com/a");
    assert_eq!(r.job_id(), None);
}

#[test]
fn set_job_id_stamps_meta() {
    let mut r = Request::new("aa", "http://example.com/a");
    r.set_job_id("7");
    assert_eq!(r.job_id(), Some("7"));
    assert_eq!(r.meta.job_id(), Some("7"));
}

#[test]
fn response_exposes_request_fingerprint_and_job_id() {
    let mut req = Request::new("aa", "http://example.com/a");
    req.set_job_id("7");
    let resp = Response {
        request: req.clone(),
        status_code: 200,
        body: b"ok".to_vec(),
    };
    assert_eq!(resp.fingerprint(), &req.fingerprint);
    assert_eq!(resp.job_id(), Some("7"));
}

#[test]
fn link_is_a_request() {
    let link: Link = Request::new("cc", "http://example.com/c");
    assert_eq!(link.url, "http://example.com/c");
}
