// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The `meta` map carried by every [`crate::request::Request`].
//!
//! The spider log uses byte-string keys (`b'fingerprint'`, `b'jid'`) at the
//! wire boundary; the codec is responsible for translating in and out of
//! this map. Core code never matches on raw keys — it goes through
//! [`Meta::job_id`]/[`Meta::set_job_id`] so the `jid` convention lives in
//! one place.

use std::collections::BTreeMap;

/// A `meta` value. The spider log only ever puts small scalars and byte
/// strings in here; `Bytes` covers keys like `jid` that travel as raw bytes
/// on the wire rather than as JSON strings or numbers.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum MetaValue {
    Bytes(Vec<u8>),
    Text(String),
    Int(i64),
    Bool(bool),
}

impl MetaValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            MetaValue::Text(s) => Some(s),
            MetaValue::Bytes(b) => std::str::from_utf8(b).ok(),
            _ => None,
        }
    }
}

impl From<&str> for MetaValue {
    fn from(s: &str) -> Self {
        MetaValue::Text(s.to_string())
    }
}

impl From<String> for MetaValue {
    fn from(s: String) -> Self {
        MetaValue::Text(s)
    }
}

impl From<Vec<u8>> for MetaValue {
    fn from(b: Vec<u8>) -> Self {
        MetaValue::Bytes(b)
    }
}

/// The key the job id travels under on the wire (`b'jid'` in the source
/// system). Kept as a byte-string-shaped constant even though our in-memory
/// map is keyed by `String`, matching the source's wire convention.
pub const JID_KEY: &str = "jid";

/// Arbitrary request metadata, keyed as the source system keys it (`jid`,
/// plus whatever the strategy or spider stash there). `BTreeMap` keeps
/// iteration order deterministic, which matters for tests asserting on
/// encoded output.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Meta(BTreeMap<String, MetaValue>);

impl Meta {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&MetaValue> {
        self.0.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<MetaValue>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// The job id this request/response/link was stamped with, if any.
    pub fn job_id(&self) -> Option<&str> {
        self.get(JID_KEY).and_then(MetaValue::as_str)
    }

    /// Stamp (or overwrite) the `jid` entry.
    pub fn set_job_id(&mut self, job_id: &str) {
        self.insert(JID_KEY, job_id);
    }
}

#[cfg(test)]
#[path = "meta_tests.rs"]
mod tests;
