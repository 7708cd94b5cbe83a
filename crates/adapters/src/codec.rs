// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The event codec: decodes raw spider-log payloads into [`sw_core::Event`]
//! and encodes score updates for the scoring log. Concrete wire format is
//! external (spec §2, §6.3) — this module only defines the trait boundary
//! plus a JSON-based test/reference codec.

use sw_core::{Event, Request};
use thiserror::Error;

/// Failure to interpret a raw spider-log payload as an [`Event`]. Per
/// spec §4.3/§7, decode errors are logged with a hex dump of the offending
/// payload and the message is skipped — the batch continues.
#[derive(Debug, Error)]
#[error("failed to decode event: {reason}")]
pub struct DecodeError {
    pub reason: String,
}

impl DecodeError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self { reason: reason.into() }
    }
}

/// A score-update record bound for the scoring log (spec §4.2, §6.3).
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreUpdate {
    pub request: Request,
    pub score: f64,
    pub schedule: bool,
}

/// Decodes raw spider-log payloads.
pub trait Decoder: Send + Sync + 'static {
    fn decode(&self, payload: &[u8]) -> Result<Event, DecodeError>;
}

/// Encodes outgoing score-update records.
pub trait Encoder: Send + Sync + 'static {
    fn encode(&self, update: &ScoreUpdate) -> Vec<u8>;
}

/// A codec bundling both directions, the unit `MESSAGE_BUS_CODEC` config
/// key names (spec §6.1).
pub trait EventCodec: Decoder + Encoder {}
impl<T: Decoder + Encoder> EventCodec for T {}

/// Reference JSON codec, used by tests and suitable as a default when no
/// other wire format is specified.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

#[derive(serde::Serialize, serde::Deserialize)]
#[serde(tag = "tag", rename_all = "snake_case")]
enum WireEvent {
    AddSeeds { seeds: Vec<Request> },
    PageCrawled { response: sw_core::Response },
    LinksExtracted { request: Request, links: Vec<Request> },
    RequestError { request: Request, error: String },
    Offset { partition: i32, offset: i64 },
}

#[derive(serde::Serialize)]
struct WireScoreUpdate<'a> {
    fingerprint: &'a sw_core::Fingerprint,
    score: f64,
    schedule: bool,
}

impl Decoder for JsonCodec {
    fn decode(&self, payload: &[u8]) -> Result<Event, DecodeError> {
        // An unrecognized `tag` value deserializes as a serde error, same
        // as malformed JSON — both count as a decode failure; only JSON
        // that round-trips a *known* tag produces something other than
        // `Unknown`. A valid-but-foreign tag is represented by falling
        // back to a tiny tagged peek before the strongly-typed parse.
        #[derive(serde::Deserialize)]
        struct TagPeek {
            tag: String,
        }
        let peek: TagPeek = serde_json::from_slice(payload)
            .map_err(|e| DecodeError::new(e.to_string()))?;

        const KNOWN: [&str; 5] = [
            "add_seeds",
            "page_crawled",
            "links_extracted",
            "request_error",
            "offset",
        ];
        if !KNOWN.contains(&peek.tag.as_str()) {
            return Ok(Event::Unknown(peek.tag));
        }

        let wire: WireEvent =
            serde_json::from_slice(payload).map_err(|e| DecodeError::new(e.to_string()))?;
        Ok(match wire {
            WireEvent::AddSeeds { seeds } => Event::AddSeeds(seeds),
            WireEvent::PageCrawled { response } => Event::PageCrawled(response),
            WireEvent::LinksExtracted { request, links } => {
                Event::LinksExtracted(request, links)
            }
            WireEvent::RequestError { request, error } => Event::RequestError(request, error),
            WireEvent::Offset { partition, offset } => Event::Offset { partition, offset },
        })
    }
}

impl Encoder for JsonCodec {
    fn encode(&self, update: &ScoreUpdate) -> Vec<u8> {
        let wire = WireScoreUpdate {
            fingerprint: &update.request.fingerprint,
            score: update.score,
            schedule: update.schedule,
        };
        // A JsonCodec encode error would mean our own wire type failed to
        // serialize itself, which cannot happen for this shape.
        serde_json::to_vec(&wire).unwrap_or_default()
    }
}

#[cfg(test)]
#[path = "codec_tests.rs"]
mod tests;
