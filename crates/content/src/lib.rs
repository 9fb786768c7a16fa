//! Message-content normalization: rich-text entity decoding, one-line
//! content summaries, and history deduplication.
//!
//! Everything here is a pure synchronous function over the wire types in
//! `chatview-protocol`. Rendering, store ownership, localization tables, and
//! service-message display text live with the caller and are injected as
//! capabilities ([`stores`], [`summary::Localize`],
//! [`summary::ServiceMessageFormatter`]).

pub mod history;
pub mod location;
pub mod message;
pub mod segment;
pub mod stores;
pub mod summary;

pub use {
    history::filter_history_duplicates,
    segment::{Segment, decode_formatted_text},
    summary::{Localize, ServiceMessageFormatter, summarize},
};
