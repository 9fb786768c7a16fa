//! Rich-text entity decoding.
//!
//! Turns a [`FormattedText`] (plain string plus offset/length annotations)
//! into an ordered run of typed [`Segment`]s. Entity offsets are UTF-16 code
//! units and come straight off the wire, so every slice is defensively
//! clamped; hostile input degrades to truncated or empty runs, it never
//! fails.

use chatview_protocol::{FormattedText, TextEntityKind};
use tracing::warn;

/// One decoded run of message text.
///
/// `text` is always the display text; kind-specific metadata (link target,
/// user id, search query, command name) rides alongside for the renderer.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    Plain { text: String },
    Link { url: String, text: String },
    Bold { text: String },
    Italic { text: String },
    Code { text: String },
    Pre { text: String },
    Mention { handle: String, text: String },
    MentionName { user_id: i64, text: String },
    Hashtag { query: String, text: String },
    Email { address: String, text: String },
    BotCommand { command: String, text: String },
}

impl Segment {
    pub fn plain(text: impl Into<String>) -> Self {
        Self::Plain { text: text.into() }
    }

    /// Display text of the segment, markup ignored.
    pub fn text(&self) -> &str {
        match self {
            Self::Plain { text }
            | Self::Link { text, .. }
            | Self::Bold { text }
            | Self::Italic { text }
            | Self::Code { text }
            | Self::Pre { text }
            | Self::Mention { text, .. }
            | Self::MentionName { text, .. }
            | Self::Hashtag { text, .. }
            | Self::Email { text, .. }
            | Self::BotCommand { text, .. } => text,
        }
    }
}

/// Decode a formatted text into ordered segments.
///
/// Returns `None` when there is no text at all. Entity-free text comes back
/// as a single plain segment. Entities are walked in wire order: the gap
/// before each entity is emitted as plain text, then the entity run with its
/// markup. The scan cursor advances by the text actually emitted rather than
/// re-seeking to each entity's declared end, so overlapping or unsorted
/// entity lists shift the visible gaps instead of erroring; producers send
/// sorted, non-overlapping lists.
pub fn decode_formatted_text(formatted: &FormattedText) -> Option<Vec<Segment>> {
    if formatted.text.is_empty() {
        return None;
    }
    if formatted.entities.is_empty() {
        return Some(vec![Segment::plain(&formatted.text)]);
    }

    let units: Vec<u16> = formatted.text.encode_utf16().collect();
    let mut segments = Vec::with_capacity(formatted.entities.len() * 2 + 1);
    let mut index = 0usize;

    for entity in &formatted.entities {
        let gap = clamped_slice(&units, index as i64, i64::from(entity.offset));
        if !gap.is_empty() {
            segments.push(Segment::Plain {
                text: String::from_utf16_lossy(gap),
            });
        }

        let run = clamped_slice(
            &units,
            i64::from(entity.offset),
            i64::from(entity.offset) + i64::from(entity.length),
        );
        segments.push(markup(&entity.kind, String::from_utf16_lossy(run)));

        index += gap.len() + run.len();
    }

    if index < units.len() {
        segments.push(Segment::Plain {
            text: String::from_utf16_lossy(&units[index..]),
        });
    }

    Some(segments)
}

/// Slice with the wire clamping policy: start clamped into `[0, len - 1]`,
/// end clamped into `[start, len]`.
fn clamped_slice(units: &[u16], start: i64, end: i64) -> &[u16] {
    if units.is_empty() {
        return units;
    }
    let len = units.len() as i64;
    let start = start.clamp(0, len - 1);
    let end = end.clamp(start, len);
    &units[start as usize..end as usize]
}

fn markup(kind: &TextEntityKind, text: String) -> Segment {
    match kind {
        TextEntityKind::Url => {
            let url = default_scheme(&text);
            let display = match percent_decoded(&text) {
                Ok(decoded) => decoded,
                Err(e) => {
                    warn!(uri = %text, "percent-decoding failed, keeping raw text: {e}");
                    text
                },
            };
            Segment::Link { url, text: display }
        },
        TextEntityKind::TextUrl { url } => Segment::Link {
            url: default_scheme(url),
            text,
        },
        TextEntityKind::Bold => Segment::Bold { text },
        TextEntityKind::Italic => Segment::Italic { text },
        TextEntityKind::Code => Segment::Code { text },
        TextEntityKind::Pre => Segment::Pre { text },
        TextEntityKind::Mention => Segment::Mention {
            handle: text.clone(),
            text,
        },
        TextEntityKind::MentionName { user_id } => Segment::MentionName {
            user_id: *user_id,
            text,
        },
        TextEntityKind::Hashtag => Segment::Hashtag {
            query: text.strip_prefix('#').unwrap_or(&text).to_owned(),
            text,
        },
        TextEntityKind::EmailAddress => Segment::Email {
            address: text.clone(),
            text,
        },
        TextEntityKind::BotCommand => Segment::BotCommand {
            command: text.strip_prefix('/').unwrap_or(&text).to_owned(),
            text,
        },
        TextEntityKind::Unknown => Segment::Plain { text },
    }
}

fn percent_decoded(text: &str) -> Result<String, std::string::FromUtf8Error> {
    urlencoding::decode(text).map(|decoded| decoded.into_owned())
}

fn default_scheme(url: &str) -> String {
    if url.starts_with("http") {
        url.to_owned()
    } else {
        format!("http://{url}")
    }
}
