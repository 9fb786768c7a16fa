//! Typed model of the TDLib-style JSON wire vocabulary.
//!
//! Every record on the wire carries an `"@type"` discriminator. The closed
//! unions here (`MessageContent`, `TextEntityKind`, `ForwardInfo`) map that
//! discriminator to an enum variant and route every unrecognized tag into an
//! explicit `Unknown` arm, so downstream dispatch is total.
//!
//! Payload records only carry the fields the normalization layer consumes;
//! serde ignores the rest of each wire record.

use serde::{Deserialize, Serialize};

// ── Errors ───────────────────────────────────────────────────────────────────

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// JSON (de)serialization failed.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// A wire record carried a different `"@type"` than the caller expected.
    #[error("unexpected wire record: expected {expected}, found {found}")]
    UnexpectedType { expected: &'static str, found: String },
}

// ── Formatted text ───────────────────────────────────────────────────────────

/// Plain text plus a list of offset/length-tagged annotations.
///
/// `text` is indexed in UTF-16 code units, the unit entity offsets are
/// measured in. `entities` is kept in wire order; producers do not guarantee
/// it is sorted by offset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormattedText {
    pub text: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub entities: Vec<TextEntity>,
}

impl FormattedText {
    pub const WIRE_TYPE: &'static str = "formattedText";

    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            entities: Vec::new(),
        }
    }

    /// Read a formatted-text record out of an untyped wire value.
    ///
    /// Returns `None` when the value is not a `formattedText` record or does
    /// not deserialize as one; malformed input degrades, it never errors.
    pub fn from_value(value: &serde_json::Value) -> Option<Self> {
        if value.get("@type")?.as_str()? != Self::WIRE_TYPE {
            return None;
        }
        serde_json::from_value(value.clone()).ok()
    }
}

/// One annotation range inside a [`FormattedText`].
///
/// Offsets and lengths come straight off the wire and may be negative or out
/// of range; consumers clamp, they never reject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextEntity {
    pub offset: i32,
    pub length: i32,
    #[serde(rename = "type")]
    pub kind: TextEntityKind,
}

/// Closed set of entity kind tags, with a default arm for tags this build
/// does not know.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "@type")]
pub enum TextEntityKind {
    #[serde(rename = "textEntityTypeUrl")]
    Url,
    #[serde(rename = "textEntityTypeTextUrl")]
    TextUrl { url: String },
    #[serde(rename = "textEntityTypeBold")]
    Bold,
    #[serde(rename = "textEntityTypeItalic")]
    Italic,
    #[serde(rename = "textEntityTypeCode")]
    Code,
    #[serde(rename = "textEntityTypePre")]
    Pre,
    #[serde(rename = "textEntityTypeMention")]
    Mention,
    #[serde(rename = "textEntityTypeMentionName")]
    MentionName { user_id: i64 },
    #[serde(rename = "textEntityTypeHashtag")]
    Hashtag,
    #[serde(rename = "textEntityTypeEmailAddress")]
    EmailAddress,
    #[serde(rename = "textEntityTypeBotCommand")]
    BotCommand,
    #[serde(other)]
    Unknown,
}

// ── Message content ──────────────────────────────────────────────────────────

/// Closed union over message payload kinds.
///
/// Media kinds carry an optional caption; service-event kinds carry nothing
/// this layer reads (their display text is owned by the service-message
/// formatter). `Unknown` absorbs tags introduced after this build.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "@type")]
pub enum MessageContent {
    #[serde(rename = "messageText")]
    Text {
        text: FormattedText,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        web_page: Option<WebPage>,
    },
    #[serde(rename = "messagePhoto")]
    Photo {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        caption: Option<FormattedText>,
    },
    #[serde(rename = "messageVideo")]
    Video {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        caption: Option<FormattedText>,
    },
    #[serde(rename = "messageAnimation")]
    Animation {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        caption: Option<FormattedText>,
    },
    #[serde(rename = "messageAudio")]
    Audio {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        caption: Option<FormattedText>,
    },
    #[serde(rename = "messageDocument")]
    Document {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        caption: Option<FormattedText>,
    },
    #[serde(rename = "messageVoiceNote")]
    VoiceNote {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        caption: Option<FormattedText>,
        #[serde(default)]
        is_listened: bool,
    },
    #[serde(rename = "messageVideoNote")]
    VideoNote {
        #[serde(default)]
        is_viewed: bool,
    },
    #[serde(rename = "messageSticker")]
    Sticker {},
    #[serde(rename = "messageLocation")]
    Location { location: Location },
    #[serde(rename = "messageVenue")]
    Venue { venue: Venue },
    #[serde(rename = "messageContact")]
    Contact { contact: Contact },
    #[serde(rename = "messageGame")]
    Game {},
    #[serde(rename = "messageCall")]
    Call {},
    #[serde(rename = "messageExpiredPhoto")]
    ExpiredPhoto,
    #[serde(rename = "messageExpiredVideo")]
    ExpiredVideo,

    // Service events: summarized entirely by the service-message formatter.
    #[serde(rename = "messageBasicGroupChatCreate")]
    BasicGroupChatCreate,
    #[serde(rename = "messageSupergroupChatCreate")]
    SupergroupChatCreate,
    #[serde(rename = "messageChatChangeTitle")]
    ChatChangeTitle,
    #[serde(rename = "messageChatChangePhoto")]
    ChatChangePhoto,
    #[serde(rename = "messageChatDeletePhoto")]
    ChatDeletePhoto,
    #[serde(rename = "messageChatAddMembers")]
    ChatAddMembers,
    #[serde(rename = "messageChatJoinByLink")]
    ChatJoinByLink,
    #[serde(rename = "messageChatDeleteMember")]
    ChatDeleteMember,
    #[serde(rename = "messageChatSetTtl")]
    ChatSetTtl,
    #[serde(rename = "messageChatUpgradeTo")]
    ChatUpgradeTo,
    #[serde(rename = "messageChatUpgradeFrom")]
    ChatUpgradeFrom,
    #[serde(rename = "messagePinMessage")]
    PinMessage,
    #[serde(rename = "messageScreenshotTaken")]
    ScreenshotTaken,
    #[serde(rename = "messageGameScore")]
    GameScore,
    #[serde(rename = "messageInvoice")]
    Invoice,
    #[serde(rename = "messagePaymentSuccessful")]
    PaymentSuccessful,
    #[serde(rename = "messagePaymentSuccessfulBot")]
    PaymentSuccessfulBot,
    #[serde(rename = "messageContactRegistered")]
    ContactRegistered,
    #[serde(rename = "messageCustomServiceAction")]
    CustomServiceAction,
    #[serde(rename = "messageWebsiteConnected")]
    WebsiteConnected,
    #[serde(rename = "messagePassportDataSent")]
    PassportDataSent,
    #[serde(rename = "messagePassportDataReceived")]
    PassportDataReceived,
    #[serde(rename = "messageUnsupported")]
    Unsupported,

    #[serde(other)]
    Unknown,
}

impl MessageContent {
    /// Caption attached to media content, if the kind carries one.
    pub fn caption(&self) -> Option<&FormattedText> {
        match self {
            Self::Photo { caption }
            | Self::Video { caption }
            | Self::Animation { caption }
            | Self::Audio { caption }
            | Self::Document { caption }
            | Self::VoiceNote { caption, .. } => caption.as_ref(),
            _ => None,
        }
    }
}

// ── Payload records ──────────────────────────────────────────────────────────

/// Geographic point, degrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    pub location: Location,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub address: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub user_id: i64,
}

/// Link preview attached to a text message. The embedded media blobs are
/// opaque to this layer; only their presence matters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WebPage {
    #[serde(default)]
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation: Option<serde_json::Value>,
}

// ── Directory records ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub username: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub last_read_outbox_message_id: i64,
}

// ── Message envelope ─────────────────────────────────────────────────────────

/// Forwarding origin of a message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "@type")]
pub enum ForwardInfo {
    #[serde(rename = "messageForwardedFromUser")]
    FromUser { sender_user_id: i64 },
    #[serde(rename = "messageForwardedPost")]
    Post { chat_id: i64 },
    #[serde(other)]
    Unknown,
}

/// One message as handed over by the remote store. Read-only input to the
/// normalization layer; zero-valued ids mean "absent" on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageEnvelope {
    pub id: i64,
    pub chat_id: i64,
    #[serde(default)]
    pub sender_user_id: i64,
    #[serde(default)]
    pub is_outgoing: bool,
    #[serde(default)]
    pub date: i64,
    /// Self-destruct period in seconds; positive means transient content.
    #[serde(default)]
    pub ttl: i32,
    #[serde(default)]
    pub reply_to_message_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forward_info: Option<ForwardInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<MessageContent>,
}

impl MessageEnvelope {
    pub const WIRE_TYPE: &'static str = "message";

    /// Parse a `message` record from an untyped wire value.
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        if let Some(tag) = value.get("@type").and_then(|t| t.as_str())
            && tag != Self::WIRE_TYPE
        {
            return Err(Error::UnexpectedType {
                expected: Self::WIRE_TYPE,
                found: tag.to_owned(),
            });
        }
        Ok(serde_json::from_value(value)?)
    }
}
