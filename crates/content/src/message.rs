//! Envelope helpers: small read-only views over a message used by list rows
//! and bubbles. Store access goes through the [`crate::stores`] traits.

use chatview_protocol::{ForwardInfo, MessageContent, MessageEnvelope, User, WebPage};

use crate::{
    segment::{Segment, decode_formatted_text},
    stores::{ChatLookup, MessageLookup, UserLookup},
};

/// Trimmed `first last` join, falling back to the username when both name
/// parts are empty.
pub fn user_display_name(user: &User) -> String {
    let full = format!("{} {}", user.first_name, user.last_name);
    let full = full.trim();
    if full.is_empty() {
        user.username.clone()
    } else {
        full.to_owned()
    }
}

/// Display title of the message sender: the sending user's full name, or the
/// chat title for channel posts. `None` when the relevant lookup misses.
pub fn title(
    message: &MessageEnvelope,
    users: &dyn UserLookup,
    chats: &dyn ChatLookup,
) -> Option<String> {
    if message.sender_user_id != 0 {
        return users
            .user(message.sender_user_id)
            .map(|u| user_display_name(&u));
    }
    if message.chat_id != 0 {
        return chats.chat(message.chat_id).map(|c| c.title);
    }
    None
}

/// Origin title of a forwarded message: forwarding user's full name or the
/// origin channel's title.
pub fn forward_title(
    message: &MessageEnvelope,
    users: &dyn UserLookup,
    chats: &dyn ChatLookup,
) -> Option<String> {
    match message.forward_info.as_ref()? {
        ForwardInfo::FromUser { sender_user_id } => users
            .user(*sender_user_id)
            .map(|u| user_display_name(&u)),
        ForwardInfo::Post { chat_id } => chats.chat(*chat_id).map(|c| c.title),
        ForwardInfo::Unknown => None,
    }
}

/// Full rich segments for a message bubble: text content decodes its
/// formatted text; media with a caption yields a newline followed by the
/// decoded caption; anything else renders no text.
pub fn rich_text(message: &MessageEnvelope) -> Vec<Segment> {
    let Some(content) = message.content.as_ref() else {
        return Vec::new();
    };

    if let MessageContent::Text { text, .. } = content {
        if text.text.is_empty() {
            return Vec::new();
        }
        return decode_formatted_text(text).unwrap_or_default();
    }

    let Some(caption) = content.caption().filter(|c| !c.text.is_empty()) else {
        return Vec::new();
    };
    let mut segments = vec![Segment::plain("\n")];
    if let Some(decoded) = decode_formatted_text(caption) {
        segments.extend(decoded);
    }
    segments
}

/// Link preview attached to text content, if any.
pub fn web_page(message: &MessageEnvelope) -> Option<&WebPage> {
    match message.content.as_ref()? {
        MessageContent::Text { web_page, .. } => web_page.as_ref(),
        _ => None,
    }
}

/// Id of the message this one replies to; zero on the wire means none.
pub fn reply_to(message: &MessageEnvelope) -> Option<i64> {
    (message.reply_to_message_id != 0).then_some(message.reply_to_message_id)
}

/// Sending user id; zero on the wire means the message is a channel post.
pub fn sender_user_id(message: &MessageEnvelope) -> Option<i64> {
    (message.sender_user_id != 0).then_some(message.sender_user_id)
}

/// Whether an outgoing message has not yet been read by the peer.
pub fn is_unread(message: &MessageEnvelope, chats: &dyn ChatLookup) -> bool {
    if message.chat_id == 0 || !message.is_outgoing {
        return false;
    }
    chats
        .chat(message.chat_id)
        .is_some_and(|c| c.last_read_outbox_message_id < message.id)
}

/// Whether the content participates in the media layout path.
pub fn is_media_content(content: Option<&MessageContent>) -> bool {
    matches!(content, Some(MessageContent::Photo { .. }))
}

/// Whether the referenced message plays as a video: video content, or text
/// content whose link preview embeds a video.
pub fn is_video_message(chat_id: i64, message_id: i64, messages: &dyn MessageLookup) -> bool {
    let Some(message) = messages.message(chat_id, message_id) else {
        return false;
    };
    match message.content {
        Some(MessageContent::Video { .. }) => true,
        Some(MessageContent::Text { web_page, .. }) => {
            web_page.is_some_and(|w| w.video.is_some())
        },
        _ => false,
    }
}

/// Whether the referenced message plays as an animation: animation content,
/// or text content whose link preview embeds one.
pub fn is_animation_message(chat_id: i64, message_id: i64, messages: &dyn MessageLookup) -> bool {
    let Some(message) = messages.message(chat_id, message_id) else {
        return false;
    };
    match message.content {
        Some(MessageContent::Animation { .. }) => true,
        Some(MessageContent::Text { web_page, .. }) => {
            web_page.is_some_and(|w| w.animation.is_some())
        },
        _ => false,
    }
}

/// Whether once-only content has been consumed. Voice notes track listened
/// state, video notes viewed state; every other kind (and a missing message)
/// counts as opened.
pub fn is_content_opened(chat_id: i64, message_id: i64, messages: &dyn MessageLookup) -> bool {
    let Some(message) = messages.message(chat_id, message_id) else {
        return true;
    };
    match message.content {
        Some(MessageContent::VoiceNote { is_listened, .. }) => is_listened,
        Some(MessageContent::VideoNote { is_viewed }) => is_viewed,
        _ => true,
    }
}
