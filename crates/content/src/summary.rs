//! One-line message summaries for list previews.

use chatview_protocol::{MessageContent, MessageEnvelope};

/// Localization key → display string lookup, supplied by the caller.
pub trait Localize {
    fn resolve(&self, key: &str) -> String;
}

/// Owns the display text of service-event content (membership changes, pins,
/// payments, ...) and of self-destructing content.
pub trait ServiceMessageFormatter {
    fn format(&self, message: &MessageEnvelope) -> String;
}

/// Build a one-line summary of a message's content.
///
/// Media kinds map to a fixed localization key with the caption appended as
/// `", <caption>"` when present and non-empty. Text content is returned
/// verbatim. Service-event kinds, unsupported content, and anything with a
/// positive TTL delegate to the service-message formatter. Returns `None`
/// only when the envelope carries no content at all.
pub fn summarize(
    message: &MessageEnvelope,
    lang: &dyn Localize,
    service: &dyn ServiceMessageFormatter,
) -> Option<String> {
    let content = message.content.as_ref()?;

    let caption = content
        .caption()
        .filter(|c| !c.text.is_empty())
        .map(|c| format!(", {}", c.text))
        .unwrap_or_default();

    // Self-destructing content is summarized as a service event regardless
    // of its kind.
    if message.ttl > 0 {
        return Some(service.format(message));
    }

    let summary = match content {
        MessageContent::Animation { .. } => lang.resolve("AttachGif") + &caption,
        MessageContent::Audio { .. } | MessageContent::VoiceNote { .. } => {
            lang.resolve("AttachAudio") + &caption
        },
        MessageContent::Call {} => lang.resolve("Call") + &caption,
        MessageContent::Contact { .. } => lang.resolve("AttachContact") + &caption,
        MessageContent::Document { .. } => lang.resolve("AttachDocument") + &caption,
        MessageContent::Game {} => lang.resolve("AttachGame") + &caption,
        MessageContent::Location { .. } | MessageContent::Venue { .. } => {
            lang.resolve("AttachLocation") + &caption
        },
        MessageContent::Photo { .. } | MessageContent::ExpiredPhoto => {
            lang.resolve("AttachPhoto") + &caption
        },
        MessageContent::Sticker {} => lang.resolve("AttachSticker") + &caption,
        MessageContent::Text { text, .. } => text.text.clone() + &caption,
        MessageContent::Video { .. } | MessageContent::ExpiredVideo => {
            lang.resolve("AttachVideo") + &caption
        },
        MessageContent::VideoNote { .. } => lang.resolve("AttachRound") + &caption,

        MessageContent::BasicGroupChatCreate
        | MessageContent::SupergroupChatCreate
        | MessageContent::ChatChangeTitle
        | MessageContent::ChatChangePhoto
        | MessageContent::ChatDeletePhoto
        | MessageContent::ChatAddMembers
        | MessageContent::ChatJoinByLink
        | MessageContent::ChatDeleteMember
        | MessageContent::ChatSetTtl
        | MessageContent::ChatUpgradeTo
        | MessageContent::ChatUpgradeFrom
        | MessageContent::PinMessage
        | MessageContent::ScreenshotTaken
        | MessageContent::GameScore
        | MessageContent::Invoice
        | MessageContent::PaymentSuccessful
        | MessageContent::PaymentSuccessfulBot
        | MessageContent::ContactRegistered
        | MessageContent::CustomServiceAction
        | MessageContent::WebsiteConnected
        | MessageContent::PassportDataSent
        | MessageContent::PassportDataReceived
        | MessageContent::Unsupported => service.format(message),

        MessageContent::Unknown => lang.resolve("UnsupportedAttachment"),
    };
    Some(summary)
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use chatview_protocol::FormattedText;
    use rstest::rstest;

    use super::*;

    struct KeyEcho;

    impl Localize for KeyEcho {
        fn resolve(&self, key: &str) -> String {
            key.to_owned()
        }
    }

    struct FakeService;

    impl ServiceMessageFormatter for FakeService {
        fn format(&self, message: &MessageEnvelope) -> String {
            format!("service:{}", message.id)
        }
    }

    fn envelope(content: MessageContent) -> MessageEnvelope {
        MessageEnvelope {
            id: 1,
            chat_id: 1,
            content: Some(content),
            ..MessageEnvelope::default()
        }
    }

    fn summary_of(message: &MessageEnvelope) -> Option<String> {
        summarize(message, &KeyEcho, &FakeService)
    }

    #[test]
    fn no_content_yields_none() {
        assert_eq!(summary_of(&MessageEnvelope::default()), None);
    }

    #[rstest]
    #[case(MessageContent::Photo { caption: None }, "AttachPhoto")]
    #[case(MessageContent::Video { caption: None }, "AttachVideo")]
    #[case(MessageContent::Animation { caption: None }, "AttachGif")]
    #[case(MessageContent::Audio { caption: None }, "AttachAudio")]
    #[case(MessageContent::VoiceNote { caption: None, is_listened: false }, "AttachAudio")]
    #[case(MessageContent::VideoNote { is_viewed: false }, "AttachRound")]
    #[case(MessageContent::Document { caption: None }, "AttachDocument")]
    #[case(MessageContent::Sticker {}, "AttachSticker")]
    #[case(MessageContent::Location { location: chatview_protocol::Location { latitude: 0.0, longitude: 0.0 } }, "AttachLocation")]
    #[case(MessageContent::Contact { contact: chatview_protocol::Contact::default() }, "AttachContact")]
    #[case(MessageContent::Game {}, "AttachGame")]
    #[case(MessageContent::Call {}, "Call")]
    #[case(MessageContent::ExpiredPhoto, "AttachPhoto")]
    #[case(MessageContent::ExpiredVideo, "AttachVideo")]
    fn media_kinds_map_to_fixed_keys(#[case] content: MessageContent, #[case] expected: &str) {
        assert_eq!(summary_of(&envelope(content)).unwrap(), expected);
    }

    #[test]
    fn caption_is_appended_with_separator() {
        let content = MessageContent::Photo {
            caption: Some(FormattedText::plain("hi")),
        };
        assert_eq!(summary_of(&envelope(content)).unwrap(), "AttachPhoto, hi");
    }

    #[test]
    fn empty_caption_appends_nothing() {
        let content = MessageContent::Photo {
            caption: Some(FormattedText::plain("")),
        };
        assert_eq!(summary_of(&envelope(content)).unwrap(), "AttachPhoto");
    }

    #[test]
    fn text_content_is_returned_verbatim() {
        let content = MessageContent::Text {
            text: FormattedText::plain("hello there"),
            web_page: None,
        };
        assert_eq!(summary_of(&envelope(content)).unwrap(), "hello there");
    }

    #[test]
    fn ttl_overrides_kind_dispatch() {
        let mut message = envelope(MessageContent::Photo {
            caption: Some(FormattedText::plain("hi")),
        });
        message.ttl = 30;
        let summary = summary_of(&message).unwrap();
        assert_eq!(summary, "service:1");
        assert!(!summary.contains("AttachPhoto"));
    }

    #[rstest]
    #[case(MessageContent::PinMessage)]
    #[case(MessageContent::ChatChangeTitle)]
    #[case(MessageContent::PaymentSuccessful)]
    #[case(MessageContent::Unsupported)]
    fn service_kinds_delegate(#[case] content: MessageContent) {
        assert_eq!(summary_of(&envelope(content)).unwrap(), "service:1");
    }

    #[test]
    fn unknown_kind_gets_generic_label() {
        assert_eq!(
            summary_of(&envelope(MessageContent::Unknown)).unwrap(),
            "UnsupportedAttachment"
        );
    }
}
