//! Lookup capabilities over the caller's remote stores.
//!
//! The view layer owns the actual stores; the normalization helpers only
//! need read access, injected per call so nothing here holds hidden global
//! state and tests can hand in maps.

use chatview_protocol::{Chat, MessageEnvelope, User};

pub trait UserLookup {
    fn user(&self, user_id: i64) -> Option<User>;
}

pub trait ChatLookup {
    fn chat(&self, chat_id: i64) -> Option<Chat>;
}

pub trait MessageLookup {
    fn message(&self, chat_id: i64, message_id: i64) -> Option<MessageEnvelope>;
}
