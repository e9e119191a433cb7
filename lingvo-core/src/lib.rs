//! # lingvo-core
//!
//! Core types and pure logic for the translation relay bot: message and user types,
//! language-direction detection, @-mention resolution, and tracing initialization.
//! Transport-agnostic; used by lingvo-stats, lingvo-translate and lingvo-telegram.

pub mod detect;
pub mod logger;
pub mod mention;
pub mod types;

pub use detect::{detect_direction, has_word_chars, is_emoji_only, Detection, Direction};
pub use logger::init_tracing;
pub use mention::{is_bot_mentioned, resolve_effective_text, strip_mentions, Resolved};
pub use types::{
    Chat, ChatKind, ContentKind, MentionKind, MentionSpan, Message, ReplyContext, ToCoreMessage,
    ToCoreUser, User,
};
