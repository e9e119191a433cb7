//! Core types: user, chat, message, content kinds, and mention spans.

use serde::{Deserialize, Serialize};

/// User identity (id, handle, names).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl User {
    /// Display name built from first/last name; empty when neither is set.
    pub fn display_name(&self) -> String {
        let first = self.first_name.as_deref().unwrap_or("").trim();
        let last = self.last_name.as_deref().unwrap_or("").trim();
        if last.is_empty() {
            first.to_string()
        } else if first.is_empty() {
            last.to_string()
        } else {
            format!("{} {}", first, last)
        }
    }
}

/// Whether a chat is one-on-one or a multi-user group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChatKind {
    Private,
    Group,
}

/// Chat identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
    pub kind: ChatKind,
}

/// Category of a message's payload. `Other` covers payloads the transport
/// delivers that we do not model explicitly; they are still counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    Text,
    Emoji,
    Photo,
    Video,
    Document,
    Audio,
    Voice,
    Animation,
    VideoNote,
    Sticker,
    Other,
}

impl ContentKind {
    /// All kinds, in the order stats reports list them.
    pub const ALL: [ContentKind; 11] = [
        ContentKind::Text,
        ContentKind::Emoji,
        ContentKind::Photo,
        ContentKind::Video,
        ContentKind::Document,
        ContentKind::Audio,
        ContentKind::Voice,
        ContentKind::Animation,
        ContentKind::VideoNote,
        ContentKind::Sticker,
        ContentKind::Other,
    ];

    /// Stable label used as the `by_type` key in the persisted snapshot.
    pub fn label(&self) -> &'static str {
        match self {
            ContentKind::Text => "text",
            ContentKind::Emoji => "emoji",
            ContentKind::Photo => "photo",
            ContentKind::Video => "video",
            ContentKind::Document => "document",
            ContentKind::Audio => "audio",
            ContentKind::Voice => "voice",
            ContentKind::Animation => "animation",
            ContentKind::VideoNote => "video_note",
            ContentKind::Sticker => "sticker",
            ContentKind::Other => "other",
        }
    }

    /// True for the fixed media kinds (everything except plain text/emoji).
    pub fn is_media(&self) -> bool {
        !matches!(self, ContentKind::Text | ContentKind::Emoji)
    }
}

/// What a mention span points at: the bot's handle text or a user id
/// (transports emit the latter for users without a public handle).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MentionKind {
    Handle,
    User(i64),
}

/// A mention entity inside message text. `offset`/`len` are in UTF-16 code
/// units, matching what the Telegram transport reports.
#[derive(Debug, Clone, Copy)]
pub struct MentionSpan {
    pub offset: usize,
    pub len: usize,
    pub kind: MentionKind,
}

/// Text/caption of the message this one replies to, when present.
#[derive(Debug, Clone, Default)]
pub struct ReplyContext {
    pub text: Option<String>,
}

/// A single incoming message with sender, chat context, payload kind,
/// text/caption, mention entities, and optional reply context.
#[derive(Debug, Clone)]
pub struct Message {
    pub id: String,
    pub user: User,
    pub chat: Chat,
    pub thread_id: Option<i32>,
    pub kind: ContentKind,
    /// Text for text messages, caption for media; `None` when the payload
    /// carries neither.
    pub text: Option<String>,
    pub mentions: Vec<MentionSpan>,
    pub reply_to: Option<ReplyContext>,
}

/// Converts a transport-specific user type to core [`User`].
pub trait ToCoreUser: Send + Sync {
    fn to_core(&self) -> User;
}

/// Converts a transport-specific message type to core [`Message`].
pub trait ToCoreMessage: Send + Sync {
    fn to_core(&self) -> Message;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_kind_labels_are_stable() {
        assert_eq!(ContentKind::Text.label(), "text");
        assert_eq!(ContentKind::VideoNote.label(), "video_note");
        assert_eq!(ContentKind::Other.label(), "other");
    }

    #[test]
    fn test_media_kinds() {
        assert!(!ContentKind::Text.is_media());
        assert!(!ContentKind::Emoji.is_media());
        assert!(ContentKind::Sticker.is_media());
        assert!(ContentKind::Other.is_media());
    }

    #[test]
    fn test_display_name() {
        let mut user = User {
            id: 1,
            username: None,
            first_name: Some("Anna".to_string()),
            last_name: Some("Petrova".to_string()),
        };
        assert_eq!(user.display_name(), "Anna Petrova");

        user.last_name = None;
        assert_eq!(user.display_name(), "Anna");

        user.first_name = None;
        assert_eq!(user.display_name(), "");
    }
}
