//! Converters from teloxide types to core types.

use lingvo_core::{
    Chat, ChatKind, ContentKind, MentionKind, MentionSpan, Message, ReplyContext, ToCoreMessage,
    ToCoreUser, User,
};
use teloxide::types::MessageEntityKind;

/// Telegram user → core [`User`].
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl<'a> ToCoreUser for TelegramUserWrapper<'a> {
    fn to_core(&self) -> User {
        User {
            id: self.0.id.0 as i64,
            username: self.0.username.clone(),
            first_name: Some(self.0.first_name.clone()),
            last_name: self.0.last_name.clone(),
        }
    }
}

/// Telegram message → core [`Message`].
pub struct TelegramMessageWrapper<'a>(pub &'a teloxide::types::Message);

impl<'a> ToCoreMessage for TelegramMessageWrapper<'a> {
    fn to_core(&self) -> Message {
        let msg = self.0;
        Message {
            id: msg.id.to_string(),
            user: msg
                .from
                .as_ref()
                .map(|u| TelegramUserWrapper(u).to_core())
                .unwrap_or_else(|| User {
                    id: 0,
                    username: None,
                    first_name: None,
                    last_name: None,
                }),
            chat: Chat {
                id: msg.chat.id.0,
                kind: if msg.chat.is_private() {
                    ChatKind::Private
                } else {
                    ChatKind::Group
                },
            },
            thread_id: msg.thread_id.map(|t| t.0 .0),
            kind: content_kind(msg),
            text: msg
                .text()
                .or_else(|| msg.caption())
                .map(String::from),
            mentions: mention_spans(msg),
            reply_to: msg.reply_to_message().map(|replied| ReplyContext {
                text: replied
                    .text()
                    .or_else(|| replied.caption())
                    .map(String::from),
            }),
        }
    }
}

/// Maps the Telegram payload onto the fixed content-kind set. Anything not
/// modeled explicitly is counted under `Other` rather than rejected.
fn content_kind(msg: &teloxide::types::Message) -> ContentKind {
    if msg.text().is_some() {
        ContentKind::Text
    } else if msg.photo().is_some() {
        ContentKind::Photo
    } else if msg.video().is_some() {
        ContentKind::Video
    } else if msg.document().is_some() {
        ContentKind::Document
    } else if msg.audio().is_some() {
        ContentKind::Audio
    } else if msg.voice().is_some() {
        ContentKind::Voice
    } else if msg.animation().is_some() {
        ContentKind::Animation
    } else if msg.video_note().is_some() {
        ContentKind::VideoNote
    } else if msg.sticker().is_some() {
        ContentKind::Sticker
    } else {
        ContentKind::Other
    }
}

/// Extracts mention entities (text or caption) as core spans. Offsets stay in
/// UTF-16 code units, as Telegram reports them.
fn mention_spans(msg: &teloxide::types::Message) -> Vec<MentionSpan> {
    let entities = msg
        .entities()
        .or_else(|| msg.caption_entities())
        .unwrap_or_default();
    entities
        .iter()
        .filter_map(|entity| match &entity.kind {
            MessageEntityKind::Mention => Some(MentionSpan {
                offset: entity.offset,
                len: entity.length,
                kind: MentionKind::Handle,
            }),
            MessageEntityKind::TextMention { user } => Some(MentionSpan {
                offset: entity.offset,
                len: entity.length,
                kind: MentionKind::User(user.id.0 as i64),
            }),
            _ => None,
        })
        .collect()
}
