//! Per-message dispatch: mention gate → detection → translation → stats.
//!
//! One state machine over an incoming message with two terminal outcomes:
//! a reply to send, or no action. Translation failures become a user notice,
//! never an error to the transport; stats persistence is write-through after
//! every mutation.

use std::sync::Arc;

use lingvo_core::{
    detect_direction, has_word_chars, is_emoji_only, resolve_effective_text, ChatKind,
    ContentKind, Message, Resolved,
};
use lingvo_stats::StatsStore;
use lingvo_translate::TranslationService;
use tokio::sync::Mutex;
use tracing::{debug, error, info, instrument};

use crate::messages;

/// Reply content plus the formatting flag; transport is the runner's concern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub html: bool,
}

impl Reply {
    pub fn plain(text: impl Into<String>) -> Self {
        Reply {
            text: text.into(),
            html: false,
        }
    }

    pub fn html(text: impl Into<String>) -> Self {
        Reply {
            text: text.into(),
            html: true,
        }
    }
}

pub struct Dispatcher {
    service: TranslationService,
    stats: Arc<Mutex<StatsStore>>,
    bot_handle: String,
    bot_id: i64,
}

impl Dispatcher {
    pub fn new(
        service: TranslationService,
        stats: Arc<Mutex<StatsStore>>,
        bot_handle: String,
        bot_id: i64,
    ) -> Self {
        Self {
            service,
            stats,
            bot_handle,
            bot_id,
        }
    }

    /// Handles one incoming message; `None` means no action.
    #[instrument(skip(self, message), fields(user_id = message.user.id, chat_id = message.chat.id))]
    pub async fn dispatch(&self, message: &Message) -> Option<Reply> {
        let in_group = message.chat.kind == ChatKind::Group;
        let resolved = resolve_effective_text(message, &self.bot_handle, self.bot_id);

        if message.kind.is_media() {
            return self.dispatch_media(message, in_group, resolved).await;
        }

        if in_group && !resolved.addressed {
            debug!("group message without mention, ignoring");
            return None;
        }

        let text = match resolved.text {
            Some(text) => text,
            None => return Some(Reply::plain(messages::NOTHING_TO_TRANSLATE)),
        };

        if is_emoji_only(&text) {
            self.record(message, ContentKind::Emoji).await;
            return Some(Reply::plain(messages::unsupported_notice(
                ContentKind::Emoji,
            )));
        }

        self.record(message, ContentKind::Text).await;
        Some(self.translate_reply(&text).await)
    }

    /// Media path: an unaddressed group media message is still counted (the
    /// media was "seen"), just not replied to. A usable caption goes through
    /// the normal translation path.
    async fn dispatch_media(
        &self,
        message: &Message,
        in_group: bool,
        resolved: Resolved,
    ) -> Option<Reply> {
        self.record(message, message.kind).await;

        if in_group && !resolved.addressed {
            debug!(kind = message.kind.label(), "unaddressed group media, counted only");
            return None;
        }

        match resolved.text {
            Some(caption) if has_word_chars(&caption) => {
                Some(self.translate_reply(&caption).await)
            }
            _ => Some(Reply::plain(messages::unsupported_notice(message.kind))),
        }
    }

    async fn translate_reply(&self, text: &str) -> Reply {
        let detection = detect_direction(text);
        info!(
            direction = detection.direction.label(),
            target = detection.target,
            "translating"
        );
        match self.service.translate(text, detection.target).await {
            Ok(translated) => {
                let mut stats = self.stats.lock().await;
                stats.record_translation(detection.direction);
                stats.persist();
                Reply::plain(translated)
            }
            Err(e) => {
                error!(
                    error = %e,
                    direction = detection.direction.label(),
                    "translation failed after all providers"
                );
                Reply::plain(messages::TRANSLATION_UNAVAILABLE)
            }
        }
    }

    async fn record(&self, message: &Message, kind: ContentKind) {
        let mut stats = self.stats.lock().await;
        stats.record_event(&message.user, kind);
        stats.persist();
    }
}
