//! User-facing reply strings. Russian, matching the bot's audience.

use lingvo_core::ContentKind;

pub const GREETING: &str = "Привет! Отправь мне текст — я переведу его на русский или английский.\nВ группах используй: @имябота текст";

pub const NOTHING_TO_TRANSLATE: &str = "Мне нечего переводить.";

pub const TRANSLATION_UNAVAILABLE: &str = "Ошибка перевода. Попробуйте чуть позже.";

pub const STATS_ADMIN_ONLY: &str = "Команда /stats доступна только администраторам.";

/// Russian label for a content kind, as used in the unsupported-content
/// notices and the /stats report.
pub fn kind_ru(kind: ContentKind) -> &'static str {
    match kind {
        ContentKind::Text => "текст",
        ContentKind::Emoji => "эмодзи",
        ContentKind::Photo => "фотографии",
        ContentKind::Video => "видео",
        ContentKind::Document => "документы",
        ContentKind::Audio => "аудио",
        ContentKind::Voice => "голосовые сообщения",
        ContentKind::Animation => "анимации",
        ContentKind::VideoNote => "видеосообщения",
        ContentKind::Sticker => "стикеры",
        ContentKind::Other => "этот тип контента",
    }
}

/// The "I can't handle this yet" notice for a given content kind.
pub fn unsupported_notice(kind: ContentKind) -> String {
    format!("Я пока не умею обрабатывать {}.", kind_ru(kind))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_notice() {
        assert_eq!(
            unsupported_notice(ContentKind::Sticker),
            "Я пока не умею обрабатывать стикеры."
        );
        assert_eq!(
            unsupported_notice(ContentKind::Emoji),
            "Я пока не умею обрабатывать эмодзи."
        );
    }
}
