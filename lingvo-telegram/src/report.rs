//! HTML report builders for the /users and /stats commands.
//!
//! Pure functions over the stats store so they are testable without a
//! transport.

use lingvo_core::ContentKind;
use lingvo_stats::StatsStore;

/// Unique-user summary shown to everyone via /users.
pub fn users_report(store: &StatsStore) -> String {
    let all_time = store.snapshot().users.len();
    format!(
        "👥 Уникальные пользователи\n\
         • За всё время: <b>{}</b>\n\
         • За 30 дней: <b>{}</b>\n\
         • За 7 дней: <b>{}</b>\n\
         • За сегодня: <b>{}</b>",
        all_time,
        store.unique_users_in_range(30),
        store.unique_users_in_range(7),
        store.unique_users_in_range(1),
    )
}

/// Top users by all-time message count, highest first, capped at `limit`.
fn top_users(store: &StatsStore, limit: usize) -> Vec<(String, u64)> {
    let mut counts: Vec<(String, u64)> = store
        .snapshot()
        .users
        .iter()
        .map(|(uid, count)| (uid.clone(), *count))
        .collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    counts.truncate(limit);
    counts
}

/// Full statistics report for admins via /stats.
pub fn stats_report(store: &StatsStore) -> String {
    let s = store.snapshot();
    let by_type = |kind: ContentKind| s.by_type.get(kind.label()).copied().unwrap_or(0);
    let translations = |label: &str| s.translations.get(label).copied().unwrap_or(0);

    let top_lines: Vec<String> = top_users(store, 10)
        .into_iter()
        .map(|(uid, count)| format!("• {} — {}", store.pretty_name(&uid), count))
        .collect();
    let top = if top_lines.is_empty() {
        "—".to_string()
    } else {
        top_lines.join("\n")
    };

    format!(
        "📊 <b>Статистика бота</b>\n\
         Всего сообщений: <b>{total}</b>\n\n\
         <b>Пользователи</b>\n\
         • За всё время: <b>{all_time}</b>\n\
         • За 30 дней: <b>{d30}</b>\n\
         • За 7 дней: <b>{d7}</b>\n\
         • За сегодня: <b>{d1}</b>\n\n\
         <b>По типам</b>\n\
         • текст: {text}\n\
         • эмодзи: {emoji}\n\
         • фотографии: {photo}\n\
         • видео: {video}\n\
         • документы: {document}\n\
         • аудио: {audio}\n\
         • голосовые: {voice}\n\
         • анимации: {animation}\n\
         • видеосообщения: {video_note}\n\
         • стикеры: {sticker}\n\n\
         <b>Переводы</b>\n\
         • RU → EN: {ru_to_en}\n\
         • EN → RU: {en_to_ru}\n\
         • другие: {other}\n\n\
         <b>Топ пользователей</b> (10):\n{top}",
        total = s.messages_total,
        all_time = s.users.len(),
        d30 = store.unique_users_in_range(30),
        d7 = store.unique_users_in_range(7),
        d1 = store.unique_users_in_range(1),
        text = by_type(ContentKind::Text),
        emoji = by_type(ContentKind::Emoji),
        photo = by_type(ContentKind::Photo),
        video = by_type(ContentKind::Video),
        document = by_type(ContentKind::Document),
        audio = by_type(ContentKind::Audio),
        voice = by_type(ContentKind::Voice),
        animation = by_type(ContentKind::Animation),
        video_note = by_type(ContentKind::VideoNote),
        sticker = by_type(ContentKind::Sticker),
        ru_to_en = translations("ru_to_en"),
        en_to_ru = translations("en_to_ru"),
        other = translations("other"),
        top = top,
    )
}
