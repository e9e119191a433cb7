//! @-mention detection and effective-text resolution.
//!
//! Decides whether a group message addresses the bot and computes the text
//! that should actually be translated: entity spans stripped first, then any
//! remaining literal `@handle` occurrences, then a reply-to fallback when the
//! remainder carries no word characters.

use crate::detect::has_word_chars;
use crate::types::{ChatKind, MentionKind, MentionSpan, Message};

/// Outcome of resolving a message against the bot identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    /// Whether the bot should act on this message at all. Always true in
    /// private chats; in groups, true only when the bot is mentioned.
    pub addressed: bool,
    /// The effective text to translate, trimmed; `None` when nothing usable
    /// remains.
    pub text: Option<String>,
}

impl Resolved {
    fn not_addressed() -> Self {
        Resolved {
            addressed: false,
            text: None,
        }
    }
}

/// Extracts the UTF-16 slice a span covers, clamped to the text bounds.
fn span_text(units: &[u16], span: &MentionSpan) -> String {
    let start = span.offset.min(units.len());
    let end = span.offset.saturating_add(span.len).min(units.len());
    String::from_utf16_lossy(&units[start..end])
}

/// True if `span` references the bot, either by `@handle` text or by the
/// bot's numeric id.
fn span_is_bot(units: &[u16], span: &MentionSpan, handle: &str, bot_id: i64) -> bool {
    match span.kind {
        MentionKind::User(id) => id == bot_id,
        MentionKind::Handle => {
            let mention = format!("@{}", handle).to_lowercase();
            span_text(units, span).to_lowercase() == mention
        }
    }
}

/// Returns true if the message mentions the bot, via a structured entity or a
/// literal case-insensitive `@handle` substring in the text/caption.
pub fn is_bot_mentioned(message: &Message, handle: &str, bot_id: i64) -> bool {
    let text = match message.text.as_deref() {
        Some(t) => t,
        None => return false,
    };
    let units: Vec<u16> = text.encode_utf16().collect();
    if message
        .mentions
        .iter()
        .any(|span| span_is_bot(&units, span, handle, bot_id))
    {
        return true;
    }
    !handle.is_empty() && text.to_lowercase().contains(&format!("@{}", handle.to_lowercase()))
}

/// Removes the given spans from `text` (UTF-16 offsets): spans are sorted by
/// start offset and the gaps between them concatenated. A span starting
/// before the previous one ended is clamped to the unremoved remainder, so
/// overlapping input cannot duplicate or panic.
fn remove_spans(text: &str, spans: &[&MentionSpan]) -> String {
    let units: Vec<u16> = text.encode_utf16().collect();
    let mut sorted: Vec<&MentionSpan> = spans.to_vec();
    sorted.sort_by_key(|s| s.offset);

    let mut kept: Vec<u16> = Vec::with_capacity(units.len());
    let mut cursor = 0usize;
    for span in sorted {
        let start = span.offset.min(units.len()).max(cursor);
        let end = span.offset.saturating_add(span.len).min(units.len()).max(cursor);
        kept.extend_from_slice(&units[cursor..start]);
        cursor = end;
    }
    kept.extend_from_slice(&units[cursor..]);
    String::from_utf16_lossy(&kept)
}

/// Removes every case-insensitive occurrence of `@handle` from `text`.
/// Handles are ASCII, so the comparison works on byte slices directly.
fn remove_literal_mentions(text: &str, handle: &str) -> String {
    if handle.is_empty() {
        return text.to_string();
    }
    let needle_len = handle.len() + 1;
    let mut out = String::with_capacity(text.len());
    let mut skip_until = 0usize;
    for (i, c) in text.char_indices() {
        if i < skip_until {
            continue;
        }
        if c == '@'
            && i + needle_len <= text.len()
            && text.is_char_boundary(i + needle_len)
            && text[i + 1..i + needle_len].eq_ignore_ascii_case(handle)
        {
            skip_until = i + needle_len;
            continue;
        }
        out.push(c);
    }
    out
}

/// Strips every bot mention from `text`: matching entity spans first, then
/// remaining literal `@handle` substrings. The result is trimmed.
pub fn strip_mentions(text: &str, spans: &[MentionSpan], handle: &str, bot_id: i64) -> String {
    let units: Vec<u16> = text.encode_utf16().collect();
    let bot_spans: Vec<&MentionSpan> = spans
        .iter()
        .filter(|span| span_is_bot(&units, span, handle, bot_id))
        .collect();
    let without_entities = remove_spans(text, &bot_spans);
    remove_literal_mentions(&without_entities, handle)
        .trim()
        .to_string()
}

/// Resolves the effective text to translate for one message.
///
/// - Private chats: the raw text/caption, trimmed; no mention gate.
/// - Groups: requires a bot mention; when mentioned, mentions are stripped
///   and, if the remainder has no letters or digits, the replied-to message's
///   text/caption is used instead.
pub fn resolve_effective_text(message: &Message, handle: &str, bot_id: i64) -> Resolved {
    if message.chat.kind == ChatKind::Private {
        let text = message
            .text
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(String::from);
        return Resolved {
            addressed: true,
            text,
        };
    }

    if !is_bot_mentioned(message, handle, bot_id) {
        return Resolved::not_addressed();
    }

    let raw = message.text.as_deref().unwrap_or("");
    let mut effective = strip_mentions(raw, &message.mentions, handle, bot_id);

    if !has_word_chars(&effective) {
        if let Some(reply) = &message.reply_to {
            if let Some(reply_text) = reply.text.as_deref() {
                effective = reply_text.trim().to_string();
            }
        }
    }

    Resolved {
        addressed: true,
        text: if effective.is_empty() {
            None
        } else {
            Some(effective)
        },
    }
}
