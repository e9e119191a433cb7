//! REPL runner: resolves the bot identity, registers the command menus,
//! builds the dispatcher stack, and drives messages through it sequentially.

use std::sync::Arc;

use anyhow::Result;
use lingvo_core::ToCoreMessage;
use lingvo_stats::StatsStore;
use lingvo_translate::{
    GoogleTranslator, LibreTranslator, RetryPolicy, TranslationService, Translator,
};
use teloxide::payloads::{SendMessageSetters, SetMyCommandsSetters};
use teloxide::prelude::*;
use teloxide::types::{BotCommand, BotCommandScope, Message as TgMessage, ParseMode};
use teloxide::utils::command::BotCommands;
use tokio::sync::Mutex;
use tracing::{error, info};

use crate::adapters::TelegramMessageWrapper;
use crate::config::BotConfig;
use crate::dispatcher::{Dispatcher, Reply};
use crate::{messages, report};

#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase")]
enum Command {
    #[command(description = "начать работу с ботом")]
    Start,
    #[command(description = "количество пользователей")]
    Users,
    #[command(description = "полная статистика (для админов)")]
    Stats,
}

/// Registers the command menu: the full set in private chats, /users only in
/// groups.
async fn register_commands(bot: &Bot) -> Result<()> {
    bot.set_my_commands(vec![
        BotCommand::new("start", "начать работу с ботом"),
        BotCommand::new("users", "количество пользователей"),
        BotCommand::new("stats", "полная статистика (для админов)"),
    ])
    .scope(BotCommandScope::AllPrivateChats)
    .await?;

    bot.set_my_commands(vec![BotCommand::new("users", "количество пользователей")])
        .scope(BotCommandScope::AllGroupChats)
        .await?;

    Ok(())
}

/// Builds everything from config and runs the REPL until the process exits.
pub async fn run_bot(config: BotConfig) -> Result<()> {
    let bot = Bot::new(config.bot_token.clone());
    let me = bot.get_me().await?;
    let bot_handle = me.user.username.clone().unwrap_or_default();
    let bot_id = me.user.id.0 as i64;
    info!(username = %bot_handle, bot_id, "bot identity resolved");

    register_commands(&bot).await?;

    let stats = Arc::new(Mutex::new(StatsStore::open(&config.stats_file)));
    let primary: Arc<dyn Translator> = Arc::new(GoogleTranslator::new(config.translate_timeout)?);
    let fallback: Arc<dyn Translator> = Arc::new(LibreTranslator::new(
        config.libretranslate_url.clone(),
        config.libretranslate_api_key.clone(),
        config.translate_timeout,
    )?);
    let service = TranslationService::with_policy(
        primary,
        fallback,
        RetryPolicy {
            max_attempts: config.translate_retries,
            base_delay: config.translate_backoff,
        },
    );
    let dispatcher = Arc::new(Dispatcher::new(
        service,
        stats.clone(),
        bot_handle.clone(),
        bot_id,
    ));
    let config = Arc::new(config);

    info!("bot started, listening for messages");
    teloxide::repl(bot, move |bot: Bot, msg: TgMessage| {
        let dispatcher = dispatcher.clone();
        let stats = stats.clone();
        let config = config.clone();
        let bot_handle = bot_handle.clone();

        async move {
            handle_update(&bot, &msg, &dispatcher, &stats, &config, &bot_handle).await;
            Ok(())
        }
    })
    .await;

    Ok(())
}

/// Routes one update: commands to their handlers, everything else through the
/// dispatcher. Errors are logged, never propagated into the REPL.
async fn handle_update(
    bot: &Bot,
    msg: &TgMessage,
    dispatcher: &Dispatcher,
    stats: &Mutex<StatsStore>,
    config: &BotConfig,
    bot_handle: &str,
) {
    if let Some(text) = msg.text() {
        if let Ok(command) = Command::parse(text, bot_handle) {
            if let Err(e) = handle_command(bot, msg, command, stats, config).await {
                error!(error = %e, chat_id = msg.chat.id.0, "command handling failed");
            }
            return;
        }
    }

    let core = TelegramMessageWrapper(msg).to_core();
    info!(
        user_id = core.user.id,
        chat_id = core.chat.id,
        kind = core.kind.label(),
        "received message"
    );

    if let Some(reply) = dispatcher.dispatch(&core).await {
        if let Err(e) = send_reply(bot, msg, &reply).await {
            error!(error = %e, chat_id = msg.chat.id.0, "failed to send reply");
        }
    }
}

async fn handle_command(
    bot: &Bot,
    msg: &TgMessage,
    command: Command,
    stats: &Mutex<StatsStore>,
    config: &BotConfig,
) -> ResponseResult<()> {
    let reply = match command {
        Command::Start => Reply::plain(messages::GREETING),
        Command::Users => {
            let stats = stats.lock().await;
            Reply::html(report::users_report(&stats))
        }
        Command::Stats => {
            let username = msg.from.as_ref().and_then(|u| u.username.as_deref());
            if config.is_admin(username) {
                let stats = stats.lock().await;
                Reply::html(report::stats_report(&stats))
            } else {
                Reply::plain(messages::STATS_ADMIN_ONLY)
            }
        }
    };
    send_reply(bot, msg, &reply).await?;
    Ok(())
}

/// Sends a reply into the message's chat, preserving the thread and the
/// formatting flag the dispatcher chose.
async fn send_reply(bot: &Bot, msg: &TgMessage, reply: &Reply) -> ResponseResult<TgMessage> {
    let mut request = bot.send_message(msg.chat.id, reply.text.clone());
    if let Some(thread_id) = msg.thread_id {
        request = request.message_thread_id(thread_id);
    }
    if reply.html {
        request = request.parse_mode(ParseMode::Html);
    }
    request.await
}
