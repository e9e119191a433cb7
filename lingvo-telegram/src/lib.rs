//! # lingvo-telegram
//!
//! Telegram surface of the translation relay: teloxide adapters to core
//! types, the per-message [`Dispatcher`], command reports, config, and the
//! REPL runner.

pub mod adapters;
pub mod config;
pub mod dispatcher;
pub mod messages;
pub mod report;
pub mod runner;

pub use adapters::{TelegramMessageWrapper, TelegramUserWrapper};
pub use config::BotConfig;
pub use dispatcher::{Dispatcher, Reply};
pub use runner::run_bot;
