//! Commute notification bot.
//!
//! Takes a message like "Koramangala to Majestic", looks up driving
//! directions, estimates auto, cab and metro fares, and posts the answer
//! to a Telegram chat. One message per invocation.

pub mod bot;
pub mod config;
pub mod directions;
pub mod domain;
pub mod fare;
pub mod message;
pub mod metro;
pub mod telegram;
