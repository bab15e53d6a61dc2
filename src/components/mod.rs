//! Reusable UI component modules.

pub mod message_banner;
