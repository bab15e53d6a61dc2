//! UI state types for the login flow.

pub mod flow;
