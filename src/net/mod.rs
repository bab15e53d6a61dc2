//! Networking modules for the authentication service HTTP API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the two auth calls and classifies their outcomes; `types`
//! defines the wire schema shared with the service.

pub mod api;
pub mod types;
