//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate pure logic from page and component rendering so it
//! can be unit-tested natively.

pub mod validate;
