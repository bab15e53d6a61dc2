//! Page modules for screen-level flows.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its flow orchestration and delegates shared rendering
//! details to `components`.

pub mod login;
