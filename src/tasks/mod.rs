//! Background Tasks Module
//!
//! Long-running tasks that react to signals from outside the process.
//!
//! # Tasks
//! - Session invalidation: drops the cached identity on sign-in/sign-out

mod invalidation;

pub use invalidation::{spawn_invalidation_task, SessionEvent};
