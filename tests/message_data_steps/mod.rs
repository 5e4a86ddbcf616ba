//! Step definitions for message data BDD scenarios.

pub mod given;
pub mod then;
