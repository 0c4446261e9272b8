//! Step definitions for board reordering BDD scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
