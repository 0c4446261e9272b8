//! Corkboard: kanban board state model and reordering engine.
//!
//! This crate is the single source of truth for a client-side task board:
//! fixed workflow columns, task placement and ordering, subtask edits, and
//! the snapshot format used to persist the board between sessions. It is a
//! library consumed by a presentation layer; rendering and gesture tracking
//! live outside this crate.
//!
//! # Architecture
//!
//! Corkboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure board state and transition logic with no
//!   infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (filesystem, memory)
//!
//! # Modules
//!
//! - [`board`]: Board entities, the reordering/mutation engine, snapshot
//!   codec, and the session service that owns the committed board revision

pub mod board;
