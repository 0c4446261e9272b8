//! Service layer owning the committed board revision.

mod session;

pub use session::{BoardCommand, BoardSession, BoardSessionError, BoardSessionResult};
