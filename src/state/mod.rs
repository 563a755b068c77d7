//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `ui`) so pages and components can
//! depend on small focused models. `session` is the only module that
//! touches browser storage.

pub mod session;
pub mod ui;
