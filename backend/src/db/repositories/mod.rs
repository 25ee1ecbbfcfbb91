//! Repository implementations module.
//!
//! - `local`: In-memory implementation seeded from configuration, used by the
//!   command-line runner and tests

pub mod local;

pub use local::LocalRepository;
