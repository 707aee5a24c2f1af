//! Shared data model for the dynamic form application.
//!
//! Everything in this crate is plain Rust with no browser dependency, so the
//! schema model, the change rules and the persistence round trip can be
//! exercised on the host.

pub mod shared;
