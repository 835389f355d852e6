//! monkeyc-util - Shared foundation for the monkeyc crates.
//!
//! This crate holds the infrastructure the front-end phases have in
//! common. Today that is the diagnostic machinery: the parser records
//! problems here instead of aborting, and the driver decides how to
//! display them after the fact.

pub mod diagnostic;

pub use diagnostic::{Diagnostic, Handler, Level};
