//! Query-string forms accepted by the dashboard routes.
//!
//! Everything here is lenient: values that do not parse or validate are
//! dropped so the screen falls back to its defaults instead of failing.

pub mod call;
pub mod list;
