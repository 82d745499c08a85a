//! Command implementations, one module per CLI subcommand.

pub mod convert;
pub mod invert;
pub mod sizes;
pub mod stats;
pub mod validate;
