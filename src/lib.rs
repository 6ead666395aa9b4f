//! dois-mil (workspace facade crate).
//!
//! Re-exports the workspace crates under short names and hosts the
//! application glue: configuration, logging and the session loop.

pub use dois_mil_core as core;
pub use dois_mil_input as input;
pub use dois_mil_term as term;
pub use dois_mil_types as types;

pub mod app;
pub mod config;
pub mod logging;
