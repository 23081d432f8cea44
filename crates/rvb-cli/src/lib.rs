//! rvb-cli library entry point.
//!
//! Re-exports the argument model and command dispatch so that integration
//! tests in `tests/` and the binary in `main.rs` share the same module tree.

pub mod cli;
pub mod commands;
