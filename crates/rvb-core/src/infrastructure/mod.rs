//! Infrastructure layer for the builder settings.
//!
//! Contains the file-system facing adapters.
//!
//! **Dependency rule**: this layer may depend on `domain`, but MUST NOT be
//! imported by it.

pub mod storage;
