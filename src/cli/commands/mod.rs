//! CLI command implementations
//!
//! This module contains all CLI command implementations.

pub mod domains;
pub mod generate;
pub mod init;
pub mod preview;
pub mod validate;
