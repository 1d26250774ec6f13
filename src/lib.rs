pub mod config;
pub mod domain;
pub mod error;
pub mod git_ops;
pub mod manifest;
pub mod release;
pub mod shell;
pub mod ui;

pub use error::{ReleaseError, Result};
