pub mod cli;
pub mod config;
pub mod error;
pub mod manifest;
pub mod outcome;
pub mod ui;
pub mod version;

pub use error::{BumpError, Result};
