pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod manifest;
pub mod rewrite;
pub mod ui;
pub mod warning;

pub use error::{PleasingError, Result};
