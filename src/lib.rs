pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod message;
pub mod resolver;
pub mod ui;

pub use error::{Result, TagReleaseError};
