pub mod cli;
pub mod config;
pub mod controller;
pub mod errors;
pub mod headless;
pub mod options;
pub mod replay;
pub mod stack;

pub use errors::{NavError, Result};
