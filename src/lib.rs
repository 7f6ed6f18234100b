#![allow(clippy::implicit_hasher)]

pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod models;
pub mod path;
pub mod repository;

pub use error::{NetworkError, Result};
