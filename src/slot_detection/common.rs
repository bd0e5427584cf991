//! Common utilities module
//!
//! This module contains shared utilities used across slot detection.

pub mod error;

pub use error::{DetectionError, Result};
