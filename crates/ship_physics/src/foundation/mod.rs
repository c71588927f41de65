//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the crate:
//! - Math types and vector helpers
//! - Logging initialization

pub mod math;
pub mod logging;
