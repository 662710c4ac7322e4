//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file for better maintainability.

pub mod temperature;
pub mod time;

pub use temperature::{Reading, TemperatureParams, TemperatureTool};
pub use time::{TimeOffset, TimeParams, TimeTool};
