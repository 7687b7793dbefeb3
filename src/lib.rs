// src/lib.rs

//! Character-row buffer initializer generator.
//!
//! Builds test text with packed color attributes and writes it out as
//! Verilog assignments for the display's row buffer memory.

pub mod attr;
pub mod chrow;
pub mod color;
pub mod config;
pub mod verilog;
