// src/config.rs

//! Defines the settings that shape the generated initializer block.
//!
//! The generator takes no arguments and reads no files, so `CONFIG` simply
//! holds the defaults below. The struct derives serde traits so the same
//! settings can be described in a file later without changing the emitter.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Process-wide generator settings, built on first access.
pub static CONFIG: Lazy<GeneratorConfig> = Lazy::new(GeneratorConfig::default);

// --- Generator Configuration ---

/// Describes the target memory and the text wrapped around the assignments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Name of the Verilog memory array being initialized.
    pub array_name: String,
    /// Width of the index literal. The memory holds `1 << address_bits` cells.
    pub address_bits: u8,
    /// Width of the value literal.
    pub data_bits: u8,
    /// Name printed in the "Generated by" header line.
    pub generator_name: String,
    /// File type written into the trailing vim modeline.
    pub modeline_filetype: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            array_name: "chrow_data".to_string(),
            address_bits: 8,
            data_bits: 16,
            generator_name: "gen_init_chrowbuf_data.rb".to_string(),
            modeline_filetype: "verilog".to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Number of addressable cells; every one of them gets an assignment.
    pub fn capacity(&self) -> usize {
        1usize << self.address_bits
    }
}
