// src/main.rs

//! Prints Verilog initializer statements that preload the character-row
//! buffer memory with known test text, so the character renderer can be
//! developed before the host interface exists.

use chrowbuf_gen::{chrow::ChrowBuffer, config::CONFIG, verilog};

use anyhow::Context;
use log::info;
use std::io::{self, BufWriter, Write};

fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries only the generated text.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    info!(
        "Generating initializer for {} ({} cells)",
        CONFIG.array_name,
        CONFIG.capacity()
    );

    let buf = ChrowBuffer::sample().context("Failed to build sample row buffer")?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    verilog::write_init(&mut out, &buf, &CONFIG)?;
    out.flush().context("Failed to flush stdout")?;

    Ok(())
}
