// src/verilog.rs

//! Writes a `ChrowBuffer` out as Verilog memory initializer statements.

use anyhow::{ensure, Context, Result};
use log::{debug, info};
use std::io::Write;

use crate::chrow::ChrowBuffer;
use crate::config::GeneratorConfig;

/// Emits the complete initializer block for `buf`.
///
/// Every index in `0..config.capacity()` gets exactly one assignment, in
/// ascending order. Indices past the end of the buffer are assigned zero.
/// Nothing is written if the buffer holds more cells than the memory.
pub fn write_init<W: Write>(
    out: &mut W,
    buf: &ChrowBuffer,
    config: &GeneratorConfig,
) -> Result<()> {
    let capacity = config.capacity();
    ensure!(
        buf.len() <= capacity,
        "row buffer holds {} cells but {} has only {} entries",
        buf.len(),
        config.array_name,
        capacity
    );

    writeln!(out, "// Generated by {}", config.generator_name).context("Failed to write header")?;
    writeln!(out)?;

    for (index, cell) in buf.cells().enumerate() {
        write_assignment(out, config, index, cell.word())?;
    }
    debug!("Wrote {} text cells", buf.len());

    for index in buf.len()..capacity {
        write_assignment(out, config, index, 0)?;
    }
    debug!("Zero-filled {} cells", capacity - buf.len());

    writeln!(out)?;
    // Split so editors don't take this source line as a modeline.
    writeln!(out, "// {}:ft={}:", "vim", config.modeline_filetype)
        .context("Failed to write modeline")?;

    info!("Generated {} assignments for {}", capacity, config.array_name);
    Ok(())
}

/// Renders the initializer block into a string.
pub fn render_init(buf: &ChrowBuffer, config: &GeneratorConfig) -> Result<String> {
    let mut out = Vec::new();
    write_init(&mut out, buf, config)?;
    String::from_utf8(out).context("Generated initializer is not valid UTF-8")
}

fn write_assignment<W: Write>(
    out: &mut W,
    config: &GeneratorConfig,
    index: usize,
    value: u16,
) -> Result<()> {
    writeln!(
        out,
        "{}[{}'d{}] = {}'d{};",
        config.array_name, config.address_bits, index, config.data_bits, value
    )
    .with_context(|| format!("Failed to write assignment for index {}", index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attr::Attr;
    use crate::config::CONFIG;
    use test_log::test;

    fn sample_output() -> String {
        let buf = ChrowBuffer::sample().unwrap();
        render_init(&buf, &CONFIG).unwrap()
    }

    fn assignments(output: &str) -> Vec<(usize, u32)> {
        output
            .lines()
            .filter(|line| line.starts_with("chrow_data["))
            .map(|line| {
                let index = line["chrow_data[8'd".len()..line.find(']').unwrap()]
                    .parse()
                    .unwrap();
                let value = line[line.find("16'd").unwrap() + 4..line.len() - 1]
                    .parse()
                    .unwrap();
                (index, value)
            })
            .collect()
    }

    #[test]
    fn header_and_trailer_frame_the_assignments() {
        let output = sample_output();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 2 + 256 + 2);
        assert_eq!(lines[0], "// Generated by gen_init_chrowbuf_data.rb");
        assert_eq!(lines[1], "");
        assert_eq!(lines[258], "");
        assert_eq!(lines[259], "// vim:ft=verilog:");
        assert!(output.ends_with(":ft=verilog:\n"));
    }

    #[test]
    fn every_index_appears_once_in_order() {
        let indices: Vec<usize> = assignments(&sample_output())
            .into_iter()
            .map(|(index, _)| index)
            .collect();
        assert_eq!(indices, (0..256).collect::<Vec<_>>());
    }

    #[test]
    fn text_cells_then_zero_fill() {
        let output = sample_output();
        let values = assignments(&output);

        assert!(output.contains("chrow_data[8'd0] = 16'd1857;\n"));
        assert!(output.contains("chrow_data[8'd31] = 16'd65;\n"));
        assert!(output.contains("chrow_data[8'd102] = 16'd18217;\n"));
        assert!(values[..103].iter().all(|&(_, value)| value != 0));
        assert!(values[103..].iter().all(|&(_, value)| value == 0));
    }

    #[test]
    fn output_is_deterministic() {
        assert_eq!(sample_output(), sample_output());
    }

    #[test]
    fn empty_buffer_is_all_zero() {
        let output = render_init(&ChrowBuffer::new(), &CONFIG).unwrap();
        assert!(assignments(&output).iter().all(|&(_, value)| value == 0));
        assert_eq!(assignments(&output).len(), 256);
    }

    #[test]
    fn full_buffer_needs_no_zero_fill() {
        let mut buf = ChrowBuffer::new();
        buf.push_sweep(&"x".repeat(256)).unwrap();

        let values = assignments(&render_init(&buf, &CONFIG).unwrap());
        assert_eq!(values.len(), 256);
        assert_eq!(values[255], (255, (0xFF << 8) | u32::from(b'x')));
    }

    #[test]
    fn overfull_buffer_is_rejected_before_writing() {
        let mut buf = ChrowBuffer::new();
        buf.push_uniform(&"x".repeat(257), Attr::default()).unwrap();

        let mut out = Vec::new();
        let err = write_init(&mut out, &buf, &CONFIG).unwrap_err();
        assert!(err.to_string().contains("257"));
        assert!(out.is_empty());
    }

    #[test]
    fn honors_custom_array_and_widths() {
        let config = GeneratorConfig {
            array_name: "rowmem".to_string(),
            address_bits: 2,
            ..GeneratorConfig::default()
        };
        let mut buf = ChrowBuffer::new();
        buf.push_uniform("A", Attr::pack(0, 1)).unwrap();

        let output = render_init(&buf, &config).unwrap();
        let body: Vec<&str> = output.lines().skip(2).take(4).collect();
        assert_eq!(
            body,
            vec![
                "rowmem[2'd0] = 16'd321;",
                "rowmem[2'd1] = 16'd0;",
                "rowmem[2'd2] = 16'd0;",
                "rowmem[2'd3] = 16'd0;",
            ]
        );
    }
}
