use std::io::Write;

use crate::config::Config;
use crate::error::Result;

use pigmix::named;
use pigmix::{Color, Format};

pub struct Output<'a> {
    pub handle: &'a mut dyn Write,
}

impl Output<'_> {
    pub fn new(handle: &mut dyn Write) -> Output {
        Output { handle }
    }

    pub fn show_color(&mut self, config: &Config, color: &Color) -> Result<()> {
        if config.interactive_mode {
            let swatch = config.brush.paint_on("        ", color);
            writeln!(
                self.handle,
                "{}  {}  {} (~ {})",
                swatch,
                color.to_rgb_string(Format::Spaces),
                color.to_rgb_hex_string(true),
                named::nearest(color).name,
            )?;
        } else {
            writeln!(self.handle, "{}", color.to_rgb_string(Format::NoSpaces))?;
        }

        Ok(())
    }

    pub fn show_score(&mut self, config: &Config, score: u8) -> Result<()> {
        if config.interactive_mode {
            writeln!(self.handle, "Similarity: {} / 100", score)?;
        } else {
            writeln!(self.handle, "{}", score)?;
        }

        Ok(())
    }
}
