//! Terminal rendering of colors via ANSI escape sequences.

use crate::helper::clamp;
use crate::Color;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Mode {
    /// 24-bit true color escape sequences.
    TrueColor,
    /// 8-bit mode: colors are quantized to the 6x6x6 ANSI color cube.
    Ansi8Bit,
}

fn quantize(color: &Color) -> (u8, u8, u8) {
    let channel = |value| clamp(0.0, 255.0, value).round() as u8;
    (
        channel(color.red),
        channel(color.green),
        channel(color.blue),
    )
}

impl Color {
    /// The closest 8-bit ANSI color code (a position in the 6x6x6 cube of
    /// the 256-color palette).
    pub fn to_ansi_8bit(&self) -> u8 {
        let (r, g, b) = quantize(self);
        let cube = |c: u8| (f64::from(c) / 255.0 * 5.0).round() as u8;
        16 + 36 * cube(r) + 6 * cube(g) + cube(b)
    }

    /// The ANSI escape sequence that sets the foreground to this color.
    pub fn to_ansi_sequence(&self, mode: Mode) -> String {
        match mode {
            Mode::TrueColor => {
                let (r, g, b) = quantize(self);
                format!("\x1b[38;2;{};{};{}m", r, g, b)
            }
            Mode::Ansi8Bit => format!("\x1b[38;5;{}m", self.to_ansi_8bit()),
        }
    }
}

/// A `Brush` paints strings with ANSI escape sequences, or passes them
/// through unchanged when coloring is disabled.
#[derive(Debug, Clone, Copy)]
pub struct Brush {
    mode: Option<Mode>,
}

impl Brush {
    pub fn from_mode(mode: Option<Mode>) -> Self {
        Brush { mode }
    }

    /// Paint the foreground of the given text.
    pub fn paint<S: AsRef<str>>(self, text: S, foreground: &Color) -> String {
        match self.mode {
            Some(mode) => format!(
                "{}{}\x1b[0m",
                foreground.to_ansi_sequence(mode),
                text.as_ref()
            ),
            None => text.as_ref().to_string(),
        }
    }

    /// Paint the given text on a colored background, choosing a readable
    /// foreground color automatically.
    pub fn paint_on<S: AsRef<str>>(self, text: S, background: &Color) -> String {
        let mode = match self.mode {
            Some(mode) => mode,
            None => return text.as_ref().to_string(),
        };

        let background_sequence = match mode {
            Mode::TrueColor => {
                let (r, g, b) = quantize(background);
                format!("\x1b[48;2;{};{};{}m", r, g, b)
            }
            Mode::Ansi8Bit => format!("\x1b[48;5;{}m", background.to_ansi_8bit()),
        };

        format!(
            "{}{}{}\x1b[0m",
            background.text_color().to_ansi_sequence(mode),
            background_sequence,
            text.as_ref()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_ansi_8bit() {
        assert_eq!(16, Color::black().to_ansi_8bit());
        assert_eq!(231, Color::white().to_ansi_8bit());
        assert_eq!(196, Color::red().to_ansi_8bit());
        assert_eq!(46, Color::lime().to_ansi_8bit());
        assert_eq!(21, Color::blue().to_ansi_8bit());
    }

    #[test]
    fn to_ansi_sequence() {
        assert_eq!(
            "\x1b[38;2;255;0;0m",
            Color::red().to_ansi_sequence(Mode::TrueColor)
        );
        assert_eq!(
            "\x1b[38;5;196m",
            Color::red().to_ansi_sequence(Mode::Ansi8Bit)
        );

        // fractional channels are rounded for rendering
        assert_eq!(
            "\x1b[38;2;128;0;128m",
            Color::new(127.5, 0.0, 127.5).to_ansi_sequence(Mode::TrueColor)
        );
    }

    #[test]
    fn paint() {
        let brush = Brush::from_mode(Some(Mode::TrueColor));
        assert_eq!(
            "\x1b[38;2;255;0;0mhello\x1b[0m",
            brush.paint("hello", &Color::red())
        );

        let plain = Brush::from_mode(None);
        assert_eq!("hello", plain.paint("hello", &Color::red()));
        assert_eq!("hello", plain.paint_on("hello", &Color::red()));
    }
}
