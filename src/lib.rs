pub mod ansi;
pub mod blend;
mod helper;
pub mod named;
pub mod parser;
pub mod random;
pub mod score;
mod types;

#[cfg(test)]
mod test_helper;

use std::{fmt, str::FromStr};

pub use blend::{mix_colors, MixError, PROPORTION_TOLERANCE};
pub use score::mix_and_compare;

use helper::MaxPrecision;
use types::Scalar;

/// The representation of a color as it appears in a mix recipe: three RGB
/// channels, each conventionally in the range from 0 to 255.
///
/// Note:
/// - Channel values are not clamped or validated. Blending fractional
///   proportions produces fractional channels, and callers are free to
///   construct out-of-range values; all arithmetic passes them through
///   untouched.
/// - The `PartialEq` instance compares channels exactly, with no tolerance.
///   Two colors that differ in any channel by any amount are unequal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub red: Scalar,
    pub green: Scalar,
    pub blue: Scalar,
}

impl Color {
    #[inline]
    pub fn new(red: Scalar, green: Scalar, blue: Scalar) -> Color {
        Color { red, green, blue }
    }

    /// Create a `Color` from integer RGB values between 0 and 255.
    #[inline]
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Color {
        Color::new(Scalar::from(r), Scalar::from(g), Scalar::from(b))
    }

    /// Create a `Color` from RGB values between 0.0 and 1.0.
    #[inline]
    pub fn from_rgb_float(r: Scalar, g: Scalar, b: Scalar) -> Color {
        Color::new(r * 255.0, g * 255.0, b * 255.0)
    }

    /// Create a gray tone from a lightness value (0.0 is black, 1.0 is white).
    pub fn graytone(lightness: Scalar) -> Color {
        Color::from_rgb_float(lightness, lightness, lightness)
    }

    /// Pure black.
    pub fn black() -> Color {
        Color::from_rgb(0, 0, 0)
    }

    /// Pure white.
    pub fn white() -> Color {
        Color::from_rgb(255, 255, 255)
    }

    /// Red (`#ff0000`)
    pub fn red() -> Color {
        Color::from_rgb(255, 0, 0)
    }

    /// Green (`#008000`)
    pub fn green() -> Color {
        Color::from_rgb(0, 128, 0)
    }

    /// Blue (`#0000ff`)
    pub fn blue() -> Color {
        Color::from_rgb(0, 0, 255)
    }

    /// Yellow (`#ffff00`)
    pub fn yellow() -> Color {
        Color::from_rgb(255, 255, 0)
    }

    /// Fuchsia (`#ff00ff`)
    pub fn fuchsia() -> Color {
        Color::from_rgb(255, 0, 255)
    }

    /// Aqua (`#00ffff`)
    pub fn aqua() -> Color {
        Color::from_rgb(0, 255, 255)
    }

    /// Lime (`#00ff00`)
    pub fn lime() -> Color {
        Color::from_rgb(0, 255, 0)
    }

    /// Maroon (`#800000`)
    pub fn maroon() -> Color {
        Color::from_rgb(128, 0, 0)
    }

    /// Olive (`#808000`)
    pub fn olive() -> Color {
        Color::from_rgb(128, 128, 0)
    }

    /// Navy (`#000080`)
    pub fn navy() -> Color {
        Color::from_rgb(0, 0, 128)
    }

    /// Purple (`#800080`)
    pub fn purple() -> Color {
        Color::from_rgb(128, 0, 128)
    }

    /// Teal (`#008080`)
    pub fn teal() -> Color {
        Color::from_rgb(0, 128, 128)
    }

    /// Silver (`#c0c0c0`)
    pub fn silver() -> Color {
        Color::from_rgb(192, 192, 192)
    }

    /// Gray (`#808080`)
    pub fn gray() -> Color {
        Color::from_rgb(128, 128, 128)
    }

    /// The perceived brightness of the color, on the same 0 to 255 scale as
    /// the channels (for in-range colors).
    ///
    /// See: <https://www.w3.org/TR/AERT#color-contrast>
    pub fn brightness(&self) -> Scalar {
        (299.0 * self.red + 587.0 * self.green + 114.0 * self.blue) / 1000.0
    }

    /// Determine whether a color is perceived as a light color (perceived
    /// brightness is larger than half the channel range).
    pub fn is_light(&self) -> bool {
        self.brightness() > 127.5
    }

    /// Return a readable foreground text color (either `black` or `white`)
    /// for a given background color.
    pub fn text_color(&self) -> Color {
        if self.is_light() {
            Color::black()
        } else {
            Color::white()
        }
    }

    /// The Euclidean distance to another color in RGB space.
    pub fn distance(&self, other: &Color) -> Scalar {
        score::euclidean_distance(self, other)
    }

    /// Format the color as a RGB-representation string (`rgb(255, 127.5, 4)`).
    /// Fractional channels are printed with up to three decimal places.
    pub fn to_rgb_string(&self, format: Format) -> String {
        let space = if format == Format::Spaces { " " } else { "" };
        format!(
            "rgb({r},{space}{g},{space}{b})",
            space = space,
            r = MaxPrecision::wrap(3, self.red),
            g = MaxPrecision::wrap(3, self.green),
            b = MaxPrecision::wrap(3, self.blue),
        )
    }

    /// Format the color as a RGB-representation string (`#fc0070`). Channels
    /// are clamped to the 0 to 255 range and rounded for display.
    pub fn to_rgb_hex_string(&self, leading_hash: bool) -> String {
        fn channel(value: Scalar) -> u8 {
            helper::clamp(0.0, 255.0, value).round() as u8
        }

        format!(
            "{}{:02x}{:02x}{:02x}",
            if leading_hash { "#" } else { "" },
            channel(self.red),
            channel(self.green),
            channel(self.blue),
        )
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_rgb_string(Format::Spaces))
    }
}

impl FromStr for Color {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parser::parse_color(s).ok_or("invalid color string")
    }
}

/// A single entry of a mix recipe: a color paired with its percentage share
/// in the blend. A full recipe is an ordered slice of `ColorMix` values
/// whose proportions are expected to sum to 100 (see [`mix_colors`]).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorMix {
    pub color: Color,
    pub proportion: Scalar,
}

impl ColorMix {
    #[inline]
    pub fn new(color: Color, proportion: Scalar) -> ColorMix {
        ColorMix { color, proportion }
    }
}

impl fmt::Display for ColorMix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}% {}",
            MaxPrecision::wrap(3, self.proportion),
            self.color.to_rgb_string(Format::Spaces)
        )
    }
}

/// Format a recipe in the same syntax accepted by [`parser::parse_recipe`],
/// e.g. `50% rgb(255, 0, 0) + 50% rgb(0, 0, 255)`.
pub fn recipe_to_string(recipe: &[ColorMix], format: Format) -> String {
    recipe
        .iter()
        .map(|mix| {
            format!(
                "{}% {}",
                MaxPrecision::wrap(3, mix.proportion),
                mix.color.to_rgb_string(format)
            )
        })
        .collect::<Vec<_>>()
        .join(" + ")
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Format {
    Spaces,
    NoSpaces,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn color_partial_eq() {
        assert_eq!(Color::new(1.0, 2.0, 3.0), Color::from_rgb(1, 2, 3));
        assert_eq!(Color::red(), Color::new(255.0, 0.0, 0.0));
        assert_eq!(Color::white(), Color::graytone(1.0));

        // equality is exact: any single-channel difference of any magnitude
        // makes two colors unequal
        assert_ne!(Color::new(1.0, 2.0, 3.0), Color::new(1.0000001, 2.0, 3.0));
        assert_ne!(Color::new(1.0, 2.0, 3.0), Color::new(1.0, 2.5, 3.0));
        assert_ne!(Color::new(1.0, 2.0, 3.0), Color::new(1.0, 2.0, -3.0));
    }

    #[test]
    fn from_rgb_float() {
        assert_eq!(Color::white(), Color::from_rgb_float(1.0, 1.0, 1.0));
        assert_eq!(Color::black(), Color::from_rgb_float(0.0, 0.0, 0.0));
        assert_eq!(
            Color::new(127.5, 0.0, 63.75),
            Color::from_rgb_float(0.5, 0.0, 0.25)
        );
    }

    #[test]
    fn brightness() {
        assert_eq!(0.0, Color::black().brightness());
        assert_eq!(255.0, Color::white().brightness());
        assert_relative_eq!(127.5, Color::new(127.5, 127.5, 127.5).brightness());
    }

    #[test]
    fn text_color() {
        assert_eq!(Color::white(), Color::graytone(0.4).text_color());
        assert_eq!(Color::black(), Color::graytone(0.6).text_color());
        assert_eq!(Color::white(), Color::navy().text_color());
        assert_eq!(Color::black(), Color::yellow().text_color());
    }

    #[test]
    fn distance() {
        let c = Color::from_rgb(255, 127, 14);
        assert_eq!(0.0, c.distance(&c));
        assert_relative_eq!(
            441.67,
            Color::black().distance(&Color::white()),
            max_relative = 0.001
        );
    }

    #[test]
    fn to_rgb_string() {
        let c = Color::from_rgb(255, 127, 4);
        assert_eq!("rgb(255, 127, 4)", c.to_rgb_string(Format::Spaces));
        assert_eq!("rgb(255,127,4)", c.to_rgb_string(Format::NoSpaces));

        let blended = Color::new(127.5, 0.0, 63.75);
        assert_eq!(
            "rgb(127.5, 0, 63.75)",
            blended.to_rgb_string(Format::Spaces)
        );
    }

    #[test]
    fn to_rgb_hex_string() {
        let c = Color::from_rgb(255, 127, 4);
        assert_eq!("ff7f04", c.to_rgb_hex_string(false));
        assert_eq!("#ff7f04", c.to_rgb_hex_string(true));

        // out-of-range and fractional channels are clamped and rounded for
        // display only
        let c = Color::new(300.0, -12.0, 127.5);
        assert_eq!("#ff0080", c.to_rgb_hex_string(true));
    }

    #[test]
    fn parse_via_from_str() {
        assert_eq!(Ok(Color::red()), "red".parse::<Color>());
        assert_eq!(Ok(Color::from_rgb(255, 0, 153)), "#ff0099".parse::<Color>());
        assert!("no color".parse::<Color>().is_err());
    }

    #[test]
    fn color_mix_display() {
        let mix = ColorMix::new(Color::red(), 50.0);
        assert_eq!("50% rgb(255, 0, 0)", format!("{}", mix));

        let mix = ColorMix::new(Color::new(127.5, 0.0, 127.5), 33.3);
        assert_eq!("33.3% rgb(127.5, 0, 127.5)", format!("{}", mix));
    }

    #[test]
    fn recipe_to_string_roundtrip() {
        let recipe = vec![
            ColorMix::new(Color::red(), 50.0),
            ColorMix::new(Color::blue(), 50.0),
        ];

        let formatted = recipe_to_string(&recipe, Format::Spaces);
        assert_eq!("50% rgb(255, 0, 0) + 50% rgb(0, 0, 255)", formatted);
        assert_eq!(Some(recipe), parser::parse_recipe(&formatted));
    }
}
