//! Blending of mix recipes into their resulting color.

use std::error::Error;
use std::fmt;

use crate::types::Scalar;
use crate::{Color, ColorMix};

/// Absolute tolerance for comparing proportion values, in percentage points.
pub const PROPORTION_TOLERANCE: Scalar = 0.001;

// Slack added on top of the tolerance when validating the proportion sum.
// Summing the proportions can land a few ulps beyond the tolerance for a
// recipe declared right at the boundary (e.g. a single 99.999% entry), and
// such a recipe must still validate.
const SUM_SLACK: Scalar = 1e-9;

#[derive(Debug, Clone, PartialEq)]
pub enum MixError {
    /// The proportions of a recipe do not sum up to 100%. Carries the
    /// offending total.
    InvalidProportionSum(Scalar),
}

impl fmt::Display for MixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MixError::InvalidProportionSum(total) => write!(
                f,
                "color proportions must sum up to 100% (they sum up to {}%)",
                total
            ),
        }
    }
}

impl Error for MixError {}

/// Blend a recipe into its resulting color.
///
/// Each channel of the result is the proportion-weighted sum of the
/// corresponding input channels. The proportions must sum up to 100 within
/// an absolute tolerance of 0.001; nothing else is validated. In particular,
/// a negative proportion that is compensated elsewhere still passes the sum
/// check and produces an out-of-range result.
///
/// The blended channels are not rounded, so mixing `rgb(255, 0, 0)` and
/// `rgb(0, 0, 255)` in equal parts yields `rgb(127.5, 0, 127.5)`.
pub fn mix_colors(mixes: &[ColorMix]) -> Result<Color, MixError> {
    let total: Scalar = mixes.iter().map(|mix| mix.proportion).sum();
    if (total - 100.0).abs() > PROPORTION_TOLERANCE + SUM_SLACK {
        return Err(MixError::InvalidProportionSum(total));
    }

    let mut mixed = Color::new(0.0, 0.0, 0.0);
    for mix in mixes {
        mixed.red += mix.color.red * mix.proportion / 100.0;
        mixed.green += mix.color.green * mix.proportion / 100.0;
        mixed.blue += mix.color.blue * mix.proportion / 100.0;
    }

    Ok(mixed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helper::assert_color_almost_equal;

    fn mix(color: Color, proportion: Scalar) -> ColorMix {
        ColorMix::new(color, proportion)
    }

    #[test]
    fn single_full_proportion_returns_the_color() {
        let color = Color::from_rgb(12, 34, 56);
        assert_eq!(Ok(color), mix_colors(&[mix(color, 100.0)]));
    }

    #[test]
    fn equal_parts_blend() {
        let result = mix_colors(&[mix(Color::red(), 50.0), mix(Color::blue(), 50.0)]);
        assert_eq!(Ok(Color::new(127.5, 0.0, 127.5)), result);
    }

    #[test]
    fn weighted_blend() {
        let result = mix_colors(&[
            mix(Color::white(), 25.0),
            mix(Color::black(), 25.0),
            mix(Color::red(), 50.0),
        ]);
        assert_eq!(Ok(Color::new(191.25, 63.75, 63.75)), result);
    }

    #[test]
    fn three_way_blend() {
        let result = mix_colors(&[
            mix(Color::red(), 33.3),
            mix(Color::lime(), 33.3),
            mix(Color::blue(), 33.4),
        ])
        .unwrap();
        assert_color_almost_equal(&Color::new(84.915, 84.915, 85.17), &result);
    }

    #[test]
    fn blended_channels_are_not_rounded() {
        let result = mix_colors(&[mix(Color::from_rgb(1, 0, 0), 50.0), mix(Color::black(), 50.0)]);
        assert_eq!(Ok(Color::new(0.5, 0.0, 0.0)), result);
    }

    #[test]
    fn invalid_proportion_sums_are_rejected() {
        assert!(mix_colors(&[mix(Color::red(), 99.0)]).is_err());
        assert!(mix_colors(&[mix(Color::red(), 101.0)]).is_err());
        assert!(mix_colors(&[mix(Color::red(), 60.0), mix(Color::blue(), 60.0)]).is_err());
        assert!(mix_colors(&[]).is_err());

        let err = mix_colors(&[mix(Color::red(), 120.0)]).unwrap_err();
        assert_eq!(MixError::InvalidProportionSum(120.0), err);
    }

    #[test]
    fn proportion_sum_tolerance_boundary() {
        // within tolerance
        assert!(mix_colors(&[mix(Color::red(), 99.999)]).is_ok());
        assert!(mix_colors(&[mix(Color::red(), 100.001)]).is_ok());
        assert!(mix_colors(&[mix(Color::red(), 60.0), mix(Color::blue(), 39.999)]).is_ok());

        // outside tolerance
        assert!(mix_colors(&[mix(Color::red(), 99.998)]).is_err());
        assert!(mix_colors(&[mix(Color::red(), 100.002)]).is_err());
        assert!(mix_colors(&[mix(Color::red(), 60.0), mix(Color::blue(), 39.998)]).is_err());
    }

    #[test]
    fn negative_proportions_pass_the_sum_check() {
        // A negative proportion compensated by a larger one elsewhere is
        // accepted and produces an out-of-range result.
        let result = mix_colors(&[mix(Color::white(), -50.0), mix(Color::red(), 150.0)]);
        assert_eq!(Ok(Color::new(255.0, -127.5, -127.5)), result);
    }
}
