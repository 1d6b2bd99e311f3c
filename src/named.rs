use once_cell::sync::Lazy;

use crate::score::euclidean_distance;
use crate::Color;

pub struct NamedColor {
    pub name: &'static str,
    pub color: Color,
}

fn named(name: &'static str, r: u8, g: u8, b: u8) -> NamedColor {
    NamedColor {
        name,
        color: Color::from_rgb(r, g, b),
    }
}

/// The 16 CSS basic colors plus a few common paint names.
pub static NAMED_COLORS: Lazy<Vec<NamedColor>> = Lazy::new(|| {
    vec![
        NamedColor {
            name: "black",
            color: Color::black(),
        },
        NamedColor {
            name: "silver",
            color: Color::silver(),
        },
        NamedColor {
            name: "gray",
            color: Color::gray(),
        },
        NamedColor {
            name: "white",
            color: Color::white(),
        },
        NamedColor {
            name: "maroon",
            color: Color::maroon(),
        },
        NamedColor {
            name: "red",
            color: Color::red(),
        },
        NamedColor {
            name: "purple",
            color: Color::purple(),
        },
        NamedColor {
            name: "fuchsia",
            color: Color::fuchsia(),
        },
        NamedColor {
            name: "green",
            color: Color::green(),
        },
        NamedColor {
            name: "lime",
            color: Color::lime(),
        },
        NamedColor {
            name: "olive",
            color: Color::olive(),
        },
        NamedColor {
            name: "yellow",
            color: Color::yellow(),
        },
        NamedColor {
            name: "navy",
            color: Color::navy(),
        },
        NamedColor {
            name: "blue",
            color: Color::blue(),
        },
        NamedColor {
            name: "teal",
            color: Color::teal(),
        },
        NamedColor {
            name: "aqua",
            color: Color::aqua(),
        },
        named("orange", 255, 165, 0),
        named("pink", 255, 192, 203),
        named("brown", 165, 42, 42),
        named("magenta", 255, 0, 255),
        named("cyan", 0, 255, 255),
    ]
});

/// The named color closest to the given color, by Euclidean RGB distance.
/// Ties keep the earlier table entry.
pub fn nearest(color: &Color) -> &'static NamedColor {
    let mut best = &NAMED_COLORS[0];
    let mut best_distance = euclidean_distance(color, &best.color);

    for candidate in NAMED_COLORS.iter().skip(1) {
        let distance = euclidean_distance(color, &candidate.color);
        if distance < best_distance {
            best = candidate;
            best_distance = distance;
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_name() {
        let lookup = |name: &str| {
            NAMED_COLORS
                .iter()
                .find(|nc| nc.name == name)
                .map(|nc| nc.color)
        };

        assert_eq!(Some(Color::red()), lookup("red"));
        assert_eq!(Some(Color::from_rgb(255, 165, 0)), lookup("orange"));
        assert_eq!(None, lookup("whatever"));
    }

    #[test]
    fn nearest_named_color() {
        assert_eq!("red", nearest(&Color::red()).name);
        assert_eq!("red", nearest(&Color::from_rgb(250, 5, 5)).name);
        assert_eq!("black", nearest(&Color::from_rgb(10, 10, 10)).name);

        // fuchsia and magenta share RGB values; the earlier entry wins
        assert_eq!("fuchsia", nearest(&Color::from_rgb(255, 0, 255)).name);
    }
}
