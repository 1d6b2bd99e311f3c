use nom::branch::alt;
use nom::bytes::complete::*;
use nom::character::complete::*;
use nom::combinator::*;
use nom::error::ErrorKind;
use nom::multi::separated_list1;
use nom::number::complete::double;
use nom::Err;
use nom::IResult;

use crate::named::NAMED_COLORS;
use crate::types::Scalar;
use crate::{Color, ColorMix};

fn hex_to_u8_unsafe(num: &str) -> u8 {
    u8::from_str_radix(num, 16).unwrap()
}

fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color::from_rgb(r, g, b)
}

fn comma_separated(input: &str) -> IResult<&str, &str> {
    let (input, _) = space0(input)?;
    let (input, _) = char(',')(input)?;
    space0(input)
}

fn parse_separator(input: &str) -> IResult<&str, &str> {
    alt((comma_separated, space1))(input)
}

fn opt_hash_char(s: &str) -> IResult<&str, Option<char>> {
    opt(char('#'))(s)
}

fn parse_percentage(input: &str) -> IResult<&str, f64> {
    let (input, percent) = double(input)?;
    let (input, _) = char('%')(input)?;
    Ok((input, percent / 100.))
}

fn parse_hex(input: &str) -> IResult<&str, Color> {
    let (input, _) = opt_hash_char(input)?;
    let (input, hex_chars) = hex_digit1(input)?;
    match hex_chars.len() {
        // RRGGBB
        6 => {
            let r = hex_to_u8_unsafe(&hex_chars[0..2]);
            let g = hex_to_u8_unsafe(&hex_chars[2..4]);
            let b = hex_to_u8_unsafe(&hex_chars[4..6]);
            Ok((input, rgb(r, g, b)))
        }
        // RGB
        3 => {
            let r = hex_to_u8_unsafe(&hex_chars[0..1]);
            let g = hex_to_u8_unsafe(&hex_chars[1..2]);
            let b = hex_to_u8_unsafe(&hex_chars[2..3]);
            let r = r * 16 + r;
            let g = g * 16 + g;
            let b = b * 16 + b;
            Ok((input, rgb(r, g, b)))
        }
        _ => Err(Err::Error(nom::error::Error::new(
            "Expected hex string of 3 or 6 characters length",
            ErrorKind::Many1,
        ))),
    }
}

fn parse_numeric_rgb(input: &str) -> IResult<&str, Color> {
    let (input, prefixed) = opt(tag("rgb("))(input)?;
    let is_prefixed = prefixed.is_some();
    let (input, _) = space0(input)?;
    let (input, r) = double(input)?;
    let (input, _) = parse_separator(input)?;
    let (input, g) = double(input)?;
    let (input, _) = parse_separator(input)?;
    let (input, b) = double(input)?;
    let (input, _) = space0(input)?;
    let (input, _) = cond(is_prefixed, char(')'))(input)?;

    // channel values are taken as-is, without clamping
    let c = Color::new(r, g, b);

    Ok((input, c))
}

fn parse_css_numeric_rgb(input: &str) -> IResult<&str, Color> {
    let (input, _) = tag_no_case("rgb(")(input)?;
    let (input, _) = space0(input)?;
    let (input, r) = double(input)?;
    let (input, _) = space1(input)?;
    let (input, g) = double(input)?;
    let (input, _) = space1(input)?;
    let (input, b) = double(input)?;
    let (input, _) = space0(input)?;
    let (input, _) = char(')')(input)?;

    let c = Color::new(r, g, b);

    Ok((input, c))
}

fn parse_percentage_rgb(input: &str) -> IResult<&str, Color> {
    let (input, prefixed) = opt(tag("rgb("))(input)?;
    let is_prefixed = prefixed.is_some();
    let (input, _) = space0(input)?;
    let (input, r) = parse_percentage(input)?;
    let (input, _) = parse_separator(input)?;
    let (input, g) = parse_percentage(input)?;
    let (input, _) = parse_separator(input)?;
    let (input, b) = parse_percentage(input)?;
    let (input, _) = space0(input)?;
    let (input, _) = cond(is_prefixed, char(')'))(input)?;

    let c = Color::from_rgb_float(r, g, b);

    Ok((input, c))
}

fn parse_css_percentage_rgb(input: &str) -> IResult<&str, Color> {
    let (input, _) = tag_no_case("rgb(")(input)?;
    let (input, _) = space0(input)?;
    let (input, r) = parse_percentage(input)?;
    let (input, _) = space1(input)?;
    let (input, g) = parse_percentage(input)?;
    let (input, _) = space1(input)?;
    let (input, b) = parse_percentage(input)?;
    let (input, _) = space0(input)?;
    let (input, _) = char(')')(input)?;

    let c = Color::from_rgb_float(r, g, b);

    Ok((input, c))
}

fn parse_gray(input: &str) -> IResult<&str, Color> {
    let (input, _) = tag("gray(")(input)?;
    let (input, _) = space0(input)?;
    let (input, g) = verify(alt((parse_percentage, double)), |&d| d >= 0.)(input)?;
    let (input, _) = space0(input)?;
    let (input, _) = char(')')(input)?;

    let c = Color::graytone(g);

    Ok((input, c))
}

fn parse_named(input: &str) -> IResult<&str, Color> {
    let (input, color) = all_consuming(alpha1)(input)?;
    let nc = NAMED_COLORS
        .iter()
        .find(|nc| color.to_lowercase() == nc.name);

    match nc {
        None => Err(Err::Error(nom::error::Error::new(
            "Couldn't find matching named color",
            ErrorKind::Alpha,
        ))),
        Some(nc) => Ok((input, nc.color)),
    }
}

pub fn parse_color(input: &str) -> Option<Color> {
    alt((
        all_consuming(parse_hex),
        all_consuming(parse_css_numeric_rgb),
        all_consuming(parse_css_percentage_rgb),
        all_consuming(parse_numeric_rgb),
        all_consuming(parse_percentage_rgb),
        all_consuming(parse_gray),
        all_consuming(parse_named),
    ))(input.trim())
    .ok()
    .map(|(_, c)| c)
}

fn parse_proportion(input: &str) -> IResult<&str, Scalar> {
    let (input, proportion) = double(input)?;
    let (input, _) = char('%')(input)?;
    Ok((input, proportion))
}

fn parse_recipe_entry(input: &str) -> IResult<&str, ColorMix> {
    let (input, _) = space0(input)?;
    let (input, proportion) = parse_proportion(input)?;
    let (input, _) = space1(input)?;
    let (input, color_text) = is_not("+")(input)?;

    match parse_color(color_text) {
        Some(color) => Ok((input, ColorMix::new(color, proportion))),
        None => Err(Err::Error(nom::error::Error::new(color_text, ErrorKind::MapOpt))),
    }
}

/// Parse a recipe string: one or more `<proportion>% <color>` entries joined
/// by `+`, e.g. `50% red + 50% rgb(0, 0, 255)`.
///
/// The proportions are not validated here; a recipe whose proportions do not
/// sum up to 100 parses fine and is only rejected by
/// [`mix_colors`](crate::mix_colors).
pub fn parse_recipe(input: &str) -> Option<Vec<ColorMix>> {
    all_consuming(separated_list1(char('+'), parse_recipe_entry))(input.trim())
        .ok()
        .map(|(_, recipe)| recipe)
}

#[test]
fn parse_rgb_hex_syntax() {
    assert_eq!(Some(rgb(255, 0, 153)), parse_color("f09"));
    assert_eq!(Some(rgb(255, 0, 153)), parse_color("#f09"));
    assert_eq!(Some(rgb(255, 0, 153)), parse_color("#F09"));

    assert_eq!(Some(rgb(255, 0, 153)), parse_color("#ff0099"));
    assert_eq!(Some(rgb(255, 0, 153)), parse_color("#FF0099"));
    assert_eq!(Some(rgb(255, 0, 153)), parse_color("ff0099"));

    assert_eq!(Some(rgb(87, 166, 206)), parse_color("57A6CE"));
    assert_eq!(Some(rgb(255, 0, 119)), parse_color("  #ff0077  "));

    assert_eq!(None, parse_color("#1"));
    assert_eq!(None, parse_color("#12"));
    assert_eq!(None, parse_color("#12345"));
    assert_eq!(None, parse_color("#1234567"));
    assert_eq!(None, parse_color("#hh0033"));
    assert_eq!(None, parse_color("#h03"));

    // the color model carries no alpha channel, so hex alpha forms are
    // rejected
    assert_eq!(None, parse_color("#ff009980"));
    assert_eq!(None, parse_color("#f098"));
}

#[test]
fn parse_rgb_functional_syntax() {
    assert_eq!(Some(rgb(255, 0, 153)), parse_color("rgb(255,0,153)"));
    assert_eq!(Some(rgb(255, 0, 153)), parse_color("rgb(255, 0, 153)"));
    assert_eq!(Some(rgb(255, 0, 153)), parse_color("rgb( 255 , 0 , 153 )"));
    assert_eq!(Some(rgb(255, 0, 153)), parse_color("rgb(255, 0, 153.0)"));
    assert_eq!(Some(rgb(255, 0, 153)), parse_color("rgb(255 0 153)"));

    assert_eq!(
        Some(rgb(255, 8, 119)),
        parse_color("  rgb( 255  ,  8  ,  119 )  ")
    );

    assert_eq!(Some(rgb(255, 0, 153)), parse_color("rgb(100%,0%,60%)"));
    assert_eq!(Some(rgb(255, 0, 153)), parse_color("rgb(100%, 0%, 60%)"));
    assert_eq!(
        Some(rgb(255, 0, 153)),
        parse_color("rgb( 100% , 0% , 60% )")
    );
    // percentage channels are scaled to the 0 to 255 range, keeping
    // fractional values
    assert_eq!(
        Some(Color::new(191.25, 63.75, 0.0)),
        parse_color("rgb(75%,25%,0%)")
    );

    assert_eq!(
        Some(Color::new(100.0, 5.0, 0.5)),
        parse_color("rgb(1e2, .5e1, .5e0)")
    );

    assert_eq!(None, parse_color("rgb(255,0)"));
    assert_eq!(None, parse_color("rgb(255,0,0"));
    assert_eq!(None, parse_color("rgb (256,0,0)"));
    assert_eq!(None, parse_color("rgb(100%,0,0)"));
    assert_eq!(None, parse_color("rgb(2550119)"));

    // no alpha channel in the data model
    assert_eq!(None, parse_color("rgb(10,0,0,1)"));
    assert_eq!(None, parse_color("rgba(10,0,0)"));
}

#[test]
fn parse_css_rgb_syntax() {
    assert_eq!(Some(rgb(255, 0, 153)), parse_color("rgb(255 0 153)"));
    assert_eq!(Some(rgb(255, 0, 153)), parse_color("rgb( 255  0  153 )"));
    assert_eq!(Some(rgb(255, 0, 153)), parse_color("rgb(255 0 153.0)"));

    assert_eq!(
        Some(rgb(255, 8, 119)),
        parse_color("  rgb( 255    8    119 )  ")
    );

    assert_eq!(Some(rgb(255, 0, 153)), parse_color("rgb(100% 0% 60%)"));
    assert_eq!(Some(rgb(255, 0, 153)), parse_color("rgb( 100%   0%  60% )"));

    // function name is case-insensitive
    assert_eq!(Some(rgb(255, 0, 153)), parse_color("RGB(255 0 153)"));

    assert_eq!(None, parse_color("rgb(255 0)"));
    assert_eq!(None, parse_color("rgb(255 0 0"));
    assert_eq!(None, parse_color("rgb(100% 0 0)"));
}

#[test]
fn parse_rgb_standalone_syntax() {
    assert_eq!(Some(rgb(255, 0, 153)), parse_color("255,0,153"));
    assert_eq!(Some(rgb(255, 0, 153)), parse_color("255, 0, 153"));
    assert_eq!(
        Some(rgb(255, 0, 153)),
        parse_color("  255  ,  0  ,  153   ")
    );
    assert_eq!(Some(rgb(255, 0, 153)), parse_color("255 0 153"));
    assert_eq!(Some(rgb(255, 0, 153)), parse_color("255 0 153.0"));

    assert_eq!(Some(rgb(1, 2, 3)), parse_color("1,2,3"));
}

#[test]
fn parse_lenient_out_of_range_channels() {
    // channel values outside [0, 255] are passed through untouched
    assert_eq!(Some(Color::new(300.0, 0.0, 0.0)), parse_color("rgb(300,0,0)"));
    assert_eq!(Some(Color::new(256.0, 0.0, 0.0)), parse_color("256,0,0"));
    assert_eq!(
        Some(Color::new(-10.0, 0.0, 500.0)),
        parse_color("rgb(-10, 0, 500)")
    );

    // fractional channels survive as well
    assert_eq!(
        Some(Color::new(127.5, 0.0, 127.5)),
        parse_color("rgb(127.5, 0, 127.5)")
    );
}

#[test]
fn parse_gray_syntax() {
    assert_eq!(Some(Color::graytone(0.2)), parse_color("gray(0.2)"));
    assert_eq!(Some(Color::black()), parse_color("gray(0.0)"));
    assert_eq!(Some(Color::black()), parse_color("gray(0)"));
    assert_eq!(Some(Color::white()), parse_color("gray(1.0)"));
    assert_eq!(Some(Color::white()), parse_color("gray(1)"));

    assert_eq!(Some(Color::graytone(0.32)), parse_color("gray(.32)"));

    assert_eq!(
        Some(Color::graytone(0.41)),
        parse_color("  gray(  0.41   ) ")
    );

    assert_eq!(Some(Color::graytone(0.2)), parse_color("gray(20%)"));
    assert_eq!(Some(Color::black()), parse_color("gray(0%)"));
    assert_eq!(Some(Color::white()), parse_color("gray(100%)"));
    assert_eq!(Some(Color::graytone(0.5)), parse_color("gray(50%)"));

    assert_eq!(None, parse_color("gray(-1)"));
    assert_eq!(None, parse_color("gray(-1%)"));
}

#[test]
fn parse_named_syntax() {
    assert_eq!(Some(Color::black()), parse_color("black"));
    assert_eq!(Some(Color::blue()), parse_color("blue"));
    assert_eq!(Some(Color::blue()), parse_color("Blue"));
    assert_eq!(Some(Color::blue()), parse_color("BLUE"));
    assert_eq!(Some(rgb(255, 165, 0)), parse_color("orange"));
    assert_eq!(None, parse_color("whatever"));
    assert_eq!(None, parse_color("red blue"));
}

#[test]
fn parse_recipe_syntax() {
    assert_eq!(
        Some(vec![
            ColorMix::new(Color::red(), 50.0),
            ColorMix::new(Color::blue(), 50.0),
        ]),
        parse_recipe("50% red + 50% blue")
    );

    assert_eq!(
        Some(vec![
            ColorMix::new(Color::red(), 50.0),
            ColorMix::new(Color::blue(), 50.0),
        ]),
        parse_recipe("  50%   red   +   50%   rgb(0, 0, 255)  ")
    );

    assert_eq!(
        Some(vec![ColorMix::new(rgb(255, 0, 153), 100.0)]),
        parse_recipe("100% #ff0099")
    );

    assert_eq!(
        Some(vec![
            ColorMix::new(Color::white(), 33.3),
            ColorMix::new(Color::black(), 66.7),
        ]),
        parse_recipe("33.3% white + 66.7% black")
    );

    assert_eq!(
        Some(vec![
            ColorMix::new(Color::new(127.5, 0.0, 127.5), 25.0),
            ColorMix::new(Color::graytone(0.5), 75.0),
        ]),
        parse_recipe("25% rgb(127.5, 0, 127.5) + 75% gray(50%)")
    );
}

#[test]
fn parse_recipe_does_not_validate_proportions() {
    // the 100% sum invariant is checked when blending, not when parsing
    assert_eq!(
        Some(vec![
            ColorMix::new(Color::red(), 90.0),
            ColorMix::new(Color::blue(), 90.0),
        ]),
        parse_recipe("90% red + 90% blue")
    );
    assert_eq!(
        Some(vec![ColorMix::new(Color::red(), -10.0)]),
        parse_recipe("-10% red")
    );
}

#[test]
fn parse_recipe_rejects_malformed_input() {
    assert_eq!(None, parse_recipe(""));
    assert_eq!(None, parse_recipe("red + blue"));
    assert_eq!(None, parse_recipe("50 red + 50 blue"));
    assert_eq!(None, parse_recipe("50% + 50% blue"));
    assert_eq!(None, parse_recipe("50% notacolor + 50% red"));
    assert_eq!(None, parse_recipe("50% red +"));
    assert_eq!(None, parse_recipe("+ 50% red"));
    assert_eq!(None, parse_recipe("50%red"));
}
