use crate::Color;

pub fn assert_color_almost_equal(c1: &Color, c2: &Color) {
    const EPS: f64 = 1e-9;

    assert!(
        (c1.red - c2.red).abs() < EPS
            && (c1.green - c2.green).abs() < EPS
            && (c1.blue - c2.blue).abs() < EPS,
        "colors differ: {:?} vs {:?}",
        c1,
        c2
    );
}
