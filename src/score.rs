//! Similarity scoring between two mix recipes.
//!
//! The score blends two signals: how close the *resulting* colors of the two
//! recipes are (Euclidean distance between the blends), and how well the
//! individual recipe entries can be paired up (a greedy one-to-one matching
//! over colors and proportions).

use crate::blend::{mix_colors, MixError, PROPORTION_TOLERANCE};
use crate::types::Scalar;
use crate::{Color, ColorMix};

// Weights of the color vs. proportion part of a single entry pairing.
const ENTRY_COLOR_WEIGHT: Scalar = 0.7;
const ENTRY_PROPORTION_WEIGHT: Scalar = 0.3;

// Weights of the blended-color similarity vs. the entry matching in the
// final score.
const BLEND_WEIGHT: Scalar = 0.6;
const MATCH_WEIGHT: Scalar = 0.4;

/// The Euclidean distance between two colors in RGB space.
pub fn euclidean_distance(a: &Color, b: &Color) -> Scalar {
    Scalar::sqrt(
        (a.red - b.red).powi(2) + (a.green - b.green).powi(2) + (a.blue - b.blue).powi(2),
    )
}

/// Similarity of two colors as a percentage: 100 for identical colors,
/// decreasing linearly with their RGB distance, floored at 0 (the floor can
/// only be reached by out-of-range channel values).
pub fn color_similarity(a: &Color, b: &Color) -> Scalar {
    // maximum possible distance between two in-range colors, ~441.67
    let max_distance = Scalar::sqrt(3.0 * 255.0 * 255.0);
    Scalar::max(0.0, 100.0 * (1.0 - euclidean_distance(a, b) / max_distance))
}

fn is_exact_match(mixes: &[ColorMix], targets: &[ColorMix]) -> bool {
    mixes.len() == targets.len()
        && mixes.iter().zip(targets).all(|(mix, target)| {
            (mix.proportion - target.proportion).abs() < PROPORTION_TOLERANCE
                && mix.color == target.color
        })
}

/// Score (0 to 100) for pairing one recipe entry with one target entry.
fn entry_match_score(mix: &ColorMix, target: &ColorMix) -> Scalar {
    let channel_difference = (mix.color.red - target.color.red).abs()
        + (mix.color.green - target.color.green).abs()
        + (mix.color.blue - target.color.blue).abs();

    let color_score = 1.0 - channel_difference / (255.0 * 3.0);
    let proportion_score = 1.0 - (mix.proportion - target.proportion).abs() / 100.0;

    (color_score * ENTRY_COLOR_WEIGHT + proportion_score * ENTRY_PROPORTION_WEIGHT) * 100.0
}

// Greedily pair every recipe entry with its best-scoring unused target
// entry. The matching is locally greedy in input order, not an optimal
// bipartite assignment; ties keep the first target index. Entries that find
// no positive-scoring unused target contribute nothing, but the sum is
// still divided by the full recipe length, so surplus entries drag the
// score down.
fn greedy_match_score(mixes: &[ColorMix], targets: &[ColorMix]) -> Scalar {
    let mut used = vec![false; targets.len()];
    let mut matched_total = 0.0;

    for mix in mixes {
        let mut best_index = None;
        let mut best_score = 0.0;

        for (index, target) in targets.iter().enumerate() {
            if used[index] {
                continue;
            }
            let score = entry_match_score(mix, target);
            if score > best_score {
                best_index = Some(index);
                best_score = score;
            }
        }

        if let Some(index) = best_index {
            used[index] = true;
            matched_total += best_score;
        }
    }

    matched_total / mixes.len() as Scalar
}

/// Blend both recipes and score their similarity as an integer percentage
/// between 0 and 100.
///
/// Two positionally identical recipes (same length, exactly equal colors,
/// proportions within 0.001 of each other) short-circuit to 100 before any
/// validation. Otherwise both recipes are blended with [`mix_colors`] (an
/// invalid proportion sum on either side fails the whole comparison), and
/// the final score weighs the blended-color similarity at 60% against the
/// greedy entry matching at 40%.
///
/// The entry matching iterates over the first argument, so the score is not
/// symmetric in its arguments.
pub fn mix_and_compare(mixes: &[ColorMix], targets: &[ColorMix]) -> Result<u8, MixError> {
    if is_exact_match(mixes, targets) {
        return Ok(100);
    }

    let mixed = mix_colors(mixes)?;
    let target = mix_colors(targets)?;

    let blend_similarity = color_similarity(&mixed, &target);
    let match_score = greedy_match_score(mixes, targets);

    Ok((blend_similarity * BLEND_WEIGHT + match_score * MATCH_WEIGHT).round() as u8)
}
