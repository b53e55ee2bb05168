// SPDX-FileCopyrightText: 2026 Vigil Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Weighted fusion of the three risk signals into a final score.

/// Weight applied to the audio signal.
pub const AUDIO_WEIGHT: f64 = 0.3;
/// Weight applied to the video signal.
pub const VIDEO_WEIGHT: f64 = 0.3;
/// Weight applied to the contextual signal.
pub const CONTEXT_WEIGHT: f64 = 0.4;

/// Neutral score substituted by callers for signals that never arrived.
pub const NEUTRAL_SCORE: f64 = 0.5;

/// Fuse the three signals into an integer score in `0..=100`.
///
/// Inputs are expected in `[0.0, 1.0]`; validation is the scorer's
/// responsibility, not re-checked here. Rounding uses `f64::round`
/// (half away from zero), so `fuse(0.5, 0.5, 0.5) == 50` exactly.
pub fn fuse(audio: f64, video: f64, context: f64) -> u8 {
    let weighted = audio * AUDIO_WEIGHT + video * VIDEO_WEIGHT + context * CONTEXT_WEIGHT;
    (weighted * 100.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neutral_inputs_fuse_to_fifty() {
        assert_eq!(fuse(0.5, 0.5, 0.5), 50);
    }

    #[test]
    fn extremes_fuse_to_bounds() {
        assert_eq!(fuse(1.0, 1.0, 1.0), 100);
        assert_eq!(fuse(0.0, 0.0, 0.0), 0);
    }

    #[test]
    fn context_carries_the_heavier_weight() {
        // 0.8*0.3 + 0.6*0.3 + 0.9*0.4 = 0.78
        assert_eq!(fuse(0.8, 0.6, 0.9), 78);
        // Swapping context with audio changes the result.
        assert_eq!(fuse(0.9, 0.6, 0.8), 77);
    }

    #[test]
    fn output_stays_in_range_across_a_grid_of_valid_inputs() {
        for a in 0..=10 {
            for v in 0..=10 {
                for c in 0..=10 {
                    let score = fuse(a as f64 / 10.0, v as f64 / 10.0, c as f64 / 10.0);
                    assert!(score <= 100, "fuse({a},{v},{c}) escaped range: {score}");
                }
            }
        }
    }

    #[test]
    fn weights_sum_to_one() {
        assert!((AUDIO_WEIGHT + VIDEO_WEIGHT + CONTEXT_WEIGHT - 1.0).abs() < f64::EPSILON);
    }
}
