// SPDX-FileCopyrightText: 2026 Vigil Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tolerant verdict extraction from free-form model completions.
//!
//! The model is instructed to return only a JSON object, but completions
//! routinely arrive wrapped in commentary, fenced code blocks, or with
//! out-of-range values. This module is a tolerant parser with an explicit
//! fallback: a completion it cannot understand degrades to a neutral
//! verdict instead of failing the invocation. That fail-open policy keeps
//! the pipeline alive at the cost of one neutral signal.

use serde_json::Value;
use tracing::warn;

use vigil_core::types::ContextualVerdict;

/// Probability reported when the model response cannot be parsed.
pub const NEUTRAL_PROBABILITY: f64 = 0.5;

/// Reasoning placeholder when the response parsed but carried none.
pub const DEFAULT_REASONING: &str = "analysis complete";

const PARSE_FAILURE_REASONING: &str = "failed to parse model response";

/// Extract a validated verdict from a raw model completion.
///
/// Never errors: the probability is clamped to `[0.0, 1.0]` and rounded
/// to three decimal digits; anything unparseable yields the neutral
/// default verdict.
pub fn extract_verdict(raw: &str) -> ContextualVerdict {
    match parse_verdict(raw) {
        Some(verdict) => verdict,
        None => {
            warn!(
                completion_chars = raw.chars().count(),
                "could not extract verdict from model response, using neutral default"
            );
            ContextualVerdict {
                scam_probability: NEUTRAL_PROBABILITY,
                reasoning: PARSE_FAILURE_REASONING.to_string(),
            }
        }
    }
}

fn parse_verdict(raw: &str) -> Option<ContextualVerdict> {
    let block = first_json_block(raw)?;
    let value: Value = serde_json::from_str(block).ok()?;
    let probability = coerce_probability(value.get("scam_probability")?)?;
    if !probability.is_finite() {
        return None;
    }
    let clamped = probability.clamp(0.0, 1.0);
    let rounded = (clamped * 1000.0).round() / 1000.0;
    let reasoning = value
        .get("reasoning")
        .and_then(Value::as_str)
        .unwrap_or(DEFAULT_REASONING)
        .to_string();
    Some(ContextualVerdict {
        scam_probability: rounded,
        reasoning,
    })
}

/// Locate the first balanced brace-delimited substring of `raw`.
///
/// Brace depth is tracked outside JSON string literals so reasoning text
/// containing `{` or `}` does not truncate the block.
fn first_json_block(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in raw[start..].char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }
        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&raw[start..start + offset + 1]);
                }
            }
            _ => {}
        }
    }
    None
}

fn coerce_probability(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
