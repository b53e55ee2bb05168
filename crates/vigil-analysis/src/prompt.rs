// SPDX-FileCopyrightText: 2026 Vigil Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Prompt construction for contextual risk classification.

/// Transcript characters included in the prompt; anything beyond is
/// dropped to keep the request within budget.
pub const MAX_TRANSCRIPT_CHARS: usize = 2000;

/// Build the classification prompt for a transcript.
///
/// The transcript is truncated to [`MAX_TRANSCRIPT_CHARS`] characters on
/// a char boundary before being embedded.
pub fn build_prompt(transcript: &str) -> String {
    let excerpt = truncate_chars(transcript, MAX_TRANSCRIPT_CHARS);
    format!(
        "Analyze the following transcript of a video's audio track and \
assess the probability that the content is a scam. Consider these risk \
categories:\n\
1. Deepfake or synthetic voice impersonation\n\
2. Voice phishing (impersonating banks, government agencies, or family members)\n\
3. Financial scams (investment fraud, urgent money transfer demands)\n\n\
Transcript:\n\
{excerpt}\n\n\
Respond with only a JSON object in this exact format, with no other text:\n\
{{\"scam_probability\": <number between 0.0 and 1.0>, \"reasoning\": \"<one sentence explanation>\"}}"
    )
}

fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
