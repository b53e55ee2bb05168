// SPDX-FileCopyrightText: 2026 Vigil Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Content identity derivation from storage keys.
//!
//! Upload keys follow the convention `<prefix>/<owner>/<content-id>/<filename>`.

use crate::types::ContentId;

/// Derive the stable content identifier from a storage key.
///
/// Keys with at least three segments yield their third segment. Shorter
/// keys fall back to the whole key with separators replaced, so the result
/// is always non-empty and separator-free. Pure and total.
pub fn content_id(key: &str) -> ContentId {
    let parts: Vec<&str> = key.split('/').collect();
    if parts.len() >= 3 {
        ContentId(parts[2].to_string())
    } else {
        ContentId(key.replace('/', "-"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conventional_key_yields_third_segment() {
        assert_eq!(
            content_id("uploads/user123/abc-uuid/video.mp4").0,
            "abc-uuid"
        );
    }

    #[test]
    fn single_segment_key_passes_through() {
        assert_eq!(content_id("singlepart").0, "singlepart");
    }

    #[test]
    fn two_segment_key_joins_with_dash() {
        assert_eq!(content_id("uploads/video.mp4").0, "uploads-video.mp4");
    }

    #[test]
    fn extra_segments_do_not_shift_the_id() {
        assert_eq!(
            content_id("uploads/user123/abc-uuid/nested/video.mp4").0,
            "abc-uuid"
        );
    }
}
