//! cluster.rs - Grapheme-aware detection and replacement of "zalgo" clusters.
//!
//! Input text is segmented into extended grapheme clusters (UAX #29). A cluster
//! whose combining-mark count exceeds the configured threshold is replaced by a
//! single replacement marker; every other cluster is copied through byte for
//! byte. Multi-scalar emoji sequences contain at most a variation selector or
//! two, so they never reach the threshold.
//!
//! License: MIT OR APACHE 2.0

use log::debug;
use serde::{Deserialize, Serialize};
use unicode_normalization::char::is_combining_mark;
use unicode_segmentation::UnicodeSegmentation;

use crate::errors::GlyphGuardError;

/// Clusters with strictly more combining marks than this are excessive.
pub const DEFAULT_COMBINING_MARK_THRESHOLD: usize = 8;

/// U+FFFD REPLACEMENT CHARACTER.
pub const DEFAULT_REPLACEMENT_MARKER: char = '\u{FFFD}';

/// Tuning knobs for [`ClusterSanitizer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SanitizerOptions {
    /// Maximum number of combining marks a single cluster may carry.
    pub combining_mark_threshold: usize,
    /// The scalar emitted in place of each excessive cluster.
    pub replacement_marker: char,
}

impl Default for SanitizerOptions {
    fn default() -> Self {
        Self {
            combining_mark_threshold: DEFAULT_COMBINING_MARK_THRESHOLD,
            replacement_marker: DEFAULT_REPLACEMENT_MARKER,
        }
    }
}

impl SanitizerOptions {
    /// Rejects a zero threshold and markers that are themselves combining marks.
    ///
    /// A zero threshold would replace every accented letter and emoji
    /// sequence. A combining marker would attach to the preceding cluster and
    /// break idempotence of the sanitizer.
    pub fn validate(&self) -> Result<(), GlyphGuardError> {
        if self.combining_mark_threshold == 0 {
            return Err(GlyphGuardError::InvalidThreshold(0));
        }
        if is_combining_mark(self.replacement_marker) {
            return Err(GlyphGuardError::InvalidReplacementMarker(
                self.replacement_marker as u32,
            ));
        }
        Ok(())
    }
}

/// Number of scalars in `cluster` whose General_Category is Mn, Mc or Me.
pub fn combining_mark_count(cluster: &str) -> usize {
    cluster.chars().filter(|c| is_combining_mark(*c)).count()
}

/// Returns `true` if `cluster` carries more than `threshold` combining marks.
pub fn is_excessive(cluster: &str, threshold: usize) -> bool {
    // Stop counting as soon as the threshold is crossed.
    cluster
        .chars()
        .filter(|c| is_combining_mark(*c))
        .nth(threshold)
        .is_some()
}

/// Short, log-safe description of a cluster. Raw zalgo is never logged.
pub fn describe_cluster(cluster: &str) -> String {
    format!(
        "[cluster: {} scalars, {} marks]",
        cluster.chars().count(),
        combining_mark_count(cluster)
    )
}

/// The result of sanitizing one string, computed eagerly at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterSanitizer {
    needs_sanitization: bool,
    sanitized: String,
    replaced_clusters: usize,
}

impl ClusterSanitizer {
    /// Sanitizes `input` with the default threshold and marker.
    pub fn new(input: &str) -> Self {
        Self::with_options(input, &SanitizerOptions::default())
    }

    /// Sanitizes `input` with explicit options.
    pub fn with_options(input: &str, options: &SanitizerOptions) -> Self {
        let threshold = options.combining_mark_threshold;

        // Fast path: nothing to replace, hand back an exact copy of the input.
        let Some(first) = input
            .grapheme_indices(true)
            .position(|(_, cluster)| is_excessive(cluster, threshold))
        else {
            return Self {
                needs_sanitization: false,
                sanitized: input.to_string(),
                replaced_clusters: 0,
            };
        };

        let mut sanitized = String::with_capacity(input.len());
        let mut replaced_clusters = 0usize;
        for (index, cluster) in input.graphemes(true).enumerate() {
            if index >= first && is_excessive(cluster, threshold) {
                debug!("Replacing excessive cluster #{} {}", index, describe_cluster(cluster));
                sanitized.push(options.replacement_marker);
                replaced_clusters += 1;
            } else {
                sanitized.push_str(cluster);
            }
        }

        debug!(
            "Cluster sanitization replaced {} cluster(s). Original length: {}, sanitized length: {}",
            replaced_clusters,
            input.len(),
            sanitized.len()
        );

        Self {
            needs_sanitization: true,
            sanitized,
            replaced_clusters,
        }
    }

    /// `true` iff at least one cluster in the input was excessive.
    pub fn needs_sanitization(&self) -> bool {
        self.needs_sanitization
    }

    pub fn sanitized(&self) -> &str {
        &self.sanitized
    }

    pub fn into_sanitized(self) -> String {
        self.sanitized
    }

    /// Number of clusters that were replaced by the marker.
    pub fn replaced_clusters(&self) -> usize {
        self.replaced_clusters
    }
}

/// Plain result pair returned by [`sanitize`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sanitized {
    pub needs_sanitization: bool,
    pub sanitized: String,
}

/// One-shot sanitization with default options.
pub fn sanitize(input: &str) -> Sanitized {
    let sanitizer = ClusterSanitizer::new(input);
    Sanitized {
        needs_sanitization: sanitizer.needs_sanitization,
        sanitized: sanitizer.sanitized,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ZALGO_X: &str = "x̸̢̧̛̙̝͈͈̖̳̗̰̆̈́̆̿̈́̅̽͆̈́̿̔͌̚͝";
    const KISS: &str = "👩🏿‍❤️‍💋‍👩🏻";

    fn stacked(base: char, marks: usize) -> String {
        let mut s = String::from(base);
        let pool = ['\u{0300}', '\u{0301}', '\u{0302}', '\u{0303}', '\u{0308}', '\u{0327}', '\u{0338}'];
        for i in 0..marks {
            s.push(pool[i % pool.len()]);
        }
        s
    }

    #[test]
    fn test_empty() {
        let sanitizer = ClusterSanitizer::new("");
        assert!(!sanitizer.needs_sanitization());
        assert_eq!(sanitizer.sanitized(), "");
        assert_eq!(sanitizer.replaced_clusters(), 0);
    }

    #[test]
    fn test_ascii() {
        let result = sanitize("abc");
        assert!(!result.needs_sanitization);
        assert_eq!(result.sanitized, "abc");
    }

    #[test]
    fn test_single_combining_mark_is_safe() {
        let input = "abx\u{0327}c";
        let result = sanitize(input);
        assert!(!result.needs_sanitization);
        assert_eq!(result.sanitized, input);
    }

    #[test]
    fn test_emoji_sequence_is_safe() {
        let input = format!("a{KISS}b");
        let result = sanitize(&input);
        assert!(!result.needs_sanitization);
        assert_eq!(result.sanitized, input);
        assert_eq!(input.graphemes(true).count(), 3);
    }

    #[test]
    fn test_single_zalgo() {
        let result = sanitize(ZALGO_X);
        assert!(result.needs_sanitization);
        assert_eq!(result.sanitized, "\u{FFFD}");
    }

    #[test]
    fn test_two_adjacent_zalgo_collapse_independently() {
        let input = format!("{ZALGO_X}{ZALGO_X}");
        let sanitizer = ClusterSanitizer::new(&input);
        assert!(sanitizer.needs_sanitization());
        assert_eq!(sanitizer.sanitized(), "\u{FFFD}\u{FFFD}");
        assert_eq!(sanitizer.replaced_clusters(), 2);
    }

    #[test]
    fn test_zalgo_separated_by_letter() {
        let input = format!("{ZALGO_X}b{ZALGO_X}");
        assert_eq!(sanitize(&input).sanitized, "\u{FFFD}b\u{FFFD}");
    }

    #[test]
    fn test_mixed_zalgo_and_emoji() {
        let input = format!("{ZALGO_X}ab{ZALGO_X}{ZALGO_X}{KISS}c{ZALGO_X}");
        let result = sanitize(&input);
        assert!(result.needs_sanitization);
        assert_eq!(result.sanitized, format!("\u{FFFD}ab\u{FFFD}\u{FFFD}{KISS}c\u{FFFD}"));
    }

    #[test]
    fn test_threshold_boundary() {
        let at_threshold = stacked('e', DEFAULT_COMBINING_MARK_THRESHOLD);
        assert!(!sanitize(&at_threshold).needs_sanitization);

        let over_threshold = stacked('e', DEFAULT_COMBINING_MARK_THRESHOLD + 1);
        assert_eq!(sanitize(&over_threshold).sanitized, "\u{FFFD}");

        assert!(!sanitize(&stacked('a', 4)).needs_sanitization);
        assert!(sanitize(&stacked('a', 16)).needs_sanitization);
    }

    #[test]
    fn test_custom_options() {
        let options = SanitizerOptions { combining_mark_threshold: 1, replacement_marker: '?' };
        let sanitizer = ClusterSanitizer::with_options("ae\u{0301}e\u{0301}\u{0302}", &options);
        assert_eq!(sanitizer.sanitized(), "ae\u{0301}?");
        assert_eq!(sanitizer.replaced_clusters(), 1);
    }

    #[test]
    fn test_combining_marker_is_rejected() {
        let options = SanitizerOptions { replacement_marker: '\u{0301}', ..Default::default() };
        assert!(matches!(
            options.validate(),
            Err(GlyphGuardError::InvalidReplacementMarker(0x0301))
        ));
        assert!(SanitizerOptions::default().validate().is_ok());
    }

    #[test]
    fn test_zero_threshold_is_rejected() {
        let options = SanitizerOptions { combining_mark_threshold: 0, ..Default::default() };
        assert!(matches!(options.validate(), Err(GlyphGuardError::InvalidThreshold(0))));
        let options = SanitizerOptions { combining_mark_threshold: 1, ..Default::default() };
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_idempotence_and_cluster_monotonicity() {
        let inputs = [
            String::new(),
            "plain text".to_string(),
            format!("{ZALGO_X}ab{ZALGO_X}{KISS}"),
            stacked('z', 40),
            format!("\u{0301}\u{0301}{}", stacked('q', 12)),
        ];
        for input in &inputs {
            let once = sanitize(input);
            let twice = sanitize(&once.sanitized);
            assert!(!twice.needs_sanitization);
            assert_eq!(twice.sanitized, once.sanitized);
            assert!(once.sanitized.graphemes(true).count() <= input.graphemes(true).count());
        }
    }

    #[test]
    fn test_long_run_of_marks_terminates() {
        let input = stacked('a', 200_000);
        let sanitizer = ClusterSanitizer::new(&input);
        assert_eq!(sanitizer.sanitized(), "\u{FFFD}");

        // A leading run of marks with no base forms its own cluster.
        let orphan: String = std::iter::repeat('\u{0301}').take(50).collect();
        assert!(sanitize(&format!("{orphan}ok")).needs_sanitization);
    }

    #[test]
    fn test_combining_mark_count() {
        assert_eq!(combining_mark_count("a"), 0);
        assert_eq!(combining_mark_count("e\u{0301}\u{0302}"), 2);
        assert_eq!(combining_mark_count(KISS), 1);
        assert!(combining_mark_count(ZALGO_X) > 16);
        assert!(is_excessive(ZALGO_X, DEFAULT_COMBINING_MARK_THRESHOLD));
        assert!(!is_excessive("e\u{0301}", 1));
        assert!(is_excessive("e\u{0301}", 0));
    }

    #[test]
    fn test_describe_cluster_hides_content() {
        let description = describe_cluster(ZALGO_X);
        assert!(description.starts_with("[cluster: "));
        assert!(!description.contains('x'));
    }
}
