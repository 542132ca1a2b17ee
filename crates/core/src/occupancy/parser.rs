use regex::Regex;
use tracing::warn;

/// Pulls a single facility's free-space count out of the occupancy document
pub trait OccupancyParser: Send + Sync {
    /// `None` when the anchor or a count after it cannot be found
    fn parse_count(&self, document: &str, anchor: &str) -> Option<u32>;
}

/// Finds the anchor text, skips markup and separators, and reads the first
/// integer after it. A literal `Full` counts as zero free spaces.
#[derive(Clone, Copy, Debug, Default)]
pub struct AnchorPatternParser;

impl AnchorPatternParser {
    fn pattern_for(anchor: &str) -> Option<Regex> {
        let anchor = anchor.trim();
        if anchor.is_empty() {
            return None;
        }

        // "Lot 1" must not read the "2" of "Lot 12"
        let boundary = if anchor.ends_with(|c: char| c.is_ascii_digit()) {
            r"\b"
        } else {
            ""
        };
        let pattern = format!(
            r#"{}{boundary}(?:\s|&nbsp;|<[^>]*>|[:=,"'])*(\d+|(?i:full)\b)"#,
            regex::escape(anchor)
        );

        match Regex::new(&pattern) {
            Ok(regex) => Some(regex),
            Err(error) => {
                warn!(anchor, %error, "could not build occupancy pattern");
                None
            }
        }
    }
}

impl OccupancyParser for AnchorPatternParser {
    fn parse_count(&self, document: &str, anchor: &str) -> Option<u32> {
        let captures = Self::pattern_for(anchor)?.captures(document)?;
        let value = captures.get(1)?.as_str();

        if value.eq_ignore_ascii_case("full") {
            Some(0)
        } else {
            value.parse().ok()
        }
    }
}
