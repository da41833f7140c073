//! Detection parameters and their environment overrides.
//!
//! `REGION_MAX_COLOR_DIFF` and `REGION_MIN_SIZE` are read once per process.
//! Unparseable values fall back to the defaults.

use std::str::FromStr;
use std::sync::OnceLock;

/// Per-channel difference bound for a pixel to match the target color
pub const DEFAULT_MAX_COLOR_DIFF: u8 = 20;
/// Regions must have strictly more pixels than this to be kept
pub const DEFAULT_MIN_REGION_SIZE: usize = 50;

fn parse_or<T: FromStr>(value: Option<&str>, default: T) -> T {
    value
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}

fn parse_env<T: FromStr>(name: &str, default: T) -> T {
    parse_or(std::env::var(name).ok().as_deref(), default)
}

static MAX_COLOR_DIFF: OnceLock<u8> = OnceLock::new();

pub(crate) fn max_color_diff() -> u8 {
    *MAX_COLOR_DIFF.get_or_init(|| parse_env("REGION_MAX_COLOR_DIFF", DEFAULT_MAX_COLOR_DIFF))
}

static MIN_REGION_SIZE: OnceLock<usize> = OnceLock::new();

pub(crate) fn min_region_size() -> usize {
    *MIN_REGION_SIZE.get_or_init(|| parse_env("REGION_MIN_SIZE", DEFAULT_MIN_REGION_SIZE))
}

/// Thresholds for one detection sweep
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionParams {
    /// A pixel matches when every channel differs from the target by less than this
    pub max_color_diff: u8,
    /// Candidates with this many pixels or fewer are discarded
    pub min_region_size: usize,
}

impl RegionParams {
    /// Defaults overridden by `REGION_MAX_COLOR_DIFF` / `REGION_MIN_SIZE`
    pub fn from_env() -> Self {
        Self {
            max_color_diff: max_color_diff(),
            min_region_size: min_region_size(),
        }
    }

    /// Set the color difference bound
    pub fn with_max_color_diff(mut self, max_color_diff: u8) -> Self {
        self.max_color_diff = max_color_diff;
        self
    }

    /// Set the minimum-region threshold
    pub fn with_min_region_size(mut self, min_region_size: usize) -> Self {
        self.min_region_size = min_region_size;
        self
    }
}

impl Default for RegionParams {
    fn default() -> Self {
        Self {
            max_color_diff: DEFAULT_MAX_COLOR_DIFF,
            min_region_size: DEFAULT_MIN_REGION_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = RegionParams::default();
        assert_eq!(params.max_color_diff, 20);
        assert_eq!(params.min_region_size, 50);
    }

    #[test]
    fn test_builders() {
        let params = RegionParams::default()
            .with_max_color_diff(5)
            .with_min_region_size(0);
        assert_eq!(params.max_color_diff, 5);
        assert_eq!(params.min_region_size, 0);
    }

    #[test]
    fn test_parse_or_reads_valid_values() {
        assert_eq!(parse_or(Some(" 7 "), DEFAULT_MAX_COLOR_DIFF), 7u8);
        assert_eq!(parse_or(Some("120"), DEFAULT_MIN_REGION_SIZE), 120usize);
    }

    #[test]
    fn test_parse_or_falls_back_on_missing_or_bad_values() {
        assert_eq!(parse_or(None, DEFAULT_MAX_COLOR_DIFF), 20u8);
        assert_eq!(parse_or(Some("abc"), DEFAULT_MAX_COLOR_DIFF), 20u8);
        // Out of range for u8
        assert_eq!(parse_or(Some(" 300 "), DEFAULT_MAX_COLOR_DIFF), 20u8);
        assert_eq!(parse_or(Some("-1"), DEFAULT_MIN_REGION_SIZE), 50usize);
        assert_eq!(parse_or(Some(""), DEFAULT_MIN_REGION_SIZE), 50usize);
    }

    #[test]
    fn test_parse_env_reads_variable() {
        // Variable names unique to this test; nothing else reads them
        unsafe {
            std::env::set_var("REGION_TEST_MIN_SIZE_VALID", " 7 ");
            std::env::set_var("REGION_TEST_MIN_SIZE_BAD", "many");
        }
        assert_eq!(parse_env("REGION_TEST_MIN_SIZE_VALID", 50usize), 7);
        assert_eq!(parse_env("REGION_TEST_MIN_SIZE_BAD", 50usize), 50);
        assert_eq!(parse_env("REGION_TEST_UNSET_VARIABLE", 20u8), 20);
    }
}
