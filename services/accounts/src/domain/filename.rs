//! Filename sanitization for user-supplied photo references.

use std::ops::RangeInclusive;

use unicode_normalization::UnicodeNormalization;

/// Device names that cannot be used as a file stem on Windows.
const DEVICE_NAMES: &[&str] = &[
    "CON", "AUX", "COM1", "COM2", "COM3", "COM4", "LPT1", "LPT2", "LPT3", "PRN", "NUL",
];

/// CJK Unified Ideographs accepted by default.
pub const CJK_IDEOGRAPHS: RangeInclusive<char> = '\u{4e00}'..='\u{9fa5}';

/// Which characters survive sanitization beyond `[A-Za-z0-9_.-]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilenamePolicy {
    pub extra_ranges: Vec<RangeInclusive<char>>,
    /// Prefix `_` when the stem is a reserved device name.
    pub guard_device_names: bool,
}

impl Default for FilenamePolicy {
    fn default() -> Self {
        Self {
            extra_ranges: vec![CJK_IDEOGRAPHS],
            guard_device_names: cfg!(windows),
        }
    }
}

impl FilenamePolicy {
    pub fn ascii_only() -> Self {
        Self {
            extra_ranges: Vec::new(),
            guard_device_names: cfg!(windows),
        }
    }

    fn allows(&self, c: char) -> bool {
        c.is_ascii_alphanumeric()
            || matches!(c, '_' | '.' | '-')
            || self.extra_ranges.iter().any(|r| r.contains(&c))
    }
}

/// Reduce `filename` to a name that is safe to join onto a storage directory.
///
/// The result never contains a path separator and never starts or ends with
/// `.` or `_`. It may be empty.
pub fn secure_filename(filename: &str, policy: &FilenamePolicy) -> String {
    let normalized: String = filename
        .nfkd()
        .map(|c| if matches!(c, '/' | '\\') { ' ' } else { c })
        .collect();

    let joined = normalized.split_whitespace().collect::<Vec<_>>().join("_");
    let kept: String = joined.chars().filter(|&c| policy.allows(c)).collect();
    let trimmed = kept.trim_matches(|c| c == '.' || c == '_');

    if policy.guard_device_names && is_device_name(trimmed) {
        return format!("_{trimmed}");
    }
    trimmed.to_owned()
}

fn is_device_name(filename: &str) -> bool {
    let stem = filename.split('.').next().unwrap_or_default();
    !stem.is_empty() && DEVICE_NAMES.contains(&stem.to_ascii_uppercase().as_str())
}
