//! Thinker-named release versions.
//!
//! Every major version is named after a writer on focus, attention, or
//! mindful technology use, assigned alphabetically: v1 = A (Allen),
//! v2 = B (Burkeman), v3 = C (Csikszentmihalyi), and so on.
//!
//! The table is append-only.  A release's major number is its 1-based position
//! here, so entries are never reordered or removed.

use std::fmt;

/// One row of the version table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionEntry {
    /// Lowercase surname used as the release codename.
    pub codename: &'static str,
    pub author_name: &'static str,
    pub work_title: &'static str,
    pub letter: char,
}

impl VersionEntry {
    const fn new(
        codename: &'static str,
        author_name: &'static str,
        work_title: &'static str,
        letter: char,
    ) -> Self {
        Self {
            codename,
            author_name,
            work_title,
            letter,
        }
    }
}

// Critics of social media (Haidt, Lanier, Newport, Turkle), productivity
// advocates (Allen, McKeown, Ferriss, Pink), flow researchers
// (Csikszentmihalyi, Robinson), focus experts (Kahneman, Ericsson, Duckworth).
static THINKERS: &[VersionEntry] = &[
    VersionEntry::new("allen", "David Allen", "Getting Things Done", 'A'), // 1.x
    VersionEntry::new("burkeman", "Oliver Burkeman", "Four Thousand Weeks", 'B'), // 2.x
    VersionEntry::new("csikszentmihalyi", "Mihaly Csikszentmihalyi", "Flow", 'C'), // 3.x
    VersionEntry::new("duckworth", "Angela Duckworth", "Grit", 'D'), // 4.x
    VersionEntry::new("ericsson", "Anders Ericsson", "Peak", 'E'), // 5.x
    VersionEntry::new("ferriss", "Tim Ferriss", "The 4-Hour Workweek", 'F'), // 6.x
    VersionEntry::new("grant", "Adam Grant", "Think Again", 'G'), // 7.x
    VersionEntry::new("haidt", "Jonathan Haidt", "The Anxious Generation", 'H'), // 8.x
    VersionEntry::new("johnson", "Steven Johnson", "Where Good Ideas Come From", 'J'), // 9.x
    VersionEntry::new("kahneman", "Daniel Kahneman", "Thinking, Fast and Slow", 'K'), // 10.x
    VersionEntry::new(
        "lanier",
        "Jaron Lanier",
        "Ten Arguments for Deleting Your Social Media",
        'L',
    ), // 11.x
    VersionEntry::new("mckeown", "Greg McKeown", "Essentialism", 'M'), // 12.x
    VersionEntry::new("newport", "Cal Newport", "Deep Work", 'N'), // 13.x
    VersionEntry::new("odell", "Jenny Odell", "How to Do Nothing", 'O'), // 14.x
    VersionEntry::new("pink", "Daniel Pink", "Drive", 'P'), // 15.x
    VersionEntry::new("robinson", "Ken Robinson", "The Element", 'R'), // 16.x
    VersionEntry::new("sinek", "Simon Sinek", "Start with Why", 'S'), // 17.x
    VersionEntry::new("turkle", "Sherry Turkle", "Alone Together", 'T'), // 18.x
    VersionEntry::new("vanderkam", "Laura Vanderkam", "168 Hours", 'V'), // 19.x
    VersionEntry::new("williams", "James Williams", "Stand Out of Our Light", 'W'), // 20.x
    VersionEntry::new("suzuki", "Shunryu Suzuki", "Zen Mind, Beginner's Mind", 'Y'), // 21.x
    VersionEntry::new("zomorodi", "Manoush Zomorodi", "Bored and Brilliant", 'Z'), // 22.x
];

/// Host capability the mobile client depends on.
/// Shown on the about pane; nothing negotiates it.
pub const REQUIRED_CAPABILITY: &str = "on-device foundation model (iOS 18.1+)";

// ───────────────────────────────────────── lookups ───────────

/// All entries in release order.
pub fn entries() -> &'static [VersionEntry] {
    THINKERS
}

/// The entry for a 1-based major version, or `None` when out of range.
///
/// This is the only place that turns a major number into a table index.
/// Zero and negative majors are out of range.
pub fn entry(major: i64) -> Option<&'static VersionEntry> {
    let index = usize::try_from(major.checked_sub(1)?).ok()?;
    THINKERS.get(index)
}

pub fn codename_of(major: i64) -> String {
    match entry(major) {
        Some(e) => e.codename.to_string(),
        None => format!("thinker{major}"),
    }
}

pub fn letter_of(major: i64) -> String {
    entry(major).map_or_else(|| "?".to_string(), |e| e.letter.to_string())
}

pub fn semver_of(major: i64, minor: i64, patch: i64) -> String {
    format!("{major}.{minor}.{patch}")
}

/// `"{semver}-{codename}"`, e.g. `"1.0.0-allen"`.
pub fn full_version_of(major: i64, minor: i64, patch: i64) -> String {
    format!("{}-{}", semver_of(major, minor, patch), codename_of(major))
}

/// `1.0.0 "David Allen" (Getting Things Done)`, or the bare semver when the
/// major has no thinker yet.
pub fn display_name_of(major: i64, minor: i64, patch: i64) -> String {
    let semver = semver_of(major, minor, patch);
    match entry(major) {
        Some(e) => format!("{semver} \"{}\" ({})", e.author_name, e.work_title),
        None => semver,
    }
}

/// `(author, work)` for the major, if it has one.
pub fn thinker_info_of(major: i64) -> Option<(&'static str, &'static str)> {
    entry(major).map(|e| (e.author_name, e.work_title))
}

// ───────────────────────────────────────── app version ───────

/// A concrete `major.minor.patch` triple with the derived display strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AppVersion {
    pub major: i64,
    pub minor: i64,
    pub patch: i64,
}

impl AppVersion {
    /// The running build.  Kept in sync with `Cargo.toml` (checked in tests).
    pub const CURRENT: AppVersion = AppVersion::new(1, 0, 0);

    pub const fn new(major: i64, minor: i64, patch: i64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    pub fn semver(&self) -> String {
        semver_of(self.major, self.minor, self.patch)
    }

    pub fn codename(&self) -> String {
        codename_of(self.major)
    }

    pub fn letter(&self) -> String {
        letter_of(self.major)
    }

    pub fn full(&self) -> String {
        full_version_of(self.major, self.minor, self.patch)
    }

    pub fn display_name(&self) -> String {
        display_name_of(self.major, self.minor, self.patch)
    }

    pub fn thinker_info(&self) -> Option<(&'static str, &'static str)> {
        thinker_info_of(self.major)
    }
}

impl fmt::Display for AppVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn in_range_majors_resolve_to_their_row() {
        for (i, e) in entries().iter().enumerate() {
            let major = i as i64 + 1;
            assert_eq!(codename_of(major), e.codename);
            assert_eq!(letter_of(major), e.letter.to_string());
            assert_eq!(thinker_info_of(major), Some((e.author_name, e.work_title)));
        }
    }

    #[test]
    fn out_of_range_majors_fall_back() {
        let n = entries().len() as i64;
        for major in [0, -1, -42, n + 1, 999, i64::MIN, i64::MAX] {
            assert_eq!(codename_of(major), format!("thinker{major}"));
            assert_eq!(letter_of(major), "?");
            assert_eq!(thinker_info_of(major), None);
            assert_eq!(display_name_of(major, 0, 0), semver_of(major, 0, 0));
        }
    }

    #[test]
    fn first_release_strings() {
        assert_eq!(semver_of(1, 0, 0), "1.0.0");
        assert_eq!(full_version_of(1, 0, 0), "1.0.0-allen");
        assert_eq!(
            display_name_of(1, 0, 0),
            "1.0.0 \"David Allen\" (Getting Things Done)"
        );
        assert_eq!(display_name_of(999, 0, 0), "999.0.0");
    }

    #[test]
    fn semver_does_not_validate() {
        assert_eq!(semver_of(-3, 0, 12), "-3.0.12");
        assert_eq!(full_version_of(0, 1, 2), "0.1.2-thinker0");
    }

    #[test]
    fn later_majors() {
        assert_eq!(full_version_of(11, 2, 3), "11.2.3-lanier");
        assert_eq!(
            display_name_of(10, 0, 1),
            "10.0.1 \"Daniel Kahneman\" (Thinking, Fast and Slow)"
        );
        assert_eq!(letter_of(21), "Y");
        assert_eq!(codename_of(22), "zomorodi");
        assert_eq!(codename_of(23), "thinker23");
    }

    #[test]
    fn lookups_are_repeatable() {
        for major in [-1, 0, 1, 7, 22, 23] {
            assert_eq!(display_name_of(major, 4, 5), display_name_of(major, 4, 5));
            assert_eq!(letter_of(major), letter_of(major));
        }
    }

    #[test]
    fn table_is_ordered_and_well_formed() {
        let letters: Vec<char> = entries().iter().map(|e| e.letter).collect();
        let mut sorted = letters.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(letters, sorted);

        for e in entries() {
            assert!(!e.codename.is_empty());
            assert!(e.codename.chars().all(|c| c.is_ascii_lowercase()));
        }
    }

    #[test]
    fn current_matches_package_version() {
        assert_eq!(AppVersion::CURRENT.semver(), env!("CARGO_PKG_VERSION"));
        assert_eq!(AppVersion::CURRENT.to_string(), "1.0.0-allen");
        assert_eq!(AppVersion::CURRENT.letter(), "A");
        assert_eq!(
            AppVersion::CURRENT.thinker_info(),
            Some(("David Allen", "Getting Things Done"))
        );
    }
}
