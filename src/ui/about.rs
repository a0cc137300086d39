//! Text for the "about" surface.
//!
//! Plain strings so the CLI can print the same block the about pane renders.

use crate::core::version::{self, AppVersion, REQUIRED_CAPABILITY};

/// Headline for the version: the long display name, or `full` when details
/// are hidden.
pub fn headline(v: AppVersion, show_details: bool) -> String {
    if show_details {
        v.display_name()
    } else {
        v.full()
    }
}

/// The about block, one string per line.
pub fn about_lines(v: AppVersion, show_details: bool) -> Vec<String> {
    let mut lines = vec![
        format!("Agentic Feed {}", headline(v, show_details)),
        String::new(),
        format!("Release:  {}", v.full()),
        format!("Letter:   {}", v.letter()),
    ];
    if show_details {
        match v.thinker_info() {
            Some((name, work)) => lines.push(format!("Thinker:  {name}, {work}")),
            None => lines.push("Thinker:  unassigned".to_string()),
        }
    }
    lines.push(format!("Requires: {REQUIRED_CAPABILITY}"));
    lines
}

/// One line per named major, `*` marking `current_major`.
pub fn lineage_lines(current_major: i64) -> Vec<String> {
    version::entries()
        .iter()
        .zip(1_i64..)
        .map(|(e, major)| {
            let marker = if major == current_major { '*' } else { ' ' };
            format!(
                "{marker} {}  {major:>2}.x  {:<18} {} ({})",
                e.letter, e.codename, e.author_name, e.work_title
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn about_block_for_first_release() {
        assert_eq!(
            about_lines(AppVersion::new(1, 0, 0), true),
            vec![
                "Agentic Feed 1.0.0 \"David Allen\" (Getting Things Done)".to_string(),
                String::new(),
                "Release:  1.0.0-allen".to_string(),
                "Letter:   A".to_string(),
                "Thinker:  David Allen, Getting Things Done".to_string(),
                format!("Requires: {REQUIRED_CAPABILITY}"),
            ]
        );
    }

    #[test]
    fn hidden_details_use_short_form() {
        let lines = about_lines(AppVersion::new(1, 2, 3), false);
        assert_eq!(lines[0], "Agentic Feed 1.2.3-allen");
        assert!(!lines.iter().any(|l| l.starts_with("Thinker")));
    }

    #[test]
    fn unnamed_major() {
        let lines = about_lines(AppVersion::new(40, 0, 0), true);
        assert_eq!(lines[0], "Agentic Feed 40.0.0");
        assert_eq!(lines[2], "Release:  40.0.0-thinker40");
        assert_eq!(lines[3], "Letter:   ?");
        assert_eq!(lines[4], "Thinker:  unassigned");
    }

    #[test]
    fn lineage_marks_current() {
        let lines = lineage_lines(2);
        assert_eq!(lines.len(), version::entries().len());
        assert_eq!(
            lines[0],
            "  A   1.x  allen              David Allen (Getting Things Done)"
        );
        assert!(lines[1].starts_with("* B   2.x  burkeman"));
        assert_eq!(lines.iter().filter(|l| l.starts_with('*')).count(), 1);
    }
}
