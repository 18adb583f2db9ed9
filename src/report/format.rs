//! Free-text classification for report fields.
//!
//! Backend report text arrives as loosely structured prose that may carry
//! markdown-like list markers. This module classifies each field into exactly
//! one presentation mode - bullet list, numbered list, or plain paragraphs -
//! by scanning for line-leading markers.
//!
//! Classification is priority-ordered and all-or-nothing: if any bullet
//! marker is found, the field is a bullet list and only the marked lines
//! survive; numbered lists are checked only when no bullets matched;
//! everything else falls back to paragraphs. Lead-in prose before the first
//! marker is intentionally dropped in the list modes, matching the backend's
//! original presentation contract.

use once_cell::sync::Lazy;
use regex::Regex;

/// A line starting with `-` or `*`, one space, then item text.
static BULLET_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^[-*] (.+)$").unwrap());

/// A line starting with one or more digits, a dot, one space, then item text.
/// Literal semantics: `3. 14 is pi` matches, `3.14 is pi` does not.
static NUMBERED_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^\d+\. (.+)$").unwrap());

/// A classified block of report text, ready for rendering.
///
/// Exactly one variant is produced per non-empty input string; the variant
/// identifies the presentation mode and carries the trimmed items in input
/// order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormattedBlock {
    /// Items extracted from `- ` / `* ` marked lines
    Bullets(Vec<String>),
    /// Items extracted from `<digits>. ` marked lines
    Numbered(Vec<String>),
    /// One item per newline-delimited segment (empty segments kept)
    Paragraphs(Vec<String>),
}

impl FormattedBlock {
    /// The items of this block, regardless of kind
    pub fn items(&self) -> &[String] {
        match self {
            FormattedBlock::Bullets(items)
            | FormattedBlock::Numbered(items)
            | FormattedBlock::Paragraphs(items) => items,
        }
    }
}

/// Classify a free-text report field into a [`FormattedBlock`].
///
/// Returns `None` for absent or empty input - no block, as opposed to a
/// paragraph block holding a single empty item. All three modes are checked
/// against the same original string; the first mode with at least one match
/// wins:
///
/// 1. Bullet lines (`- item` or `* item` at a line start)
/// 2. Numbered lines (`1. item` at a line start)
/// 3. Paragraph fallback: split on `\n`, trim each segment
///
/// In the two list modes, text outside the matched lines is discarded. A
/// field mixing bullet and numbered lines classifies as bullets, and its
/// numbered lines are dropped along with any other unmarked prose.
pub fn format_text(text: Option<&str>) -> Option<FormattedBlock> {
    let text = text?;
    if text.is_empty() {
        return None;
    }

    let bullets: Vec<String> = BULLET_RE
        .captures_iter(text)
        .map(|cap| cap[1].trim().to_string())
        .collect();
    if !bullets.is_empty() {
        return Some(FormattedBlock::Bullets(bullets));
    }

    let numbered: Vec<String> = NUMBERED_RE
        .captures_iter(text)
        .map(|cap| cap[1].trim().to_string())
        .collect();
    if !numbered.is_empty() {
        return Some(FormattedBlock::Numbered(numbered));
    }

    Some(FormattedBlock::Paragraphs(
        text.split('\n').map(|line| line.trim().to_string()).collect(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn bullets(items: &[&str]) -> Option<FormattedBlock> {
        Some(FormattedBlock::Bullets(
            items.iter().map(|s| s.to_string()).collect(),
        ))
    }

    fn numbered(items: &[&str]) -> Option<FormattedBlock> {
        Some(FormattedBlock::Numbered(
            items.iter().map(|s| s.to_string()).collect(),
        ))
    }

    fn paragraphs(items: &[&str]) -> Option<FormattedBlock> {
        Some(FormattedBlock::Paragraphs(
            items.iter().map(|s| s.to_string()).collect(),
        ))
    }

    #[test]
    fn test_empty_and_absent_produce_no_block() {
        assert_eq!(format_text(None), None);
        assert_eq!(format_text(Some("")), None);
    }

    #[test]
    fn test_simple_bullets() {
        assert_eq!(
            format_text(Some("- First\n- Second")),
            bullets(&["First", "Second"])
        );
    }

    #[test]
    fn test_star_bullets() {
        assert_eq!(
            format_text(Some("* One\n* Two\n* Three")),
            bullets(&["One", "Two", "Three"])
        );
    }

    #[test]
    fn test_bullet_at_string_start_without_newline() {
        assert_eq!(format_text(Some("- Only item")), bullets(&["Only item"]));
    }

    #[test]
    fn test_bullets_discard_surrounding_prose() {
        // Lead-in and trailing prose outside marked lines is dropped
        let text = "Findings below:\n- Redness\n- Swelling\nSee a doctor.";
        assert_eq!(format_text(Some(text)), bullets(&["Redness", "Swelling"]));
    }

    #[test]
    fn test_bullets_win_over_numbered() {
        let text = "- Bullet item\n1. Numbered item";
        assert_eq!(format_text(Some(text)), bullets(&["Bullet item"]));
    }

    #[test]
    fn test_simple_numbered() {
        assert_eq!(
            format_text(Some("1. One\n2. Two")),
            numbered(&["One", "Two"])
        );
    }

    #[test]
    fn test_numbered_multi_digit() {
        assert_eq!(
            format_text(Some("10. Tenth\n11. Eleventh")),
            numbered(&["Tenth", "Eleventh"])
        );
    }

    #[test]
    fn test_numbered_discards_surrounding_prose() {
        let text = "Steps:\n1. Clean the area\n2. Apply ointment\nDone.";
        assert_eq!(
            format_text(Some(text)),
            numbered(&["Clean the area", "Apply ointment"])
        );
    }

    #[test]
    fn test_decimal_without_space_is_not_numbered() {
        // No space after the dot, so the numbered pattern does not match
        assert_eq!(
            format_text(Some("3.14 is pi")),
            paragraphs(&["3.14 is pi"])
        );
    }

    #[test]
    fn test_decimal_with_space_matches_literally() {
        // Literal marker semantics: "3. 14 is pi" is a numbered item "14 is pi"
        assert_eq!(format_text(Some("3. 14 is pi")), numbered(&["14 is pi"]));
    }

    #[test]
    fn test_marker_mid_line_is_not_a_match() {
        let text = "see items - one and - two";
        assert_eq!(format_text(Some(text)), paragraphs(&["see items - one and - two"]));
    }

    #[test]
    fn test_plain_paragraphs() {
        assert_eq!(
            format_text(Some("Hello\nWorld")),
            paragraphs(&["Hello", "World"])
        );
    }

    #[test]
    fn test_paragraphs_keep_empty_segments() {
        assert_eq!(
            format_text(Some("First\n\nSecond")),
            paragraphs(&["First", "", "Second"])
        );
    }

    #[test]
    fn test_paragraphs_trim_segments() {
        assert_eq!(
            format_text(Some("  padded  \n\ttabbed\t")),
            paragraphs(&["padded", "tabbed"])
        );
    }

    #[test]
    fn test_whitespace_only_is_a_paragraph_not_no_block() {
        // Non-empty input always produces a block, even if it trims to nothing
        assert_eq!(format_text(Some(" ")), paragraphs(&[""]));
    }

    #[test]
    fn test_single_line_paragraph() {
        assert_eq!(format_text(Some("Just text")), paragraphs(&["Just text"]));
    }

    #[test]
    fn test_bullet_without_space_is_not_a_match() {
        assert_eq!(format_text(Some("-item")), paragraphs(&["-item"]));
    }

    #[test]
    fn test_bullet_item_count_equals_match_count() {
        let text = "- a\nplain\n- b\nmore\n- c";
        let block = format_text(Some(text)).unwrap();
        assert_eq!(block, FormattedBlock::Bullets(vec![
            "a".to_string(),
            "b".to_string(),
            "c".to_string(),
        ]));
        assert_eq!(block.items().len(), 3);
    }

    #[test]
    fn test_items_accessor() {
        let block = format_text(Some("one\ntwo")).unwrap();
        assert_eq!(block.items(), &["one".to_string(), "two".to_string()]);
    }
}
