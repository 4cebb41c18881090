// Copyright 2026 the Slabtype Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Greedy line breaking with one-step lookahead correction.
//!
//! This is the line-partitioning half of Erik Loyer's slabtype algorithm:
//! grow each candidate line word by word until it reaches the target length,
//! then keep whichever of the last two candidates (before/after the final
//! word) lands closer to the target. It only ever looks one word ahead or
//! behind, trading optimality for a single `O(n)` pass; there is no
//! Knuth-Plass style global optimization.
//!
//! <http://erikloyer.com/index.php/blog/the_slabtype_algorithm_part_1_background/>

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

/// Errors returned by [`make_lines`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineBreakError {
    /// The target line length must be at least one character.
    InvalidTargetLength,
}

/// Breaks `text` into lines of roughly `target_line_length` characters.
///
/// Words (runs of non-whitespace) are never split: the returned lines are a
/// partition of the word sequence, in order. A single word longer than the
/// target becomes its own line, and a target longer than the whole text
/// yields exactly one line. Empty (or all-whitespace) text yields no lines.
///
/// A candidate line stops growing once its character count, with words
/// joined by single spaces and one trailing space, reaches the target; ties
/// between the two final candidates resolve to the longer one (strict `<`
/// comparison on the trimmed distances from the target).
pub fn make_lines(text: &str, target_line_length: usize) -> Result<Vec<String>, LineBreakError> {
    if target_line_length == 0 {
        return Err(LineBreakError::InvalidTargetLength);
    }

    let words: Vec<&str> = text.split_whitespace().collect();
    let mut lines = Vec::new();
    let mut word_index = 0;

    while word_index < words.len() {
        // Candidate lengths count chars including the trailing space, so the
        // loop stops one word past the target rather than exactly at it.
        let mut pre = String::new();
        let mut pre_len = 0_usize;
        let mut post = String::new();
        let mut post_len = 0_usize;

        while post_len < target_line_length {
            pre.clone_from(&post);
            pre_len = post_len;
            post.push_str(words[word_index]);
            post.push(' ');
            post_len += words[word_index].chars().count() + 1;
            word_index += 1;
            if word_index >= words.len() {
                break;
            }
        }

        let pre = pre.trim_end();
        let post = post.trim_end();
        let pre_chars = pre_len.saturating_sub(1);
        let post_chars = post_len.saturating_sub(1);
        let pre_diff = target_line_length as isize - pre_chars as isize;
        let post_diff = post_chars as isize - target_line_length as isize;

        if !pre.is_empty() && pre_diff < post_diff {
            // The shorter candidate is closer; the last word it dropped goes
            // back into the pool for the next line.
            lines.push(String::from(pre));
            word_index -= 1;
        } else {
            lines.push(String::from(post));
        }
    }

    Ok(lines)
}

/// Derives a target line length as `round(2 * average word length)`.
///
/// The average is `total chars / word count` over the whitespace-tokenized
/// input. This is a documented heuristic from the original design, not an
/// exact fit; empty text yields 1.
#[must_use]
pub fn derive_target_line_length(text: &str) -> usize {
    let mut word_count = 0_usize;
    let mut char_count = 0_usize;
    for word in text.split_whitespace() {
        word_count += 1;
        char_count += word.chars().count();
    }
    if word_count == 0 {
        return 1;
    }
    // round(2 * char_count / word_count), in integer arithmetic.
    let target = (4 * char_count + word_count) / (2 * word_count);
    log::debug!("derived target line length {target} from {word_count} words, {char_count} chars");
    target.max(1)
}

/// Derives a target line length from the container's shape.
///
/// Given a font aspect ratio (glyph width over height) and an assumed
/// characters-per-line, this estimates how many lines of the container's
/// width stack into its height, then spreads the text's characters evenly
/// over that many lines. Degenerate inputs (empty text, non-positive or
/// non-finite dimensions) fall back to putting everything on one line.
#[must_use]
pub fn derive_target_from_container(
    text: &str,
    width: f64,
    height: f64,
    font_aspect_ratio: f64,
    chars_per_line: usize,
) -> usize {
    let char_count = text.trim().chars().count();
    if char_count == 0 {
        return 1;
    }

    let line_aspect = font_aspect_ratio * chars_per_line as f64;
    if !(width > 0.0 && width.is_finite())
        || !(height > 0.0 && height.is_finite())
        || !(line_aspect > 0.0 && line_aspect.is_finite())
    {
        return char_count;
    }

    // target line height = width / line_aspect; count = floor(height / that).
    #[allow(
        clippy::cast_possible_truncation,
        reason = "positive and finite; truncation toward zero is the intended floor"
    )]
    let line_count = (height * line_aspect / width) as usize;
    if line_count == 0 {
        return char_count;
    }

    let target = ((2 * char_count + line_count) / (2 * line_count)).max(1);
    log::debug!(
        "derived target line length {target} from container: \
         {char_count} chars over {line_count} lines (aspect {line_aspect})"
    );
    target
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::string::ToString;
    use alloc::vec;

    use super::*;

    #[test]
    fn greedy_split_at_target() {
        assert_eq!(make_lines("a b c d", 4).unwrap(), vec!["a b", "c d"]);
    }

    #[test]
    fn overlong_word_becomes_its_own_line() {
        assert_eq!(
            make_lines("supercalifragilistic", 5).unwrap(),
            vec!["supercalifragilistic"]
        );
    }

    #[test]
    fn overlong_word_in_context_is_not_split() {
        let lines = make_lines("a supercalifragilistic b", 5).unwrap();
        assert!(
            lines.iter().any(|l| l.contains("supercalifragilistic")),
            "long word must survive intact: {lines:?}"
        );
    }

    #[test]
    fn target_longer_than_text_yields_one_line() {
        assert_eq!(make_lines("just a few words", 100).unwrap(), vec![
            "just a few words"
        ]);
    }

    #[test]
    fn empty_text_yields_no_lines() {
        assert!(make_lines("", 10).unwrap().is_empty());
        assert!(make_lines("   \t\n ", 10).unwrap().is_empty());
    }

    #[test]
    fn zero_target_fails_fast() {
        assert_eq!(
            make_lines("some text", 0),
            Err(LineBreakError::InvalidTargetLength)
        );
    }

    #[test]
    fn lines_partition_the_word_sequence() {
        let text = "the quick brown fox jumps over the lazy dog and keeps on running";
        let original: Vec<&str> = text.split_whitespace().collect();
        for target in 1..=30 {
            let lines = make_lines(text, target).unwrap();
            assert!(!lines.is_empty(), "target {target} produced no lines");
            let rejoined: Vec<&str> = lines.iter().flat_map(|l| l.split_whitespace()).collect();
            assert_eq!(rejoined, original, "words dropped/reordered at {target}");
        }
    }

    #[test]
    fn multiword_lines_stop_just_past_the_target() {
        let text = "one two three four five six seven eight nine ten";
        let target = 9;
        for line in make_lines(text, target).unwrap() {
            let words: Vec<&str> = line.split_whitespace().collect();
            if words.len() > 1 {
                // Without its last word the line was still short of the target.
                let prefix_chars: usize =
                    words[..words.len() - 1].iter().map(|w| w.len() + 1).sum();
                assert!(
                    prefix_chars < target + 1,
                    "line {line:?} grew past the stop condition"
                );
            }
        }
    }

    #[test]
    fn deterministic_across_calls() {
        let text = "all work and no play makes jack a dull boy";
        assert_eq!(
            make_lines(text, 8).unwrap(),
            make_lines(text, 8).unwrap(),
            "line breaking must be deterministic"
        );
    }

    #[test]
    fn unicode_lengths_count_chars_not_bytes() {
        // Each word is 4 chars but 8 bytes; byte-based lengths would break
        // after a single word.
        let lines = make_lines("øøøø øøøø", 9).unwrap();
        assert_eq!(lines, vec!["øøøø øøøø".to_string()]);
    }

    #[test]
    fn average_word_length_heuristic() {
        // 8 chars over 2 words: round(2 * 4) = 8.
        assert_eq!(derive_target_line_length("aaaa bbbb"), 8);
        // 7 chars over 3 words: round(14 / 3) = round(4.67) = 5.
        assert_eq!(derive_target_line_length("aa bb ccc"), 5);
        assert_eq!(derive_target_line_length(""), 1);
    }

    #[test]
    fn container_heuristic_spreads_chars_over_lines() {
        // line aspect = 0.5 * 10 = 5; line height = 100 / 5 = 20;
        // line count = floor(60 / 20) = 3; target = round(11 / 3) = 4.
        let text = "abcdefghijk";
        assert_eq!(derive_target_from_container(text, 100.0, 60.0, 0.5, 10), 4);
        // Degenerate container: everything on one line.
        assert_eq!(derive_target_from_container(text, 0.0, 60.0, 0.5, 10), 11);
        assert_eq!(derive_target_from_container("", 100.0, 60.0, 0.5, 10), 1);
    }
}
