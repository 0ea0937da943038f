//! The six reversal strategies
//!
//! Every function maps a string to the same logical result, its chars read
//! back to front, by a different route. Empty input comes back empty.
//! Reversal works on Unicode scalar values (`char`), so combining marks and
//! multi-codepoint emoji are reversed codepoint by codepoint.

use crate::error::{CoreError, Result};

/// Longest input reversed by a single chain of head/tail recursion
pub const DEFAULT_RECURSION_LIMIT: usize = 4096;

/// Largest recursion limit accepted anywhere; higher values are clamped
pub const MAX_RECURSION_LIMIT: usize = 8192;

/// Append chars in reverse order to a pre-sized growable buffer.
pub fn reverse_with_builder(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut reversed = String::with_capacity(text.len());
    for c in text.chars().rev() {
        reversed.push(c);
    }
    reversed
}

/// Swap symmetric pairs of a char buffer, walking both ends inward.
pub fn reverse_with_two_pointers(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut chars: Vec<char> = text.chars().collect();
    let mut left = 0;
    let mut right = chars.len() - 1;

    while left < right {
        chars.swap(left, right);
        left += 1;
        right -= 1;
    }

    chars.into_iter().collect()
}

/// Reverse the suffix, then append the first char.
///
/// Call depth grows with input length, so inputs longer than
/// [`DEFAULT_RECURSION_LIMIT`] are first halved recursively until each
/// piece fits, keeping the native stack bounded.
pub fn reverse_with_recursion(text: &str) -> String {
    reverse_with_recursion_limit(text, DEFAULT_RECURSION_LIMIT)
}

/// [`reverse_with_recursion`] with an explicit limit, clamped to
/// `1..=MAX_RECURSION_LIMIT`.
pub fn reverse_with_recursion_limit(text: &str, limit: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= 1 {
        return text.to_string();
    }

    let mut reversed = String::with_capacity(text.len());
    reverse_in_halves(&chars, limit.clamp(1, MAX_RECURSION_LIMIT), &mut reversed);
    reversed
}

/// Strict head/tail recursion that refuses input longer than `limit`.
pub fn try_reverse_with_recursion(text: &str, limit: usize) -> Result<String> {
    check_recursion_limit(limit)?;

    let chars: Vec<char> = text.chars().collect();
    if chars.len() > limit {
        return Err(CoreError::RecursionLimitExceeded {
            length: chars.len(),
            limit,
        });
    }

    let mut reversed = String::with_capacity(text.len());
    reverse_head_tail(&chars, &mut reversed);
    Ok(reversed)
}

/// Reject limits outside `1..=MAX_RECURSION_LIMIT`
pub fn check_recursion_limit(limit: usize) -> Result<()> {
    if !(1..=MAX_RECURSION_LIMIT).contains(&limit) {
        return Err(CoreError::InvalidConfig(format!(
            "recursion limit must be between 1 and {MAX_RECURSION_LIMIT}, got {limit}"
        )));
    }
    Ok(())
}

// Right half first: reverse(ab) = reverse(b) + reverse(a).
fn reverse_in_halves(chars: &[char], limit: usize, out: &mut String) {
    if chars.len() <= limit {
        reverse_head_tail(chars, out);
        return;
    }

    let mid = chars.len() / 2;
    reverse_in_halves(&chars[mid..], limit, out);
    reverse_in_halves(&chars[..mid], limit, out);
}

fn reverse_head_tail(chars: &[char], out: &mut String) {
    match chars.split_first() {
        Some((first, rest)) if !rest.is_empty() => {
            reverse_head_tail(rest, out);
            out.push(*first);
        }
        _ => out.extend(chars),
    }
}

/// Push every char onto a LIFO stack, then pop them all into the output.
pub fn reverse_with_stack(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut stack: Vec<char> = Vec::with_capacity(text.len());
    for c in text.chars() {
        stack.push(c);
    }

    let mut reversed = String::with_capacity(text.len());
    while let Some(c) = stack.pop() {
        reversed.push(c);
    }
    reversed
}

/// Walk indices from last to first, building a fresh string each step.
///
/// This is the naive O(n²) variant kept for contrast with
/// [`reverse_with_builder`]: every iteration allocates a new `String`
/// holding the previous result plus one char.
#[allow(clippy::needless_range_loop)]
pub fn reverse_with_loop(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let chars: Vec<char> = text.chars().collect();
    let mut reversed = String::new();
    for i in (0..chars.len()).rev() {
        reversed = format!("{reversed}{}", chars[i]);
    }
    reversed
}

/// Reverse each space-separated token in place, keeping token order.
///
/// Splits on every single `' '`, so leading, trailing and repeated spaces
/// produce empty tokens that survive the rejoin unchanged.
pub fn reverse_words(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    text.split(' ')
        .map(reverse_with_builder)
        .collect::<Vec<_>>()
        .join(" ")
}
