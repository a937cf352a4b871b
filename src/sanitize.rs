//! Text Sanitizer
//!
//! Turns the raw text of a reply region into copy-ready text:
//!
//! 1. Strip UI chrome: disclaimer boilerplate and action-button labels.
//! 2. Drop recommended-question lines appended after the answer.
//! 3. Collapse blank lines and horizontal whitespace, trim.
//!
//! `sanitize` is idempotent: every step only removes whole lines or
//! whitespace-delimited tokens, and step 1 runs to a fixed point.

use crate::patterns::{
    CHROME_LINES, CJK_CHROME_LABELS, DISCLAIMER, ENDS_DECLARATIVE, ENDS_WITH_QUESTION,
    HORIZONTAL_SPACE, INTERROGATIVE, LATIN_CHROME_LABELS, MULTIPLE_NEWLINES,
};
use crate::Options;

/// Lines longer than this (chars) count as answer content.
const SUBSTANTIAL_LEN: usize = 20;

/// Sanitize with default options.
///
/// ```rust
/// use ai_reply_extract::sanitize::sanitize;
///
/// let raw = "强平是指...。 本回答由 AI 生成，内容仅供参考 复制 重试 分享 如何计算保证金？";
/// assert_eq!(sanitize(raw), "强平是指...。");
/// ```
#[must_use]
pub fn sanitize(raw: &str) -> String {
    sanitize_with_options(raw, &Options::default())
}

/// Sanitize raw region text. Empty or whitespace-only input yields `""`.
#[must_use]
pub fn sanitize_with_options(raw: &str, options: &Options) -> String {
    if raw.trim().is_empty() {
        return String::new();
    }
    let text = raw.replace("\r\n", "\n").replace('\r', "\n");
    let text = strip_chrome(&text);
    let lines: Vec<&str> = text.split('\n').collect();
    let kept = drop_recommended_questions(&lines, options.short_question_len);
    let joined = kept.join("\n");
    MULTIPLE_NEWLINES
        .replace_all(&joined, "\n\n")
        .trim()
        .to_string()
}

/// Step 1: remove disclaimers and button labels until nothing changes.
///
/// Lines come back whitespace-normalized and trimmed.
#[must_use]
pub fn strip_chrome(text: &str) -> String {
    let mut current = normalize_lines(text);
    loop {
        let without_disclaimers = DISCLAIMER.replace_all(&current, "\n");
        let next = normalize_lines(&without_disclaimers)
            .split('\n')
            .map(strip_chrome_labels)
            .collect::<Vec<_>>()
            .join("\n");
        if next == current {
            return current;
        }
        current = next;
    }
}

fn normalize_lines(text: &str) -> String {
    text.split('\n')
        .map(|line| HORIZONTAL_SPACE.replace_all(line, " ").trim().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Token {
    Text,
    CjkLabel,
    LatinLabel,
}

fn classify_token(token: &str) -> Token {
    let bare = token.trim_end_matches([':', '：']);
    if CJK_CHROME_LABELS.contains(&bare) {
        return Token::CjkLabel;
    }
    let lowered = bare.to_lowercase();
    if LATIN_CHROME_LABELS.contains(&lowered.as_str()) {
        Token::LatinLabel
    } else {
        Token::Text
    }
}

/// Remove action-button labels from one normalized line.
///
/// CJK labels always go. English labels go when they sit in a run of two or
/// more labels, or fill the whole line, since a lone "copy" may be prose.
fn strip_chrome_labels(line: &str) -> String {
    let lowered = line.trim_end_matches([':', '：']).to_lowercase();
    if CHROME_LINES.contains(&lowered.as_str()) {
        return String::new();
    }

    let tokens: Vec<&str> = line.split(' ').filter(|t| !t.is_empty()).collect();
    let kinds: Vec<Token> = tokens.iter().map(|t| classify_token(t)).collect();

    let mut keep = vec![true; tokens.len()];
    let mut start = 0;
    while start < tokens.len() {
        if kinds[start] == Token::Text {
            start += 1;
            continue;
        }
        let mut end = start;
        while end < tokens.len() && kinds[end] != Token::Text {
            end += 1;
        }
        let run_len = end - start;
        for (kind, kept) in kinds[start..end].iter().zip(&mut keep[start..end]) {
            if *kind == Token::CjkLabel || run_len >= 2 || run_len == tokens.len() {
                *kept = false;
            }
        }
        start = end;
    }

    tokens
        .iter()
        .zip(keep)
        .filter_map(|(token, kept)| kept.then_some(*token))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Step 2: drop recommended-question lines.
///
/// Nothing is dropped before the first substantial line, so a question the
/// answer itself opens with survives.
#[must_use]
pub fn drop_recommended_questions<'a>(lines: &[&'a str], short_len: usize) -> Vec<&'a str> {
    let mut kept = Vec::with_capacity(lines.len());
    let mut seen_substantial = false;

    for (i, line) in lines.iter().enumerate() {
        if seen_substantial && is_recommended_question(lines, i, short_len) {
            continue;
        }
        kept.push(*line);
        if is_substantial(line, short_len) {
            seen_substantial = true;
        }
    }
    kept
}

/// Whether `lines[i]` looks like a recommended question.
///
/// It must end in a question mark, be shorter than `short_len` chars, and
/// either use interrogative vocabulary or stand alone: be the last
/// non-blank line, or be followed by another question.
#[must_use]
pub fn is_recommended_question(lines: &[&str], i: usize, short_len: usize) -> bool {
    let Some(line) = lines.get(i).map(|l| l.trim()) else {
        return false;
    };
    if !is_question(line) || line.chars().count() >= short_len {
        return false;
    }
    if INTERROGATIVE.is_match(line) {
        return true;
    }
    let next = lines[i + 1..]
        .iter()
        .map(|l| l.trim())
        .find(|l| !l.is_empty());
    next.is_none_or(is_question)
}

fn is_question(line: &str) -> bool {
    ENDS_WITH_QUESTION.is_match(line)
}

/// A line that belongs to the answer proper: not a short question, and
/// either longer than a short phrase or a finished statement.
fn is_substantial(line: &str, short_len: usize) -> bool {
    let line = line.trim();
    let len = line.chars().count();
    !line.is_empty()
        && !(is_question(line) && len < short_len)
        && (len > SUBSTANTIAL_LEN || ENDS_DECLARATIVE.is_match(line))
}
