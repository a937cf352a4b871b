//! Compiled regex patterns and vocabulary tables for role detection.
//!
//! All patterns are compiled once at startup using `LazyLock` for efficiency.
//! Patterns are organized by the signal they feed.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Attribute Vocabulary (class / alt / src / DOM path)
// =============================================================================

/// Authorship words in role markers, DOM paths and ancestor classes.
pub static USER_ROLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(user|human)").expect("USER_ROLE regex"));

/// Assistant counterpart of [`USER_ROLE`]. `ai` and `bot` only match as
/// whole tokens.
pub static AI_ROLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(assistant|(?:^|[^a-z0-9])(?:ai|bot)(?:[^a-z0-9]|$))").expect("AI_ROLE regex")
});

/// Matches user-side vocabulary in avatar class names, alt text and image
/// sources.
///
/// Short tokens (`me`, `self`, `mine`) only match as whole tokens so that
/// `theme` or `selfie-cam` stay neutral.
pub static USER_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(user|human|(?:^|[^a-z0-9])(?:me|self|mine)(?:[^a-z0-9]|$)|用户|我的)")
        .expect("USER_TOKEN regex")
});

/// Matches assistant-side vocabulary in avatar class names, alt text and
/// image sources.
///
/// `ai` and `bot` only match as whole tokens: `main`, `container` and
/// `bottom` are layout words, not authorship.
pub static AI_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(assistant|chatbot|robot|copilot|gpt|(?:^|[^a-z0-9])(?:ai|bot|llm|model|agent)(?:[^a-z0-9]|$)|助手|智能体|机器人)",
    )
    .expect("AI_TOKEN regex")
});

/// Matches tags and class names of avatar-like nodes.
pub static AVATAR_CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(avatar|icon|logo|profile|portrait|头像)").expect("AVATAR_CLASS regex")
});

// =============================================================================
// Text Vocabulary
// =============================================================================

/// Phrases typical of an assistant's answer.
pub static AI_TEXT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(根据|建议|以下|总结|首先|其次|此外|综上|总之|需要注意|希望对你有帮助|希望对您有帮助|如果您还有|如果你还有|如有其他问题|请随时|here's|here is|in summary|to summarize|additionally|i hope this helps|let me know if|feel free to)",
    )
    .expect("AI_TEXT regex")
});

/// Phrases typical of a user's prompt and rare in answers.
pub static USER_TEXT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(我想|请问|帮我|我需要|我的问题|能不能帮|可以帮我|麻烦你|\bcan you\b|\bcould you\b|\bplease help\b|\bhelp me\b|\bi want\b|\bi need\b)",
    )
    .expect("USER_TEXT regex")
});

/// Interrogative vocabulary.
pub static INTERROGATIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(什么|怎么|怎样|如何|为何|为什么|哪些|哪个|哪里|哪儿|是否|能否|可否|有没有|多少|吗|呢|\b(?:what|how|why|which|where|when|who|whom|whose|can|could|should|would|is|are|do|does|did)\b)",
    )
    .expect("INTERROGATIVE regex")
});

/// Action-button vocabulary that marks UI chrome inside a candidate.
pub static BUTTON_TEXT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(\b(?:copy|copied|retry|regenerate|share|edit|search|like|dislike|favorite|favourite|delete|report)\b|复制|重试|重新生成|分享|编辑|搜索|点赞|点踩|收藏|删除|举报)",
    )
    .expect("BUTTON_TEXT regex")
});

// =============================================================================
// Structure Patterns
// =============================================================================

/// Text ending in a question mark (ASCII or full-width).
pub static ENDS_WITH_QUESTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[?？]\s*$").expect("ENDS_WITH_QUESTION regex")
});

/// Sentence-terminal punctuation anywhere in the text.
pub static TERMINAL_PUNCTUATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[。！？.!?…]").expect("TERMINAL_PUNCTUATION regex")
});

/// Line ending a complete statement.
pub static ENDS_DECLARATIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[。！.!：:；;]\s*$").expect("ENDS_DECLARATIVE regex")
});

/// A numbered or bulleted list line.
pub static LIST_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^\s*(?:\d+[.、)]|[-*•·])\s*\S").expect("LIST_LINE regex")
});

// =============================================================================
// Sanitizer Patterns
// =============================================================================

/// "AI-generated" disclaimer boilerplate appended by chat sites.
///
/// Never spans a line break, so removal is local to one line.
pub static DISCLAIMER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(本回答由[ \t\x{3000}]*AI[ \t\x{3000}]*生成[，,、]?[ \t\x{3000}]*内容仅供参考[。.]?|内容由[ \t\x{3000}]*AI[ \t\x{3000}]*生成[，,、]?[ \t\x{3000}]*(?:请仔细甄别|仅供参考)[。.]?|以上内容由[ \t\x{3000}]*AI[ \t\x{3000}]*(?:生成|搜集)[，,、]?[ \t\x{3000}]*(?:仅供参考)?[。.]?|AI[- ]generated content may be inaccurate\.?|AI[- ]generated[,，]?[ \t]*for reference only\.?|ChatGPT can make mistakes\.?(?:[ \t]*Check important info\.?)?)",
    )
    .expect("DISCLAIMER regex")
});

/// Horizontal whitespace runs (including full-width and no-break spaces).
pub static HORIZONTAL_SPACE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[ \t\x{00A0}\x{3000}]+").expect("HORIZONTAL_SPACE regex")
});

/// Matches multiple consecutive newlines.
pub static MULTIPLE_NEWLINES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\n{3,}").expect("MULTIPLE_NEWLINES regex")
});

/// CJK action labels. Chinese prose is not space-delimited, so a label
/// standing alone between whitespace is always chrome.
pub const CJK_CHROME_LABELS: &[&str] = &[
    "复制", "已复制", "重试", "重新生成", "分享", "编辑", "搜索", "点赞", "点踩", "喜欢",
    "不喜欢", "收藏", "删除", "举报", "展开", "收起", "展开全部", "相关推荐", "猜你想问",
    "朗读", "引用",
];

/// English action labels. Only removed in runs or on their own line, since
/// words like "copy" and "share" occur in prose.
pub const LATIN_CHROME_LABELS: &[&str] = &[
    "copy", "copied", "retry", "regenerate", "share", "edit", "search", "like", "dislike",
    "favorite", "favourite", "delete", "report", "expand", "collapse", "related",
];

/// Multi-word chrome that only ever fills a whole line.
pub const CHROME_LINES: &[&str] = &[
    "copy code", "copy to clipboard", "read aloud", "show more", "show less", "edit message",
    "you may also ask", "related questions", "你可能还想问", "相关问题", "查看更多", "内容由豆包生成",
];
