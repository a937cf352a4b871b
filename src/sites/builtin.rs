//! Built-in site profiles.
//!
//! Selectors are listed most specific first. Hashed class names change with
//! every site deploy, so the lists lean on `data-*` attributes and stable
//! semantic classes, with a generic fallback last.

use super::{RoleFeatures, SiteProfile};

pub(super) fn profiles() -> Vec<SiteProfile> {
    vec![chatgpt(), deepseek(), kimi(), doubao()]
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

fn chatgpt() -> SiteProfile {
    SiteProfile {
        host: "chatgpt.com".to_string(),
        aliases: strings(&["chat.openai.com"]),
        display_name: "ChatGPT".to_string(),
        candidate_selectors: strings(&[
            r#"div[data-message-author-role="assistant"] .markdown"#,
            r#"div[data-message-author-role="assistant"]"#,
            r#"article[data-testid^="conversation-turn"]"#,
        ]),
        generic_selectors: strings(&[r#"article[data-testid^="conversation-turn"]"#]),
        exclude_selectors: strings(&[
            r#"[class*="reasoning"]"#,
            r#"[class*="thought"]"#,
            r#"[data-testid*="reasoning"]"#,
        ]),
        role_features: RoleFeatures {
            user_keywords: Vec::new(),
            ai_keywords: strings(&["chatgpt"]),
            thinking_keywords: strings(&["thought for", "reasoned for", "思考了"]),
            container_class_hints: strings(&["markdown", "agent-turn"]),
            user_class_hints: strings(&["user-message", "whitespace-pre-wrap"]),
        },
        button_anchor_selector: None,
    }
}

fn deepseek() -> SiteProfile {
    SiteProfile {
        host: "chat.deepseek.com".to_string(),
        aliases: Vec::new(),
        display_name: "DeepSeek".to_string(),
        candidate_selectors: strings(&[
            ".ds-markdown.ds-markdown--block",
            ".ds-markdown",
            r#"div[class*="message"]"#,
        ]),
        generic_selectors: strings(&[r#"div[class*="message"]"#]),
        exclude_selectors: strings(&[
            ".ds-think-content",
            ".thinking-container",
            r#"[class*="think-container"]"#,
            r#"[class*="thinking"]"#,
        ]),
        role_features: RoleFeatures {
            user_keywords: Vec::new(),
            ai_keywords: strings(&["deepseek"]),
            thinking_keywords: strings(&["已深度思考", "深度思考中", "thought for"]),
            container_class_hints: strings(&["ds-markdown"]),
            user_class_hints: strings(&["user-message"]),
        },
        button_anchor_selector: None,
    }
}

fn kimi() -> SiteProfile {
    SiteProfile {
        host: "kimi.moonshot.cn".to_string(),
        aliases: strings(&["www.kimi.com", "kimi.com"]),
        display_name: "Kimi".to_string(),
        candidate_selectors: strings(&[
            ".segment-assistant .markdown",
            ".chat-content-item-assistant .markdown",
            ".segment-assistant",
            ".segment-content",
        ]),
        generic_selectors: strings(&[".segment-assistant", ".segment-content"]),
        exclude_selectors: strings(&[
            ".thinking-container",
            ".toolcall-container",
            r#"[class*="think-stage"]"#,
        ]),
        role_features: RoleFeatures {
            user_keywords: Vec::new(),
            ai_keywords: strings(&["kimi"]),
            thinking_keywords: strings(&["思考中", "已完成思考", "thinking"]),
            container_class_hints: strings(&["segment-assistant", "chat-content-item-assistant"]),
            user_class_hints: strings(&["segment-user", "chat-content-item-user"]),
        },
        button_anchor_selector: Some(".segment-assistant-actions".to_string()),
    }
}

fn doubao() -> SiteProfile {
    SiteProfile {
        host: "www.doubao.com".to_string(),
        aliases: strings(&["doubao.com"]),
        display_name: "Doubao".to_string(),
        candidate_selectors: strings(&[
            r#"[data-testid="receive_message"] [data-testid="message_text_content"]"#,
            r#"[data-testid="receive_message"]"#,
            r#"[data-testid="message_text_content"]"#,
        ]),
        generic_selectors: strings(&[
            r#"[data-testid="receive_message"]"#,
            r#"[data-testid="message_text_content"]"#,
        ]),
        exclude_selectors: strings(&[
            r#"[data-testid="think_block"]"#,
            r#"[class*="thinking"]"#,
            r#"[data-testid*="search_result"]"#,
        ]),
        role_features: RoleFeatures {
            user_keywords: Vec::new(),
            ai_keywords: strings(&["豆包"]),
            thinking_keywords: strings(&["深度思考", "已完成思考"]),
            container_class_hints: strings(&["receive-message", "receive_message"]),
            user_class_hints: strings(&["send-message", "send_message"]),
        },
        button_anchor_selector: Some(r#"[data-testid="message_action_bar"]"#.to_string()),
    }
}
