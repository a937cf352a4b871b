//! Edge case integration tests
//!
//! Fallback selectors, the uncertain band, content fallback and error kinds.

#![allow(clippy::expect_used)] // expect() is appropriate in tests for clear panic messages

use ai_reply_extract::{
    locate, locate_with_options, Error, Options, RoleLabel, SiteRegistry,
};

/// A DeepSeek page after a redesign: the stable reply class is gone and only
/// the generic fallback selector matches, capturing the whole turn.
const REDESIGNED_DEEPSEEK: &str = r#"
<html><body><div class="chat">
  <div class="chat-message assistant-message">
    <div class="header">DeepSeek</div>
    <div class="thinking-block">已深度思考（用时 5 秒），需要先解释杠杆和保证金的关系</div>
    <div class="body"><p>根据您的描述，建议先降低杠杆，再补充保证金，以避免触发强平。</p></div>
    <div class="toolbar"><span>复制</span> <span>重试</span> <span>分享</span></div>
  </div>
</div></body></html>
"#;

/// A ChatGPT turn without the author-role attribute: only the whole-turn
/// fallback selector matches.
const CHATGPT_TURN_ONLY: &str = r#"
<html><body><main>
  <article data-testid="conversation-turn-2" class="w-full">
    <h6 class="sr-only">ChatGPT said:</h6>
    <div class="turn-body"><p>A margin call happens when the equity in your account falls below the maintenance requirement.</p></div>
    <div class="flex"><button>Copy</button> <button>Read aloud</button></div>
  </article>
</main></body></html>
"#;

/// Reply text with no DOM role signals at all.
const SIGNAL_FREE: &str = r#"
<html><body><div><div class="ds-markdown">
  <p>根据您的情况，建议您采取以下措施：</p>
  <p>1. 补充保证金</p>
  <p>如果您还有其他问题，请随时告诉我。</p>
</div></div></body></html>
"#;

#[test]
fn generic_selector_is_narrowed_to_best_candidate() {
    let registry = SiteRegistry::builtin();
    let result = locate(REDESIGNED_DEEPSEEK, "chat.deepseek.com", &registry).expect("located");

    assert_eq!(result.regions.len(), 1);
    let region = &result.regions[0];
    assert_eq!(region.selector, r#"div[class*="message"]"#);
    assert!(region.verdict.is_ai());
    assert_eq!(
        region.text,
        "根据您的描述，建议先降低杠杆，再补充保证金，以避免触发强平。"
    );
    assert!(!region.candidates.is_empty());
    assert!(region.candidates.len() <= Options::default().top_k);
    assert!(region
        .candidates
        .windows(2)
        .all(|w| w[0].score >= w[1].score));
    assert!(region.candidates.iter().all(|c| !c.descriptor.contains("thinking")));
}

#[test]
fn narrowed_region_anchors_on_best_candidate() {
    let registry = SiteRegistry::builtin();
    let result = locate(CHATGPT_TURN_ONLY, "chatgpt.com", &registry).expect("located");

    let region = &result.regions[0];
    assert_eq!(region.selector, r#"article[data-testid^="conversation-turn"]"#);
    assert!(region.dom_path.ends_with("article.w-full"));
    assert_ne!(region.anchor_path, region.dom_path);
    assert!(region.anchor_path.ends_with("div.turn-body > p"));
    assert!(region.text.starts_with("A margin call happens"));
}

#[test]
fn passed_over_selectors_are_reported_as_warnings() {
    let registry = SiteRegistry::builtin();
    let result = locate(REDESIGNED_DEEPSEEK, "chat.deepseek.com", &registry).expect("located");
    assert_eq!(result.warnings.len(), 2);
    assert!(result.warnings[0].contains(".ds-markdown.ds-markdown--block"));
}

#[test]
fn content_fallback_decides_signal_free_region() {
    let registry = SiteRegistry::builtin();
    let result = locate(SIGNAL_FREE, "chat.deepseek.com", &registry).expect("located");
    let region = &result.regions[0];
    assert_eq!(region.verdict.label, RoleLabel::Ai);
    assert!(region.verdict.reasons.iter().any(|r| r.starts_with("text:")));
}

#[test]
fn without_content_fallback_region_stays_uncertain_and_is_not_injected() {
    let registry = SiteRegistry::builtin();
    let options = Options {
        content_fallback: false,
        ..Options::default()
    };
    let result =
        locate_with_options(SIGNAL_FREE, "chat.deepseek.com", &registry, &options).expect("located");
    let region = &result.regions[0];
    assert_eq!(region.verdict.label, RoleLabel::Uncertain);
    assert_eq!(region.verdict.score, 0.0);
    assert_eq!(result.injectable(options.inject_uncertain).count(), 0);
    assert_eq!(result.injectable(true).count(), 1);
}

#[test]
fn user_turns_matched_by_generic_selector_are_not_injected() {
    let html = r#"
        <html><body><div class="chat">
          <div class="chat-message user-message"><img class="user-avatar" src="/me.png">
            <div class="body"><p>请问我的仓位为什么会被强平，能不能帮我分析一下原因？</p></div></div>
          <div class="chat-message assistant-message"><img class="avatar" alt="DeepSeek" src="/logo.svg">
            <div class="body"><p>根据您的描述，建议先降低杠杆，再补充保证金，以避免触发强平。</p></div></div>
        </div></body></html>
    "#;
    let registry = SiteRegistry::builtin();
    let result = locate(html, "chat.deepseek.com", &registry).expect("located");

    assert_eq!(result.regions.len(), 2);
    assert_eq!(result.regions[0].verdict.label, RoleLabel::User);
    assert_eq!(result.regions[1].verdict.label, RoleLabel::Ai);
    let injected: Vec<usize> = result.injectable(false).map(|r| r.index).collect();
    assert_eq!(injected, vec![1]);
}

#[test]
fn unsupported_host_does_no_work() {
    let registry = SiteRegistry::builtin();
    let err = locate(SIGNAL_FREE, "chat.example.org", &registry).expect_err("unsupported");
    assert!(matches!(err, Error::UnsupportedHost(ref host) if host == "chat.example.org"));
}

#[test]
fn empty_page_has_no_response_region() {
    let registry = SiteRegistry::builtin();
    for host in ["chatgpt.com", "chat.deepseek.com", "kimi.moonshot.cn", "www.doubao.com"] {
        let err = locate("<html><body></body></html>", host, &registry).expect_err("empty");
        assert!(matches!(err, Error::NoResponseRegion), "{host}: {err:?}");
    }
}

#[test]
fn raised_quality_gate_skips_short_regions() {
    let registry = SiteRegistry::builtin();
    let options = Options {
        min_region_len: 500,
        ..Options::default()
    };
    let err = locate_with_options(SIGNAL_FREE, "chat.deepseek.com", &registry, &options)
        .expect_err("nothing long enough");
    assert!(matches!(err, Error::NoResponseRegion));
}
