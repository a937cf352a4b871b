//! End-to-end locate tests against page snapshots shaped like each
//! supported site.

#![allow(clippy::expect_used)] // expect() is appropriate in tests for clear panic messages

use ai_reply_extract::{locate, RoleLabel, SiteRegistry};

const CHATGPT_PAGE: &str = r#"
<html><body><main><div class="flex h-full flex-col">
  <article data-testid="conversation-turn-1" class="w-full">
    <h5 class="sr-only">You said:</h5>
    <div data-message-author-role="user" data-message-id="u-1">
      <div class="whitespace-pre-wrap">Can you explain what a margin call is?</div>
    </div>
  </article>
  <article data-testid="conversation-turn-2" class="w-full">
    <h6 class="sr-only">ChatGPT said:</h6>
    <div data-message-author-role="assistant" data-message-id="a-1">
      <div class="markdown prose w-full break-words">
        <p>A margin call happens when the equity in your account falls below the maintenance requirement.</p>
        <p>You can meet it by depositing funds or closing positions.</p>
      </div>
    </div>
    <div class="flex"><button aria-label="Copy">Copy</button> <button aria-label="Read aloud">Read aloud</button></div>
  </article>
  <div class="text-xs">ChatGPT can make mistakes. Check important info.</div>
</div></main></body></html>
"#;

const DEEPSEEK_PAGE: &str = r#"
<html><body><div class="conversation">
  <div class="message user-message"><div class="fbb737a4">什么是强平？</div></div>
  <div class="message assistant-message">
    <img class="avatar" src="/static/deepseek-logo.svg" alt="DeepSeek">
    <div class="ds-think-content"><p>用户在问强平，我需要解释保证金和维持保证金率的概念，再给出建议。</p></div>
    <div class="ds-markdown ds-markdown--block">
      <p>强平是指账户保证金不足以维持当前仓位时，交易所强制平掉仓位的机制。</p>
    </div>
    <div class="ds-flex actions"><span>复制</span> <span>重试</span></div>
  </div>
  <div class="message user-message"><div class="fbb737a4">怎么避免？</div></div>
  <div class="message assistant-message">
    <img class="avatar" src="/static/deepseek-logo.svg" alt="DeepSeek">
    <div class="ds-markdown ds-markdown--block">
      <p>根据您的情况，建议您采取以下措施：</p>
      <ol><li>补充保证金。</li><li>降低杠杆倍数。</li></ol>
      <p>如果您还有其他问题，请随时告诉我。</p>
      <p>本回答由 AI 生成，内容仅供参考</p>
    </div>
  </div>
</div></body></html>
"#;

const KIMI_PAGE: &str = r#"
<html><body><div class="chat-content-list">
  <div class="chat-content-item chat-content-item-user">
    <div class="segment segment-user"><div class="segment-content-box">帮我总结一下今天的行情</div></div>
  </div>
  <div class="chat-content-item chat-content-item-assistant">
    <div class="segment segment-assistant">
      <div class="toolcall-container"><p>已搜索到 12 个网页，正在阅读相关的行情资讯和分析文章。</p></div>
      <div class="markdown">
        <p>今天大盘整体震荡上行，成交量较昨日放大，科技板块领涨。</p>
      </div>
      <div class="segment-assistant-actions" id="kimi-bar"><span>复制</span> <span>再试一次</span> <span>分享</span></div>
    </div>
  </div>
</div></body></html>
"#;

const DOUBAO_PAGE: &str = r#"
<html><body><div class="message-list">
  <div data-testid="send_message" class="send-message">
    <div data-testid="message_text_content">请问明天会下雨吗？</div>
  </div>
  <div data-testid="receive_message" class="receive-message">
    <img class="avatar" src="/doubao-logo.png" alt="豆包">
    <div class="message-content">
      <div data-testid="message_text_content">根据天气预报，明天有小到中雨，出门记得带伞。
        <br>气温在 18 到 24 度之间。
        <br>明天适合户外运动吗？
        <br>需要我帮你查一下后天的天气吗？
      </div>
    </div>
    <div data-testid="message_action_bar"><span>复制</span> <span>重新生成</span></div>
  </div>
</div></body></html>
"#;

#[test]
fn chatgpt_assistant_turn_is_found_and_cleaned() {
    let registry = SiteRegistry::builtin();
    let result = locate(CHATGPT_PAGE, "chatgpt.com", &registry).expect("located");

    assert_eq!(result.regions.len(), 1);
    let region = &result.regions[0];
    assert_eq!(region.verdict.label, RoleLabel::Ai);
    assert!(region.text.starts_with("A margin call happens"));
    assert!(region.text.ends_with("closing positions."));
    assert!(!region.text.contains("Copy"));
    assert!(!region.text.contains("Can you explain"));
}

#[test]
fn deepseek_turns_skip_thinking_and_disclaimer() {
    let registry = SiteRegistry::builtin();
    let result = locate(DEEPSEEK_PAGE, "chat.deepseek.com", &registry).expect("located");

    assert_eq!(result.regions.len(), 2);
    assert!(result.regions.iter().all(|r| r.verdict.label == RoleLabel::Ai));
    assert_eq!(
        result.regions[0].text,
        "强平是指账户保证金不足以维持当前仓位时，交易所强制平掉仓位的机制。"
    );

    let second = &result.regions[1].text;
    assert!(second.starts_with("根据您的情况，建议您采取以下措施："));
    assert!(second.contains("降低杠杆倍数。"));
    assert!(second.ends_with("如果您还有其他问题，请随时告诉我。"));
    assert!(!second.contains("本回答由"));
    assert!(result.regions.iter().all(|r| !r.text.contains("用户在问强平")));
}

#[test]
fn kimi_anchor_is_the_action_bar() {
    let registry = SiteRegistry::builtin();
    let result = locate(KIMI_PAGE, "kimi.moonshot.cn", &registry).expect("located");

    assert_eq!(result.regions.len(), 1);
    let region = &result.regions[0];
    assert!(region.verdict.is_ai());
    assert!(region.anchor_path.ends_with("div.segment-assistant-actions"));
    assert_eq!(
        region.text,
        "今天大盘整体震荡上行，成交量较昨日放大，科技板块领涨。"
    );
}

#[test]
fn doubao_reply_drops_follow_up_questions() {
    let registry = SiteRegistry::builtin();
    let result = locate(DOUBAO_PAGE, "www.doubao.com", &registry).expect("located");

    assert_eq!(result.regions.len(), 1);
    let region = &result.regions[0];
    assert!(region.verdict.is_ai(), "verdict {:?}", region.verdict);
    assert_ne!(region.anchor_path, region.dom_path);
    assert_eq!(
        region.text,
        "根据天气预报，明天有小到中雨，出门记得带伞。\n\n气温在 18 到 24 度之间。"
    );
}

#[test]
fn latest_reply_is_the_last_assistant_turn() {
    let registry = SiteRegistry::builtin();
    let result = locate(DEEPSEEK_PAGE, "chat.deepseek.com", &registry).expect("located");
    assert_eq!(result.latest_reply().map(|r| r.index), Some(1));
}
