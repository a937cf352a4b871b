use ai_reply_extract::classifier::{
    classify, classify_text, classify_with_options, label_for_score, label_with_threshold,
};
use ai_reply_extract::{dom, Options, RoleLabel, SiteProfile, SiteRegistry};

fn profile(host: &str) -> SiteProfile {
    SiteRegistry::builtin()
        .resolve(host)
        .cloned()
        .expect("builtin profile")
}

#[test]
fn short_interrogative_question_reads_as_user() {
    let verdict = classify_text("怎么办？", &profile("chat.deepseek.com"), &Options::default());
    assert_eq!(verdict.label, RoleLabel::User);
    assert_eq!(verdict.score, -1.5);
}

#[test]
fn structured_answer_with_answer_vocabulary_reads_as_ai() {
    let text = "根据您的情况，建议您采取以下措施：\n\n1. ...\n\n如果您还有其他问题，请随时告诉我。";
    let verdict = classify_text(text, &profile("chat.deepseek.com"), &Options::default());
    assert_eq!(verdict.label, RoleLabel::Ai);
    assert!(verdict.reasons.iter().any(|r| r == "text:ai-vocabulary"));
    assert!(verdict.reasons.iter().any(|r| r == "text:structured"));
}

#[test]
fn prompt_vocabulary_blocks_answer_bonus() {
    let text = "请问根据这个情况，我需要怎么调整仓位？";
    let verdict = classify_text(text, &profile("chat.deepseek.com"), &Options::default());
    assert_eq!(verdict.label, RoleLabel::User);
    assert!(!verdict.reasons.iter().any(|r| r == "text:ai-vocabulary"));
}

#[test]
fn site_keywords_count_as_answer_vocabulary() {
    let verdict = classify_text(
        "豆包为你整理了这份清单",
        &profile("www.doubao.com"),
        &Options::default(),
    );
    assert_eq!(verdict.score, 1.0);
    assert_eq!(verdict.label, RoleLabel::Ai);
}

#[test]
fn user_avatar_alone_is_user() {
    let doc = dom::parse(
        r#"<html><body><div class="row"><div id="msg"><img class="user-avatar" src="/a.png"><span>hi</span></div></div></body></html>"#,
    );
    let verdict = classify(&doc.select("#msg"), &profile("chat.deepseek.com"));
    assert_eq!(verdict.score, -2.0);
    assert_eq!(verdict.label, RoleLabel::User);
}

#[test]
fn chatgpt_role_attribute_is_a_marker() {
    let doc = dom::parse(
        r#"<div data-message-author-role="assistant"><div class="markdown" id="t"><p>answer</p></div></div>
           <div data-message-author-role="user"><div class="whitespace-pre-wrap" id="u">question</div></div>"#,
    );
    let chatgpt = profile("chatgpt.com");
    assert_eq!(classify(&doc.select("#t"), &chatgpt).label, RoleLabel::Ai);
    assert_eq!(classify(&doc.select("#u"), &chatgpt).label, RoleLabel::User);
}

#[test]
fn layout_words_are_not_assistant_vocabulary() {
    let doc = dom::parse(
        r#"<div class="main-container"><div class="bottom-panel"><p id="t">text</p></div></div>"#,
    );
    let verdict = classify(&doc.select("#t"), &profile("chat.deepseek.com"));
    assert_eq!(verdict.score, 0.0);
    assert_eq!(verdict.label, RoleLabel::Uncertain);
}

#[test]
fn utility_classes_do_not_cancel_assistant_marker() {
    let doc = dom::parse(
        r#"<div data-message-author-role="assistant"><div class="flex flex-col items-start self-start"><div id="t">answer</div></div></div>"#,
    );
    let verdict = classify(&doc.select("#t"), &profile("chatgpt.com"));
    assert_eq!(verdict.score, 2.0);
    assert_eq!(verdict.label, RoleLabel::Ai);
    assert!(!verdict.reasons.iter().any(|r| r == "path:user" || r == "ancestor:user"));
}

#[test]
fn margin_utility_class_does_not_cancel_assistant_avatar() {
    let doc = dom::parse(
        r#"<div class="row"><img class="bot-avatar"><div class="me-2"><div id="t">answer</div></div></div>"#,
    );
    let verdict = classify(&doc.select("#t"), &profile("chat.deepseek.com"));
    assert_eq!(verdict.score, 2.0);
    assert_eq!(verdict.reasons, vec!["avatar:ai"]);
}

#[test]
fn thresholds_are_strict_and_symmetric() {
    for (score, expected) in [
        (0.5, RoleLabel::Uncertain),
        (0.50001, RoleLabel::Ai),
        (-0.5, RoleLabel::Uncertain),
        (-0.50001, RoleLabel::User),
        (0.0, RoleLabel::Uncertain),
    ] {
        assert_eq!(label_for_score(score), expected, "score {score}");
    }
}

#[test]
fn custom_threshold_widens_uncertain_band() {
    assert_eq!(label_with_threshold(1.0, 1.5), RoleLabel::Uncertain);
    assert_eq!(label_with_threshold(2.0, 1.5), RoleLabel::Ai);

    let doc = dom::parse(r#"<div class="chat-assistant"><p id="t">x</p></div>"#);
    let options = Options {
        uncertain_threshold: 1.5,
        ..Options::default()
    };
    let verdict = classify_with_options(&doc.select("#t"), &profile("chat.deepseek.com"), &options);
    // path +1, ancestor +1
    assert_eq!(verdict.score, 2.0);
    assert_eq!(verdict.label, RoleLabel::Ai);
}

#[test]
fn classification_is_a_pure_function_of_the_snapshot() {
    let html = r#"<div class="segment segment-assistant"><div class="segment-avatar"><img alt="Kimi"></div>
                  <div class="markdown" id="t"><p>answer</p></div></div>"#;
    let kimi = profile("kimi.moonshot.cn");
    let first = classify(&dom::parse(html).select("#t"), &kimi);
    for _ in 0..5 {
        let again = classify(&dom::parse(html).select("#t"), &kimi);
        assert_eq!(again, first);
    }
}
