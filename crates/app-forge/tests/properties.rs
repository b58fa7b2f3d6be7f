use app_forge::{build_instruction, classify, sanitize, Category, FALLBACK_HTML};
use proptest::prelude::*;

// ── sanitize ───────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn sanitize_is_idempotent(raw in any::<String>()) {
        let once = sanitize(Some(&raw));
        let twice = sanitize(Some(&once));
        prop_assert_eq!(&once, &twice, "Not idempotent for input {:?}", raw);
    }

    #[test]
    fn sanitize_is_idempotent_on_fenced_documents(
        body in "[ -~\n]{0,200}",
        lead in prop::sample::select(vec!["```html\n", "```HTML", "```\n", "", "  ```html  "]),
        trail in prop::sample::select(vec!["\n```", "```", "```\n\n", ""]),
    ) {
        let raw = format!("{lead}{body}{trail}");
        let once = sanitize(Some(&raw));
        prop_assert_eq!(&once, &sanitize(Some(&once)));
    }

    #[test]
    fn sanitized_output_has_no_outer_fences(raw in "(```(html)?)?[a-z<>/ \n]{0,80}(```)?") {
        let cleaned = sanitize(Some(&raw));
        prop_assert!(!cleaned.starts_with("```"), "leading fence in {:?}", cleaned);
        prop_assert!(!cleaned.ends_with("```"), "trailing fence in {:?}", cleaned);
        prop_assert!(!cleaned.is_empty());
    }

    #[test]
    fn fenced_document_round_trips_to_body(body in "<[a-z]{1,8}>[a-zA-Z0-9 ]{0,40}</[a-z]{1,8}>") {
        let raw = format!("```html\n{body}\n```");
        prop_assert_eq!(sanitize(Some(&raw)), body);
    }
}

#[test]
fn sanitize_absent_input_is_fallback() {
    assert_eq!(sanitize(None), FALLBACK_HTML);
    assert_eq!(sanitize(Some(FALLBACK_HTML)), FALLBACK_HTML);
}

// ── classify / build_instruction ───────────────────────────────────────────

proptest! {
    #[test]
    fn classify_is_pure(idea in any::<String>()) {
        prop_assert_eq!(classify(&idea), classify(&idea));
    }

    #[test]
    fn wallet_ideas_are_fintech(prefix in "[a-zA-Z ]{0,30}", suffix in "[a-zA-Z ]{0,30}") {
        let idea = format!("{prefix}wallet{suffix}");
        prop_assert_eq!(classify(&idea).category, Category::Fintech);
    }

    #[test]
    fn shop_and_chat_resolve_to_social(filler in "[0-9 ]{0,20}") {
        // Fintech keywords cannot appear in digits and spaces.
        let idea = format!("shop {filler} chat");
        prop_assert_eq!(classify(&idea).category, Category::Social);
        let reversed = format!("chat {filler} shop");
        prop_assert_eq!(classify(&reversed).category, Category::Social);
    }

    #[test]
    fn instruction_embeds_idea_verbatim(idea in any::<String>()) {
        let instruction = build_instruction(&idea, classify(&idea));
        prop_assert!(instruction.contains(&idea));
    }
}
