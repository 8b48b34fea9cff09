use super::*;

const DEFAULT: &str = "Tem certeza que deseja realizar esta ação?";

#[test]
fn attribute_text_is_the_prompt() {
    assert_eq!(confirm_message(Some("Excluir categoria?"), DEFAULT), "Excluir categoria?");
}

#[test]
fn missing_or_empty_attribute_uses_default() {
    assert_eq!(confirm_message(None, DEFAULT), DEFAULT);
    assert_eq!(confirm_message(Some(""), DEFAULT), DEFAULT);
}

#[test]
fn whitespace_attribute_is_kept() {
    assert_eq!(confirm_message(Some(" "), DEFAULT), " ");
}

#[test]
fn accepted_prompt_lets_action_run() {
    let decision = Decision::from_prompt::<()>(Ok(true));
    assert_eq!(decision, Decision::Proceed);
    assert!(!decision.prevents_default());
}

#[test]
fn declined_prompt_suppresses_action() {
    let decision = Decision::from_prompt::<()>(Ok(false));
    assert_eq!(decision, Decision::Cancel);
    assert!(decision.prevents_default());
}

#[test]
fn failed_prompt_suppresses_action() {
    assert!(Decision::from_prompt(Err("blocked")).prevents_default());
}
