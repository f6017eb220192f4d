use super::*;

#[test]
fn transcript_starts_with_welcome_entry() {
    let state = AssistantState::default();
    let messages = state.messages();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].role, MessageRole::Assistant);
    assert!(!messages[0].is_error);
    assert_eq!(state.in_flight(), 0);
}

#[test]
fn resolve_inserts_reply_after_user_entry() {
    let mut state = AssistantState::default();
    let id = state.push_prompt("sort an array".to_string());
    assert_eq!(state.in_flight(), 1);

    assert!(state.resolve(id, Ok("fn sort() {}".to_string())));

    let messages = state.messages();
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[1].id, id);
    assert_eq!(messages[2].role, MessageRole::Assistant);
    assert_eq!(messages[2].content, "fn sort() {}");
    assert_eq!(state.in_flight(), 0);
}

#[test]
fn resolve_replaces_existing_reply_in_place() {
    let mut state = AssistantState::default();
    let first = state.push_prompt("first".to_string());
    state.resolve(first, Err(GenerateError::QuotaExceeded));
    let second = state.push_prompt("second".to_string());
    state.resolve(second, Ok("two".to_string()));

    let before = state.messages().len();
    state.begin_regenerate(first).unwrap();
    state.resolve(first, Ok("one".to_string()));

    let messages = state.messages();
    // Length unchanged: one new assistant entry replaced one old one.
    assert_eq!(messages.len(), before);
    assert_eq!(messages[2].content, "one");
    assert!(!messages[2].is_error);
    // Everything after keeps its position.
    assert_eq!(messages[3].id, second);
    assert_eq!(messages[4].content, "two");
}

#[test]
fn resolve_error_is_flagged_and_carries_message() {
    let mut state = AssistantState::default();
    let id = state.push_prompt("hello".to_string());
    state.resolve(id, Err(GenerateError::Unknown));

    let reply = state.messages().last().unwrap();
    assert!(reply.is_error);
    assert_eq!(
        reply.content,
        "Failed to generate code. Please try again with a more specific prompt."
    );
}

#[test]
fn begin_regenerate_rejects_assistant_entries() {
    let mut state = AssistantState::default();
    let id = state.push_prompt("hello".to_string());
    state.resolve(id, Ok("code".to_string()));
    let reply_id = state.messages().last().unwrap().id;

    assert!(state.begin_regenerate(reply_id).is_none());
    assert!(state.begin_regenerate(9999).is_none());
    assert_eq!(state.in_flight(), 0);
}

#[test]
fn resolve_unknown_id_leaves_transcript_untouched() {
    let mut state = AssistantState::default();
    let before = state.messages().to_vec();

    state.resolve(9999, Ok("code".to_string()));
    assert_eq!(state.messages(), &before[..]);
}
