use super::*;

#[test]
fn extracts_fenced_block_with_language_hint() {
    let raw = "```js\nconsole.log(1)\n```";
    assert_eq!(extract_code_block(raw), "console.log(1)");
}

#[test]
fn extracts_fenced_block_without_language_hint() {
    let raw = "```\nlet x = 1;\n```";
    assert_eq!(extract_code_block(raw), "let x = 1;");
}

#[test]
fn unfenced_text_passes_through() {
    assert_eq!(extract_code_block("print(5)"), "print(5)");
}

#[test]
fn unterminated_fence_passes_through() {
    let raw = "```python\nprint(5)";
    assert_eq!(extract_code_block(raw), raw);
}

#[test]
fn fence_not_at_start_passes_through() {
    let raw = "Here you go:\n```js\nconsole.log(1)\n```";
    assert_eq!(extract_code_block(raw), raw);
}

#[test]
fn classify_recognizes_credential_failures() {
    assert_eq!(
        GenerateError::classify("API key not valid. Please pass a valid API key."),
        GenerateError::InvalidApiKey
    );
}

#[test]
fn classify_recognizes_quota_failures() {
    assert_eq!(
        GenerateError::classify("Resource has been exhausted: quota"),
        GenerateError::QuotaExceeded
    );
}

#[test]
fn classify_wraps_other_messages() {
    assert_eq!(
        GenerateError::classify("connection reset"),
        GenerateError::Upstream("connection reset".to_string())
    );
}

#[test]
fn classify_empty_message_suggests_retry() {
    assert_eq!(GenerateError::classify(""), GenerateError::Unknown);
}

#[test]
fn prompt_template_wraps_user_task() {
    let formatted = format_prompt("reverse a list");
    assert!(formatted.starts_with("You are an expert programmer."));
    assert!(formatted.contains("reverse a list"));
    assert!(formatted.contains("Return ONLY the code, no explanations"));
    assert!(formatted.ends_with("Code:"));
}
