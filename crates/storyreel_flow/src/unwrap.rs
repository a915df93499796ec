//! Reply extraction from variably-shaped engine responses.
//!
//! The flow engine's response schema is not contractually fixed: the same
//! flow can answer with a flat `{"text": ...}`, a nested outputs tree, or a
//! session-keyed message list depending on how it was built. The unwrapper
//! tries an ordered list of known shapes and falls back to echoing the raw
//! payload, so a chat turn always yields something displayable.

use serde_json::Value;
use tracing::warn;

type Strategy = fn(&Value) -> Option<String>;

/// Known response shapes, in priority order.
const STRATEGIES: &[Strategy] = &[
    top_level_text,
    first_output_text,
    nested_output_field,
    nested_results_message_text,
    nested_results_field,
    session_message_list,
];

/// Extract the assistant's reply text from a decoded engine response.
///
/// Tries each known response shape in priority order until one yields a
/// string. When nothing matches, returns a diagnostic embedding the whole
/// raw payload. Never panics.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use storyreel_flow::unwrap_reply;
///
/// let response = json!({"outputs": [{"text": "Here is your storyboard."}]});
/// assert_eq!(unwrap_reply(&response), "Here is your storyboard.");
/// ```
pub fn unwrap_reply(response: &Value) -> String {
    for strategy in STRATEGIES {
        if let Some(text) = strategy(response) {
            return text;
        }
    }

    warn!("No known response shape matched; echoing the raw payload");
    format!("Received a response in an unexpected format: {response}")
}

/// Try each key on `value` in order, returning the first string found.
fn first_string_field(value: &Value, keys: &[&str]) -> Option<String> {
    keys.iter()
        .find_map(|key| value.get(key).and_then(Value::as_str))
        .map(str::to_owned)
}

/// The first element of `outputs[0].outputs`, where most flow components
/// put their payload.
fn inner_output(response: &Value) -> Option<&Value> {
    response.get("outputs")?.get(0)?.get("outputs")?.get(0)
}

fn top_level_text(response: &Value) -> Option<String> {
    response.get("text").and_then(Value::as_str).map(str::to_owned)
}

fn first_output_text(response: &Value) -> Option<String> {
    response
        .get("outputs")?
        .get(0)?
        .get("text")
        .and_then(Value::as_str)
        .map(str::to_owned)
}

fn nested_output_field(response: &Value) -> Option<String> {
    first_string_field(inner_output(response)?, &["text", "content", "message", "result"])
}

fn nested_results_message_text(response: &Value) -> Option<String> {
    inner_output(response)?
        .get("results")?
        .get("message")?
        .get("text")
        .and_then(Value::as_str)
        .map(str::to_owned)
}

fn nested_results_field(response: &Value) -> Option<String> {
    first_string_field(
        inner_output(response)?.get("results")?,
        &["text", "content", "message"],
    )
}

/// Session-keyed shape: the reply hides in the first element of a list
/// under `outputs`, `messages`, or `response`.
fn session_message_list(response: &Value) -> Option<String> {
    response.get("session_id")?;

    for key in ["outputs", "messages", "response"] {
        let first = response.get(key).and_then(|list| list.get(0));
        if let Some(text) = first.and_then(|entry| entry.get("text")).and_then(Value::as_str) {
            return Some(text.to_owned());
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn top_level_text_wins() {
        let response = json!({"text": "hello"});
        assert_eq!(unwrap_reply(&response), "hello");
    }

    #[test]
    fn top_level_text_beats_nested_outputs() {
        let response = json!({
            "text": "top",
            "outputs": [{"text": "nested"}]
        });
        assert_eq!(unwrap_reply(&response), "top");
    }

    #[test]
    fn first_output_text_shape() {
        let response = json!({"outputs": [{"text": "from outputs"}]});
        assert_eq!(unwrap_reply(&response), "from outputs");
    }

    #[test]
    fn inner_output_field_priority_order() {
        let response = json!({
            "outputs": [{"outputs": [{"content": "by content", "message": "by message"}]}]
        });
        // "content" outranks "message" in the field priority list.
        assert_eq!(unwrap_reply(&response), "by content");
    }

    #[test]
    fn inner_output_result_field() {
        let response = json!({
            "outputs": [{"outputs": [{"result": "by result"}]}]
        });
        assert_eq!(unwrap_reply(&response), "by result");
    }

    #[test]
    fn results_message_text_shape() {
        let response = json!({
            "outputs": [{"outputs": [{"results": {"message": {"text": "deep reply"}}}]}]
        });
        assert_eq!(unwrap_reply(&response), "deep reply");
    }

    #[test]
    fn results_direct_field_shape() {
        let response = json!({
            "outputs": [{"outputs": [{"results": {"content": "results content"}}]}]
        });
        assert_eq!(unwrap_reply(&response), "results content");
    }

    #[test]
    fn session_keyed_message_list_shape() {
        let response = json!({
            "session_id": "s-1",
            "messages": [{"text": "from messages"}]
        });
        assert_eq!(unwrap_reply(&response), "from messages");
    }

    #[test]
    fn session_keyed_shape_checks_keys_in_order() {
        let response = json!({
            "session_id": "s-1",
            "outputs": [{"no_text_here": true}],
            "messages": [{"text": "second choice"}]
        });
        assert_eq!(unwrap_reply(&response), "second choice");
    }

    #[test]
    fn non_string_text_is_not_usable() {
        let response = json!({"text": 42, "outputs": [{"text": "fallback"}]});
        assert_eq!(unwrap_reply(&response), "fallback");
    }

    #[test]
    fn unknown_shape_echoes_the_raw_payload() {
        let response = json!({"surprise": {"shape": true}});
        let reply = unwrap_reply(&response);
        assert!(reply.contains("unexpected format"));
        assert!(reply.contains("surprise"));
    }
}
