use super::{JsonNode, Token, TokenKind};
use serde_json::Value;
use thiserror::Error;

/// Deepest nesting the tree view will lay out
pub const MAX_DEPTH: usize = 128;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("value is nested deeper than {0} levels")]
    TooDeep(usize),
}

pub fn build_json_tree(value: &Value) -> Result<JsonNode, RenderError> {
    build_node(value, 0)
}

fn build_node(value: &Value, depth: usize) -> Result<JsonNode, RenderError> {
    if depth > MAX_DEPTH {
        return Err(RenderError::TooDeep(MAX_DEPTH));
    }

    let node = match value {
        Value::Null => leaf(TokenKind::Null, "null"),
        Value::Bool(b) => leaf(TokenKind::Boolean, b.to_string()),
        Value::Number(n) => leaf(TokenKind::Number, n.to_string()),
        Value::String(s) => leaf(TokenKind::String, quote(s)),
        Value::Array(items) if items.is_empty() => leaf(TokenKind::Punctuation, "[]"),
        Value::Array(items) => JsonNode::Array(
            items
                .iter()
                .map(|item| build_node(item, depth + 1))
                .collect::<Result<_, _>>()?,
        ),
        Value::Object(map) if map.is_empty() => leaf(TokenKind::Punctuation, "{}"),
        Value::Object(map) => JsonNode::Object(
            map.iter()
                .map(|(key, val)| {
                    build_node(val, depth + 1)
                        .map(|node| (Token::new(TokenKind::Key, quote(key)), node))
                })
                .collect::<Result<_, _>>()?,
        ),
    };

    Ok(node)
}

fn leaf(kind: TokenKind, text: impl Into<String>) -> JsonNode {
    JsonNode::Leaf(Token::new(kind, text))
}

/// JSON string literal, escapes included
fn quote(s: &str) -> String {
    Value::String(s.to_string()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn leaf_of(kind: TokenKind, text: &str) -> JsonNode {
        JsonNode::Leaf(Token::new(kind, text))
    }

    #[test]
    fn test_scalars() {
        assert_eq!(build_json_tree(&json!(null)).unwrap(), leaf_of(TokenKind::Null, "null"));
        assert_eq!(build_json_tree(&json!(true)).unwrap(), leaf_of(TokenKind::Boolean, "true"));
        assert_eq!(build_json_tree(&json!(false)).unwrap(), leaf_of(TokenKind::Boolean, "false"));
        assert_eq!(build_json_tree(&json!(42)).unwrap(), leaf_of(TokenKind::Number, "42"));
        assert_eq!(build_json_tree(&json!(-1.5)).unwrap(), leaf_of(TokenKind::Number, "-1.5"));
        assert_eq!(
            build_json_tree(&json!("Roadmap")).unwrap(),
            leaf_of(TokenKind::String, "\"Roadmap\"")
        );
    }

    #[test]
    fn test_strings_are_escaped() {
        assert_eq!(
            build_json_tree(&json!("say \"hi\"\n")).unwrap(),
            leaf_of(TokenKind::String, r#""say \"hi\"\n""#)
        );
    }

    #[test]
    fn test_empty_containers_collapse() {
        assert_eq!(build_json_tree(&json!([])).unwrap(), leaf_of(TokenKind::Punctuation, "[]"));
        assert_eq!(build_json_tree(&json!({})).unwrap(), leaf_of(TokenKind::Punctuation, "{}"));
    }

    #[test]
    fn test_nested_arrays() {
        let tree = build_json_tree(&json!([1, [2, []]])).unwrap();
        assert_eq!(
            tree,
            JsonNode::Array(vec![
                leaf_of(TokenKind::Number, "1"),
                JsonNode::Array(vec![
                    leaf_of(TokenKind::Number, "2"),
                    leaf_of(TokenKind::Punctuation, "[]"),
                ]),
            ])
        );
    }

    #[test]
    fn test_nested_objects_keep_key_order() {
        let value: Value =
            serde_json::from_str(r#"{"zeta":{"name":"Tasks","archived":false},"alpha":{}}"#)
                .unwrap();
        let tree = build_json_tree(&value).unwrap();
        assert_eq!(
            tree,
            JsonNode::Object(vec![
                (
                    Token::new(TokenKind::Key, "\"zeta\""),
                    JsonNode::Object(vec![
                        (
                            Token::new(TokenKind::Key, "\"name\""),
                            leaf_of(TokenKind::String, "\"Tasks\""),
                        ),
                        (
                            Token::new(TokenKind::Key, "\"archived\""),
                            leaf_of(TokenKind::Boolean, "false"),
                        ),
                    ]),
                ),
                (
                    Token::new(TokenKind::Key, "\"alpha\""),
                    leaf_of(TokenKind::Punctuation, "{}"),
                ),
            ])
        );
    }

    #[test]
    fn test_depth_limit() {
        let mut value = json!(1);
        for _ in 0..MAX_DEPTH {
            value = Value::Array(vec![value]);
        }
        assert!(build_json_tree(&value).is_ok());

        let too_deep = Value::Array(vec![value]);
        assert_eq!(
            build_json_tree(&too_deep),
            Err(RenderError::TooDeep(MAX_DEPTH))
        );
    }
}
