use super::{JsonNode, Token, TokenKind};

/// One visual line of the tree view
#[derive(Debug, Clone, PartialEq)]
pub struct JsonLine {
    /// Nesting level; the view indents by `INDENT_STEP_PX` per level
    pub indent: usize,
    pub tokens: Vec<Token>,
}

/// Flatten a node tree into lines.
///
/// Opening brackets stay on the line of their key or element, children go
/// one level deeper and the closing bracket gets a line of its own at the
/// opening line's level. Every element except the last ends with a comma.
pub fn layout_lines(node: &JsonNode) -> Vec<JsonLine> {
    let mut lines = Vec::new();
    push_node(node, 0, Vec::new(), false, &mut lines);
    lines
}

fn punct(text: &str) -> Token {
    Token::new(TokenKind::Punctuation, text)
}

fn push_node(
    node: &JsonNode,
    indent: usize,
    mut prefix: Vec<Token>,
    trailing_comma: bool,
    lines: &mut Vec<JsonLine>,
) {
    let (open, close) = match node {
        JsonNode::Leaf(token) => {
            prefix.push(token.clone());
            if trailing_comma {
                prefix.push(punct(","));
            }
            lines.push(JsonLine {
                indent,
                tokens: prefix,
            });
            return;
        }
        JsonNode::Array(_) => ("[", "]"),
        JsonNode::Object(_) => ("{", "}"),
    };

    prefix.push(punct(open));
    lines.push(JsonLine {
        indent,
        tokens: prefix,
    });

    match node {
        JsonNode::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                push_node(item, indent + 1, Vec::new(), index + 1 < items.len(), lines);
            }
        }
        JsonNode::Object(entries) => {
            for (index, (key, val)) in entries.iter().enumerate() {
                let key_prefix = vec![key.clone(), punct(": ")];
                push_node(val, indent + 1, key_prefix, index + 1 < entries.len(), lines);
            }
        }
        JsonNode::Leaf(_) => {}
    }

    let mut closing = vec![punct(close)];
    if trailing_comma {
        closing.push(punct(","));
    }
    lines.push(JsonLine {
        indent,
        tokens: closing,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::json_viewer::tree_builder::build_json_tree;
    use serde_json::{json, Value};

    /// Lines as (indent, concatenated text) for compact assertions
    fn render_text(value: &Value) -> Vec<(usize, String)> {
        let node = build_json_tree(value).unwrap();
        layout_lines(&node)
            .into_iter()
            .map(|line| {
                let text: String = line.tokens.iter().map(|t| t.text.as_str()).collect();
                (line.indent, text)
            })
            .collect()
    }

    #[test]
    fn test_scalar_is_single_line() {
        assert_eq!(render_text(&json!(null)), vec![(0, "null".to_string())]);
        assert_eq!(render_text(&json!([])), vec![(0, "[]".to_string())]);
        assert_eq!(render_text(&json!({})), vec![(0, "{}".to_string())]);
    }

    #[test]
    fn test_last_element_has_no_comma() {
        assert_eq!(
            render_text(&json!([1, "two", true])),
            vec![
                (0, "[".to_string()),
                (1, "1,".to_string()),
                (1, "\"two\",".to_string()),
                (1, "true".to_string()),
                (0, "]".to_string()),
            ]
        );
    }

    #[test]
    fn test_object_entries_between_braces() {
        let value: Value =
            serde_json::from_str(r#"{"a_very_long_key_name":{"id":7},"tags":[],"done":false}"#)
                .unwrap();
        assert_eq!(
            render_text(&value),
            vec![
                (0, "{".to_string()),
                (1, "\"a_very_long_key_name\": {".to_string()),
                (2, "\"id\": 7".to_string()),
                (1, "},".to_string()),
                (1, "\"tags\": [],".to_string()),
                (1, "\"done\": false".to_string()),
                (0, "}".to_string()),
            ]
        );
    }

    #[test]
    fn test_indent_grows_by_one_per_level() {
        let lines = render_text(&json!({"a": [[{"b": null}]]}));
        let indents: Vec<usize> = lines.iter().map(|(indent, _)| *indent).collect();
        assert_eq!(indents, vec![0, 1, 2, 3, 4, 3, 2, 1, 0]);
        for pair in indents.windows(2) {
            assert!(pair[0].abs_diff(pair[1]) <= 1);
        }
    }

    #[test]
    fn test_key_and_separator_tokens_are_styled_apart() {
        let node = build_json_tree(&json!({"k": "v"})).unwrap();
        let lines = layout_lines(&node);
        let kinds: Vec<TokenKind> = lines[1].tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![TokenKind::Key, TokenKind::Punctuation, TokenKind::String]
        );
    }
}
