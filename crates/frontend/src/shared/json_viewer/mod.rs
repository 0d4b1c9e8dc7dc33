pub mod layout;
pub mod tree_builder;
pub mod tree_view;
pub mod widget;

use serde_json::Value;

/// Left padding added per nesting level of the tree
pub const INDENT_STEP_PX: u32 = 20;

/// Syntactic role of a rendered token, drives its styling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Null,
    Boolean,
    Number,
    String,
    Key,
    Punctuation,
}

impl TokenKind {
    pub fn color(&self) -> &'static str {
        match self {
            TokenKind::Null => "#808080",
            TokenKind::Boolean => "#008000",
            TokenKind::Number => "#0000ff",
            TokenKind::String => "#a31515",
            TokenKind::Key => "#881391",
            TokenKind::Punctuation => "#000000",
        }
    }

    pub fn is_bold(&self) -> bool {
        matches!(self, TokenKind::Key)
    }

    /// Inline style for the token's `<span>`
    pub fn style(&self) -> String {
        if self.is_bold() {
            format!("color: {}; font-weight: bold;", self.color())
        } else {
            format!("color: {};", self.color())
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

/// Display tree of a JSON value.
///
/// Empty containers collapse into a single `[]` / `{}` leaf, so `Array`
/// and `Object` always hold at least one child.
#[derive(Debug, Clone, PartialEq)]
pub enum JsonNode {
    Leaf(Token),
    Array(Vec<JsonNode>),
    Object(Vec<(Token, JsonNode)>),
}

/// Short description shown in the data panel header
pub fn summary_label(value: &Value) -> String {
    match value {
        Value::Array(items) if items.len() == 1 => "1 item".to_string(),
        Value::Array(items) => format!("{} items", items.len()),
        Value::Object(_) => "Object".to_string(),
        Value::String(_) => "String".to_string(),
        Value::Number(_) => "Number".to_string(),
        Value::Bool(_) => "Boolean".to_string(),
        Value::Null => "Null".to_string(),
    }
}
