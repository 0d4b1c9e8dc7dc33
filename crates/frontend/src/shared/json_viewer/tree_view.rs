use super::layout::{layout_lines, JsonLine};
use super::tree_builder::build_json_tree;
use super::INDENT_STEP_PX;
use leptos::prelude::*;
use serde_json::Value;

/// Syntax-highlighted, indented rendering of a JSON value.
///
/// A value that cannot be laid out is replaced by an inline error; the rest
/// of the page keeps working.
#[component]
pub fn JsonTreeView(value: Value) -> impl IntoView {
    match build_json_tree(&value) {
        Ok(node) => view! {
            <div class="json-tree" style="font-family: monospace; font-size: 14px;">
                {layout_lines(&node).into_iter().map(render_line).collect_view()}
            </div>
        }
        .into_any(),
        Err(e) => {
            log::warn!("JSON tree rendering failed: {}", e);
            view! {
                <div class="alert alert--error">
                    {format!("Error displaying data: {}", e)}
                </div>
            }
            .into_any()
        }
    }
}

fn render_line(line: JsonLine) -> impl IntoView {
    let style = format!("margin-left: {}px; white-space: pre;", line.indent as u32 * INDENT_STEP_PX);
    view! {
        <div class="json-tree__row" style=style>
            {line
                .tokens
                .into_iter()
                .map(|token| view! { <span style=token.kind.style()>{token.text}</span> })
                .collect_view()}
        </div>
    }
}
