// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Generic "stringify all leaf text" traversal.
//!
//! Article bodies are arbitrarily nested chapter/subsection/list/table
//! structures; for the index we only want one searchable text blob. The
//! traversal is a plain visitor over the JSON value shape — no knowledge
//! of any particular article schema — so new content structures flatten
//! for free.

use serde_json::Value;

/// Flatten any JSON value into its leaf text, space-joined.
pub fn flatten_text(value: &Value) -> String {
    let mut out = String::new();
    visit(value, &mut out);
    out
}

fn visit(value: &Value, out: &mut String) {
    match value {
        Value::String(s) => push_part(out, s),
        Value::Number(n) => push_part(out, &n.to_string()),
        Value::Bool(b) => push_part(out, if *b { "true" } else { "false" }),
        Value::Null => {}
        Value::Array(items) => {
            for item in items {
                visit(item, out);
            }
        }
        Value::Object(map) => {
            for item in map.values() {
                visit(item, out);
            }
        }
    }
}

fn push_part(out: &mut String, part: &str) {
    if part.is_empty() {
        return;
    }
    if !out.is_empty() {
        out.push(' ');
    }
    out.push_str(part);
}
