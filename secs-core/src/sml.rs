//! SML (SECS Message Language) text rendering

use crate::item::value::ItemValue;
use crate::item::Item;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Write};

/// SML rendering settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmlSettings {
    /// Spaces added per nesting level
    pub indent: usize,
    /// Separator written between item lines
    pub newline: String,
}

impl SmlSettings {
    /// Create settings with a custom indent width
    pub fn with_indent(indent: usize) -> Self {
        Self {
            indent,
            ..Self::default()
        }
    }

    /// Create settings with a custom line separator
    pub fn with_newline(newline: impl Into<String>) -> Self {
        Self {
            newline: newline.into(),
            ..Self::default()
        }
    }
}

impl Default for SmlSettings {
    fn default() -> Self {
        Self {
            indent: 2,
            newline: "\n".to_string(),
        }
    }
}

fn join<T: Display>(values: impl IntoIterator<Item = T>) -> String {
    let mut out = String::new();
    for (i, value) in values.into_iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{}", value);
    }
    out
}

/// Value text of a single item; empty for List
pub(crate) fn value_text(value: &ItemValue) -> String {
    match value {
        ItemValue::List(_) => String::new(),
        ItemValue::Ascii(s) | ItemValue::Jis8(s) => s.clone(),
        ItemValue::Binary(v) => join(v.iter().map(|b| format!("0x{:02X}", b))),
        ItemValue::Boolean(v) => join(v.iter().map(|&b| if b { "True" } else { "False" })),
        ItemValue::I1(v) => join(v),
        ItemValue::I2(v) => join(v),
        ItemValue::I4(v) => join(v),
        ItemValue::I8(v) => join(v),
        ItemValue::U1(v) => join(v),
        ItemValue::U2(v) => join(v),
        ItemValue::U4(v) => join(v),
        ItemValue::U8(v) => join(v),
        ItemValue::F4(v) => join(v),
        ItemValue::F8(v) => join(v),
    }
}

/// Quote text for an SML tree line
///
/// Quotes, backslashes and control characters are escaped so that text never
/// closes the quote or breaks the line layout.
fn write_quoted(out: &mut String, text: &str) {
    out.push('\'');
    for c in text.chars() {
        match c {
            '\'' => out.push_str("\\'"),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                let _ = write!(out, "\\x{:02X}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('\'');
}

/// Render `item` and all of its children as SML
pub fn render(item: &Item, settings: &SmlSettings) -> String {
    let mut out = String::new();
    write_item(&mut out, item, 0, settings);
    out
}

fn write_item(out: &mut String, item: &Item, depth: usize, settings: &SmlSettings) {
    let pad = depth * settings.indent;
    let _ = write!(out, "{:pad$}<{} [{}]", "", item.format(), item.count(), pad = pad);

    match item.value() {
        ItemValue::List(items) if !items.is_empty() => {
            for child in items {
                out.push_str(&settings.newline);
                write_item(out, child, depth + 1, settings);
            }
            out.push_str(&settings.newline);
            let _ = write!(out, "{:pad$}>", "", pad = pad);
        }
        ItemValue::List(_) => out.push('>'),
        _ if item.format().is_text() => {
            out.push(' ');
            write_quoted(out, item.text_form());
            out.push('>');
        }
        _ if item.count() == 0 => out.push('>'),
        _ => {
            let _ = write!(out, " {}>", item.text_form());
        }
    }
}

impl Item {
    /// Render this item tree as SML with default settings
    pub fn to_sml(&self) -> String {
        render(self, &SmlSettings::default())
    }
}
