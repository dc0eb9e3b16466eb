//! Named-slot HTML templates
//!
//! Slots are written `{{ name }}` with lowercase snake_case names. A template
//! is parsed once into literal and slot segments, then rendered per locale.

use regex::Regex;
use std::collections::{BTreeMap, BTreeSet};

/// Values keyed by slot name
pub type SlotValues = BTreeMap<String, String>;

#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error("Invalid slot pattern: {0}")]
    Pattern(#[from] regex::Error),
    #[error("Unclosed or malformed slot on line {line}")]
    Malformed { line: usize },
    #[error("Template uses slot `{0}` which has no value")]
    UnknownSlot(String),
    #[error("Template is missing required slot `{0}`")]
    MissingSlot(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Slot(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    pub fn parse(source: &str) -> Result<Self, TemplateError> {
        let slot_re = Regex::new(r"\{\{\s*([a-z][a-z0-9_]*)\s*\}\}")?;
        let mut segments = Vec::new();
        let mut cursor = 0;

        for caps in slot_re.captures_iter(source) {
            let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            push_literal(&mut segments, source, cursor, whole.start())?;
            segments.push(Segment::Slot(name.as_str().to_string()));
            cursor = whole.end();
        }
        push_literal(&mut segments, source, cursor, source.len())?;

        Ok(Self { segments })
    }

    /// Names of all slots used by the template
    pub fn slots(&self) -> BTreeSet<&str> {
        self.segments
            .iter()
            .filter_map(|segment| match segment {
                Segment::Slot(name) => Some(name.as_str()),
                Segment::Literal(_) => None,
            })
            .collect()
    }

    /// Fail if any of `names` never appears in the template
    pub fn require(&self, names: &[&str]) -> Result<(), TemplateError> {
        let slots = self.slots();
        match names.iter().find(|name| !slots.contains(*name)) {
            Some(missing) => Err(TemplateError::MissingSlot(missing.to_string())),
            None => Ok(()),
        }
    }

    /// Fill every slot; a slot without a value is an error
    pub fn render(&self, values: &SlotValues) -> Result<String, TemplateError> {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Slot(name) => match values.get(name) {
                    Some(value) => out.push_str(value),
                    None => return Err(TemplateError::UnknownSlot(name.clone())),
                },
            }
        }
        Ok(out)
    }
}

fn push_literal(
    segments: &mut Vec<Segment>,
    source: &str,
    start: usize,
    end: usize,
) -> Result<(), TemplateError> {
    let text = &source[start..end];
    if let Some(offset) = text.find("{{") {
        let line = source[..start + offset].matches('\n').count() + 1;
        return Err(TemplateError::Malformed { line });
    }
    if !text.is_empty() {
        segments.push(Segment::Literal(text.to_string()));
    }
    Ok(())
}

/// Escape text for HTML element content and double-quoted attributes
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
