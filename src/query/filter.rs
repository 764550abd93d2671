use serde::{Deserialize, Serialize};

/// Characters RediSearch requires escaping inside tag filter values.
const TAG_SPECIALS: &str = ",.<>{}[]\"':;!@#$%^&*()-+=~";

pub fn escape_tag(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        if TAG_SPECIALS.contains(ch) {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

/// A single `@field:{value}` tag filter. The value is escaped on render.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagFilter {
    pub field: String,
    pub value: String,
}

impl TagFilter {
    pub fn new(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn render(&self) -> String {
        format!("@{}:{{{}}}", self.field, escape_tag(&self.value))
    }
}

/// An AND-joined list of tag filters, rendered space-separated as
/// RediSearch expects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterExpr {
    pub filters: Vec<TagFilter>,
}

impl FilterExpr {
    pub fn new(filters: Vec<TagFilter>) -> Self {
        Self { filters }
    }

    /// Active cudb service configs, the query this tool exists to debug.
    pub fn active_services() -> Self {
        Self::new(vec![
            TagFilter::new("type", "service:cudb"),
            TagFilter::new("objectStatus", "active"),
        ])
    }

    pub fn render(&self) -> String {
        self.filters
            .iter()
            .map(TagFilter::render)
            .collect::<Vec<_>>()
            .join(" ")
    }
}
