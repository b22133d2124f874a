//! HTML attribute handling.

/// Attribute names used by the builders.
pub mod attr {
    pub const CHECKED: &str = "checked";
    pub const CLASS: &str = "class";
    pub const DISABLED: &str = "disabled";
    pub const ID: &str = "id";
    pub const MAX_LENGTH: &str = "maxlength";
    pub const NAME: &str = "name";
    pub const TITLE: &str = "title";
    pub const TYPE: &str = "type";
    pub const VALUE: &str = "value";
}

/// An insertion-ordered attribute bag.
///
/// Keys are case-sensitive. Setting an existing key replaces its value in
/// place, keeping the original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HtmlAttributes {
    entries: Vec<(String, String)>,
}

impl HtmlAttributes {
    /// Creates an empty attribute bag.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Sets an attribute.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Sets an attribute unless it is already present.
    pub fn set_default(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        if !self.contains(&key) {
            self.entries.push((key, value.into()));
        }
    }

    /// Gets an attribute.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns whether an attribute is present.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Removes an attribute, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        let index = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(index).1)
    }

    /// Merges a class token into the `class` attribute.
    ///
    /// Existing classes are kept; a token already present is not repeated.
    pub fn add_class(&mut self, class: &str) {
        let class = class.trim();
        if class.is_empty() {
            return;
        }
        match self.get(attr::CLASS) {
            Some(current) if current.split_whitespace().any(|c| c == class) => {}
            Some(current) if !current.trim().is_empty() => {
                let merged = format!("{} {class}", current.trim());
                self.set(attr::CLASS, merged);
            }
            _ => self.set(attr::CLASS, class),
        }
    }

    /// Iterates over attributes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns whether the bag is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Renders attributes as an HTML attribute string, values escaped.
    pub fn to_html(&self) -> String {
        self.entries
            .iter()
            .map(|(k, v)| format!(r#"{k}="{}""#, html_escape(v)))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Builder method to set an attribute.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }
}

/// Escapes HTML special characters.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Derives an element id from a field name: `Items[0].Name` becomes `Items_0_Name`.
pub fn id_from_name(name: &str) -> String {
    name.chars()
        .filter(|c| *c != ']')
        .map(|c| if c == '.' || c == '[' { '_' } else { c })
        .collect()
}
