//! Page host abstraction
//!
//! `ViewerHost` is everything the configurator needs from the page it is
//! embedded in: element lookup, the container's pixel size, the color swatch
//! attributes, and the two outputs it writes back (summary text and the
//! active swatch marker). Checkbox changes arrive as events carrying the new
//! state, so the trait never reads a checkbox.
//!
//! `MemoryHost` keeps the page in memory for headless sessions and tests.

use std::collections::HashMap;

/// A clickable color option and the color attribute it carries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Swatch {
    /// Raw color attribute, e.g. `#e74c3c`
    pub value: String,
    /// Whether the swatch carries the active marker
    pub active: bool,
}

/// Page services consumed by the configurator
pub trait ViewerHost {
    /// Whether an element with `id` exists
    fn contains(&self, id: &str) -> bool;

    /// Client size of the element in pixels, `None` if it does not exist
    fn element_size(&self, id: &str) -> Option<(u32, u32)>;

    /// All color swatches in document order
    fn swatches(&self) -> Vec<Swatch>;

    /// Mark the swatch whose value equals `value` active and clear all others
    fn set_active_swatch(&mut self, value: &str);

    /// Replace the text content of an element
    fn set_text(&mut self, id: &str, text: &str);
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Element {
    Container { width: u32, height: u32 },
    Checkbox { checked: bool },
    Text { content: String },
}

/// In-memory page
#[derive(Debug, Clone, Default)]
pub struct MemoryHost {
    elements: HashMap<String, Element>,
    swatches: Vec<Swatch>,
}

impl MemoryHost {
    /// Create an empty page
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a sized container element
    pub fn with_container(mut self, id: impl Into<String>, width: u32, height: u32) -> Self {
        self.elements.insert(id.into(), Element::Container { width, height });
        self
    }

    /// Add a checkbox
    pub fn with_checkbox(mut self, id: impl Into<String>, checked: bool) -> Self {
        self.elements.insert(id.into(), Element::Checkbox { checked });
        self
    }

    /// Add an empty text element
    pub fn with_text(mut self, id: impl Into<String>) -> Self {
        self.elements.insert(id.into(), Element::Text { content: String::new() });
        self
    }

    /// Add a color swatch
    pub fn with_swatch(mut self, value: impl Into<String>) -> Self {
        self.swatches.push(Swatch { value: value.into(), active: false });
        self
    }

    /// Resize a container; returns false if `id` is not a container
    pub fn resize_container(&mut self, id: &str, new_width: u32, new_height: u32) -> bool {
        match self.elements.get_mut(id) {
            Some(Element::Container { width, height }) => {
                *width = new_width;
                *height = new_height;
                true
            }
            _ => false,
        }
    }

    /// Set a checkbox state; returns false if `id` is not a checkbox
    pub fn set_checked(&mut self, id: &str, value: bool) -> bool {
        match self.elements.get_mut(id) {
            Some(Element::Checkbox { checked }) => {
                *checked = value;
                true
            }
            _ => false,
        }
    }

    /// Checked state of a checkbox, `None` if `id` is not a checkbox
    pub fn is_checked(&self, id: &str) -> Option<bool> {
        match self.elements.get(id)? {
            Element::Checkbox { checked } => Some(*checked),
            _ => None,
        }
    }

    /// Text content of an element, `None` if it is not a text element
    pub fn text(&self, id: &str) -> Option<&str> {
        match self.elements.get(id) {
            Some(Element::Text { content }) => Some(content),
            _ => None,
        }
    }

    /// Value of the active swatch
    pub fn active_swatch(&self) -> Option<&str> {
        self.swatches.iter().find(|s| s.active).map(|s| s.value.as_str())
    }
}

impl ViewerHost for MemoryHost {
    fn contains(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }

    fn element_size(&self, id: &str) -> Option<(u32, u32)> {
        match self.elements.get(id)? {
            Element::Container { width, height } => Some((*width, *height)),
            // Non-container elements have no layout box worth rendering into
            _ => Some((0, 0)),
        }
    }

    fn swatches(&self) -> Vec<Swatch> {
        self.swatches.clone()
    }

    fn set_active_swatch(&mut self, value: &str) {
        for swatch in &mut self.swatches {
            swatch.active = swatch.value == value;
        }
    }

    fn set_text(&mut self, id: &str, text: &str) {
        match self.elements.get_mut(id) {
            Some(Element::Text { content }) => *content = text.to_string(),
            Some(_) => log::warn!("Element '{}' is not a text element; summary not written", id),
            None => log::warn!("Element '{}' not found; summary not written", id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_swatch_is_exclusive() {
        let mut host = MemoryHost::new().with_swatch("#2c3e50").with_swatch("#e74c3c");
        host.set_active_swatch("#2c3e50");
        host.set_active_swatch("#e74c3c");
        let active: Vec<_> = host.swatches().into_iter().filter(|s| s.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(host.active_swatch(), Some("#e74c3c"));
    }

    #[test]
    fn test_element_kinds_are_distinct() {
        let mut host = MemoryHost::new()
            .with_container("viewer", 800, 600)
            .with_checkbox("logo", true)
            .with_text("summary");
        assert_eq!(host.element_size("viewer"), Some((800, 600)));
        assert_eq!(host.is_checked("viewer"), None);
        assert!(host.set_checked("logo", false));
        assert_eq!(host.is_checked("logo"), Some(false));
        assert!(!host.resize_container("logo", 1, 1));
        host.set_text("summary", "hello");
        assert_eq!(host.text("summary"), Some("hello"));
        assert_eq!(host.element_size("missing"), None);
    }
}
