//! Items and their output representations.

use std::collections::HashMap;
use std::sync::Arc;

/// Item attribute that overrides routing for all of an item's representations.
pub const CUSTOM_PATH_ATTRIBUTE: &str = "custom_path";

/// Read-only view of a source item.
///
/// Items are owned by the content pipeline; routing only needs the identifier
/// and attribute lookups.
pub trait Item: Send + Sync {
    /// Item identifier (e.g. `/blog/hello/`).
    fn identifier(&self) -> &str;

    /// Attribute value, or `None` if the attribute is not set.
    fn attribute(&self, name: &str) -> Option<&str>;
}

/// In-memory [`Item`] backed by a string map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeItem {
    identifier: String,
    attributes: HashMap<String, String>,
}

impl AttributeItem {
    /// Create an item with no attributes.
    #[must_use]
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            attributes: HashMap::new(),
        }
    }

    /// Set an attribute.
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Set the `custom_path` attribute.
    #[must_use]
    pub fn with_custom_path(self, path: impl Into<String>) -> Self {
        self.with_attribute(CUSTOM_PATH_ATTRIBUTE, path)
    }
}

impl Item for AttributeItem {
    fn identifier(&self) -> &str {
        &self.identifier
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

/// Kind of representation, selecting the router operation used for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RepKind {
    Page,
    Asset,
}

/// A rendered form of an item (a page or an asset) that needs output paths.
#[derive(Clone)]
pub struct Rep {
    /// Page or asset.
    pub kind: RepKind,
    /// Representation name (e.g. "default", "print").
    pub name: String,
    /// Owning item.
    pub item: Arc<dyn Item>,
}

impl Rep {
    /// Create a page representation.
    #[must_use]
    pub fn page(item: Arc<dyn Item>, name: impl Into<String>) -> Self {
        Self {
            kind: RepKind::Page,
            name: name.into(),
            item,
        }
    }

    /// Create an asset representation.
    #[must_use]
    pub fn asset(item: Arc<dyn Item>, name: impl Into<String>) -> Self {
        Self {
            kind: RepKind::Asset,
            name: name.into(),
            item,
        }
    }

    /// The item's custom path, if set.
    ///
    /// An empty value still counts as set.
    #[must_use]
    pub fn custom_path(&self) -> Option<&str> {
        self.item.attribute(CUSTOM_PATH_ATTRIBUTE)
    }
}

impl std::fmt::Debug for Rep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rep")
            .field("kind", &self.kind)
            .field("name", &self.name)
            .field("item", &self.item.identifier())
            .finish()
    }
}
