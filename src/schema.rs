//! Content-type schema data model.
//!
//! These types mirror the shape of a content-type listing fetched from
//! the delivery API and saved as a snapshot. They are read-only input to
//! the generator; element order is significant and preserved end to end.

use serde::Deserialize;

/// A content type: a named schema with an ordered list of elements.
#[derive(Debug, Clone, Deserialize)]
pub struct ContentType {
    /// System metadata (codename, display name).
    pub system: TypeSystem,

    /// Ordered elements of this type.
    #[serde(default)]
    pub elements: Vec<ContentElement>,
}

/// System metadata of a content type.
#[derive(Debug, Clone, Deserialize)]
pub struct TypeSystem {
    /// Unique codename, used for the generated type and file names.
    pub codename: String,

    /// Human-readable display name.
    #[serde(default)]
    pub name: String,
}

/// One typed element within a content type.
#[derive(Debug, Clone, Deserialize)]
pub struct ContentElement {
    /// Element codename, used as the source property name.
    pub codename: String,

    /// Kind tag ("text", "rich_text", ...). Kept as a raw string so
    /// unknown future kinds survive deserialization and can be named
    /// in warnings.
    #[serde(rename = "type")]
    pub element_type: String,
}

impl ContentType {
    /// The codename identifying this type.
    pub fn codename(&self) -> &str {
        &self.system.codename
    }
}

impl ContentElement {
    /// Create an element from codename and kind tag.
    pub fn new(codename: impl Into<String>, element_type: impl Into<String>) -> Self {
        Self {
            codename: codename.into(),
            element_type: element_type.into(),
        }
    }
}
