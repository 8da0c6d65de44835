use serde::{Deserialize, Serialize};

/// Describes the entity type a list view browses.
///
/// This is the slice of the host's schema system the column engine needs:
/// which names are declared data attributes (and their human-readable names),
/// and which methods carry a short description usable as a column header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityType {
    /// Application label the type belongs to (e.g., "billing").
    pub group: String,
    /// Display name of the type (e.g., "Invoice").
    pub name: String,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    #[serde(default)]
    pub methods: Vec<Method>,
}

impl EntityType {
    pub fn new(group: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            name: name.into(),
            attributes: Vec::new(),
            methods: Vec::new(),
        }
    }

    /// Builder: declare a data attribute.
    #[must_use]
    pub fn with_attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Builder: declare a method.
    #[must_use]
    pub fn with_method(mut self, method: Method) -> Self {
        self.methods.push(method);
        self
    }

    /// Looks up a declared data attribute by name.
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.name == name)
    }

    /// Looks up a declared method by name.
    pub fn method(&self, name: &str) -> Option<&Method> {
        self.methods.iter().find(|m| m.name == name)
    }
}

/// A declared data attribute of an entity type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    /// The schema's own human-readable name for the attribute.
    pub verbose_name: String,
}

impl Attribute {
    pub fn new(name: impl Into<String>, verbose_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            verbose_name: verbose_name.into(),
        }
    }

    /// Attribute whose verbose name is derived from its name, the way most
    /// schemas default it (`due_date` -> "due date").
    pub fn plain(name: &str) -> Self {
        Self::new(name, name.replace('_', " "))
    }
}

/// A method bound to an entity type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Method {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
}

impl Method {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            short_description: None,
        }
    }

    /// Method carrying a short description used as its column header.
    pub fn labelled(name: impl Into<String>, short_description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            short_description: Some(short_description.into()),
        }
    }
}
