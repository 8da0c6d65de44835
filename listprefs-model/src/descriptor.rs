use crate::Record;
use std::fmt;

/// Computation behind a computed column.
pub type ComputeFn = fn(&Record) -> serde_json::Value;

/// A declared list column.
///
/// Declared columns are an ordered `Vec<FieldDescriptor>`; that order is the
/// default column order of the view.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldDescriptor {
    /// A declared data attribute of the entity type, by name.
    NamedAttribute(String),
    /// A free-standing function computing the cell value.
    ComputedFunction(ComputedColumn),
    /// A callable bound to the entity type, by name.
    MethodReference(String),
}

impl FieldDescriptor {
    pub fn attribute(name: impl Into<String>) -> Self {
        Self::NamedAttribute(name.into())
    }

    pub fn method(name: impl Into<String>) -> Self {
        Self::MethodReference(name.into())
    }

    pub fn computed(column: ComputedColumn) -> Self {
        Self::ComputedFunction(column)
    }

    /// The descriptor's raw identifier.
    pub fn ident(&self) -> &str {
        match self {
            Self::NamedAttribute(name) | Self::MethodReference(name) => name,
            Self::ComputedFunction(column) => &column.ident,
        }
    }
}

impl From<&str> for FieldDescriptor {
    fn from(name: &str) -> Self {
        Self::NamedAttribute(name.to_string())
    }
}

impl From<ComputedColumn> for FieldDescriptor {
    fn from(column: ComputedColumn) -> Self {
        Self::ComputedFunction(column)
    }
}

/// A computed column: an identifier, an optional header label and the
/// function producing the cell value.
#[derive(Clone)]
pub struct ComputedColumn {
    pub ident: String,
    pub short_description: Option<String>,
    pub compute: ComputeFn,
}

impl ComputedColumn {
    pub fn new(ident: impl Into<String>, compute: ComputeFn) -> Self {
        Self {
            ident: ident.into(),
            short_description: None,
            compute,
        }
    }

    /// Attach a short description used as the column header.
    #[must_use]
    pub fn with_short_description(mut self, label: impl Into<String>) -> Self {
        self.short_description = Some(label.into());
        self
    }

    /// Compute the cell value for a record.
    pub fn evaluate(&self, record: &Record) -> serde_json::Value {
        (self.compute)(record)
    }
}

// Function pointers have no stable identity; columns compare by identifier and label.
impl PartialEq for ComputedColumn {
    fn eq(&self, other: &Self) -> bool {
        self.ident == other.ident && self.short_description == other.short_description
    }
}

impl fmt::Debug for ComputedColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComputedColumn")
            .field("ident", &self.ident)
            .field("short_description", &self.short_description)
            .finish_non_exhaustive()
    }
}
