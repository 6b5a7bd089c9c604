//! Data-type registry.
//!
//! Attributes name their data type through a `DataType` constraint pointing
//! at a data-type individual (e.g. `basic_type`). The individual's payload is
//! looked up here to find the validator.
//!
//! Validation distinguishes "confirmed invalid" from "cannot confirm":
//! an unregistered type name yields [`Validation::UnknownType`], not
//! [`Validation::Invalid`].

use std::collections::BTreeMap;
use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;

static BASIC_TYPE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z_0-9 ]+$").expect("valid basic_type regex"));
static EVENT_REF_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+$").expect("valid event reference regex"));

/// A named literal validator.
pub trait DataType: Send + Sync {
    /// Registry key, matching the payload of the data-type individual.
    fn name(&self) -> &str;

    /// Check a literal value.
    fn validate(&self, literal: &str) -> bool;

    /// Whether values of this type are references to other events.
    ///
    /// Boxed values are stored as decimal event ids and dereferenced on
    /// read.
    fn is_boxed(&self) -> bool {
        false
    }
}

/// Plain words: letters, digits, underscore and space.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicType;

impl BasicType {
    /// Registry name.
    pub const NAME: &'static str = "basic_type";
}

impl DataType for BasicType {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn validate(&self, literal: &str) -> bool {
        BASIC_TYPE_RE.is_match(literal)
    }
}

/// A reference to one of an attribute's value candidates.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnumType;

impl EnumType {
    /// Registry name.
    pub const NAME: &'static str = "enum_type";
}

impl DataType for EnumType {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn validate(&self, literal: &str) -> bool {
        EVENT_REF_RE.is_match(literal)
    }

    fn is_boxed(&self) -> bool {
        true
    }
}

/// Outcome of validating a literal against a named type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validation {
    /// The validator accepted the literal.
    Valid,
    /// The validator rejected the literal.
    Invalid,
    /// No validator is registered under that name.
    UnknownType,
}

impl Validation {
    /// Whether the literal was confirmed valid.
    pub fn is_valid(self) -> bool {
        self == Validation::Valid
    }
}

/// Registry of data types keyed by name.
#[derive(Clone)]
pub struct TypeRegistry {
    types: BTreeMap<String, Arc<dyn DataType>>,
}

impl TypeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            types: BTreeMap::new(),
        }
    }

    /// Create a registry with `basic_type` and `enum_type` registered.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(BasicType));
        registry.register(Arc::new(EnumType));
        registry
    }

    /// Register a validator under its name, returning any validator it replaces.
    pub fn register(&mut self, data_type: Arc<dyn DataType>) -> Option<Arc<dyn DataType>> {
        let name = data_type.name().to_string();
        tracing::debug!(target: "aurora::types", name = %name, "Registered data type");
        self.types.insert(name, data_type)
    }

    /// Look up a validator by name.
    pub fn get(&self, name: &str) -> Option<&Arc<dyn DataType>> {
        self.types.get(name)
    }

    /// Validate `literal` against the type registered as `type_name`.
    pub fn validate(&self, type_name: &str, literal: &str) -> Validation {
        match self.types.get(type_name) {
            Some(t) if t.validate(literal) => Validation::Valid,
            Some(_) => Validation::Invalid,
            None => Validation::UnknownType,
        }
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<String> {
        self.types.keys().cloned().collect()
    }

    /// Number of registered types.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Check if no types are registered.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

impl std::fmt::Debug for TypeRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypeRegistry")
            .field("types", &self.names())
            .finish()
    }
}
