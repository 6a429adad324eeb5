use crate::ast;
use crate::schema::SchemaValidationError;
use crate::types::Directive;
use crate::types::NamedType;
use crate::types::NamedTypeRef;
use indexmap::IndexMap;
use std::sync::OnceLock;

/// Represents a fully constructed, immutable schema.
///
/// A [`Schema`] holds every named type, every directive definition, and the
/// root operation type references. Construction does not check any semantic
/// rules; call [`Schema::validate`] (or [`Schema::assert_valid`]) to check
/// them all at once.
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize)]
pub struct Schema {
    /// Names exempted from the name grammar, for schemas that predate it.
    pub(crate) allowed_legacy_names: Vec<String>,

    pub(crate) ast_node: Option<ast::SchemaDefinition>,

    pub(crate) directives: Vec<Directive>,

    pub(crate) mutation_type: Option<NamedTypeRef>,

    pub(crate) query_type: Option<NamedTypeRef>,

    pub(crate) subscription_type: Option<NamedTypeRef>,

    /// All named types, keyed by name and ordered by insertion. Built-in
    /// scalars appear here alongside schema-defined types.
    pub(crate) types: IndexMap<String, NamedType>,

    #[serde(skip)]
    pub(crate) validation_errors: OnceLock<Vec<SchemaValidationError>>,
}
impl Schema {
    pub fn new(config: SchemaConfig) -> Self {
        Self {
            allowed_legacy_names: config.allowed_legacy_names,
            ast_node: config.ast_node,
            directives: config.directives,
            mutation_type: config.mutation_type,
            query_type: config.query_type,
            subscription_type: config.subscription_type,
            types: config.types,
            validation_errors: OnceLock::new(),
        }
    }

    /// Names exempted from the name grammar during validation.
    pub fn allowed_legacy_names(&self) -> &[String] {
        &self.allowed_legacy_names
    }

    /// Returns an [`IndexMap`] containing all types defined within this
    /// [`Schema`], in insertion order.
    pub fn all_types(&self) -> &IndexMap<String, NamedType> {
        &self.types
    }

    /// The `schema { … }` definition node this [`Schema`] was built from,
    /// when it was built from a source text.
    pub fn ast_node(&self) -> Option<&ast::SchemaDefinition> {
        self.ast_node.as_ref()
    }

    /// All directives defined within this [`Schema`], in definition order.
    pub fn directives(&self) -> &Vec<Directive> {
        &self.directives
    }

    /// Returns this [`Schema`]'s Mutation root operation type, if one was
    /// provided and names a defined type.
    pub fn mutation_type(&self) -> Option<&NamedType> {
        self.mutation_type
            .as_ref()
            .and_then(|named_ref| named_ref.deref(self).ok())
    }

    /// Returns this [`Schema`]'s Query root operation type, if one was
    /// provided and names a defined type.
    pub fn query_type(&self) -> Option<&NamedType> {
        self.query_type
            .as_ref()
            .and_then(|named_ref| named_ref.deref(self).ok())
    }

    /// Returns this [`Schema`]'s Subscription root operation type, if one was
    /// provided and names a defined type.
    pub fn subscription_type(&self) -> Option<&NamedType> {
        self.subscription_type
            .as_ref()
            .and_then(|named_ref| named_ref.deref(self).ok())
    }

    /// The type defined with the given name, if there is one.
    pub fn type_named(&self, name: &str) -> Option<&NamedType> {
        self.types.get(name)
    }
}

/// All the pieces needed to construct a [`Schema`].
///
/// Builders produce one of these and hand it to [`Schema::new`]. No semantic
/// rules are checked at construction time.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct SchemaConfig {
    pub allowed_legacy_names: Vec<String>,
    pub ast_node: Option<ast::SchemaDefinition>,
    pub directives: Vec<Directive>,
    pub mutation_type: Option<NamedTypeRef>,
    pub query_type: Option<NamedTypeRef>,
    pub subscription_type: Option<NamedTypeRef>,
    pub types: IndexMap<String, NamedType>,
}
