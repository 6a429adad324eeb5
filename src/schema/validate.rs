use crate::ast;
use crate::introspection;
use crate::loc;
use crate::name;
use crate::schema::DeclarationIndex;
use crate::schema::InvalidSchemaError;
use crate::schema::Schema;
use crate::schema::SchemaValidationError;
use crate::types::EnumTypeValidator;
use crate::types::InputObjectTypeValidator;
use crate::types::InputUnionTypeValidator;
use crate::types::InterfaceImplementationValidator;
use crate::types::NamedType;
use crate::types::NamedTypeRef;
use crate::types::ObjectOrInterfaceType;
use crate::types::ObjectOrInterfaceTypeValidator;
use crate::types::UnionTypeValidator;
use std::collections::HashSet;

impl Schema {
    /// Check every semantic rule against this [`Schema`] and return all
    /// violations found, in deterministic order: root operation types first,
    /// then directives, then each type in insertion order.
    ///
    /// The first call runs validation and caches the result on this
    /// [`Schema`]; every later call (from any thread) returns the same
    /// cached slice. An empty slice means the schema is valid.
    pub fn validate(&self) -> &[SchemaValidationError] {
        self.validation_errors.get_or_init(|| {
            let mut ctx = SchemaValidationContext::new(self);
            ctx.validate_root_types();
            ctx.validate_directives();
            ctx.validate_types();
            ctx.into_errors()
        })
    }

    /// Utility for callers that need a valid schema or a single error value
    /// to propagate: `Ok(())` when [`Schema::validate`] finds nothing, else
    /// an [`InvalidSchemaError`] wrapping everything it found.
    pub fn assert_valid(&self) -> Result<(), InvalidSchemaError> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(InvalidSchemaError {
                errors: errors.to_vec(),
            })
        }
    }
}

/// Shared state for one validation run: the schema being validated, the
/// declaration evidence gathered from its source nodes, and the violations
/// accumulated so far.
pub(crate) struct SchemaValidationContext<'schema> {
    declaration_index: DeclarationIndex<'schema>,
    errors: Vec<SchemaValidationError>,
    schema: &'schema Schema,
}
impl<'schema> SchemaValidationContext<'schema> {
    fn new(schema: &'schema Schema) -> Self {
        Self {
            declaration_index: DeclarationIndex::new(schema),
            errors: vec![],
            schema,
        }
    }

    pub fn declaration_index(&self) -> &DeclarationIndex<'schema> {
        &self.declaration_index
    }

    pub fn report(&mut self, error: SchemaValidationError) {
        self.errors.push(error);
    }

    pub fn schema(&self) -> &'schema Schema {
        self.schema
    }

    /// Check a name against the name grammar, honoring the schema's legacy
    /// allowlist. Violations are reported with `location` as evidence.
    pub fn validate_name(
        &mut self,
        name: &str,
        location: Option<&loc::SourceLocation>,
    ) {
        let is_legacy_name =
            self.schema
                .allowed_legacy_names
                .iter()
                .any(|legacy_name| legacy_name == name);
        if is_legacy_name {
            return;
        }
        if let Some(name_error) = name::is_valid_name_error(name) {
            self.report(SchemaValidationError::InvalidName {
                locations: location.into_iter().cloned().collect(),
                name_error,
            });
        }
    }

    fn into_errors(self) -> Vec<SchemaValidationError> {
        self.errors
    }

    fn validate_root_types(&mut self) {
        let schema = self.schema;

        if let Some(query_ref) = schema.query_type.as_ref() {
            if !matches!(schema.query_type(), Some(NamedType::Object(_))) {
                self.report(SchemaValidationError::NonObjectQueryRoot {
                    locations: self.root_type_locations(
                        ast::OperationKind::Query,
                        query_ref,
                    ),
                    type_name: query_ref.name().to_string(),
                });
            }
        } else {
            self.report(SchemaValidationError::MissingQueryRootType {
                locations:
                    schema.ast_node
                        .as_ref()
                        .map(|schema_def| schema_def.position.clone())
                        .into_iter()
                        .collect(),
            });
        }

        if let Some(mutation_ref) = schema.mutation_type.as_ref() {
            if !matches!(schema.mutation_type(), Some(NamedType::Object(_))) {
                self.report(SchemaValidationError::NonObjectMutationRoot {
                    locations: self.root_type_locations(
                        ast::OperationKind::Mutation,
                        mutation_ref,
                    ),
                    type_name: mutation_ref.name().to_string(),
                });
            }
        }

        if let Some(subscription_ref) = schema.subscription_type.as_ref() {
            if !matches!(schema.subscription_type(), Some(NamedType::Object(_))) {
                self.report(SchemaValidationError::NonObjectSubscriptionRoot {
                    locations: self.root_type_locations(
                        ast::OperationKind::Subscription,
                        subscription_ref,
                    ),
                    type_name: subscription_ref.name().to_string(),
                });
            }
        }
    }

    /// Best evidence for a root operation type error: the `schema { … }`
    /// entry for that operation, else the definition site of the named type,
    /// else the reference itself.
    fn root_type_locations(
        &self,
        operation: ast::OperationKind,
        root_ref: &NamedTypeRef,
    ) -> Vec<loc::SourceLocation> {
        if let Some(location) =
            self.declaration_index.root_operation_location(operation)
        {
            return vec![location];
        }
        if let Some(root_type) = self.schema.types.get(root_ref.name()) {
            return root_type.def_location().cloned().into_iter().collect();
        }
        root_ref.ref_location().cloned().into_iter().collect()
    }

    fn validate_directives(&mut self) {
        let schema = self.schema;
        for directive in &schema.directives {
            self.validate_name(
                directive.name.as_str(),
                directive.def_location.as_ref(),
            );

            // TODO: Validate the operation locations each directive declares
            //       itself applicable to, once definitions carry them.

            let mut seen_argument_names = HashSet::new();
            for argument in &directive.arguments {
                self.validate_name(
                    argument.name.as_str(),
                    argument.def_location.as_ref(),
                );

                if !seen_argument_names.insert(argument.name.as_str()) {
                    self.report(
                        SchemaValidationError::DuplicateDirectiveArgument {
                            argument_name: argument.name.clone(),
                            directive_name: directive.name.clone(),
                            locations:
                                self.declaration_index
                                    .directive_argument_locations(
                                        directive.name.as_str(),
                                        argument.name.as_str(),
                                    ),
                        },
                    );
                    continue;
                }

                if !argument.type_annotation.is_input_type(schema) {
                    self.report(
                        SchemaValidationError::InvalidDirectiveArgumentType {
                            argument_name: argument.name.clone(),
                            argument_type: argument.type_annotation.clone(),
                            directive_name: directive.name.clone(),
                            locations:
                                argument.type_annotation
                                    .ref_location()
                                    .cloned()
                                    .into_iter()
                                    .collect(),
                        },
                    );
                }
            }
        }
    }

    fn validate_types(&mut self) {
        let schema = self.schema;
        for (type_name, type_) in &schema.types {
            // Introspection types opt out of the name grammar.
            if !introspection::is_introspection_type_name(type_name.as_str()) {
                self.validate_name(type_name.as_str(), type_.def_location());
            }

            match type_ {
                NamedType::Enum(enum_type) => {
                    EnumTypeValidator::new(enum_type, self).validate();
                }

                NamedType::InputObject(input_object_type) => {
                    InputObjectTypeValidator::new(input_object_type, self)
                        .validate();
                }

                NamedType::InputUnion(input_union_type) => {
                    InputUnionTypeValidator::new(input_union_type, self)
                        .validate();
                }

                NamedType::Interface(iface_type) => {
                    ObjectOrInterfaceTypeValidator::new(
                        ObjectOrInterfaceType::Interface(iface_type),
                        self,
                    ).validate();
                }

                NamedType::Object(obj_type) => {
                    ObjectOrInterfaceTypeValidator::new(
                        ObjectOrInterfaceType::Object(obj_type),
                        self,
                    ).validate();
                    InterfaceImplementationValidator::new(obj_type, self)
                        .validate();
                }

                NamedType::Scalar(_) => (),

                NamedType::Union(union_type) => {
                    UnionTypeValidator::new(union_type, self).validate();
                }
            }
        }
    }
}
