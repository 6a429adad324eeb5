use crate::loc;
use crate::schema::SchemaValidationContext;
use crate::schema::SchemaValidationError;
use crate::types::InterfaceType;
use crate::types::NamedType;
use crate::types::NamedTypeRef;
use crate::types::ObjectType;
use crate::types::TypeAnnotation;
use std::collections::HashSet;

/// Validates an object type's interface claims: each claimed name must be a
/// defined interface type claimed at most once, and the object must conform
/// to every claimed interface field-by-field.
pub(crate) struct InterfaceImplementationValidator<'a, 'schema> {
    ctx: &'a mut SchemaValidationContext<'schema>,
    type_: &'schema ObjectType,
}
impl<'a, 'schema> InterfaceImplementationValidator<'a, 'schema> {
    pub fn new(
        type_: &'schema ObjectType,
        ctx: &'a mut SchemaValidationContext<'schema>,
    ) -> Self {
        Self { ctx, type_ }
    }

    pub fn validate(mut self) {
        let obj_type = self.type_;
        let schema = self.ctx.schema();

        let mut implemented_iface_names = HashSet::new();
        for iface_ref in &obj_type.interfaces {
            let iface_name = iface_ref.name();

            // Objects can only implement interface types. Dangling claim
            // names land here too: whatever they name, it is not a defined
            // interface type.
            // https://spec.graphql.org/October2021/#sec-Objects.Type-Validation
            let iface_type =
                if let Some(NamedType::Interface(iface_type)) =
                    schema.types.get(iface_name)
                {
                    iface_type
                } else {
                    let locations = self.claim_locations(iface_ref);
                    self.ctx.report(
                        SchemaValidationError::ImplementsNonInterfaceType {
                            locations,
                            non_interface_type_name: iface_name.to_string(),
                            type_name: obj_type.name.clone(),
                        },
                    );
                    continue;
                };

            // A repeated claim is reported once and its conformance is not
            // re-checked.
            if !implemented_iface_names.insert(iface_name) {
                let locations = self.claim_locations(iface_ref);
                self.ctx.report(
                    SchemaValidationError::DuplicateInterfaceImplementation {
                        interface_name: iface_name.to_string(),
                        locations,
                        type_name: obj_type.name.clone(),
                    },
                );
                continue;
            }

            self.validate_conformance(iface_type);
        }
    }

    /// Conformance of `self.type_` to one claimed interface.
    /// https://spec.graphql.org/October2021/#IsValidImplementation()
    fn validate_conformance(&mut self, iface_type: &'schema InterfaceType) {
        let obj_type = self.type_;
        let schema = self.ctx.schema();

        for (field_name, iface_field) in &iface_type.fields {
            // Every interface field must be provided.
            let obj_field =
                if let Some(obj_field) = obj_type.fields.get(field_name) {
                    obj_field
                } else {
                    self.ctx.report(
                        SchemaValidationError::MissingInterfaceField {
                            field_name: field_name.clone(),
                            interface_name: iface_type.name.clone(),
                            locations: collect_locations([
                                iface_field.def_location.as_ref(),
                                obj_type.def_location.as_ref(),
                            ]),
                            type_name: obj_type.name.clone(),
                        },
                    );
                    continue;
                };

            // The provided field's type must be a subtype of the interface
            // field's type. (covariant)
            if !obj_field.type_annotation.is_subtype_of(
                schema,
                &iface_field.type_annotation,
            ) {
                self.ctx.report(
                    SchemaValidationError::IncompatibleInterfaceFieldType {
                        expected_type: iface_field.type_annotation.clone(),
                        field_name: field_name.clone(),
                        interface_name: iface_type.name.clone(),
                        locations: collect_locations([
                            iface_field.type_annotation.ref_location(),
                            obj_field.type_annotation.ref_location(),
                        ]),
                        provided_type: obj_field.type_annotation.clone(),
                        type_name: obj_type.name.clone(),
                    },
                );
            }

            for iface_argument in &iface_field.arguments {
                // Every interface field argument must be provided.
                let obj_argument =
                    if let Some(obj_argument) =
                        obj_field.argument_named(iface_argument.name.as_str())
                    {
                        obj_argument
                    } else {
                        self.ctx.report(
                            SchemaValidationError::MissingInterfaceFieldArgument {
                                argument_name: iface_argument.name.clone(),
                                field_name: field_name.clone(),
                                interface_name: iface_type.name.clone(),
                                locations: collect_locations([
                                    iface_argument.def_location.as_ref(),
                                    obj_field.def_location.as_ref(),
                                ]),
                                type_name: obj_type.name.clone(),
                            },
                        );
                        continue;
                    };

                if !argument_types_match(
                    &iface_argument.type_annotation,
                    &obj_argument.type_annotation,
                ) {
                    self.ctx.report(
                        SchemaValidationError::IncompatibleInterfaceFieldArgumentType {
                            argument_name: iface_argument.name.clone(),
                            expected_type: iface_argument.type_annotation.clone(),
                            field_name: field_name.clone(),
                            interface_name: iface_type.name.clone(),
                            locations: collect_locations([
                                iface_argument.type_annotation.ref_location(),
                                obj_argument.type_annotation.ref_location(),
                            ]),
                            provided_type: obj_argument.type_annotation.clone(),
                            type_name: obj_type.name.clone(),
                        },
                    );
                }
            }

            // Arguments beyond the interface's must not be required.
            // See 2.d at
            // https://spec.graphql.org/October2021/#IsValidImplementation()
            for obj_argument in &obj_field.arguments {
                let claimed_by_iface =
                    iface_field
                        .argument_named(obj_argument.name.as_str())
                        .is_some();
                if !claimed_by_iface && !obj_argument.type_annotation.nullable() {
                    self.ctx.report(
                        SchemaValidationError::AdditionalRequiredArgument {
                            argument_name: obj_argument.name.clone(),
                            argument_type: obj_argument.type_annotation.clone(),
                            field_name: field_name.clone(),
                            interface_name: iface_type.name.clone(),
                            locations: collect_locations([
                                obj_argument.type_annotation.ref_location(),
                                iface_field.def_location.as_ref(),
                            ]),
                            type_name: obj_type.name.clone(),
                        },
                    );
                }
            }
        }
    }

    /// Every claim site naming this interface, falling back to the
    /// reference's own location when the claim carries no source nodes.
    fn claim_locations(
        &self,
        iface_ref: &NamedTypeRef,
    ) -> Vec<loc::SourceLocation> {
        let locations =
            self.ctx.declaration_index().interface_claim_locations(
                self.type_.name.as_str(),
                iface_ref.name(),
            );
        if locations.is_empty() {
            iface_ref.ref_location().cloned().into_iter().collect()
        } else {
            locations
        }
    }
}

/// Interface-specified arguments must be implemented with exactly the same
/// type; subtyping is not allowed here, unlike field result types.
fn argument_types_match(
    expected: &TypeAnnotation,
    provided: &TypeAnnotation,
) -> bool {
    provided.is_equivalent_to(expected)
}

fn collect_locations(
    locations: [Option<&loc::SourceLocation>; 2],
) -> Vec<loc::SourceLocation> {
    locations.into_iter().flatten().cloned().collect()
}
