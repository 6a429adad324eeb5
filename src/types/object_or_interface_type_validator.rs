use crate::schema::SchemaValidationContext;
use crate::schema::SchemaValidationError;
use crate::types::ObjectOrInterfaceType;
use std::collections::HashSet;

pub(crate) struct ObjectOrInterfaceTypeValidator<'a, 'schema> {
    ctx: &'a mut SchemaValidationContext<'schema>,
    type_: ObjectOrInterfaceType<'schema>,
}
impl<'a, 'schema> ObjectOrInterfaceTypeValidator<'a, 'schema> {
    pub fn new(
        type_: ObjectOrInterfaceType<'schema>,
        ctx: &'a mut SchemaValidationContext<'schema>,
    ) -> Self {
        Self { ctx, type_ }
    }

    pub fn validate(mut self) {
        let type_name = self.type_.name();
        let fields = self.type_.fields();
        let schema = self.ctx.schema();

        // Object and interface types must define one or more fields.
        // https://spec.graphql.org/October2021/#sec-Objects.Type-Validation
        if fields.is_empty() {
            let locations =
                self.ctx.declaration_index().type_locations(type_name);
            self.ctx.report(SchemaValidationError::TypeWithoutFields {
                locations,
                type_name: type_name.to_string(),
            });
        }

        for (field_name, field) in fields {
            self.ctx.validate_name(
                field_name.as_str(),
                field.def_location.as_ref(),
            );

            // A field declared more than once is reported at every
            // declaration site and checked no further.
            let declarations =
                self.ctx.declaration_index().field_locations(
                    type_name,
                    field_name.as_str(),
                );
            if declarations.len() > 1 {
                self.ctx.report(SchemaValidationError::DuplicateFieldDefinition {
                    field_name: field_name.clone(),
                    locations: declarations,
                    type_name: type_name.to_string(),
                });
                continue;
            }

            // Fields must be declared with an output type.
            // https://spec.graphql.org/October2021/#sel-JAHZhCFDBFABLBgB_pM
            if !field.type_annotation.is_output_type(schema) {
                self.ctx.report(SchemaValidationError::InvalidFieldType {
                    field_name: field_name.clone(),
                    field_type: field.type_annotation.clone(),
                    locations:
                        field.type_annotation
                            .ref_location()
                            .cloned()
                            .into_iter()
                            .collect(),
                    type_name: type_name.to_string(),
                });
            }

            let mut seen_argument_names = HashSet::new();
            for argument in &field.arguments {
                self.ctx.validate_name(
                    argument.name.as_str(),
                    argument.def_location.as_ref(),
                );

                // A duplicated argument still gets its type checked.
                if !seen_argument_names.insert(argument.name.as_str()) {
                    let locations =
                        self.ctx.declaration_index().field_argument_locations(
                            type_name,
                            field_name.as_str(),
                            argument.name.as_str(),
                        );
                    self.ctx.report(
                        SchemaValidationError::DuplicateFieldArgument {
                            argument_name: argument.name.clone(),
                            field_name: field_name.clone(),
                            locations,
                            type_name: type_name.to_string(),
                        },
                    );
                }

                // Arguments must be declared with an input type.
                // https://spec.graphql.org/October2021/#sel-KAHZhCFDBHBDCAACEB6yD
                if !argument.type_annotation.is_input_type(schema) {
                    self.ctx.report(
                        SchemaValidationError::InvalidFieldArgumentType {
                            argument_name: argument.name.clone(),
                            argument_type: argument.type_annotation.clone(),
                            field_name: field_name.clone(),
                            locations:
                                argument.type_annotation
                                    .ref_location()
                                    .cloned()
                                    .into_iter()
                                    .collect(),
                            type_name: type_name.to_string(),
                        },
                    );
                }
            }
        }
    }
}
