use crate::schema::SchemaValidationContext;
use crate::schema::SchemaValidationError;
use crate::types::InputObjectType;

pub(crate) struct InputObjectTypeValidator<'a, 'schema> {
    ctx: &'a mut SchemaValidationContext<'schema>,
    type_: &'schema InputObjectType,
}
impl<'a, 'schema> InputObjectTypeValidator<'a, 'schema> {
    pub fn new(
        type_: &'schema InputObjectType,
        ctx: &'a mut SchemaValidationContext<'schema>,
    ) -> Self {
        Self { ctx, type_ }
    }

    pub fn validate(mut self) {
        let input_object_type = self.type_;
        let schema = self.ctx.schema();

        // Input object types must define one or more input fields.
        // https://spec.graphql.org/October2021/#sec-Input-Objects.Type-Validation
        if input_object_type.fields.is_empty() {
            let locations =
                self.ctx.declaration_index().type_locations(
                    input_object_type.name.as_str(),
                );
            self.ctx.report(SchemaValidationError::InputObjectWithoutFields {
                input_object_name: input_object_type.name.clone(),
                locations,
            });
        }

        for (field_name, field) in &input_object_type.fields {
            self.ctx.validate_name(
                field_name.as_str(),
                field.def_location.as_ref(),
            );

            // TODO: Report input fields declared more than once, once the
            //       declaration index records input field nodes.

            // Input fields must be declared with an input type.
            if !field.type_annotation.is_input_type(schema) {
                self.ctx.report(SchemaValidationError::InvalidInputFieldType {
                    field_name: field_name.clone(),
                    field_type: field.type_annotation.clone(),
                    input_object_name: input_object_type.name.clone(),
                    locations:
                        field.type_annotation
                            .ref_location()
                            .cloned()
                            .into_iter()
                            .collect(),
                });
            }
        }
    }
}
