use crate::schema::SchemaValidationContext;
use crate::schema::SchemaValidationError;
use crate::types::EnumType;

pub(crate) struct EnumTypeValidator<'a, 'schema> {
    ctx: &'a mut SchemaValidationContext<'schema>,
    type_: &'schema EnumType,
}
impl<'a, 'schema> EnumTypeValidator<'a, 'schema> {
    pub fn new(
        type_: &'schema EnumType,
        ctx: &'a mut SchemaValidationContext<'schema>,
    ) -> Self {
        Self { ctx, type_ }
    }

    pub fn validate(mut self) {
        let enum_type = self.type_;

        // Enum types must define one or more values.
        // https://spec.graphql.org/October2021/#sec-Enums.Type-Validation
        if enum_type.values.is_empty() {
            let locations =
                self.ctx.declaration_index().type_locations(
                    enum_type.name.as_str(),
                );
            self.ctx.report(SchemaValidationError::EnumWithoutValues {
                enum_name: enum_type.name.clone(),
                locations,
            });
        }

        for value in &enum_type.values {
            // A value declared more than once is reported at every
            // declaration site.
            let declarations =
                self.ctx.declaration_index().enum_value_locations(
                    enum_type.name.as_str(),
                    value.name.as_str(),
                );
            if declarations.len() > 1 {
                self.ctx.report(SchemaValidationError::DuplicateEnumValue {
                    enum_name: enum_type.name.clone(),
                    locations: declarations,
                    value_name: value.name.clone(),
                });
            }

            self.ctx.validate_name(
                value.name.as_str(),
                value.def_location.as_ref(),
            );

            // `true`, `false` and `null` are reserved by the value grammar.
            if matches!(value.name.as_str(), "true" | "false" | "null") {
                self.ctx.report(SchemaValidationError::ReservedEnumValue {
                    enum_name: enum_type.name.clone(),
                    locations:
                        value.def_location.clone().into_iter().collect(),
                    value_name: value.name.clone(),
                });
            }
        }
    }
}
