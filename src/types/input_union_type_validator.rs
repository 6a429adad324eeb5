use crate::loc;
use crate::schema::SchemaValidationContext;
use crate::schema::SchemaValidationError;
use crate::types::InputUnionType;
use crate::types::NamedType;
use crate::types::NamedTypeRef;
use std::collections::HashSet;

pub(crate) struct InputUnionTypeValidator<'a, 'schema> {
    ctx: &'a mut SchemaValidationContext<'schema>,
    type_: &'schema InputUnionType,
}
impl<'a, 'schema> InputUnionTypeValidator<'a, 'schema> {
    pub fn new(
        type_: &'schema InputUnionType,
        ctx: &'a mut SchemaValidationContext<'schema>,
    ) -> Self {
        Self { ctx, type_ }
    }

    pub fn validate(mut self) {
        let input_union_type = self.type_;
        let schema = self.ctx.schema();

        // Input union types must declare one or more member types.
        if input_union_type.members.is_empty() {
            let locations =
                self.ctx.declaration_index().type_locations(
                    input_union_type.name.as_str(),
                );
            self.ctx.report(SchemaValidationError::InputUnionWithoutMembers {
                input_union_name: input_union_type.name.clone(),
                locations,
            });
        }

        let mut seen_member_names = HashSet::new();
        for member_ref in &input_union_type.members {
            let member_name = member_ref.name();

            // A repeated member is reported once and its kind is not
            // re-checked.
            if !seen_member_names.insert(member_name) {
                let locations = self.member_locations(member_ref);
                self.ctx.report(
                    SchemaValidationError::DuplicateInputUnionMember {
                        input_union_name: input_union_type.name.clone(),
                        locations,
                        member_name: member_name.to_string(),
                    },
                );
                continue;
            }

            // Member types of an input union can only be input object types.
            if !matches!(
                schema.types.get(member_name),
                Some(NamedType::InputObject(_)),
            ) {
                self.ctx.report(
                    SchemaValidationError::InvalidInputUnionMemberType {
                        input_union_name: input_union_type.name.clone(),
                        locations:
                            member_ref.ref_location()
                                .cloned()
                                .into_iter()
                                .collect(),
                        member_name: member_name.to_string(),
                    },
                );
            }
        }
    }

    fn member_locations(
        &self,
        member_ref: &NamedTypeRef,
    ) -> Vec<loc::SourceLocation> {
        let locations =
            self.ctx.declaration_index().union_member_locations(
                self.type_.name.as_str(),
                member_ref.name(),
            );
        if locations.is_empty() {
            member_ref.ref_location().cloned().into_iter().collect()
        } else {
            locations
        }
    }
}
