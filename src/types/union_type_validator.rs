use crate::loc;
use crate::schema::SchemaValidationContext;
use crate::schema::SchemaValidationError;
use crate::types::NamedType;
use crate::types::NamedTypeRef;
use crate::types::UnionType;
use std::collections::HashSet;

pub(crate) struct UnionTypeValidator<'a, 'schema> {
    ctx: &'a mut SchemaValidationContext<'schema>,
    type_: &'schema UnionType,
}
impl<'a, 'schema> UnionTypeValidator<'a, 'schema> {
    pub fn new(
        type_: &'schema UnionType,
        ctx: &'a mut SchemaValidationContext<'schema>,
    ) -> Self {
        Self { ctx, type_ }
    }

    pub fn validate(mut self) {
        let union_type = self.type_;
        let schema = self.ctx.schema();

        // Union types must declare one or more member types.
        // https://spec.graphql.org/October2021/#sec-Unions.Type-Validation
        if union_type.members.is_empty() {
            let locations =
                self.ctx.declaration_index().type_locations(
                    union_type.name.as_str(),
                );
            self.ctx.report(SchemaValidationError::UnionWithoutMembers {
                locations,
                union_name: union_type.name.clone(),
            });
        }

        let mut seen_member_names = HashSet::new();
        for member_ref in &union_type.members {
            let member_name = member_ref.name();

            // A repeated member is reported once and its kind is not
            // re-checked.
            if !seen_member_names.insert(member_name) {
                let locations = self.member_locations(member_ref);
                self.ctx.report(SchemaValidationError::DuplicateUnionMember {
                    locations,
                    member_name: member_name.to_string(),
                    union_name: union_type.name.clone(),
                });
                continue;
            }

            // Member types of a union type can only be object types.
            // https://spec.graphql.org/October2021/#sel-HAHdfFDABABlG3ib
            if !matches!(
                schema.types.get(member_name),
                Some(NamedType::Object(_)),
            ) {
                self.ctx.report(SchemaValidationError::InvalidUnionMemberType {
                    locations:
                        member_ref.ref_location()
                            .cloned()
                            .into_iter()
                            .collect(),
                    member_name: member_name.to_string(),
                    union_name: union_type.name.clone(),
                });
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
