use crate::ast;
use crate::loc;
use crate::schema::Schema;
use crate::types::NamedType;
use std::collections::HashMap;

type LocationsByName<'schema> =
    HashMap<&'schema str, Vec<&'schema loc::SourceLocation>>;

/// Source-level declaration evidence for a [`Schema`], gathered from the
/// definition and extension nodes its elements were built from.
///
/// The semantic layer is deduplicated by construction (a type's fields live
/// in a map, a union's members carry one entry per name), so evidence of
/// duplicate declarations only survives on the source nodes. This index
/// collects that evidence once per validation run so the validators can
/// report every declaration site of a duplicated element.
///
/// Elements built without source nodes simply have no entries here; queries
/// then return empty location lists and validation proceeds location-free.
pub(crate) struct DeclarationIndex<'schema> {
    directive_arguments: HashMap<&'schema str, LocationsByName<'schema>>,
    enum_values: HashMap<&'schema str, LocationsByName<'schema>>,
    field_arguments:
        HashMap<&'schema str, HashMap<&'schema str, LocationsByName<'schema>>>,
    fields: HashMap<&'schema str, LocationsByName<'schema>>,
    interface_claims: HashMap<&'schema str, LocationsByName<'schema>>,
    root_operations: HashMap<ast::OperationKind, &'schema loc::SourceLocation>,
    type_declarations: LocationsByName<'schema>,
    union_members: HashMap<&'schema str, LocationsByName<'schema>>,
}
impl<'schema> DeclarationIndex<'schema> {
    pub fn new(schema: &'schema Schema) -> Self {
        let mut index = Self {
            directive_arguments: HashMap::new(),
            enum_values: HashMap::new(),
            field_arguments: HashMap::new(),
            fields: HashMap::new(),
            interface_claims: HashMap::new(),
            root_operations: HashMap::new(),
            type_declarations: HashMap::new(),
            union_members: HashMap::new(),
        };

        if let Some(schema_def) = schema.ast_node.as_ref() {
            // The first node for each operation kind is the one diagnostics
            // point at.
            for operation_type in &schema_def.operation_types {
                index.root_operations
                    .entry(operation_type.operation)
                    .or_insert(&operation_type.position);
            }
        }

        for directive in &schema.directives {
            if let Some(directive_def) = directive.ast_node.as_ref() {
                for argument in &directive_def.arguments {
                    index.directive_arguments
                        .entry(directive.name.as_str())
                        .or_default()
                        .entry(argument.name.as_str())
                        .or_default()
                        .push(&argument.position);
                }
            }
        }

        for (type_name, type_) in &schema.types {
            index.record_type(type_name.as_str(), type_);
        }

        index
    }

    pub fn directive_argument_locations(
        &self,
        directive_name: &str,
        argument_name: &str,
    ) -> Vec<loc::SourceLocation> {
        cloned(
            self.directive_arguments
                .get(directive_name)
                .and_then(|arguments| arguments.get(argument_name)),
        )
    }

    pub fn enum_value_locations(
        &self,
        type_name: &str,
        value_name: &str,
    ) -> Vec<loc::SourceLocation> {
        cloned(
            self.enum_values
                .get(type_name)
                .and_then(|values| values.get(value_name)),
        )
    }

    pub fn field_argument_locations(
        &self,
        type_name: &str,
        field_name: &str,
        argument_name: &str,
    ) -> Vec<loc::SourceLocation> {
        cloned(
            self.field_arguments
                .get(type_name)
                .and_then(|fields| fields.get(field_name))
                .and_then(|arguments| arguments.get(argument_name)),
        )
    }

    pub fn field_locations(
        &self,
        type_name: &str,
        field_name: &str,
    ) -> Vec<loc::SourceLocation> {
        cloned(
            self.fields
                .get(type_name)
                .and_then(|fields| fields.get(field_name)),
        )
    }

    pub fn interface_claim_locations(
        &self,
        type_name: &str,
        interface_name: &str,
    ) -> Vec<loc::SourceLocation> {
        cloned(
            self.interface_claims
                .get(type_name)
                .and_then(|claims| claims.get(interface_name)),
        )
    }

    pub fn root_operation_location(
        &self,
        operation: ast::OperationKind,
    ) -> Option<loc::SourceLocation> {
        self.root_operations
            .get(&operation)
            .map(|&location| location.clone())
    }

    /// Every declaration site of the named type: its definition node plus
    /// each extension node, or its `def_location` if it carries no nodes.
    pub fn type_locations(&self, type_name: &str) -> Vec<loc::SourceLocation> {
        cloned(self.type_declarations.get(type_name))
    }

    pub fn union_member_locations(
        &self,
        type_name: &str,
        member_name: &str,
    ) -> Vec<loc::SourceLocation> {
        cloned(
            self.union_members
                .get(type_name)
                .and_then(|members| members.get(member_name)),
        )
    }

    fn record_type(
        &mut self,
        type_name: &'schema str,
        type_: &'schema NamedType,
    ) {
        let mut declarations: Vec<&'schema loc::SourceLocation> = vec![];
        match type_ {
            NamedType::Enum(enum_type) => {
                if let Some(ast_node) = enum_type.ast_node.as_ref() {
                    declarations.push(&ast_node.position);
                    self.record_enum_values(type_name, &ast_node.values);
                }
                for ext_node in &enum_type.extension_ast_nodes {
                    declarations.push(&ext_node.position);
                    self.record_enum_values(type_name, &ext_node.values);
                }
            }

            NamedType::InputObject(input_object_type) => {
                if let Some(ast_node) = input_object_type.ast_node.as_ref() {
                    declarations.push(&ast_node.position);
                }
                for ext_node in &input_object_type.extension_ast_nodes {
                    declarations.push(&ext_node.position);
                }
            }

            NamedType::InputUnion(input_union_type) => {
                if let Some(ast_node) = input_union_type.ast_node.as_ref() {
                    declarations.push(&ast_node.position);
                    self.record_union_members(type_name, &ast_node.members);
                }
                for ext_node in &input_union_type.extension_ast_nodes {
                    declarations.push(&ext_node.position);
                    self.record_union_members(type_name, &ext_node.members);
                }
            }

            NamedType::Interface(iface_type) => {
                if let Some(ast_node) = iface_type.ast_node.as_ref() {
                    declarations.push(&ast_node.position);
                    self.record_fields(type_name, &ast_node.fields);
                }
                for ext_node in &iface_type.extension_ast_nodes {
                    declarations.push(&ext_node.position);
                    self.record_fields(type_name, &ext_node.fields);
                }
            }

            NamedType::Object(obj_type) => {
                if let Some(ast_node) = obj_type.ast_node.as_ref() {
                    declarations.push(&ast_node.position);
                    self.record_fields(type_name, &ast_node.fields);
                    self.record_interface_claims(type_name, &ast_node.interfaces);
                }
                for ext_node in &obj_type.extension_ast_nodes {
                    declarations.push(&ext_node.position);
                    self.record_fields(type_name, &ext_node.fields);
                    self.record_interface_claims(type_name, &ext_node.interfaces);
                }
            }

            NamedType::Scalar(scalar_type) => {
                if let Some(ast_node) = scalar_type.ast_node.as_ref() {
                    declarations.push(&ast_node.position);
                }
                for ext_node in &scalar_type.extension_ast_nodes {
                    declarations.push(&ext_node.position);
                }
            }

            NamedType::Union(union_type) => {
                if let Some(ast_node) = union_type.ast_node.as_ref() {
                    declarations.push(&ast_node.position);
                    self.record_union_members(type_name, &ast_node.members);
                }
                for ext_node in &union_type.extension_ast_nodes {
                    declarations.push(&ext_node.position);
                    self.record_union_members(type_name, &ext_node.members);
                }
            }
        }
        if declarations.is_empty() {
            declarations.extend(type_.def_location());
        }
        self.type_declarations.insert(type_name, declarations);
    }

    fn record_enum_values(
        &mut self,
        type_name: &'schema str,
        values: &'schema [ast::EnumValueDefinition],
    ) {
        for value in values {
            self.enum_values
                .entry(type_name)
                .or_default()
                .entry(value.name.as_str())
                .or_default()
                .push(&value.position);
        }
    }

    fn record_fields(
        &mut self,
        type_name: &'schema str,
        fields: &'schema [ast::FieldDefinition],
    ) {
        for field in fields {
            self.fields
                .entry(type_name)
                .or_default()
                .entry(field.name.as_str())
                .or_default()
                .push(&field.position);
            for argument in &field.arguments {
                self.field_arguments
                    .entry(type_name)
                    .or_default()
                    .entry(field.name.as_str())
                    .or_default()
                    .entry(argument.name.as_str())
                    .or_default()
                    .push(&argument.position);
            }
        }
    }

    fn record_interface_claims(
        &mut self,
        type_name: &'schema str,
        claims: &'schema [ast::NamedTypeNode],
    ) {
        for claim in claims {
            self.interface_claims
                .entry(type_name)
                .or_default()
                .entry(claim.name.as_str())
                .or_default()
                .push(&claim.position);
        }
    }

    fn record_union_members(
        &mut self,
        type_name: &'schema str,
        members: &'schema [ast::NamedTypeNode],
    ) {
        for member in members {
            self.union_members
                .entry(type_name)
                .or_default()
                .entry(member.name.as_str())
                .or_default()
                .push(&member.position);
        }
    }
}

fn cloned(
    locations: Option<&Vec<&loc::SourceLocation>>,
) -> Vec<loc::SourceLocation> {
    locations
        .map(|locations| {
            locations
                .iter()
                .map(|&location| location.clone())
                .collect()
        })
        .unwrap_or_default()
}
