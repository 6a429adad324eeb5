use crate::ast;
use crate::name::InvalidNameError;
use crate::schema::Schema;
use crate::schema::SchemaValidationError;
use crate::types::NamedType;
use crate::types::NamedTypeRef;
use crate::types::TypeAnnotation;
use crate::types::tests::test_utils;
use rayon::prelude::*;

mod root_types {
    use super::*;

    #[test]
    fn minimal_schema_validates() {
        let schema = test_utils::test_schema(vec![]);

        assert!(schema.validate().is_empty());
        assert_eq!(schema.assert_valid(), Ok(()));
    }

    #[test]
    fn schema_without_a_query_root_type_does_not_validate() {
        let schema = Schema::new(test_utils::base_config());

        assert_eq!(schema.validate(), vec![
            SchemaValidationError::MissingQueryRootType {
                locations: vec![],
            },
        ]);
    }

    #[test]
    fn missing_query_root_is_located_at_the_schema_definition() {
        let mut config = test_utils::base_config();
        config.ast_node = Some(ast::SchemaDefinition {
            operation_types: vec![],
            position: test_utils::location(1, 1),
        });
        let schema = Schema::new(config);

        assert_eq!(schema.validate(), vec![
            SchemaValidationError::MissingQueryRootType {
                locations: vec![test_utils::location(1, 1)],
            },
        ]);
    }

    #[test]
    fn non_object_query_root_does_not_validate() {
        let mut config = test_utils::base_config();
        config.query_type = Some(NamedTypeRef::new("String", None));
        let schema = Schema::new(config);

        assert_eq!(schema.validate(), vec![
            SchemaValidationError::NonObjectQueryRoot {
                locations: vec![],
                type_name: "String".to_string(),
            },
        ]);
    }

    #[test]
    fn query_root_naming_an_undefined_type_does_not_validate() {
        let mut config = test_utils::base_config();
        config.query_type = Some(
            NamedTypeRef::new("Ghost", Some(test_utils::location(1, 15))),
        );
        let schema = Schema::new(config);

        assert_eq!(schema.validate(), vec![
            SchemaValidationError::NonObjectQueryRoot {
                locations: vec![test_utils::location(1, 15)],
                type_name: "Ghost".to_string(),
            },
        ]);
    }

    #[test]
    fn non_object_mutation_and_subscription_roots_do_not_validate() {
        let mut config = test_utils::test_config(vec![
            NamedType::Enum(test_utils::enum_type("Color", &["RED"])),
        ]);
        config.mutation_type = Some(NamedTypeRef::new("Color", None));
        config.subscription_type = Some(NamedTypeRef::new("Int", None));
        let schema = Schema::new(config);

        assert_eq!(schema.validate(), vec![
            SchemaValidationError::NonObjectMutationRoot {
                locations: vec![],
                type_name: "Color".to_string(),
            },
            SchemaValidationError::NonObjectSubscriptionRoot {
                locations: vec![],
                type_name: "Int".to_string(),
            },
        ]);
    }

    #[test]
    fn root_errors_cite_the_schema_definition_entries() {
        let mut config = test_utils::test_config(vec![
            NamedType::Interface(test_utils::interface_type(
                "Searchable",
                vec![
                    test_utils::field(
                        "query",
                        TypeAnnotation::named("String"),
                    ),
                ],
            )),
        ]);
        config.mutation_type = Some(NamedTypeRef::new("Searchable", None));
        config.ast_node = Some(ast::SchemaDefinition {
            operation_types: vec![
                ast::OperationTypeDefinition {
                    named_type: ast::NamedTypeNode {
                        name: "Query".to_string(),
                        position: test_utils::location(2, 10),
                    },
                    operation: ast::OperationKind::Query,
                    position: test_utils::location(2, 3),
                },
                ast::OperationTypeDefinition {
                    named_type: ast::NamedTypeNode {
                        name: "Searchable".to_string(),
                        position: test_utils::location(3, 13),
                    },
                    operation: ast::OperationKind::Mutation,
                    position: test_utils::location(3, 3),
                },
            ],
            position: test_utils::location(1, 1),
        });
        let schema = Schema::new(config);

        assert_eq!(schema.validate(), vec![
            SchemaValidationError::NonObjectMutationRoot {
                locations: vec![test_utils::location(3, 3)],
                type_name: "Searchable".to_string(),
            },
        ]);
    }
}

mod directives {
    use super::*;

    #[test]
    fn directive_argument_types_must_be_input_types() {
        let mut config = test_utils::test_config(vec![]);
        config.directives.push(test_utils::directive("track", vec![
            test_utils::argument("onType", TypeAnnotation::named("Query")),
        ]));
        let schema = Schema::new(config);

        assert_eq!(schema.validate(), vec![
            SchemaValidationError::InvalidDirectiveArgumentType {
                argument_name: "onType".to_string(),
                argument_type: TypeAnnotation::named("Query"),
                directive_name: "track".to_string(),
                locations: vec![],
            },
        ]);
    }

    #[test]
    fn duplicated_directive_argument_skips_its_own_type_check() {
        // Unlike a duplicated field argument, a duplicated directive
        // argument reports only the duplication even when its type is
        // also invalid.
        let mut config = test_utils::test_config(vec![]);
        config.directives.push(test_utils::directive("track", vec![
            test_utils::argument("meta", TypeAnnotation::named("String")),
            test_utils::argument("meta", TypeAnnotation::named("Query")),
        ]));
        let schema = Schema::new(config);

        assert_eq!(schema.validate(), vec![
            SchemaValidationError::DuplicateDirectiveArgument {
                argument_name: "meta".to_string(),
                directive_name: "track".to_string(),
                locations: vec![],
            },
        ]);
    }

    #[test]
    fn duplicated_directive_argument_cites_every_declaration_site() {
        let mut track_directive = test_utils::directive("track", vec![
            test_utils::argument("meta", TypeAnnotation::named("String")),
            test_utils::argument("meta", TypeAnnotation::named("String")),
        ]);
        track_directive.ast_node = Some(ast::DirectiveDefinition {
            arguments: vec![
                ast::InputValueDefinition {
                    name: "meta".to_string(),
                    position: test_utils::location(1, 17),
                },
                ast::InputValueDefinition {
                    name: "meta".to_string(),
                    position: test_utils::location(1, 31),
                },
            ],
            name: "track".to_string(),
            position: test_utils::location(1, 1),
        });
        let mut config = test_utils::test_config(vec![]);
        config.directives.push(track_directive);
        let schema = Schema::new(config);

        assert_eq!(schema.validate(), vec![
            SchemaValidationError::DuplicateDirectiveArgument {
                argument_name: "meta".to_string(),
                directive_name: "track".to_string(),
                locations: vec![
                    test_utils::location(1, 17),
                    test_utils::location(1, 31),
                ],
            },
        ]);
    }

    #[test]
    fn directive_names_are_checked_against_the_name_grammar() {
        let mut track_directive = test_utils::directive("__track", vec![]);
        track_directive.def_location = Some(test_utils::location(1, 12));
        let mut config = test_utils::test_config(vec![]);
        config.directives.push(track_directive);
        let schema = Schema::new(config);

        assert_eq!(schema.validate(), vec![
            SchemaValidationError::InvalidName {
                locations: vec![test_utils::location(1, 12)],
                name_error: InvalidNameError::ReservedPrefix {
                    name: "__track".to_string(),
                },
            },
        ]);
    }
}

mod names {
    use super::*;

    #[test]
    fn allowed_legacy_names_bypass_the_name_grammar() {
        let mut config = test_utils::test_config(vec![
            NamedType::Object(test_utils::object_type("bad-legacy-name", vec![
                test_utils::field("ok", TypeAnnotation::named("String")),
            ])),
        ]);
        config.allowed_legacy_names = vec!["bad-legacy-name".to_string()];
        let schema = Schema::new(config);

        assert_eq!(schema.assert_valid(), Ok(()));
    }

    #[test]
    fn the_legacy_allowlist_matches_exact_names_only() {
        let mut config = test_utils::test_config(vec![
            NamedType::Object(test_utils::object_type("other-bad", vec![
                test_utils::field("ok", TypeAnnotation::named("String")),
            ])),
        ]);
        config.allowed_legacy_names = vec!["bad-legacy-name".to_string()];
        let schema = Schema::new(config);

        assert_eq!(schema.validate(), vec![
            SchemaValidationError::InvalidName {
                locations: vec![],
                name_error: InvalidNameError::InvalidFormat {
                    name: "other-bad".to_string(),
                },
            },
        ]);
    }

    #[test]
    fn introspection_type_names_are_not_name_checked() {
        // `__Schema` belongs to the introspection set; `__Custom` is just a
        // reserved-prefix violation.
        let schema = test_utils::test_schema(vec![
            NamedType::Object(test_utils::object_type("__Schema", vec![
                test_utils::field("types", TypeAnnotation::named("String")),
            ])),
            NamedType::Object(test_utils::object_type("__Custom", vec![
                test_utils::field("value", TypeAnnotation::named("String")),
            ])),
        ]);

        assert_eq!(schema.validate(), vec![
            SchemaValidationError::InvalidName {
                locations: vec![],
                name_error: InvalidNameError::ReservedPrefix {
                    name: "__Custom".to_string(),
                },
            },
        ]);
    }
}

mod results {
    use super::*;

    #[test]
    fn diagnostics_preserve_pass_order() {
        // Root errors come first, then directive errors, then type errors
        // in type insertion order.
        let mut config = test_utils::test_config(vec![
            NamedType::Enum(test_utils::enum_type("Empty", &[])),
            NamedType::Union(test_utils::union_type("Lonely", &[])),
        ]);
        config.subscription_type = Some(NamedTypeRef::new("Empty", None));
        config.directives.push(test_utils::directive("track", vec![
            test_utils::argument("onType", TypeAnnotation::named("Query")),
        ]));
        let schema = Schema::new(config);

        assert_eq!(schema.validate(), vec![
            SchemaValidationError::NonObjectSubscriptionRoot {
                locations: vec![],
                type_name: "Empty".to_string(),
            },
            SchemaValidationError::InvalidDirectiveArgumentType {
                argument_name: "onType".to_string(),
                argument_type: TypeAnnotation::named("Query"),
                directive_name: "track".to_string(),
                locations: vec![],
            },
            SchemaValidationError::EnumWithoutValues {
                enum_name: "Empty".to_string(),
                locations: vec![],
            },
            SchemaValidationError::UnionWithoutMembers {
                locations: vec![],
                union_name: "Lonely".to_string(),
            },
        ]);
    }

    #[test]
    fn validation_runs_once_and_is_cached() {
        let schema = test_utils::test_schema(vec![
            NamedType::Enum(test_utils::enum_type("Empty", &[])),
        ]);

        let first = schema.validate();
        let second = schema.validate();

        assert_eq!(first.len(), 1);
        assert_eq!(first.as_ptr(), second.as_ptr());
    }

    #[test]
    fn concurrent_validation_yields_a_single_result() {
        let schema = test_utils::test_schema(vec![
            NamedType::Enum(test_utils::enum_type("Empty", &[])),
        ]);

        let pointers: Vec<usize> = (0..16)
            .into_par_iter()
            .map(|_| {
                let errors = schema.validate();
                assert_eq!(errors.len(), 1);
                errors.as_ptr() as usize
            })
            .collect();

        assert!(pointers.iter().all(|&pointer| pointer == pointers[0]));
    }

    #[test]
    fn assert_valid_joins_every_diagnostic_message() {
        let schema = test_utils::test_schema(vec![
            NamedType::Enum(test_utils::enum_type("Empty", &[])),
            NamedType::Union(test_utils::union_type("Lonely", &[])),
        ]);

        let error = schema.assert_valid().unwrap_err();

        assert_eq!(error.errors, schema.validate().to_vec());
        assert_eq!(
            error.to_string(),
            "Enum type Empty must define one or more values.\n\n\
             Union type Lonely must define one or more member types.",
        );
    }

    #[test]
    fn diagnostic_messages_render_annotations() {
        let schema = test_utils::test_schema(vec![
            NamedType::InputObject(test_utils::input_object_type(
                "PointInput",
                vec![
                    test_utils::input_field(
                        "x",
                        TypeAnnotation::named("Int"),
                    ),
                ],
            )),
            NamedType::InputUnion(test_utils::input_union_type(
                "ShapeInput",
                &["PointInput"],
            )),
            NamedType::Object(test_utils::object_type("Canvas", vec![
                test_utils::field(
                    "shape",
                    TypeAnnotation::non_null_list_of(
                        TypeAnnotation::non_null_named("ShapeInput"),
                    ),
                ),
            ])),
        ]);

        let errors = schema.validate();

        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[0].to_string(),
            "The type of Canvas.shape must be Output Type but got: \
             [ShapeInput!]!.",
        );
    }

    #[test]
    fn locations_accessor_exposes_each_diagnostics_evidence() {
        let mut lonely_type = test_utils::union_type("Lonely", &[]);
        lonely_type.def_location = Some(test_utils::location(3, 1));
        let schema = test_utils::test_schema(vec![
            NamedType::Union(lonely_type),
        ]);

        let errors = schema.validate();

        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[0].locations().to_vec(),
            vec![test_utils::location(3, 1)],
        );
    }
}
