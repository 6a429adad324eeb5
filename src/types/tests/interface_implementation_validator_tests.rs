use crate::ast;
use crate::schema::SchemaValidationError;
use crate::types::NamedType;
use crate::types::NamedTypeRef;
use crate::types::TypeAnnotation;
use crate::types::tests::test_utils;

#[test]
fn object_conforming_to_its_interface_validates() {
    let schema = test_utils::test_schema(vec![
        NamedType::Interface(test_utils::interface_type("Node", vec![
            test_utils::field("id", TypeAnnotation::non_null_named("String")),
        ])),
        NamedType::Object(test_utils::object_type_implementing(
            "User",
            &["Node"],
            vec![
                test_utils::field(
                    "id",
                    TypeAnnotation::non_null_named("String"),
                ),
                test_utils::field("email", TypeAnnotation::named("String")),
            ],
        )),
    ]);

    assert_eq!(schema.assert_valid(), Ok(()));
}

#[test]
fn missing_interface_field_does_not_validate() {
    let mut id_field =
        test_utils::field("id", TypeAnnotation::non_null_named("String"));
    id_field.def_location = Some(test_utils::location(2, 3));
    let mut user_type = test_utils::object_type_implementing(
        "User",
        &["Node"],
        vec![test_utils::field("email", TypeAnnotation::named("String"))],
    );
    user_type.def_location = Some(test_utils::location(6, 1));
    let schema = test_utils::test_schema(vec![
        NamedType::Interface(test_utils::interface_type("Node", vec![
            id_field,
        ])),
        NamedType::Object(user_type),
    ]);

    assert_eq!(schema.validate(), vec![
        SchemaValidationError::MissingInterfaceField {
            field_name: "id".to_string(),
            interface_name: "Node".to_string(),
            locations: vec![
                test_utils::location(2, 3),
                test_utils::location(6, 1),
            ],
            type_name: "User".to_string(),
        },
    ]);
}

#[test]
fn interface_field_may_be_implemented_with_a_subtype() {
    // `User.parent` narrows the interface's `Node` to `User`, which is
    // fine: `User` implements `Node`.
    let schema = test_utils::test_schema(vec![
        NamedType::Interface(test_utils::interface_type("Node", vec![
            test_utils::field("id", TypeAnnotation::non_null_named("String")),
            test_utils::field("parent", TypeAnnotation::named("Node")),
        ])),
        NamedType::Object(test_utils::object_type_implementing(
            "User",
            &["Node"],
            vec![
                test_utils::field(
                    "id",
                    TypeAnnotation::non_null_named("String"),
                ),
                test_utils::field("parent", TypeAnnotation::named("User")),
            ],
        )),
    ]);

    assert_eq!(schema.assert_valid(), Ok(()));
}

#[test]
fn non_null_field_satisfies_a_nullable_interface_field() {
    let schema = test_utils::test_schema(vec![
        NamedType::Interface(test_utils::interface_type("Scored", vec![
            test_utils::field("score", TypeAnnotation::named("Int")),
        ])),
        NamedType::Object(test_utils::object_type_implementing(
            "Game",
            &["Scored"],
            vec![
                test_utils::field(
                    "score",
                    TypeAnnotation::non_null_named("Int"),
                ),
            ],
        )),
    ]);

    assert_eq!(schema.assert_valid(), Ok(()));
}

#[test]
fn nullable_field_does_not_satisfy_a_non_null_interface_field() {
    let schema = test_utils::test_schema(vec![
        NamedType::Interface(test_utils::interface_type("Node", vec![
            test_utils::field("id", TypeAnnotation::non_null_named("String")),
        ])),
        NamedType::Object(test_utils::object_type_implementing(
            "User",
            &["Node"],
            vec![test_utils::field("id", TypeAnnotation::named("String"))],
        )),
    ]);

    assert_eq!(schema.validate(), vec![
        SchemaValidationError::IncompatibleInterfaceFieldType {
            expected_type: TypeAnnotation::non_null_named("String"),
            field_name: "id".to_string(),
            interface_name: "Node".to_string(),
            locations: vec![],
            provided_type: TypeAnnotation::named("String"),
            type_name: "User".to_string(),
        },
    ]);
}

#[test]
fn unrelated_field_type_does_not_validate() {
    let schema = test_utils::test_schema(vec![
        NamedType::Interface(test_utils::interface_type("Node", vec![
            test_utils::field("id", TypeAnnotation::non_null_named("String")),
        ])),
        NamedType::Object(test_utils::object_type_implementing(
            "User",
            &["Node"],
            vec![test_utils::field("id", TypeAnnotation::non_null_named("Int"))],
        )),
    ]);

    assert_eq!(schema.validate(), vec![
        SchemaValidationError::IncompatibleInterfaceFieldType {
            expected_type: TypeAnnotation::non_null_named("String"),
            field_name: "id".to_string(),
            interface_name: "Node".to_string(),
            locations: vec![],
            provided_type: TypeAnnotation::non_null_named("Int"),
            type_name: "User".to_string(),
        },
    ]);
}

#[test]
fn interface_field_arguments_must_be_provided() {
    let mut filter_argument =
        test_utils::argument("filter", TypeAnnotation::named("String"));
    filter_argument.def_location = Some(test_utils::location(3, 10));
    let mut find_field = test_utils::field(
        "find",
        TypeAnnotation::named("String"),
    );
    find_field.def_location = Some(test_utils::location(8, 3));
    let schema = test_utils::test_schema(vec![
        NamedType::Interface(test_utils::interface_type("Searchable", vec![
            test_utils::field_with_args(
                "find",
                vec![filter_argument],
                TypeAnnotation::named("String"),
            ),
        ])),
        NamedType::Object(test_utils::object_type_implementing(
            "Library",
            &["Searchable"],
            vec![find_field],
        )),
    ]);

    assert_eq!(schema.validate(), vec![
        SchemaValidationError::MissingInterfaceFieldArgument {
            argument_name: "filter".to_string(),
            field_name: "find".to_string(),
            interface_name: "Searchable".to_string(),
            locations: vec![
                test_utils::location(3, 10),
                test_utils::location(8, 3),
            ],
            type_name: "Library".to_string(),
        },
    ]);
}

#[test]
fn interface_field_argument_types_are_invariant() {
    // `String!` would narrow `String` covariantly, but argument types must
    // match the interface's exactly.
    let schema = test_utils::test_schema(vec![
        NamedType::Interface(test_utils::interface_type("Searchable", vec![
            test_utils::field_with_args(
                "find",
                vec![
                    test_utils::argument(
                        "filter",
                        TypeAnnotation::named("String"),
                    ),
                ],
                TypeAnnotation::named("String"),
            ),
        ])),
        NamedType::Object(test_utils::object_type_implementing(
            "Library",
            &["Searchable"],
            vec![
                test_utils::field_with_args(
                    "find",
                    vec![
                        test_utils::argument(
                            "filter",
                            TypeAnnotation::non_null_named("String"),
                        ),
                    ],
                    TypeAnnotation::named("String"),
                ),
            ],
        )),
    ]);

    assert_eq!(schema.validate(), vec![
        SchemaValidationError::IncompatibleInterfaceFieldArgumentType {
            argument_name: "filter".to_string(),
            expected_type: TypeAnnotation::named("String"),
            field_name: "find".to_string(),
            interface_name: "Searchable".to_string(),
            locations: vec![],
            provided_type: TypeAnnotation::non_null_named("String"),
            type_name: "Library".to_string(),
        },
    ]);
}

#[test]
fn additional_object_field_arguments_must_be_nullable() {
    let schema = test_utils::test_schema(vec![
        NamedType::Interface(test_utils::interface_type("Searchable", vec![
            test_utils::field("find", TypeAnnotation::named("String")),
        ])),
        NamedType::Object(test_utils::object_type_implementing(
            "Library",
            &["Searchable"],
            vec![
                test_utils::field_with_args(
                    "find",
                    vec![
                        test_utils::argument(
                            "limit",
                            TypeAnnotation::named("Int"),
                        ),
                        test_utils::argument(
                            "filter",
                            TypeAnnotation::non_null_named("String"),
                        ),
                    ],
                    TypeAnnotation::named("String"),
                ),
            ],
        )),
    ]);

    // `limit` is fine (nullable); `filter` is required and not part of the
    // interface's contract.
    assert_eq!(schema.validate(), vec![
        SchemaValidationError::AdditionalRequiredArgument {
            argument_name: "filter".to_string(),
            argument_type: TypeAnnotation::non_null_named("String"),
            field_name: "find".to_string(),
            interface_name: "Searchable".to_string(),
            locations: vec![],
            type_name: "Library".to_string(),
        },
    ]);
}

#[test]
fn implementing_a_non_interface_type_does_not_validate() {
    // `Color` is an enum; `Swatch` is not defined at all. Neither is an
    // interface type.
    let schema = test_utils::test_schema(vec![
        NamedType::Enum(test_utils::enum_type("Color", &["RED"])),
        NamedType::Object(test_utils::object_type_implementing(
            "Paint",
            &["Color", "Swatch"],
            vec![test_utils::field("hex", TypeAnnotation::named("String"))],
        )),
    ]);

    assert_eq!(schema.validate(), vec![
        SchemaValidationError::ImplementsNonInterfaceType {
            locations: vec![],
            non_interface_type_name: "Color".to_string(),
            type_name: "Paint".to_string(),
        },
        SchemaValidationError::ImplementsNonInterfaceType {
            locations: vec![],
            non_interface_type_name: "Swatch".to_string(),
            type_name: "Paint".to_string(),
        },
    ]);
}

#[test]
fn duplicated_interface_claim_is_reported_once() {
    let mut user_type = test_utils::object_type("User", vec![
        test_utils::field("id", TypeAnnotation::non_null_named("String")),
    ]);
    user_type.interfaces = vec![
        NamedTypeRef::new("Node", None),
        NamedTypeRef::new("Node", Some(test_utils::location(5, 20))),
    ];
    let schema = test_utils::test_schema(vec![
        NamedType::Interface(test_utils::interface_type("Node", vec![
            test_utils::field("id", TypeAnnotation::non_null_named("String")),
        ])),
        NamedType::Object(user_type),
    ]);

    // Without declaration nodes the report falls back to the repeated
    // reference's own location.
    assert_eq!(schema.validate(), vec![
        SchemaValidationError::DuplicateInterfaceImplementation {
            interface_name: "Node".to_string(),
            locations: vec![test_utils::location(5, 20)],
            type_name: "User".to_string(),
        },
    ]);
}

#[test]
fn duplicated_interface_claim_cites_every_claim_site() {
    let mut user_type = test_utils::object_type_implementing(
        "User",
        &["Node", "Node"],
        vec![test_utils::field("id", TypeAnnotation::non_null_named("String"))],
    );
    user_type.ast_node = Some(ast::ObjectTypeDefinition {
        fields: vec![],
        interfaces: vec![
            ast::NamedTypeNode {
                name: "Node".to_string(),
                position: test_utils::location(5, 22),
            },
            ast::NamedTypeNode {
                name: "Node".to_string(),
                position: test_utils::location(5, 28),
            },
        ],
        name: "User".to_string(),
        position: test_utils::location(5, 1),
    });
    let schema = test_utils::test_schema(vec![
        NamedType::Interface(test_utils::interface_type("Node", vec![
            test_utils::field("id", TypeAnnotation::non_null_named("String")),
        ])),
        NamedType::Object(user_type),
    ]);

    assert_eq!(schema.validate(), vec![
        SchemaValidationError::DuplicateInterfaceImplementation {
            interface_name: "Node".to_string(),
            locations: vec![
                test_utils::location(5, 22),
                test_utils::location(5, 28),
            ],
            type_name: "User".to_string(),
        },
    ]);
}

#[test]
fn union_typed_interface_field_accepts_member_objects() {
    // `Article.media` narrows the interface's `Media` union to its `Photo`
    // member.
    let schema = test_utils::test_schema(vec![
        NamedType::Object(test_utils::object_type("Photo", vec![
            test_utils::field("url", TypeAnnotation::named("String")),
        ])),
        NamedType::Union(test_utils::union_type("Media", &["Photo"])),
        NamedType::Interface(test_utils::interface_type("Post", vec![
            test_utils::field("media", TypeAnnotation::named("Media")),
        ])),
        NamedType::Object(test_utils::object_type_implementing(
            "Article",
            &["Post"],
            vec![test_utils::field("media", TypeAnnotation::named("Photo"))],
        )),
    ]);

    assert_eq!(schema.assert_valid(), Ok(()));
}
