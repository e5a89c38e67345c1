use super::*;
use crate::modeler::Modeler;
use crate::test_fixtures;
use immgen_common::well_known::GENERATED;
use immgen_types::TypeTemplate;

fn type_of(binary_name: &str) -> ImportableType {
    ImportableType::new(binary_name).expect("valid binary name")
}

fn model(declaration: &crate::InterfaceDeclaration) -> ImmutableImpl {
    let resolved = Modeler::create(declaration);
    assert!(!resolved.has_errors(), "unexpected diagnostics: {:?}", resolved.diagnostics);
    resolved.value.expect("model")
}

#[test]
fn test_non_generic_type() {
    let type_ = ImmutableType::new(type_of("test.ImmutableRectangle"), type_of("test.Rectangle"));
    assert_eq!(type_.package_name(), "test");
    assert_eq!(type_.simple_name(), "ImmutableRectangle");
    assert_eq!(type_.qualified_name(), "test.ImmutableRectangle");
    assert_eq!(type_.impl_type.pattern(), "%s");
    assert_eq!(type_.interface_type.args(), [type_of("test.Rectangle")]);
}

#[test]
fn test_source_name() {
    let impl_ = model(&test_fixtures::rectangle());
    assert_eq!(impl_.source_name(), "test.ImmutableRectangle");
}

#[test]
fn test_referenced_types() {
    let impl_ = model(&test_fixtures::colored_rectangle());
    let referenced: Vec<_> = impl_
        .referenced_types(&GENERATED)
        .into_iter()
        .map(|type_| type_.qualified_name().to_string())
        .collect();
    assert_eq!(
        referenced,
        [
            "java.awt.Color",
            "java.lang.Override",
            "java.util.Optional",
            "javax.annotation.processing.Generated",
            "test.ColoredRectangle",
            "test.ImmutableColoredRectangle",
            "test.Rectangle",
        ]
    );
}

#[test]
fn test_referenced_types_use_configured_annotation() {
    let impl_ = model(&test_fixtures::empty());
    let annotation = type_of("javax.annotation.Generated");
    let referenced = impl_.referenced_types(&annotation);
    assert!(referenced.contains(&annotation));
    assert!(!referenced.contains(&*GENERATED));
}

#[test]
fn test_type_qualifier_shadows_with_package_types() {
    let impl_ = model(&test_fixtures::qualified_types());
    let qualifier = impl_.type_qualifier(&GENERATED);
    assert!(qualifier.imported_types().is_empty());
    assert!(qualifier.is_qualified(&type_of("java.lang.String")));
    assert!(qualifier.is_qualified(&type_of("java.lang.Override")));
    assert!(qualifier.is_qualified(&GENERATED));
    assert!(!qualifier.is_qualified(&type_of("test.source.String")));
}

#[test]
fn test_type_qualifier_type_variables() {
    let impl_ = model(&test_fixtures::generic_box());
    assert_eq!(impl_.type_.type_variables, ["T"]);
    let qualifier = impl_.type_qualifier(&GENERATED);
    assert!(qualifier.type_variables().contains("T"));
    assert_eq!(
        qualifier.imported_types(),
        [type_of("java.util.List"), GENERATED.clone()]
    );
}

#[test]
fn test_member_serialization() {
    let member = ImmutableMember::new("width", TypeTemplate::primitive("double"));
    let json = serde_json::to_value(&member).expect("serialize");
    assert_eq!(json["name"], "width");
    assert_eq!(json["type"]["pattern"], "double");

    let round_trip: ImmutableMember = serde_json::from_value(json).expect("deserialize");
    assert_eq!(round_trip, member);
}
