use super::*;
use immgen_common::TypeErrorKind;
use std::collections::HashSet;

fn type_of(binary_name: &str) -> ImportableType {
    ImportableType::new(binary_name).expect("valid binary name")
}

fn declared(binary_name: &str) -> TypeTemplate {
    TypeTemplate::declared(type_of(binary_name), &[])
}

/// Names `java.lang.String` by its simple name and everything else qualified.
struct StringOnlyNamer;

impl TypeNamer for StringOnlyNamer {
    fn name<'a>(&'a self, type_: &'a ImportableType) -> Cow<'a, str> {
        if type_.binary_name() == "java.lang.String" {
            Cow::Borrowed(type_.simple_name())
        } else {
            Cow::Borrowed(type_.qualified_name())
        }
    }
}

#[test]
fn test_primitive() {
    let template = TypeTemplate::primitive("int");
    assert_eq!(template.pattern(), "int");
    assert!(template.args().is_empty());
    assert_eq!(template.kind(), TemplateKind::Primitive);
}

#[test]
fn test_array() {
    let template = TypeTemplate::array(&TypeTemplate::primitive("int"));
    assert_eq!(template.pattern(), "int[]");
    assert!(template.args().is_empty());

    let nested = TypeTemplate::array(&TypeTemplate::array(&declared("java.lang.String")));
    assert_eq!(nested.pattern(), "%s[][]");
    assert_eq!(nested.args(), &[type_of("java.lang.String")]);
}

#[test]
fn test_declared_non_generic() {
    let template = declared("java.lang.String");
    assert_eq!(template.pattern(), "%s");
    assert_eq!(template.args(), &[type_of("java.lang.String")]);
    assert_eq!(template.raw_type().unwrap(), &type_of("java.lang.String"));
}

#[test]
fn test_declared_generic() {
    let template = TypeTemplate::declared(
        type_of("java.util.Map"),
        &[declared("java.lang.String"), declared("java.lang.Integer")],
    );
    assert_eq!(template.pattern(), "%s<%s, %s>");
    assert_eq!(
        template.args(),
        &[
            type_of("java.util.Map"),
            type_of("java.lang.String"),
            type_of("java.lang.Integer"),
        ]
    );
    assert_eq!(template.raw_type().unwrap(), &type_of("java.util.Map"));
    assert!(template.is_declared());
}

#[test]
fn test_declared_nested_arguments() {
    // Map<String, List<? extends Number>>
    let list = TypeTemplate::declared(
        type_of("java.util.List"),
        &[TypeTemplate::wildcard_extends(&declared("java.lang.Number"))],
    );
    let template = TypeTemplate::declared(
        type_of("java.util.Map"),
        &[declared("java.lang.String"), list],
    );
    assert_eq!(template.pattern(), "%s<%s, %s<? extends %s>>");
    assert_eq!(template.args().len(), 4);
    assert_eq!(
        template.to_string(),
        "java.util.Map<java.lang.String, java.util.List<? extends java.lang.Number>>"
    );
}

#[test]
fn test_add_type_arguments_to_outer_types() {
    let raw_inner2 = type_of("test.Outer$Inner$Inner2");
    let raw_inner = type_of("test.Outer$Inner");
    let raw_outer = type_of("test.Outer");
    let type_arg = declared("java.lang.Integer");
    let type_args = std::slice::from_ref(&type_arg);

    let template = TypeTemplate::declared(raw_inner2, type_args)
        .add_type_arguments_to_outer_type(&raw_inner, type_args)
        .and_then(|template| template.add_type_arguments_to_outer_type(&raw_outer, type_args))
        .unwrap();
    assert_eq!(template.pattern(), "%s<%s>.Inner<%s>.Inner2<%s>");
    assert_eq!(
        template.args(),
        &[
            raw_outer.clone(),
            type_of("java.lang.Integer"),
            type_of("java.lang.Integer"),
            type_of("java.lang.Integer"),
        ]
    );
    assert_eq!(template.raw_type().unwrap(), &raw_outer);
}

#[test]
fn test_add_type_arguments_fold_skips_non_generic_levels() {
    let raw_inner2 = type_of("test.Outer$Inner$Inner2");
    let raw_inner = type_of("test.Outer$Inner");
    let raw_outer = type_of("test.Outer");
    let string = [declared("java.lang.String")];

    let template = TypeTemplate::declared(raw_inner2, &[])
        .add_type_arguments_to_outer_types([
            (&raw_inner, &[][..]),
            (&raw_outer, &string[..]),
        ])
        .unwrap();
    assert_eq!(template.pattern(), "%s<%s>.Inner.Inner2");
    assert_eq!(template.args(), &[raw_outer, type_of("java.lang.String")]);
}

#[test]
fn test_add_generic_type_arguments_to_outer_type() {
    // Outer<Map<String, T>, ?>.Inner<Long>[]
    let raw_outer = type_of("test.Outer");
    let map = TypeTemplate::declared(
        type_of("java.util.Map"),
        &[declared("java.lang.String"), TypeTemplate::type_variable("T")],
    );
    let inner = TypeTemplate::declared(type_of("test.Outer$Inner"), &[declared("java.lang.Long")]);

    let template = inner
        .add_type_arguments_to_outer_type(&raw_outer, &[map, TypeTemplate::wildcard()])
        .unwrap();
    assert_eq!(template.pattern(), "%s<%s<%s, T>, ?>.Inner<%s>");
    assert_eq!(
        template.args(),
        &[
            raw_outer.clone(),
            type_of("java.util.Map"),
            type_of("java.lang.String"),
            type_of("java.lang.Long"),
        ]
    );
    assert!(template.is_declared());
    assert_eq!(
        TypeTemplate::array(&template).to_string(),
        "test.Outer<java.util.Map<java.lang.String, T>, ?>.Inner<java.lang.Long>[]"
    );
}

#[test]
fn test_add_type_arguments_to_non_outer_type() {
    let template = declared("java.util.Map");
    let err = template
        .add_type_arguments_to_outer_type(&type_of("java.util.List"), &[declared("java.lang.String")])
        .unwrap_err();
    assert_eq!(err.kind(), TypeErrorKind::InvalidArgument);
}

#[test]
fn test_type_parameter_no_bounds() {
    let template = TypeTemplate::type_parameter("T", &[]);
    assert_eq!(template.pattern(), "T");
    assert!(template.args().is_empty());
}

#[test]
fn test_type_parameter_bounds() {
    let template = TypeTemplate::type_parameter(
        "T",
        &[
            declared("java.lang.Runnable"),
            TypeTemplate::declared(type_of("java.lang.Comparable"), &[TypeTemplate::type_variable("T")]),
        ],
    );
    assert_eq!(template.pattern(), "T extends %s & %s<T>");
    assert_eq!(
        template.args(),
        &[type_of("java.lang.Runnable"), type_of("java.lang.Comparable")]
    );
    assert_eq!(template.kind(), TemplateKind::TypeParameter);
}

#[test]
fn test_type_variable_and_wildcards() {
    assert_eq!(TypeTemplate::type_variable("T").pattern(), "T");
    assert_eq!(TypeTemplate::wildcard().pattern(), "?");

    let runnable = declared("java.lang.Runnable");
    let extends = TypeTemplate::wildcard_extends(&runnable);
    assert_eq!(extends.pattern(), "? extends %s");
    assert_eq!(extends.args(), &[type_of("java.lang.Runnable")]);

    let super_ = TypeTemplate::wildcard_super(&runnable);
    assert_eq!(super_.pattern(), "? super %s");
    assert_eq!(super_.args(), &[type_of("java.lang.Runnable")]);
}

#[test]
fn test_top_level_declaration() {
    let template = TypeTemplate::declared(
        type_of("java.util.Map"),
        &[declared("java.lang.String"), declared("java.lang.Integer")],
    );
    let declaration = template.top_level_declaration().unwrap();
    assert_eq!(declaration.pattern(), "Map<%s, %s>");
    assert_eq!(
        declaration.args(),
        &[type_of("java.lang.String"), type_of("java.lang.Integer")]
    );
    assert_eq!(declaration.kind(), TemplateKind::Declaration);
}

#[test]
fn test_non_declared_operations_fail() {
    for template in [
        TypeTemplate::primitive("int"),
        TypeTemplate::array(&declared("java.lang.String")),
        TypeTemplate::wildcard(),
        TypeTemplate::error(),
    ] {
        let err = template.raw_type().unwrap_err();
        assert_eq!(err.kind(), TypeErrorKind::InvalidState, "{}", template.pattern());
        assert!(template.top_level_declaration().is_err());
    }
}

#[test]
fn test_join_and_concat() {
    let joined = TypeTemplate::join(
        &[declared("java.lang.String"), declared("java.lang.Integer")],
        ", ",
        "<",
        ">",
    );
    assert_eq!(joined.pattern(), "<%s, %s>");
    assert_eq!(joined.args().len(), 2);

    let concatenated = TypeTemplate::concat(&TypeTemplate::new("Map", Vec::new()), &joined);
    assert_eq!(concatenated.pattern(), "Map<%s, %s>");

    let empty = TypeTemplate::join(&[] as &[TypeTemplate], ", ", "<", ">");
    assert_eq!(empty.pattern(), "<>");
    assert!(empty.args().is_empty());

    assert_eq!(TypeTemplate::with_suffix(&declared("java.lang.String"), "[]").pattern(), "%s[]");
    assert_eq!(
        TypeTemplate::with_prefix("? extends ", &declared("java.lang.Runnable")).pattern(),
        "? extends %s"
    );
}

#[test]
fn test_render_with_namer() {
    let template = TypeTemplate::new(
        "%s.Entry<%s, %s>",
        vec![
            type_of("java.util.Map"),
            type_of("java.lang.String"),
            type_of("java.lang.String"),
        ],
    );
    assert_eq!(
        template.render(&StringOnlyNamer),
        "java.util.Map.Entry<String, String>"
    );
    assert_eq!(
        template.render(&QualifiedNamer),
        "java.util.Map.Entry<java.lang.String, java.lang.String>"
    );
}

#[test]
fn test_declaration_renders_simple_name() {
    let template = TypeTemplate::declared(
        type_of("java.util.Map"),
        &[declared("java.lang.String"), declared("java.lang.String")],
    );
    let declaration = template.top_level_declaration().unwrap();
    assert_eq!(declaration.render(&StringOnlyNamer), "Map<String, String>");
}

#[test]
fn test_equality_ignores_kind() {
    let declared = declared("java.lang.String");
    let composite = TypeTemplate::new("%s", vec![type_of("java.lang.String")]);
    assert_eq!(declared, composite);
    assert!(composite.raw_type().is_err());

    let set: HashSet<_> = [declared, composite].into_iter().collect();
    assert_eq!(set.len(), 1);
}

#[test]
fn test_serialize_and_deserialize() {
    let template = TypeTemplate::declared(
        type_of("java.util.Map$Entry"),
        &[declared("java.lang.String"), TypeTemplate::type_variable("T")],
    );
    let json = serde_json::to_value(&template).unwrap();
    assert_eq!(json["pattern"], "%s<%s, T>");
    assert_eq!(json["args"][0], "java.util.Map$Entry");
    assert_eq!(json["kind"], "declared");

    let decoded: TypeTemplate = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, template);
    assert!(decoded.is_declared());
}
