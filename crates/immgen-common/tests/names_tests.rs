use super::*;
use crate::errors::TypeErrorKind;
use crate::well_known::JAVA_LANG_OBJECT;

fn type_of(binary_name: &str) -> ImportableType {
    ImportableType::new(binary_name).expect("valid binary name")
}

#[test]
fn test_names_top_level_type() {
    let type_ = type_of("java.util.Map");
    assert_eq!(type_.qualified_name(), "java.util.Map");
    assert_eq!(type_.simple_name(), "Map");
    assert_eq!(type_.package_name(), "java.util");
    assert_eq!(type_.class_name(), "Map");
    assert!(type_.is_top_level_type());
}

#[test]
fn test_names_nested_type() {
    let type_ = type_of("java.util.Map$Entry");
    assert_eq!(type_.qualified_name(), "java.util.Map.Entry");
    assert_eq!(type_.simple_name(), "Entry");
    assert_eq!(type_.package_name(), "java.util");
    assert_eq!(type_.class_name(), "Map.Entry");
    assert!(!type_.is_top_level_type());
    assert_eq!(
        type_.name_segments().collect::<Vec<_>>(),
        vec!["java", "util", "Map", "Entry"]
    );
}

#[test]
fn test_names_type_without_package() {
    let type_ = type_of("TypeWithoutPackage$Nested");
    assert_eq!(type_.qualified_name(), "TypeWithoutPackage.Nested");
    assert_eq!(type_.simple_name(), "Nested");
    assert_eq!(type_.package_name(), "");
    assert_eq!(type_.class_name(), "TypeWithoutPackage.Nested");
}

#[test]
fn test_top_level_and_enclosing_type() {
    let type_ = type_of("java.util.Map$Entry");
    assert_eq!(type_.top_level_type(), type_of("java.util.Map"));

    let enclosing = type_.enclosing_type().expect("nested type has an enclosing type");
    assert_eq!(enclosing, type_of("java.util.Map"));
    assert!(enclosing.is_top_level_type());
    assert_eq!(enclosing.top_level_type(), enclosing);
    assert!(enclosing.enclosing_type().is_none());
}

#[test]
fn test_enclosing_types_innermost_first() {
    let type_ = type_of("test.Outer$Inner$Inner2");
    assert_eq!(
        type_.enclosing_types(),
        vec![type_of("test.Outer$Inner"), type_of("test.Outer")]
    );
    assert!(type_of("test.Outer").enclosing_types().is_empty());
}

#[test]
fn test_qualified_suffix() {
    let type_ = type_of("test.Outer$Inner$Inner2");
    assert_eq!(type_.qualified_suffix(&type_of("test.Outer")).unwrap(), ".Inner.Inner2");
    assert_eq!(type_.qualified_suffix(&type_of("test.Outer$Inner")).unwrap(), ".Inner2");
}

#[test]
fn test_qualified_suffix_not_outer_type() {
    let type_ = type_of("java.util.Map");
    let err = type_.qualified_suffix(&JAVA_LANG_OBJECT).unwrap_err();
    assert_eq!(err.kind(), TypeErrorKind::InvalidArgument);
    assert_eq!(
        err.to_string(),
        "java.lang.Object is not an outer type of java.util.Map"
    );
}

#[test]
fn test_qualified_suffix_same_type() {
    let type_ = type_of("java.util.Map");
    let err = type_.qualified_suffix(&type_).unwrap_err();
    assert_eq!(err.to_string(), "java.util.Map is not an outer type of java.util.Map");
}

#[test]
fn test_qualified_suffix_sibling_with_common_prefix() {
    // `test.OuterX` starts with `test.Outer` but is not nested in it.
    let type_ = type_of("test.OuterX$Inner");
    assert!(type_.qualified_suffix(&type_of("test.Outer")).is_err());
}

#[test]
fn test_invalid_binary_names() {
    for name in ["", "java..Map", "Map$", ".Map"] {
        let err = ImportableType::new(name).unwrap_err();
        assert_eq!(err.kind(), TypeErrorKind::InvalidArgument, "{name}");
    }
}

#[test]
fn test_ordered_by_qualified_name() {
    let string = type_of("java.lang.String");
    let map = type_of("java.util.Map");
    let entry = type_of("java.util.Map$Entry");
    assert!(string < map);
    assert!(map < entry);

    let mut types = vec![entry.clone(), map.clone(), string.clone()];
    types.sort();
    assert_eq!(types, vec![string, map, entry]);
}

#[test]
fn test_serializes_as_binary_name() {
    let type_ = type_of("java.util.Map$Entry");
    let json = serde_json::to_string(&type_).unwrap();
    assert_eq!(json, "\"java.util.Map$Entry\"");

    let decoded: ImportableType = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, type_);
    assert_eq!(decoded.simple_name(), "Entry");

    assert!(serde_json::from_str::<ImportableType>("\"\"").is_err());
}

#[test]
fn test_top_level_type_names() {
    let type_ = TopLevelType::new("test", "Rectangle");
    assert_eq!(type_.qualified_name(), "test.Rectangle");
    assert_eq!(type_.to_string(), "test.Rectangle");
    assert_eq!(type_.to_importable_type().unwrap(), type_of("test.Rectangle"));

    let unnamed = TopLevelType::new("", "Rectangle");
    assert_eq!(unnamed.package_name(), "");
    assert_eq!(unnamed.qualified_name(), "Rectangle");
}
