//! Well-known Java types.

use once_cell::sync::Lazy;

use crate::names::ImportableType;

/// Package whose types are implicitly imported by every compilation unit.
pub const JAVA_LANG_PACKAGE: &str = "java.lang";

pub static JAVA_LANG_OBJECT: Lazy<ImportableType> =
    Lazy::new(|| ImportableType::derive("java.lang.Object".to_string()));

pub static JAVA_LANG_OVERRIDE: Lazy<ImportableType> =
    Lazy::new(|| ImportableType::derive("java.lang.Override".to_string()));

/// Default annotation placed on generated classes.
pub static GENERATED: Lazy<ImportableType> =
    Lazy::new(|| ImportableType::derive("javax.annotation.processing.Generated".to_string()));
