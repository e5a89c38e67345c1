//! Type Template Algebra
//!
//! A template pairs a pattern with the types referenced by it:
//!
//! ```text
//! Map<String, List<? extends Number>>
//!   pattern: "%s<%s, %s<? extends %s>>"
//!   args:    [java.util.Map, java.lang.String, java.util.List, java.lang.Number]
//! ```
//!
//! Invariant: the pattern contains exactly one `%s` per argument, and
//! placeholders are filled in order. All constructors are pure.
//!
//! Equality and hashing only consider the pattern and the arguments; the
//! `TemplateKind` records which constructor produced a template so that
//! operations restricted to declared types can check their precondition.

use immgen_common::{ImportableType, TypeError};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Placeholder for a referenced type inside a pattern.
pub const PLACEHOLDER: &str = "%s";

/// Pattern of the template substituted for unsupported types.
const ERROR_PATTERN: &str = "!";

/// Names referenced types while a template is rendered.
pub trait TypeNamer {
    fn name<'a>(&'a self, type_: &'a ImportableType) -> Cow<'a, str>;
}

/// Names every type by its fully qualified name.
#[derive(Clone, Copy, Debug, Default)]
pub struct QualifiedNamer;

impl TypeNamer for QualifiedNamer {
    fn name<'a>(&'a self, type_: &'a ImportableType) -> Cow<'a, str> {
        Cow::Borrowed(type_.qualified_name())
    }
}

/// The constructor that produced a template.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateKind {
    Primitive,
    Array,
    /// A declared type; the first argument is the raw type.
    Declared,
    TypeParameter,
    TypeVariable,
    Wildcard,
    /// A type declaration header (`Name<T extends %s>`).
    Declaration,
    Error,
    #[default]
    Composite,
}

/// Unrendered type expression.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TypeTemplate {
    pattern: String,
    args: Vec<ImportableType>,
    #[serde(default)]
    kind: TemplateKind,
}

impl TypeTemplate {
    /// Creates a template from a pattern and its arguments.
    pub fn new(pattern: impl Into<String>, args: Vec<ImportableType>) -> Self {
        Self::with_kind(pattern.into(), args, TemplateKind::Composite)
    }

    fn with_kind(pattern: String, args: Vec<ImportableType>, kind: TemplateKind) -> Self {
        debug_assert_eq!(
            pattern.matches(PLACEHOLDER).count(),
            args.len(),
            "placeholder count must match argument count in {pattern:?}"
        );
        Self {
            pattern,
            args,
            kind,
        }
    }

    // =========================================================================
    // Constructors
    // =========================================================================

    pub fn primitive(name: &str) -> Self {
        Self::with_kind(name.to_string(), Vec::new(), TemplateKind::Primitive)
    }

    pub fn array(component: &TypeTemplate) -> Self {
        let mut template = Self::with_suffix(component, "[]");
        template.kind = TemplateKind::Array;
        template
    }

    /// Creates a template for a declared type, possibly a generic type with type arguments.
    pub fn declared(raw_type: ImportableType, type_args: &[TypeTemplate]) -> Self {
        let raw = Self::with_kind(PLACEHOLDER.to_string(), vec![raw_type], TemplateKind::Declared);
        if type_args.is_empty() {
            return raw;
        }

        let arguments = Self::join(type_args, ", ", "<", ">");
        let mut template = Self::concat(&raw, &arguments);
        template.kind = TemplateKind::Declared;
        template
    }

    /// Creates a template for a type parameter, which may be bounded by one or more types.
    pub fn type_parameter(name: &str, bounds: &[TypeTemplate]) -> Self {
        let mut template = if bounds.is_empty() {
            Self::with_kind(name.to_string(), Vec::new(), TemplateKind::Composite)
        } else {
            Self::join(bounds, " & ", &format!("{name} extends "), "")
        };
        template.kind = TemplateKind::TypeParameter;
        template
    }

    pub fn type_variable(name: &str) -> Self {
        Self::with_kind(name.to_string(), Vec::new(), TemplateKind::TypeVariable)
    }

    /// `?`
    pub fn wildcard() -> Self {
        Self::with_kind("?".to_string(), Vec::new(), TemplateKind::Wildcard)
    }

    /// `? extends bound`
    pub fn wildcard_extends(bound: &TypeTemplate) -> Self {
        let mut template = Self::with_prefix("? extends ", bound);
        template.kind = TemplateKind::Wildcard;
        template
    }

    /// `? super bound`
    pub fn wildcard_super(bound: &TypeTemplate) -> Self {
        let mut template = Self::with_prefix("? super ", bound);
        template.kind = TemplateKind::Wildcard;
        template
    }

    /// The marker substituted for a type that could not be modeled.
    pub fn error() -> Self {
        Self::with_kind(ERROR_PATTERN.to_string(), Vec::new(), TemplateKind::Error)
    }

    // =========================================================================
    // Composition
    // =========================================================================

    /// Concatenates two templates into a single template.
    pub fn concat(first: &TypeTemplate, second: &TypeTemplate) -> Self {
        Self::join([first, second], "", "", "")
    }

    pub fn with_prefix(prefix: &str, template: &TypeTemplate) -> Self {
        let pattern = format!("{prefix}{}", template.pattern);
        Self::with_kind(pattern, template.args.clone(), TemplateKind::Composite)
    }

    pub fn with_suffix(template: &TypeTemplate, suffix: &str) -> Self {
        let pattern = format!("{}{suffix}", template.pattern);
        Self::with_kind(pattern, template.args.clone(), TemplateKind::Composite)
    }

    /// Joins templates into a single template; arguments are concatenated in order.
    pub fn join<'t>(
        templates: impl IntoIterator<Item = &'t TypeTemplate>,
        delimiter: &str,
        prefix: &str,
        suffix: &str,
    ) -> Self {
        let mut pattern = String::from(prefix);
        let mut args = Vec::new();
        for (index, template) in templates.into_iter().enumerate() {
            if index > 0 {
                pattern.push_str(delimiter);
            }
            pattern.push_str(&template.pattern);
            args.extend(template.args.iter().cloned());
        }
        pattern.push_str(suffix);
        Self::with_kind(pattern, args, TemplateKind::Composite)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Gets the referenced types, in placeholder order.
    pub fn args(&self) -> &[ImportableType] {
        &self.args
    }

    pub fn kind(&self) -> TemplateKind {
        self.kind
    }

    pub fn is_declared(&self) -> bool {
        self.kind == TemplateKind::Declared
    }

    pub fn is_error(&self) -> bool {
        self.kind == TemplateKind::Error
    }

    /// Gets the raw type of a declared type.
    pub fn raw_type(&self) -> Result<&ImportableType, TypeError> {
        match self.args.first() {
            Some(raw_type) if self.is_declared() => Ok(raw_type),
            _ => Err(self.not_declared()),
        }
    }

    // =========================================================================
    // Declared-type operations
    // =========================================================================

    /// Gets a template for a declared type that can be used for the type's declaration.
    ///
    /// `%s<%s, %s>` with args `[Map, String, Integer]` becomes `Map<%s, %s>` with `[String, Integer]`.
    pub fn top_level_declaration(&self) -> Result<TypeTemplate, TypeError> {
        let raw_type = self.raw_type()?;
        let pattern = format!("{}{}", raw_type.simple_name(), self.rest_of_pattern());
        let args = self.args[1..].to_vec();
        Ok(Self::with_kind(pattern, args, TemplateKind::Declaration))
    }

    /// Adds type arguments to an enclosing type that is generic.
    ///
    /// If multiple enclosing types are generic, type arguments must be added to
    /// the innermost type first, since each application re-roots the raw type.
    /// An empty argument list leaves the template unchanged.
    pub fn add_type_arguments_to_outer_type(
        &self,
        raw_outer_type: &ImportableType,
        outer_type_args: &[TypeTemplate],
    ) -> Result<TypeTemplate, TypeError> {
        let raw_type = self.raw_type()?;
        let qualified_suffix = raw_type.qualified_suffix(raw_outer_type)?;
        if outer_type_args.is_empty() {
            return Ok(self.clone());
        }

        let outer_patterns: Vec<&str> = outer_type_args.iter().map(TypeTemplate::pattern).collect();
        let pattern = format!(
            "{PLACEHOLDER}<{}>{qualified_suffix}{}",
            outer_patterns.join(", "),
            self.rest_of_pattern()
        );

        let mut args = vec![raw_outer_type.clone()];
        args.extend(outer_type_args.iter().flat_map(|arg| arg.args.iter().cloned()));
        args.extend(self.args[1..].iter().cloned());
        Ok(Self::with_kind(pattern, args, TemplateKind::Declared))
    }

    /// Adds type arguments to every generic enclosing type.
    ///
    /// `enclosing` lists `(raw outer type, type arguments)` pairs innermost first;
    /// levels without type arguments are skipped.
    pub fn add_type_arguments_to_outer_types<'t>(
        &self,
        enclosing: impl IntoIterator<Item = (&'t ImportableType, &'t [TypeTemplate])>,
    ) -> Result<TypeTemplate, TypeError> {
        enclosing
            .into_iter()
            .try_fold(self.clone(), |template, (raw_outer_type, outer_type_args)| {
                template.add_type_arguments_to_outer_type(raw_outer_type, outer_type_args)
            })
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Renders the template, naming each referenced type with the namer.
    pub fn render<N: TypeNamer + ?Sized>(&self, namer: &N) -> String {
        let mut rendered = String::with_capacity(self.pattern.len() + 16 * self.args.len());
        let mut pieces = self.pattern.split(PLACEHOLDER);
        if let Some(first) = pieces.next() {
            rendered.push_str(first);
        }
        for (piece, arg) in pieces.zip(&self.args) {
            rendered.push_str(&namer.name(arg));
            rendered.push_str(piece);
        }
        rendered
    }

    /// Gets the pattern after the leading raw-type placeholder.
    fn rest_of_pattern(&self) -> &str {
        self.pattern
            .strip_prefix(PLACEHOLDER)
            .unwrap_or(self.pattern.as_str())
    }

    fn not_declared(&self) -> TypeError {
        TypeError::NotADeclaredType {
            pattern: self.pattern.clone(),
        }
    }
}

impl PartialEq for TypeTemplate {
    fn eq(&self, other: &Self) -> bool {
        self.pattern == other.pattern && self.args == other.args
    }
}

impl Eq for TypeTemplate {}

impl Hash for TypeTemplate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.pattern.hash(state);
        self.args.hash(state);
    }
}

impl fmt::Display for TypeTemplate {
    /// Renders with fully qualified names.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&QualifiedNamer))
    }
}

#[cfg(test)]
#[path = "../tests/template_tests.rs"]
mod tests;
