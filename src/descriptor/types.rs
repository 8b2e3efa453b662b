use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Parameters whose name starts with this prefix are excluded from URL
/// construction. They stay in the descriptor for the caller's own use
/// (typically request-body or form binding).
pub const HIDDEN_PREFIX: &str = "_";

/// How a declared type tag renders inside a path placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConverterToken {
    /// Known converter: placeholder renders as `<token:name>`.
    Converter(&'static str),
    /// Recognized tag with no converter: placeholder renders as `<name>`.
    Untyped,
}

/// Immutable lookup from declared type tags to URL converter tokens.
///
/// Accepts both the canonical tag names and the spellings a signature
/// reflector is likely to emit (`str`, `PathBuf`, ...). `bool` is recognized
/// but has no converter, so it renders as a plain `<name>` segment.
static CONVERTER_TOKENS: Lazy<HashMap<&'static str, ConverterToken>> = Lazy::new(|| {
    use ConverterToken::*;
    HashMap::from([
        ("int", Converter("int")),
        ("float", Converter("float")),
        ("str", Converter("string")),
        ("string", Converter("string")),
        ("path", Converter("path")),
        ("Path", Converter("path")),
        ("PathBuf", Converter("path")),
        ("PosixPath", Converter("path")),
        ("bool", Untyped),
    ])
});

/// Look up the converter token for a declared type tag.
///
/// Returns `None` for tags with no entry, which callers must surface as a
/// usage error naming the offending parameter.
#[must_use]
pub fn converter_token(tag: &str) -> Option<ConverterToken> {
    CONVERTER_TOKENS.get(tag).copied()
}

/// A function-like value as seen by the synthesizer.
///
/// Produced by whatever reflection facility the caller has (a derive macro,
/// a codegen step, a sidecar descriptor file); the synthesizer only consumes
/// it. Parameter order is declaration order and is significant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionDescriptor {
    /// Filesystem path of the file the function is declared in.
    pub source: PathBuf,
    /// Declared function name.
    pub name: String,
    /// Ordered parameter list, declaration order preserved.
    #[serde(default)]
    pub params: Vec<ParameterDescriptor>,
}

/// A single parameter of a [`FunctionDescriptor`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterDescriptor {
    /// Parameter name, unique within its descriptor.
    pub name: String,
    /// Declared type tag, if the signature carried one.
    #[serde(default)]
    pub type_tag: Option<String>,
    /// Whether the parameter declares a default value. A default of
    /// null/`None` still counts.
    #[serde(default)]
    pub has_default: bool,
}

impl ParameterDescriptor {
    /// A required, untyped parameter. Builders below add a type tag or a
    /// default.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_tag: None,
            has_default: false,
        }
    }

    /// Attach a declared type tag.
    #[must_use]
    pub fn typed(mut self, tag: impl Into<String>) -> Self {
        self.type_tag = Some(tag.into());
        self
    }

    /// Mark the parameter as carrying a default value.
    #[must_use]
    pub fn with_default(mut self) -> Self {
        self.has_default = true;
        self
    }

    /// Whether the parameter is excluded from URL construction.
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.name.starts_with(HIDDEN_PREFIX)
    }
}

impl FunctionDescriptor {
    #[must_use]
    pub fn new(source: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            name: name.into(),
            params: Vec::new(),
        }
    }

    /// Append a parameter, preserving declaration order.
    #[must_use]
    pub fn param(mut self, param: ParameterDescriptor) -> Self {
        self.params.push(param);
        self
    }
}
