//! Endpoint template value type.
//!
//! An [`EndpointTemplate`] is an ordered sequence of URL path segments with
//! typed placeholder segments (`<int:id>`), suitable for registration with a
//! router. Templates are immutable once produced by the synthesizer; their
//! identity is their string form.

use regex::Regex;
use std::fmt;

/// An ordered sequence of URL path segments.
///
/// Placeholder segments look like `<name>` or `<token:name>` where `token`
/// is a URL converter token (`int`, `float`, `string`, `path`). Everything
/// else is a literal segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EndpointTemplate {
    segments: Vec<String>,
}

impl EndpointTemplate {
    /// Build a template from path segments. Empty segments are skipped.
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments
                .into_iter()
                .map(Into::into)
                .filter(|s| !s.is_empty())
                .collect(),
        }
    }

    pub(crate) fn push(&mut self, segment: String) {
        if !segment.is_empty() {
            self.segments.push(segment);
        }
    }

    /// The path segments, in order.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Render the template as a rooted path, e.g. `/users/lookup/<int:id>`.
    /// An empty template renders as `/`.
    #[must_use]
    pub fn as_path(&self) -> String {
        if self.segments.is_empty() {
            "/".to_string()
        } else {
            format!("/{}", self.segments.join("/"))
        }
    }

    /// Whether `self` extends `other` by appending segments (strictly or not).
    #[must_use]
    pub fn extends(&self, other: &EndpointTemplate) -> bool {
        self.segments.len() >= other.segments.len()
            && self.segments[..other.segments.len()] == other.segments[..]
    }

    /// Apply registration-time URL hygiene to literal segments: spaces are
    /// dropped, underscores become hyphens, letters are lowercased.
    ///
    /// Placeholder segments are left untouched; their names must stay
    /// bind-able against the function's parameter names.
    #[must_use]
    pub fn normalized(&self) -> EndpointTemplate {
        let segments = self
            .segments
            .iter()
            .map(|seg| {
                if is_placeholder(seg) {
                    seg.clone()
                } else {
                    seg.replace(' ', "").replace('_', "-").to_lowercase()
                }
            })
            .collect();
        EndpointTemplate { segments }
    }

    /// Compile the template into a regex a matching router can use, plus the
    /// placeholder names in order.
    ///
    /// Converter tokens constrain the match: `int` accepts digits only,
    /// `float` a signed decimal number, `path` spans separator characters,
    /// and `string` (or an untyped placeholder) matches a single segment.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn to_regex(&self) -> (Regex, Vec<String>) {
        let mut pattern = String::with_capacity(self.as_path().len() + 8);
        pattern.push('^');
        let mut param_names = Vec::new();

        if self.segments.is_empty() {
            pattern.push('/');
        }
        for segment in &self.segments {
            pattern.push('/');
            match parse_placeholder(segment) {
                Some((token, name)) => {
                    pattern.push('(');
                    pattern.push_str(match token {
                        Some("int") => "[0-9]+",
                        Some("float") => "-?[0-9]+(?:\\.[0-9]+)?",
                        Some("path") => ".+",
                        _ => "[^/]+",
                    });
                    pattern.push(')');
                    param_names.push(name.to_string());
                }
                None => pattern.push_str(&regex::escape(segment)),
            }
        }
        pattern.push('$');

        let regex = Regex::new(&pattern).expect("Failed to compile template regex");
        (regex, param_names)
    }
}

impl fmt::Display for EndpointTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_path())
    }
}

fn is_placeholder(segment: &str) -> bool {
    segment.starts_with('<') && segment.ends_with('>') && segment.len() > 2
}

/// Split a placeholder segment into `(converter_token, name)`.
/// Returns `None` for literal segments.
fn parse_placeholder(segment: &str) -> Option<(Option<&str>, &str)> {
    if !is_placeholder(segment) {
        return None;
    }
    let inner = &segment[1..segment.len() - 1];
    match inner.split_once(':') {
        Some((token, name)) => Some((Some(token), name)),
        None => Some((None, inner)),
    }
}
