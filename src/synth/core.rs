//! Endpoint URL synthesis.
//!
//! Maps a function's signature plus its source location to an ordered
//! sequence of [`EndpointTemplate`]s a router can register. Synthesis is a
//! pure computation over in-memory descriptors: no I/O, no router
//! interaction, no shared mutable state beyond the read-only type-tag map.

use crate::descriptor::{converter_token, ConverterToken, FunctionDescriptor, ParameterDescriptor};
use crate::template::EndpointTemplate;
use std::path::{Component, Path};
use tracing::{debug, warn};

use super::error::SynthError;

/// Per-call knobs for [`synthesize`].
#[derive(Debug, Clone, Default)]
pub struct SynthOptions {
    /// Override for the URL's trailing name segment. Defaults to the
    /// descriptor's declared name.
    pub explicit_name: Option<String>,
    /// Literal path prefix substituted for the relative-path computation
    /// when the source file is not reachable under the root context.
    pub fallback_prefix: Option<String>,
}

/// A parameter rendered into its path segment form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedParam {
    /// Parameter name
    pub name: String,
    /// Path segment, e.g. `<int:id>` or `<verbose>`
    pub segment: String,
}

/// Result of partitioning a descriptor's parameters in declaration order.
///
/// `required` and `optional` carry rendered path segments; hidden parameters
/// never render but are still counted against the invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamPartition {
    /// Parameters with no default: one mandatory path segment each
    pub required: Vec<RenderedParam>,
    /// Parameters with a default: cumulative forking segments
    pub optional: Vec<RenderedParam>,
    /// Names of hidden (prefix-marked) parameters, excluded from URLs
    pub hidden: Vec<String>,
}

/// Partition a descriptor's parameters into required / optional / hidden,
/// preserving declaration order, and render the URL-visible ones.
///
/// A default of null still counts as a default: only the has-default flag
/// matters. The three groups must account for every declared parameter;
/// a mismatch is a [`SynthError::PartitionInvariant`] logic fault.
pub fn partition(descriptor: &FunctionDescriptor) -> Result<ParamPartition, SynthError> {
    let mut required = Vec::new();
    let mut optional = Vec::new();
    let mut hidden = Vec::new();

    for param in &descriptor.params {
        if param.is_hidden() {
            hidden.push(param.name.clone());
            continue;
        }
        let rendered = RenderedParam {
            name: param.name.clone(),
            segment: render_segment(param)?,
        };
        if param.has_default {
            optional.push(rendered);
        } else {
            required.push(rendered);
        }
    }

    let partitioned = required.len() + optional.len() + hidden.len();
    if partitioned != descriptor.params.len() {
        return Err(SynthError::PartitionInvariant {
            function: descriptor.name.clone(),
            partitioned,
            total: descriptor.params.len(),
        });
    }

    Ok(ParamPartition {
        required,
        optional,
        hidden,
    })
}

/// Synthesize the ordered endpoint templates for one function.
///
/// Produces exactly `1 + optional.len()` templates: the minimal endpoint
/// (required parameters only), then one per optional parameter, each
/// appending the cumulative prefix of optional segments up to and including
/// its own. Forking is purely additive, never combinatorial.
///
/// `root` may be `None` only when `options.fallback_prefix` is set.
///
/// # Errors
///
/// * [`SynthError::SourceNotUnderRoot`] - source file outside `root` with no
///   fallback prefix
/// * [`SynthError::UnrecognizedParameterType`] - declared tag with no
///   type-map entry
/// * [`SynthError::PartitionInvariant`] - internal partition fault
pub fn synthesize(
    descriptor: &FunctionDescriptor,
    root: Option<&Path>,
    options: &SynthOptions,
) -> Result<Vec<EndpointTemplate>, SynthError> {
    debug!(
        function = %descriptor.name,
        source = %descriptor.source.display(),
        params = descriptor.params.len(),
        "Synthesizing endpoint templates"
    );

    let rel_segments = relative_segments(descriptor, root, options)?;
    let parts = partition(descriptor)?;

    let name = options
        .explicit_name
        .as_deref()
        .unwrap_or(&descriptor.name);

    // base_url = "/" + rel-path + name, then the mandatory suffix
    let mut base = EndpointTemplate::from_segments(rel_segments);
    base.push(name.to_string());
    for param in &parts.required {
        base.push(param.segment.clone());
    }

    let mut templates = Vec::with_capacity(1 + parts.optional.len());
    templates.push(base.clone());

    // fork one template per optional parameter, in declaration order
    let mut current = base;
    for param in &parts.optional {
        current.push(param.segment.clone());
        templates.push(current.clone());
    }

    debug!(
        function = %descriptor.name,
        templates = templates.len(),
        minimal = %templates[0],
        "Endpoint templates synthesized"
    );

    Ok(templates)
}

/// Render one URL-visible parameter as its placeholder segment.
fn render_segment(param: &ParameterDescriptor) -> Result<String, SynthError> {
    match &param.type_tag {
        Some(tag) => match converter_token(tag) {
            Some(ConverterToken::Converter(token)) => Ok(format!("<{}:{}>", token, param.name)),
            Some(ConverterToken::Untyped) => Ok(format!("<{}>", param.name)),
            None => Err(SynthError::UnrecognizedParameterType {
                parameter: param.name.clone(),
                type_tag: tag.clone(),
            }),
        },
        None => Ok(format!("<{}>", param.name)),
    }
}

/// Compute the relative-path segments for the base URL.
///
/// Strips the source file's extension, then strips the root prefix. When the
/// source is not a descendant of the root (or no root was given), the
/// fallback prefix substitutes, trimmed of leading/trailing separators.
fn relative_segments(
    descriptor: &FunctionDescriptor,
    root: Option<&Path>,
    options: &SynthOptions,
) -> Result<Vec<String>, SynthError> {
    let stem = descriptor.source.with_extension("");

    if let Some(root) = root {
        if let Ok(rel) = stem.strip_prefix(root) {
            return Ok(rel
                .components()
                .filter_map(|c| match c {
                    Component::Normal(seg) => Some(seg.to_string_lossy().into_owned()),
                    _ => None,
                })
                .collect());
        }
    }

    if let Some(prefix) = &options.fallback_prefix {
        warn!(
            function = %descriptor.name,
            source = %descriptor.source.display(),
            fallback_prefix = %prefix,
            "Source not under root, substituting fallback prefix"
        );
        return Ok(prefix
            .trim_matches('/')
            .split('/')
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect());
    }

    Err(SynthError::SourceNotUnderRoot {
        function: descriptor.name.clone(),
        source: descriptor.source.clone(),
        root: root.map(Path::to_path_buf),
    })
}
