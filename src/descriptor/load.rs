use super::types::FunctionDescriptor;
use anyhow::Context;
use std::path::Path;

/// Load function descriptors from a YAML or JSON file.
///
/// The format is sniffed from the file extension: `.yaml`/`.yml` parse as
/// YAML, anything else as JSON. The file holds a flat list of descriptors.
pub fn load_descriptors(path: impl AsRef<Path>) -> anyhow::Result<Vec<FunctionDescriptor>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read descriptor file {}", path.display()))?;

    let is_yaml = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("yaml") || e.eq_ignore_ascii_case("yml"));

    let descriptors: Vec<FunctionDescriptor> = if is_yaml {
        serde_yaml::from_str(&content)
            .with_context(|| format!("invalid YAML descriptor file {}", path.display()))?
    } else {
        serde_json::from_str(&content)
            .with_context(|| format!("invalid JSON descriptor file {}", path.display()))?
    };

    tracing::debug!(
        path = %path.display(),
        count = descriptors.len(),
        "Descriptor file loaded"
    );

    Ok(descriptors)
}
