use super::{partition, synthesize, SynthError, SynthOptions};
use crate::descriptor::{FunctionDescriptor, ParameterDescriptor};
use std::path::Path;

fn lookup_descriptor() -> FunctionDescriptor {
    FunctionDescriptor::new("/srv/app/users/handlers.py", "lookup")
        .param(ParameterDescriptor::new("id").typed("int"))
        .param(ParameterDescriptor::new("verbose").typed("bool").with_default())
        .param(ParameterDescriptor::new("_raw").with_default())
}

#[test]
fn test_worked_example() {
    let templates = synthesize(
        &lookup_descriptor(),
        Some(Path::new("/srv/app")),
        &SynthOptions::default(),
    )
    .unwrap();

    let paths: Vec<String> = templates.iter().map(|t| t.as_path()).collect();
    assert_eq!(
        paths,
        vec![
            "/users/handlers/lookup/<int:id>",
            "/users/handlers/lookup/<int:id>/<verbose>",
        ]
    );
}

#[test]
fn test_zero_parameter_function() {
    let desc = FunctionDescriptor::new("/srv/app/health/probe.rs", "ping");
    let templates = synthesize(&desc, Some(Path::new("/srv/app")), &SynthOptions::default())
        .unwrap();
    assert_eq!(templates.len(), 1);
    assert_eq!(templates[0].as_path(), "/health/probe/ping");
}

#[test]
fn test_explicit_name_overrides_declared() {
    let desc = FunctionDescriptor::new("/srv/app/items.rs", "get_item");
    let opts = SynthOptions {
        explicit_name: Some("item".to_string()),
        ..Default::default()
    };
    let templates = synthesize(&desc, Some(Path::new("/srv/app")), &opts).unwrap();
    assert_eq!(templates[0].as_path(), "/items/item");
}

#[test]
fn test_fallback_prefix_substitutes() {
    let desc = FunctionDescriptor::new("/elsewhere/handlers.py", "lookup");
    let opts = SynthOptions {
        fallback_prefix: Some("/api/".to_string()),
        ..Default::default()
    };
    let templates = synthesize(&desc, Some(Path::new("/srv/app")), &opts).unwrap();
    assert_eq!(templates[0].as_path(), "/api/lookup");
}

#[test]
fn test_no_root_no_fallback_fails() {
    let desc = FunctionDescriptor::new("/elsewhere/handlers.py", "lookup");
    let err = synthesize(&desc, None, &SynthOptions::default()).unwrap_err();
    match err {
        SynthError::SourceNotUnderRoot { function, root, .. } => {
            assert_eq!(function, "lookup");
            assert!(root.is_none());
        }
        other => panic!("expected SourceNotUnderRoot, got {other:?}"),
    }
}

#[test]
fn test_unknown_type_tag_names_parameter() {
    let desc = FunctionDescriptor::new("/srv/app/a.rs", "f")
        .param(ParameterDescriptor::new("blob").typed("uuid"));
    let err = synthesize(&desc, Some(Path::new("/srv/app")), &SynthOptions::default())
        .unwrap_err();
    assert_eq!(
        err,
        SynthError::UnrecognizedParameterType {
            parameter: "blob".to_string(),
            type_tag: "uuid".to_string(),
        }
    );
}

#[test]
fn test_partition_counts() {
    let parts = partition(&lookup_descriptor()).unwrap();
    assert_eq!(parts.required.len(), 1);
    assert_eq!(parts.optional.len(), 1);
    assert_eq!(parts.hidden, vec!["_raw"]);
}
