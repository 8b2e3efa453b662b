use autoroute::template::EndpointTemplate;

#[test]
fn test_display_matches_as_path() {
    let t = EndpointTemplate::from_segments(["users", "lookup", "<int:id>"]);
    assert_eq!(t.to_string(), "/users/lookup/<int:id>");
    assert_eq!(t.to_string(), t.as_path());
}

#[test]
fn test_int_converter_regex() {
    let t = EndpointTemplate::from_segments(["users", "<int:id>"]);
    let (re, names) = t.to_regex();
    assert_eq!(names, vec!["id"]);
    assert!(re.is_match("/users/123"));
    assert!(!re.is_match("/users/abc"));
    assert!(!re.is_match("/users/123/extra"));
}

#[test]
fn test_float_converter_regex() {
    let t = EndpointTemplate::from_segments(["metrics", "<float:value>"]);
    let (re, _) = t.to_regex();
    assert!(re.is_match("/metrics/3.25"));
    assert!(re.is_match("/metrics/-3.25"));
    assert!(re.is_match("/metrics/3"));
    assert!(!re.is_match("/metrics/x"));
    assert!(!re.is_match("/metrics/--3"));
}

#[test]
fn test_path_converter_spans_separators() {
    let t = EndpointTemplate::from_segments(["files", "<path:rel>"]);
    let (re, names) = t.to_regex();
    assert_eq!(names, vec!["rel"]);
    let caps = re.captures("/files/a/b/c.txt").unwrap();
    assert_eq!(&caps[1], "a/b/c.txt");
}

#[test]
fn test_untyped_placeholder_single_segment() {
    let t = EndpointTemplate::from_segments(["lookup", "<verbose>"]);
    let (re, names) = t.to_regex();
    assert_eq!(names, vec!["verbose"]);
    assert!(re.is_match("/lookup/true"));
    assert!(!re.is_match("/lookup/a/b"));
}

#[test]
fn test_capture_names_in_segment_order() {
    let t = EndpointTemplate::from_segments(["<int:a>", "mid", "<b>", "<path:c>"]);
    let (_, names) = t.to_regex();
    assert_eq!(names, vec!["a", "b", "c"]);
}

#[test]
fn test_normalization_rules() {
    let t = EndpointTemplate::from_segments(["User Files", "get_all", "<int:file_id>"]);
    assert_eq!(t.normalized().as_path(), "/userfiles/get-all/<int:file_id>");
}

#[test]
fn test_extends_is_prefix_only() {
    let base = EndpointTemplate::from_segments(["a", "b"]);
    let longer = EndpointTemplate::from_segments(["a", "b", "c"]);
    let other = EndpointTemplate::from_segments(["a", "x", "c"]);
    assert!(longer.extends(&base));
    assert!(base.extends(&base));
    assert!(!other.extends(&base));
    assert!(!base.extends(&longer));
}

#[test]
fn test_empty_template_regex_matches_root() {
    let t = EndpointTemplate::from_segments(Vec::<String>::new());
    let (re, names) = t.to_regex();
    assert!(names.is_empty());
    assert!(re.is_match("/"));
    assert!(!re.is_match("/x"));
}
