use std::collections::BTreeMap;

use similar_asserts::assert_eq;
use stencil::{ErrorKind, TemplateFile};

#[test]
fn test_default_library_assembles() {
    let library = stencil_funcs::default_library().unwrap();
    assert_eq!(library.groups().len(), 13);
    assert!(library.has_filter("sha256sum"));
    assert!(library.has_filter("camelcase"));
    assert!(library.has_function("uuidv4"));
    assert!(library.has_function("env"));
    assert!(!library.has_filter("no-such-filter"));
}

#[test]
fn test_render_with_default_library() {
    let template = TemplateFile::from_yaml(
        "template:\n  vars:\n    user: mrs. robinson\n  text: '{{ user|initials }}: {{ \"secret\"|sha256sum|truncate(12) }}'",
    )
    .unwrap();
    let library = stencil_funcs::default_library().unwrap();
    let rendered = stencil::render(&template, &BTreeMap::new(), &library).unwrap();
    assert_eq!(rendered, "MR: 2bb80d537...");
}

#[test]
fn test_unknown_helper_is_compile_error() {
    let template =
        TemplateFile::from_yaml("template:\n  text: '{{ badFunc(42) }}'").unwrap();
    let library = stencil_funcs::default_library().unwrap();
    let err = stencil::render(&template, &BTreeMap::new(), &library).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Compile);
}

#[test]
fn test_helper_failure_is_render_error() {
    let mut template = TemplateFile::default();
    template.template.text = "{{ 'not base64!'|b64decode }}".to_string();
    let library = stencil_funcs::default_library().unwrap();
    let err = stencil::render(&template, &BTreeMap::new(), &library).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Render);
}

#[test]
fn test_seed_through_template_vars() {
    // a template can pin RAND_SEED in its own vars to get stable output
    let template = TemplateFile::from_yaml(
        "template:\n  vars:\n    RAND_SEED: '1234'\n  text: 'token-{{ randstr(16) }}'",
    )
    .unwrap();
    let library = stencil_funcs::default_library().unwrap();
    let first = stencil::render(&template, &BTreeMap::new(), &library).unwrap();
    let second = stencil::render(&template, &BTreeMap::new(), &library).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.len(), "token-".len() + 16);
}
