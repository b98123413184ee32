use minijinja::{context, Environment};
use similar_asserts::assert_eq;

fn env() -> Environment<'static> {
    let mut env = Environment::new();
    stencil_funcs::default_library().unwrap().install(&mut env);
    env
}

fn render(source: &str) -> String {
    env().render_str(source, context! {}).unwrap()
}

#[test]
fn test_base64() {
    assert_eq!(render("{{ 'hello'|b64encode }}"), "aGVsbG8=");
    assert_eq!(render("{{ 'aGVsbG8='|b64decode }}"), "hello");
    assert!(env()
        .render_str("{{ 'not base64!'|b64decode }}", context! {})
        .is_err());
}

#[test]
fn test_hex() {
    assert_eq!(render("{{ 'hi'|hexencode }}"), "6869");
    assert_eq!(render("{{ '6869'|hexdecode }}"), "hi");
}

#[test]
fn test_checksums() {
    insta::assert_snapshot!(
        render("{{ 'hello'|sha256sum }}"),
        @"2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
    );
    assert_eq!(render("{{ ''|sha512sum|length }}"), "128");
}

#[test]
fn test_kindof() {
    assert_eq!(render("{{ 'x'|kindof }}"), "string");
    assert_eq!(render("{{ 42|kindof }}"), "number");
    assert_eq!(render("{{ {'a': 1}|kindof }}"), "map");
}

#[test]
fn test_toyaml() {
    assert_eq!(render("{{ {'name': 'Bob'}|toyaml }}"), "name: Bob");
    assert_eq!(render("{{ 'plain'|toyaml }}"), "plain");
}
