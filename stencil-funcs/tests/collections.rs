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
fn test_compact() {
    assert_eq!(
        render("{{ ['a', '', 'b', none, 'c']|compact|join(',') }}"),
        "a,b,c"
    );
}

#[test]
fn test_uniq() {
    assert_eq!(render("{{ [1, 2, 1, 3, 2]|uniq|join(',') }}"), "1,2,3");
    assert_eq!(render("{{ ['a', 'a']|uniq|length }}"), "1");
}

#[test]
fn test_pick_and_omit() {
    assert_eq!(
        render("{{ ({'name': 'Bob', 'role': 'admin'}|pick('name')).name }}"),
        "Bob"
    );
    assert_eq!(
        render("{{ {'name': 'Bob', 'role': 'admin'}|pick('name')|length }}"),
        "1"
    );
    assert_eq!(
        render("{{ ({'name': 'Bob', 'role': 'admin'}|omit('name')).role }}"),
        "admin"
    );
}

#[test]
fn test_merge_is_right_biased() {
    assert_eq!(render("{{ merge({'a': 1}, {'a': 2, 'b': 3}).a }}"), "2");
    assert_eq!(render("{{ merge({'a': 1}, {'a': 2, 'b': 3}).b }}"), "3");
}

#[test]
fn test_merge_rejects_non_maps() {
    assert!(env()
        .render_str("{{ merge({'a': 1}, [1, 2]) }}", context! {})
        .is_err());
}

#[test]
fn test_rounding() {
    assert_eq!(render("{{ 1.2|ceil }}"), "2");
    assert_eq!(render("{{ 1.8|floor }}"), "1");
    assert_eq!(render("{{ 3|ceil }}"), "3");
}
