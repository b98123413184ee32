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
fn test_default_formats() {
    insta::assert_snapshot!(render("{{ 0|datetimeformat }}"), @"1970-01-01 00:00:00");
    insta::assert_snapshot!(render("{{ 86400|dateformat }}"), @"1970-01-02");
    insta::assert_snapshot!(render("{{ 3661|timeformat }}"), @"01:01:01");
}

#[test]
fn test_custom_format() {
    assert_eq!(
        render("{{ 86400|dateformat(format='[day].[month].[year]') }}"),
        "02.01.1970"
    );
}

#[test]
fn test_fractional_timestamp() {
    // now() returns fractional seconds; formatting drops the fraction
    assert_eq!(render("{{ 1.5|timeformat }}"), "00:00:01");
}

#[test]
fn test_invalid_format_description() {
    assert!(env()
        .render_str("{{ 0|datetimeformat(format='[nope]') }}", context! {})
        .is_err());
}

#[test]
fn test_now_is_a_timestamp() {
    // anything rendered after 2023 will satisfy this
    assert_eq!(render("{{ now() > 1700000000 }}"), "true");
}
