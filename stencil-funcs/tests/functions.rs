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
fn test_seeded_random_is_reproducible() {
    let source = "{% set RAND_SEED = 42 %}{{ randint(1000000) }}-{{ randstr(12) }}";
    assert_eq!(render(source), render(source));
}

#[test]
fn test_randint_bounds() {
    assert_eq!(render("{{ randint(6) >= 0 and randint(6) < 6 }}"), "true");
    assert_eq!(render("{{ randint(5, 7) >= 5 and randint(5, 7) < 7 }}"), "true");
    assert!(env()
        .render_str("{{ randint(7, 5) }}", context! {})
        .is_err());
}

#[test]
fn test_randstr() {
    assert_eq!(render("{{ randstr(12)|length }}"), "12");
    assert_eq!(render("{{ randstr(8, 'x') }}"), "xxxxxxxx");
}

#[test]
fn test_random_filter() {
    assert_eq!(render("{{ [1, 2, 3]|random in [1, 2, 3] }}"), "true");
    assert_eq!(render("{{ 'aaa'|random }}"), "a");
    assert!(env().render_str("{{ []|random }}", context! {}).is_err());
}

#[test]
fn test_uuidv4() {
    assert_eq!(render("{{ uuidv4()|length }}"), "36");
    assert_eq!(
        render(
            "{{ uuidv4()|regexmatch('^[0-9a-f]{8}-[0-9a-f]{4}-4[0-9a-f]{3}-[0-9a-f]{4}-[0-9a-f]{12}$') }}"
        ),
        "true"
    );
}

#[test]
fn test_env_lookup() {
    std::env::set_var("STENCIL_FUNCS_RENDER_TEST", "hello");
    assert_eq!(render("{{ env('STENCIL_FUNCS_RENDER_TEST') }}"), "hello");
    assert_eq!(
        render("{{ env('STENCIL_FUNCS_RENDER_UNSET', 'fallback') }}"),
        "fallback"
    );
    assert!(env()
        .render_str("{{ env('STENCIL_FUNCS_RENDER_UNSET') }}", context! {})
        .is_err());
}

#[test]
fn test_semver() {
    assert_eq!(render("{{ semver('1.2.3-rc.1').minor }}"), "2");
    assert_eq!(render("{{ semver('1.2.3-rc.1').prerelease }}"), "rc.1");
    assert_eq!(render("{{ semvercompare('>=1.2, <2', '1.4.0') }}"), "true");
    assert_eq!(render("{{ semvercompare('^2', '1.4.0') }}"), "false");
}

#[test]
fn test_paths() {
    assert_eq!(render("{{ '/etc/ssh/sshd_config'|basename }}"), "sshd_config");
    assert_eq!(render("{{ '/etc/ssh/sshd_config'|dirname }}"), "/etc/ssh");
    assert_eq!(render("{{ 'notes.tar.gz'|fileext }}"), "gz");
    assert_eq!(render("{{ 'a/./b/../c'|cleanpath }}"), "a/c");
}

#[test]
fn test_regex_filters() {
    // backslashes are escaped once for the template string literal
    assert_eq!(
        render(r"{{ '2024-01-31'|regexreplace('(\\d+)-(\\d+)-(\\d+)', '$3.$2.$1') }}"),
        "31.01.2024"
    );
    assert_eq!(
        render(r"{{ 'a1 b2 c3'|regexfind('[a-z]\\d')|join(',') }}"),
        "a1,b2,c3"
    );
    assert!(env()
        .render_str("{{ 'x'|regexmatch('(unclosed') }}", context! {})
        .is_err());
}
