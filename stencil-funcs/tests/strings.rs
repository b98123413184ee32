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
fn test_case_filters() {
    assert_eq!(
        render("{{ 'hello beautiful world'|camelcase }}"),
        "helloBeautifulWorld"
    );
    assert_eq!(render("{{ 'helloWorld'|kebabcase }}"), "hello-world");
    assert_eq!(render("{{ 'Hello World'|snakecase }}"), "hello_world");
    assert_eq!(render("{{ 'Hello'|swapcase }}"), "hELLO");
    assert_eq!(render("{{ 'ada lovelace'|initials }}"), "AL");
}

#[test]
fn test_repeat_and_truncate() {
    assert_eq!(render("{{ '-'|repeat(4) }}"), "----");
    assert_eq!(render("{{ 'hello world'|truncate(8) }}"), "hello...");
    assert_eq!(render("{{ 'hello'|truncate(8) }}"), "hello");
    assert_eq!(render("{{ 'hello world'|truncate(8, '~') }}"), "hello w~");
}

#[test]
fn test_pluralize() {
    let env = env();
    for (count, expected) in [
        (0, "You have 0 messages."),
        (1, "You have 1 message."),
        (10, "You have 10 messages."),
    ] {
        assert_eq!(
            env.render_str(
                "You have {{ count }} message{{ count|pluralize }}.",
                context! { count },
            )
            .unwrap(),
            expected
        );
    }
    assert_eq!(
        env.render_str(
            r#"{{ count }} entit{{ count|pluralize("y", "ies") }}"#,
            context! { count => 2 },
        )
        .unwrap(),
        "2 entities"
    );
}
