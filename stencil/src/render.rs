use std::collections::BTreeMap;

use minijinja::{AutoEscape, Environment, UndefinedBehavior};

use crate::error::{Error, ErrorKind};
use crate::registry::FunctionLibrary;
use crate::template::TemplateFile;

/// Name under which a template body is compiled; shows up in engine
/// diagnostics as `(in <snippet>:line)`.
const BODY_NAME: &str = "<snippet>";

/// Builds the variable scope a template is rendered against.
///
/// Configuration defaults form the base layer and the template's own vars
/// are overlaid on top: on a key collision the template wins.  Values are
/// opaque strings, nothing is expanded recursively.
pub fn merged_vars(
    template: &TemplateFile,
    default_vars: &BTreeMap<String, String>,
) -> BTreeMap<String, String> {
    let mut scope = default_vars.clone();
    scope.extend(
        template
            .template
            .vars
            .iter()
            .map(|(key, value)| (key.clone(), value.clone())),
    );
    scope
}

/// Renders a template against configuration defaults and a function library.
///
/// The template's vars are merged over `default_vars` ([`merged_vars`]), the
/// library is installed into a fresh environment, the body is compiled and
/// executed against the merged scope.  Undefined variables are errors, not
/// empty output.  The call either returns the fully substituted string or an
/// error; partial output is never produced.
pub fn render(
    template: &TemplateFile,
    default_vars: &BTreeMap<String, String>,
    library: &FunctionLibrary,
) -> Result<String, Error> {
    let scope = merged_vars(template, default_vars);

    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.set_auto_escape_callback(|_| AutoEscape::None);
    library.install(&mut env);

    env.render_named_str(BODY_NAME, &template.template.text, &scope)
        .map_err(engine_error)
}

/// Maps an engine error onto the pipeline's error taxonomy.
///
/// Syntax problems and unknown helper names are compile failures; the engine
/// resolves a call target before the callee sees its arguments, so an
/// unknown function is reported as such no matter what the scope contains.
/// Everything else (undefined variables, bad arguments, helper failures)
/// happened while executing.
fn engine_error(err: minijinja::Error) -> Error {
    use minijinja::ErrorKind as EngineKind;

    let (kind, detail) = match err.kind() {
        EngineKind::SyntaxError => (ErrorKind::Compile, "template body is malformed"),
        EngineKind::UnknownFunction
        | EngineKind::UnknownFilter
        | EngineKind::UnknownTest
        | EngineKind::UnknownMethod => {
            (ErrorKind::Compile, "template body references an unknown helper")
        }
        EngineKind::UndefinedError => (
            ErrorKind::Render,
            "template references a variable that is not in scope",
        ),
        _ => (ErrorKind::Render, "template execution failed"),
    };
    Error::new(kind, detail).with_source(err)
}
