use minijinja::value::Value;
use minijinja::{Error, ErrorKind};

/// Returns the kind of a value (`string`, `number`, `map`, ...).
///
/// ```jinja
/// {% if user|kindof == "map" %}{{ user.name }}{% endif %}
/// ```
pub fn kindof(value: Value) -> String {
    value.kind().to_string()
}

/// Serializes a value as a YAML document.
pub fn toyaml(value: Value) -> Result<String, Error> {
    serde_yaml::to_string(&value)
        .map(|rv| rv.trim_end().to_string())
        .map_err(|err| {
            Error::new(
                ErrorKind::InvalidOperation,
                "value cannot be represented as YAML",
            )
            .with_source(err)
        })
}
