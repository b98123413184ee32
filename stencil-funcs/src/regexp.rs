use minijinja::value::Value;
use minijinja::{Error, ErrorKind};
use regex::Regex;

fn compile(pattern: &str) -> Result<Regex, Error> {
    Regex::new(pattern).map_err(|err| {
        Error::new(
            ErrorKind::InvalidOperation,
            format!("invalid regular expression '{pattern}'"),
        )
        .with_source(err)
    })
}

/// Checks a string against a regular expression.
///
/// ```jinja
/// {% if mail|regexmatch("@example\\.com$") %}internal{% endif %}
/// ```
pub fn regexmatch(value: &str, pattern: &str) -> Result<bool, Error> {
    Ok(compile(pattern)?.is_match(value))
}

/// Replaces every match of a regular expression.
///
/// Capture groups can be referenced in the replacement as `$1`, `$2`, ...
pub fn regexreplace(value: &str, pattern: &str, replacement: &str) -> Result<String, Error> {
    Ok(compile(pattern)?.replace_all(value, replacement).into_owned())
}

/// Returns every match of a regular expression as a list.
pub fn regexfind(value: &str, pattern: &str) -> Result<Value, Error> {
    let re = compile(pattern)?;
    Ok(Value::from(
        re.find_iter(value)
            .map(|m| m.as_str().to_string())
            .collect::<Vec<_>>(),
    ))
}

#[cfg(test)]
mod tests {
    use similar_asserts::assert_eq;

    use super::*;

    #[test]
    fn test_match_and_replace() {
        assert!(regexmatch("user@example.com", "@example\\.com$").unwrap());
        assert!(!regexmatch("user@other.com", "@example\\.com$").unwrap());
        assert_eq!(
            regexreplace("2024-01-31", "(\\d+)-(\\d+)-(\\d+)", "$3.$2.$1").unwrap(),
            "31.01.2024"
        );
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(regexmatch("x", "(unclosed").is_err());
    }
}
