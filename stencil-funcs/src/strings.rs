#[cfg(test)]
use similar_asserts::assert_eq;

use minijinja::value::Value;
use minijinja::{Error, ErrorKind};

/// Splits an identifier-ish string into lowercase words.
///
/// Word boundaries are runs of non-alphanumeric characters and
/// lower-to-upper case transitions, so `"helloWorld"`, `"hello_world"` and
/// `"Hello World"` all split the same way.
fn split_words(value: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut prev_lower = false;
    for c in value.chars() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev_lower = false;
            continue;
        }
        if c.is_uppercase() && prev_lower && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        prev_lower = c.is_lowercase() || c.is_numeric();
        current.extend(c.to_lowercase());
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Converts a string to `camelCase`.
///
/// ```jinja
/// {{ "hello beautiful world"|camelcase }} -> helloBeautifulWorld
/// ```
pub fn camelcase(value: &str) -> String {
    let mut words = split_words(value).into_iter();
    let mut rv = words.next().unwrap_or_default();
    for word in words {
        rv.push_str(&capitalize(&word));
    }
    rv
}

/// Converts a string to `kebab-case`.
pub fn kebabcase(value: &str) -> String {
    split_words(value).join("-")
}

/// Converts a string to `snake_case`.
pub fn snakecase(value: &str) -> String {
    split_words(value).join("_")
}

/// Swaps the case of every character.
pub fn swapcase(value: &str) -> String {
    value
        .chars()
        .flat_map(|c| {
            if c.is_uppercase() {
                c.to_lowercase().collect::<Vec<_>>()
            } else {
                c.to_uppercase().collect::<Vec<_>>()
            }
        })
        .collect()
}

/// Reduces a string to the uppercased first letter of each word.
///
/// ```jinja
/// {{ "ada lovelace"|initials }} -> AL
/// ```
pub fn initials(value: &str) -> String {
    split_words(value)
        .iter()
        .filter_map(|word| word.chars().next())
        .flat_map(|c| c.to_uppercase())
        .collect()
}

/// Repeats a string a number of times.
pub fn repeat(value: &str, count: usize) -> String {
    value.repeat(count)
}

/// Truncates a string to `length` characters.
///
/// If the string is longer than `length` it is cut off and the end marker
/// (`"..."` unless given) is appended; the marker counts towards the
/// length.
pub fn truncate(value: &str, length: usize, end: Option<&str>) -> String {
    if value.chars().count() <= length {
        return value.to_string();
    }
    let end = end.unwrap_or("...");
    let keep = length.saturating_sub(end.chars().count());
    let mut rv: String = value.chars().take(keep).collect();
    rv.push_str(end);
    rv
}

/// Returns a plural suffix if the value is not 1, '1', or an object of
/// length 1.
///
/// By default, the plural suffix is 's' and the singular suffix is empty
/// (''). You can specify a singular suffix as the first argument (or `None`,
/// for the default). You can specify a plural suffix as the second argument
/// (or `None`, for the default).
///
/// ```jinja
/// {{ users|length }} user{{ users|pluralize }}.
/// ```
///
/// ```jinja
/// {{ entities|length }} entit{{ entities|pluralize("y", "ies") }}.
/// ```
pub fn pluralize(v: Value, singular: Option<Value>, plural: Option<Value>) -> Result<Value, Error> {
    let is_singular = match v.len() {
        Some(val) => val == 1,
        None => match i64::try_from(v.clone()) {
            Ok(val) => val == 1,
            Err(_) => {
                return Err(Error::new(
                    ErrorKind::InvalidOperation,
                    format!(
                        "Pluralize argument is not an integer, or a sequence / object with a \
                         length but of type {}",
                        v.kind()
                    ),
                ));
            }
        },
    };

    let (rv, default) = if is_singular {
        (singular.unwrap_or(Value::UNDEFINED), "")
    } else {
        (plural.unwrap_or(Value::UNDEFINED), "s")
    };

    if rv.is_undefined() || rv.is_none() {
        Ok(Value::from(default))
    } else {
        Ok(rv)
    }
}

#[test]
fn test_split_words() {
    assert_eq!(split_words("helloWorld"), vec!["hello", "world"]);
    assert_eq!(split_words("hello_world"), vec!["hello", "world"]);
    assert_eq!(split_words("Hello, World!"), vec!["hello", "world"]);
    assert_eq!(split_words(""), Vec::<String>::new());
}

#[test]
fn test_case_conversions() {
    assert_eq!(camelcase("hello beautiful world"), "helloBeautifulWorld");
    assert_eq!(kebabcase("helloWorld"), "hello-world");
    assert_eq!(snakecase("Hello World"), "hello_world");
    assert_eq!(swapcase("Hello"), "hELLO");
    assert_eq!(initials("ada lovelace"), "AL");
}

#[test]
fn test_truncate() {
    assert_eq!(truncate("hello world", 8, None), "hello...");
    assert_eq!(truncate("hello", 8, None), "hello");
    assert_eq!(truncate("hello world", 6, Some("…")), "hello…");
}
