use std::collections::BTreeMap;

use minijinja::value::{Rest, Value, ValueKind};
use minijinja::{Error, ErrorKind};

/// Removes empty entries from a sequence.
///
/// Undefined values, none and empty strings are dropped:
///
/// ```jinja
/// {{ ["a", "", "b"]|compact|join(",") }} -> a,b
/// ```
pub fn compact(values: Vec<Value>) -> Vec<Value> {
    values
        .into_iter()
        .filter(|value| !(value.is_undefined() || value.is_none() || value.as_str() == Some("")))
        .collect()
}

/// Removes duplicate entries from a sequence, keeping first occurrences.
pub fn uniq(values: Vec<Value>) -> Vec<Value> {
    let mut rv: Vec<Value> = Vec::new();
    for value in values {
        if !rv.contains(&value) {
            rv.push(value);
        }
    }
    rv
}

/// Reduces a map to the given keys.
///
/// ```jinja
/// {{ user|pick("name", "mail") }}
/// ```
pub fn pick(value: Value, keys: Rest<String>) -> Result<Value, Error> {
    let entries = map_entries(&value)?;
    Ok(Value::from_serialize(
        entries
            .into_iter()
            .filter(|(key, _)| keys.0.contains(key))
            .collect::<BTreeMap<_, _>>(),
    ))
}

/// Removes the given keys from a map.
pub fn omit(value: Value, keys: Rest<String>) -> Result<Value, Error> {
    let entries = map_entries(&value)?;
    Ok(Value::from_serialize(
        entries
            .into_iter()
            .filter(|(key, _)| !keys.0.contains(key))
            .collect::<BTreeMap<_, _>>(),
    ))
}

/// Merges maps; later maps win on key collisions.
pub fn merge(maps: Rest<Value>) -> Result<Value, Error> {
    let mut rv = BTreeMap::new();
    for value in &maps.0 {
        rv.extend(map_entries(value)?);
    }
    Ok(Value::from_serialize(rv))
}

fn map_entries(value: &Value) -> Result<BTreeMap<String, Value>, Error> {
    if value.kind() != ValueKind::Map {
        return Err(Error::new(
            ErrorKind::InvalidOperation,
            format!("expected a map, got {}", value.kind()),
        ));
    }
    let mut rv = BTreeMap::new();
    for key in value.try_iter()? {
        let item = value.get_item(&key)?;
        rv.insert(key.to_string(), item);
    }
    Ok(rv)
}
