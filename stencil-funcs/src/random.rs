use minijinja::value::Value;
use minijinja::{Error, ErrorKind, State};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

const DEFAULT_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Returns the rng for the render.
///
/// Seeded from the `RAND_SEED` variable when it is in scope (an integer or
/// a string holding one), from entropy otherwise.
fn get_rng(state: &State) -> SmallRng {
    match state.lookup("RAND_SEED").and_then(seed_from_value) {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    }
}

fn seed_from_value(value: Value) -> Option<u64> {
    if let Some(s) = value.as_str() {
        s.parse().ok()
    } else {
        u64::try_from(value).ok()
    }
}

/// Picks a random element from a sequence or a random character from a
/// string.
///
/// The choice can be seeded with the `RAND_SEED` variable.
pub fn random(state: &State, value: Value) -> Result<Value, Error> {
    let mut rng = get_rng(state);
    if let Some(s) = value.as_str() {
        let chars: Vec<char> = s.chars().collect();
        match chars.choose(&mut rng) {
            Some(c) => Ok(Value::from(c.to_string())),
            None => Err(Error::new(
                ErrorKind::InvalidOperation,
                "cannot pick a character from an empty string",
            )),
        }
    } else if let Some(len) = value.len() {
        if len == 0 {
            return Err(Error::new(
                ErrorKind::InvalidOperation,
                "cannot pick an element from an empty sequence",
            ));
        }
        value.get_item_by_index(rng.gen_range(0..len))
    } else {
        Err(Error::new(
            ErrorKind::InvalidOperation,
            format!("cannot pick a random element from {}", value.kind()),
        ))
    }
}

/// Returns a random integer in a given range.
///
/// If only one parameter is provided it's taken as exclusive upper bound
/// with 0 as lower bound, otherwise two parameters need to be passed for
/// the lower and upper bound.
///
/// ```jinja
/// {{ randint(6) }} {{ randint(1, 7) }}
/// ```
pub fn randint(state: &State, n: i64, m: Option<i64>) -> Result<i64, Error> {
    let (lower, upper) = match m {
        None => (0, n),
        Some(m) => (n, m),
    };
    if lower >= upper {
        return Err(Error::new(
            ErrorKind::InvalidOperation,
            format!("empty range {lower}..{upper}"),
        ));
    }
    Ok(get_rng(state).gen_range(lower..upper))
}

/// Returns a random string of the given length.
///
/// Characters are drawn from the alphanumeric alphabet unless a custom
/// alphabet is passed as second argument.
pub fn randstr(state: &State, length: usize, alphabet: Option<&str>) -> Result<String, Error> {
    let chars: Vec<char> = alphabet.unwrap_or(DEFAULT_ALPHABET).chars().collect();
    if chars.is_empty() {
        return Err(Error::new(
            ErrorKind::InvalidOperation,
            "cannot draw from an empty alphabet",
        ));
    }
    let mut rng = get_rng(state);
    Ok((0..length)
        .map(|_| chars[rng.gen_range(0..chars.len())])
        .collect())
}
