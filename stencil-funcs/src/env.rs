use minijinja::{Error, ErrorKind};

/// Looks up an environment variable.
///
/// An unset variable is an error unless a default is given:
///
/// ```jinja
/// {{ env("USER") }} on {{ env("HOSTNAME", "this machine") }}
/// ```
pub fn env(name: &str, default: Option<&str>) -> Result<String, Error> {
    match std::env::var(name) {
        Ok(value) => Ok(value),
        Err(std::env::VarError::NotPresent) => match default {
            Some(default) => Ok(default.to_string()),
            None => Err(Error::new(
                ErrorKind::InvalidOperation,
                format!("environment variable '{name}' is not set"),
            )),
        },
        Err(err) => Err(Error::new(
            ErrorKind::InvalidOperation,
            format!("environment variable '{name}' is not valid unicode"),
        )
        .with_source(err)),
    }
}

#[cfg(test)]
mod tests {
    use similar_asserts::assert_eq;

    #[test]
    fn test_env() {
        std::env::set_var("STENCIL_FUNCS_TEST_ENV", "set");
        assert_eq!(super::env("STENCIL_FUNCS_TEST_ENV", None).unwrap(), "set");
        assert_eq!(
            super::env("STENCIL_FUNCS_TEST_UNSET", Some("fallback")).unwrap(),
            "fallback"
        );
        assert!(super::env("STENCIL_FUNCS_TEST_UNSET", None).is_err());
    }
}
