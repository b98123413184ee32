use std::collections::BTreeMap;

use minijinja::value::Value;
use minijinja::{Error, ErrorKind};
use semver::{Version, VersionReq};

fn parse_version(version: &str) -> Result<Version, Error> {
    Version::parse(version).map_err(|err| {
        Error::new(
            ErrorKind::InvalidOperation,
            format!("invalid semantic version '{version}'"),
        )
        .with_source(err)
    })
}

/// Parses a semantic version into its parts.
///
/// ```jinja
/// {{ semver("1.2.3-rc.1").major }} -> 1
/// ```
pub fn semver(version: &str) -> Result<Value, Error> {
    let parsed = parse_version(version)?;
    let mut rv = BTreeMap::new();
    rv.insert("major", Value::from(parsed.major));
    rv.insert("minor", Value::from(parsed.minor));
    rv.insert("patch", Value::from(parsed.patch));
    rv.insert("prerelease", Value::from(parsed.pre.as_str()));
    rv.insert("build", Value::from(parsed.build.as_str()));
    Ok(Value::from_serialize(rv))
}

/// Checks a version against a semver requirement.
///
/// ```jinja
/// {% if semvercompare(">=1.2, <2", version) %}supported{% endif %}
/// ```
pub fn semvercompare(requirement: &str, version: &str) -> Result<bool, Error> {
    let requirement = VersionReq::parse(requirement).map_err(|err| {
        Error::new(
            ErrorKind::InvalidOperation,
            format!("invalid version requirement '{requirement}'"),
        )
        .with_source(err)
    })?;
    Ok(requirement.matches(&parse_version(version)?))
}
