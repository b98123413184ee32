//! Stencil-Funcs is the helper library for
//! [stencil](https://crates.io/crates/stencil) templates.  It bundles the
//! filters and functions that snippet bodies can call, grouped by
//! capability, and assembles them into the immutable
//! [`FunctionLibrary`](stencil::FunctionLibrary) the renderer executes
//! against.
//!
//! ```
//! let library = stencil_funcs::default_library().unwrap();
//! assert!(library.has_filter("b64encode"));
//! assert!(library.has_function("uuidv4"));
//! ```
//!
//! MiniJinja's built-in filters stay available in every template; the groups
//! here only add what the builtins lack.  Each group lists the names it
//! provides, which is how the registry rejects name collisions at assembly
//! time.

use minijinja::Environment;
use stencil::{Error, FunctionGroup, FunctionLibrary, Registry};

/// String manipulation.
pub mod strings;

/// Base64 and hex encoding.
pub mod encoding;

/// Cryptographic digests.
pub mod checksum;

/// Random values, seedable through the `RAND_SEED` variable.
pub mod random;

/// Unix timestamp helpers.
pub mod datetime;

/// Numeric rounding.
pub mod numeric;

/// Sequence and map utilities.
pub mod collections;

/// Unique id generation.
pub mod uniqueid;

/// Regular expression matching.
pub mod regexp;

/// Semantic version handling.
pub mod version;

/// Process environment lookups.
pub mod env;

/// Lexical path helpers.
pub mod fspath;

/// Value reflection and conversion.
pub mod convert;

fn install_strings(env: &mut Environment) {
    env.add_filter("camelcase", strings::camelcase);
    env.add_filter("kebabcase", strings::kebabcase);
    env.add_filter("snakecase", strings::snakecase);
    env.add_filter("swapcase", strings::swapcase);
    env.add_filter("initials", strings::initials);
    env.add_filter("repeat", strings::repeat);
    env.add_filter("truncate", strings::truncate);
    env.add_filter("pluralize", strings::pluralize);
}

fn install_encoding(env: &mut Environment) {
    env.add_filter("b64encode", encoding::b64encode);
    env.add_filter("b64decode", encoding::b64decode);
    env.add_filter("hexencode", encoding::hexencode);
    env.add_filter("hexdecode", encoding::hexdecode);
}

fn install_checksum(env: &mut Environment) {
    env.add_filter("sha256sum", checksum::sha256sum);
    env.add_filter("sha512sum", checksum::sha512sum);
}

fn install_random(env: &mut Environment) {
    env.add_filter("random", random::random);
    env.add_function("randint", random::randint);
    env.add_function("randstr", random::randstr);
}

fn install_datetime(env: &mut Environment) {
    env.add_filter("datetimeformat", datetime::datetimeformat);
    env.add_filter("dateformat", datetime::dateformat);
    env.add_filter("timeformat", datetime::timeformat);
    env.add_function("now", datetime::now);
}

fn install_numeric(env: &mut Environment) {
    env.add_filter("ceil", numeric::ceil);
    env.add_filter("floor", numeric::floor);
}

fn install_collections(env: &mut Environment) {
    env.add_filter("compact", collections::compact);
    env.add_filter("uniq", collections::uniq);
    env.add_filter("pick", collections::pick);
    env.add_filter("omit", collections::omit);
    env.add_function("merge", collections::merge);
}

fn install_uniqueid(env: &mut Environment) {
    env.add_function("uuidv4", uniqueid::uuidv4);
}

fn install_regexp(env: &mut Environment) {
    env.add_filter("regexmatch", regexp::regexmatch);
    env.add_filter("regexreplace", regexp::regexreplace);
    env.add_filter("regexfind", regexp::regexfind);
}

fn install_version(env: &mut Environment) {
    env.add_function("semver", version::semver);
    env.add_function("semvercompare", version::semvercompare);
}

fn install_env(env: &mut Environment) {
    env.add_function("env", env::env);
}

fn install_fspath(env: &mut Environment) {
    env.add_filter("basename", fspath::basename);
    env.add_filter("dirname", fspath::dirname);
    env.add_filter("fileext", fspath::fileext);
    env.add_filter("cleanpath", fspath::cleanpath);
}

fn install_convert(env: &mut Environment) {
    env.add_filter("kindof", convert::kindof);
    env.add_filter("toyaml", convert::toyaml);
}

/// Returns the groups of this crate in their default order.
pub fn default_groups() -> Vec<FunctionGroup> {
    vec![
        FunctionGroup::new(
            "strings",
            &[
                "camelcase",
                "kebabcase",
                "snakecase",
                "swapcase",
                "initials",
                "repeat",
                "truncate",
                "pluralize",
            ],
            &[],
            install_strings,
        ),
        FunctionGroup::new(
            "encoding",
            &["b64encode", "b64decode", "hexencode", "hexdecode"],
            &[],
            install_encoding,
        ),
        FunctionGroup::new("checksum", &["sha256sum", "sha512sum"], &[], install_checksum),
        FunctionGroup::new("random", &["random"], &["randint", "randstr"], install_random),
        FunctionGroup::new(
            "datetime",
            &["datetimeformat", "dateformat", "timeformat"],
            &["now"],
            install_datetime,
        ),
        FunctionGroup::new("numeric", &["ceil", "floor"], &[], install_numeric),
        FunctionGroup::new(
            "collections",
            &["compact", "uniq", "pick", "omit"],
            &["merge"],
            install_collections,
        ),
        FunctionGroup::new("uniqueid", &[], &["uuidv4"], install_uniqueid),
        FunctionGroup::new(
            "regexp",
            &["regexmatch", "regexreplace", "regexfind"],
            &[],
            install_regexp,
        ),
        FunctionGroup::new("version", &[], &["semver", "semvercompare"], install_version),
        FunctionGroup::new("env", &[], &["env"], install_env),
        FunctionGroup::new(
            "fspath",
            &["basename", "dirname", "fileext", "cleanpath"],
            &[],
            install_fspath,
        ),
        FunctionGroup::new("convert", &["kindof", "toyaml"], &[], install_convert),
    ]
}

/// Assembles the default library from every group of this crate.
pub fn default_library() -> Result<FunctionLibrary, Error> {
    let mut registry = Registry::new();
    for group in default_groups() {
        registry = registry.add_group(group);
    }
    registry.build()
}
