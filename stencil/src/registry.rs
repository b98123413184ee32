use std::collections::BTreeSet;
use std::fmt;

use minijinja::Environment;

use crate::error::{Error, ErrorKind};

/// Installs a group's helpers into an environment.
pub type InstallFn = for<'env, 'source> fn(&'env mut Environment<'source>);

/// A named group of template helpers.
///
/// A group bundles the filters and functions of one capability (string
/// manipulation, checksums, random values, ...) together with the installer
/// that registers them with a MiniJinja environment.  Groups are assembled
/// into a [`FunctionLibrary`] through a [`Registry`].
pub struct FunctionGroup {
    name: &'static str,
    filters: &'static [&'static str],
    functions: &'static [&'static str],
    install: InstallFn,
}

impl FunctionGroup {
    /// Creates a group from its name, the helper names it provides and the
    /// installer that registers them.
    ///
    /// The name lists are the group's contract: they are what the registry
    /// checks for collisions, so they must match what `install` registers.
    pub fn new(
        name: &'static str,
        filters: &'static [&'static str],
        functions: &'static [&'static str],
        install: InstallFn,
    ) -> FunctionGroup {
        FunctionGroup {
            name,
            filters,
            functions,
            install,
        }
    }

    /// Returns the name of the group.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the filter names this group provides.
    pub fn filters(&self) -> &'static [&'static str] {
        self.filters
    }

    /// Returns the function names this group provides.
    pub fn functions(&self) -> &'static [&'static str] {
        self.functions
    }
}

impl fmt::Debug for FunctionGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionGroup")
            .field("name", &self.name)
            .field("filters", &self.filters)
            .field("functions", &self.functions)
            .finish()
    }
}

/// Collects function groups and assembles them into a [`FunctionLibrary`].
///
/// ```
/// use stencil::{FunctionGroup, Registry};
///
/// fn install(env: &mut minijinja::Environment) {
///     env.add_filter("shout", |value: &str| value.to_uppercase());
/// }
///
/// let library = Registry::new()
///     .add_group(FunctionGroup::new("shouting", &["shout"], &[], install))
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct Registry {
    groups: Vec<FunctionGroup>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Registry {
        Registry { groups: Vec::new() }
    }

    /// Adds a function group.
    #[must_use]
    pub fn add_group(mut self, group: FunctionGroup) -> Registry {
        self.groups.push(group);
        self
    }

    /// Assembles the immutable library.
    ///
    /// Fails with [`ErrorKind::Registry`] if two groups claim the same
    /// filter name or the same function name.
    pub fn build(self) -> Result<FunctionLibrary, Error> {
        let mut filter_names = BTreeSet::new();
        let mut function_names = BTreeSet::new();
        for group in &self.groups {
            for name in group.filters {
                if !filter_names.insert(*name) {
                    return Err(duplicate_name("filter", name, group.name));
                }
            }
            for name in group.functions {
                if !function_names.insert(*name) {
                    return Err(duplicate_name("function", name, group.name));
                }
            }
        }
        Ok(FunctionLibrary {
            groups: self.groups,
            filter_names,
            function_names,
        })
    }
}

fn duplicate_name(what: &str, name: &str, group: &str) -> Error {
    Error::new(
        ErrorKind::Registry,
        format!("{what} '{name}' registered twice (group '{group}')"),
    )
}

/// An immutable, assembled namespace of template helpers.
///
/// Once built the library is read-only and can be shared freely across
/// renders and threads; each render installs it into a fresh environment.
#[derive(Debug)]
pub struct FunctionLibrary {
    groups: Vec<FunctionGroup>,
    filter_names: BTreeSet<&'static str>,
    function_names: BTreeSet<&'static str>,
}

impl FunctionLibrary {
    /// Returns a library with no helpers at all.
    pub fn empty() -> FunctionLibrary {
        FunctionLibrary {
            groups: Vec::new(),
            filter_names: BTreeSet::new(),
            function_names: BTreeSet::new(),
        }
    }

    /// Registers every group with the given environment.
    pub fn install(&self, env: &mut Environment<'_>) {
        for group in &self.groups {
            (group.install)(env);
        }
    }

    /// Returns the groups in registration order.
    pub fn groups(&self) -> &[FunctionGroup] {
        &self.groups
    }

    /// Checks whether a filter of that name is registered.
    pub fn has_filter(&self, name: &str) -> bool {
        self.filter_names.contains(name)
    }

    /// Checks whether a function of that name is registered.
    pub fn has_function(&self, name: &str) -> bool {
        self.function_names.contains(name)
    }
}
