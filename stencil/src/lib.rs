//! Stencil keeps reusable text snippets as small YAML documents and renders
//! them through [MiniJinja](https://github.com/mitsuhiko/minijinja).  This
//! crate is the core of the tool: the template record and its loader, the
//! function registry, and the renderer that merges variable scopes and
//! executes a template body.
//!
//! The pieces are used in sequence: load a [`TemplateFile`], assemble a
//! [`FunctionLibrary`] (usually once per process), then [`render`] the
//! template against the caller's default variables.
//!
//! ```
//! use std::collections::BTreeMap;
//! use stencil::{FunctionLibrary, TemplateFile};
//!
//! let template = TemplateFile::from_yaml(
//!     "template:\n  vars:\n    name: Bob\n  text: 'Hello, {{ name }}!'",
//! )
//! .unwrap();
//!
//! let mut defaults = BTreeMap::new();
//! defaults.insert("name".to_string(), "Alice".to_string());
//!
//! let library = FunctionLibrary::empty();
//! let rendered = stencil::render(&template, &defaults, &library).unwrap();
//! assert_eq!(rendered, "Hello, Bob!");
//! ```
//!
//! Variable resolution is a right-biased merge: configuration defaults are
//! the base layer and the template's own `vars` win on collision.  Values
//! are opaque strings and are never expanded recursively.  A missing
//! variable is a render error, not empty output, and a render either
//! produces the complete string or fails; partial output does not exist.
#![deny(missing_docs)]

mod error;
mod registry;
mod render;
mod template;

pub use self::error::{Error, ErrorKind};
pub use self::registry::{FunctionGroup, FunctionLibrary, InstallFn, Registry};
pub use self::render::{merged_vars, render};
pub use self::template::{TemplateBody, TemplateFile};
