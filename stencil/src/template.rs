use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, ErrorKind};

/// A template document as stored on disk.
///
/// Templates are YAML files with a list of tags for filtering and a body
/// made of per-template variable bindings plus the template text:
///
/// ```yaml
/// tags:
///   - work
/// template:
///   vars:
///     name: Bob
///   text: |
///     Hello, {{ name }}!
/// ```
///
/// All fields are optional in the document and default to empty.  A loaded
/// template is never mutated; rendering builds its own state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateFile {
    /// Labels used to filter templates; order carries no meaning.
    pub tags: Vec<String>,
    /// The template body.
    pub template: TemplateBody,
}

/// The body of a template: local variable bindings and the template text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateBody {
    /// Per-template variable bindings; they win over configuration defaults.
    pub vars: BTreeMap<String, String>,
    /// The text with substitution directives.
    pub text: String,
}

impl TemplateFile {
    /// Loads a template document from a file.
    ///
    /// An unreadable file reports [`ErrorKind::Io`] with the offending path,
    /// a document that does not match the schema reports
    /// [`ErrorKind::Format`].
    pub fn load(path: &Path) -> Result<TemplateFile, Error> {
        let contents = fs::read_to_string(path).map_err(|err| {
            Error::new(
                ErrorKind::Io,
                format!("could not read template file '{}'", path.display()),
            )
            .with_source(err)
        })?;
        TemplateFile::from_yaml(&contents)
    }

    /// Parses a template document from a YAML string.
    ///
    /// An empty document yields the default (empty) template.
    pub fn from_yaml(source: &str) -> Result<TemplateFile, Error> {
        if source.trim().is_empty() {
            return Ok(TemplateFile::default());
        }
        serde_yaml::from_str(source).map_err(|err| {
            Error::new(ErrorKind::Format, "template document does not match the schema")
                .with_source(err)
        })
    }

    /// Serializes the template back into a YAML document.
    pub fn to_yaml(&self) -> Result<String, Error> {
        serde_yaml::to_string(self).map_err(|err| {
            Error::new(ErrorKind::Format, "could not serialize template document").with_source(err)
        })
    }
}

#[cfg(test)]
mod tests {
    use similar_asserts::assert_eq;

    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_missing_fields_default() {
        let tmpl = TemplateFile::from_yaml("tags: [work]").unwrap();
        assert_eq!(tmpl.tags, vec!["work".to_string()]);
        assert!(tmpl.template.vars.is_empty());
        assert_eq!(tmpl.template.text, "");

        let tmpl = TemplateFile::from_yaml("").unwrap();
        assert_eq!(tmpl, TemplateFile::default());
    }

    #[test]
    fn test_non_scalar_vars_rejected() {
        let err = TemplateFile::from_yaml(
            "template:\n  vars:\n    name:\n      - not\n      - scalar\n",
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Format);
    }

    #[test]
    fn test_malformed_document_rejected() {
        let err = TemplateFile::from_yaml("template: [\n").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Format);
    }

    #[test]
    fn test_yaml_round_trip() {
        let mut tmpl = TemplateFile::default();
        tmpl.tags = vec!["work".into(), "mail".into()];
        tmpl.template.vars.insert("name".into(), "Bob".into());
        tmpl.template.text = "Hello, {{ name }}!\n".into();

        let serialized = tmpl.to_yaml().unwrap();
        let reloaded = TemplateFile::from_yaml(&serialized).unwrap();
        assert_eq!(reloaded, tmpl);
    }
}
