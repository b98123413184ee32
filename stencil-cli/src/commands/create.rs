use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Error};

use crate::config::Config;

/// Starter contents for new template files.  The example keeps the schema
/// in front of the user while the actual document starts out empty.
const STARTER_TEMPLATE: &str = "\
# Example template:
#
# tags:
#   - personal
#
# template:
#   vars:
#     value: Hello, world!
#   text: |
#     The value of the variable is: \"{{ value }}\"

tags: []
template:
  vars: {}
  text: |
";

pub fn run(config: &Config, name: &str) -> Result<(), Error> {
    write_starter(&config.template_path(name)?, name)
}

pub(crate) fn write_starter(path: &Path, name: &str) -> Result<(), Error> {
    if path.exists() {
        bail!("a template named '{name}' already exists");
    }
    fs::write(path, STARTER_TEMPLATE)
        .with_context(|| format!("could not create template file '{}'", path.display()))?;
    println!("template '{name}' created");
    Ok(())
}
