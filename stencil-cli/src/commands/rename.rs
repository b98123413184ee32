use std::fs;

use anyhow::{bail, Context, Error};

use crate::config::Config;

pub fn run(config: &Config, old: &str, new: &str) -> Result<(), Error> {
    let source = config.template_path(old)?;
    let destination = config.template_path(new)?;
    if !source.exists() {
        bail!("no template named '{old}'");
    }
    if destination.exists() {
        bail!("a template named '{new}' already exists");
    }
    fs::rename(&source, &destination).with_context(|| {
        format!(
            "could not rename '{}' to '{}'",
            source.display(),
            destination.display()
        )
    })?;
    println!("template '{old}' renamed to '{new}'");
    Ok(())
}
