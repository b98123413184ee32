use std::fs;

use anyhow::{bail, Context, Error};

use crate::config::Config;

pub fn run(config: &Config, name: &str) -> Result<(), Error> {
    let path = config.template_path(name)?;
    if !path.exists() {
        bail!("no template named '{name}'");
    }
    fs::remove_file(&path)
        .with_context(|| format!("could not remove template file '{}'", path.display()))?;
    println!("template '{name}' removed");
    Ok(())
}
