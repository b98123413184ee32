use std::fs;
use std::io::{self, Write};

use anyhow::{Context, Error};

use crate::config::Config;

pub fn run(config: &Config, name: &str) -> Result<(), Error> {
    let path = config.template_path(name)?;
    let contents = fs::read_to_string(&path)
        .with_context(|| format!("could not read template '{name}'"))?;
    io::stdout().write_all(contents.as_bytes())?;
    Ok(())
}
