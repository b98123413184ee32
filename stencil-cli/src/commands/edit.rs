use std::process;

use anyhow::{bail, Context, Error};

use crate::commands::create;
use crate::config::Config;

pub fn run(config: &Config, name: &str, editor_flag: Option<&str>) -> Result<(), Error> {
    let path = config.template_path(name)?;
    if !path.exists() {
        create::write_starter(&path, name)?;
    }
    let editor = editor_flag
        .map(str::to_string)
        .unwrap_or_else(|| config.editor());
    let status = process::Command::new(&editor)
        .arg(&path)
        .status()
        .with_context(|| format!("could not launch editor '{editor}'"))?;
    if !status.success() {
        bail!("editor '{editor}' exited with {status}");
    }
    Ok(())
}
