use std::io::{self, Write};

use anyhow::{Context, Error};
use stencil::TemplateFile;

use crate::clipboard;
use crate::config::Config;

pub fn run(config: &Config, name: Option<&str>, to_stdout: bool) -> Result<(), Error> {
    match name {
        Some(name) => copy_template(config, name, to_stdout),
        None => clipboard::copy_stdin(),
    }
}

fn copy_template(config: &Config, name: &str, to_stdout: bool) -> Result<(), Error> {
    let path = config.template_path(name)?;
    let template =
        TemplateFile::load(&path).with_context(|| format!("could not load template '{name}'"))?;
    let library = stencil_funcs::default_library()?;
    let rendered = stencil::render(&template, config.vars(), &library)
        .with_context(|| format!("failed to render template '{name}'"))?;
    if to_stdout {
        io::stdout().write_all(rendered.as_bytes())?;
        io::stdout().flush()?;
    } else {
        clipboard::write(&rendered)?;
    }
    Ok(())
}
