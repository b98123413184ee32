use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Error};
use clap::ArgMatches;
use serde::{Deserialize, Serialize};

const CONFIG_FILE_NAME: &str = ".stencil.yml";
const TEMPLATE_DIR_NAME: &str = "stencil";
const DEFAULT_EDITOR: &str = "nano";

const DEFAULT_CONFIG: &str = "\
# stencil configuration.
#
# editor: vi
# template-dir: /home/me/snippets
#
# Variables available to every template.  A template's own vars win on
# conflict.
#
# vars:
#   name: Ada Lovelace
vars: {}
";

/// Holds the on-disk configuration plus command line overrides.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Config {
    editor: Option<String>,
    template_dir: Option<PathBuf>,
    vars: BTreeMap<String, String>,
}

impl Config {
    /// Loads the configuration and applies environment and command line
    /// overrides.  A missing config file is created with a commented
    /// default on first run.
    pub fn load(matches: &ArgMatches) -> Result<Config, Error> {
        let path = config_path(matches)?;
        let mut config = if path.exists() {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("unable to read config file '{}'", path.display()))?;
            serde_yaml::from_str(&contents)
                .with_context(|| format!("invalid config file '{}'", path.display()))?
        } else {
            fs::write(&path, DEFAULT_CONFIG)
                .with_context(|| format!("unable to write config file '{}'", path.display()))?;
            eprintln!("config file created at '{}'", path.display());
            Config::default()
        };
        config.update_from_env();
        config.update_from_matches(matches);
        Ok(config)
    }

    fn update_from_env(&mut self) {
        if let Ok(editor) = env::var("STENCIL_EDITOR") {
            self.editor = Some(editor);
        }
        if let Ok(dir) = env::var("STENCIL_TEMPLATE_DIR") {
            self.template_dir = Some(PathBuf::from(dir));
        }
    }

    fn update_from_matches(&mut self, matches: &ArgMatches) {
        if let Some(dir) = matches.get_one::<PathBuf>("template-dir") {
            self.template_dir = Some(dir.clone());
        }
    }

    /// The default variables every render starts from.
    pub fn vars(&self) -> &BTreeMap<String, String> {
        &self.vars
    }

    /// The editor to open templates with: config file (or STENCIL_EDITOR),
    /// then $EDITOR, then nano.
    pub fn editor(&self) -> String {
        self.editor
            .clone()
            .or_else(|| env::var("EDITOR").ok())
            .unwrap_or_else(|| DEFAULT_EDITOR.to_string())
    }

    /// The directory template files live in.
    pub fn template_dir(&self) -> Result<PathBuf, Error> {
        match self.template_dir {
            Some(ref dir) => Ok(dir.clone()),
            None => Ok(home_dir()?.join(TEMPLATE_DIR_NAME)),
        }
    }

    /// The file a template of that name is stored at.
    pub fn template_path(&self, name: &str) -> Result<PathBuf, Error> {
        Ok(self.template_dir()?.join(format!("{name}.yml")))
    }

    /// Creates the template directory if it does not exist yet.
    pub fn ensure_template_dir(&self) -> Result<(), Error> {
        let dir = self.template_dir()?;
        if !dir.exists() {
            fs::create_dir_all(&dir).with_context(|| {
                format!("could not create template directory '{}'", dir.display())
            })?;
            eprintln!("template directory created at '{}'", dir.display());
        }
        Ok(())
    }
}

fn config_path(matches: &ArgMatches) -> Result<PathBuf, Error> {
    if let Some(path) = matches.get_one::<PathBuf>("config") {
        return Ok(path.clone());
    }
    if let Ok(path) = env::var("STENCIL_CONFIG_FILE") {
        return Ok(PathBuf::from(path));
    }
    Ok(home_dir()?.join(CONFIG_FILE_NAME))
}

fn home_dir() -> Result<PathBuf, Error> {
    home::home_dir().ok_or_else(|| anyhow!("could not determine the home directory"))
}
