use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Error};
use stencil::TemplateFile;

use crate::config::Config;

pub fn run(config: &Config, tags: &[String], tags_only: bool) -> Result<(), Error> {
    let dir = config.template_dir()?;
    let mut names = BTreeSet::new();
    let mut seen_tags = BTreeSet::new();

    let entries = fs::read_dir(&dir)
        .with_context(|| format!("could not read template directory '{}'", dir.display()))?;
    for entry in entries {
        let path = entry?.path();
        if !is_template_file(&path) {
            continue;
        }
        let name = match path.file_stem().and_then(|stem| stem.to_str()) {
            Some(name) => name.to_string(),
            None => continue,
        };
        if tags_only || !tags.is_empty() {
            let template = TemplateFile::load(&path)
                .with_context(|| format!("could not load template '{name}' to read its tags"))?;
            if tags_only {
                seen_tags.extend(template.tags);
            } else if template.tags.iter().any(|tag| tags.contains(tag)) {
                names.insert(name);
            }
        } else {
            names.insert(name);
        }
    }

    if tags_only {
        for tag in seen_tags {
            println!("{tag}");
        }
    } else {
        for name in names {
            println!("{name}");
        }
    }
    Ok(())
}

fn is_template_file(path: &Path) -> bool {
    path.is_file()
        && matches!(
            path.extension().and_then(|ext| ext.to_str()),
            Some("yml" | "yaml")
        )
}
