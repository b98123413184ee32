/// This module defines the command-line interface.  Subcommands mirror the
/// lifecycle of a template: create, edit, list, render/copy, and the file
/// management verbs.
use std::path::PathBuf;

use clap::{arg, command, value_parser, Command};

pub(crate) fn make_command() -> Command {
    command!()
        .name("stencil")
        .max_term_width(120)
        .args([
            arg!(--config <PATH> "Alternative path to the config file")
                .long_help(
                    "Sets an alternative path to the config file.  By default the config \
                     file is loaded from $HOME/.stencil.yml and created with a commented \
                     default on first run.\n\n\
                     [env var: STENCIL_CONFIG_FILE]",
                )
                .value_parser(value_parser!(PathBuf))
                .global(true),
            arg!(-t --"template-dir" <DIR> "Location of the template directory")
                .long_help(
                    "Sets the directory the template files live in.  Defaults to \
                     $HOME/stencil; the directory is created if it does not exist.\n\n\
                     [env var: STENCIL_TEMPLATE_DIR]",
                )
                .value_parser(value_parser!(PathBuf))
                .global(true),
            arg!(template: [TEMPLATE] "Template to render and copy (shorthand for `stencil copy`)"),
        ])
        .subcommands([
            Command::new("copy")
                .visible_alias("load")
                .about("Render a template and copy it to the clipboard")
                .long_about(
                    "Renders a template against the default variables from the config \
                     file (the template's own vars win on conflict) and places the \
                     result on the system clipboard.  Without a template name, data \
                     from stdin is copied verbatim.",
                )
                .args([
                    arg!(template: [TEMPLATE] "Name of the template to render"),
                    arg!(--stdout "Print the rendered template instead of copying it"),
                ]),
            Command::new("show")
                .visible_alias("cat")
                .about("Print the raw template file")
                .arg(arg!(template: <TEMPLATE> "Name of the template to show")),
            Command::new("create")
                .visible_aliases(["add", "new"])
                .about("Create a new template from the commented starter")
                .arg(arg!(template: <TEMPLATE> "Name of the template to create")),
            Command::new("edit")
                .about("Open a template in your editor")
                .long_about(
                    "Opens a template in a text editor, creating it from the starter \
                     first if it does not exist.  The editor is taken from the \
                     --editor flag, the config file, $EDITOR, or falls back to nano.",
                )
                .args([
                    arg!(template: <TEMPLATE> "Name of the template to edit"),
                    arg!(-e --editor <EDITOR> "Editor to open the template with"),
                ]),
            Command::new("list")
                .visible_alias("ls")
                .about("List templates or tags (default when run without arguments)")
                .args([
                    arg!(--tags <TAGS> "Comma separated list of tags to filter by")
                        .value_delimiter(','),
                    arg!(--"tags-only" "List every tag used by the templates instead"),
                ]),
            Command::new("remove")
                .visible_aliases(["rm", "delete"])
                .about("Delete a template")
                .arg(arg!(template: <TEMPLATE> "Name of the template to remove")),
            Command::new("rename")
                .visible_alias("mv")
                .about("Rename a template")
                .args([
                    arg!(old: <OLD> "Current name of the template"),
                    arg!(new: <NEW> "New name for the template"),
                ]),
        ])
        .about("stencil renders templated snippets and puts them on your clipboard.")
        .after_help(
            "Running `stencil` without arguments lists the templates; \
             `stencil NAME` renders and copies NAME.",
        )
}
