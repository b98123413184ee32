use anyhow::Error;
use clap::ArgMatches;

mod cli;
mod clipboard;
mod commands;
mod config;

use config::Config;

fn execute() -> Result<i32, Error> {
    let matches = cli::make_command().get_matches();
    let config = Config::load(&matches)?;
    config.ensure_template_dir()?;

    match matches.subcommand() {
        Some(("copy", sub)) => commands::copy::run(
            &config,
            sub.get_one::<String>("template").map(String::as_str),
            sub.get_flag("stdout"),
        )?,
        Some(("show", sub)) => commands::show::run(&config, required(sub, "template"))?,
        Some(("create", sub)) => commands::create::run(&config, required(sub, "template"))?,
        Some(("edit", sub)) => commands::edit::run(
            &config,
            required(sub, "template"),
            sub.get_one::<String>("editor").map(String::as_str),
        )?,
        Some(("list", sub)) => {
            let tags: Vec<String> = sub
                .get_many::<String>("tags")
                .unwrap_or_default()
                .cloned()
                .collect();
            commands::list::run(&config, &tags, sub.get_flag("tags-only"))?
        }
        Some(("remove", sub)) => commands::remove::run(&config, required(sub, "template"))?,
        Some(("rename", sub)) => {
            commands::rename::run(&config, required(sub, "old"), required(sub, "new"))?
        }
        Some((unknown, _)) => unreachable!("unhandled subcommand {unknown}"),
        // no subcommand: a bare name means copy, nothing at all means list
        None => match matches.get_one::<String>("template") {
            Some(name) => commands::copy::run(&config, Some(name), false)?,
            None => commands::list::run(&config, &[], false)?,
        },
    }
    Ok(0)
}

fn required<'a>(matches: &'a ArgMatches, id: &str) -> &'a str {
    matches.get_one::<String>(id).expect("required arg").as_str()
}

fn print_error(err: &Error) {
    eprintln!("error: {err}");
    let mut source_opt = err.source();
    while let Some(source) = source_opt {
        eprintln!();
        eprintln!("caused by: {source}");
        if let Some(engine_err) = source.downcast_ref::<minijinja::Error>() {
            if engine_err.name().is_some() {
                eprintln!("{}", engine_err.display_debug_info());
            }
        }
        source_opt = source.source();
    }
}

fn main() {
    match execute() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            print_error(&err);
            std::process::exit(1);
        }
    }
}
