use std::io::{self, IsTerminal, Read};

use anyhow::{bail, Context, Error};

/// Places text on the system clipboard.
pub fn write(text: &str) -> Result<(), Error> {
    let mut clipboard =
        arboard::Clipboard::new().context("could not access the system clipboard")?;
    clipboard
        .set_text(text.to_string())
        .context("could not write to the system clipboard")?;
    Ok(())
}

/// Copies whatever comes in on stdin to the clipboard.
pub fn copy_stdin() -> Result<(), Error> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        bail!("stdin is a terminal; pass a template name or pipe data in");
    }
    let mut data = String::new();
    stdin
        .lock()
        .read_to_string(&mut data)
        .context("failed to read data from stdin")?;
    write(&data)
}
