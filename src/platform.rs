// SPDX-License-Identifier: MPL-2.0
//! Hand-off to the desktop environment.

use crate::error::{Error, Result};
use std::process::Command;

/// Opens `url` in the default browser.
///
/// The opener process is spawned and not waited on.
pub fn open_url(url: &str) -> Result<()> {
    let url = url.trim();
    if url.is_empty() {
        return Err(Error::Io("no URL to open".to_string()));
    }

    opener(url)
        .spawn()
        .map(|_| ())
        .map_err(|e| Error::Io(format!("cannot open {url}: {e}")))
}

#[cfg(target_os = "windows")]
fn opener(url: &str) -> Command {
    let mut command = Command::new("cmd");
    // The empty argument is the window title expected by `start`.
    command.args(["/C", "start", "", url]);
    command
}

#[cfg(target_os = "macos")]
fn opener(url: &str) -> Command {
    let mut command = Command::new("open");
    command.arg(url);
    command
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
fn opener(url: &str) -> Command {
    let mut command = Command::new("xdg-open");
    command.arg(url);
    command
}
