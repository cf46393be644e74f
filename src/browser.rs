//! Open result links in the user's browser.
//!
//! The browser runs as a separate, detached process: it receives the URL and
//! nothing else, and has no channel back to the finder.

use std::process::{Command, Stdio};
use std::thread;

use anyhow::{Context, Result, bail};

use crate::search::parse_endpoint;

#[cfg(target_os = "macos")]
fn opener_command(url: &str) -> Command {
	let mut command = Command::new("open");
	command.arg(url);
	command
}

#[cfg(target_os = "windows")]
fn opener_command(url: &str) -> Command {
	let mut command = Command::new("cmd");
	command.args(["/C", "start", "", url]);
	command
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn opener_command(url: &str) -> Command {
	let mut command = Command::new("xdg-open");
	command.arg(url);
	command
}

/// Check that `link` is something we are willing to hand to a browser.
pub fn validate_link(link: &str) -> Result<String> {
	if link.trim().is_empty() {
		bail!("this location has no link");
	}
	let url = parse_endpoint(link).with_context(|| format!("refusing to open '{link}'"))?;
	Ok(url.to_string())
}

/// Launch the platform opener for `link` without waiting for it.
pub fn open_link(link: &str) -> Result<()> {
	let url = validate_link(link)?;
	let mut child = opener_command(&url)
		.stdin(Stdio::null())
		.stdout(Stdio::null())
		.stderr(Stdio::null())
		.spawn()
		.with_context(|| format!("failed to launch a browser for {url}"))?;
	// Reap the opener once it exits so it does not linger as a zombie.
	thread::spawn(move || {
		let _ = child.wait();
	});
	log::info!("opened {url} in the browser");
	Ok(())
}
