//! Completions command implementation
//!
//! Handles the `bundlesize completions` command which generates
//! shell completion scripts for bash, zsh, fish, etc.

use clap::Command;
use clap_complete::{generate, Shell};
use std::io::Write;

/// Generate a shell completion script for `cmd` into `out`
///
/// `cmd` is the CLI definition, usually `Cli::command()` from the binary.
///
/// # Examples
///
/// ```bash
/// # Bash
/// bundlesize completions bash > /etc/bash_completion.d/bundlesize
///
/// # Zsh
/// bundlesize completions zsh > ~/.zfunc/_bundlesize
///
/// # Fish
/// bundlesize completions fish > ~/.config/fish/completions/bundlesize.fish
/// ```
pub fn cmd_completions(shell: Shell, cmd: &mut Command, out: &mut dyn Write) {
    let bin_name = cmd.get_name().to_string();
    generate(shell, cmd, bin_name, out);
}
