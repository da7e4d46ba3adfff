//! Interactive credential prompts.

use std::io::{self, BufRead, Write};

use anyhow::{bail, Context, Result};
use subport_lib::Credentials;

use crate::terminal::{read_masked_line, stdin_is_interactive};

pub const PASSWORD_PROMPT: &str = "Enter password (input hidden for security): ";

/// Which account a run is asking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountRole {
    ExportFrom,
    ImportTo,
}

impl AccountRole {
    pub fn username_prompt(self) -> &'static str {
        match self {
            AccountRole::ExportFrom => "Enter Reddit username to export from: ",
            AccountRole::ImportTo => "Enter Reddit username to import to: ",
        }
    }
}

/// Ask for a username and a password, once each.
///
/// On a terminal the password is read with echo disabled. When stdin is piped
/// both values are taken from consecutive input lines.
pub fn prompt_credentials(role: AccountRole) -> Result<Credentials> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    let username = prompt_line(&mut input, role.username_prompt())?;
    let username = username.trim().to_string();
    if username.is_empty() {
        bail!("no username entered");
    }

    let password = if stdin_is_interactive() {
        print_prompt(PASSWORD_PROMPT)?;
        read_masked_line().context("failed to read password")?
    } else {
        prompt_line(&mut input, PASSWORD_PROMPT)?
    };
    println!();

    Ok(Credentials::new(username, password))
}

fn print_prompt(prompt: &str) -> Result<()> {
    let mut stdout = io::stdout();
    write!(stdout, "{}", prompt)?;
    stdout.flush()?;
    Ok(())
}

fn prompt_line<R: BufRead>(input: &mut R, prompt: &str) -> Result<String> {
    print_prompt(prompt)?;
    read_line(input)
}

fn read_line<R: BufRead>(input: &mut R) -> Result<String> {
    let mut line = String::new();
    let read = input.read_line(&mut line).context("failed to read input")?;
    if read == 0 {
        bail!("input closed before a value was entered");
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
