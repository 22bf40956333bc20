use std::env;
use std::ffi::OsString;
use std::io::{self, Write};

use log::debug;
use thiserror::Error;

pub const NAME_VARIABLE: &str = "USER_NAME";
pub const DEFAULT_NAME: &str = "John";

#[derive(Error, Debug)]
pub enum GreetError {
    #[error("Output error: {0}")]
    Output(#[from] io::Error),
}

/// Picks the name to greet.
///
/// A present value is used as is, even when empty. Only a missing variable
/// falls back to [`DEFAULT_NAME`]. Values that are not valid UTF-8 are decoded
/// lossily.
pub fn resolve_name(value: Option<OsString>) -> String {
    match value {
        Some(value) => {
            debug!("Name taken from {NAME_VARIABLE}.");
            value.to_string_lossy().into_owned()
        }
        None => {
            debug!("{NAME_VARIABLE} not set, using default name {DEFAULT_NAME}.");
            DEFAULT_NAME.to_string()
        }
    }
}

pub fn name_from_env() -> String {
    resolve_name(env::var_os(NAME_VARIABLE))
}

pub fn format_greeting(name: &str) -> String {
    format!("Hello, {name}! Welcome to the Matrix!")
}

pub fn write_greeting<W: Write>(writer: &mut W, name: &str) -> Result<(), GreetError> {
    writeln!(writer, "{}", format_greeting(name))?;
    writer.flush()?;
    Ok(())
}

/// Greets the name from the process environment on standard output.
///
/// # Errors
///
/// Returns [`GreetError::Output`] when standard output can't be written or flushed.
pub fn run() -> Result<(), GreetError> {
    let name = name_from_env();
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_greeting(&mut handle, &name)
}
