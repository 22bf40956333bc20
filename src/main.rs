//! # Matrix greeter
//!
//! Prints `Hello, {name}! Welcome to the Matrix!` to standard output.
//!
//! # Environment:
//!
//! - **USER_NAME** default: John
//! - **RUST_LOG** default: warn

use anyhow::{Context, Result};
use env_logger::{Builder, Env};

mod greeting;

fn logger_init() {
    let env = Env::default().filter_or("RUST_LOG", "warn");
    Builder::from_env(env).init();
}

fn main() -> Result<()> {
    logger_init();
    greeting::run().context("Writing greeting to standard output failed!")?;
    Ok(())
}
