// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! CLI entry point: `vm <filename>`.
//!
//! Internal diagnostic events (program load, dispatch trace) go to
//! standard error via `tracing`, gated behind `RUST_LOG`; the mandated
//! fault diagnostic on a failing run goes to standard output, per the
//! format's own I/O contract, and is not routed through `tracing` at all.

use std::path::Path;
use std::process::ExitCode;

use nox_vm::error::{ArgsError, VmError};
use nox_vm::io::StdConsole;
use nox_vm::{Engine, Program};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    match run() {
        Ok(code) => exit_code(code),
        Err(err) => {
            println!("{err}");
            exit_code(-1)
        }
    }
}

fn run() -> Result<i64, VmError> {
    let mut args = std::env::args_os().skip(1);
    let (Some(filename), None) = (args.next(), args.next()) else {
        return Err(ArgsError::WrongArgCount.into());
    };

    let program = Program::load(Path::new(&filename))?;
    tracing::info!(n = program.n, entrypoint = program.entrypoint, globals = program.globals, "loaded");

    let mut engine = Engine::new(program.globals);
    let mut console = StdConsole::default();
    let code = engine.run(&program, &mut console)?;
    Ok(code)
}

/// Truncate to `u8` the way a POSIX host's exit status does (`code & 0xFF`).
fn exit_code(code: i64) -> ExitCode {
    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    let byte = (code & 0xFF) as u8;
    ExitCode::from(byte)
}
