// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use clap::Parser;
use gradanim_cmdr::gradanim::{CLIArg, Destination, try_run};
use gradanim_core::try_initialize_logging_global;

fn main() -> miette::Result<()> {
    // If no args are passed, the following line will fail, and help will be printed
    // thanks to `arg_required_else_help(true)` in the `CLIArg` struct.
    let cli_arg = CLIArg::parse();

    let enable_logging = cli_arg.global_options.enable_logging;
    if enable_logging {
        try_initialize_logging_global(tracing_core::LevelFilter::DEBUG)?;
        // % is Display, ? is Debug.
        tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);
    }

    let report = try_run(&cli_arg).inspect_err(|error| {
        tracing::error!(
            message = "Could not generate animation due to the following problem",
            error = ?error
        );
    })?;

    if let Destination::File(output_path) = &report.destination {
        println!("🌈 Wrote animation `{}` to {}", cli_arg.name, output_path.display());
    }

    if enable_logging {
        tracing::debug!(message = "Stop logging...");
    }

    Ok(())
}
