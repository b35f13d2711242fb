mod cli;
mod command;

use crate::cli::Arguments;
use crate::command::Command;
use clap::Parser;
use std::io::{self, BufRead, Write};
use stopwatch::StopWatch;
use tracing_log::LogTracer;

fn main() {
    let arguments = Arguments::parse();
    set_log_level(&arguments).expect("Failed to configure logging");

    tracing::debug!(?arguments, "starting stopwatch");

    if let Err(e) = run(&arguments, io::stdin().lock(), io::stdout().lock()) {
        tracing::error!(%e, "Unable to run the stopwatch");
    }
}

fn set_log_level(arguments: &Arguments) -> anyhow::Result<()> {
    LogTracer::init()?;

    let level = match arguments.verbosity {
        0 => tracing::Level::ERROR,
        1 => tracing::Level::WARN,
        2 => tracing::Level::INFO,
        3 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(level)
        .with_file(true)
        .with_line_number(true)
        .with_thread_ids(true)
        .with_writer(io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    Ok(())
}

fn run(arguments: &Arguments, input: impl BufRead, mut output: impl Write) -> anyhow::Result<()> {
    let watch = StopWatch::new();

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                tracing::warn!(%e, "Ignoring input");
                continue;
            }
        };

        match command {
            Command::Start => watch.start(),
            Command::Stop => watch.stop(),
            Command::Lap => watch.lap(),
            Command::Clear => watch.clear(),
            Command::Laps => {
                let laps = watch.laps();
                if arguments.pretty {
                    serde_json::to_writer_pretty(&mut output, &laps)?;
                } else {
                    serde_json::to_writer(&mut output, &laps)?;
                }
                writeln!(output)?;
            }
            Command::Status => {
                let state = if watch.is_running() { "running" } else { "stopped" };
                writeln!(output, "{state} ({} laps)", watch.lap_count())?;
            }
            Command::Quit => break,
        }

        output.flush()?;
    }

    Ok(())
}
