use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about)]
pub struct Arguments {
    #[arg(short = 'v', long = None, env = "STOPWATCH_VERBOSITY", action = clap::ArgAction::Count)]
    pub verbosity: u8,

    /// Pretty-print the laps as indented JSON.
    #[arg(short, long, env = "STOPWATCH_PRETTY")]
    pub pretty: bool,
}
