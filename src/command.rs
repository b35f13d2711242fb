use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Stop,
    Lap,
    Clear,
    Laps,
    Status,
    Quit,
}

#[derive(Debug)]
pub struct CommandParseError(String);

impl Display for CommandParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown command {:?}", self.0)
    }
}

impl Error for CommandParseError {}

impl FromStr for Command {
    type Err = CommandParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "start" => Ok(Command::Start),
            "stop" => Ok(Command::Stop),
            "lap" => Ok(Command::Lap),
            "clear" => Ok(Command::Clear),
            "laps" => Ok(Command::Laps),
            "status" => Ok(Command::Status),
            "quit" | "exit" => Ok(Command::Quit),
            _ => Err(CommandParseError(s.trim().to_string())),
        }
    }
}
