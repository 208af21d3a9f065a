use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::exit::CliResult;
use crate::output::OutputFormat;

pub mod decode;
pub mod encode;
pub mod keys;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Decode a captured frame and print its contents.
    Decode(DecodeArgs),
    /// Build a frame and print the wire bytes.
    Encode(EncodeArgs),
    /// List the compiled-in data key registry.
    Keys(KeysArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Decode(args) => decode::run(args, format),
        Command::Encode(args) => encode::run(args, format),
        Command::Keys(args) => keys::run(args, format),
        Command::Version(args) => version::run(args),
    }
}

#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Frame bytes as hex. Whitespace, colons, and a 0x prefix are fine.
    #[arg(conflicts_with = "file")]
    pub hex: Option<String>,
    /// Read raw frame bytes from a file instead.
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct EncodeArgs {
    #[command(subcommand)]
    pub frame: EncodeCommand,
}

#[derive(Subcommand, Debug)]
pub enum EncodeCommand {
    /// Raise a shade fully.
    Up(ChannelArgs),
    /// Lower a shade fully.
    Down(ChannelArgs),
    /// Move a shade to a target position.
    Position(PositionArgs),
    /// Query the device list behind a hub.
    List,
    /// Query a device's internal parameters.
    Para(ChannelArgs),
    /// Build a frame from explicit header values and fields.
    Raw(RawArgs),
}

#[derive(Args, Debug)]
pub struct ChannelArgs {
    /// Device address/channel as hex.
    #[arg(long, value_name = "HEX")]
    pub channel: String,
}

#[derive(Args, Debug)]
pub struct PositionArgs {
    /// Device address/channel as hex.
    #[arg(long, value_name = "HEX")]
    pub channel: String,
    /// Target position, 0 (open) to 100 (closed).
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub percent: u8,
}

#[derive(Args, Debug)]
pub struct RawArgs {
    /// Header flag byte.
    #[arg(long, default_value_t = 0)]
    pub flag: u8,
    /// Header cmd value.
    #[arg(long, default_value_t = 144)]
    pub cmd: u16,
    /// Header action byte.
    #[arg(long)]
    pub action: Option<u8>,
    /// Body frame-type id.
    #[arg(long, value_name = "ID")]
    pub frame_type: u16,
    /// Body field as NAME=HEX; repeatable, emitted in order.
    #[arg(long = "field", value_name = "NAME=HEX")]
    pub fields: Vec<String>,
}

#[derive(Args, Debug, Default)]
pub struct KeysArgs {
    /// Show only keys whose name contains this substring (case-insensitive).
    #[arg(long)]
    pub filter: Option<String>,
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}
