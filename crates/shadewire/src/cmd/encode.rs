use shadewire_frame::{
    keys, motor, CommandFrame, DataKeyType, FrameData, FrameEncoder, Header,
};

use crate::cmd::{EncodeArgs, EncodeCommand, RawArgs};
use crate::exit::{frame_error, CliError, CliResult, SUCCESS, USAGE};
use crate::hex::parse_hex;
use crate::output::{print_encoded, OutputFormat};

pub fn run(args: EncodeArgs, format: OutputFormat) -> CliResult<i32> {
    let frame = build_frame(&args.frame)?;
    let bytes = FrameEncoder::new()
        .encode(&frame)
        .map_err(|err| frame_error("encode failed", err))?;
    print_encoded(&bytes, format);
    Ok(SUCCESS)
}

fn build_frame(command: &EncodeCommand) -> CliResult<CommandFrame> {
    Ok(match command {
        EncodeCommand::Up(args) => {
            CommandFrame::device_move_req(parse_hex(&args.channel)?, motor::UP)
        }
        EncodeCommand::Down(args) => {
            CommandFrame::device_move_req(parse_hex(&args.channel)?, motor::DOWN)
        }
        EncodeCommand::Position(args) => {
            CommandFrame::device_set_position_req(parse_hex(&args.channel)?, args.percent)
        }
        EncodeCommand::List => CommandFrame::device_list_req(),
        EncodeCommand::Para(args) => CommandFrame::device_para_req(parse_hex(&args.channel)?),
        EncodeCommand::Raw(args) => raw_frame(args)?,
    })
}

fn raw_frame(args: &RawArgs) -> CliResult<CommandFrame> {
    let header = match args.action {
        Some(action) => Header::with_action(args.flag, args.cmd, action),
        None => Header::new(args.flag, args.cmd),
    };

    let mut data = Vec::with_capacity(args.fields.len());
    for spec in &args.fields {
        data.push(parse_field(spec)?);
    }
    Ok(CommandFrame::with_data(header, args.frame_type, data))
}

fn parse_field(spec: &str) -> CliResult<FrameData> {
    let (name, hex) = spec
        .split_once('=')
        .ok_or_else(|| CliError::new(USAGE, format!("field must be NAME=HEX, got: {spec}")))?;
    let key = keys::DATA_KEYS
        .iter()
        .find(|key| key.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| CliError::new(USAGE, format!("unknown data key: {name}")))?;
    let value = parse_hex(hex)?;

    match key.kind {
        DataKeyType::Byte => {
            if value.len() != 1 {
                return Err(CliError::new(
                    USAGE,
                    format!("{} takes exactly one byte, got {}", key.name, value.len()),
                ));
            }
            Ok(FrameData::byte(*key, value[0]))
        }
        DataKeyType::Bytes => Ok(FrameData::bytes(*key, value)),
        kind => Err(CliError::new(
            USAGE,
            format!("{} is {kind:?}-typed and cannot be sent to a hub", key.name),
        )),
    }
}
