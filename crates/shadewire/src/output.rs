use std::io::{IsTerminal, Write};

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use serde::Serialize;
use shadewire_frame::{frame_types, CommandFrame, DataKey, FieldValue};

use crate::hex::format_hex;

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
    Raw,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

#[derive(Serialize)]
struct FrameOutput {
    flag: u8,
    cmd: u16,
    action: Option<u8>,
    frame_type: Option<u16>,
    frame_type_name: Option<&'static str>,
    sequence: Option<u16>,
    data: Vec<FieldOutput>,
}

#[derive(Serialize)]
struct FieldOutput {
    id: u16,
    key: &'static str,
    kind: String,
    value: String,
}

pub fn print_frame(frame: &CommandFrame, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let out = FrameOutput {
                flag: frame.header.flag,
                cmd: frame.header.cmd,
                action: frame.header.action,
                frame_type: frame.frame_type,
                frame_type_name: frame.frame_type.map(frame_types::name),
                sequence: frame.sequence,
                data: frame
                    .data
                    .iter()
                    .map(|field| FieldOutput {
                        id: field.key.id,
                        key: field.key.name,
                        kind: format!("{:?}", field.key.kind),
                        value: render_value(&field.value),
                    })
                    .collect(),
            };
            println!(
                "{}",
                serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
            );
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["FIELD", "VALUE"]);
            table.add_row(vec!["flag".to_string(), frame.header.flag.to_string()]);
            table.add_row(vec!["cmd".to_string(), frame.header.cmd.to_string()]);
            if let Some(action) = frame.header.action {
                table.add_row(vec!["action".to_string(), action.to_string()]);
            }
            if let Some(frame_type) = frame.frame_type {
                table.add_row(vec![
                    "frame_type".to_string(),
                    format!("{frame_type} ({})", frame_types::name(frame_type)),
                ]);
            }
            if let Some(sequence) = frame.sequence {
                table.add_row(vec!["sequence".to_string(), sequence.to_string()]);
            }
            for field in &frame.data {
                table.add_row(vec![field.key.name.to_string(), render_value(&field.value)]);
            }
            println!("{table}");
        }
        // A decoded frame has no single raw form, so Raw falls back to the
        // one-line rendering.
        OutputFormat::Pretty | OutputFormat::Raw => {
            let mut line = format!("flag={} cmd={}", frame.header.flag, frame.header.cmd);
            if let Some(action) = frame.header.action {
                line.push_str(&format!(" action={action}"));
            }
            if let Some(frame_type) = frame.frame_type {
                line.push_str(&format!(
                    " frame_type={frame_type} ({})",
                    frame_types::name(frame_type)
                ));
            }
            if let Some(sequence) = frame.sequence {
                line.push_str(&format!(" sequence={sequence}"));
            }
            println!("{line}");
            for field in &frame.data {
                println!("  {}={}", field.key.name, render_value(&field.value));
            }
        }
    }
}

#[derive(Serialize)]
struct EncodedOutput {
    size: usize,
    hex: String,
}

pub fn print_encoded(data: &[u8], format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let out = EncodedOutput {
                size: data.len(),
                hex: format_hex(data),
            };
            println!(
                "{}",
                serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
            );
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["SIZE", "HEX"])
                .add_row(vec![data.len().to_string(), format_hex(data)]);
            println!("{table}");
        }
        OutputFormat::Pretty => {
            println!("{} bytes: {}", data.len(), format_hex(data));
        }
        OutputFormat::Raw => print_raw(data),
    }
}

#[derive(Serialize)]
struct KeyOutput {
    id: u16,
    name: &'static str,
    kind: String,
}

pub fn print_keys(keys: &[&DataKey], format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let out: Vec<_> = keys
                .iter()
                .map(|key| KeyOutput {
                    id: key.id,
                    name: key.name,
                    kind: format!("{:?}", key.kind),
                })
                .collect();
            println!(
                "{}",
                serde_json::to_string(&out).unwrap_or_else(|_| "[]".to_string())
            );
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["ID", "NAME", "TYPE"]);
            for key in keys {
                table.add_row(vec![
                    key.id.to_string(),
                    key.name.to_string(),
                    format!("{:?}", key.kind),
                ]);
            }
            println!("{table}");
        }
        OutputFormat::Pretty | OutputFormat::Raw => {
            for key in keys {
                println!("{:>5}  {:<28} {:?}", key.id, key.name, key.kind);
            }
        }
    }
}

pub fn print_raw(data: &[u8]) {
    let mut out = std::io::stdout();
    let _ = out.write_all(data);
    let _ = out.flush();
}

fn render_value(value: &FieldValue) -> String {
    match value {
        FieldValue::Text(text) => text.clone(),
        FieldValue::Byte(value) | FieldValue::Uint8(value) => value.to_string(),
        FieldValue::Uint16(value) => value.to_string(),
        FieldValue::Uint32(value) => value.to_string(),
        FieldValue::Bytes(bytes) => format_hex(bytes),
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;

    use super::*;

    #[test]
    fn render_value_covers_every_shape() {
        assert_eq!(render_value(&FieldValue::Text("hub".to_string())), "hub");
        assert_eq!(render_value(&FieldValue::Byte(16)), "16");
        assert_eq!(render_value(&FieldValue::Uint8(7)), "7");
        assert_eq!(render_value(&FieldValue::Uint16(8880)), "8880");
        assert_eq!(render_value(&FieldValue::Uint32(70000)), "70000");
        assert_eq!(
            render_value(&FieldValue::Bytes(Bytes::from_static(&[0xDE, 0xAD]))),
            "dead"
        );
    }
}
