use shadewire_frame::keys::DATA_KEYS;

use crate::cmd::KeysArgs;
use crate::exit::{CliResult, SUCCESS};
use crate::output::{print_keys, OutputFormat};

pub fn run(args: KeysArgs, format: OutputFormat) -> CliResult<i32> {
    let filter = args.filter.map(|f| f.to_ascii_lowercase());
    let keys: Vec<_> = DATA_KEYS
        .iter()
        .filter(|key| match &filter {
            Some(needle) => key.name.to_ascii_lowercase().contains(needle),
            None => true,
        })
        .collect();

    print_keys(&keys, format);
    Ok(SUCCESS)
}
