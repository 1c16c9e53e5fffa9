//! Implementation of `koine decode`.

use std::process::ExitCode;

use comfy_table::{Cell, Table, presets::UTF8_FULL_CONDENSED};
use koine_morph::{CodeContext, decode};

use crate::cli::{
    args::DecodeCommand,
    output::{print_json, subheader},
};

/// Decodes one morphology code and prints its attributes.
pub fn run(cmd: &DecodeCommand) -> ExitCode {
    let context = CodeContext {
        word: "",
        word_index: cmd.word_index,
    };
    let attrs = match decode(&cmd.code, cmd.dialect, context) {
        Ok(attrs) => attrs,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if cmd.json {
        return print_json(&attrs);
    }

    println!("{}", subheader(&format!("{} ({})", cmd.code, cmd.dialect)));
    println!("   {}", attrs.parsing());
    println!();

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["Property", "Value"]);
    for property in attrs.properties() {
        table.add_row(vec![Cell::new(property.key()), Cell::new(property.value())]);
    }
    println!("{table}");

    ExitCode::SUCCESS
}
