pub mod command;

use crate::selector::ReleaseOutputs;
use anyhow::{bail, Context, Result};
use command::WorkflowCommand;
use std::{fmt::Display, fs::OpenOptions, io::Write, path::Path};

const DELIMITER_PREFIX: &str = "ghadelimiter_";

/// All five entries go out in one write, each as a `name<<delimiter` heredoc.
pub fn set_outputs(outputs: &ReleaseOutputs, output_file: Option<&Path>) -> Result<()> {
    let Some(path) = output_file else {
        for line in command_entries(outputs) {
            println!();
            println!("{}", line);
        }
        return Ok(());
    };

    let delimiter = format!("{}{}", DELIMITER_PREFIX, uuid::Uuid::new_v4());
    let content = file_entries(outputs, &delimiter)?;

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Cannot open output file {}", path.display()))?;
    file.write_all(content.as_bytes())
        .with_context(|| format!("Cannot write output file {}", path.display()))?;

    Ok(())
}

fn command_entries(outputs: &ReleaseOutputs) -> Vec<String> {
    outputs
        .entries()
        .iter()
        .map(|(name, value)| {
            WorkflowCommand::new("set-output", value)
                .property("name", name)
                .to_string()
        })
        .collect()
}

fn file_entries(outputs: &ReleaseOutputs, delimiter: &str) -> Result<String> {
    let mut content = String::new();

    for (name, value) in outputs.entries() {
        if value.contains(delimiter) {
            bail!("Unexpected input: value of output {} contains the delimiter", name);
        }
        content.push_str(&format!("{name}<<{delimiter}\n{value}\n{delimiter}\n"));
    }

    Ok(content)
}

pub fn set_failed(message: impl Display) {
    log::error!("{}", message);
}
