use crate::action::command::WorkflowCommand;
use anyhow::Result;
use log::{Level, LevelFilter, Log, Metadata, Record};
use simple_logger::SimpleLogger;
use std::env;

const CRATE: &str = env!("CARGO_CRATE_NAME");

pub fn init() -> Result<()> {
    let debug = env::var("RUNNER_DEBUG").is_ok_and(|value| value == "1");

    if env::var("GITHUB_ACTIONS").is_ok_and(|value| value == "true") {
        log::set_boxed_logger(Box::new(WorkflowLogger))?;
        log::set_max_level(LevelFilter::Debug);
        return Ok(());
    }

    let level = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    SimpleLogger::new()
        .with_level(LevelFilter::Warn)
        .with_module_level(CRATE, level)
        .init()?;

    Ok(())
}

struct WorkflowLogger;

impl Log for WorkflowLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.target().starts_with(CRATE) || metadata.level() <= Level::Warn
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            println!("{}", render(record.level(), &record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

fn render(level: Level, message: &str) -> String {
    let name = match level {
        Level::Error => "error",
        Level::Warn => "warning",
        Level::Info => return message.to_owned(),
        Level::Debug | Level::Trace => "debug",
    };

    WorkflowCommand::new(name, message).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_levels_to_workflow_commands() {
        assert_eq!(render(Level::Error, "boom"), "::error::boom");
        assert_eq!(render(Level::Warn, "careful"), "::warning::careful");
        assert_eq!(
            render(Level::Debug, "After draft filter: 1 releases"),
            "::debug::After draft filter: 1 releases"
        );
        assert_eq!(render(Level::Trace, "deep"), "::debug::deep");
    }

    #[test]
    fn should_print_info_as_is() {
        assert_eq!(render(Level::Info, "Selecting release"), "Selecting release");
    }

    #[test]
    fn should_escape_multiline_messages() {
        assert_eq!(render(Level::Error, "first\nsecond"), "::error::first%0Asecond");
    }

    #[test]
    fn should_keep_dependency_chatter_out() {
        let logger = WorkflowLogger;
        let ours = Metadata::builder().target(CRATE).level(Level::Debug).build();
        let theirs = Metadata::builder().target("hyper::proto").level(Level::Debug).build();
        let their_warning = Metadata::builder()
            .target("reqwest::connect")
            .level(Level::Warn)
            .build();

        assert!(logger.enabled(&ours));
        assert!(!logger.enabled(&theirs));
        assert!(logger.enabled(&their_warning));
    }
}
