mod action;
mod config;
mod github;
mod http;
mod logger;
mod selector;

use anyhow::Result;
use config::Config;
use github::GithubClient;
use selector::{Failure, Outcome};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    logger::init()?;

    let config = Config::load();
    let client = GithubClient::new(&config.api_url, config.token.clone());

    let outputs = match selector::run(&config, &client).await {
        Outcome::Succeeded(outputs) => outputs,
        Outcome::Failed(Failure { kind, message }) => {
            log::debug!("Run failed: {:?}", kind);
            action::set_failed(&message);
            return Ok(ExitCode::FAILURE);
        }
    };

    log::info!("Selected release {}", outputs.release);
    if let Err(err) = action::set_outputs(&outputs, config.output_file.as_deref()) {
        action::set_failed(format!("{:#}", err));
        return Ok(ExitCode::FAILURE);
    }

    Ok(ExitCode::SUCCESS)
}
