mod filter;
mod outcome;
mod pattern;

pub use filter::FilterConfig;
pub use outcome::{Failure, FailureKind, Outcome, ReleaseOutputs};

use crate::{
    config::Config,
    github::{Release, ReleaseSource, RepositoryRef},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid {label} regex: {pattern}")]
    InvalidFilterPattern {
        label: &'static str,
        pattern: String,
        #[source]
        cause: fancy_regex::Error,
    },
    #[error("No releases found after applying filters")]
    NoMatchingRelease,
}

pub fn select(releases: Vec<Release>, filters: &FilterConfig) -> Result<Release, Error> {
    filters
        .apply(releases)
        .into_iter()
        .next()
        .ok_or(Error::NoMatchingRelease)
}

pub async fn run<S>(config: &Config, source: &S) -> Outcome
where
    S: ReleaseSource,
{
    let filters = FilterConfig::new(
        config.include_drafts,
        config.include_prereleases,
        &config.excludes,
        &config.includes,
    );

    log::debug!("Repository input: {}", config.repository);
    let repository = match config.repository.parse::<RepositoryRef>() {
        Ok(repository) => repository,
        Err(err) => return Outcome::failed(FailureKind::InvalidRepository, err),
    };
    log::debug!("Owner: {}, Repo: {}", repository.owner, repository.name);

    let releases = match source.list_releases(&repository).await {
        Ok(releases) => releases,
        Err(err) => return Outcome::failed(FailureKind::UpstreamFetch, err),
    };
    log::debug!("Fetched {} releases from API", releases.len());

    match select(releases, &filters) {
        Ok(release) => {
            log::debug!("Latest release: {}", release.tag_name);
            Outcome::Succeeded(ReleaseOutputs::from(&release))
        }
        Err(err) => Outcome::failed(FailureKind::NoMatchingRelease, err),
    }
}
