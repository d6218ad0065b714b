pub mod github_client;
mod handler;
mod release;
mod repository;

pub use github_client::GithubClient;
pub use release::Release;
pub use repository::RepositoryRef;

use crate::http;
use thiserror::Error;

pub trait ReleaseSource {
    async fn list_releases(&self, repository: &RepositoryRef) -> Result<Vec<Release>, Error>;
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid repository format. Owner or repo is empty.")]
    InvalidRepository,
    #[error(transparent)]
    Http(#[from] http::Error),
}
