use crate::github::{github_client::GithubClient, release::Release, Error};

pub struct ReleaseHandler<'a> {
    client: &'a GithubClient,
    owner: String,
    repo: String,
}

impl<'a> ReleaseHandler<'a> {
    pub fn new(
        client: &'a GithubClient,
        owner: impl Into<String>,
        repo: impl Into<String>,
    ) -> Self {
        ReleaseHandler {
            client,
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    pub async fn list(&self) -> Result<Vec<Release>, Error> {
        self.client.get_releases(&self.owner, &self.repo).await
    }
}
