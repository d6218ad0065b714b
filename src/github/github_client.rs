use super::{release::Release, Error, ReleaseSource, RepositoryRef};
use crate::http::{
    self,
    response::{AsyncFrom, Response},
    Headers, HttpClient,
};
use reqwest::Url;

pub const DEFAULT_API_URL: &str = "https://api.github.com";

pub struct GithubClient {
    http: HttpClient,
    api_url: String,
    token: Option<String>,
}

impl GithubClient {
    pub fn new(api_url: impl Into<String>, token: Option<String>) -> Self {
        GithubClient {
            http: HttpClient::new(),
            api_url: api_url.into().trim_end_matches('/').to_owned(),
            token: token.filter(|token| !token.is_empty()),
        }
    }

    pub(super) async fn get_releases(
        &self,
        owner: &str,
        repo: &str,
    ) -> Result<Vec<Release>, Error> {
        let uri = self.releases_url(owner, repo)?;

        log::debug!("GET {}", uri);
        let raw = self
            .http
            .get(uri.clone())
            .default_headers(self.token.as_deref())
            .send()
            .await
            .map_err(|cause| http::Error::SendRequestError { cause })?;

        let response = Response::<Vec<Release>>::async_from(raw).await;
        if let Response::Success(inner) = &response {
            log::debug!("GitHub answered {} for {}", inner.status, uri);
        }

        Ok(response.collect()?)
    }

    // each name is pushed as one percent-encoded path segment
    fn releases_url(&self, owner: &str, repo: &str) -> Result<Url, http::Error> {
        let invalid = || http::Error::InvalidUrlError {
            url: self.api_url.to_owned(),
        };

        let mut url = Url::parse(&self.api_url).map_err(|_| invalid())?;
        url.path_segments_mut()
            .map_err(|_| invalid())?
            .pop_if_empty()
            .extend(["repos", owner, repo, "releases"]);

        Ok(url)
    }
}

impl ReleaseSource for GithubClient {
    async fn list_releases(&self, repository: &RepositoryRef) -> Result<Vec<Release>, Error> {
        self.repo(&repository.owner, &repository.name)
            .releases()
            .list()
            .await
    }
}
