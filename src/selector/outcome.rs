use crate::github::Release;
use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseOutputs {
    pub release: String,
    pub id: String,
    pub description: String,
    pub url: String,
    pub assets_url: String,
}

impl ReleaseOutputs {
    pub fn entries(&self) -> [(&'static str, &str); 5] {
        [
            ("release", self.release.as_str()),
            ("id", self.id.as_str()),
            ("description", self.description.as_str()),
            ("url", self.url.as_str()),
            ("assetsUrl", self.assets_url.as_str()),
        ]
    }
}

impl From<&Release> for ReleaseOutputs {
    fn from(release: &Release) -> Self {
        ReleaseOutputs {
            release: release.tag_name.to_owned(),
            id: release.id.to_string(),
            description: release.description().to_owned(),
            url: release.url.to_owned(),
            assets_url: release.assets_url.to_owned(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    InvalidRepository,
    UpstreamFetch,
    NoMatchingRelease,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub kind: FailureKind,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Succeeded(ReleaseOutputs),
    Failed(Failure),
}

impl Outcome {
    pub fn failed(kind: FailureKind, reason: impl Display) -> Self {
        Outcome::Failed(Failure {
            kind,
            message: reason.to_string(),
        })
    }
}
