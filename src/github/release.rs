use serde::Deserialize;

/// Literal emitted for a release without a body.
pub const NULL_DESCRIPTION: &str = "null";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Release {
    pub id: u64,
    pub tag_name: String,
    #[serde(default)]
    pub draft: bool,
    #[serde(default)]
    pub prerelease: bool,
    pub body: Option<String>,
    pub url: String,
    pub assets_url: String,
}

impl Release {
    pub fn description(&self) -> &str {
        self.body.as_deref().unwrap_or(NULL_DESCRIPTION)
    }
}
