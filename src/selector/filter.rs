use super::pattern;
use crate::github::Release;
use fancy_regex::Regex;

#[derive(Debug, Clone, Default)]
pub struct FilterConfig {
    pub include_drafts: bool,
    pub include_prereleases: bool,
    pub exclude: Option<Regex>,
    pub include: Option<Regex>,
}

impl FilterConfig {
    pub fn new(
        include_drafts: bool,
        include_prereleases: bool,
        excludes: &str,
        includes: &str,
    ) -> Self {
        FilterConfig {
            include_drafts,
            include_prereleases,
            exclude: pattern::compile("excludes", excludes),
            include: pattern::compile("includes", includes),
        }
    }

    // pre-releases, drafts, excludes, includes; order of survivors is kept
    pub fn apply(&self, mut releases: Vec<Release>) -> Vec<Release> {
        if !self.include_prereleases {
            releases.retain(|release| !release.prerelease);
            log::debug!("After prerelease filter: {} releases", releases.len());
        }

        if !self.include_drafts {
            releases.retain(|release| !release.draft);
            log::debug!("After draft filter: {} releases", releases.len());
        }

        if let Some(exclude) = &self.exclude {
            releases.retain(|release| !pattern::matches(exclude, &release.tag_name));
            log::debug!("After excludes regex filter: {} releases", releases.len());
        }

        if let Some(include) = &self.include {
            releases.retain(|release| pattern::matches(include, &release.tag_name));
            log::debug!("After includes regex filter: {} releases", releases.len());
        }

        releases
    }
}
