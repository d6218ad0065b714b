use crate::github::github_client::DEFAULT_API_URL;
use std::{env, path::PathBuf};

const INPUT_PREFIX: &str = "INPUT_";

const REPOSITORY: &str = "repository";
const TOKEN: &str = "token";
const INCLUDE_DRAFTS: &str = "includeDrafts";
const INCLUDE_PRE_RELEASES: &str = "includePreReleases";
const EXCLUDES: &str = "excludes";
const INCLUDES: &str = "includes";

const API_URL_VAR: &str = "GITHUB_API_URL";
const OUTPUT_FILE_VAR: &str = "GITHUB_OUTPUT";

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub repository: String,
    pub token: Option<String>,
    pub include_drafts: bool,
    pub include_prereleases: bool,
    pub excludes: String,
    pub includes: String,
    pub api_url: String,
    pub output_file: Option<PathBuf>,
}

impl Config {
    pub fn load() -> Config {
        Config::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Config
    where
        F: Fn(&str) -> Option<String>,
    {
        let input = |name: &str| {
            let key = format!("{}{}", INPUT_PREFIX, name.replace(' ', "_").to_uppercase());
            lookup(&key)
                .map(|value| value.trim().to_owned())
                .unwrap_or_default()
        };

        let token = input(TOKEN);
        let api_url = lookup(API_URL_VAR)
            .map(|value| value.trim().to_owned())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_owned());

        Config {
            repository: input(REPOSITORY),
            token: (!token.is_empty()).then_some(token),
            include_drafts: is_true(&input(INCLUDE_DRAFTS)),
            include_prereleases: is_true(&input(INCLUDE_PRE_RELEASES)),
            excludes: input(EXCLUDES),
            includes: input(INCLUDES),
            api_url,
            output_file: lookup(OUTPUT_FILE_VAR)
                .filter(|value| !value.is_empty())
                .map(PathBuf::from),
        }
    }
}

fn is_true(value: &str) -> bool {
    value.eq_ignore_ascii_case("true")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();

        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn should_default_everything_when_nothing_is_set() {
        let config = config(&[]);

        assert_eq!(config.repository, "");
        assert_eq!(config.token, None);
        assert!(!config.include_drafts);
        assert!(!config.include_prereleases);
        assert_eq!(config.excludes, "");
        assert_eq!(config.includes, "");
        assert_eq!(config.api_url, "https://api.github.com");
        assert_eq!(config.output_file, None);
    }

    #[test]
    fn should_read_upper_cased_inputs() {
        let config = config(&[
            ("INPUT_REPOSITORY", " octo/hello \n"),
            ("INPUT_TOKEN", "secret"),
            ("INPUT_INCLUDEDRAFTS", "TRUE"),
            ("INPUT_INCLUDEPRERELEASES", "True"),
            ("INPUT_EXCLUDES", "^v2"),
            ("INPUT_INCLUDES", "^v"),
            ("GITHUB_API_URL", "https://ghe.example.com/api/v3"),
            ("GITHUB_OUTPUT", "/tmp/output"),
        ]);

        assert_eq!(config.repository, "octo/hello");
        assert_eq!(config.token.as_deref(), Some("secret"));
        assert!(config.include_drafts);
        assert!(config.include_prereleases);
        assert_eq!(config.excludes, "^v2");
        assert_eq!(config.includes, "^v");
        assert_eq!(config.api_url, "https://ghe.example.com/api/v3");
        assert_eq!(config.output_file, Some(PathBuf::from("/tmp/output")));
    }

    #[test]
    fn should_only_accept_true_as_a_flag() {
        for value in ["yes", "1", "on", "false", "tru", ""] {
            let config = config(&[("INPUT_INCLUDEDRAFTS", value)]);

            assert!(!config.include_drafts, "{value:?}");
        }
    }

    #[test]
    fn should_treat_a_blank_token_as_missing() {
        let config = config(&[("INPUT_TOKEN", "   ")]);

        assert_eq!(config.token, None);
    }
}
