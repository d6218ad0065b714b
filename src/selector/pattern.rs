use super::Error;
use fancy_regex::Regex;

pub fn parse(label: &'static str, pattern: &str) -> Result<Option<Regex>, Error> {
    if pattern.is_empty() {
        return Ok(None);
    }

    Regex::new(pattern)
        .map(Some)
        .map_err(|cause| Error::InvalidFilterPattern {
            label,
            pattern: pattern.to_owned(),
            cause,
        })
}

// a pattern that does not compile leaves the filter out
pub fn compile(label: &'static str, pattern: &str) -> Option<Regex> {
    match parse(label, pattern) {
        Ok(regex) => regex,
        Err(err) => {
            log::warn!("{}", err);
            log::debug!("{:?}", err);
            None
        }
    }
}

pub fn matches(regex: &Regex, tag: &str) -> bool {
    match regex.is_match(tag) {
        Ok(found) => found,
        Err(err) => {
            log::debug!("Cannot match {} against {}: {}", tag, regex.as_str(), err);
            false
        }
    }
}
