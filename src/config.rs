use crate::logging::LogLevel;

const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

pub const LOG_LEVEL_ATTR: &str = "data-log-level";

#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    pub log_level: LogLevel,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl SiteConfig {
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let log_level = parse_non_empty(lookup(LOG_LEVEL_ATTR))
            .and_then(|value| LogLevel::parse(&value))
            .unwrap_or(DEFAULT_LOG_LEVEL);

        Self { log_level }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn from_element(element: &web_sys::Element) -> Self {
        Self::from_lookup(|name| element.get_attribute(name))
    }
}

fn parse_non_empty(raw: Option<String>) -> Option<String> {
    raw.map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
