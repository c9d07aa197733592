//! Page configuration from the environment.

use skip_core::ClientConfig;

pub const BASE_URL_VAR: &str = "SKIP_API_BASE_URL";
pub const POSTCODE_VAR: &str = "SKIP_POSTCODE";
pub const AREA_VAR: &str = "SKIP_AREA";

pub const DEFAULT_POSTCODE: &str = "NR32";
pub const DEFAULT_AREA: &str = "Lowestoft";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageConfig {
    pub client: ClientConfig,
    pub postcode: String,
    pub area: Option<String>,
}

impl PageConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source. Blank values count as unset,
    /// except that a blank area means "no area".
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let set = |key: &str| lookup(key).map(|v| v.trim().to_string());

        let client = match set(BASE_URL_VAR).filter(|v| !v.is_empty()) {
            Some(base_url) => ClientConfig::with_base_url(&base_url),
            None => ClientConfig::default(),
        };
        let postcode = set(POSTCODE_VAR)
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_POSTCODE.to_string());
        let area = match set(AREA_VAR) {
            Some(area) if area.is_empty() => None,
            Some(area) => Some(area),
            None => Some(DEFAULT_AREA.to_string()),
        };

        Self { client, postcode, area }
    }
}
