#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub api_base_url: String,
}

const API_URL_VAR: &str = "GUAC_DASHBOARD_API_URL";
const DEFAULT_API_URL: &str = "http://localhost:8000";

impl Config {
    pub fn new(api_base_url: impl Into<String>) -> Self {
        let api_base_url: String = api_base_url.into();
        Self {
            api_base_url: api_base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Runtime environment first (desktop builds), then the value captured
    /// when the crate was compiled (web builds have no process environment).
    pub fn from_env() -> Self {
        Self::from_sources(std::env::var(API_URL_VAR).ok(), option_env!("GUAC_DASHBOARD_API_URL"))
    }

    pub fn from_sources(runtime: Option<String>, build_time: Option<&str>) -> Self {
        let api_base_url = runtime
            .filter(|url| !url.trim().is_empty())
            .or_else(|| {
                build_time
                    .filter(|url| !url.trim().is_empty())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        Self::new(api_base_url)
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base_url, path.trim_start_matches('/'))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}
