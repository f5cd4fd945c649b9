/// Store address used when nothing is configured at build time
pub const DEFAULT_API_URL: &str = "http://localhost:5000";

/// Application configuration, resolved once at startup
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base address of the employee store, without a trailing slash
    pub api_base_url: String,
}

impl AppConfig {
    /// Read the store address from `EMPLOYEE_API_URL` at build time
    pub fn from_env() -> Self {
        Self::with_base_url(option_env!("EMPLOYEE_API_URL").unwrap_or(DEFAULT_API_URL))
    }

    pub fn with_base_url(raw: &str) -> Self {
        let trimmed = raw.trim().trim_end_matches('/');
        let api_base_url = if trimmed.is_empty() {
            DEFAULT_API_URL.to_string()
        } else {
            trimmed.to_string()
        };
        Self { api_base_url }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::with_base_url(DEFAULT_API_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slashes_are_trimmed() {
        assert_eq!(AppConfig::with_base_url("http://localhost:8080/").api_base_url, "http://localhost:8080");
        assert_eq!(AppConfig::with_base_url(" https://x.dev/api// ").api_base_url, "https://x.dev/api");
    }

    #[test]
    fn test_blank_value_falls_back_to_default() {
        assert_eq!(AppConfig::with_base_url("   ").api_base_url, DEFAULT_API_URL);
        assert_eq!(AppConfig::with_base_url("/").api_base_url, DEFAULT_API_URL);
        assert_eq!(AppConfig::default().api_base_url, DEFAULT_API_URL);
    }
}
