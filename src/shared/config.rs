use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub listing: ListingConfig,
    pub refresh: RefreshConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub request_timeout: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingConfig {
    pub page_size: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshConfig {
    pub auto_refresh: bool,
    pub interval_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: "http://localhost:4000/api".to_string(),
                request_timeout: 30,
            },
            listing: ListingConfig { page_size: 10 },
            refresh: RefreshConfig {
                auto_refresh: true,
                interval_secs: 60,
            },
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Ok(v) = std::env::var("ODOP_API_BASE_URL") {
            let trimmed = v.trim();
            if !trimmed.is_empty() {
                cfg.api.base_url = trimmed.to_string();
            }
        }
        if let Ok(v) = std::env::var("ODOP_REQUEST_TIMEOUT_SECS") {
            if let Some(value) = parse_u64(&v) {
                cfg.api.request_timeout = value.max(1);
            }
        }
        if let Ok(v) = std::env::var("ODOP_PAGE_SIZE") {
            if let Some(value) = parse_u64(&v) {
                cfg.listing.page_size = (value.max(1)) as usize;
            }
        }
        if let Ok(v) = std::env::var("ODOP_AUTO_REFRESH") {
            cfg.refresh.auto_refresh = parse_bool(&v, cfg.refresh.auto_refresh);
        }
        if let Ok(v) = std::env::var("ODOP_REFRESH_INTERVAL_SECS") {
            if let Some(value) = parse_u64(&v) {
                cfg.refresh.interval_secs = value.max(1);
            }
        }

        cfg
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.api.base_url.trim().is_empty() {
            return Err("Api base_url must not be empty".to_string());
        }
        if self.api.request_timeout == 0 {
            return Err("Api request_timeout must be greater than 0".to_string());
        }
        if self.listing.page_size == 0 {
            return Err("Listing page_size must be greater than 0".to_string());
        }
        if self.refresh.auto_refresh && self.refresh.interval_secs == 0 {
            return Err("Refresh interval_secs must be greater than 0".to_string());
        }
        Ok(())
    }
}

fn parse_bool(s: &str, default: bool) -> bool {
    match s.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => true,
        "0" | "false" | "no" | "off" => false,
        _ => default,
    }
}

fn parse_u64(value: &str) -> Option<u64> {
    value.trim().parse::<u64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(AppConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let mut cfg = AppConfig::default();
        cfg.listing.page_size = 0;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn parse_bool_falls_back_to_default() {
        assert!(parse_bool("definitely", true));
        assert!(!parse_bool("definitely", false));
        assert!(parse_bool("on", false));
        assert!(!parse_bool("0", true));
    }
}
