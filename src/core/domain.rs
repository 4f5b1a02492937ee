// Identifiable defines common traits that can be shared by persistent objects
pub trait Identifiable: Sync + Send {
    fn id(&self) -> String;
}

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

// Configuration abstracts runtime options for the catalog service
#[derive(Debug, PartialEq, Clone)]
pub struct Configuration {
    pub bind_addr: String,
    pub dev_mode: bool,
}

impl Configuration {
    pub fn new(bind_addr: &str) -> Self {
        Configuration {
            bind_addr: bind_addr.to_string(),
            dev_mode: false,
        }
    }

    /// Reads `LIBRARY_ADDR` and `LIBRARY_DEV_MODE`, falling back to defaults.
    pub fn from_env() -> Self {
        let bind_addr = std::env::var("LIBRARY_ADDR")
            .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let dev_mode = std::env::var("LIBRARY_DEV_MODE")
            .map(|v| parse_flag(v.as_str()))
            .unwrap_or(false);
        Configuration {
            bind_addr,
            dev_mode,
        }
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new(DEFAULT_BIND_ADDR)
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

#[cfg(test)]
mod tests {
    use crate::core::domain::{parse_flag, Configuration, DEFAULT_BIND_ADDR};

    #[tokio::test]
    async fn test_should_build_config() {
        let config = Configuration::new("127.0.0.1:9000");
        assert_eq!("127.0.0.1:9000", config.bind_addr.as_str());
        assert!(!config.dev_mode);
    }

    #[tokio::test]
    async fn test_should_build_default_config() {
        let config = Configuration::default();
        assert_eq!(DEFAULT_BIND_ADDR, config.bind_addr.as_str());
    }

    #[tokio::test]
    async fn test_should_parse_dev_mode_flag() {
        assert!(parse_flag("1"));
        assert!(parse_flag("TRUE"));
        assert!(parse_flag(" yes "));
        assert!(!parse_flag("0"));
        assert!(!parse_flag("false"));
        assert!(!parse_flag(""));
    }
}
