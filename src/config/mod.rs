//! Configuration module for the ticketing front end.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;

use crate::errors::ClientError;
use crate::models::TicketOption;

const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:5000";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_TICKET_TYPES: &str = "General:500,VIP:1500,Backstage:3000";

/// What login does when no user matches the entered first name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginFallback {
    /// Refuse the login and stay on the login page.
    #[default]
    Reject,
    /// Sign in as the first user in the dataset, or a local placeholder user
    /// when the dataset has none.
    FirstUser,
}

impl LoginFallback {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reject" => Some(LoginFallback::Reject),
            "first-user" | "first_user" => Some(LoginFallback::FirstUser),
            _ => None,
        }
    }
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the ticketing API, without a trailing slash
    pub api_base_url: String,
    /// Address to serve the front end on
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Emit logs as JSON lines instead of human-readable text
    pub log_json: bool,
    /// Policy for logins whose first name matches nobody
    pub login_fallback: LoginFallback,
    /// Ticket types offered in the booking modal, in display order
    pub ticket_options: Vec<TicketOption>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ClientError> {
        dotenvy::dotenv().ok();

        let api_base_url = env::var("TICKETING_API_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let bind_addr = env::var("TICKETING_BIND_ADDR")
            .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let bind_addr: SocketAddr = bind_addr.parse().map_err(|_| {
            ClientError::Config(format!("Invalid TICKETING_BIND_ADDR: {}", bind_addr))
        })?;

        let log_level = env::var("TICKETING_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let log_json = match env::var("TICKETING_LOG_FORMAT") {
            Ok(raw) => match raw.trim().to_ascii_lowercase().as_str() {
                "json" => true,
                "text" => false,
                _ => {
                    return Err(ClientError::Config(format!(
                        "Invalid TICKETING_LOG_FORMAT: {}",
                        raw
                    )))
                }
            },
            Err(_) => false,
        };

        let login_fallback = match env::var("TICKETING_LOGIN_FALLBACK") {
            Ok(raw) => LoginFallback::parse(&raw).ok_or_else(|| {
                ClientError::Config(format!("Invalid TICKETING_LOGIN_FALLBACK: {}", raw))
            })?,
            Err(_) => LoginFallback::default(),
        };

        let ticket_types = env::var("TICKETING_TICKET_TYPES")
            .unwrap_or_else(|_| DEFAULT_TICKET_TYPES.to_string());
        let ticket_options = parse_ticket_options(&ticket_types)?;

        Ok(Self {
            api_base_url,
            bind_addr,
            log_level,
            log_json,
            login_fallback,
            ticket_options,
        })
    }

    /// Configuration pointing at the given API, with every other value at its default.
    pub fn with_api_base_url(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into().trim_end_matches('/').to_string(),
            bind_addr: ([127, 0, 0, 1], 8080).into(),
            log_level: "info".to_string(),
            log_json: false,
            login_fallback: LoginFallback::default(),
            ticket_options: default_ticket_options(),
        }
    }
}

fn default_ticket_options() -> Vec<TicketOption> {
    parse_ticket_options(DEFAULT_TICKET_TYPES).unwrap_or_default()
}

/// Parse a `Name:price,Name:price` ticket catalog.
pub fn parse_ticket_options(raw: &str) -> Result<Vec<TicketOption>, ClientError> {
    let mut options = Vec::new();

    for entry in raw.split(',').map(str::trim).filter(|e| !e.is_empty()) {
        let (name, price) = entry.rsplit_once(':').ok_or_else(|| {
            ClientError::Config(format!("Ticket type '{}' must look like Name:price", entry))
        })?;
        let name = name.trim();
        if name.is_empty() {
            return Err(ClientError::Config(format!(
                "Ticket type '{}' has an empty name",
                entry
            )));
        }
        let price: f64 = price.trim().parse().map_err(|_| {
            ClientError::Config(format!("Ticket type '{}' has an invalid price", entry))
        })?;
        if !price.is_finite() || price < 0.0 {
            return Err(ClientError::Config(format!(
                "Ticket type '{}' must have a non-negative price",
                entry
            )));
        }
        if options.iter().any(|o: &TicketOption| o.name == name) {
            return Err(ClientError::Config(format!(
                "Ticket type '{}' is listed twice",
                name
            )));
        }
        options.push(TicketOption {
            name: name.to_string(),
            price,
        });
    }

    if options.is_empty() {
        return Err(ClientError::Config(
            "At least one ticket type must be configured".to_string(),
        ));
    }

    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        // Clear any existing env vars
        env::remove_var("TICKETING_API_BASE_URL");
        env::remove_var("TICKETING_BIND_ADDR");
        env::remove_var("TICKETING_LOG_LEVEL");
        env::remove_var("TICKETING_LOG_FORMAT");
        env::remove_var("TICKETING_LOGIN_FALLBACK");
        env::remove_var("TICKETING_TICKET_TYPES");

        let config = Config::from_env().unwrap();

        assert_eq!(config.api_base_url, "http://127.0.0.1:5000");
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:8080");
        assert_eq!(config.log_level, "info");
        assert!(!config.log_json);
        assert_eq!(config.login_fallback, LoginFallback::Reject);
        assert_eq!(config.ticket_options.len(), 3);
        assert_eq!(config.ticket_options[0].name, "General");
        assert_eq!(config.ticket_options[0].price, 500.0);
    }

    #[test]
    fn test_parse_ticket_options() {
        let options = parse_ticket_options(" Early Bird:249.5 , VIP:1500").unwrap();
        assert_eq!(options.len(), 2);
        assert_eq!(options[0].name, "Early Bird");
        assert_eq!(options[0].price, 249.5);
        assert_eq!(options[1].name, "VIP");
    }

    #[test]
    fn test_parse_ticket_options_rejects_garbage() {
        assert!(parse_ticket_options("").is_err());
        assert!(parse_ticket_options("General").is_err());
        assert!(parse_ticket_options("General:cheap").is_err());
        assert!(parse_ticket_options(":100").is_err());
        assert!(parse_ticket_options("General:-1").is_err());
        assert!(parse_ticket_options("VIP:1,VIP:2").is_err());
    }

    #[test]
    fn test_login_fallback_parse() {
        assert_eq!(LoginFallback::parse("reject"), Some(LoginFallback::Reject));
        assert_eq!(
            LoginFallback::parse(" First-User "),
            Some(LoginFallback::FirstUser)
        );
        assert_eq!(LoginFallback::parse("guess"), None);
    }

    #[test]
    fn test_with_api_base_url_trims_slash() {
        let config = Config::with_api_base_url("http://localhost:5000/");
        assert_eq!(config.api_base_url, "http://localhost:5000");
    }
}
