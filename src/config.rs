use std::env;
use std::net::SocketAddr;
use std::time::Duration;

use crate::error::AppError;

pub const DEFAULT_ADDR: &str = "127.0.0.1:9000";

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    /// Artificial latency added before every API response.
    pub response_delay: Duration,
}

impl ServerConfig {
    pub fn new_from_env() -> Result<Self, AppError> {
        let addr = env::var("COURSES_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());
        let delay = env::var("COURSES_RESPONSE_DELAY_MS").ok();
        Self::parse(&addr, delay.as_deref())
    }

    fn parse(addr: &str, delay_ms: Option<&str>) -> Result<Self, AppError> {
        let addr = addr
            .parse::<SocketAddr>()
            .map_err(|e| AppError::Config(format!("COURSES_ADDR {}: {}", addr, e)))?;

        let response_delay = match delay_ms {
            Some(ms) => ms
                .parse::<u64>()
                .map(Duration::from_millis)
                .map_err(|e| AppError::Config(format!("COURSES_RESPONSE_DELAY_MS {}: {}", ms, e)))?,
            None => Duration::ZERO,
        };

        Ok(Self {
            addr,
            response_delay,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ServerConfig::parse(DEFAULT_ADDR, None).unwrap();
        assert_eq!(config.addr.port(), 9000);
        assert_eq!(config.response_delay, Duration::ZERO);
    }

    #[test]
    fn delay_in_millis() {
        let config = ServerConfig::parse("0.0.0.0:8080", Some("1500")).unwrap();
        assert_eq!(config.response_delay, Duration::from_millis(1500));
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(ServerConfig::parse("nowhere", None), Err(AppError::Config(_))));
        assert!(matches!(
            ServerConfig::parse(DEFAULT_ADDR, Some("soon")),
            Err(AppError::Config(_))
        ));
    }
}
