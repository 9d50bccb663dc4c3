use std::{net::SocketAddr, str::FromStr};

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Missing secret key. Set it with SV_SECRET_KEY or --secret-key.")]
    MissingSecretKey,
    #[error("Malformed bind IP: '{0}'. Make sure you entered a valid IP.")]
    MalformedBindIp(String),
}

#[derive(Clone)]
pub struct Config {
    telemetry_url: Option<String>,
    secret_key: Option<String>,
    bind_ip: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            telemetry_url: env_to_str("SV_TELEMETRY_URL"),
            secret_key: env_to_str("SV_SECRET_KEY"),
            bind_ip: env_to_str("SV_BIND_IP").unwrap_or_else(|| "127.0.0.1:3000".into()),
        }
    }

    pub fn empty() -> Self {
        Self {
            telemetry_url: None,
            secret_key: None,
            bind_ip: "".into(),
        }
    }

    pub fn telemetry_url(&self) -> Option<&str> {
        self.telemetry_url.as_deref()
    }

    pub fn secret_key(&self) -> Option<&str> {
        self.secret_key.as_deref()
    }

    pub fn bind_ip(&self) -> &str {
        &self.bind_ip
    }

    pub fn set_telemetry_url<T: Into<String>>(&mut self, value: T) {
        self.telemetry_url = Some(value.into());
    }

    pub fn set_secret_key<T: Into<String>>(&mut self, value: T) {
        self.secret_key = Some(value.into());
    }

    pub fn set_bind_ip<T: Into<String>>(&mut self, value: T) {
        self.bind_ip = value.into();
    }

    pub fn validate_configuration(&self) -> Result<(), ConfigError> {
        if self.secret_key.as_deref().filter(|k| !k.is_empty()).is_none() {
            return Err(ConfigError::MissingSecretKey);
        }

        let _ = SocketAddr::from_str(&self.bind_ip)
            .map_err(|_| ConfigError::MalformedBindIp(self.bind_ip.clone()))?;

        Ok(())
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("telemetry_url", &self.telemetry_url)
            .field("secret_key", &self.secret_key.as_ref().map(|_| "<redacted>"))
            .field("bind_ip", &self.bind_ip)
            .finish()
    }
}

fn env_to_str(env_key: &str) -> Option<String> {
    std::env::var(env_key).ok().filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::{Config, ConfigError};

    fn create_valid_config() -> Config {
        let mut config = Config::empty();
        config.set_secret_key("key");
        config.set_bind_ip("127.0.0.1:3000");
        config
    }

    #[test]
    fn test_validate_configuration() {
        assert_matches!(create_valid_config().validate_configuration(), Ok(()));
    }

    #[test]
    fn test_validate_configuration_missing_secret_key() {
        let mut config = Config::empty();
        config.set_bind_ip("127.0.0.1:3000");
        assert_matches!(
            config.validate_configuration(),
            Err(ConfigError::MissingSecretKey)
        );

        config.set_secret_key("");
        assert_matches!(
            config.validate_configuration(),
            Err(ConfigError::MissingSecretKey)
        );
    }

    #[test]
    fn test_validate_configuration_malformed_bind_ip() {
        let mut config = create_valid_config();
        config.set_bind_ip("localhost");

        assert_matches!(
            config.validate_configuration(),
            Err(ConfigError::MalformedBindIp(ip)) if ip == "localhost"
        );
    }

    #[test]
    fn test_debug_redacts_secret_key() {
        let mut config = create_valid_config();
        config.set_secret_key("super-secret");

        let output = format!("{:?}", config);
        assert!(!output.contains("super-secret"));
        assert!(output.contains("<redacted>"));
    }
}
