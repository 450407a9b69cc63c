use std::collections::HashMap;
use std::env;
use std::str::FromStr;
use tracing::Level;

pub struct AppConfigurationBuilder {
    pub hostname: Option<String>,
    pub environment: Option<String>,
    pub port: Option<String>,
    pub host: Option<String>,
    pub log_level: Option<Level>,
}

impl AppConfigurationBuilder {
    pub fn new() -> Self {
        AppConfigurationBuilder {
            hostname: None,
            environment: None,
            port: None,
            host: None,
            log_level: None,
        }
    }

    pub fn hostname(&mut self, value: String) -> &mut Self {
        self.hostname = Some(value);
        self
    }

    pub fn environment(&mut self, value: String) -> &mut Self {
        self.environment = Some(value);
        self
    }

    pub fn port(&mut self, value: String) -> &mut Self {
        self.port = Some(value);
        self
    }

    pub fn host(&mut self, value: String) -> &mut Self {
        self.host = Some(value);
        self
    }

    pub fn log_level(&mut self, value: Level) -> &mut Self {
        self.log_level = Some(value);
        self
    }

    pub fn load_env(&mut self) -> &mut Self {
        self.hostname = env::var(EnvNames::HOSTNAME).ok();
        self.environment = env::var(EnvNames::ENVIRONMENT).ok();
        self.port = env::var(EnvNames::PORT).ok();
        self.host = env::var(EnvNames::HOST).ok();
        self.log_level = env::var(EnvNames::LOG_LEVEL)
            .ok()
            .and_then(|v| Level::from_str(v.as_str()).ok());

        self
    }

    pub fn build(&self) -> AppConfiguration {
        AppConfiguration {
            hostname: self.hostname.clone(),
            environment: self
                .environment
                .clone()
                .unwrap_or("development".to_string()),
            port: self.port.clone().unwrap_or("5000".to_string()),
            host: self.host.clone().unwrap_or("0.0.0.0".to_string()),
            log_level: self.log_level.unwrap_or(Level::INFO),
        }
    }
}

impl Default for AppConfigurationBuilder {
    fn default() -> Self {
        AppConfigurationBuilder::new()
    }
}

#[derive(Debug, Clone)]
pub struct AppConfiguration {
    hostname: Option<String>,
    environment: String,
    port: String,
    host: String,
    log_level: Level,
}

impl AppConfiguration {
    /// Pod identifier as reported by the JSON endpoints.
    pub fn pod(&self) -> &str {
        self.hostname.as_deref().unwrap_or("unknown")
    }

    /// Hostname as shown on the home page.
    pub fn hostname(&self) -> &str {
        self.hostname.as_deref().unwrap_or("Unknown")
    }

    pub fn environment(&self) -> &str {
        &self.environment
    }

    pub fn port(&self) -> &str {
        &self.port
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn log_level(&self) -> Level {
        self.log_level
    }

    pub fn envs(&self) -> HashMap<String, String> {
        let mut envs = HashMap::new();

        envs.insert(EnvNames::HOSTNAME.to_owned(), self.pod().to_owned());
        envs.insert(EnvNames::ENVIRONMENT.to_owned(), self.environment.clone());
        envs.insert(EnvNames::PORT.to_owned(), self.port.to_owned());
        envs.insert(EnvNames::HOST.to_owned(), self.host.to_owned());
        envs.insert(EnvNames::LOG_LEVEL.to_owned(), self.log_level.to_string());

        envs
    }
}

pub struct EnvNames;

impl EnvNames {
    pub const HOSTNAME: &'static str = "HOSTNAME";
    pub const ENVIRONMENT: &'static str = "ENVIRONMENT";
    pub const PORT: &'static str = "PORT";
    pub const HOST: &'static str = "HOST";
    pub const LOG_LEVEL: &'static str = "LOG_LEVEL";
}
