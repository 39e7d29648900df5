use crate::error::AppError;
use config::{ConfigBuilder, Environment, File, builder::DefaultState};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl ServerConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Locate a service's `config/` directory whether the process runs from the
/// workspace root or from inside the service crate.
pub fn configuration_directory(service_dir: &str) -> Result<PathBuf, AppError> {
    let base_path = std::env::current_dir()?;

    if base_path.ends_with(service_dir) {
        Ok(base_path.join("config"))
    } else {
        Ok(base_path.join(service_dir).join("config"))
    }
}

/// Standard source stack shared by every service: an optional `base.yaml`,
/// then `APP_`-prefixed environment variables using `__` for nesting.
///
/// Keys listed in `list_keys` are split on commas so that, for example,
/// `APP_CORS__ALLOWED_ORIGINS=a,b` deserializes into a `Vec<String>`.
pub fn layered_builder(
    configuration_directory: &Path,
    list_keys: &[&str],
) -> ConfigBuilder<DefaultState> {
    let mut environment = Environment::with_prefix("APP")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
        .list_separator(",");

    for key in list_keys {
        environment = environment.with_list_parse_key(key);
    }

    config::Config::builder()
        .add_source(File::from(configuration_directory.join("base.yaml")).required(false))
        .add_source(environment)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_address_joins_host_and_port() {
        let server = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
        };
        assert_eq!(server.address(), "127.0.0.1:3000");
    }

    #[test]
    fn builder_without_base_file_uses_defaults() {
        let settings = layered_builder(Path::new("/nonexistent"), &[])
            .set_default("server.port", 4000)
            .unwrap()
            .build()
            .unwrap();

        let server: ServerConfig = settings.get("server").unwrap();
        assert_eq!(server.host, "0.0.0.0");
        assert_eq!(server.port, 4000);
    }
}
