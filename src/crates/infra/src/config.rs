use config::{Config, Environment, File};
use dotenvy::dotenv;
use serde::Deserialize;
use std::error::Error;

/// 原始配置（配置文件 + APP__ 前缀环境变量）
#[derive(Debug, Deserialize)]
#[serde(default)]
struct RawConfig {
    database_url: String,
    /// 服务器配置
    server: RawServerConfig,
}

/// 服务器配置（原始配置）
#[derive(Debug, Deserialize)]
#[serde(default)]
struct RawServerConfig {
    /// 监听地址
    host: String,
    /// 监听端口
    port: u16,
}

impl Default for RawServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

impl Default for RawConfig {
    fn default() -> Self {
        Self {
            database_url: "".to_string(),
            server: RawServerConfig::default(),
        }
    }
}

/// 服务器配置
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// 监听地址
    pub host: String,
    /// 监听端口
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct AppConfigImpl {
    database_url: String,
    server: ServerConfig,
}

impl AppConfigImpl {
    pub fn load() -> Result<AppConfigImpl, Box<dyn Error>> {
        dotenv().ok();

        let config = Config::builder()
            .add_source(File::with_name("config").required(false))
            .add_source(Environment::with_prefix("APP").separator("__"))
            .build()?;

        let raw: RawConfig = config.try_deserialize()?;
        Ok(AppConfigImpl::new(raw))
    }

    fn new(raw: RawConfig) -> Self {
        let mut server = ServerConfig {
            host: raw.server.host,
            port: raw.server.port,
        };
        // PORT 环境变量优先于配置文件
        if let Some(port) = std::env::var("PORT").ok().and_then(|p| p.parse().ok()) {
            server.port = port;
        }

        // DATABASE_URL 环境变量优先于配置文件
        let database_url = std::env::var("DATABASE_URL").unwrap_or(raw.database_url);

        Self {
            database_url,
            server,
        }
    }

    pub fn server(&self) -> ServerConfig {
        self.server.clone()
    }

    pub fn database_url(&self) -> String {
        self.database_url.clone()
    }
}
