use anyhow::Context;
use std::env;
use std::net::SocketAddr;

/// 应用配置，来自环境变量（.env 由 dotenv 预先加载）
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub database_max_connections: u32,
    pub host: String,
    pub port: u16,
    pub seed_demo_data: bool,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite:./movies.db?mode=rwc".to_string());

        // SQLite 单写入者，默认只开1个连接
        let database_max_connections = match env::var("DATABASE_MAX_CONNECTIONS") {
            Ok(value) => value
                .parse()
                .with_context(|| format!("Invalid DATABASE_MAX_CONNECTIONS: {}", value))?,
            Err(_) => 1,
        };

        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port = match env::var("PORT") {
            Ok(value) => value
                .parse()
                .with_context(|| format!("Invalid PORT: {}", value))?,
            Err(_) => 3000,
        };

        let seed_demo_data = match env::var("SEED_DEMO_DATA") {
            Ok(value) => parse_bool(&value)
                .with_context(|| format!("Invalid SEED_DEMO_DATA: {}", value))?,
            Err(_) => true,
        };

        Ok(Self {
            database_url,
            database_max_connections,
            host,
            port,
            seed_demo_data,
        })
    }

    pub fn bind_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr = format!("{}:{}", self.host, self.port).parse()?;
        Ok(addr)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
