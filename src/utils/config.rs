use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;

pub struct ServerConfig {
    pub addr: SocketAddr,
    /// 静态资源目录，挂载在 /static 下
    pub static_dir: PathBuf,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port: u16 = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("Invalid PORT: {}", raw))?,
            None => 8080,
        };
        let addr: SocketAddr = format!("{}:{}", host, port)
            .parse()
            .with_context(|| format!("Invalid HOST/PORT: {}:{}", host, port))?;
        let static_dir = lookup("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("static"));
        Ok(Self { addr, static_dir })
    }
}
