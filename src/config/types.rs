//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::path::PathBuf;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// 账本 SDK 配置
    #[serde(default)]
    pub ledger: LedgerConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,

    /// 静态文件服务配置
    #[serde(default)]
    pub static_files: StaticFilesConfig,
}

/// 静态文件服务配置（挂在根路径）
#[derive(Debug, Clone, Deserialize)]
pub struct StaticFilesConfig {
    /// 是否启用静态文件服务
    #[serde(default = "default_static_enabled")]
    pub enabled: bool,

    /// 静态文件目录
    #[serde(default = "default_static_dir")]
    pub dir: PathBuf,
}

fn default_static_enabled() -> bool {
    true
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("client")
}

impl Default for StaticFilesConfig {
    fn default() -> Self {
        Self {
            enabled: default_static_enabled(),
            dir: default_static_dir(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8001
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_files: StaticFilesConfig::default(),
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// 启用时返回静态文件目录
    pub fn static_dir(&self) -> Option<PathBuf> {
        self.static_files
            .enabled
            .then(|| self.static_files.dir.clone())
    }
}

/// 账本客户端类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LedgerDriver {
    /// 通过 HTTP 调用外部 SDK 服务
    #[default]
    Http,
    /// 只记录调用，用于本地开发
    Fake,
}

impl std::fmt::Display for LedgerDriver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Http => f.write_str("http"),
            Self::Fake => f.write_str("fake"),
        }
    }
}

/// 账本 SDK 配置
#[derive(Debug, Clone, Deserialize)]
pub struct LedgerConfig {
    #[serde(default)]
    pub driver: LedgerDriver,

    /// SDK 服务基础 URL
    #[serde(default = "default_ledger_url")]
    pub url: String,

    /// 通道名
    #[serde(default = "default_channel")]
    pub channel: String,

    /// 链码名
    #[serde(default = "default_chaincode")]
    pub chaincode: String,

    /// 请求超时时间（秒）
    #[serde(default = "default_ledger_timeout")]
    pub timeout_secs: u64,
}

fn default_ledger_url() -> String {
    "http://localhost:4000".to_string()
}

fn default_channel() -> String {
    "mychannel".to_string()
}

fn default_chaincode() -> String {
    "abstore".to_string()
}

fn default_ledger_timeout() -> u64 {
    30
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            driver: LedgerDriver::default(),
            url: default_ledger_url(),
            channel: default_channel(),
            chaincode: default_chaincode(),
            timeout_secs: default_ledger_timeout(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}
