//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（config.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::{AppConfig, LedgerDriver};

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 环境变量前缀
const ENV_PREFIX: &str = "CARLEDGER";

/// 加载应用配置
///
/// # 环境变量示例
/// - `CARLEDGER_SERVER__PORT=8001`
/// - `CARLEDGER_SERVER__STATIC_FILES__DIR=../client`
/// - `CARLEDGER_LEDGER__URL=http://fabric-sdk:4000`
/// - `CARLEDGER_LEDGER__DRIVER=fake`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 8001)?
        .set_default("server.static_files.enabled", true)?
        .set_default("server.static_files.dir", "client")?
        .set_default("ledger.driver", "http")?
        .set_default("ledger.url", "http://localhost:4000")?
        .set_default("ledger.channel", "mychannel")?
        .set_default("ledger.chaincode", "abstore")?
        .set_default("ledger.timeout_secs", 30)?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 配置文件
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 环境变量（最高优先级），层级分隔符为双下划线
    builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    if config.ledger.driver == LedgerDriver::Http && config.ledger.url.is_empty() {
        return Err(ConfigError::ValidationError(
            "Ledger URL cannot be empty when driver is http".to_string(),
        ));
    }

    if config.ledger.channel.is_empty() || config.ledger.chaincode.is_empty() {
        return Err(ConfigError::ValidationError(
            "Ledger channel and chaincode cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}", config.server.addr());
    match config.server.static_dir() {
        Some(dir) => tracing::info!("Static Files: {}", dir.display()),
        None => tracing::info!("Static Files: disabled"),
    }
    tracing::info!("Ledger Driver: {}", config.ledger.driver);
    if config.ledger.driver == LedgerDriver::Http {
        tracing::info!("Ledger URL: {}", config.ledger.url);
        tracing::info!("Ledger Timeout: {}s", config.ledger.timeout_secs);
    }
    tracing::info!(
        "Chaincode: {}/{}",
        config.ledger.channel,
        config.ledger.chaincode
    );
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}
