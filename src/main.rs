//! carledger - 车辆账本 REST 网关

use std::sync::Arc;

use carledger::application::LedgerPort;
use carledger::config::{load_config, print_config, AppConfig, LedgerDriver};
use carledger::infrastructure::adapters::{
    FakeLedgerClient, HttpLedgerClient, HttpLedgerClientConfig,
};
use carledger::infrastructure::http::{AppState, HttpServer, ServerConfig};

fn init_tracing(config: &AppConfig) {
    let log_filter = format!(
        "{},carledger={},tower_http=debug",
        config.log.level, config.log.level
    );
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if config.log.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn build_ledger(config: &AppConfig) -> anyhow::Result<Arc<dyn LedgerPort>> {
    let ledger: Arc<dyn LedgerPort> = match config.ledger.driver {
        LedgerDriver::Http => {
            let client_config = HttpLedgerClientConfig::new(config.ledger.url.clone())
                .with_timeout(config.ledger.timeout_secs)
                .with_chaincode(config.ledger.channel.clone(), config.ledger.chaincode.clone());
            Arc::new(HttpLedgerClient::new(client_config)?)
        }
        LedgerDriver::Fake => {
            tracing::warn!("Using fake ledger driver, nothing will reach the network");
            Arc::new(FakeLedgerClient::new())
        }
    };
    Ok(ledger)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config);

    tracing::info!("carledger - car ledger REST gateway");
    print_config(&config);

    let ledger = build_ledger(&config)?;

    if config.ledger.driver == LedgerDriver::Http && !ledger.health_check().await {
        tracing::warn!(url = %config.ledger.url, "Ledger service is not reachable yet");
    }

    let mut server_config = ServerConfig::new(&config.server.host, config.server.port);
    if let Some(dir) = config.server.static_dir() {
        if !dir.is_dir() {
            tracing::warn!(dir = %dir.display(), "Static directory does not exist");
        }
        server_config = server_config.with_static_dir(dir);
    }

    let server = HttpServer::new(server_config, AppState::new(ledger));

    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
                std::future::pending::<()>().await;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
