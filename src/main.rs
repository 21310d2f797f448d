pub mod types;
pub mod routes;
mod service;
mod store;
mod upstream;

use crate::service::WordService;
use crate::store::Store;
use crate::upstream::{OpenRouter, OpenRouterConfig};
use config::Config;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::fmt::format::FmtSpan;
use word_list::Dictionary;

#[derive(Debug, Deserialize, PartialEq)]
pub struct Args {
    log_level: String,
    port: u16,
    data_dir: String,
    word_list: Option<String>,
    openrouter_api_key: String,
    openrouter_url: String,
    http_proxy: String,
    model: String,
    referer: String,
}

impl Args {
    fn upstream_config(&self) -> OpenRouterConfig {
        OpenRouterConfig {
            api_key: self.openrouter_api_key.clone(),
            url: self.openrouter_url.clone(),
            model: self.model.clone(),
            referer: self.referer.clone(),
            proxy: Some(self.http_proxy.clone()).filter(|p| !p.is_empty()),
        }
    }
}

fn load_args() -> Result<Args, config::ConfigError> {
    Config::builder()
        .set_default("log_level", "info")?
        .set_default("port", 3000)?
        .set_default("data_dir", "../data")?
        .set_default("openrouter_api_key", "")?
        .set_default("openrouter_url", upstream::OPENROUTER_URL)?
        .set_default("http_proxy", upstream::DEFAULT_PROXY)?
        .set_default("model", upstream::DEFAULT_MODEL)?
        .set_default("referer", upstream::DEFAULT_REFERER)?
        .add_source(config::File::with_name("setup").required(false))
        .add_source(config::Environment::default().try_parsing(true))
        .build()?
        .try_deserialize::<Args>()
}

#[tokio::main]
async fn main() -> Result<(), handle_errors::Error> {
    dotenv::dotenv().ok();

    let config = load_args().map_err(|e| handle_errors::Error::ConfigError(e.to_string()))?;

    let log_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        format!(
            "handle_errors={},word_info={},warp={}",
            config.log_level, config.log_level, config.log_level
        )
    });

    tracing_subscriber::fmt()
        .with_env_filter(log_filter)
        .with_span_events(FmtSpan::CLOSE)
        .init();

    let dictionary = match &config.word_list {
        Some(path) => Dictionary::from_file(path)
            .map_err(|e| handle_errors::Error::ConfigError(e.to_string()))?,
        None => Dictionary::bundled(),
    };
    info!("單字表載入 {} 個單字", dictionary.len());

    if config.openrouter_api_key.is_empty() {
        warn!("OPENROUTER_API_KEY 未設定，上游請求將會失敗");
    } else {
        info!("OPENROUTER_API_KEY 已設定");
    }

    let store = Store::new(&config.data_dir).await?;
    let source = OpenRouter::new(config.upstream_config())?;
    let service = WordService::new(dictionary, store, Arc::new(source));

    let routes = routes::word_info_routes(service);

    info!("Server running on port {}", config.port);
    warp::serve(routes).run(([0, 0, 0, 0], config.port)).await;

    Ok(())
}
