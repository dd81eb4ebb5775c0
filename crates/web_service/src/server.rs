use std::collections::HashMap;
use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use anyhow::Context;
use log::info;

use chain_core::Config;
use chain_llm::{Generator, GroqProvider};
use chain_pipeline::{qa_template, translation_template, TextPipeline};

use crate::controllers::{chain_controller, system_controller};

const DEFAULT_WORKER_COUNT: usize = 4;

/// Shared, immutable server state: the registry of named chains.
pub struct AppState {
    chains: HashMap<String, Arc<TextPipeline>>,
}

impl AppState {
    /// Register the built-in chains against one shared generator.
    pub fn new(generator: Arc<dyn Generator>, model: Option<String>) -> Self {
        let mut chains = HashMap::new();
        for (name, template) in [
            ("translate", translation_template()),
            ("qa", qa_template()),
        ] {
            let mut pipeline = TextPipeline::new(template, generator.clone());
            if let Some(model) = &model {
                pipeline = pipeline.with_model(model.clone());
            }
            chains.insert(name.to_string(), Arc::new(pipeline));
        }
        Self { chains }
    }

    pub fn get(&self, name: &str) -> Option<Arc<TextPipeline>> {
        self.chains.get(name).cloned()
    }

    pub fn chains(&self) -> &HashMap<String, Arc<TextPipeline>> {
        &self.chains
    }
}

pub fn app_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/v1")
            .configure(chain_controller::config)
            .configure(system_controller::config),
    );
}

/// Build the provider from configuration and serve until shutdown.
pub async fn run(config: Config) -> anyhow::Result<()> {
    let provider = GroqProvider::from_config(&config).context("failed to build provider")?;
    let generator: Arc<dyn Generator> = Arc::new(provider);
    let app_state = web::Data::new(AppState::new(generator, config.model.clone()));

    let addr = format!("{}:{}", config.host, config.port);
    let server = HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(Cors::permissive())
            .configure(app_config)
    })
    .workers(DEFAULT_WORKER_COUNT)
    .bind(&addr)
    .with_context(|| format!("failed to bind {addr}"))?
    .run();

    info!("chainserve listening on http://{addr}");

    server.await.context("web server error")?;
    Ok(())
}
