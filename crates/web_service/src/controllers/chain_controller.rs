use actix_web::{web, HttpResponse};
use log::{info, warn};

use crate::dto::{ChainInfo, InvokeRequest, InvokeResponse};
use crate::error::{AppError, Result};
use crate::server::AppState;

async fn list_chains(state: web::Data<AppState>) -> HttpResponse {
    let mut chains: Vec<ChainInfo> = state
        .chains()
        .iter()
        .map(|(name, pipeline)| ChainInfo {
            name: name.clone(),
            input_variables: pipeline
                .template()
                .required_variables()
                .into_iter()
                .collect(),
        })
        .collect();
    chains.sort_by(|a, b| a.name.cmp(&b.name));
    HttpResponse::Ok().json(chains)
}

async fn invoke_chain(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<InvokeRequest>,
) -> Result<HttpResponse> {
    let name = path.into_inner();
    let chain = state
        .get(&name)
        .ok_or_else(|| AppError::ChainNotFound(name.clone()))?;

    info!("invoking chain '{name}'");
    let output = chain.invoke(&body.input).await.map_err(|e| {
        warn!("chain '{name}' failed: {e}");
        AppError::from(e)
    })?;

    Ok(HttpResponse::Ok().json(InvokeResponse { output }))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/chains").route(web::get().to(list_chains)))
        .service(web::resource("/chains/{name}/invoke").route(web::post().to(invoke_chain)));
}
