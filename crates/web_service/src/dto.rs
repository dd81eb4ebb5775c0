//! Request and response bodies for the chain routes.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Body of `POST /chains/{name}/invoke`: one variable map per invocation.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct InvokeRequest {
    pub input: HashMap<String, String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct InvokeResponse {
    pub output: String,
}

/// One entry of `GET /chains`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ChainInfo {
    pub name: String,
    pub input_variables: Vec<String>,
}
