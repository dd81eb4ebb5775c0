use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

use chain_pipeline::PipelineError;

pub type Result<T, E = AppError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Chain '{0}' not found")]
    ChainNotFound(String),

    #[error(transparent)]
    Pipeline(#[from] PipelineError),
}

#[derive(Serialize)]
struct JsonError {
    message: String,
    r#type: String,
}

#[derive(Serialize)]
struct JsonErrorWrapper {
    error: JsonError,
}

impl AppError {
    fn error_type(&self) -> &'static str {
        match self {
            AppError::ChainNotFound(_) => "not_found",
            AppError::Pipeline(PipelineError::MissingVariables(_)) => "invalid_request_error",
            AppError::Pipeline(PipelineError::Generation(_)) => "upstream_error",
            AppError::Pipeline(PipelineError::Parse(_)) => "api_error",
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ChainNotFound(_) => StatusCode::NOT_FOUND,
            AppError::Pipeline(PipelineError::MissingVariables(_)) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            AppError::Pipeline(PipelineError::Generation(_)) => StatusCode::BAD_GATEWAY,
            AppError::Pipeline(PipelineError::Parse(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error_response = JsonErrorWrapper {
            error: JsonError {
                message: self.to_string(),
                r#type: self.error_type().to_string(),
            },
        };
        HttpResponse::build(self.status_code()).json(error_response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chain_llm::{LLMError, ParseError};

    #[test]
    fn status_codes_distinguish_error_kinds() {
        assert_eq!(
            AppError::ChainNotFound("x".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::Pipeline(PipelineError::MissingVariables(vec!["language".into()]))
                .status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            AppError::Pipeline(PipelineError::Generation(LLMError::Auth("nope".into())))
                .status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            AppError::Pipeline(PipelineError::Parse(ParseError::NoChoices)).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
