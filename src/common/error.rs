// src/common/error.rs

use std::collections::HashMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use thiserror::Error;

use crate::{common::i18n::I18nStore, middleware::i18n::Locale};

// Erros internos da aplicação. Nunca vão direto para o cliente:
// passam por `to_api_error`, que escolhe o status e traduz a mensagem.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    // Falha ao ler/decodificar os JSON estáticos
    #[error("Falha ao carregar dados: {0}")]
    DataSourceError(String),

    #[error("Pedido não encontrado")]
    OrderNotFound,

    #[error("Cliente não encontrado")]
    CustomerNotFound,

    #[error("Preferência não encontrada")]
    PreferenceNotFound,

    #[error("Chave de preferência inválida")]
    InvalidPreferenceKey,

    #[error("Erro de armazenamento: {0}")]
    StorageError(#[from] std::io::Error),

    #[error("Erro de serialização: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Erro ao exportar CSV: {0}")]
    ExportError(String),

    // Variante genérica para qualquer outro erro inesperado
    #[error("Erro interno do servidor")]
    InternalServerError(#[from] anyhow::Error),
}

// O erro que de fato sai na resposta HTTP
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
    pub details: Option<Value>,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self { status, message: message.into(), details: None }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = match self.details {
            Some(details) => json!({ "error": self.message, "details": details }),
            None => json!({ "error": self.message }),
        };
        (self.status, Json(body)).into_response()
    }
}

impl AppError {
    pub fn to_api_error(&self, locale: &Locale, i18n: &I18nStore) -> ApiError {
        let (status, key) = match self {
            AppError::ValidationError(errors) => {
                // Retorna todos os detalhes da validação, campo a campo
                let mut details = HashMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<String> = field_errors
                        .iter()
                        .map(|e| {
                            e.message
                                .as_ref()
                                .map(|m| m.to_string())
                                .unwrap_or_else(|| e.code.to_string())
                        })
                        .collect();
                    details.insert(field.to_string(), messages);
                }
                return ApiError {
                    status: StatusCode::BAD_REQUEST,
                    message: i18n.translate(&locale.0, "errors.validation"),
                    details: Some(json!(details)),
                };
            }
            AppError::DataSourceError(reason) => {
                tracing::error!("Fonte de dados indisponível: {}", reason);
                (StatusCode::SERVICE_UNAVAILABLE, "errors.data_load")
            }
            AppError::OrderNotFound => (StatusCode::NOT_FOUND, "errors.order_not_found"),
            AppError::CustomerNotFound => (StatusCode::NOT_FOUND, "errors.customer_not_found"),
            AppError::PreferenceNotFound => (StatusCode::NOT_FOUND, "errors.preference_not_found"),
            AppError::InvalidPreferenceKey => (StatusCode::BAD_REQUEST, "errors.invalid_preference_key"),

            // Todo o resto vira 500; o detalhe fica só no log
            e => {
                tracing::error!("Erro Interno do Servidor: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "errors.internal")
            }
        };

        ApiError::new(status, i18n.translate(&locale.0, key))
    }
}
