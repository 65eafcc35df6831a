// src/middleware/i18n.rs

use axum::extract::FromRequestParts;
use axum::http::{header, request::Parts};

use crate::common::i18n::DEFAULT_LOCALE;

// Extrator de idioma a partir do Accept-Language
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale(pub String);

impl<S> FromRequestParts<S> for Locale
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        let lang = parts
            .headers
            .get(header::ACCEPT_LANGUAGE)
            .and_then(|header_value| header_value.to_str().ok())
            .and_then(primary_language)
            .unwrap_or_else(|| DEFAULT_LOCALE.to_string());

        Ok(Locale(lang))
    }
}

// "ru-KZ,ru;q=0.9,en;q=0.8" -> "ru"
fn primary_language(header_str: &str) -> Option<String> {
    accept_language::parse(header_str)
        .first()
        .map(|tag| tag.split('-').next().unwrap_or(tag).to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    async fn extract(header: Option<&str>) -> Locale {
        let mut builder = Request::builder().uri("/");
        if let Some(value) = header {
            builder = builder.header(header::ACCEPT_LANGUAGE, value);
        }
        let (mut parts, _) = builder.body(()).unwrap().into_parts();
        Locale::from_request_parts(&mut parts, &()).await.unwrap()
    }

    #[tokio::test]
    async fn picks_highest_priority_primary_subtag() {
        assert_eq!(extract(Some("ru-KZ,ru;q=0.9,en;q=0.8")).await, Locale("ru".into()));
        assert_eq!(extract(Some("en;q=0.5,pt-BR")).await, Locale("pt".into()));
    }

    #[tokio::test]
    async fn defaults_to_english() {
        assert_eq!(extract(None).await, Locale("en".into()));
        assert_eq!(extract(Some("")).await, Locale("en".into()));
    }
}
