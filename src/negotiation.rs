//! Response content negotiation.
//!
//! Handlers never pick a wire format. They return a [`Reply`]; entity replies
//! leave their payload in the response extensions and the [`negotiate`]
//! middleware turns it into bytes with whatever [`EntitySerializer`] the router
//! was built with, honouring the request's `Accept` header.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::{Request, State},
    http::{HeaderValue, StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use mime::Mime;
use serde::Serialize;
use serde_json::Value;

pub trait EntitySerializer: Send + Sync + 'static {
    fn media_type(&self) -> Mime;

    fn serialize(&self, entity: &Value) -> anyhow::Result<Vec<u8>>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSerializer;

impl EntitySerializer for JsonSerializer {
    fn media_type(&self) -> Mime {
        mime::APPLICATION_JSON
    }

    fn serialize(&self, entity: &Value) -> anyhow::Result<Vec<u8>> {
        Ok(serde_json::to_vec(entity)?)
    }
}

#[derive(Debug, Clone)]
struct PendingEntity(Value);

/// What a handler answers with.
#[derive(Debug)]
pub enum Reply {
    /// Human-readable message, always sent as plain text.
    Text(StatusCode, String),
    /// Structured payload, serialized by the negotiation layer.
    Entity(StatusCode, Value),
}

impl Reply {
    pub fn text(status: StatusCode, message: impl Into<String>) -> Self {
        Self::Text(status, message.into())
    }

    pub fn entity<T: Serialize>(status: StatusCode, entity: &T) -> Self {
        match serde_json::to_value(entity) {
            Ok(value) => Self::Entity(status, value),
            Err(err) => {
                tracing::error!(error = %err, "Failed to convert response entity");
                Self::text(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error.")
            }
        }
    }
}

impl IntoResponse for Reply {
    fn into_response(self) -> Response {
        match self {
            Self::Text(status, message) => (status, message).into_response(),
            Self::Entity(status, value) => {
                let mut response = status.into_response();
                response.extensions_mut().insert(PendingEntity(value));
                response
            }
        }
    }
}

pub async fn negotiate<S: EntitySerializer>(
    State(serializer): State<Arc<S>>,
    request: Request,
    next: Next,
) -> Response {
    let accept = request
        .headers()
        .get(header::ACCEPT)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);

    let mut response = next.run(request).await;

    let Some(PendingEntity(entity)) = response.extensions_mut().remove::<PendingEntity>() else {
        return response;
    };

    let media_type = serializer.media_type();

    if let Some(accept) = accept.as_deref() {
        if !accepts(accept, &media_type) {
            tracing::debug!(accept, "No acceptable representation for response entity");
            return (
                StatusCode::NOT_ACCEPTABLE,
                format!("Only {media_type} responses are available."),
            )
                .into_response();
        }
    }

    let encoded = HeaderValue::from_str(media_type.as_ref())
        .map_err(anyhow::Error::from)
        .and_then(|content_type| Ok((content_type, serializer.serialize(&entity)?)));

    match encoded {
        Ok((content_type, body)) => {
            let (mut parts, _) = response.into_parts();
            parts.headers.insert(header::CONTENT_TYPE, content_type);
            Response::from_parts(parts, Body::from(body))
        }
        Err(err) => {
            tracing::error!(error = %err, "Failed to serialize response entity");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Whether an `Accept` header admits `offered`.
///
/// The most specific matching media range decides; a `q=0` on it refuses the
/// type even when a broader range would admit it.
fn accepts(accept: &str, offered: &Mime) -> bool {
    accept
        .split(',')
        .filter_map(|range| range.trim().parse::<Mime>().ok())
        .filter_map(|range| specificity(&range, offered).map(|rank| (rank, quality(&range))))
        .max_by(|(a, _), (b, _)| a.cmp(b))
        .is_some_and(|(_, q)| q > 0.0)
}

/// 2 for `type/subtype`, 1 for `type/*`, 0 for `*/*`; `None` when the range
/// does not cover `offered`.
fn specificity(range: &Mime, offered: &Mime) -> Option<u8> {
    if range.type_() == mime::STAR {
        return (range.subtype() == mime::STAR).then_some(0);
    }
    if range.type_() != offered.type_() {
        return None;
    }
    if range.subtype() == mime::STAR {
        Some(1)
    } else {
        (range.subtype() == offered.subtype()).then_some(2)
    }
}

fn quality(range: &Mime) -> f32 {
    range
        .get_param("q")
        .and_then(|q| q.as_str().parse::<f32>().ok())
        .unwrap_or(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_exact_and_wildcard_ranges() {
        let json = mime::APPLICATION_JSON;

        assert!(accepts("application/json", &json));
        assert!(accepts("text/html, application/*;q=0.5", &json));
        assert!(accepts("*/*", &json));
        assert!(!accepts("text/html, text/plain", &json));
        assert!(!accepts("application/json;q=0", &json));
        assert!(!accepts("not a media type", &json));
    }

    #[test]
    fn most_specific_range_decides() {
        let json = mime::APPLICATION_JSON;

        assert!(!accepts("application/json;q=0, */*", &json));
        assert!(!accepts("*/*, application/*;q=0", &json));
        assert!(accepts("*/*;q=0, application/json;q=0.2", &json));
        assert!(accepts("text/*;q=0, application/*", &json));
    }

    #[test]
    fn json_content_type_follows_media_type() {
        let media_type = JsonSerializer.media_type();
        let header = HeaderValue::from_str(media_type.as_ref()).unwrap();

        assert_eq!(header, "application/json");
    }

    #[test]
    fn entity_reply_defers_serialization() {
        let response = Reply::entity(StatusCode::OK, &serde_json::json!({ "a": 1 })).into_response();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().get(header::CONTENT_TYPE).is_none());
        assert!(response.extensions().get::<PendingEntity>().is_some());
    }
}
