use std::sync::Arc;

use axum::{Router, middleware, routing::get};
use axum_tracing_opentelemetry::middleware::{OtelAxumLayer, OtelInResponseLayer};

use crate::{
    handlers::{add_customer, delete_customer, get_customer, get_customers, serialization_sample},
    negotiation::{JsonSerializer, negotiate},
    state::AppState,
};

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/customer", get(get_customers).post(add_customer))
        .route("/customer/", get(get_customer).delete(delete_customer))
        .route("/customer/{id}", get(get_customer).delete(delete_customer))
        .route("/json/ktx-serialization", get(serialization_sample))
        .with_state(state)
        .layer(middleware::from_fn_with_state(
            Arc::new(JsonSerializer),
            negotiate::<JsonSerializer>,
        ))
        .layer(OtelInResponseLayer::default())
        .layer(OtelAxumLayer::default())
}
