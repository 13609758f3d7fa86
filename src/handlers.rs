use axum::{Json, extract::State, http::StatusCode};
use serde_json::json;

use crate::{
    error::CustomerError,
    models::Customer,
    negotiation::Reply,
    params::CustomerId,
    state::AppState,
};

#[tracing::instrument(skip(state))]
pub async fn get_customers(State(state): State<AppState>) -> Reply {
    let customers = state.store.list_all();

    if customers.is_empty() {
        return Reply::text(StatusCode::OK, "No customer found. Please try again.");
    }

    tracing::debug!(count = customers.len(), "Listing customers");
    Reply::entity(StatusCode::OK, &customers)
}

#[tracing::instrument(skip(state))]
pub async fn get_customer(
    State(state): State<AppState>,
    id: CustomerId,
) -> Result<Reply, CustomerError> {
    let CustomerId::Present(id) = id else {
        return Err(CustomerError::MissingId);
    };

    match state.store.find_by_id(&id) {
        Some(customer) => Ok(Reply::entity(StatusCode::OK, &customer)),
        None => Err(CustomerError::NotFound(id)),
    }
}

#[tracing::instrument(skip_all)]
pub async fn add_customer(State(state): State<AppState>, Json(body): Json<Customer>) -> Reply {
    tracing::debug!(customer.id = %body.id, "Storing customer");
    state.store.insert(body);
    state.customers_created_counter.add(1, &[]);

    Reply::text(StatusCode::CREATED, "Customer stored successfully.")
}

#[tracing::instrument(skip(state))]
pub async fn delete_customer(
    State(state): State<AppState>,
    id: CustomerId,
) -> Result<Reply, CustomerError> {
    let CustomerId::Present(id) = id else {
        return Err(CustomerError::MissingId);
    };

    match state.store.remove_by_id(&id) {
        0 => Err(CustomerError::NotFound(id)),
        removed => {
            tracing::debug!(removed, "Deleted customer records");
            state.customers_deleted_counter.add(removed as u64, &[]);
            Ok(Reply::text(StatusCode::ACCEPTED, "Customer record deleted."))
        }
    }
}

pub async fn serialization_sample() -> Reply {
    Reply::entity(StatusCode::OK, &json!({ "hello": "world", "key": "value" }))
}
