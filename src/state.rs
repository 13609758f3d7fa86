use opentelemetry::metrics::{Counter, Meter};

use crate::store::CustomerStore;

#[derive(Clone)]
pub struct AppState {
    pub store: CustomerStore,
    pub customers_created_counter: Counter<u64>,
    pub customers_deleted_counter: Counter<u64>,
}

impl AppState {
    pub fn new(store: CustomerStore, meter: &Meter) -> Self {
        Self {
            store,
            customers_created_counter: meter
                .u64_counter("customers_created")
                .with_description("Customers stored via POST /customer")
                .build(),
            customers_deleted_counter: meter
                .u64_counter("customers_deleted")
                .with_description("Customer records removed via DELETE /customer/{id}")
                .build(),
        }
    }
}
