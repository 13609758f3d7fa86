use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug, thiserror::Error)]
pub enum CustomerError {
    #[error("ERROR: Missing id. Please provide customer id in the request.")]
    MissingId,

    #[error("ERROR: No customer found with id: {0}. Please try again with a different id.")]
    NotFound(String),
}

impl CustomerError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingId => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for CustomerError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}
