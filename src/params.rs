use axum::{
    extract::{FromRequestParts, Path, rejection::PathRejection},
    http::request::Parts,
};

/// The optional `{id}` segment of a customer route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CustomerId {
    Present(String),
    Absent,
}

impl CustomerId {
    fn from_segment(segment: Option<String>) -> Self {
        match segment {
            Some(id) if !id.is_empty() => Self::Present(id),
            _ => Self::Absent,
        }
    }
}

impl<S> FromRequestParts<S> for CustomerId
where
    S: Send + Sync,
{
    type Rejection = PathRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let segment = Option::<Path<String>>::from_request_parts(parts, state).await?;
        Ok(Self::from_segment(segment.map(|Path(id)| id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_segment_is_absent() {
        assert_eq!(CustomerId::from_segment(None), CustomerId::Absent);
        assert_eq!(CustomerId::from_segment(Some(String::new())), CustomerId::Absent);
        assert_eq!(
            CustomerId::from_segment(Some("42".into())),
            CustomerId::Present("42".into())
        );
    }
}
