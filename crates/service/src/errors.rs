use models::errors::ModelError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// The collection is empty.
    #[error("no data found")]
    NoData,
    /// Business-rule rejection; the message is meant for the caller.
    #[error("{0}")]
    Invalid(String),
    #[error("database error: {0}")]
    Db(String),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::Invalid(format!("{} not found", entity)) }
}

impl From<ModelError> for ServiceError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::Validation(m) => Self::Invalid(m),
            ModelError::Db(m) => Self::Db(m),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message() {
        assert_eq!(ServiceError::not_found("Material cost").to_string(), "Material cost not found");
    }

    #[test]
    fn model_errors_are_classified() {
        let v: ServiceError = ModelError::Validation("bad".into()).into();
        assert!(matches!(v, ServiceError::Invalid(ref m) if m == "bad"));
        let d: ServiceError = ModelError::Db("down".into()).into();
        assert!(matches!(d, ServiceError::Db(ref m) if m == "down"));
    }
}
