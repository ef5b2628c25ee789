use thiserror::Error;

/// Error type for application context initialization
#[derive(Error, Debug)]
pub enum InitContextError {
    /// Returned when a required component has not been created yet
    #[error("component not initialized: {0}")]
    NotInitialized(String),
    /// Returned when a component has an unexpected concrete type
    #[error("type mismatch: {0}")]
    TypeMismatch(String),
    /// Returned when a primitive error occurs
    #[error("primitive error: {0}")]
    Primitive(String),
}
