// Copyright 2025 Cowboy AI, LLC.

//! Error types for domain operations

use thiserror::Error;

/// Errors that can occur in domain operations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DomainError {
    /// The supplied access code matched no known role
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// The judge access code was correct but no display name was supplied
    #[error("A display name is required to log in as a judge")]
    NameRequired,

    /// A hackathon id did not resolve to a known hackathon
    #[error("Hackathon not found: {0}")]
    HackathonNotFound(String),

    /// Validation error
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Durable read/write failure; logged and non-fatal for the store
    #[error("Persistence error: {0}")]
    PersistenceError(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// External service error
    #[error("External service error: {service} - {message}")]
    ExternalServiceError {
        /// Name of the external service
        service: String,
        /// Error message from the service
        message: String,
    },
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
