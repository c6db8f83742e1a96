//! # Framework Errors
//!
//! Errors raised by the actor plumbing itself. Entity-specific failures travel
//! inside [`FrameworkError::EntityError`] and are recovered by the typed clients
//! with [`FrameworkError::into_entity_error`].

use std::error::Error;

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn Error + Send + Sync>),
}

impl FrameworkError {
    /// Recovers the entity's own error type from an [`FrameworkError::EntityError`].
    ///
    /// Returns the original `FrameworkError` untouched when it is not an entity
    /// error or when the boxed error is of a different type.
    pub fn into_entity_error<E>(self) -> Result<E, FrameworkError>
    where
        E: Error + Send + Sync + 'static,
    {
        match self {
            FrameworkError::EntityError(inner) => match inner.downcast::<E>() {
                Ok(entity_error) => Ok(*entity_error),
                Err(inner) => Err(FrameworkError::EntityError(inner)),
            },
            other => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error, PartialEq)]
    #[error("shelf is empty")]
    struct ShelfEmpty;

    #[derive(Debug, thiserror::Error)]
    #[error("other")]
    struct Other;

    #[test]
    fn test_into_entity_error_recovers_boxed_type() {
        let err = FrameworkError::EntityError(Box::new(ShelfEmpty));
        assert_eq!(err.into_entity_error::<ShelfEmpty>().unwrap(), ShelfEmpty);
    }

    #[test]
    fn test_into_entity_error_keeps_foreign_errors() {
        let err = FrameworkError::EntityError(Box::new(Other));
        let back = err.into_entity_error::<ShelfEmpty>().unwrap_err();
        assert_eq!(back.to_string(), "Entity error: other");

        let closed = FrameworkError::ActorClosed.into_entity_error::<ShelfEmpty>();
        assert!(matches!(closed, Err(FrameworkError::ActorClosed)));
    }
}
