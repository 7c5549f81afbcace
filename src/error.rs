use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the simulation core.
///
/// All of these are raised once, at construction or first occurrence. Steady-state
/// ticking has no failure path.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid session parameters or a missing host surface.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Attempted to normalize a zero-length or non-finite vector.
    #[error("cannot normalize a degenerate vector")]
    DegenerateVector,

    /// The arena is too crowded to place every ball without overlap.
    #[error(
        "placed {placed} of {requested} balls; gave up after {attempts} attempts for the next one"
    )]
    SpawnDensity {
        placed: usize,
        requested: usize,
        attempts: u32,
    },

    /// Malformed settings document.
    #[error("invalid settings: {0}")]
    Settings(#[from] serde_json::Error),

    /// Settings file could not be read.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_is_informative() {
        let e = Error::Configuration("width must be > 0".to_string());
        let msg = e.to_string();
        assert!(msg.contains("configuration"));
        assert!(msg.contains("width"));

        let e = Error::SpawnDensity {
            placed: 3,
            requested: 10,
            attempts: 10_000,
        };
        let msg = e.to_string();
        assert!(msg.contains("3 of 10"));
    }

    #[test]
    fn test_settings_error_converts() {
        let parse: std::result::Result<u32, _> = serde_json::from_str("not json");
        let err: Error = parse.unwrap_err().into();
        assert!(matches!(err, Error::Settings(_)));
    }
}
