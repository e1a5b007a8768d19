//! Error types for loading input and running the grid search.
//!
//! Only conditions that stop a run are errors. A word finder that comes back
//! empty, a placement without enough clearance, or a branch with no viable
//! continuation are ordinary search outcomes and show up as empty results
//! (`Vec::new()` / `None`) instead.

/// Errors surfaced to callers of the loader helpers and the solver.
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    /// No seed word of acceptable length can be formed from the initial letters.
    #[error("no first word can be formed from letters \"{letters}\"")]
    NoFirstWord { letters: String },

    /// A letter bag contained something that is not a letter.
    #[error("invalid letter '{ch}' at position {position}")]
    InvalidLetter { ch: char, position: usize },

    /// A word was written across a cell that already holds a different letter.
    #[error("cell ({x}, {y}) already holds '{existing}', cannot write '{attempted}'")]
    Collision {
        x: i32,
        y: i32,
        existing: char,
        attempted: char,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl GridError {
    /// Short stable code for each variant, handy in scripts parsing CLI output.
    pub fn code(&self) -> &'static str {
        match self {
            GridError::NoFirstWord { .. } => "E001",
            GridError::InvalidLetter { .. } => "E002",
            GridError::Collision { .. } => "E003",
            GridError::Io(_) => "E004",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_first_word_message() {
        let err = GridError::NoFirstWord {
            letters: "qx".to_string(),
        };
        assert_eq!(err.to_string(), "no first word can be formed from letters \"qx\"");
        assert_eq!(err.code(), "E001");
    }

    #[test]
    fn test_io_error_converts() {
        fn open_missing() -> Result<(), GridError> {
            std::fs::File::open("/definitely/not/a/real/path.txt")?;
            Ok(())
        }
        let err = open_missing().unwrap_err();
        assert!(matches!(err, GridError::Io(_)));
        assert_eq!(err.code(), "E004");
    }

    #[test]
    fn test_collision_message() {
        let err = GridError::Collision {
            x: -1,
            y: 2,
            existing: 'a',
            attempted: 'b',
        };
        assert!(err.to_string().contains("(-1, 2)"));
    }
}
