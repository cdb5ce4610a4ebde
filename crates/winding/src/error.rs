use std::fmt;

/// Errors raised while turning a vertex ring into a winding count.
#[derive(Debug, Clone, PartialEq)]
pub enum WindingError {
    /// Fewer than three usable vertices (after dropping a duplicate closing point).
    TooFewPoints { len: usize },
    /// Vertices `index` and `index + 1` (cyclically) coincide, so the edge has no direction.
    DegenerateEdge { index: usize },
    /// The turning sum is not a whole number of turns.
    NotIntegral { raw: f64 },
    /// The ring turns zero times in total, so it has no orientation.
    NoNetTurn,
}

impl fmt::Display for WindingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WindingError::TooFewPoints { len } => {
                write!(f, "need at least 3 points for a polygon, got {len}")
            }
            WindingError::DegenerateEdge { index } => {
                write!(f, "zero-length edge starting at vertex {index}")
            }
            WindingError::NotIntegral { raw } => write!(
                f,
                "turning sum is not a whole number of turns ({raw} rotations)"
            ),
            WindingError::NoNetTurn => write!(f, "polygon has zero net rotation"),
        }
    }
}

impl std::error::Error for WindingError {}
