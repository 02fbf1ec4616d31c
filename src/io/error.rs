//! Error types and operation context for placement and world operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all placement operations
#[derive(Debug)]
pub enum PlacementError {
    /// A caller-supplied value failed validation
    InvalidArgument {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// The operation is not allowed in the current lifecycle state
    ///
    /// Raised by every mutator once the QR code has been placed.
    InvalidState {
        /// Operation that was attempted
        operation: &'static str,
        /// Why the state forbids it
        reason: String,
    },

    /// The voxel sink rejected a write, query or notification
    Sink {
        /// Placement operation that was talking to the sink
        operation: &'static str,
        /// Description reported by the sink
        reason: String,
    },

    /// The computed area leaves the vertical range of the world
    OutOfHeightLimit {
        /// Lowest y coordinate of the area
        lowest: i32,
        /// Highest y coordinate of the area
        highest: i32,
        /// Lowest buildable y coordinate of the world
        min_y: i32,
        /// Highest buildable y coordinate of the world
        max_y: i32,
    },

    /// A session operation addressed an actor without a pending placement
    NoPendingPlacement,

    /// Source grid is not a usable QR matrix
    InvalidMatrix {
        /// Description of what's wrong with the grid
        reason: String,
    },

    /// Failed to load a matrix image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid argument '{parameter}' = '{value}': {reason}")
            }
            Self::InvalidState { operation, reason } => {
                write!(f, "Cannot {operation}: {reason}")
            }
            Self::Sink { operation, reason } => {
                write!(f, "Voxel sink failed during {operation}: {reason}")
            }
            Self::OutOfHeightLimit {
                lowest,
                highest,
                min_y,
                max_y,
            } => {
                write!(
                    f,
                    "Area spans y {lowest}..={highest}, outside the world height limit {min_y}..={max_y}"
                )
            }
            Self::NoPendingPlacement => write!(f, "No pending QR code placement"),
            Self::InvalidMatrix { reason } => write!(f, "Invalid matrix: {reason}"),
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for PlacementError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for placement results
pub type Result<T> = std::result::Result<T, PlacementError>;

/// Attaches the running placement operation to sink failures
pub trait WithOperation<T> {
    /// Tag a sink error with the operation that triggered it
    ///
    /// # Errors
    ///
    /// Propagates the original error, with the operation recorded on `Sink` errors
    fn with_operation(self, operation: &'static str) -> Result<T>;
}

impl<T, E> WithOperation<T> for std::result::Result<T, E>
where
    E: Into<PlacementError>,
{
    fn with_operation(self, operation: &'static str) -> Result<T> {
        self.map_err(|e| {
            let mut error = e.into();
            if let PlacementError::Sink {
                operation: slot, ..
            } = &mut error
            {
                *slot = operation;
            }
            error
        })
    }
}

impl From<std::io::Error> for PlacementError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid argument error
pub fn invalid_argument(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> PlacementError {
    PlacementError::InvalidArgument {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create the error returned by any mutator after the code was placed
pub fn already_placed(operation: &'static str) -> PlacementError {
    PlacementError::InvalidState {
        operation,
        reason: "QR code has already been placed".to_string(),
    }
}

/// Create a sink error; the operation is filled in by [`WithOperation`]
pub fn sink_error(reason: &impl ToString) -> PlacementError {
    PlacementError::Sink {
        operation: "unknown",
        reason: reason.to_string(),
    }
}

/// Validate a size-like parameter that must not be negative
///
/// # Errors
///
/// Returns `InvalidArgument` if `value` is negative
pub fn non_negative(parameter: &'static str, value: i32) -> Result<usize> {
    usize::try_from(value)
        .map_err(|_negative| invalid_argument(parameter, &value, &"cannot be negative"))
}
