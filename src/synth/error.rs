use std::fmt;
use std::path::PathBuf;

/// Error raised by [`synthesize`](super::synthesize).
///
/// All variants surface synchronously to the caller; nothing is retried or
/// swallowed, and no templates are produced on failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SynthError {
    /// The function's source file is not a descendant of the root context
    /// and no fallback prefix was supplied.
    SourceNotUnderRoot {
        /// Declared name of the offending function
        function: String,
        /// The function's source file
        source: PathBuf,
        /// The root context, if one was supplied at all
        root: Option<PathBuf>,
    },
    /// A declared type tag has no URL converter token.
    ///
    /// The caller must fix the function signature or extend the type map.
    UnrecognizedParameterType {
        /// Name of the offending parameter
        parameter: String,
        /// The declared tag with no type-map entry
        type_tag: String,
    },
    /// Partition counts do not sum to the total parameter count.
    ///
    /// Internal consistency fault: signals a logic defect in the
    /// partitioning step, not a usage error. Should be unreachable.
    PartitionInvariant {
        /// Declared name of the function being partitioned
        function: String,
        /// required + optional + hidden
        partitioned: usize,
        /// Total declared parameters
        total: usize,
    },
}

impl fmt::Display for SynthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SynthError::SourceNotUnderRoot {
                function,
                source,
                root,
            } => match root {
                Some(root) => write!(
                    f,
                    "source file '{}' of function '{}' is not below root '{}' \
                    and no fallback prefix was supplied",
                    source.display(),
                    function,
                    root.display()
                ),
                None => write!(
                    f,
                    "no root context for function '{}' (source '{}') \
                    and no fallback prefix was supplied",
                    function,
                    source.display()
                ),
            },
            SynthError::UnrecognizedParameterType {
                parameter,
                type_tag,
            } => write!(
                f,
                "parameter '{}' declares type '{}' which has no URL converter token",
                parameter, type_tag
            ),
            SynthError::PartitionInvariant {
                function,
                partitioned,
                total,
            } => write!(
                f,
                "parameter partition for '{}' lost parameters: {} partitioned of {} declared",
                function, partitioned, total
            ),
        }
    }
}

impl std::error::Error for SynthError {}
