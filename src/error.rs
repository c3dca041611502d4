/// Result alias for `cohort`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by the clustering engine and the record source.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid argument passed to an operation (empty member list, zero divisor).
    #[error("invalid argument '{name}': {message}")]
    InvalidArgument {
        /// Argument name.
        name: &'static str,
        /// Error message.
        message: &'static str,
    },

    /// Operation not valid in the current state.
    #[error("invalid state: {0}")]
    InvalidState(&'static str),

    /// One side of a comparison carries a category encoding, the other does not.
    #[error("category encoding missing on one side of the comparison")]
    NotEncoded,

    /// Category vectors of different lengths.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch {
        /// Expected dimension.
        expected: usize,
        /// Found dimension.
        found: usize,
    },

    /// Not enough records to seed the requested clusters.
    #[error("cannot seed {requested} clusters from {n_items} records")]
    InvalidClusterCount {
        /// Requested count.
        requested: usize,
        /// Number of records.
        n_items: usize,
    },

    /// A row whose numeric field could not be parsed.
    #[error("line {line}: cannot parse {column} from {value:?}")]
    Malformed {
        /// 1-based line number, header included.
        line: u64,
        /// Column name.
        column: &'static str,
        /// Raw field text.
        value: String,
    },

    /// Delimited-text reader failure.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// I/O failure.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
