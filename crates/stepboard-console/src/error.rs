//! Console protocol errors.

/// Errors that can occur while reading or parsing console input.
#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    /// A command is missing a required argument.
    #[error("{command}: missing argument")]
    MissingArgument {
        /// The command name.
        command: &'static str,
    },

    /// A square name could not be parsed.
    #[error("invalid square: {text}")]
    InvalidSquare {
        /// The text that failed to parse.
        text: String,
    },

    /// A move in `b1c3` form could not be parsed.
    #[error("invalid move: {text}")]
    InvalidMove {
        /// The text that failed to parse.
        text: String,
    },

    /// An I/O error occurred while reading input or writing output.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
