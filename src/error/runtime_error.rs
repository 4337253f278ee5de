#[derive(Debug, PartialEq, Eq)]
/// Represents all errors that can occur while executing a parsed line.
pub enum RuntimeError {
    /// Tried to use a variable that was never declared.
    UnknownVariable {
        /// The name of the variable.
        name:     String,
        /// Word position in the line.
        position: usize,
    },
    /// Declared the same name twice.
    DuplicateDeclaration {
        /// The name of the variable.
        name:     String,
        /// Word position in the line.
        position: usize,
    },
    /// No room left in the symbol table for a new variable.
    SymbolTableFull {
        /// The name that could not be stored.
        name:     String,
        /// The table capacity.
        capacity: usize,
    },
    /// Arithmetic overflowed a signed 64-bit integer.
    Overflow {
        /// Word position of the operator.
        position: usize,
    },
    /// The printed output no longer fits the output buffer.
    OutputBufferFull {
        /// The buffer capacity in bytes.
        capacity: usize,
    },
    /// The configured `while` iteration cap was reached.
    LoopLimitExceeded {
        /// The cap.
        limit:    u64,
        /// Word position of the `while`.
        position: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { name, position } => {
                write!(f, "Error at word {position}: Unknown variable '{name}'.")
            },
            Self::DuplicateDeclaration { name, position } => write!(f,
                                                                    "Error at word {position}: Variable '{name}' is already declared."),
            Self::SymbolTableFull { name, capacity } => write!(f,
                                                               "Cannot store '{name}': symbol table is full ({capacity} variables)."),
            Self::Overflow { position } => write!(f,
                                                  "Error at word {position}: Integer overflow while trying to compute result."),
            Self::OutputBufferFull { capacity } => {
                write!(f, "Output exceeds the {capacity} byte buffer.")
            },
            Self::LoopLimitExceeded { limit, position } => write!(f,
                                                                  "Error at word {position}: Loop exceeded {limit} iterations."),
        }
    }
}

impl std::error::Error for RuntimeError {}
