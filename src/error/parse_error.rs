#[derive(Debug, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing.
///
/// Positions are 1-based word indices within the input line.
pub enum ParseError {
    /// The parser reached a word that did not lex to a valid token.
    InvalidToken {
        /// The offending word, cut to ten characters.
        lexeme:   String,
        /// Word position in the line.
        position: usize,
    },
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// What was expected and what was found.
        token:    String,
        /// Word position in the line.
        position: usize,
    },
    /// Reached the end of the line unexpectedly.
    UnexpectedEndOfInput {
        /// Word position of the end marker.
        position: usize,
    },
    /// An identifier was required, e.g. as a comparison operand or after
    /// `integer`.
    ExpectedIdentifier {
        /// The token found instead.
        found:    String,
        /// Word position in the line.
        position: usize,
    },
    /// A `{` has no matching `}` before the end of the line.
    UnbalancedBraces {
        /// Word position of the opening brace.
        position: usize,
    },
    /// The line holds more tokens than the configured capacity.
    TooManyTokens {
        /// The capacity, end marker included.
        limit: usize,
    },
    /// Parentheses and braces nest deeper than the configured limit.
    NestingTooDeep {
        /// The configured depth.
        limit:    usize,
        /// Word position of the first opener past the limit.
        position: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidToken { lexeme, position } => {
                write!(f, "Error at word {position}: Invalid token '{lexeme}'.")
            },
            Self::UnexpectedToken { token, position } => {
                write!(f, "Error at word {position}: Unexpected token: {token}.")
            },
            Self::UnexpectedEndOfInput { position } => {
                write!(f, "Error at word {position}: Unexpected end of input.")
            },
            Self::ExpectedIdentifier { found, position } => {
                write!(f, "Error at word {position}: Expected identifier, found {found}.")
            },
            Self::UnbalancedBraces { position } => write!(f,
                                                          "Error at word {position}: Opening brace '{{' is never closed."),
            Self::TooManyTokens { limit } => {
                write!(f, "Line has more than {limit} tokens.")
            },
            Self::NestingTooDeep { limit, position } => {
                write!(f, "Error at word {position}: Nesting deeper than {limit} levels.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
