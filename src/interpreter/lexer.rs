use log::trace;
use logos::Logos;

use crate::{
    error::ParseError,
    interpreter::{
        config::{Config, Dialect},
        parser::core::ParseResult,
    },
};

/// Longest identifier or integer literal accepted by the lexer.
pub const MAX_LEXEME_LEN: usize = 10;

/// Represents a lexical token in the source input.
///
/// Input lines are split on whitespace and every word is lexed on its own, so
/// a word becomes a token only when a single variant matches it completely.
/// Anything else becomes [`Token::Error`]. Every stream produced by
/// [`tokenize`] ends with exactly one [`Token::End`].
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
pub enum Token {
    /// Integer literal tokens of at most ten digits, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Number(i64),
    /// Identifier tokens of at most ten lowercase letters, such as `count`.
    #[regex(r"[a-z]+", parse_identifier)]
    Identifier(String),
    /// `print`
    #[token("print")]
    Print,
    /// `integer`
    #[token("integer")]
    Integer,
    /// `while`
    #[token("while")]
    While,
    /// `do`
    #[token("do")]
    Do,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `=`
    #[token("=")]
    Equals,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`, along with the en dash, em dash and minus sign glyphs that show up
    /// in pasted text.
    #[token("-")]
    #[token("\u{2013}")]
    #[token("\u{2014}")]
    #[token("\u{2212}")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,

    /// A word that is not valid in the active dialect. Holds at most the
    /// first ten characters of the word.
    Error(String),
    /// End-of-line marker appended after the last real token.
    End,
}

impl Token {
    /// Narrows a token to what the given dialect understands.
    ///
    /// The base dialect has no declaration or control-flow keywords, so those
    /// words are ordinary identifiers there. Braces and relational operators
    /// have no meaning in the base dialect and become error tokens.
    ///
    /// # Parameters
    /// - `dialect`: The active language dialect.
    /// - `word`: The source word the token was lexed from.
    ///
    /// # Returns
    /// The token as the dialect sees it.
    #[must_use]
    pub fn restrict_to(self, dialect: Dialect, word: &str) -> Self {
        if dialect.has_control_flow() {
            return self;
        }

        match self {
            Self::Integer | Self::While | Self::Do | Self::If | Self::Else => {
                Self::Identifier(word.to_string())
            },
            Self::LBrace
            | Self::RBrace
            | Self::EqualEqual
            | Self::BangEqual
            | Self::Less
            | Self::Greater => Self::Error(truncate(word)),
            other => other,
        }
    }
}

/// Parses an integer literal from the current token slice.
///
/// # Returns
/// - `Some(i64)`: The value, when the slice has at most ten digits.
/// - `None`: If the literal is too long.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    let slice = lex.slice();
    if slice.len() > MAX_LEXEME_LEN {
        return None;
    }
    slice.parse().ok()
}

/// Reads an identifier from the current token slice, rejecting names longer
/// than ten letters.
fn parse_identifier(lex: &logos::Lexer<Token>) -> Option<String> {
    let slice = lex.slice();
    (slice.len() <= MAX_LEXEME_LEN).then(|| slice.to_string())
}

fn truncate(word: &str) -> String {
    word.chars().take(MAX_LEXEME_LEN).collect()
}

/// Classifies a single whitespace-free word.
///
/// The word is a valid token only if the lexer matches it in one piece;
/// `k=5` or `12ab` therefore become error tokens rather than several tokens.
///
/// # Parameters
/// - `word`: One whitespace-delimited word.
/// - `dialect`: The active language dialect.
///
/// # Returns
/// The classified token, possibly [`Token::Error`].
///
/// # Example
/// ```
/// use plang::interpreter::{
///     config::Dialect,
///     lexer::{Token, classify},
/// };
///
/// assert_eq!(classify("while", Dialect::Extended), Token::While);
/// assert_eq!(classify("while", Dialect::Base), Token::Identifier("while".into()));
/// assert_eq!(classify("k=5", Dialect::Extended), Token::Error("k=5".into()));
/// ```
#[must_use]
pub fn classify(word: &str, dialect: Dialect) -> Token {
    let mut lexer = Token::lexer(word);

    match (lexer.next(), lexer.next()) {
        (Some(Ok(token)), None) => token.restrict_to(dialect, word),
        _ => Token::Error(truncate(word)),
    }
}

/// Splits a line into words and classifies each one.
///
/// Each token is paired with its 1-based word position for diagnostics. The
/// stream always ends with a single [`Token::End`], so a blank line yields a
/// stream of length one; see [`is_empty_program`].
///
/// # Parameters
/// - `source`: One raw input line.
/// - `config`: Dialect and token capacity.
///
/// # Returns
/// The token stream, terminated by the end marker.
///
/// # Errors
/// - [`ParseError::TooManyTokens`] if the line has more tokens than the
///   configured capacity allows.
/// - [`ParseError::NestingTooDeep`] if `(` and `{` nest deeper than the
///   configured depth.
///
/// # Example
/// ```
/// use plang::interpreter::{config::Config, lexer::{Token, tokenize}};
///
/// let tokens = tokenize("print k ;", &Config::default()).unwrap();
/// assert_eq!(tokens,
///            vec![(Token::Print, 1),
///                 (Token::Identifier("k".into()), 2),
///                 (Token::Semicolon, 3),
///                 (Token::End, 4)]);
/// ```
pub fn tokenize(source: &str, config: &Config) -> ParseResult<Vec<(Token, usize)>> {
    let limit = config.limits.max_tokens;
    let mut tokens = Vec::new();

    for (index, word) in source.split_whitespace().enumerate() {
        // One slot stays reserved for the end marker.
        if tokens.len() + 1 >= limit {
            return Err(ParseError::TooManyTokens { limit });
        }
        tokens.push((classify(word, config.dialect), index + 1));
    }

    let end = tokens.len() + 1;
    tokens.push((Token::End, end));
    trace!("tokenized {} word(s): {tokens:?}", end - 1);

    check_depth(&tokens, config.limits.max_depth)?;
    Ok(tokens)
}

/// Rejects streams whose openers nest past `limit`.
///
/// Unmatched closers are left for the parser to report.
fn check_depth(tokens: &[(Token, usize)], limit: usize) -> ParseResult<()> {
    let mut depth = 0usize;

    for (token, position) in tokens {
        match token {
            Token::LParen | Token::LBrace => {
                depth += 1;
                if depth > limit {
                    return Err(ParseError::NestingTooDeep { limit,
                                                            position: *position });
                }
            },
            Token::RParen | Token::RBrace => depth = depth.saturating_sub(1),
            _ => {},
        }
    }

    Ok(())
}

/// Returns `true` when a stream holds nothing but the end marker.
#[must_use]
pub const fn is_empty_program(tokens: &[(Token, usize)]) -> bool {
    tokens.len() < 2
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::config::Limits;

    fn kinds(source: &str, dialect: Dialect) -> Vec<Token> {
        let config = Config { dialect,
                              ..Config::default() };
        tokenize(source, &config).unwrap()
                                 .into_iter()
                                 .map(|(token, _)| token)
                                 .collect()
    }

    #[test]
    fn symbols_keywords_and_words() {
        assert_eq!(kinds("integer k ; k = ( 3 ) ;", Dialect::Extended),
                   vec![Token::Integer,
                        Token::Identifier("k".into()),
                        Token::Semicolon,
                        Token::Identifier("k".into()),
                        Token::Equals,
                        Token::LParen,
                        Token::Number(3),
                        Token::RParen,
                        Token::Semicolon,
                        Token::End]);
    }

    #[test]
    fn unicode_dashes_are_minus() {
        assert_eq!(kinds("\u{2013} \u{2014} \u{2212} -", Dialect::Extended),
                   vec![Token::Minus, Token::Minus, Token::Minus, Token::Minus, Token::End]);
    }

    #[test]
    fn length_limit_is_ten() {
        assert_eq!(classify("abcdefghij", Dialect::Extended),
                   Token::Identifier("abcdefghij".into()));
        assert_eq!(classify("abcdefghijk", Dialect::Extended),
                   Token::Error("abcdefghij".into()));
        assert_eq!(classify("9999999999", Dialect::Extended), Token::Number(9_999_999_999));
        assert_eq!(classify("12345678901", Dialect::Extended),
                   Token::Error("1234567890".into()));
    }

    #[test]
    fn mixed_and_uppercase_words_are_errors() {
        assert_eq!(classify("abc1", Dialect::Extended), Token::Error("abc1".into()));
        assert_eq!(classify("Print", Dialect::Extended), Token::Error("Print".into()));
        assert_eq!(classify("12ab", Dialect::Extended), Token::Error("12ab".into()));
        assert_eq!(classify("printer", Dialect::Extended),
                   Token::Identifier("printer".into()));
    }

    #[test]
    fn base_dialect_drops_extended_vocabulary() {
        assert_eq!(kinds("if { == }", Dialect::Base),
                   vec![Token::Identifier("if".into()),
                        Token::Error("{".into()),
                        Token::Error("==".into()),
                        Token::Error("}".into()),
                        Token::End]);
    }

    #[test]
    fn nesting_past_the_depth_limit_is_rejected() {
        let config = Config { limits: Limits { max_depth: 2,
                                               ..Limits::default() },
                              ..Config::default() };
        assert!(tokenize("print ( ( 1 ) ) ;", &config).is_ok());
        assert!(tokenize("print ( 1 ) + ( ( 2 ) ) ;", &config).is_ok());
        assert_eq!(tokenize("print ( ( ( 1 ) ) ) ;", &config),
                   Err(ParseError::NestingTooDeep { limit:    2,
                                                    position: 4, }));
        assert!(tokenize("while ( a < b ) do { { ( 1 ) } } ;", &config).is_err());
    }

    #[test]
    fn blank_line_is_empty_program() {
        let tokens = tokenize("  \t ", &Config::default()).unwrap();
        assert!(is_empty_program(&tokens));
        assert_eq!(tokens, vec![(Token::End, 1)]);
    }

    #[test]
    fn token_capacity_is_enforced() {
        let config = Config { limits: Limits { max_tokens: 4,
                                               ..Limits::default() },
                              ..Config::default() };
        assert!(tokenize("print k ;", &config).is_ok());
        assert!(matches!(tokenize("print k + 1 ;", &config),
                         Err(ParseError::TooManyTokens { limit: 4 })));
    }
}
