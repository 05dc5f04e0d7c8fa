//! Tokenizer for Thistle source text.
//!
//! A finite-state machine over individual characters. The tokenizer
//! never aborts: an unrecognized character or an unterminated string
//! still produces a placeholder token alongside the recorded error,
//! so every problematic input region has exactly one token and the
//! stream stays consumable by the parser.

use thiserror::Error;

use crate::diagnostic::SourceDiagnostic;
use crate::span::Range;

/// Kind of a token produced by the tokenizer.
///
/// The tokenizer attaches no meaning beyond recognizing the four
/// keywords and basic literals; everything word-like that is not a
/// keyword is a `Symbol` and interpreted by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Placeholder emitted together with an unknown-character error.
    Unknown,

    Newline,
    Comment, // `//` plus all text through end of line

    // Keywords
    Module,
    Import,
    Fn,
    Return,

    /// Word that is not a keyword: identifiers, type names, ...
    Symbol,

    // Literals
    StringLiteral,
    NumberLiteral,
    BoolLiteral,

    // Punctuation
    Arrow, // ->
    Colon,
    Dot,
    Comma,
    Equal,
    EqualEqual,
    Bang,
    BangEqual,
    Plus,
    Minus,
    Star,
    Slash,
    LBrace,
    RBrace,
    LParen,
    RParen,
    LBracket,
    RBracket,
}

/// A single token: kind, raw text and source range.
///
/// String-literal tokens keep their surrounding quotes in `text`;
/// comment tokens keep the leading `//`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub range: Range,
}

/// Result of tokenizing one source unit.
#[derive(Debug, Default)]
pub struct LexResult {
    pub tokens: Vec<Token>,
    pub errors: Vec<LexError>,
}

/// Lexical errors. Each one is paired with a best-effort token in the
/// output stream.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("unknown character `{text}`")]
    UnknownCharacter { text: String, range: Range },

    #[error("unclosed string literal {text}")]
    UnclosedStringLiteral { text: String, range: Range },
}

impl SourceDiagnostic for LexError {
    fn range(&self) -> Option<Range> {
        match self {
            LexError::UnknownCharacter { range, .. }
            | LexError::UnclosedStringLiteral { range, .. } => Some(*range),
        }
    }
}

/// Tokenize a source string.
pub fn lex(source: &str) -> LexResult {
    let mut lexer = Lexer {
        src: source,
        start: 0,
        index: 0,
        tokens: Vec::new(),
        errors: Vec::new(),
    };
    lexer.run();
    LexResult {
        tokens: lexer.tokens,
        errors: lexer.errors,
    }
}

struct Lexer<'src> {
    src: &'src str,
    /// Start of the token currently being scanned.
    start: usize,
    /// Byte offset of the next unread character.
    index: usize,
    tokens: Vec<Token>,
    errors: Vec<LexError>,
}

impl<'src> Lexer<'src> {
    fn run(&mut self) {
        while let Some(ch) = self.peek() {
            match ch {
                ' ' | '\t' => self.skip(),
                '\n' => {
                    self.consume();
                    self.emit(TokenKind::Newline);
                }
                '"' => {
                    self.consume();
                    self.lex_string();
                }
                '.' => self.single(TokenKind::Dot),
                ',' => self.single(TokenKind::Comma),
                ':' => self.single(TokenKind::Colon),
                '+' => self.single(TokenKind::Plus),
                '*' => self.single(TokenKind::Star),
                '{' => self.single(TokenKind::LBrace),
                '}' => self.single(TokenKind::RBrace),
                '(' => self.single(TokenKind::LParen),
                ')' => self.single(TokenKind::RParen),
                '[' => self.single(TokenKind::LBracket),
                ']' => self.single(TokenKind::RBracket),
                '/' => {
                    self.consume();
                    self.lex_slash();
                }
                '=' => {
                    self.consume();
                    self.lex_pair('=', TokenKind::EqualEqual, TokenKind::Equal);
                }
                '!' => {
                    self.consume();
                    self.lex_pair('=', TokenKind::BangEqual, TokenKind::Bang);
                }
                '-' => {
                    self.consume();
                    self.lex_minus();
                }
                c if c.is_alphabetic() => {
                    self.consume();
                    self.lex_word();
                }
                c if c.is_ascii_digit() => {
                    self.consume();
                    self.lex_number();
                }
                _ => {
                    self.consume();
                    self.unknown_character();
                }
            }
        }
    }

    /// Word scan: runs until an end-of-symbol character, then checks
    /// the keyword table.
    fn lex_word(&mut self) {
        while let Some(ch) = self.peek() {
            if is_end_of_symbol(ch) {
                break;
            }
            self.consume();
        }
        let kind = match &self.src[self.start..self.index] {
            "module" => TokenKind::Module,
            "import" => TokenKind::Import,
            "fn" => TokenKind::Fn,
            "return" => TokenKind::Return,
            _ => TokenKind::Symbol,
        };
        self.emit(kind);
    }

    /// String scan: runs until a closing quote. A newline (or end of
    /// input) instead records an unclosed-string error and still emits
    /// a string-literal token for the text collected so far.
    fn lex_string(&mut self) {
        loop {
            match self.peek() {
                Some('"') => {
                    self.consume();
                    self.emit(TokenKind::StringLiteral);
                    return;
                }
                Some('\n') | None => {
                    self.errors.push(LexError::UnclosedStringLiteral {
                        text: self.src[self.start..self.index].to_string(),
                        range: Range::new(self.start, self.index),
                    });
                    self.emit(TokenKind::StringLiteral);
                    return;
                }
                Some(_) => self.consume(),
            }
        }
    }

    /// Number scan: consumes digits (and `x` for hex-looking numbers)
    /// and emits on state exit.
    fn lex_number(&mut self) {
        while let Some(ch) = self.peek() {
            if ch.is_ascii_digit() || ch == 'x' {
                self.consume();
            } else {
                break;
            }
        }
        self.emit(TokenKind::NumberLiteral);
    }

    /// A leading `-` is ambiguous: negative number, `->`, or minus.
    fn lex_minus(&mut self) {
        match self.peek() {
            Some(c) if c.is_ascii_digit() => {
                self.consume();
                self.lex_number();
            }
            Some('>') => {
                self.consume();
                self.emit(TokenKind::Arrow);
            }
            _ => self.emit(TokenKind::Minus),
        }
    }

    /// `//` starts a line comment consumed through end of line;
    /// a lone `/` is the divide operator.
    fn lex_slash(&mut self) {
        if self.peek() != Some('/') {
            self.emit(TokenKind::Slash);
            return;
        }
        self.consume();
        while let Some(ch) = self.peek() {
            if ch == '\n' {
                break;
            }
            self.consume();
        }
        self.emit(TokenKind::Comment);
    }

    fn lex_pair(&mut self, second: char, paired: TokenKind, alone: TokenKind) {
        if self.peek() == Some(second) {
            self.consume();
            self.emit(paired);
        } else {
            self.emit(alone);
        }
    }

    fn unknown_character(&mut self) {
        self.errors.push(LexError::UnknownCharacter {
            text: self.src[self.start..self.index].to_string(),
            range: Range::new(self.start, self.index),
        });
        self.emit(TokenKind::Unknown);
    }

    fn single(&mut self, kind: TokenKind) {
        self.consume();
        self.emit(kind);
    }

    fn emit(&mut self, kind: TokenKind) {
        self.tokens.push(Token {
            kind,
            text: self.src[self.start..self.index].to_string(),
            range: Range::new(self.start, self.index),
        });
        self.start = self.index;
    }

    fn peek(&self) -> Option<char> {
        self.src[self.index..].chars().next()
    }

    fn consume(&mut self) {
        if let Some(ch) = self.peek() {
            self.index += ch.len_utf8();
        }
    }

    /// Skip a character without including it in any token's range.
    fn skip(&mut self) {
        self.consume();
        self.start = self.index;
    }
}

fn is_end_of_symbol(ch: char) -> bool {
    matches!(
        ch,
        ' ' | '\t'
            | '\n'
            | '\''
            | '"'
            | ':'
            | '.'
            | ','
            | '='
            | '+'
            | '-'
            | '*'
            | '/'
            | '('
            | ')'
            | '['
            | ']'
            | '{'
            | '}'
            | '!'
            | '@'
            | '#'
            | '$'
            | '%'
            | '^'
            | '&'
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        lex(source).tokens.into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn tokenizes_module_header() {
        let result = lex("module main\n");
        assert!(result.errors.is_empty());
        let toks: Vec<(TokenKind, &str)> = result
            .tokens
            .iter()
            .map(|t| (t.kind, t.text.as_str()))
            .collect();
        assert_eq!(
            toks,
            vec![
                (TokenKind::Module, "module"),
                (TokenKind::Symbol, "main"),
                (TokenKind::Newline, "\n"),
            ]
        );
    }

    #[test]
    fn token_ranges_partition_the_source() {
        let src = "module main\n\nfn add(a: u8, b: u8) -> u16 {\n    return u16(a) // cast\n}\n";
        let result = lex(src);
        assert!(result.errors.is_empty());

        let mut cursor = 0;
        for tok in &result.tokens {
            assert!(
                src[cursor..tok.range.lo].chars().all(|c| c == ' ' || c == '\t'),
                "gap before {tok:?} contains non-whitespace"
            );
            assert_eq!(tok.text, &src[tok.range.lo..tok.range.hi]);
            cursor = tok.range.hi;
        }
        assert!(src[cursor..].chars().all(|c| c == ' ' || c == '\t'));
    }

    #[test]
    fn keywords_come_from_the_fixed_table() {
        assert_eq!(
            kinds("module import fn return true extra"),
            vec![
                TokenKind::Module,
                TokenKind::Import,
                TokenKind::Fn,
                TokenKind::Return,
                TokenKind::Symbol, // `true` is not a keyword
                TokenKind::Symbol,
            ]
        );
    }

    #[test]
    fn unclosed_string_literal_recovers() {
        let result = lex("\"abc\nx");
        assert_eq!(result.errors.len(), 1);
        assert!(matches!(
            &result.errors[0],
            LexError::UnclosedStringLiteral { range, .. } if *range == Range::new(0, 4)
        ));
        // Best-effort token covers the text up to, not including, the newline.
        assert_eq!(result.tokens[0].kind, TokenKind::StringLiteral);
        assert_eq!(result.tokens[0].text, "\"abc");
        assert_eq!(result.tokens[0].range, Range::new(0, 4));
        assert_eq!(result.tokens[1].kind, TokenKind::Newline);
    }

    #[test]
    fn closed_string_keeps_its_quotes() {
        let result = lex("\"hi there\"");
        assert!(result.errors.is_empty());
        assert_eq!(result.tokens[0].text, "\"hi there\"");
    }

    #[test]
    fn unknown_character_yields_error_and_placeholder() {
        let result = lex("?");
        assert_eq!(result.errors.len(), 1);
        assert!(matches!(
            &result.errors[0],
            LexError::UnknownCharacter { text, .. } if text == "?"
        ));
        assert_eq!(result.tokens[0].kind, TokenKind::Unknown);
    }

    #[test]
    fn minus_disambiguation() {
        let result = lex("- -> -5");
        assert!(result.errors.is_empty());
        let toks: Vec<(TokenKind, &str)> = result
            .tokens
            .iter()
            .map(|t| (t.kind, t.text.as_str()))
            .collect();
        assert_eq!(
            toks,
            vec![
                (TokenKind::Minus, "-"),
                (TokenKind::Arrow, "->"),
                (TokenKind::NumberLiteral, "-5"),
            ]
        );
    }

    #[test]
    fn hex_looking_numbers_lex_as_one_token() {
        let result = lex("0x20");
        assert_eq!(result.tokens[0].kind, TokenKind::NumberLiteral);
        assert_eq!(result.tokens[0].text, "0x20");
    }

    #[test]
    fn line_comment_runs_to_end_of_line() {
        assert_eq!(
            kinds("a // rest of line\n"),
            vec![TokenKind::Symbol, TokenKind::Comment, TokenKind::Newline]
        );
        let result = lex("x // note");
        assert_eq!(result.tokens[1].text, "// note");
    }

    #[test]
    fn equality_and_negation_pairs() {
        assert_eq!(
            kinds("== = != ! /"),
            vec![
                TokenKind::EqualEqual,
                TokenKind::Equal,
                TokenKind::BangEqual,
                TokenKind::Bang,
                TokenKind::Slash,
            ]
        );
    }
}
