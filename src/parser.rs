use crate::error::{LogicError, LogicResult};
use crate::expr::{self, Expression};
use crate::symbols::BinaryOperator;
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;
use std::io::BufRead;
use std::iter::Peekable;
use std::rc::Rc;
use std::slice::Iter;
use std::str::FromStr;
use tracing::{debug, trace};

lazy_static! {
    static ref TOKENIZER: Regex = Regex::new(
        r"(?P<space>\s+)|(?P<symbol><->|->|~|\^)|(?P<word>[a-z]+)|(?P<keyword>[A-Z]+)|(?P<open>\()|(?P<close>\))|(?P<other>.)"
    )
    .expect("tokenizer pattern is valid");
}

/// Operators spelled as lowercase words, only recognised between whitespace.
const SPACED_OPERATORS: [&str; 2] = ["v", "xor"];

const BINARY_LEVELS: usize = 5;

/// Deepest run of enclosing parentheses and negations `parse` accepts.
pub const MAX_NESTING: usize = 256;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Var(String),
    Constant(bool),
    Not,
    Operator(BinaryOperator),
    OpenParen,
    CloseParen,
    Eof,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Var(name) => write!(f, "variable `{name}`"),
            Self::Constant(true) => write!(f, "`T`"),
            Self::Constant(false) => write!(f, "`F`"),
            Self::Not => write!(f, "`~`"),
            Self::Operator(op) => write!(f, "`{op}`"),
            Self::OpenParen => write!(f, "`(`"),
            Self::CloseParen => write!(f, "`)`"),
            Self::Eof => write!(f, "end of input"),
        }
    }
}

/// A token and the character offset it starts at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexeme {
    pub token: Token,
    pub position: usize,
}

type TokenReader<'a> = Peekable<Iter<'a, Lexeme>>;

/// Splits `src` into lexemes, terminated by [`Token::Eof`].
pub fn tokenize(src: &str) -> LogicResult<Vec<Lexeme>> {
    let mut result = Vec::new();
    let position = |byte: usize| src[..byte].chars().count();

    for c in TOKENIZER.captures_iter(src) {
        if c.name("space").is_some() {
            continue;
        }

        let (token, start) = if let Some(symbol) = c.name("symbol") {
            let token = match symbol.as_str() {
                "~" => Token::Not,
                other => match BinaryOperator::from_symbol(other) {
                    Some(op) => Token::Operator(op),
                    None => return Err(unknown(src, symbol.start())),
                },
            };
            (token, symbol.start())
        } else if let Some(word) = c.name("word") {
            let text = word.as_str();
            let spaced = SPACED_OPERATORS.contains(&text)
                && src[..word.start()].ends_with(char::is_whitespace)
                && src[word.end()..].starts_with(char::is_whitespace);

            let token = match BinaryOperator::from_symbol(text) {
                Some(op) if spaced => Token::Operator(op),
                _ => Token::Var(text.to_string()),
            };
            (token, word.start())
        } else if let Some(keyword) = c.name("keyword") {
            let token = match keyword.as_str() {
                "T" => Token::Constant(true),
                "F" => Token::Constant(false),
                other => match BinaryOperator::from_symbol(other) {
                    Some(op) => Token::Operator(op),
                    None => return Err(unknown(src, keyword.start())),
                },
            };
            (token, keyword.start())
        } else if let Some(open) = c.name("open") {
            (Token::OpenParen, open.start())
        } else if let Some(close) = c.name("close") {
            (Token::CloseParen, close.start())
        } else if let Some(other) = c.name("other") {
            return Err(unknown(src, other.start()));
        } else {
            continue;
        };

        result.push(Lexeme {
            token,
            position: position(start),
        });
    }

    result.push(Lexeme {
        token: Token::Eof,
        position: src.chars().count(),
    });

    trace!(tokens = result.len(), "tokenized {:?}", src);

    Ok(result)
}

fn unknown(src: &str, byte: usize) -> LogicError {
    LogicError::Lex {
        character: src[byte..].chars().next().unwrap_or_default(),
        position: src[..byte].chars().count(),
    }
}

/// Parses a formula.
///
/// Precedence from loosest to tightest: `<->`, `->`, `xor`/`XNOR`,
/// `v`/`NOR`, `^`/`NAND`, prefix `~`. Chains of one level group to the left.
pub fn parse(src: &str) -> LogicResult<Rc<Expression>> {
    let tokens = tokenize(src)?;
    let mut reader = tokens.iter().peekable();

    if matches!(reader.peek(), None | Some(Lexeme { token: Token::Eof, .. })) {
        return Err(LogicError::empty_expression());
    }

    let result = parse_binary(&mut reader, 0, 0)?;
    expect(&Token::Eof, &mut reader)?;

    debug!("parsed {:?} as {}", src, result);

    Ok(result)
}

// depth counts the open parentheses and negations enclosing the current token
fn parse_binary(tokens: &mut TokenReader, level: usize, depth: usize) -> LogicResult<Rc<Expression>> {
    if level == BINARY_LEVELS {
        return parse_negation(tokens, depth);
    }

    let mut left = parse_binary(tokens, level + 1, depth)?;

    while let Some(op) = peek_operator(tokens, level) {
        tokens.next();
        let right = parse_binary(tokens, level + 1, depth)?;
        left = expr::binary(op, left, right);
    }

    Ok(left)
}

fn peek_operator(tokens: &mut TokenReader, level: usize) -> Option<BinaryOperator> {
    match tokens.peek() {
        Some(Lexeme {
            token: Token::Operator(op),
            ..
        }) if op.precedence() == level => Some(*op),
        _ => None,
    }
}

fn nest(depth: usize, position: usize) -> LogicResult<usize> {
    if depth >= MAX_NESTING {
        return Err(LogicError::parse("nesting too deep", position));
    }

    Ok(depth + 1)
}

fn parse_negation(tokens: &mut TokenReader, depth: usize) -> LogicResult<Rc<Expression>> {
    if let Some(Lexeme {
        token: Token::Not,
        position,
    }) = tokens.peek()
    {
        let depth = nest(depth, *position)?;
        tokens.next();
        return Ok(expr::not(parse_negation(tokens, depth)?));
    }

    parse_atom(tokens, depth)
}

fn parse_atom(tokens: &mut TokenReader, depth: usize) -> LogicResult<Rc<Expression>> {
    match tokens.next() {
        Some(Lexeme {
            token: Token::Var(name),
            ..
        }) => Ok(expr::var(name.as_str())),
        Some(Lexeme {
            token: Token::Constant(value),
            ..
        }) => Ok(expr::constant(*value)),
        Some(Lexeme {
            token: Token::OpenParen,
            position,
        }) => {
            let inner = parse_binary(tokens, 0, nest(depth, *position)?)?;
            expect(&Token::CloseParen, tokens)?;
            Ok(inner)
        }
        Some(Lexeme { token, position }) => {
            Err(LogicError::expected("expression", token, *position))
        }
        None => Err(LogicError::expected("expression", Token::Eof, 0)),
    }
}

fn expect<'a>(token: &Token, tokens: &mut TokenReader<'a>) -> LogicResult<&'a Lexeme> {
    match tokens.next() {
        Some(lexeme) if lexeme.token == *token => Ok(lexeme),
        Some(lexeme) => Err(LogicError::expected(
            token,
            &lexeme.token,
            lexeme.position,
        )),
        None => Err(LogicError::expected(token, Token::Eof, 0)),
    }
}

/// A formula read from text together with its free variables.
#[derive(Debug, Clone)]
pub struct ParsedFormula {
    pub vars: Vec<String>,
    pub expression: Rc<Expression>,
}

impl ParsedFormula {
    pub fn new(contents: &mut dyn BufRead) -> LogicResult<Self> {
        let mut src = String::new();
        contents.read_to_string(&mut src)?;

        src.parse()
    }
}

impl FromStr for ParsedFormula {
    type Err = LogicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let expression = parse(s)?;

        Ok(Self {
            vars: expression.free_variables(),
            expression,
        })
    }
}

// syntax:
// p
// T, F
// ~p, ~~p, ~(p ^ q)
// p ^ q, p NAND q
// p v q, p NOR q          (v only between whitespace)
// p xor q, p XNOR q       (xor only between whitespace, XOR anywhere)
// p -> q
// p <-> q
// p ^ q ^ r == ((p ^ q) ^ r)
// ~p ^ q == ((~p) ^ q)
// p ^ q v r == ((p ^ q) v r)
// ((p)) == p
