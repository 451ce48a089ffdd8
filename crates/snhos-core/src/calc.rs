//! Restricted arithmetic evaluator behind the `calc` command.
//!
//! Input is first checked against an allow-list of characters; nothing that
//! fails the check is ever parsed. Accepted input goes through a small
//! recursive-descent parser:
//!
//! ```text
//! expr   := term (('+' | '-') term)*
//! term   := power (('*' | '/') power)*
//! power  := unary ('**' power)?
//! unary  := ('+' | '-') unary | atom
//! atom   := number | '(' expr ')'
//! ```

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

static ALLOWED_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9+\-*/().\s]+$").expect("Invalid calc allow-list regex"));

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error("empty expression")]
    Empty,

    #[error("expression contains characters outside the allow-list")]
    Disallowed,

    #[error("unexpected input at offset {0}")]
    Syntax(usize),

    #[error("result is not a finite number")]
    NotFinite,

    #[error("expression nests deeper than {MAX_DEPTH} levels")]
    TooDeep,
}

/// Nesting allowed for parentheses, sign chains and `**` chains combined
pub const MAX_DEPTH: usize = 256;

/// `true` when every character is a digit, operator, parenthesis, dot or
/// whitespace
pub fn is_allowed(expr: &str) -> bool {
    ALLOWED_CHARS.is_match(expr)
}

/// Validate and evaluate `expr`
pub fn evaluate(expr: &str) -> Result<f64, CalcError> {
    if expr.trim().is_empty() {
        return Err(CalcError::Empty);
    }
    if !is_allowed(expr) {
        return Err(CalcError::Disallowed);
    }

    let mut parser = Parser::new(expr);
    let value = parser.expr()?;
    parser.skip_ws();
    if parser.pos < parser.src.len() {
        return Err(CalcError::Syntax(parser.pos));
    }
    if !value.is_finite() {
        return Err(CalcError::NotFinite);
    }
    Ok(value)
}

/// Render a result the way a calculator prints it: integral values without
/// a fractional part, `-0` as `0`, and exponent notation (`1e+21`,
/// `1.5e-7`) outside `1e-6..1e21`.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return format!("{value}");
    }

    let sci = format!("{value:e}");
    match sci.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
        _ => sci,
    }
}

struct Parser<'a> {
    src: &'a [u8],
    pos: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    fn new(src: &'a str) -> Self {
        Self {
            src: src.as_bytes(),
            pos: 0,
            depth: 0,
        }
    }

    /// Run `f` one nesting level deeper
    fn nested<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T, CalcError>,
    ) -> Result<T, CalcError> {
        if self.depth >= MAX_DEPTH {
            return Err(CalcError::TooDeep);
        }
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    fn skip_ws(&mut self) {
        while self.pos < self.src.len() && self.src[self.pos].is_ascii_whitespace() {
            self.pos += 1;
        }
    }

    fn peek(&mut self) -> Option<u8> {
        self.skip_ws();
        self.src.get(self.pos).copied()
    }

    fn peek_pow(&mut self) -> bool {
        self.skip_ws();
        self.src.get(self.pos..self.pos + 2) == Some(b"**")
    }

    fn expr(&mut self) -> Result<f64, CalcError> {
        let mut acc = self.term()?;
        while let Some(op @ (b'+' | b'-')) = self.peek() {
            self.pos += 1;
            let rhs = self.term()?;
            acc = if op == b'+' { acc + rhs } else { acc - rhs };
        }
        Ok(acc)
    }

    fn term(&mut self) -> Result<f64, CalcError> {
        let mut acc = self.power()?;
        loop {
            if self.peek_pow() {
                break;
            }
            match self.peek() {
                Some(b'*') => {
                    self.pos += 1;
                    acc *= self.power()?;
                }
                Some(b'/') => {
                    self.pos += 1;
                    acc /= self.power()?;
                }
                _ => break,
            }
        }
        Ok(acc)
    }

    fn power(&mut self) -> Result<f64, CalcError> {
        let signed = matches!(self.peek(), Some(b'-' | b'+'));
        let base = self.unary()?;
        if self.peek_pow() {
            // `-2**2` is ambiguous; the sign must be parenthesised
            if signed {
                return Err(CalcError::Syntax(self.pos));
            }
            self.pos += 2;
            // right associative
            let exp = self.nested(Self::power)?;
            return Ok(base.powf(exp));
        }
        Ok(base)
    }

    fn unary(&mut self) -> Result<f64, CalcError> {
        match self.peek() {
            Some(b'-') => {
                self.pos += 1;
                Ok(-self.nested(Self::unary)?)
            }
            Some(b'+') => {
                self.pos += 1;
                self.nested(Self::unary)
            }
            _ => self.atom(),
        }
    }

    fn atom(&mut self) -> Result<f64, CalcError> {
        match self.peek() {
            Some(b'(') => {
                self.pos += 1;
                let value = self.nested(Self::expr)?;
                if self.peek() != Some(b')') {
                    return Err(CalcError::Syntax(self.pos));
                }
                self.pos += 1;
                Ok(value)
            }
            Some(c) if c.is_ascii_digit() || c == b'.' => self.number(),
            _ => Err(CalcError::Syntax(self.pos)),
        }
    }

    fn number(&mut self) -> Result<f64, CalcError> {
        let start = self.pos;
        while self.pos < self.src.len()
            && (self.src[self.pos].is_ascii_digit() || self.src[self.pos] == b'.')
        {
            self.pos += 1;
        }
        std::str::from_utf8(&self.src[start..self.pos])
            .ok()
            .and_then(|s| s.parse::<f64>().ok())
            .ok_or(CalcError::Syntax(start))
    }
}
