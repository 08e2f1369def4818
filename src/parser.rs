// src/parser.rs
use crate::errors::{OptionsError, Result};
use crate::value::{parse_literal, Literal, ValueKind};

/// `key=literal`, as given to `mopt --set`.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub key: String,
    pub value: Literal,
}

/// `key:type`, as given to `mopt --get`.
#[derive(Debug, Clone, PartialEq)]
pub struct Probe {
    pub key: String,
    pub kind: ValueKind,
}

pub fn parse_assignment(input: &str) -> Result<Assignment> {
    let mut p = Parser::new(input);
    let key = p.parse_key()?;
    p.skip_ws();
    p.expect('=')?;
    let value = parse_literal(p.rest().trim())?;
    Ok(Assignment { key, value })
}

pub fn parse_probe(input: &str) -> Result<Probe> {
    let mut p = Parser::new(input);
    let key = p.parse_key()?;
    p.skip_ws();
    p.expect(':')?;
    let kind = p.rest().trim().parse()?;
    Ok(Probe { key, kind })
}

struct Parser<'a> {
    s: &'a str,
    i: usize,
}

impl<'a> Parser<'a> {
    fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    /// Bare identifier or quoted string.
    fn parse_key(&mut self) -> Result<String> {
        self.skip_ws();
        match self.peek_char() {
            Some('\'') | Some('"') => self.parse_quoted_string(),
            _ => self.parse_identifier(),
        }
    }

    fn parse_identifier(&mut self) -> Result<String> {
        let start = self.i;
        while let Some(c) = self.peek_char() {
            if c == '_' || c.is_ascii_alphanumeric() {
                self.i += 1;
            } else {
                break;
            }
        }
        if self.i == start {
            return Err(OptionsError::Parse("key expected".into()));
        }
        Ok(self.s[start..self.i].to_string())
    }

    fn parse_quoted_string(&mut self) -> Result<String> {
        let quote = self
            .peek_char()
            .ok_or_else(|| OptionsError::Parse("string".into()))?;
        if quote != '\'' && quote != '"' {
            return Err(OptionsError::Parse("expected quoted string".into()));
        }
        self.i += 1;
        let mut out = String::new();
        while let Some(c) = self.peek_char() {
            self.i += c.len_utf8();
            if c == quote {
                return Ok(out);
            }
            if c == '\\' {
                if let Some(nc) = self.peek_char() {
                    self.i += nc.len_utf8();
                    match nc {
                        'n' => out.push('\n'),
                        't' => out.push('\t'),
                        'r' => out.push('\r'),
                        '\\' => out.push('\\'),
                        '"' => out.push('"'),
                        '\'' => out.push('\''),
                        _ => {
                            out.push('\\');
                            out.push(nc);
                        }
                    }
                } else {
                    break;
                }
            } else {
                out.push(c);
            }
        }
        Err(OptionsError::Parse("unterminated string".into()))
    }

    fn expect(&mut self, c: char) -> Result<()> {
        if self.consume_char(c) {
            Ok(())
        } else {
            Err(OptionsError::Parse(format!("expected '{c}'")))
        }
    }

    fn consume_char(&mut self, c: char) -> bool {
        if self.peek_char() == Some(c) {
            self.i += c.len_utf8();
            true
        } else {
            false
        }
    }

    fn peek_char(&self) -> Option<char> {
        self.s[self.i..].chars().next()
    }

    fn skip_ws(&mut self) {
        while let Some(c) = self.peek_char() {
            if c.is_whitespace() {
                self.i += c.len_utf8();
            } else {
                break;
            }
        }
    }

    /// Everything not yet consumed.
    fn rest(&self) -> &'a str {
        &self.s[self.i..]
    }
}
