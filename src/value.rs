use crate::errors::{OptionsError, Result};
use crate::options::ModalOptions;
use serde::Serialize;
use serde_json::{json, Value};
use std::fmt;
use std::str::FromStr;

/// Scalar parsed from host text, before it is stored type-erased.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Int(i64),
    Float(f64),
    Bool(bool),
    Str(String),
}

/// Rust type a probe asks the bag for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    I64,
    F64,
    Bool,
    String,
}

impl FromStr for ValueKind {
    type Err = OptionsError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "i64" => Ok(ValueKind::I64),
            "f64" => Ok(ValueKind::F64),
            "bool" => Ok(ValueKind::Bool),
            "string" | "String" => Ok(ValueKind::String),
            other => Err(OptionsError::UnknownType(other.to_string())),
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ValueKind::I64 => "i64",
            ValueKind::F64 => "f64",
            ValueKind::Bool => "bool",
            ValueKind::String => "string",
        })
    }
}

/// Interpret `text` as a JSON scalar; text that is not JSON is kept verbatim.
pub fn parse_literal(text: &str) -> Result<Literal> {
    let parsed = match serde_json::from_str::<Value>(text) {
        Ok(v) => v,
        Err(_) => return Ok(Literal::Str(text.to_string())),
    };
    match parsed {
        Value::Number(n) => match n.as_i64() {
            Some(i) => Ok(Literal::Int(i)),
            // integer outside i64; refuse rather than round through f64
            None if !text.contains(['.', 'e', 'E']) => {
                Err(OptionsError::UnsupportedValue(text.to_string()))
            }
            None => n
                .as_f64()
                .map(Literal::Float)
                .ok_or_else(|| OptionsError::UnsupportedValue(text.to_string())),
        },
        Value::Bool(b) => Ok(Literal::Bool(b)),
        Value::String(s) => Ok(Literal::Str(s)),
        Value::Null | Value::Array(_) | Value::Object(_) => {
            Err(OptionsError::UnsupportedValue(text.to_string()))
        }
    }
}

impl Literal {
    pub fn kind(&self) -> ValueKind {
        match self {
            Literal::Int(_) => ValueKind::I64,
            Literal::Float(_) => ValueKind::F64,
            Literal::Bool(_) => ValueKind::Bool,
            Literal::Str(_) => ValueKind::String,
        }
    }

    /// Store under `key` with its concrete Rust type. Same return as [`ModalOptions::set`].
    pub fn store(self, opts: &mut ModalOptions, key: impl Into<String>) -> bool {
        match self {
            Literal::Int(i) => opts.set(key, i),
            Literal::Float(f) => opts.set(key, f),
            Literal::Bool(b) => opts.set(key, b),
            Literal::Str(s) => opts.set(key, s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProbeReport {
    pub key: String,
    #[serde(rename = "type")]
    pub kind: ValueKind,
    pub found: bool,
    /// The stored value, or the zero value of `kind` when not found.
    pub value: Value,
}

/// Read `key` as `kind` the way a consumer would.
pub fn probe(opts: &ModalOptions, key: &str, kind: ValueKind) -> ProbeReport {
    let (found, value) = match kind {
        ValueKind::I64 => probe_as::<i64>(opts, key),
        ValueKind::F64 => probe_as::<f64>(opts, key),
        ValueKind::Bool => probe_as::<bool>(opts, key),
        ValueKind::String => probe_as::<String>(opts, key),
    };
    ProbeReport {
        key: key.to_string(),
        kind,
        found,
        value,
    }
}

fn probe_as<T>(opts: &ModalOptions, key: &str) -> (bool, Value)
where
    T: std::any::Any + Clone + Default + Serialize,
{
    let mut out = T::default();
    let found = opts.try_get::<T>(key, &mut out);
    (found, json!(out))
}
