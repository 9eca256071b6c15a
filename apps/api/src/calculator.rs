use std::str::FromStr;

use axum::{
    extract::{rejection::QueryRejection, Path, Query},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::envelope::Envelope;
use crate::errors::AppError;
use crate::extract::query_or_reject;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CalculatorError {
    #[error("Cannot divide by zero")]
    DivisionByZero,

    #[error("Unknown operation '{0}' (expected add, subtract, multiply or divide)")]
    UnknownOperation(String),
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl FromStr for Operation {
    type Err = CalculatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add" => Ok(Operation::Add),
            "subtract" => Ok(Operation::Subtract),
            "multiply" => Ok(Operation::Multiply),
            "divide" => Ok(Operation::Divide),
            other => Err(CalculatorError::UnknownOperation(other.to_string())),
        }
    }
}

impl Operation {
    pub fn apply(self, a: f64, b: f64) -> Result<f64, CalculatorError> {
        match self {
            Operation::Add => Ok(add(a, b)),
            Operation::Subtract => Ok(subtract(a, b)),
            Operation::Multiply => Ok(multiply(a, b)),
            Operation::Divide => divide(a, b),
        }
    }
}

pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

pub fn divide(a: f64, b: f64) -> Result<f64, CalculatorError> {
    if b == 0.0 {
        return Err(CalculatorError::DivisionByZero);
    }
    Ok(a / b)
}

#[derive(Debug, Deserialize)]
pub struct Operands {
    pub a: f64,
    pub b: f64,
}

#[derive(Debug, Serialize)]
pub struct Calculation {
    pub operation: Operation,
    pub a: f64,
    pub b: f64,
    pub result: f64,
}

/// GET /api/calculator/:op?a=&b=
pub async fn handle_calculate(
    Path(op): Path<String>,
    query: Result<Query<Operands>, QueryRejection>,
) -> Result<Json<Envelope<Calculation>>, AppError> {
    let operation: Operation = op.parse()?;
    let Operands { a, b } = query_or_reject(query)?;
    let result = operation.apply(a, b)?;
    Ok(Json(Envelope::data(Calculation {
        operation,
        a,
        b,
        result,
    })))
}
