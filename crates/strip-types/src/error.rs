use thiserror::Error;

use crate::operator::Operator;

/// Errors produced by type operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TypeError {
    #[error("operator {0} requires an operand")]
    MissingOperand(Operator),

    #[error("checkpoint {0} does not take an operand")]
    UnexpectedOperand(Operator),

    #[error("unknown operator sign: {0:?}")]
    UnknownSign(char),
}
