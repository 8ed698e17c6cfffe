use std::fmt;

use serde::{Deserialize, Serialize};

use crate::entry::Entry;
use crate::error::TypeError;

/// Operator tag of a strip entry.
///
/// `Add`, `Subtract`, `Multiply` and `Divide` are arithmetic and carry an
/// operand. `Subtotal` and `Total` are checkpoints: they carry no operand
/// and record the running total when the strip is recomputed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Subtotal,
    Total,
}

impl Operator {
    /// Every operator, arithmetic first.
    pub const ALL: [Operator; 6] = [
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
        Self::Subtotal,
        Self::Total,
    ];

    /// The single character used for this operator in the text format.
    pub fn sign(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
            Self::Subtotal => '#',
            Self::Total => '=',
        }
    }

    /// Inverse of [`Operator::sign`].
    pub fn from_sign(sign: char) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.sign() == sign)
    }

    /// Like [`Operator::from_sign`], but reports the offending character.
    pub fn try_from_sign(sign: char) -> Result<Self, TypeError> {
        Self::from_sign(sign).ok_or(TypeError::UnknownSign(sign))
    }

    pub fn is_arithmetic(self) -> bool {
        !self.is_checkpoint()
    }

    pub fn is_checkpoint(self) -> bool {
        matches!(self, Self::Subtotal | Self::Total)
    }

    /// Build an arithmetic entry for this operator.
    pub fn with_operand(self, operand: f64) -> Result<Entry, TypeError> {
        match self {
            Self::Add => Ok(Entry::Add(operand)),
            Self::Subtract => Ok(Entry::Subtract(operand)),
            Self::Multiply => Ok(Entry::Multiply(operand)),
            Self::Divide => Ok(Entry::Divide(operand)),
            Self::Subtotal | Self::Total => Err(TypeError::UnexpectedOperand(self)),
        }
    }

    /// Build a checkpoint entry for this operator.
    pub fn checkpoint(self) -> Result<Entry, TypeError> {
        match self {
            Self::Subtotal => Ok(Entry::Subtotal),
            Self::Total => Ok(Entry::Total),
            _ => Err(TypeError::MissingOperand(self)),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.sign())
    }
}
