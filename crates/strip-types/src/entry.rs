use std::fmt;

use serde::{Deserialize, Serialize};

use crate::operator::Operator;

/// One line of an adding strip.
///
/// Arithmetic variants carry their operand. Checkpoints carry nothing: the
/// value they display is derived by the ledger on every recomputation and is
/// never part of the entry itself.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", content = "operand", rename_all = "snake_case")]
pub enum Entry {
    Add(f64),
    Subtract(f64),
    Multiply(f64),
    Divide(f64),
    Subtotal,
    Total,
}

impl Entry {
    pub fn operator(&self) -> Operator {
        match self {
            Self::Add(_) => Operator::Add,
            Self::Subtract(_) => Operator::Subtract,
            Self::Multiply(_) => Operator::Multiply,
            Self::Divide(_) => Operator::Divide,
            Self::Subtotal => Operator::Subtotal,
            Self::Total => Operator::Total,
        }
    }

    /// The operand of an arithmetic entry, `None` for checkpoints.
    pub fn operand(&self) -> Option<f64> {
        match *self {
            Self::Add(v) | Self::Subtract(v) | Self::Multiply(v) | Self::Divide(v) => Some(v),
            Self::Subtotal | Self::Total => None,
        }
    }

    pub fn is_checkpoint(&self) -> bool {
        self.operator().is_checkpoint()
    }

    /// Returns `true` if the running total restarts from zero after this
    /// entry. Only `Total` does.
    pub fn resets_running_total(&self) -> bool {
        matches!(self, Self::Total)
    }

    /// Fold step: the value this entry produces given the running total
    /// accumulated before it.
    ///
    /// Checkpoints pass the running total through unchanged; that value is
    /// what they record. `Total` deliberately does not return `0` here even
    /// though it ends the calculation: a step that returned `0` would make
    /// the checkpoint record `0` instead of the sum it closes. The restart
    /// from zero is applied to the entry after it by
    /// `strip_ledger::RunningTotal` (see [`Entry::resets_running_total`]).
    ///
    /// Division follows IEEE-754, so a zero divisor yields an infinity or
    /// NaN rather than an error.
    pub fn next_result(&self, running: f64) -> f64 {
        match *self {
            Self::Add(v) => running + v,
            Self::Subtract(v) => running - v,
            Self::Multiply(v) => running * v,
            Self::Divide(v) => running / v,
            Self::Subtotal | Self::Total => running,
        }
    }

    /// Canonical text form: the operator sign immediately followed by the
    /// operand (`+5`, `/2.5`), or the bare sign for checkpoints (`#`, `=`).
    pub fn canonical_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = self.operator().sign();
        match self.operand() {
            // f64's Display is the shortest text that parses back to the same bits.
            Some(operand) => write!(f, "{sign}{operand}"),
            None => write!(f, "{sign}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn arithmetic_steps() {
        assert_eq!(Entry::Add(5.0).next_result(10.0), 15.0);
        assert_eq!(Entry::Subtract(5.0).next_result(10.0), 5.0);
        assert_eq!(Entry::Multiply(3.0).next_result(10.0), 30.0);
        assert_eq!(Entry::Divide(4.0).next_result(10.0), 2.5);
    }

    #[test]
    fn checkpoints_pass_running_total_through() {
        assert_eq!(Entry::Subtotal.next_result(42.0), 42.0);
        assert_eq!(Entry::Total.next_result(42.0), 42.0);
        assert!(Entry::Total.resets_running_total());
        assert!(!Entry::Subtotal.resets_running_total());
        assert!(!Entry::Add(1.0).resets_running_total());
    }

    #[test]
    fn division_by_zero_follows_ieee() {
        assert_eq!(Entry::Divide(0.0).next_result(1.0), f64::INFINITY);
        assert_eq!(Entry::Divide(0.0).next_result(-1.0), f64::NEG_INFINITY);
        assert!(Entry::Divide(0.0).next_result(0.0).is_nan());
    }

    #[test]
    fn canonical_text() {
        assert_eq!(Entry::Add(5.0).canonical_text(), "+5");
        assert_eq!(Entry::Subtract(3.25).canonical_text(), "-3.25");
        assert_eq!(Entry::Multiply(-2.0).canonical_text(), "*-2");
        assert_eq!(Entry::Divide(0.1).canonical_text(), "/0.1");
        assert_eq!(Entry::Subtotal.canonical_text(), "#");
        assert_eq!(Entry::Total.canonical_text(), "=");
    }

    #[test]
    fn accessors() {
        assert_eq!(Entry::Divide(8.0).operator(), Operator::Divide);
        assert_eq!(Entry::Divide(8.0).operand(), Some(8.0));
        assert_eq!(Entry::Total.operand(), None);
        assert!(Entry::Subtotal.is_checkpoint());
        assert!(!Entry::Add(0.0).is_checkpoint());
    }

    #[test]
    fn serde_shape() {
        let json = serde_json::to_string(&Entry::Add(5.0)).unwrap();
        assert_eq!(json, r#"{"op":"add","operand":5.0}"#);
        let json = serde_json::to_string(&Entry::Total).unwrap();
        assert_eq!(json, r#"{"op":"total"}"#);
    }

    proptest! {
        #[test]
        fn operand_text_parses_back_exactly(operand in any::<f64>().prop_filter("finite", |v| v.is_finite())) {
            let text = Entry::Multiply(operand).canonical_text();
            prop_assert!(text.starts_with('*'));
            let parsed: f64 = text[1..].parse().unwrap();
            prop_assert_eq!(parsed.to_bits(), operand.to_bits());
        }
    }
}
