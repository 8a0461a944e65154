//! Step budgets: the bound on every loop the engine runs.
//!
//! Nothing in the kernel recurses on an operand, but the iterative forms
//! still take time proportional to operand magnitude (induction steps,
//! repeated subtraction, the divisor scan). A [`StepBudget`] is charged one
//! unit per loop iteration and converts runaway work into a typed error
//! instead of an unbounded stall.

use crate::error::{PrfError, PrfResult};

/// Default charge limit for [`StepBudget::default`].
///
/// Sized so the most expensive call within the input ceiling (an LCM of two
/// near-ceiling coprime operands) completes with room to spare.
pub const DEFAULT_STEP_LIMIT: u64 = 1_000_000_000;

/// Agreed operand ceiling for `gcd`/`lcm` callers.
///
/// The divisor scan and repeated subtraction are linear in operand
/// magnitude, so cost is only predictable if inputs stay bounded. The
/// kernel does not enforce this; boundaries do, via [`check_operand`].
pub const INPUT_CEILING: u64 = 10_000;

/// Mutable iteration allowance for one evaluation.
///
/// Caller-owned and never shared: a fresh budget per call keeps `Prf`
/// values free of interior mutability.
#[derive(Debug, Clone)]
pub struct StepBudget {
    limit: u64,
    used: u64,
}

impl StepBudget {
    /// A budget allowing up to `limit` charged iterations.
    pub fn new(limit: u64) -> Self {
        Self { limit, used: 0 }
    }

    /// Charge `steps` iterations, failing once the limit is crossed.
    pub fn charge(&mut self, steps: u64) -> PrfResult<()> {
        self.used = self.used.saturating_add(steps);
        if self.used > self.limit {
            return Err(PrfError::StepBudgetExceeded { limit: self.limit });
        }
        Ok(())
    }

    /// Iterations charged so far.
    pub fn used(&self) -> u64 {
        self.used
    }

    /// Iterations still available.
    pub fn remaining(&self) -> u64 {
        self.limit.saturating_sub(self.used)
    }
}

impl Default for StepBudget {
    fn default() -> Self {
        Self::new(DEFAULT_STEP_LIMIT)
    }
}

/// Reject an operand above [`INPUT_CEILING`].
pub fn check_operand(value: u64) -> PrfResult<()> {
    if value > INPUT_CEILING {
        return Err(PrfError::OperandOutOfRange {
            value,
            ceiling: INPUT_CEILING,
        });
    }
    Ok(())
}
