//! # Primrec Kernel
//!
//! A minimal evaluation engine for primitive recursive functions: the
//! smallest class of total functions over the naturals generated from
//! zero, successor, and projection, closed under composition and primitive
//! recursion.
//!
//! Everything is one closed [`Prf`] value dispatched by pattern match.
//! From the two combinators the crate derives the arithmetic layer
//! (truncated subtraction through equality) and the number-theory layer,
//! whose two operations are the crate's real product:
//!
//! ```
//! use primrec_kernel::{gcd, lcm};
//!
//! assert_eq!(gcd(48, 18).unwrap(), 6);
//! assert_eq!(lcm(48, 18).unwrap(), 144);
//! ```
//!
//! The engine is pure and synchronous: no I/O, no shared mutable state,
//! evaluation reentrant by construction. Definitions that are recursive on
//! paper (induction over n, repeated subtraction, the divisor scan) run as
//! explicit loops, each iteration charged against a caller-owned
//! [`StepBudget`] so runaway inputs surface as a typed error instead of a
//! stall. Operand magnitude is the caller's contract: apply
//! [`check_operand`] at the boundary.

pub mod arithmetic;
pub mod budget;
pub mod calculus;
pub mod error;
pub mod number_theory;

pub use budget::{DEFAULT_STEP_LIMIT, INPUT_CEILING, StepBudget, check_operand};
pub use calculus::Prf;
pub use error::{PrfError, PrfResult};
pub use number_theory::{gcd, lcm};
