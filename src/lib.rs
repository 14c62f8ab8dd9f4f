//! # numprim
//!
//! Three small numeric primitives with exact or tightly bounded contracts.
//!
//! ## Overview
//!
//! - **LogValue**: signed reals stored as `ln|x|` plus a sign, so products of
//!   tiny or huge values neither underflow nor overflow. Addition uses the
//!   numerically stable log-sum-exp form.
//! - **Primality**: deterministic Miller-Rabin over `u64` with witness sets
//!   chosen by magnitude and exact 128-bit modular arithmetic.
//! - **TEA**: the Tiny Encryption Algorithm as a bijection on `u64` blocks
//!   under a 128-bit key.
//!
//! The three modules are independent and stateless; every operation is a
//! pure function of its inputs.
//!
//! ## Quick Start
//!
//! ```rust
//! use numprim::prelude::*;
//!
//! let x = LogValue::from(2.0) * LogValue::from(3.0);
//! assert!((x.to_f64() - 6.0).abs() < 1e-12);
//!
//! assert!(is_prime(1_048_573));
//! assert!(!is_prime(561));
//!
//! let cipher = Tea::new(TeaKey::new(1701, 666));
//! let block = cipher.encrypt_block(42);
//! assert_eq!(cipher.decrypt_block(block), 42);
//! ```
//!
//! ## Logging
//!
//! Diagnostics go through the [`log`] facade; install any logger to see the
//! witness selection (`trace`) and rejected operations (`debug`).

pub mod error;
pub mod logvalue;
pub mod primality;
pub mod tea;

// Re-export the main types for convenience
pub use error::{LogValueError, PrimalityError};
pub use logvalue::LogValue;
pub use primality::{DomainPolicy, PrimalityTester, is_prime};
pub use tea::{Tea, TeaKey};

pub mod prelude {
    //! Prelude module for numprim.
    //!
    //! Re-exports the types and functions most callers need.

    pub use crate::error::{LogValueError, PrimalityError};
    pub use crate::logvalue::LogValue;
    pub use crate::primality::{DomainPolicy, PrimalityTester, is_prime};
    pub use crate::tea::{Tea, TeaKey};
}
