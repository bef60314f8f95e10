//! # Number System Model
//!
//! Value types shared by every tool: radices, bit widths and bit vectors.
//! These types cross every boundary: evaluator ↔ lab snapshot ↔ caller.
//!
//! Design rule: pure data — no I/O, no state, no logging.

pub mod radix;
pub mod bit_width;
pub mod bit_vector;

pub use radix::Radix;
pub use bit_width::BitWidth;
pub use bit_vector::BitVector;
