//! Primitive types
//!
//! This module defines the word and integer types the marshaller and the
//! truncator operate on.
//!
//! Current primitives include:
//! - `Word`: the trait implemented by `u8`, `u16`, `u32`, `u64` and `u128`
//! - `Limb`: the platform word
//! - `Nat`: an owned arbitrary-precision natural number over any `Word`

mod nat;
mod word;

pub use nat::Nat;
pub use word::{Limb, Word};
pub(crate) use word::sealed::Encode;
