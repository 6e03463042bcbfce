//! Arbitrary-precision natural number
//!
//! This module defines `Nat`, an owned non-negative integer stored as a
//! growable sequence of machine words, least significant first.
//!
//! `Nat` is the integer type the marshaller and truncator are built to
//! serve, not a full big-integer library: it offers construction, a few
//! shifts and the byte encoding, enough to drive the encoders and to
//! express test vectors. The word sequence is kept canonical at all
//! times (no high zero words, zero is empty).

mod conv;
mod core;
mod ops;

pub use self::core::Nat;
