//! Word-level fast paths for arbitrary-precision naturals
//!
//! This crate provides two low-level operations on non-negative integers
//! stored as sequences of machine words:
//!
//! - marshalling to the minimal big-endian byte encoding, written into a
//!   caller-supplied buffer without allocating
//! - destructive truncation to the low 256 bits, the same result as
//!   masking with `2^256 - 1` but done by dropping words
//!
//! Both replace a generic, allocating bitmask or byte-extraction path
//! with code that works a word at a time and is specialised per word
//! width.
//!
//! # Module overview
//!
//! - `primitives`
//!   The `Word` trait and its impls for `u8` through `u128`, the platform
//!   word `Limb`, and `Nat`, an owned natural number over any word type.
//!
//! - `magnitude`
//!   The `Magnitude` trait: the word-sequence accessor and mutator the
//!   operations are written against. Implemented for `Nat` and `Vec<W>`.
//!
//! - `marshal`
//!   `marshal`, `marshal_generic` and `max_byte_len`. The `u32` and `u64`
//!   word types use branch-table encoders; other widths and the
//!   `portable` feature use a byte-at-a-time loop with identical output.
//!
//! - `truncate`
//!   `truncate_to_256_bits`.
//!
//! # Design goals
//!
//! - No heap allocations in either operation
//! - Buffer bounds checked once, before any write
//! - Word width chosen at compile time, never at run time
//!
//! Logging goes through the `log` facade; the crate never installs a
//! logger.

mod error;
mod magnitude;
mod marshal;
mod truncate;

pub mod primitives;

pub use error::{MarshalError, Result};
pub use magnitude::Magnitude;
pub use marshal::{marshal, marshal_generic, max_byte_len};
pub use truncate::{U256_BITS, truncate_to_256_bits, words_for_256};
