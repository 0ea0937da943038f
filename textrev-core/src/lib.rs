//! String reversal, six ways
//!
//! This crate collects equivalent algorithms for reading a string back to
//! front: a growable builder, a two-pointer swap, recursion, an explicit
//! stack, a naive concatenation loop, and a word-preserving variant that
//! reverses each word but keeps their order.
//!
//! # Example
//!
//! ```rust
//! use textrev_core::{Method, Reverser};
//!
//! let reverser = Reverser::new();
//! assert_eq!(reverser.apply(Method::Stack, "hello"), "olleh");
//! assert_eq!(reverser.apply(Method::Words, "hello world"), "olleh dlrow");
//!
//! for reversal in reverser.reverse_all("racecar") {
//!     assert_eq!(reversal.output, "racecar");
//! }
//! ```

#![warn(missing_docs)]

pub mod algorithms;
pub mod config;
pub mod error;
pub mod method;
pub mod reverser;

pub use algorithms::{
    check_recursion_limit, reverse_with_builder, reverse_with_loop, reverse_with_recursion,
    reverse_with_recursion_limit, reverse_with_stack, reverse_with_two_pointers, reverse_words,
    try_reverse_with_recursion, DEFAULT_RECURSION_LIMIT, MAX_RECURSION_LIMIT,
};
pub use config::{Config, ConfigBuilder};
pub use error::{CoreError, Result};
pub use method::Method;
pub use reverser::{Reversal, Reverser};
