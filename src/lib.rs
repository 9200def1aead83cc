//! Small text formatting utilities: blank checks, truncation, hashtags,
//! phone numbers, identifier cases, whole-word replacement and prices.
//!
//! Every function is a pure transformation of its arguments and is safe to
//! call from any number of threads.
//!
//! The functions at the crate root take typed arguments. The [`loose`] module
//! offers the same functions over loosely typed [`serde_json::Value`]
//! arguments, with runtime type checks, and can call them by name.

pub use case::*;
pub use error::*;
pub use phone::*;
pub use price::*;
pub use replace::*;
pub use text::*;

mod case;
mod error;
pub mod loose;
mod phone;
mod price;
mod replace;
mod text;
