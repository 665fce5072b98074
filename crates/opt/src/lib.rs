#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

// O module
pub mod o;
pub use o::*;

pub mod nullable;
pub use nullable::Nullable;

pub mod combinators;
pub use combinators::*;

#[cfg(feature = "serde")]
mod codec;

#[cfg(feature = "json")]
pub mod error;
#[cfg(feature = "json")]
pub use error::CodecError;

#[cfg(feature = "json")]
pub mod json;
