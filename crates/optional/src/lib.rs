#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod error;
pub use error::{Error, Result};

mod hash;

pub mod present;
pub use present::Present;

pub mod optional;
pub use optional::{Optional, present_instances};

pub mod set;
pub use set::SetView;

pub use checks::Nullable;
pub use functions::Function;
