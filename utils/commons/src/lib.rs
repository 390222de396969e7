//! It exposes all common errors and types.
#![cfg_attr(not(feature = "std"), no_std)]
pub use crate::{errors::*, types::*};
use concordium_cis2::*;
use concordium_std::*;

mod errors;
mod types;
