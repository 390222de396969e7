//! A minimal NFT smart contract keeping a registry of uniquely owned tokens.
//!
//! # Description
//! An instance of this smart contract maintains a registry of tokens, each
//! identified by a token ID taken from a sequential counter at mint time. A
//! token carries a metadata URI, fixed once when it is minted, and an owner,
//! which only changes through a successful `transfer`.
//!
//! The contract is initialized with an empty registry. Minting is not
//! restricted: the `mint` function takes the recipient and the metadata URI,
//! stores the new token under the next free ID and logs the corresponding
//! CIS2 events. A transfer moves a single token to a new owner and only
//! succeeds when the sender is the current owner of the token. No
//! functionality to burn tokens is defined in this contract.
//!
//! The read-only entrypoints `getOwner` and `getTokenUri` look a token up by
//! ID and return nothing for IDs that were never minted.

#![cfg_attr(not(feature = "std"), no_std)]
use crate::{constants::*, structs::*};
use commons::*;
use concordium_cis2::*;
use concordium_std::*;

mod constants;
mod contract;
mod impls;
mod structs;
