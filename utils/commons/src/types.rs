use super::*;

pub type ContractResult<A> = Result<A, ContractError>;

/// Contract token ID type.
/// Token IDs are assigned from a sequential counter, so they always fit a
/// `u64`.
pub type ContractTokenId = TokenIdU64;

/// Contract token amount type.
/// Every token is unique, so amounts only ever take the values zero and one.
pub type ContractTokenAmount = TokenAmountU8;

/// Wrapping the custom errors in a type with CIS2 errors.
pub type ContractError = Cis2Error<CustomContractError>;
