use super::*;

/// Metadata stored for a token when it is minted, returned as-is by the
/// `getTokenUri` entrypoint.
#[derive(Debug, Serialize, SchemaType, Clone, PartialEq, Eq)]
pub struct TokenMetadata {
    /// Location of the off-chain metadata document for this token.
    pub uri: String,
}

/// Minting Data.
#[derive(Serialize, SchemaType)]
pub struct MintParams {
    /// The address owning the minted token.
    pub owner: Address,
    /// Metadata URI of the minted token.
    pub uri: String,
}

/// Transfer Data.
#[derive(Serialize, SchemaType)]
pub struct TransferData {
    /// NFT token ID.
    pub token_id: ContractTokenId,
    /// The address receiving the token.
    pub to: Address,
}

/// Data registered for a single minted token.
#[derive(Debug, Serialize, Clone)]
pub struct TokenState {
    /// The address currently owning this token.
    pub owner: Address,
    /// Metadata fixed when the token was minted.
    pub metadata: TokenMetadata,
}

/// The contract state.
#[derive(Serial, DeserialWithState, StateClone)]
#[concordium(state_parameter = "S")]
pub struct State<S: HasStateApi> {
    /// Registry of all minted tokens.
    pub tokens: StateMap<ContractTokenId, TokenState, S>,
    /// Token ID to assign on the next mint.
    pub next_token_id: u64,
}
