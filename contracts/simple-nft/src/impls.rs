use super::*;

// Functions for creating, updating and querying the contract state.
impl<S: HasStateApi> State<S> {
    /// Creates a empty state with no tokens.
    pub fn empty(state_builder: &mut StateBuilder<S>) -> Self {
        State {
            tokens: state_builder.new_map(),
            next_token_id: FIRST_TOKEN_ID,
        }
    }

    /// Mint a new token with a given address as the owner, storing the given
    /// metadata with it. Returns the assigned token ID.
    pub fn mint(
        &mut self,
        owner: Address,
        metadata: TokenMetadata,
    ) -> ContractResult<ContractTokenId> {
        let token_id = TokenIdU64(self.next_token_id);
        ensure!(
            !self.contains_token(&token_id),
            CustomContractError::TokenIdAlreadyExists.into()
        );

        self.tokens.insert(token_id, TokenState { owner, metadata });
        self.next_token_id += 1;
        Ok(token_id)
    }

    /// Check that the token ID currently exists in this contract.
    #[inline(always)]
    pub fn contains_token(&self, token_id: &ContractTokenId) -> bool {
        self.tokens.get(token_id).is_some()
    }

    /// Get the current owner of a given token ID, if the token was ever
    /// minted.
    pub fn owner_of(&self, token_id: &ContractTokenId) -> Option<Address> {
        self.tokens.get(token_id).map(|token| token.owner)
    }

    /// Get the metadata stored for a given token ID, if the token was ever
    /// minted.
    pub fn metadata_of(&self, token_id: &ContractTokenId) -> Option<TokenMetadata> {
        self.tokens.get(token_id).map(|token| token.metadata.clone())
    }

    /// Update the state with a transfer of some token.
    /// Results in an error if the token ID does not exist in the state.
    pub fn transfer(&mut self, token_id: &ContractTokenId, to: Address) -> ContractResult<()> {
        let mut token = self
            .tokens
            .entry(*token_id)
            .occupied_or(ContractError::InvalidTokenId)?;
        token.owner = to;

        Ok(())
    }
}
