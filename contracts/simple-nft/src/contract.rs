use super::*;

/// Initialize contract instance with an empty registry of tokens.
#[init(contract = "SimpleNFT")]
fn init<S: HasStateApi>(
    _ctx: &impl HasInitContext,
    state_builder: &mut StateBuilder<S>,
) -> InitResult<State<S>> {
    // Construct the initial contract state.
    let state = State::empty(state_builder);
    Ok(state)
}

/// Mint a new token with a given address as the owner.
/// The token is assigned the next sequential token ID, counting up from
/// `FIRST_TOKEN_ID`, and the given metadata URI is stored with it.
/// Logs a `Mint` and a `TokenMetadata` event.
///
/// It rejects if:
/// - Fails to parse parameter.
/// - The assigned token ID already exists.
/// - Fails to log Mint event.
/// - Fails to log TokenMetadata event.
#[receive(
    contract = "SimpleNFT",
    name = "mint",
    parameter = "MintParams",
    mutable,
    enable_logger
)]
fn mint<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    // Parse the parameter.
    let params: MintParams = ctx.parameter_cursor().get()?;

    let metadata = TokenMetadata { uri: params.uri };

    // Mint the token in the state.
    let token_id = host.state_mut().mint(params.owner, metadata.clone())?;

    // Event for minted NFT.
    logger.log(&Cis2Event::Mint(MintEvent {
        token_id,
        amount: ContractTokenAmount::from(1),
        owner: params.owner,
    }))?;

    // Metadata URL for the NFT.
    logger.log(&token_metadata_event(token_id, &metadata))?;

    Ok(())
}

/// View the current owner of a given token ID. Returns nothing for token IDs
/// that were never minted. No side effects.
///
/// It rejects if:
/// - It fails to parse the parameter.
#[receive(
    contract = "SimpleNFT",
    name = "getOwner",
    parameter = "ContractTokenId",
    return_value = "Option<Address>"
)]
fn get_owner<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<Option<Address>> {
    // Parse the parameter.
    let token_id: ContractTokenId = ctx.parameter_cursor().get()?;

    Ok(host.state().owner_of(&token_id))
}

/// View the metadata stored for a given token ID. Returns nothing for token
/// IDs that were never minted. No side effects.
///
/// It rejects if:
/// - It fails to parse the parameter.
#[receive(
    contract = "SimpleNFT",
    name = "getTokenUri",
    parameter = "ContractTokenId",
    return_value = "Option<TokenMetadata>"
)]
fn get_token_uri<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<Option<TokenMetadata>> {
    // Parse the parameter.
    let token_id: ContractTokenId = ctx.parameter_cursor().get()?;

    Ok(host.state().metadata_of(&token_id))
}

/// Transfer a single token to a new owner.
/// Can only be called by the current owner of the token.
///
/// Logs a `Transfer` event.
///
/// It rejects if:
/// - It fails to parse the parameter.
/// - The `token_id` does not exist.
/// - The sender is not the current owner of the token.
/// - Fails to log event.
#[receive(
    contract = "SimpleNFT",
    name = "transfer",
    parameter = "TransferData",
    mutable,
    enable_logger
)]
fn transfer<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    // Parse the parameter.
    let params: TransferData = ctx.parameter_cursor().get()?;
    // Get the sender who invoked this contract function.
    let sender = ctx.sender();

    let state = host.state_mut();
    let owner = state
        .owner_of(&params.token_id)
        .ok_or(ContractError::InvalidTokenId)?;

    // Authenticate the sender for this transfer.
    ensure!(owner == sender, ContractError::Unauthorized);

    // Update the contract state.
    state.transfer(&params.token_id, params.to)?;

    // Log transfer event.
    logger.log(&Cis2Event::Transfer(TransferEvent {
        token_id: params.token_id,
        amount: ContractTokenAmount::from(1),
        from: owner,
        to: params.to,
    }))?;

    Ok(())
}

fn token_metadata_event(
    token_id: ContractTokenId,
    metadata: &TokenMetadata,
) -> Cis2Event<ContractTokenId, ContractTokenAmount> {
    Cis2Event::TokenMetadata(TokenMetadataEvent {
        token_id,
        metadata_url: MetadataUrl {
            url: metadata.uri.clone(),
            hash: None,
        },
    })
}

#[concordium_cfg_test]
mod tests {
    use super::*;
    use test_infrastructure::*;

    const ACCOUNT_0: AccountAddress = AccountAddress([0u8; 32]);
    const ADDRESS_0: Address = Address::Account(ACCOUNT_0);
    const ACCOUNT_1: AccountAddress = AccountAddress([1u8; 32]);
    const ADDRESS_1: Address = Address::Account(ACCOUNT_1);
    const ACCOUNT_2: AccountAddress = AccountAddress([2u8; 32]);
    const ADDRESS_2: Address = Address::Account(ACCOUNT_2);

    const TOKEN_URI: &str = "https://example.com/metadata/1.json";

    fn token_0() -> ContractTokenId {
        TokenIdU64(FIRST_TOKEN_ID)
    }

    fn metadata() -> TokenMetadata {
        TokenMetadata {
            uri: String::from(TOKEN_URI),
        }
    }

    /// Test helper function which creates a contract state with one token
    /// with id `token_0` owned by `ADDRESS_0`.
    fn initial_state<S: HasStateApi>(state_builder: &mut StateBuilder<S>) -> State<S> {
        let mut state = State::empty(state_builder);

        state
            .mint(ADDRESS_0, metadata())
            .expect_report("Failed to mint token_0");

        state
    }

    /// Test initialization succeeds.
    #[concordium_test]
    fn test_init() {
        // Setup the context
        let ctx = TestInitContext::empty();
        let mut builder = TestStateBuilder::new();

        // Call the contract function.
        let result = init(&ctx, &mut builder);

        // Check the result
        let state = result.expect_report("Contract initialization failed");

        // Check the state
        claim_eq!(
            state.tokens.iter().count(),
            0,
            "No token should be initialized"
        );
        claim_eq!(
            state.next_token_id,
            FIRST_TOKEN_ID,
            "Token IDs should count up from the first token ID"
        );
    }

    /// Test minting, ensuring the new token is owned by the given address,
    /// stores the supplied URI unchanged and the appropriate events are
    /// logged.
    #[concordium_test]
    fn test_mint() {
        // Setup the context
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_0);

        // and parameter.
        let params = MintParams {
            owner: ADDRESS_0,
            uri: String::from(TOKEN_URI),
        };
        let parameter_bytes = to_bytes(&params);
        ctx.set_parameter(&parameter_bytes);

        let mut logger = TestLogger::init();
        let mut state_builder = TestStateBuilder::new();
        let state = State::empty(&mut state_builder);
        let mut host = TestHost::new(state, state_builder);

        // Call the contract function.
        let result: ContractResult<()> = mint(&ctx, &mut host, &mut logger);

        // Check the result
        claim!(result.is_ok(), "Results in rejection");

        // Check the state
        claim_eq!(
            host.state().tokens.iter().count(),
            1,
            "Expected one token in the state."
        );
        claim_eq!(
            host.state().owner_of(&token_0()),
            Some(ADDRESS_0),
            "Token should be owned by the given address"
        );
        claim_eq!(
            host.state().metadata_of(&token_0()),
            Some(metadata()),
            "Stored URI should match the supplied URI"
        );

        // Check the logs
        claim!(
            logger.logs.contains(&to_bytes(&Cis2Event::Mint(MintEvent {
                owner: ADDRESS_0,
                token_id: token_0(),
                amount: ContractTokenAmount::from(1),
            }))),
            "Expected an event for minting token_0"
        );
        claim!(
            logger
                .logs
                .contains(&to_bytes(&token_metadata_event(token_0(), &metadata()))),
            "Expected an event for the metadata URI of token_0"
        );
    }

    /// Test that consecutive mints are assigned sequential token IDs,
    /// counting up from the first token ID.
    #[concordium_test]
    fn test_mint_assigns_sequential_ids() {
        let mut state_builder = TestStateBuilder::new();
        let mut state = State::empty(&mut state_builder);

        let first = state
            .mint(ADDRESS_0, metadata())
            .expect_report("Failed to mint token_0");
        let second = state
            .mint(ADDRESS_1, metadata())
            .expect_report("Failed to mint the second token");

        claim_eq!(
            first,
            TokenIdU64(FIRST_TOKEN_ID),
            "First minted token should get the first token ID"
        );
        claim_eq!(
            second,
            TokenIdU64(FIRST_TOKEN_ID + 1),
            "Second minted token should get the next token ID"
        );
        claim_eq!(
            state.next_token_id,
            FIRST_TOKEN_ID + 2,
            "Counter should advance by one per mint"
        );
    }

    /// Test the `getOwner` entrypoint on a minted and an unknown token ID.
    #[concordium_test]
    fn test_get_owner() {
        // Setup the context
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_1);

        let parameter_bytes = to_bytes(&token_0());
        ctx.set_parameter(&parameter_bytes);

        let mut state_builder = TestStateBuilder::new();
        let state = initial_state(&mut state_builder);
        let host = TestHost::new(state, state_builder);

        // Call the contract function.
        let result = get_owner(&ctx, &host);
        claim_eq!(
            result.expect_report("Owner query failed"),
            Some(ADDRESS_0),
            "Owner should be the minting recipient"
        );

        // A token that was never minted has no owner.
        let parameter_bytes = to_bytes(&TokenIdU64(42));
        ctx.set_parameter(&parameter_bytes);

        let result = get_owner(&ctx, &host);
        claim_eq!(
            result.expect_report("Owner query failed"),
            None,
            "Unknown token should have no owner"
        );
    }

    /// Test the `getTokenUri` entrypoint on a minted and an unknown token ID.
    #[concordium_test]
    fn test_get_token_uri() {
        // Setup the context
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_1);

        let parameter_bytes = to_bytes(&token_0());
        ctx.set_parameter(&parameter_bytes);

        let mut state_builder = TestStateBuilder::new();
        let state = initial_state(&mut state_builder);
        let host = TestHost::new(state, state_builder);

        // Call the contract function.
        let result = get_token_uri(&ctx, &host);
        claim_eq!(
            result.expect_report("URI query failed"),
            Some(metadata()),
            "Stored URI should match the supplied URI"
        );

        // A token that was never minted has no metadata.
        let parameter_bytes = to_bytes(&TokenIdU64(42));
        ctx.set_parameter(&parameter_bytes);

        let result = get_token_uri(&ctx, &host);
        claim_eq!(
            result.expect_report("URI query failed"),
            None,
            "Unknown token should have no metadata"
        );
    }

    /// Test transfer succeeds, when the sender is the current owner of the
    /// token, and the receiver is reported as the new owner afterwards.
    #[concordium_test]
    fn test_transfer_account() {
        // Setup the context
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_0);

        // and parameter.
        let params = TransferData {
            token_id: token_0(),
            to: ADDRESS_1,
        };
        let parameter_bytes = to_bytes(&params);
        ctx.set_parameter(&parameter_bytes);

        let mut logger = TestLogger::init();
        let mut state_builder = TestStateBuilder::new();
        let state = initial_state(&mut state_builder);
        let mut host = TestHost::new(state, state_builder);

        // Call the contract function.
        let result: ContractResult<()> = self::transfer(&ctx, &mut host, &mut logger);
        // Check the result.
        claim!(result.is_ok(), "Results in rejection");

        // Check the state.
        claim_eq!(
            host.state().owner_of(&token_0()),
            Some(ADDRESS_1),
            "Token should be owned by the receiver"
        );
        claim_eq!(
            host.state().metadata_of(&token_0()),
            Some(metadata()),
            "Transfer should not change the stored URI"
        );

        // Check the logs.
        claim_eq!(logger.logs.len(), 1, "Only one event should be logged");
        claim_eq!(
            logger.logs[0],
            to_bytes(&Cis2Event::Transfer(TransferEvent {
                token_id: token_0(),
                amount: ContractTokenAmount::from(1),
                from: ADDRESS_0,
                to: ADDRESS_1,
            })),
            "Incorrect event emitted"
        )
    }

    /// Test transfer token fails, when the sender is not the owner of the
    /// token, and the owner is left unchanged.
    #[concordium_test]
    fn test_transfer_not_authorized() {
        // Setup the context
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_2);

        // and parameter.
        let params = TransferData {
            token_id: token_0(),
            to: ADDRESS_2,
        };
        let parameter_bytes = to_bytes(&params);
        ctx.set_parameter(&parameter_bytes);

        let mut logger = TestLogger::init();
        let mut state_builder = TestStateBuilder::new();
        let state = initial_state(&mut state_builder);
        let mut host = TestHost::new(state, state_builder);

        // Call the contract function.
        let result: ContractResult<()> = self::transfer(&ctx, &mut host, &mut logger);
        // Check the result.
        let err = result.expect_err_report("Expected to fail");
        claim_eq!(
            err,
            ContractError::Unauthorized,
            "Error is expected to be Unauthorized"
        );

        // Check the state.
        claim_eq!(
            host.state().owner_of(&token_0()),
            Some(ADDRESS_0),
            "Owner should be unchanged after a rejected transfer"
        );
        claim_eq!(logger.logs.len(), 0, "No event should be logged");
    }

    /// Test transfer of a token ID that was never minted fails.
    #[concordium_test]
    fn test_transfer_unknown_token() {
        // Setup the context
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_0);

        // and parameter.
        let params = TransferData {
            token_id: token_0(),
            to: ADDRESS_1,
        };
        let parameter_bytes = to_bytes(&params);
        ctx.set_parameter(&parameter_bytes);

        let mut logger = TestLogger::init();
        let mut state_builder = TestStateBuilder::new();
        let state = State::empty(&mut state_builder);
        let mut host = TestHost::new(state, state_builder);

        // Call the contract function.
        let result: ContractResult<()> = self::transfer(&ctx, &mut host, &mut logger);
        // Check the result.
        let err = result.expect_err_report("Expected to fail");
        claim_eq!(
            err,
            ContractError::InvalidTokenId,
            "Error is expected to be InvalidTokenId"
        );
    }

    /// Test that a completed transfer moves control over the token: the
    /// previous owner is rejected while the new owner can transfer onwards.
    #[concordium_test]
    fn test_transfer_moves_authorization() {
        let params = TransferData {
            token_id: token_0(),
            to: ADDRESS_1,
        };
        let parameter_bytes = to_bytes(&params);

        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_0);
        ctx.set_parameter(&parameter_bytes);

        let mut logger = TestLogger::init();
        let mut state_builder = TestStateBuilder::new();
        let state = initial_state(&mut state_builder);
        let mut host = TestHost::new(state, state_builder);

        // First transfer by the minting recipient succeeds.
        let result: ContractResult<()> = self::transfer(&ctx, &mut host, &mut logger);
        claim!(result.is_ok(), "Results in rejection");

        // The previous owner can no longer transfer the token.
        let result: ContractResult<()> = self::transfer(&ctx, &mut host, &mut logger);
        let err = result.expect_err_report("Expected to fail");
        claim_eq!(
            err,
            ContractError::Unauthorized,
            "Error is expected to be Unauthorized"
        );

        // The new owner can.
        let params = TransferData {
            token_id: token_0(),
            to: ADDRESS_2,
        };
        let parameter_bytes = to_bytes(&params);
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_1);
        ctx.set_parameter(&parameter_bytes);

        let result: ContractResult<()> = self::transfer(&ctx, &mut host, &mut logger);
        claim!(result.is_ok(), "Results in rejection");

        claim_eq!(
            host.state().owner_of(&token_0()),
            Some(ADDRESS_2),
            "Token should end up owned by the last receiver"
        );
    }
}
