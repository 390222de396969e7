/// Token ID assigned to the first minted token. Later mints count up from
/// here and an ID is never reused, even though tokens cannot be burned.
pub const FIRST_TOKEN_ID: u64 = 1;
