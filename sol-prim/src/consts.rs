pub const SOLANA_SIGNATURE_LEN: usize = 64;
pub const SOLANA_ADDRESS_LEN: usize = 32;

// Longest possible base-58 renderings of the fixed-size byte arrays.
pub const MAX_BASE58_ADDRESS_LEN: usize = 44;
pub const MAX_BASE58_SIGNATURE_LEN: usize = 88;

pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;
