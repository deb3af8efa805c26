pub mod address;
pub mod consts;
pub mod signature;

pub use address::Address;
pub use signature::Signature;

/// An amount of lamports.
pub type Amount = u64;

/// A slot number on the chain.
pub type SlotNumber = u64;

#[cfg(test)]
mod tests;
