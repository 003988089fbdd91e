use soroban_sdk::contracterror;

/// Every way a ledger call can be rejected. A rejected call leaves no trace in
/// storage: the host rolls the whole invocation back.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    /// No payment token in instance storage.
    NotInitialized = 1,
    /// Empty name, non-positive amount or target, zero duration, or an
    /// amount that would overflow.
    InvalidArgument = 2,
    /// No campaign was ever created under the given id.
    NotFound = 3,
    /// The campaign's status (or the clock) does not allow the operation.
    InvalidState = 4,
    /// The caller is not the campaign owner.
    Unauthorized = 5,
}
