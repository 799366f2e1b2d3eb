use alloy_primitives::B256;
use thiserror::Error;

/// Everything that can go wrong between the page and the chain.
///
/// No variant is retried automatically; each failure is terminal for
/// the single user action that produced it.
#[derive(Debug, Error)]
pub enum AtmError {
    /// No injected wallet object was found on the page.
    #[error("no wallet provider is available")]
    ProviderMissing,

    /// The user (or the wallet) declined the connection prompt.
    #[error("wallet connection rejected: {0}")]
    ConnectionRejected(String),

    /// The provider or the node failed a request.
    #[error("provider request failed: {0}")]
    Rpc(String),

    /// The transaction was mined but its execution reverted.
    #[error("transaction {0} reverted")]
    Reverted(B256),

    /// The provider answered with something we could not interpret.
    #[error("malformed provider response: {0}")]
    Decode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverted_message_carries_hash() {
        let hash = B256::repeat_byte(0xab);
        let msg = AtmError::Reverted(hash).to_string();
        assert!(msg.contains("0xabababab"));
        assert!(msg.contains("reverted"));
    }

    #[test]
    fn test_provider_missing_message() {
        assert_eq!(
            AtmError::ProviderMissing.to_string(),
            "no wallet provider is available"
        );
    }
}
