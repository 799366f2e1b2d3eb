//! Request and response shapes for the injected EIP-1193 provider.
//!
//! The wallet exposes a single `request({ method, params })` entry
//! point; these types give the handful of methods the page uses a
//! typed surface.

use alloy_primitives::{Address, Bytes};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const ETH_ACCOUNTS: &str = "eth_accounts";
pub const ETH_REQUEST_ACCOUNTS: &str = "eth_requestAccounts";
pub const ETH_CALL: &str = "eth_call";
pub const ETH_SEND_TRANSACTION: &str = "eth_sendTransaction";
pub const ETH_GET_TRANSACTION_RECEIPT: &str = "eth_getTransactionReceipt";

/// The argument object of a `provider.request` call.
#[derive(Clone, Debug, Serialize)]
pub struct ProviderRequest {
    pub method: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<Value>,
}

impl ProviderRequest {
    pub fn new(method: &str) -> Self {
        Self {
            method: method.to_string(),
            params: Vec::new(),
        }
    }

    pub fn with_params(method: &str, params: Vec<Value>) -> Self {
        Self {
            method: method.to_string(),
            params,
        }
    }
}

/// Transaction object for `eth_call` and `eth_sendTransaction`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CallRequest {
    /// Sending account. Required for `eth_sendTransaction`, omitted
    /// for plain reads.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<Address>,
    pub to: Address,
    pub data: Bytes,
}

impl CallRequest {
    /// A read-only call (no signer involved).
    pub fn read(to: Address, calldata: Vec<u8>) -> Self {
        Self {
            from: None,
            to,
            data: calldata.into(),
        }
    }

    /// A state-changing transaction signed by `from`.
    pub fn write(from: Address, to: Address, calldata: Vec<u8>) -> Self {
        Self {
            from: Some(from),
            to,
            data: calldata.into(),
        }
    }
}

/// The slice of the transaction receipt the page cares about.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionReceipt {
    pub transaction_hash: alloy_primitives::B256,
    /// `0x1` on success, `0x0` when execution reverted.
    pub status: String,
}

impl TransactionReceipt {
    pub fn succeeded(&self) -> bool {
        self.status == "0x1"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    #[test]
    fn test_request_without_params_omits_field() {
        let req = ProviderRequest::new(ETH_REQUEST_ACCOUNTS);
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["method"], "eth_requestAccounts");
        assert!(json.get("params").is_none());
    }

    #[test]
    fn test_read_call_serializes_without_from() {
        let call = CallRequest::read(
            address!("5FbDB2315678afecb367f032d93F642f64180aa3"),
            vec![0x12, 0x06, 0x5f, 0xe0],
        );
        let json = serde_json::to_value(&call).unwrap();
        assert!(json.get("from").is_none());
        assert_eq!(json["data"], "0x12065fe0");
        assert_eq!(
            json["to"],
            "0x5fbdb2315678afecb367f032d93f642f64180aa3"
        );
    }

    #[test]
    fn test_write_call_carries_from() {
        let from = address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266");
        let to = address!("5FbDB2315678afecb367f032d93F642f64180aa3");
        let json = serde_json::to_value(CallRequest::write(from, to, vec![0x01])).unwrap();
        assert_eq!(
            json["from"],
            "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266"
        );
    }

    #[test]
    fn test_receipt_status_parsing() {
        let ok: TransactionReceipt = serde_json::from_value(serde_json::json!({
            "transactionHash": "0xabababababababababababababababababababababababababababababababab",
            "status": "0x1",
            "blockNumber": "0x2",
        }))
        .unwrap();
        assert!(ok.succeeded());

        let reverted: TransactionReceipt = serde_json::from_value(serde_json::json!({
            "transactionHash": "0xabababababababababababababababababababababababababababababababab",
            "status": "0x0",
        }))
        .unwrap();
        assert!(!reverted.succeeded());
    }
}
