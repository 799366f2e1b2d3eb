//! Fixed interface of the deployed ATM contract.
//!
//! The contract exposes `getBalance()`, `deposit(uint256)` and
//! `withdraw(uint256)`. There is no ABI discovery; the three signatures
//! below are the whole surface, and the address is a constant.

use alloy_primitives::{address, keccak256, Address, U256};

use crate::error::AtmError;

/// Address of the deployed ATM instance.
pub const ATM_ADDRESS: Address = address!("5FbDB2315678afecb367f032d93F642f64180aa3");

/// Amount moved by a single deposit or withdraw action.
pub const UNIT_AMOUNT: u64 = 1;

/// First four bytes of the keccak-256 hash of a function signature.
pub fn selector(signature: &str) -> [u8; 4] {
    let hash = keccak256(signature.as_bytes());
    [hash[0], hash[1], hash[2], hash[3]]
}

/// Calldata for `getBalance()`.
pub fn get_balance_call() -> Vec<u8> {
    selector("getBalance()").to_vec()
}

/// Calldata for `deposit(uint256)`.
pub fn deposit_call(amount: u64) -> Vec<u8> {
    encode_uint_call("deposit(uint256)", amount)
}

/// Calldata for `withdraw(uint256)`.
pub fn withdraw_call(amount: u64) -> Vec<u8> {
    encode_uint_call("withdraw(uint256)", amount)
}

/// Selector followed by a single abi-encoded uint256 argument.
fn encode_uint_call(signature: &str, amount: u64) -> Vec<u8> {
    let mut data = Vec::with_capacity(36);
    data.extend_from_slice(&selector(signature));
    data.extend_from_slice(&U256::from(amount).to_be_bytes::<32>());
    data
}

/// Decode the return of `getBalance()` into a plain integer.
pub fn decode_balance(data: &[u8]) -> Result<u64, AtmError> {
    if data.len() != 32 {
        return Err(AtmError::Decode(format!(
            "getBalance returned {} bytes, expected 32",
            data.len()
        )));
    }
    let value = U256::from_be_slice(data);
    u64::try_from(value).map_err(|_| AtmError::Decode(format!("balance {value} exceeds u64")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::hex;

    #[test]
    fn test_selectors_match_known_values() {
        assert_eq!(selector("getBalance()"), hex!("12065fe0"));
        assert_eq!(selector("deposit(uint256)"), hex!("b6b55f25"));
        assert_eq!(selector("withdraw(uint256)"), hex!("2e1a7d4d"));
    }

    #[test]
    fn test_get_balance_call_is_bare_selector() {
        assert_eq!(get_balance_call(), hex!("12065fe0").to_vec());
    }

    #[test]
    fn test_deposit_call_encodes_amount() {
        let data = deposit_call(1);
        assert_eq!(data.len(), 36);
        assert_eq!(&data[..4], &hex!("b6b55f25"));
        let mut amount = [0u8; 32];
        amount[31] = 1;
        assert_eq!(&data[4..], &amount);
    }

    #[test]
    fn test_withdraw_call_encodes_amount() {
        let data = withdraw_call(7);
        assert_eq!(&data[..4], &hex!("2e1a7d4d"));
        assert_eq!(data[35], 7);
        assert!(data[4..35].iter().all(|b| *b == 0));
    }

    #[test]
    fn test_decode_balance() {
        let mut word = [0u8; 32];
        word[31] = 5;
        assert_eq!(decode_balance(&word).unwrap(), 5);
    }

    #[test]
    fn test_decode_balance_rejects_short_return() {
        assert!(decode_balance(&[0u8; 4]).is_err());
        assert!(decode_balance(&[]).is_err());
    }

    #[test]
    fn test_decode_balance_rejects_overflow() {
        let word = [0xffu8; 32];
        assert!(decode_balance(&word).is_err());
    }
}
