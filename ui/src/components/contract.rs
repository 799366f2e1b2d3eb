//! Client for the deployed ATM contract.
//!
//! Binding is pure construction: the fixed address, the fixed
//! interface from `atm_common::abi`, and the connected account as
//! signer. Every method goes through the injected provider.

use atm_common::abi;
use atm_common::error::AtmError;
use atm_common::rpc::{CallRequest, TransactionReceipt};

use alloy_primitives::{Address, B256};

use super::eth_provider::EthProvider;

/// Receipt poll interval in milliseconds.
const RECEIPT_POLL_MS: u32 = 1_000;

/// Contract handle bound to the fixed address and a connected account.
#[derive(Clone)]
pub struct AtmContract {
    provider: EthProvider,
    address: Address,
    signer: Address,
}

impl AtmContract {
    /// Bind the deployed instance to the connected account. No network
    /// call happens here.
    pub fn bind(provider: EthProvider, signer: Address) -> Self {
        Self {
            provider,
            address: abi::ATM_ADDRESS,
            signer,
        }
    }

    /// Read the current balance and normalize it to a plain integer.
    pub async fn get_balance(&self) -> Result<u64, AtmError> {
        let request = CallRequest::read(self.address, abi::get_balance_call());
        let output = self.provider.call(request).await?;
        abi::decode_balance(&output)
    }

    /// Submit `deposit(amount)` and return the pending transaction.
    pub async fn deposit(&self, amount: u64) -> Result<PendingTransaction, AtmError> {
        self.send(abi::deposit_call(amount)).await
    }

    /// Submit `withdraw(amount)` and return the pending transaction.
    pub async fn withdraw(&self, amount: u64) -> Result<PendingTransaction, AtmError> {
        self.send(abi::withdraw_call(amount)).await
    }

    async fn send(&self, calldata: Vec<u8>) -> Result<PendingTransaction, AtmError> {
        let request = CallRequest::write(self.signer, self.address, calldata);
        let hash = self.provider.send_transaction(request).await?;
        tracing::debug!("transaction submitted: {hash}");
        Ok(PendingTransaction {
            provider: self.provider.clone(),
            hash,
        })
    }
}

/// A submitted transaction awaiting on-chain confirmation.
pub struct PendingTransaction {
    provider: EthProvider,
    pub hash: B256,
}

impl PendingTransaction {
    /// Suspend until the transaction is mined, polling the provider
    /// once per second. There is no timeout; a reverted execution is
    /// an error.
    pub async fn wait(self) -> Result<TransactionReceipt, AtmError> {
        loop {
            if let Some(receipt) = self.provider.transaction_receipt(self.hash).await? {
                if receipt.succeeded() {
                    return Ok(receipt);
                }
                return Err(AtmError::Reverted(self.hash));
            }
            sleep_ms(RECEIPT_POLL_MS).await;
        }
    }
}

#[cfg(target_family = "wasm")]
async fn sleep_ms(ms: u32) {
    gloo_timers::future::TimeoutFuture::new(ms).await;
}

#[cfg(not(target_family = "wasm"))]
async fn sleep_ms(_ms: u32) {
    std::future::pending::<()>().await; // never runs on native
}
