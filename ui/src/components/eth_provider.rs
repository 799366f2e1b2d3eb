//! Wrapper over the browser-injected Ethereum wallet provider.
//!
//! Wallet extensions inject a provider object at `window.ethereum`
//! exposing a single `request({ method, params })` entry point
//! (EIP-1193). Detection is a plain presence check; an absent provider
//! is not an error, the UI renders an install prompt instead.

use atm_common::error::AtmError;
use atm_common::rpc::{self, CallRequest, ProviderRequest, TransactionReceipt};

use alloy_primitives::{Bytes, B256};
use serde_json::Value;

/// Handle to the injected provider. Discovered once at mount; the page
/// references it but does not own it.
#[derive(Clone)]
pub struct EthProvider {
    #[cfg(target_family = "wasm")]
    inner: js_sys::Object,
}

impl EthProvider {
    /// Look for `window.ethereum`. Returns `None` when no wallet
    /// extension is installed.
    #[cfg(target_family = "wasm")]
    pub fn detect() -> Option<Self> {
        let window = web_sys::window()?;
        let obj = js_sys::Reflect::get(&window, &wasm_bindgen::JsValue::from_str("ethereum")).ok()?;
        if obj.is_undefined() || obj.is_null() {
            return None;
        }
        use wasm_bindgen::JsCast;
        let inner = obj.dyn_into::<js_sys::Object>().ok()?;
        Some(Self { inner })
    }

    #[cfg(not(target_family = "wasm"))]
    pub fn detect() -> Option<Self> {
        None
    }

    /// Accounts already authorized for this page, if any. Does not
    /// prompt the user.
    pub async fn accounts(&self) -> Result<Vec<String>, AtmError> {
        let value = self
            .request(ProviderRequest::new(rpc::ETH_ACCOUNTS))
            .await
            .map_err(AtmError::Rpc)?;
        serde_json::from_value(value).map_err(|e| AtmError::Decode(e.to_string()))
    }

    /// Ask the wallet to authorize this page. The user may decline.
    pub async fn request_accounts(&self) -> Result<Vec<String>, AtmError> {
        let value = self
            .request(ProviderRequest::new(rpc::ETH_REQUEST_ACCOUNTS))
            .await
            .map_err(AtmError::ConnectionRejected)?;
        serde_json::from_value(value).map_err(|e| AtmError::Decode(e.to_string()))
    }

    /// Read-only contract call against the latest block.
    pub async fn call(&self, call: CallRequest) -> Result<Bytes, AtmError> {
        let params = vec![
            serde_json::to_value(&call).map_err(|e| AtmError::Decode(e.to_string()))?,
            Value::String("latest".to_string()),
        ];
        let value = self
            .request(ProviderRequest::with_params(rpc::ETH_CALL, params))
            .await
            .map_err(AtmError::Rpc)?;
        serde_json::from_value(value).map_err(|e| AtmError::Decode(e.to_string()))
    }

    /// Submit a signed transaction through the wallet and return its
    /// hash. Signing happens inside the wallet, not here.
    pub async fn send_transaction(&self, call: CallRequest) -> Result<B256, AtmError> {
        let params = vec![serde_json::to_value(&call).map_err(|e| AtmError::Decode(e.to_string()))?];
        let value = self
            .request(ProviderRequest::with_params(rpc::ETH_SEND_TRANSACTION, params))
            .await
            .map_err(AtmError::Rpc)?;
        serde_json::from_value(value).map_err(|e| AtmError::Decode(e.to_string()))
    }

    /// Fetch the receipt for a transaction, or `None` while it is
    /// still pending.
    pub async fn transaction_receipt(
        &self,
        hash: B256,
    ) -> Result<Option<TransactionReceipt>, AtmError> {
        let params = vec![Value::String(format!("{hash}"))];
        let value = self
            .request(ProviderRequest::with_params(
                rpc::ETH_GET_TRANSACTION_RECEIPT,
                params,
            ))
            .await
            .map_err(AtmError::Rpc)?;
        if value.is_null() {
            return Ok(None);
        }
        serde_json::from_value(value)
            .map(Some)
            .map_err(|e| AtmError::Decode(e.to_string()))
    }

    /// Raw EIP-1193 request: serialize the argument object, invoke
    /// `request` on the injected object, await the returned promise and
    /// convert the result back to JSON.
    #[cfg(target_family = "wasm")]
    async fn request(&self, req: ProviderRequest) -> Result<Value, String> {
        use serde::Serialize;
        use wasm_bindgen::{JsCast, JsValue};
        use wasm_bindgen_futures::JsFuture;

        let request_fn = js_sys::Reflect::get(&self.inner, &JsValue::from_str("request"))
            .map_err(|e| format!("provider has no request method: {e:?}"))?
            .dyn_into::<js_sys::Function>()
            .map_err(|_| "provider request is not callable".to_string())?;

        // json_compatible keeps nested maps as plain JS objects, which
        // is what wallet providers expect.
        let arg = req
            .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
            .map_err(|e| format!("serialize request: {e}"))?;

        let promise = request_fn
            .call1(&self.inner, &arg)
            .map_err(|e| js_error_message(&e))?
            .dyn_into::<js_sys::Promise>()
            .map_err(|_| "provider request did not return a promise".to_string())?;

        let result = JsFuture::from(promise)
            .await
            .map_err(|e| js_error_message(&e))?;

        serde_wasm_bindgen::from_value(result).map_err(|e| format!("deserialize response: {e}"))
    }

    // Non-WASM stub for type checking and native unit tests.
    #[cfg(not(target_family = "wasm"))]
    async fn request(&self, _req: ProviderRequest) -> Result<Value, String> {
        Err("wallet provider only available in WASM".to_string())
    }
}

#[cfg(not(target_family = "wasm"))]
#[allow(dead_code)]
impl EthProvider {
    /// Native builds never see an injected wallet; this lets the state
    /// machinery be unit tested off-browser.
    pub fn stub() -> Self {
        Self {}
    }
}

/// Wallet errors arrive as JS objects with a `message` field; fall back
/// to the debug form for anything else.
#[cfg(target_family = "wasm")]
fn js_error_message(value: &wasm_bindgen::JsValue) -> String {
    js_sys::Reflect::get(value, &wasm_bindgen::JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .unwrap_or_else(|| format!("{value:?}"))
}
