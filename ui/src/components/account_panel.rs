use dioxus::prelude::*;

use alloy_primitives::Address;
use atm_common::abi::UNIT_AMOUNT;

use super::atm_state::{use_atm_state, use_language, AtmState, PanelView};
use super::eth_provider::EthProvider;

/// The account panel: wallet detection, connection, balance display
/// and the two fixed-amount actions. Renders one of three mutually
/// exclusive views depending on how far the user has come.
#[component]
pub fn AccountPanel() -> Element {
    let mut state = use_atm_state();
    let language = use_language();
    let bundle = language.read().bundle();

    // Provider discovery runs once at mount. An account the wallet has
    // already authorized reconnects without prompting.
    use_effect(move || {
        let Some(provider) = EthProvider::detect() else {
            return;
        };
        state.write().provider_detected(provider.clone());
        spawn(async move {
            match provider.accounts().await {
                Ok(accounts) => match first_account(&accounts) {
                    Some(account) => {
                        tracing::info!("account connected: {account}");
                        state.write().connected(account);
                    }
                    None => tracing::info!("no account found"),
                },
                Err(e) => tracing::warn!("account lookup failed: {e}"),
            }
        });
    });

    // Lazy balance fetch the first time the full panel renders.
    use_effect(move || {
        let needs_fetch = {
            let s = state.read();
            s.contract.is_some() && s.balance.is_none()
        };
        if needs_fetch {
            spawn(refresh_balance(state));
        }
    });

    let connect = move |_| {
        let provider = state.read().provider.clone();
        let Some(provider) = provider else {
            alert("MetaMask wallet is required to connect");
            return;
        };
        spawn(async move {
            match provider.request_accounts().await {
                Ok(accounts) => {
                    if let Some(account) = first_account(&accounts) {
                        tracing::info!("account connected: {account}");
                        state.write().connected(account);
                    }
                }
                Err(e) => {
                    tracing::warn!("wallet connection failed: {e}");
                    alert(&e.to_string());
                }
            }
        });
    };

    let success_text = bundle.transaction_success;
    let deposit = move |_| {
        spawn(run_transfer(state, TransferKind::Deposit, success_text));
    };
    let withdraw = move |_| {
        spawn(run_transfer(state, TransferKind::Withdraw, success_text));
    };

    let view = state.read().view();
    let account = state.read().account;
    let balance = state.read().balance;
    let account_display = account.map(|a| a.to_string()).unwrap_or_default();
    let balance_display = balance.map(|b| b.to_string()).unwrap_or_default();

    rsx! {
        match view {
            PanelView::InstallPrompt => rsx! {
                p { "{bundle.install_metamask}" }
            },
            PanelView::Connect => rsx! {
                button { onclick: connect, "{bundle.connect_metamask}" }
            },
            PanelView::Panel => rsx! {
                div { class: "account-panel",
                    p { "{bundle.your_account} {account_display}" }
                    p { "{bundle.your_balance} {balance_display}" }
                    button { onclick: deposit, "{bundle.deposit_button}" }
                    button { onclick: withdraw, "{bundle.withdraw_button}" }
                }
            },
        }
    }
}

/// The two fixed-amount mutating actions.
#[derive(Clone, Copy, Debug)]
enum TransferKind {
    Deposit,
    Withdraw,
}

impl TransferKind {
    fn label(&self) -> &'static str {
        match self {
            TransferKind::Deposit => "deposit",
            TransferKind::Withdraw => "withdrawal",
        }
    }

    /// Failure notifications are intentionally generic; details go to
    /// the console only.
    fn failure_text(&self) -> &'static str {
        match self {
            TransferKind::Deposit => "Deposit failed. Please check the console for more details.",
            TransferKind::Withdraw => {
                "Withdrawal failed. Please check the console for more details."
            }
        }
    }
}

/// Submit a fixed-amount transfer, wait for confirmation, then refresh
/// the balance and notify the user. On failure the balance is left
/// untouched and a generic alert is shown. Without a bound contract
/// this is a silent no-op.
async fn run_transfer(mut state: Signal<AtmState>, kind: TransferKind, success_text: &'static str) {
    let contract = state.read().contract.clone();
    let Some(contract) = contract else {
        return;
    };

    let submitted = match kind {
        TransferKind::Deposit => contract.deposit(UNIT_AMOUNT).await,
        TransferKind::Withdraw => contract.withdraw(UNIT_AMOUNT).await,
    };

    let confirmed = match submitted {
        Ok(pending) => {
            let hash = pending.hash;
            pending.wait().await.map(|_| hash)
        }
        Err(e) => Err(e),
    };

    match confirmed {
        Ok(hash) => {
            refresh_balance(state).await;
            alert(&success_alert(success_text, &hash.to_string()));
        }
        Err(e) => {
            tracing::error!("{} failed: {e}", kind.label());
            alert(kind.failure_text());
        }
    }
}

/// Re-read the on-chain balance into the UI. No-op without a bound
/// contract; a failed read keeps the previous value.
async fn refresh_balance(mut state: Signal<AtmState>) {
    let contract = state.read().contract.clone();
    let Some(contract) = contract else {
        return;
    };
    match contract.get_balance().await {
        Ok(balance) => state.write().balance_updated(balance),
        Err(e) => tracing::warn!("balance read failed: {e}"),
    }
}

/// First account string from a provider response, parsed as an address.
fn first_account(accounts: &[String]) -> Option<Address> {
    accounts.first().and_then(|a| a.parse().ok())
}

/// Success notification body, e.g.
/// `"Transaction successful!\nTransaction Hash: 0xabc..."`.
fn success_alert(success_text: &str, hash: &str) -> String {
    format!("{success_text}\nTransaction Hash: {hash}")
}

/// Blocking user notification.
fn alert(message: &str) {
    #[cfg(target_family = "wasm")]
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
    #[cfg(not(target_family = "wasm"))]
    tracing::info!("alert: {message}");
}
