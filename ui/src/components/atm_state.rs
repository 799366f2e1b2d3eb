use dioxus::prelude::*;

use alloy_primitives::Address;
use atm_common::lang::Language;

use super::contract::AtmContract;
use super::eth_provider::EthProvider;

/// UI state for the account panel. Components change it only through
/// the transition methods below.
///
/// The contract handle is bound once per connect; an account switched
/// externally in the wallet does not re-bind it.
#[derive(Clone, Default)]
pub struct AtmState {
    /// Injected wallet, when one was detected at mount.
    pub provider: Option<EthProvider>,
    /// Connected account, once the user has authorized the page.
    pub account: Option<Address>,
    /// Contract client bound to the connected account.
    pub contract: Option<AtmContract>,
    /// Last fetched balance; `None` until the first read.
    pub balance: Option<u64>,
}

/// The three mutually exclusive renderings of the account panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelView {
    /// No provider: prompt the user to install a wallet.
    InstallPrompt,
    /// Provider but no account: show the connect button.
    Connect,
    /// Connected: account, balance and action buttons.
    Panel,
}

impl AtmState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the provider reference found at mount.
    pub fn provider_detected(&mut self, provider: EthProvider) {
        self.provider = Some(provider);
    }

    /// Record the authorized account and bind the contract client.
    pub fn connected(&mut self, account: Address) {
        if let Some(provider) = self.provider.clone() {
            self.contract = Some(AtmContract::bind(provider, account));
        }
        self.account = Some(account);
    }

    /// Record a fresh balance read.
    pub fn balance_updated(&mut self, balance: u64) {
        self.balance = Some(balance);
    }

    /// Which of the three panel views should render.
    pub fn view(&self) -> PanelView {
        if self.provider.is_none() {
            PanelView::InstallPrompt
        } else if self.account.is_none() {
            PanelView::Connect
        } else {
            PanelView::Panel
        }
    }
}

/// Shared panel state provided as context at the top of the app.
pub fn use_atm_state() -> Signal<AtmState> {
    use_context::<Signal<AtmState>>()
}

/// Selected display language, also provided as context.
pub fn use_language() -> Signal<Language> {
    use_context::<Signal<Language>>()
}

#[cfg(all(test, not(target_family = "wasm")))]
mod tests {
    use super::*;
    use alloy_primitives::address;

    const ACCOUNT: Address = address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266");

    #[test]
    fn test_no_provider_shows_install_prompt() {
        let state = AtmState::new();
        assert_eq!(state.view(), PanelView::InstallPrompt);
    }

    #[test]
    fn test_provider_without_account_shows_connect() {
        let mut state = AtmState::new();
        state.provider_detected(EthProvider::stub());
        assert_eq!(state.view(), PanelView::Connect);
        assert!(state.contract.is_none());
    }

    #[test]
    fn test_connect_binds_contract_and_shows_panel() {
        let mut state = AtmState::new();
        state.provider_detected(EthProvider::stub());
        state.connected(ACCOUNT);
        assert_eq!(state.view(), PanelView::Panel);
        assert_eq!(state.account, Some(ACCOUNT));
        assert!(state.contract.is_some());
    }

    #[test]
    fn test_connect_without_provider_binds_nothing() {
        let mut state = AtmState::new();
        state.connected(ACCOUNT);
        assert!(state.contract.is_none());
    }

    #[test]
    fn test_balance_starts_unfetched() {
        let mut state = AtmState::new();
        assert!(state.balance.is_none());
        state.balance_updated(5);
        assert_eq!(state.balance, Some(5));
    }
}
