pub mod account_panel;
pub mod app;
pub mod atm_state;
pub mod contract;
pub mod eth_provider;
