pub mod abi;
pub mod error;
pub mod lang;
pub mod rpc;
