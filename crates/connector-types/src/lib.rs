pub mod block;
pub mod bundle;
pub mod common;
pub mod definition;
pub mod errors;
pub mod fields;
pub mod network;
pub mod output;
pub mod rpc;
pub mod views;

pub use block::*;
pub use bundle::*;
pub use common::*;
pub use definition::*;
pub use errors::*;
pub use fields::*;
pub use network::*;
pub use output::*;
pub use rpc::*;
pub use views::*;
