mod client;
mod models;


pub use client::RpcClient;
pub use models::RpcResponse;
