//! particld RPC client library.
//!
//! This crate provides a blocking Rust client for the JSON-RPC interface of the
//! Particl daemon. Connection settings live in [`Config`], requests go through a
//! pluggable [`Transport`], and each supported daemon command has a typed method
//! on [`Client`].
//!
//! ```no_run
//! use particl_rpc_client::{Client, Config};
//!
//! let mut config = Config::new();
//! config.load_config_file("particlrpc.json")?;
//! config.load_credential()?;
//!
//! let client = Client::new(config);
//! let uptime = client.get_uptime()?;
//! let staking = client.get_staking_info("wallet.dat")?;
//! # Ok::<(), particl_rpc_client::Error>(())
//! ```

mod client;
pub mod codec;
mod config;
mod error;
mod transport;
pub mod types;

pub use client::Client;
pub use config::{COOKIE_FILE_NAME, Config, DEFAULT_DATA_DIR, DEFAULT_RPC_HOST, DEFAULT_RPC_PORT};
pub use error::{BoxError, Error, ErrorKind, Result};
pub use transport::{HttpResponse, MinreqTransport, Transport};
pub use types::{
    AddressDelta, Block, BlockReward, BlockchainInfo, ColdStakeUnspent, NetworkInfo, Sat,
    SetStakingOptions, StakingInfo, StakingOptions, StakingSchema, Tx,
};

pub use serde_json;
pub use url;
