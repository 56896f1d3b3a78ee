use log::{debug, trace};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::{Value, json};

use crate::codec::{decode_response, encode_request};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::transport::{MinreqTransport, Transport};
use crate::types::{
    AddressDelta, Block, BlockReward, BlockchainInfo, ColdStakeUnspent, NetworkInfo,
    SetStakingOptions, StakingInfo, StakingOptions, Tx, WalletSettings,
};

// RPC Client.
#[derive(Debug)]
pub struct Client<T = MinreqTransport> {
    config: Config,
    transport: T,
}

impl Client {
    /// Creates a client for the daemon described by `config`, using a plain
    /// blocking HTTP transport.
    ///
    /// Credentials are taken from `config` as they are at call time; load the
    /// cookie with [`Config::load_credential`] first.
    pub fn new(config: Config) -> Self {
        Self::with_transport(config, MinreqTransport::new())
    }
}

impl<T: Transport> Client<T> {
    /// Creates a client that sends its requests through `transport`.
    pub fn with_transport(config: Config, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Mutable access to the settings. Finish configuring before sharing the
    /// client between threads.
    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Calls the RPC `method` with a given `params` list. A non-empty `wallet`
    /// routes the call to `/wallet/<wallet>`.
    pub fn call<R>(&self, method: &str, wallet: &str, params: &[Value]) -> Result<R>
    where
        R: DeserializeOwned,
    {
        let body = encode_request(method, params)?;
        let url = self.config.url(wallet)?;

        debug!(
            "rpc call {method} wallet={wallet:?} at {}:{}",
            self.config.host(),
            self.config.port()
        );
        trace!("rpc request: {}", String::from_utf8_lossy(&body));

        let response = self.transport.post(&url, &body).map_err(Error::Transport)?;
        if response.status != 200 {
            debug!("rpc call {method} returned status {}", response.status);
            return Err(Error::HttpStatus {
                status: response.status,
                reason: response.reason,
            });
        }

        trace!("rpc response: {}", String::from_utf8_lossy(&response.body));
        decode_response(&response.body)
    }

    /// [`Client::call`] with the error tagged by the method name.
    fn command<R>(&self, method: &'static str, wallet: &str, params: &[Value]) -> Result<R>
    where
        R: DeserializeOwned,
    {
        self.call(method, wallet, params).map_err(|e| e.context(method))
    }
}

fn to_param(value: impl Serialize) -> Result<Value> {
    serde_json::to_value(value).map_err(Error::Encode)
}

// `particld` RPC methods
impl<T: Transport> Client<T> {
    pub fn get_network_info(&self) -> Result<NetworkInfo> {
        self.command("getnetworkinfo", "", &[])
    }

    pub fn get_blockchain_info(&self) -> Result<BlockchainInfo> {
        self.command("getblockchaininfo", "", &[])
    }

    /// Staking state of `wallet`. The result covers both field spellings
    /// daemon releases have used; see [`StakingInfo::schema`].
    pub fn get_staking_info(&self, wallet: &str) -> Result<StakingInfo> {
        self.command("getstakinginfo", wallet, &[])
    }

    /// Daemon uptime in seconds.
    pub fn get_uptime(&self) -> Result<i64> {
        self.command("uptime", "", &[])
    }

    /// Sets the staking options of `wallet` and returns the settings now in effect.
    pub fn set_staking_options(
        &self,
        enabled: bool,
        rewardaddress: &str,
        smsgfeeratetarget: f64,
        wallet: &str,
    ) -> Result<StakingOptions> {
        let options = SetStakingOptions {
            enabled,
            rewardaddress: rewardaddress.to_string(),
            smsgfeeratetarget,
        };
        let params = [json!("stakingoptions"), to_param(&options)?];
        let settings: WalletSettings = self
            .call("walletsettings", wallet, &params)
            .map_err(|e| e.context("set walletsettings"))?;
        Ok(settings.stakingoptions)
    }

    /// Currently set staking options of `wallet`.
    pub fn get_staking_options(&self, wallet: &str) -> Result<StakingOptions> {
        let settings: WalletSettings = self
            .call("walletsettings", wallet, &[json!("stakingoptions")])
            .map_err(|e| e.context("get walletsettings"))?;
        Ok(settings.stakingoptions)
    }

    pub fn get_block_count(&self) -> Result<u64> {
        self.command("getblockcount", "", &[])
    }

    pub fn get_block_hash(&self, height: u64) -> Result<String> {
        self.command("getblockhash", "", &[json!(height)])
    }

    pub fn get_block(&self, hash: &str) -> Result<Block> {
        self.command("getblock", "", &[json!(hash)])
    }

    /// Decoded transaction. Requires `-txindex` for transactions outside the mempool.
    pub fn get_raw_transaction(&self, txid: &str) -> Result<Tx> {
        self.command("getrawtransaction", "", &[json!(txid), json!(true)])
    }

    pub fn get_block_reward(&self, height: u64) -> Result<BlockReward> {
        self.command("getblockreward", "", &[json!(height)])
    }

    /// Balance changes of `addresses`. Requires `-addressindex`.
    pub fn get_address_deltas(&self, addresses: &[&str]) -> Result<Vec<AddressDelta>> {
        self.command("getaddressdeltas", "", &[json!({ "addresses": addresses })])
    }

    /// Cold staking outputs of `wallet` staked to `stake_address`.
    pub fn list_cold_stake_unspent(
        &self,
        stake_address: &str,
        wallet: &str,
    ) -> Result<Vec<ColdStakeUnspent>> {
        self.command("listcoldstakeunspent", wallet, &[json!(stake_address)])
    }
}
