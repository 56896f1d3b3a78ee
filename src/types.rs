//! Result types for the daemon commands, mirroring particld's JSON field names.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An amount in satoshis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sat(pub i64);

/// `getnetworkinfo`
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkInfo {
    #[serde(default)]
    pub version: i64,
    #[serde(default)]
    pub subversion: String,
    #[serde(default)]
    pub connections: i64,
}

/// `getblockchaininfo`
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BlockchainInfo {
    #[serde(default)]
    pub blocks: u64,
}

/// Which generation of `getstakinginfo` output a daemon produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StakingSchema {
    /// `errors` + `treasurydonationpercent`.
    Treasury,
    /// `cause` + `foundationdonationpercent`.
    Foundation,
}

/// `getstakinginfo`
///
/// Daemon releases disagree on two field names, so both spellings are
/// optional here and anything else the daemon sends is kept in `extra`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StakingInfo {
    #[serde(default)]
    pub staking: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cause: Option<String>,
    #[serde(default)]
    pub weight: i64,
    #[serde(default)]
    pub percentyearreward: f64,
    #[serde(default)]
    pub moneysupply: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub treasurydonationpercent: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foundationdonationpercent: Option<f64>,
    #[serde(default)]
    pub netstakeweight: i64,
    #[serde(default)]
    pub expectedtime: i64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl StakingInfo {
    /// Detects the schema from the fields that were present, or `None` if the
    /// response carried neither variant.
    pub fn schema(&self) -> Option<StakingSchema> {
        if self.errors.is_some() || self.treasurydonationpercent.is_some() {
            Some(StakingSchema::Treasury)
        } else if self.cause.is_some() || self.foundationdonationpercent.is_some() {
            Some(StakingSchema::Foundation)
        } else {
            None
        }
    }

    /// Why staking is (not) active: `errors` or `cause`, whichever was sent.
    pub fn status_message(&self) -> Option<&str> {
        self.errors.as_deref().or(self.cause.as_deref())
    }

    /// Donation percentage: treasury or foundation, whichever was sent.
    pub fn donation_percent(&self) -> Option<f64> {
        self.treasurydonationpercent
            .or(self.foundationdonationpercent)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BlockRewardKernelScript {
    #[serde(default)]
    pub spendaddr: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BlockRewardOutputScript {
    #[serde(default)]
    pub hex: String,
    #[serde(default)]
    pub spendaddr: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BlockRewardOutput {
    #[serde(default)]
    pub script: BlockRewardOutputScript,
    #[serde(default)]
    pub value: f64,
}

/// `getblockreward`
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BlockReward {
    #[serde(default)]
    pub blockhash: String,
    #[serde(default)]
    pub coinstake: String,
    #[serde(default)]
    pub stakereward: f64,
    #[serde(default)]
    pub blockreward: f64,
    #[serde(default)]
    pub kernelscript: BlockRewardKernelScript,
    #[serde(default)]
    pub outputs: Vec<BlockRewardOutput>,
}

/// One entry of `listcoldstakeunspent`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ColdStakeUnspent {
    #[serde(default)]
    pub height: u64,
    #[serde(default)]
    pub value: Sat,
    #[serde(default)]
    pub addrspend: String,
}

/// `getblock` (verbose). Only the header fields are decoded.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Block {
    #[serde(default)]
    pub hash: String,
    #[serde(default)]
    pub time: i64,
    #[serde(default)]
    pub height: u64,
}

/// One entry of `getaddressdeltas`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AddressDelta {
    #[serde(default)]
    pub satoshis: Sat,
    #[serde(default)]
    pub txid: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TxVin {
    #[serde(default)]
    pub txid: String,
    #[serde(default)]
    pub vout: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ScriptPubKey {
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub addresses: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TxVout {
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default, rename = "valueSat")]
    pub value_sat: Sat,
    #[serde(default, rename = "scriptPubKey")]
    pub script_pub_key: ScriptPubKey,
}

/// `getrawtransaction` (verbose).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Tx {
    #[serde(default)]
    pub vin: Vec<TxVin>,
    #[serde(default)]
    pub vout: Vec<TxVout>,
    #[serde(default)]
    pub time: i64,
    #[serde(default)]
    pub blockhash: String,
}

/// Staking options as reported by `walletsettings stakingoptions`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StakingOptions {
    #[serde(default)]
    pub rewardaddress: String,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub time: i64,
    #[serde(default)]
    pub smsgfeeratetarget: f64,
}

/// Staking options sent with `walletsettings stakingoptions {...}`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SetStakingOptions {
    pub enabled: bool,
    pub rewardaddress: String,
    pub smsgfeeratetarget: f64,
}

/// `walletsettings` wraps the options in a named object.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub(crate) struct WalletSettings {
    #[serde(default)]
    pub stakingoptions: StakingOptions,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn staking_info_treasury_schema() {
        let info: StakingInfo = serde_json::from_value(json!({
            "enabled": true,
            "staking": true,
            "errors": "",
            "weight": 120000000,
            "percentyearreward": 2.0,
            "moneysupply": 8600000.5,
            "treasurydonationpercent": 10.0,
            "netstakeweight": 900000000,
            "expectedtime": 4000,
        }))
        .unwrap();

        assert_eq!(info.schema(), Some(StakingSchema::Treasury));
        assert_eq!(info.status_message(), Some(""));
        assert_eq!(info.donation_percent(), Some(10.0));
        assert_eq!(info.extra.get("enabled"), Some(&json!(true)));
    }

    #[test]
    fn staking_info_foundation_schema() {
        let info: StakingInfo = serde_json::from_value(json!({
            "staking": false,
            "cause": "disabled",
            "foundationdonationpercent": 5.0,
        }))
        .unwrap();

        assert!(!info.staking);
        assert_eq!(info.schema(), Some(StakingSchema::Foundation));
        assert_eq!(info.status_message(), Some("disabled"));
        assert_eq!(info.donation_percent(), Some(5.0));
    }

    #[test]
    fn tx_vout_field_names() {
        let vout: TxVout = serde_json::from_value(json!({
            "type": "standard",
            "valueSat": 150000000,
            "scriptPubKey": {"type": "pubkeyhash", "addresses": ["PabC"]},
        }))
        .unwrap();

        assert_eq!(vout.kind, "standard");
        assert_eq!(vout.value_sat, Sat(150000000));
        assert_eq!(vout.script_pub_key.addresses, vec!["PabC".to_string()]);
    }
}
