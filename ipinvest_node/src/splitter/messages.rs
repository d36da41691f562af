//! JSON message assembly for the Splitter ADO.
//!
//! The shapes here are consumed by external tooling (CosmJS signing, the
//! deployed contract) and must round-trip byte-for-byte compatible JSON:
//! recipient percents are decimal strings of the fraction-of-1.0 form, the
//! inner contract msg is a JSON-encoded *string*, and tx-body value fields
//! are camelCase.

use serde::{Deserialize, Serialize};

use crate::royalty::{format_fraction, RoyaltyAllocation};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipientAddress {
    pub address: String,
}

/// One entry of the Splitter's recipient list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipient {
    pub recipient: RecipientAddress,
    pub percent: String,
}

impl Recipient {
    pub fn new(address: impl Into<String>, percent: impl Into<String>) -> Self {
        Self {
            recipient: RecipientAddress {
                address: address.into(),
            },
            percent: percent.into(),
        }
    }
}

/// Build the recipient list from a computed allocation, creator first.
/// One entry per investor stake; duplicate addresses are not merged.
pub fn recipients_from_allocation(allocation: &RoyaltyAllocation) -> Vec<Recipient> {
    allocation
        .entries()
        .map(|e| Recipient::new(e.address.clone(), format_fraction(e.percent)))
        .collect()
}

/// InstantiateMsg for the Splitter ADO. `lock_time` and `default_recipient`
/// are always serialized (as null when unset) — the contract schema expects
/// the keys to be present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitterInstantiateMsg {
    pub recipients: Vec<Recipient>,
    pub lock_time: Option<u64>,
    pub default_recipient: Option<RecipientAddress>,
    pub kernel_address: String,
    pub owner: String,
}

impl SplitterInstantiateMsg {
    pub fn new(
        recipients: Vec<Recipient>,
        owner: impl Into<String>,
        kernel_address: impl Into<String>,
    ) -> Self {
        Self {
            recipients,
            lock_time: None,
            default_recipient: None,
            kernel_address: kernel_address.into(),
            owner: owner.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coin {
    pub denom: String,
    pub amount: String,
}

/// Unsigned transaction body in the shape CosmJS expects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TxBody<V> {
    #[serde(rename = "typeUrl")]
    pub type_url: String,
    pub value: V,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstantiateValue {
    pub sender: String,
    pub admin: String,
    pub code_id: String,
    pub label: String,
    /// JSON-encoded [`SplitterInstantiateMsg`].
    pub msg: String,
    pub funds: Vec<Coin>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecuteValue {
    pub sender: String,
    pub contract: String,
    /// JSON-encoded execute msg.
    pub msg: String,
    pub funds: Vec<Coin>,
}

/// Unsigned MsgInstantiateContract body deploying a Splitter with the given
/// recipient list. The creator instantiates, administers and owns the
/// contract.
pub fn instantiate_tx_body(
    creator_address: &str,
    recipients: Vec<Recipient>,
    kernel_address: &str,
    code_id: u64,
) -> serde_json::Result<TxBody<InstantiateValue>> {
    let msg = SplitterInstantiateMsg::new(recipients, creator_address, kernel_address);
    let label_tag = creator_address.get(..8).unwrap_or(creator_address);

    Ok(TxBody {
        type_url: "/cosmwasm.wasm.v1.MsgInstantiateContract".to_string(),
        value: InstantiateValue {
            sender: creator_address.to_string(),
            admin: creator_address.to_string(),
            code_id: code_id.to_string(),
            label: format!("Splitter-{}", label_tag),
            msg: serde_json::to_string(&msg)?,
            funds: Vec::new(),
        },
    })
}

/// Unsigned MsgExecuteContract body sending `amount` uandr to a deployed
/// Splitter, which distributes it per its recipient list.
pub fn send_tx_body(
    sender_address: &str,
    splitter_contract_address: &str,
    amount_uandr: &str,
) -> serde_json::Result<TxBody<ExecuteValue>> {
    let execute_msg = serde_json::json!({ "send": {} });

    Ok(TxBody {
        type_url: "/cosmwasm.wasm.v1.MsgExecuteContract".to_string(),
        value: ExecuteValue {
            sender: sender_address.to_string(),
            contract: splitter_contract_address.to_string(),
            msg: serde_json::to_string(&execute_msg)?,
            funds: vec![Coin {
                denom: "uandr".to_string(),
                amount: amount_uandr.to_string(),
            }],
        },
    })
}
