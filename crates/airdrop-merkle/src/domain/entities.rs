//! # Domain Entities
//!
//! Core entities of the Merkle distributor.
//!
//! - `WhitelistEntry`: one (index, account, amount) input row
//! - `MerkleTree`: every layer from the leaves up to the root
//! - `Claim`: an entry together with its membership proof
//! - `MerkleDistribution` / `ClaimRecord`: the published claims document

use primitive_types::U256;
use serde::{Deserialize, Serialize};
use shared_types::{parse_address, parse_hash, to_hex_prefixed, Address, Hash};

use super::errors::MerkleError;
use super::value_objects::{parse_account, parse_amount, LeafField};

/// A single whitelist row.
///
/// `index` is the 0-based position in the externally determined order.
/// It is encoded into the leaf as supplied, never derived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhitelistEntry {
    /// Position of the entry.
    pub index: u64,
    /// Claimant account.
    pub account: Address,
    /// Claimable amount.
    pub amount: U256,
}

impl WhitelistEntry {
    /// Create a new entry.
    pub fn new(index: u64, account: Address, amount: U256) -> Self {
        Self {
            index,
            account,
            amount,
        }
    }
}

/// A binary Merkle tree built with sort-then-hash pairing.
///
/// ALGORITHM: each parent is `keccak256(min(a, b) ‖ max(a, b))`. An unpaired
/// last element of an odd-length layer is carried into the next layer as-is.
///
/// ## Invariants
///
/// - `layers[0]` holds the leaves, in entry order.
/// - `layers[k + 1]` is derived entirely from `layers[k]`.
/// - The last layer has exactly one element, the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MerkleTree {
    /// All layers, leaves first, root layer last.
    layers: Vec<Vec<Hash>>,
    /// The sole element of the last layer.
    root: Hash,
}

impl MerkleTree {
    /// Assemble a tree from already-computed layers.
    ///
    /// Only the tree builder constructs trees, so the invariants above hold.
    pub(crate) fn from_layers(layers: Vec<Vec<Hash>>, root: Hash) -> Self {
        Self { layers, root }
    }

    /// The published commitment.
    pub fn root(&self) -> Hash {
        self.root
    }

    /// All layers, leaves first.
    pub fn layers(&self) -> &[Vec<Hash>] {
        &self.layers
    }

    /// The leaf layer.
    pub fn leaves(&self) -> &[Hash] {
        self.layers.first().map(Vec::as_slice).unwrap_or_default()
    }

    /// Number of leaves.
    pub fn leaf_count(&self) -> usize {
        self.leaves().len()
    }

    /// Number of layers above the leaves (0 for a single-leaf tree).
    pub fn depth(&self) -> usize {
        self.layers.len().saturating_sub(1)
    }

    /// Leaf hash at `index`, if it exists.
    pub fn leaf(&self, index: usize) -> Option<Hash> {
        self.leaves().get(index).copied()
    }
}

/// An entry with its membership proof, bottom layer first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Claim {
    /// The whitelisted entry.
    pub entry: WhitelistEntry,
    /// Sibling hashes, `proof[0]` being the sibling at the leaf layer.
    pub proof: Vec<Hash>,
}

/// The output of a commitment run: the tree plus one claim per entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commitment {
    /// The finalized tree.
    pub tree: MerkleTree,
    /// Claims in entry order.
    pub claims: Vec<Claim>,
}

impl Commitment {
    /// The published root.
    pub fn root(&self) -> Hash {
        self.tree.root()
    }
}

/// Published claims document.
///
/// This is the wire contract with verifiers:
///
/// ```json
/// {
///   "merkleRoot": "0x…",
///   "claims": [{ "index": 0, "address": "0x…", "amount": "100", "proof": ["0x…"] }]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MerkleDistribution {
    /// Root rendered as `0x` + 64 lowercase hex characters.
    #[serde(rename = "merkleRoot")]
    pub merkle_root: String,
    /// One record per entry, in index order.
    pub claims: Vec<ClaimRecord>,
}

impl MerkleDistribution {
    /// Render a commitment, keeping each account exactly as it was supplied.
    ///
    /// `supplied_addresses[i]` is the textual address of `commitment.claims[i]`.
    /// When absent, the address is rendered as lowercase hex.
    pub fn from_commitment(commitment: &Commitment, supplied_addresses: &[String]) -> Self {
        let claims = commitment
            .claims
            .iter()
            .enumerate()
            .map(|(i, claim)| {
                let address = supplied_addresses
                    .get(i)
                    .cloned()
                    .unwrap_or_else(|| to_hex_prefixed(claim.entry.account));
                ClaimRecord::from_claim(claim, address)
            })
            .collect();

        Self {
            merkle_root: to_hex_prefixed(commitment.root()),
            claims,
        }
    }

    /// Decode the root back into bytes.
    pub fn root(&self) -> Result<Hash, MerkleError> {
        parse_hash(&self.merkle_root).map_err(|e| MerkleError::MalformedRoot {
            reason: e.to_string(),
        })
    }
}

/// A single claim as published.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimRecord {
    /// Entry index.
    pub index: u64,
    /// Account identifier as supplied in the whitelist.
    pub address: String,
    /// Amount as a decimal string, so large values survive JSON consumers.
    pub amount: String,
    /// Proof hashes as `0x`-prefixed hex, bottom layer first.
    pub proof: Vec<String>,
}

impl ClaimRecord {
    /// Render a claim.
    pub fn from_claim(claim: &Claim, address: String) -> Self {
        Self {
            index: claim.entry.index,
            address,
            amount: claim.entry.amount.to_string(),
            proof: claim.proof.iter().map(to_hex_prefixed).collect(),
        }
    }

    /// Decode back into a domain claim.
    pub fn to_claim(&self) -> Result<Claim, MerkleError> {
        let malformed = |reason: String| MerkleError::MalformedClaim {
            index: self.index,
            reason,
        };

        let account = parse_address(&self.address)
            .map_err(|e| malformed(format!("{}: {}", LeafField::Account, e)))?;
        let amount = parse_amount(&self.amount).map_err(|e| malformed(e.to_string()))?;
        let proof = self
            .proof
            .iter()
            .map(|h| parse_hash(h).map_err(|e| malformed(format!("proof: {}", e))))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Claim {
            entry: WhitelistEntry::new(self.index, account, amount),
            proof,
        })
    }
}

/// One row of the input whitelist, as supplied.
///
/// The row's position in the list is its index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WhitelistRecord {
    /// Account address, `0x`-prefixed or bare hex.
    pub address: String,
    /// Amount as a decimal string or a JSON integer.
    pub amount: AmountValue,
}

impl WhitelistRecord {
    /// Create a record with a decimal-string amount.
    pub fn new(address: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            amount: AmountValue::Decimal(amount.into()),
        }
    }

    /// Decode into an entry at position `index`.
    pub fn to_entry(&self, index: u64) -> Result<WhitelistEntry, MerkleError> {
        let account = parse_account(&self.address)?;
        let amount = self.amount.to_u256()?;
        Ok(WhitelistEntry::new(index, account, amount))
    }
}

/// An input amount in any of the JSON shapes found in whitelists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AmountValue {
    /// Non-negative JSON integer.
    Integer(u64),
    /// Negative JSON integer (always rejected).
    Signed(i64),
    /// JSON float (always rejected).
    Float(f64),
    /// Decimal string, up to 2^256 - 1.
    Decimal(String),
}

impl AmountValue {
    /// Convert to `uint256`, refusing anything that does not fit.
    pub fn to_u256(&self) -> Result<U256, MerkleError> {
        match self {
            Self::Integer(v) => Ok(U256::from(*v)),
            Self::Signed(v) => Err(MerkleError::encoding_range(
                LeafField::Amount,
                format!("negative amount {}", v),
            )),
            Self::Float(v) => Err(MerkleError::encoding_range(
                LeafField::Amount,
                format!("non-integer amount {}", v),
            )),
            Self::Decimal(s) => parse_amount(s),
        }
    }
}
