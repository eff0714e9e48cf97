//! # Distributor Service
//!
//! Application service orchestrating a commitment run:
//!
//! ```text
//! WhitelistSource ──load──→ records ──to_entry──→ entries
//!        ──encode_leaves──→ leaves ──build_tree──→ tree
//!        ──prove_all──→ proofs ──(self-check)──→ claims
//!        ──MerkleDistribution──→ DistributionSink
//! ```
//!
//! Any failure aborts the run before the sink is touched.

use std::collections::HashMap;

use shared_types::{to_hex_prefixed, Address, Hash};
use tracing::{debug, info, warn};

use crate::algorithms::{
    build_claims, build_tree_with_threshold, encode_leaves, prove_all, prove_index, verify_claim,
};
use crate::config::DistributorConfig;
use crate::domain::{
    Claim, Commitment, DistributorError, MerkleDistribution, MerkleError, MerkleTree,
    WhitelistEntry, WhitelistRecord,
};
use crate::ports::{DistributionSink, DistributorApi, WhitelistSource};

/// Merkle Distributor Service.
pub struct DistributorService<S: WhitelistSource, K: DistributionSink> {
    /// Configuration.
    config: DistributorConfig,
    /// Whitelist supplier.
    source: S,
    /// Claims document receiver.
    sink: K,
}

impl<S: WhitelistSource, K: DistributionSink> DistributorService<S, K> {
    /// Create a new service.
    pub fn new(config: DistributorConfig, source: S, sink: K) -> Self {
        Self {
            config,
            source,
            sink,
        }
    }

    /// Get the configuration.
    pub fn config(&self) -> &DistributorConfig {
        &self.config
    }

    /// Get the sink.
    pub fn sink(&self) -> &K {
        &self.sink
    }

    /// Decode records into entries; record position becomes the index.
    ///
    /// The first undecodable record aborts the whole run.
    pub fn decode_records(records: &[WhitelistRecord]) -> Result<Vec<WhitelistEntry>, MerkleError> {
        records
            .iter()
            .enumerate()
            .map(|(i, record)| record.to_entry(i as u64))
            .collect()
    }

    /// Internal: indices must be exactly 0..n.
    fn check_index_sequence(entries: &[WhitelistEntry]) -> Result<(), MerkleError> {
        for (position, entry) in entries.iter().enumerate() {
            let expected = position as u64;
            if entry.index != expected {
                return Err(MerkleError::NonContiguousIndex {
                    expected,
                    found: entry.index,
                });
            }
        }
        Ok(())
    }

    /// Internal: duplicates are legal but usually a list-preparation mistake.
    fn warn_duplicates(entries: &[WhitelistEntry]) {
        let mut first_seen: HashMap<Address, u64> = HashMap::with_capacity(entries.len());
        for entry in entries {
            if let Some(first) = first_seen.get(&entry.account) {
                warn!(
                    account = %to_hex_prefixed(entry.account),
                    first_index = *first,
                    index = entry.index,
                    "Duplicate account in whitelist"
                );
            } else {
                first_seen.insert(entry.account, entry.index);
            }
        }
    }

    /// Internal: every proof must reconstruct the root from a re-encoded leaf.
    fn self_check(claims: &[Claim], root: &Hash) -> Result<(), MerkleError> {
        match claims.iter().find(|claim| !verify_claim(claim, root)) {
            Some(claim) => Err(MerkleError::ProofSelfCheckFailed {
                index: claim.entry.index,
            }),
            None => Ok(()),
        }
    }
}

impl<S: WhitelistSource, K: DistributionSink> DistributorApi for DistributorService<S, K> {
    fn commit(&self, entries: &[WhitelistEntry]) -> Result<Commitment, DistributorError> {
        if self.config.verify_index_sequence {
            Self::check_index_sequence(entries)?;
        }
        if self.config.warn_on_duplicate_accounts {
            Self::warn_duplicates(entries);
        }

        let threshold = self.config.parallel_threshold;
        let leaves = encode_leaves(entries, threshold);
        debug!(leaf_count = leaves.len(), "Leaves encoded");

        let tree = build_tree_with_threshold(leaves, threshold)?;
        let proofs = prove_all(&tree, threshold);

        let claims = build_claims(entries, proofs);

        if self.config.self_verify_proofs {
            Self::self_check(&claims, &tree.root())?;
            debug!(claims = claims.len(), "All proofs verified against root");
        }

        info!(
            leaf_count = tree.leaf_count(),
            depth = tree.depth(),
            root = %to_hex_prefixed(tree.root()),
            "Merkle commitment computed"
        );

        Ok(Commitment { tree, claims })
    }

    fn prove(&self, tree: &MerkleTree, index: usize) -> Result<Vec<Hash>, DistributorError> {
        Ok(prove_index(tree, index)?)
    }

    fn generate(&self) -> Result<MerkleDistribution, DistributorError> {
        info!(source = %self.source.describe(), "Reading whitelist");
        let records = self.source.load()?;
        let entries = Self::decode_records(&records)?;

        let commitment = self.commit(&entries)?;

        let addresses: Vec<String> = records.into_iter().map(|r| r.address).collect();
        let distribution = MerkleDistribution::from_commitment(&commitment, &addresses);

        self.sink.store(&distribution)?;
        info!(
            merkle_root = %distribution.merkle_root,
            claims = distribution.claims.len(),
            output = %self.sink.describe(),
            "Merkle data generated"
        );

        Ok(distribution)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{InMemorySink, InMemorySource};
    use crate::algorithms::{encode_entry, verify_proof};
    use primitive_types::U256;

    fn make_record(n: u8, amount: u64) -> WhitelistRecord {
        WhitelistRecord::new(to_hex_prefixed([n; 20]), amount.to_string())
    }

    fn make_service(
        records: Vec<WhitelistRecord>,
    ) -> DistributorService<InMemorySource, InMemorySink> {
        DistributorService::new(
            DistributorConfig::for_testing(),
            InMemorySource::new(records),
            InMemorySink::new(),
        )
    }

    fn make_entries(n: u64) -> Vec<WhitelistEntry> {
        (0..n)
            .map(|i| WhitelistEntry::new(i, [i as u8 + 1; 20], U256::from(i * 10 + 1)))
            .collect()
    }

    #[test]
    fn test_generate_stores_distribution() {
        let service = make_service((1..=5).map(|n| make_record(n, n as u64 * 100)).collect());

        let doc = service.generate().unwrap();

        assert_eq!(service.sink().stored(), Some(doc.clone()));
        assert_eq!(doc.claims.len(), 5);
        assert_eq!(doc.merkle_root.len(), 66);
        assert_eq!(doc.claims[2].amount, "300");
        assert_eq!(doc.claims[2].index, 2);
    }

    #[test]
    fn test_generate_keeps_supplied_address_text() {
        let checksummed = "0xAbCdEf0000000000000000000000000000000001";
        let service = make_service(vec![WhitelistRecord::new(checksummed, "1")]);

        let doc = service.generate().unwrap();
        assert_eq!(doc.claims[0].address, checksummed);
    }

    #[test]
    fn test_generate_empty_whitelist_fails() {
        let service = make_service(vec![]);
        let result = service.generate();

        assert!(matches!(
            result,
            Err(DistributorError::Merkle(MerkleError::EmptyTree))
        ));
        assert!(service.sink().stored().is_none());
    }

    #[test]
    fn test_generate_bad_amount_aborts() {
        let service = make_service(vec![
            make_record(1, 1),
            WhitelistRecord::new(to_hex_prefixed([2u8; 20]), "-5"),
        ]);

        assert!(matches!(
            service.generate(),
            Err(DistributorError::Merkle(MerkleError::EncodingRange { .. }))
        ));
        assert!(service.sink().stored().is_none());
    }

    #[test]
    fn test_commit_claims_verify() {
        let service = make_service(vec![]);
        let entries = make_entries(9);

        let commitment = service.commit(&entries).unwrap();

        for claim in &commitment.claims {
            let leaf = encode_entry(&claim.entry);
            assert!(verify_proof(&leaf, &claim.proof, &commitment.root()));
        }
    }

    #[test]
    fn test_commit_rejects_index_gap() {
        let service = make_service(vec![]);
        let mut entries = make_entries(4);
        entries[2].index = 3;

        assert!(matches!(
            service.commit(&entries),
            Err(DistributorError::Merkle(MerkleError::NonContiguousIndex {
                expected: 2,
                found: 3
            }))
        ));
    }

    #[test]
    fn test_commit_allows_gap_when_disabled() {
        let config = DistributorConfig {
            verify_index_sequence: false,
            ..DistributorConfig::for_testing()
        };
        let service = DistributorService::new(config, InMemorySource::default(), InMemorySink::new());
        let mut entries = make_entries(4);
        entries[2].index = 40;

        let commitment = service.commit(&entries).unwrap();
        assert_eq!(commitment.claims[2].entry.index, 40);
    }

    #[test]
    fn test_commit_duplicate_accounts_allowed() {
        let service = make_service(vec![]);
        let mut entries = make_entries(3);
        entries[2].account = entries[0].account;

        assert!(service.commit(&entries).is_ok());
    }

    #[test]
    fn test_prove_out_of_range() {
        let service = make_service(vec![]);
        let commitment = service.commit(&make_entries(3)).unwrap();

        assert!(matches!(
            service.prove(&commitment.tree, 3),
            Err(DistributorError::Merkle(MerkleError::IndexOutOfRange {
                index: 3,
                leaf_count: 3
            }))
        ));
        assert_eq!(
            service.prove(&commitment.tree, 1).unwrap(),
            commitment.claims[1].proof
        );
    }

    #[test]
    fn test_self_check_detects_bad_proof() {
        let service = make_service(vec![]);
        let mut commitment = service.commit(&make_entries(4)).unwrap();
        commitment.claims[1].proof[0][0] ^= 0x01;

        let result = DistributorService::<InMemorySource, InMemorySink>::self_check(
            &commitment.claims,
            &commitment.root(),
        );
        assert_eq!(result, Err(MerkleError::ProofSelfCheckFailed { index: 1 }));
    }
}
