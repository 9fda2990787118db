use std::collections::HashSet;
use std::sync::Arc;

use crate::profile::{ProfileId, ProfileRecord};

const SAMPLE_PROFILES_JSON: &str = include_str!("../data/sample_profiles.json");

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("profile {id} not found")]
    ProfileNotFound { id: ProfileId },
    #[error("profile id {id} appears more than once")]
    DuplicateProfileId { id: ProfileId },
    #[error("invalid profile data: {0}")]
    InvalidData(#[from] serde_json::Error),
}

/// Read-only, ordered set of profiles. Built once at startup and shared by
/// every view; clones share the same storage.
#[derive(Debug, Clone)]
pub struct ProfileStore {
    records: Arc<[ProfileRecord]>,
}

impl ProfileStore {
    pub fn new(records: Vec<ProfileRecord>) -> Result<Self, StoreError> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id) {
                return Err(StoreError::DuplicateProfileId { id: record.id });
            }
        }
        Ok(Self {
            records: records.into(),
        })
    }

    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        let records: Vec<ProfileRecord> = serde_json::from_str(json)?;
        Self::new(records)
    }

    /// The demo data set bundled with the binary.
    pub fn sample() -> Result<Self, StoreError> {
        Self::from_json(SAMPLE_PROFILES_JSON)
    }

    pub fn all(&self) -> &[ProfileRecord] {
        &self.records
    }

    pub fn by_id(&self, id: ProfileId) -> Result<&ProfileRecord, StoreError> {
        self.records
            .iter()
            .find(|r| r.id == id)
            .ok_or(StoreError::ProfileNotFound { id })
    }

    pub fn contains(&self, id: ProfileId) -> bool {
        self.records.iter().any(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
