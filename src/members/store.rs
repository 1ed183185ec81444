//! Member registry backed by the members file.

use std::path::{Path, PathBuf};

use crate::members::codec::MemberCodec;
use crate::members::types::{Member, MemberStatus};
use crate::storage::codec::ensure_single_line;
use crate::storage::error::{RecordKind, StoreError};
use crate::storage::record_store::{LoadStatus, RecordStore};

/// Registry of gym members.
///
/// Every mutating call rewrites the members file.
pub struct MemberStore {
    records: RecordStore<MemberCodec>,
}

impl MemberStore {
    /// Open the registry, loading members from `path` if it exists.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self {
            records: RecordStore::open(path),
        }
    }

    pub fn path(&self) -> &Path {
        self.records.path()
    }

    pub fn load_status(&self) -> &LoadStatus {
        self.records.load_status()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Register a new active member who joins today.
    ///
    /// Names and membership types must fit on one line.
    pub fn register(
        &mut self,
        name: &str,
        age: u32,
        membership_type: &str,
    ) -> Result<u32, StoreError> {
        check_profile(name, membership_type)?;
        let id = self.records.insert_with(|id| {
            Member::new(id, name.to_string(), age, membership_type.to_string())
        })?;
        tracing::info!(id, name, membership_type, "Member registered");
        Ok(id)
    }

    pub fn get(&self, id: u32) -> Result<&Member, StoreError> {
        self.records.get(id)
    }

    pub fn contains(&self, id: u32) -> bool {
        self.records.contains(id)
    }

    /// Snapshot of all members in registration order.
    pub fn list(&self) -> Vec<Member> {
        self.records.list()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Member> {
        self.records.iter()
    }

    /// Multi-line summary of one member.
    pub fn render_info(&self, id: u32) -> Result<String, StoreError> {
        self.get(id).map(Member::to_string)
    }

    /// Summaries of every member, each followed by a blank line.
    pub fn render_all(&self) -> String {
        let mut out = String::new();
        for member in self.records.iter() {
            out.push_str(&member.to_string());
            out.push_str("\n\n");
        }
        out
    }

    /// Replace a member's profile fields.
    pub fn update(
        &mut self,
        id: u32,
        name: &str,
        age: u32,
        membership_type: &str,
    ) -> Result<(), StoreError> {
        check_profile(name, membership_type)?;
        self.records.update(id, |m| {
            m.name = name.to_string();
            m.age = age;
            m.membership_type = membership_type.to_string();
        })
    }

    /// Set height in meters; BMI is recomputed against the stored weight.
    pub fn set_height(&mut self, id: u32, height_m: f64) -> Result<(), StoreError> {
        self.records.update(id, |m| m.set_height(height_m))
    }

    /// Set weight in kilograms; BMI is recomputed against the stored height.
    pub fn set_weight(&mut self, id: u32, weight_kg: f64) -> Result<(), StoreError> {
        self.records.update(id, |m| m.set_weight(weight_kg))
    }

    /// Set height and weight together with a single write.
    pub fn set_measurements(
        &mut self,
        id: u32,
        height_m: f64,
        weight_kg: f64,
    ) -> Result<(), StoreError> {
        self.records
            .update(id, |m| m.set_measurements(height_m, weight_kg))
    }

    pub fn activate(&mut self, id: u32) -> Result<(), StoreError> {
        self.set_status(id, MemberStatus::Active)
    }

    pub fn deactivate(&mut self, id: u32) -> Result<(), StoreError> {
        self.set_status(id, MemberStatus::Inactive)
    }

    fn set_status(&mut self, id: u32, status: MemberStatus) -> Result<(), StoreError> {
        self.records.update(id, |m| m.status = status)?;
        tracing::info!(id, %status, "Member status changed");
        Ok(())
    }

    /// Remove a member. Workouts that reference it are left in place.
    pub fn remove(&mut self, id: u32) -> Result<Member, StoreError> {
        let removed = self.records.remove(id)?;
        tracing::info!(id, "Member removed");
        Ok(removed)
    }
}

fn check_profile(name: &str, membership_type: &str) -> Result<(), StoreError> {
    ensure_single_line(RecordKind::Member, "name", name)?;
    ensure_single_line(RecordKind::Member, "membership type", membership_type)
}
