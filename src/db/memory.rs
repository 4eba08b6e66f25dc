//! In-memory [`Store`] implementation for tests.
//!
//! Mirrors the MongoDB repository's observable behavior: max+1 id
//! assignment, name-ascending and startDate-descending sorts (entries
//! without a startDate last), idempotent deletes, and whole-payload
//! rotation replacement.

use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use super::Store;
use crate::errors::AppError;
use crate::models::{CreateTimeOffRequest, TeamMember, TimeOffEntry};

#[derive(Default)]
pub struct MemoryRepository {
    members: Mutex<Vec<TeamMember>>,
    time_off: Mutex<Vec<TimeOffEntry>>,
    rotation: Mutex<Option<Value>>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store for MemoryRepository {
    async fn list_members(&self) -> Result<Vec<TeamMember>, AppError> {
        let mut members = self.members.lock().unwrap().clone();
        members.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(members)
    }

    async fn create_member(&self, name: &str) -> Result<TeamMember, AppError> {
        let mut members = self.members.lock().unwrap();
        let id = members.iter().map(|m| m.id).max().unwrap_or(0) + 1;
        let member = TeamMember {
            id,
            name: name.to_string(),
        };
        members.push(member.clone());
        Ok(member)
    }

    async fn delete_member(&self, id: i64) -> Result<(), AppError> {
        self.members.lock().unwrap().retain(|m| m.id != id);
        self.time_off
            .lock()
            .unwrap()
            .retain(|t| t.member_id != Some(id));
        Ok(())
    }

    async fn list_time_off(&self) -> Result<Vec<TimeOffEntry>, AppError> {
        let mut entries = self.time_off.lock().unwrap().clone();
        // Descending; None (< any Some) ends up last, as Mongo places
        // missing keys under a descending sort
        entries.sort_by(|a, b| b.start_date.cmp(&a.start_date));
        Ok(entries)
    }

    async fn create_time_off(
        &self,
        request: CreateTimeOffRequest,
    ) -> Result<TimeOffEntry, AppError> {
        let mut entries = self.time_off.lock().unwrap();
        let id = entries.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        let entry = TimeOffEntry::from_request(id, request);
        entries.push(entry.clone());
        Ok(entry)
    }

    async fn delete_time_off(&self, id: i64) -> Result<(), AppError> {
        self.time_off.lock().unwrap().retain(|t| t.id != id);
        Ok(())
    }

    async fn get_rotation(&self) -> Result<Option<Value>, AppError> {
        Ok(self.rotation.lock().unwrap().clone())
    }

    async fn save_rotation(&self, data: Value) -> Result<(), AppError> {
        *self.rotation.lock().unwrap() = Some(data);
        Ok(())
    }
}
