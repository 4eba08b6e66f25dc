//! Store trait and the MongoDB-backed repository.
//!
//! Handlers depend on the [`Store`] trait, not on MongoDB directly, so tests
//! can inject an in-memory implementation.

use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::{
    bson::{doc, to_bson},
    options::{FindOneOptions, FindOptions, UpdateOptions},
    Collection, Database,
};
use serde_json::Value;

use crate::errors::AppError;
use crate::models::{
    CreateTimeOffRequest, OnCallRotation, TeamMember, TimeOffEntry, SCHEDULE_NAME,
};

/// Persistence operations used by the route handlers.
///
/// Ids are assigned as `max(existing ids) + 1`, computed as a read separate
/// from the insert. Two concurrent creates can observe the same maximum and
/// assign the same id, and deleting the highest-id document makes its id
/// eligible for reuse. Both are accepted behaviors of this store.
#[async_trait]
pub trait Store: Send + Sync {
    /// List all members, ordered by `name` ascending.
    async fn list_members(&self) -> Result<Vec<TeamMember>, AppError>;

    /// Insert a member under the next free id and return it.
    async fn create_member(&self, name: &str) -> Result<TeamMember, AppError>;

    /// Delete a member and all time-off entries referencing it.
    /// A missing id is a no-op, not an error.
    async fn delete_member(&self, id: i64) -> Result<(), AppError>;

    /// List all time-off entries, ordered by `startDate` descending.
    async fn list_time_off(&self) -> Result<Vec<TimeOffEntry>, AppError>;

    /// Insert a time-off entry under the next free id and return it.
    async fn create_time_off(&self, request: CreateTimeOffRequest)
        -> Result<TimeOffEntry, AppError>;

    /// Delete a time-off entry. A missing id is a no-op, not an error.
    async fn delete_time_off(&self, id: i64) -> Result<(), AppError>;

    /// Fetch the rotation payload, or `None` if it has never been written.
    async fn get_rotation(&self) -> Result<Option<Value>, AppError>;

    /// Replace the rotation payload wholesale, creating the singleton
    /// document if absent. Last writer wins.
    async fn save_rotation(&self, data: Value) -> Result<(), AppError>;
}

/// MongoDB-backed repository for all data operations.
#[derive(Clone)]
pub struct Repository {
    db: Database,
}

impl Repository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    fn members(&self) -> Collection<TeamMember> {
        self.db.collection("members")
    }

    fn time_off(&self) -> Collection<TimeOffEntry> {
        self.db.collection("timeoff")
    }

    fn rotations(&self) -> Collection<OnCallRotation> {
        self.db.collection("oncall")
    }

    /// Next member id: highest existing id plus one.
    async fn next_member_id(&self) -> Result<i64, AppError> {
        let options = FindOneOptions::builder().sort(doc! { "id": -1 }).build();
        let newest = self.members().find_one(doc! {}, options).await?;
        Ok(newest.map(|m| m.id + 1).unwrap_or(1))
    }

    /// Next time-off id: highest existing id plus one.
    async fn next_time_off_id(&self) -> Result<i64, AppError> {
        let options = FindOneOptions::builder().sort(doc! { "id": -1 }).build();
        let newest = self.time_off().find_one(doc! {}, options).await?;
        Ok(newest.map(|t| t.id + 1).unwrap_or(1))
    }
}

#[async_trait]
impl Store for Repository {
    // ==================== MEMBER OPERATIONS ====================

    async fn list_members(&self) -> Result<Vec<TeamMember>, AppError> {
        let options = FindOptions::builder().sort(doc! { "name": 1 }).build();
        let mut cursor = self.members().find(doc! {}, options).await?;

        let mut members = Vec::new();
        while let Some(member) = cursor.try_next().await? {
            members.push(member);
        }
        Ok(members)
    }

    async fn create_member(&self, name: &str) -> Result<TeamMember, AppError> {
        // Separate read and insert: racy under concurrent creates
        let id = self.next_member_id().await?;
        let member = TeamMember {
            id,
            name: name.to_string(),
        };

        self.members().insert_one(&member, None).await?;
        Ok(member)
    }

    async fn delete_member(&self, id: i64) -> Result<(), AppError> {
        self.members().delete_one(doc! { "id": id }, None).await?;

        // Cascade: drop every entry referencing the member
        self.time_off()
            .delete_many(doc! { "memberId": id }, None)
            .await?;
        Ok(())
    }

    // ==================== TIME-OFF OPERATIONS ====================

    async fn list_time_off(&self) -> Result<Vec<TimeOffEntry>, AppError> {
        let options = FindOptions::builder().sort(doc! { "startDate": -1 }).build();
        let mut cursor = self.time_off().find(doc! {}, options).await?;

        let mut entries = Vec::new();
        while let Some(entry) = cursor.try_next().await? {
            entries.push(entry);
        }
        Ok(entries)
    }

    async fn create_time_off(
        &self,
        request: CreateTimeOffRequest,
    ) -> Result<TimeOffEntry, AppError> {
        let id = self.next_time_off_id().await?;
        let entry = TimeOffEntry::from_request(id, request);

        self.time_off().insert_one(&entry, None).await?;
        Ok(entry)
    }

    async fn delete_time_off(&self, id: i64) -> Result<(), AppError> {
        self.time_off().delete_one(doc! { "id": id }, None).await?;
        Ok(())
    }

    // ==================== ROTATION OPERATIONS ====================

    async fn get_rotation(&self) -> Result<Option<Value>, AppError> {
        let rotation = self
            .rotations()
            .find_one(doc! { "schedule": SCHEDULE_NAME }, None)
            .await?;
        Ok(rotation.map(|r| r.rotation_data))
    }

    async fn save_rotation(&self, data: Value) -> Result<(), AppError> {
        let payload = to_bson(&data)?;
        let update = doc! { "$set": { "rotationData": payload } };
        let options = UpdateOptions::builder().upsert(true).build();

        self.rotations()
            .update_one(doc! { "schedule": SCHEDULE_NAME }, update, options)
            .await?;
        Ok(())
    }
}
