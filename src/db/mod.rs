//! Database module for MongoDB persistence.
//!
//! MongoDB is the source of truth for all application data.

#[cfg(test)]
mod memory;
mod repository;

#[cfg(test)]
pub use memory::*;
pub use repository::*;

use mongodb::{bson::doc, Client, Database};

use crate::errors::AppError;

/// Connect to MongoDB and return a handle to the application database.
///
/// Pings the server so that an unreachable database fails startup instead
/// of surfacing on the first request.
pub async fn init_database(uri: &str, db_name: &str) -> Result<Database, AppError> {
    tracing::info!("Connecting to MongoDB");

    let client = Client::with_uri_str(uri).await.map_err(|e| {
        tracing::error!("Failed to connect to MongoDB: {}", e);
        AppError::from(e)
    })?;

    client
        .database("admin")
        .run_command(doc! { "ping": 1 }, None)
        .await
        .map_err(|e| {
            tracing::error!("MongoDB ping failed: {}", e);
            AppError::from(e)
        })?;

    tracing::info!(database = %db_name, "Connected to MongoDB database");
    Ok(client.database(db_name))
}
