//! Storage behind the `bookedSlots` collection.
//!
//! Bookings are kept in insertion order behind a `RwLock`. With a `db_path`
//! the collection is also mirrored to a JSON file shaped like
//! `{"bookedSlots": [...]}`, read once at start-up and rewritten after every
//! mutation while the write lock is held. A mutation reaches memory only once
//! the file write has succeeded.

use parkify_common::{conflict, not_found, ParkifyError};
use parkify_config::StorageConfig;
use parkify_slots::Booking;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;
use tracing::{debug, info};

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DbFile {
    #[serde(default)]
    booked_slots: Vec<Booking>,
}

#[derive(Debug, Default)]
pub struct BookingRepository {
    bookings: RwLock<Vec<Booking>>,
    db_path: Option<PathBuf>,
}

impl BookingRepository {
    /// A repository that forgets everything on shutdown.
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Opens (or starts) a file-backed repository. A missing file is an empty collection.
    pub async fn open(db_path: impl AsRef<Path>) -> Result<Self, ParkifyError> {
        let db_path = db_path.as_ref().to_path_buf();
        let bookings = match tokio::fs::read_to_string(&db_path).await {
            Ok(contents) if contents.trim().is_empty() => Vec::new(),
            Ok(contents) => serde_json::from_str::<DbFile>(&contents)?.booked_slots,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!("No database at {}, starting empty", db_path.display());
                Vec::new()
            }
            Err(e) => return Err(e.into()),
        };
        info!(
            "Loaded {} booking(s) from {}",
            bookings.len(),
            db_path.display()
        );

        Ok(Self {
            bookings: RwLock::new(bookings),
            db_path: Some(db_path),
        })
    }

    /// File-backed when the config has a `[storage]` section, in-memory otherwise.
    pub async fn from_config(storage: Option<&StorageConfig>) -> Result<Self, ParkifyError> {
        match storage {
            Some(storage) => Self::open(&storage.db_path).await,
            None => Ok(Self::in_memory()),
        }
    }

    pub async fn list(&self) -> Vec<Booking> {
        self.bookings.read().await.clone()
    }

    pub async fn get(&self, id: &str) -> Result<Booking, ParkifyError> {
        self.bookings
            .read()
            .await
            .iter()
            .find(|b| b.id == id)
            .cloned()
            .ok_or_else(|| not_found(format!("booking {}", id)))
    }

    /// Appends a booking; an empty id is replaced by a generated one.
    pub async fn insert(&self, mut booking: Booking) -> Result<Booking, ParkifyError> {
        if booking.id.trim().is_empty() {
            booking.id = uuid::Uuid::new_v4().simple().to_string();
        }

        let mut bookings = self.bookings.write().await;
        if bookings.iter().any(|b| b.id == booking.id) {
            return Err(conflict(format!("booking {} already exists", booking.id)));
        }

        let mut next = bookings.clone();
        next.push(booking.clone());
        self.persist(&next).await?;
        *bookings = next;
        Ok(booking)
    }

    pub async fn remove(&self, id: &str) -> Result<Booking, ParkifyError> {
        let mut bookings = self.bookings.write().await;
        let position = bookings
            .iter()
            .position(|b| b.id == id)
            .ok_or_else(|| not_found(format!("booking {}", id)))?;

        let mut next = bookings.clone();
        let removed = next.remove(position);
        self.persist(&next).await?;
        *bookings = next;
        Ok(removed)
    }

    async fn persist(&self, bookings: &[Booking]) -> Result<(), ParkifyError> {
        let Some(path) = &self.db_path else {
            return Ok(());
        };
        let file = DbFile {
            booked_slots: bookings.to_vec(),
        };
        let contents = serde_json::to_string_pretty(&file)?;
        tokio::fs::write(path, contents).await?;
        debug!("Wrote {} booking(s) to {}", bookings.len(), path.display());
        Ok(())
    }
}
