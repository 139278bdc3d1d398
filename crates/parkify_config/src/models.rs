// --- File: crates/parkify_config/src/models.rs ---

use serde::{Deserialize, Serialize};

pub const DEFAULT_TOTAL_SLOTS: usize = 10;
pub const DEFAULT_RATE_PER_HOUR: i64 = 10;
pub const DEFAULT_CURRENCY: &str = "Rupees";
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3001";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

// --- General Server Config ---
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3001,
        }
    }
}

// --- Remote booking API ---
// Where the check-in client finds the `bookedSlots` collection.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ApiConfig {
    /// Full URL of the `bookedSlots` collection, tolerant of a trailing slash.
    pub fn booked_slots_url(&self) -> String {
        format!("{}/bookedSlots", self.base_url.trim_end_matches('/'))
    }
}

// --- Parking lot ---
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ParkingConfig {
    /// Number of fixed slots in the grid.
    #[serde(default = "default_total_slots")]
    pub total_slots: usize,
    /// Price of one started hour, in whole currency units.
    #[serde(default = "default_rate_per_hour")]
    pub rate_per_hour: i64,
    #[serde(default = "default_currency")]
    pub currency: String,
}

impl Default for ParkingConfig {
    fn default() -> Self {
        Self {
            total_slots: DEFAULT_TOTAL_SLOTS,
            rate_per_hour: DEFAULT_RATE_PER_HOUR,
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}

// --- Backend persistence ---
// When present, the booked-slots backend mirrors its collection into this JSON file.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct StorageConfig {
    pub db_path: String,
}

// --- Unified App Configuration ---
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub parking: ParkingConfig,
    #[serde(default)]
    pub storage: Option<StorageConfig>,
}

fn default_total_slots() -> usize {
    DEFAULT_TOTAL_SLOTS
}

fn default_rate_per_hour() -> i64 {
    DEFAULT_RATE_PER_HOUR
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}
