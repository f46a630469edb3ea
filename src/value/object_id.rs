//! 12-byte object identifiers
//!
//! Layout:
//! - 4 bytes: seconds since epoch, big-endian
//! - 5 bytes: random value, fixed per process
//! - 3 bytes: counter, big-endian, random start
//!
//! Ordering is lexicographic over the unsigned bytes, which makes ids
//! generated later in time sort after earlier ones.

use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::OnceLock;

use chrono::{DateTime, TimeZone, Utc};
use rand::Rng;

use super::errors::{ConversionError, ConversionResult};

const COUNTER_MASK: u32 = 0x00FF_FFFF;

static PROCESS_UNIQUE: OnceLock<[u8; 5]> = OnceLock::new();
static COUNTER: OnceLock<AtomicU32> = OnceLock::new();

/// Fixed-width globally unique identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObjectId([u8; 12]);

impl ObjectId {
    /// Generates a new id from the current time
    pub fn new() -> Self {
        let seconds = seconds_field(Utc::now().timestamp());
        let process = PROCESS_UNIQUE.get_or_init(|| rand::thread_rng().gen());
        let counter = COUNTER
            .get_or_init(|| AtomicU32::new(rand::thread_rng().gen_range(0..=COUNTER_MASK)))
            .fetch_add(1, Ordering::Relaxed)
            & COUNTER_MASK;

        let mut bytes = [0u8; 12];
        bytes[0..4].copy_from_slice(&seconds.to_be_bytes());
        bytes[4..9].copy_from_slice(process);
        bytes[9..12].copy_from_slice(&counter.to_be_bytes()[1..4]);
        Self(bytes)
    }

    /// Wraps raw bytes
    pub const fn from_bytes(bytes: [u8; 12]) -> Self {
        Self(bytes)
    }

    /// Parses a 24 character hex string
    pub fn parse_str(s: &str) -> ConversionResult<Self> {
        let decoded = hex::decode(s)
            .map_err(|e| ConversionError::InvalidObjectId(format!("{}: {}", s, e)))?;
        let bytes: [u8; 12] = decoded
            .try_into()
            .map_err(|_| ConversionError::InvalidObjectId(format!("{}: expected 12 bytes", s)))?;
        Ok(Self(bytes))
    }

    /// Returns the raw bytes
    pub fn bytes(&self) -> [u8; 12] {
        self.0
    }

    /// Lowercase hex representation
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Creation time embedded in the id (second resolution)
    pub fn timestamp(&self) -> DateTime<Utc> {
        let seconds = u32::from_be_bytes([self.0[0], self.0[1], self.0[2], self.0[3]]);
        Utc.timestamp_opt(i64::from(seconds), 0)
            .single()
            .unwrap_or_default()
    }
}

impl Default for ObjectId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/// Unix seconds as stored in the 4-byte time field.
///
/// The field wraps in 2106 (seconds modulo 2^32); clocks before 1970
/// clamp to zero.
fn seconds_field(unix_seconds: i64) -> u32 {
    (unix_seconds.max(0) & 0xFFFF_FFFF) as u32
}
