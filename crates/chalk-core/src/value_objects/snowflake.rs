//! Snowflake ID - 64-bit time-ordered unique identifier
//!
//! Layout:
//! - Bits 63-22: milliseconds since the platform epoch
//! - Bits 21-12: worker ID (0-1023)
//! - Bits 11-0:  per-millisecond sequence (0-4095)

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Time-ordered 64-bit identifier used for every persisted entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Snowflake(i64);

impl Snowflake {
    /// Platform epoch: 2025-01-01 00:00:00 UTC (milliseconds)
    pub const EPOCH: i64 = 1_735_689_600_000;

    /// Wrap a raw i64 value
    #[inline]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Unwrap to the raw i64 value
    #[inline]
    pub const fn into_inner(self) -> i64 {
        self.0
    }

    /// True for the zero (uninitialized) ID
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Milliseconds since the Unix epoch at which this ID was minted
    #[inline]
    pub fn timestamp(&self) -> i64 {
        (self.0 >> 22) + Self::EPOCH
    }

    /// Worker ID embedded in the ID (0-1023)
    #[inline]
    pub fn worker_id(&self) -> u16 {
        ((self.0 >> 12) & 0x3FF) as u16
    }

    /// Sequence number embedded in the ID (0-4095)
    #[inline]
    pub fn sequence(&self) -> u16 {
        (self.0 & 0xFFF) as u16
    }

    /// Creation instant as a `DateTime<Utc>`
    pub fn created_at(&self) -> chrono::DateTime<chrono::Utc> {
        use chrono::{TimeZone, Utc};
        Utc.timestamp_millis_opt(self.timestamp())
            .single()
            .unwrap_or_else(|| Utc.timestamp_millis_opt(0).unwrap())
    }

    /// Parse from the decimal string representation
    pub fn parse(s: &str) -> Result<Self, SnowflakeParseError> {
        s.parse::<i64>()
            .map(Snowflake)
            .map_err(|_| SnowflakeParseError::InvalidFormat)
    }
}

/// Error when parsing a Snowflake from a string
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SnowflakeParseError {
    #[error("invalid snowflake format")]
    InvalidFormat,
}

impl fmt::Display for Snowflake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for Snowflake {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<Snowflake> for i64 {
    fn from(id: Snowflake) -> Self {
        id.0
    }
}

impl std::str::FromStr for Snowflake {
    type Err = SnowflakeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Snowflake::parse(s)
    }
}

// JSON carries IDs as strings so JavaScript clients never lose precision
impl Serialize for Snowflake {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0.to_string())
    }
}

// Accept both string and integer forms on input
impl<'de> Deserialize<'de> for Snowflake {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct SnowflakeVisitor;

        impl Visitor<'_> for SnowflakeVisitor {
            type Value = Snowflake;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string or integer snowflake ID")
            }

            fn visit_i64<E>(self, value: i64) -> Result<Snowflake, E>
            where
                E: de::Error,
            {
                Ok(Snowflake(value))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Snowflake, E>
            where
                E: de::Error,
            {
                Ok(Snowflake(value as i64))
            }

            fn visit_str<E>(self, value: &str) -> Result<Snowflake, E>
            where
                E: de::Error,
            {
                value
                    .parse::<i64>()
                    .map(Snowflake)
                    .map_err(|_| de::Error::custom("invalid snowflake string"))
            }
        }

        deserializer.deserialize_any(SnowflakeVisitor)
    }
}

/// Lock-free Snowflake generator
///
/// The generator keeps `(last_timestamp, sequence)` packed in a single
/// atomic word and advances it with compare-and-swap, so concurrent
/// callers never hand out the same ID. Capacity is 4096 IDs per
/// millisecond per worker.
pub struct SnowflakeGenerator {
    worker_id: u16,
    // (timestamp_millis << 12) | sequence
    state: AtomicI64,
}

impl SnowflakeGenerator {
    const SEQUENCE_MASK: i64 = 0xFFF;

    /// Create a generator for the given worker ID
    ///
    /// # Panics
    /// Panics if `worker_id >= 1024`
    pub fn new(worker_id: u16) -> Self {
        assert!(worker_id < 1024, "worker ID must be < 1024");
        Self {
            worker_id,
            state: AtomicI64::new(0),
        }
    }

    /// Mint a new unique Snowflake
    pub fn generate(&self) -> Snowflake {
        loop {
            let state = self.state.load(Ordering::Acquire);
            let last_ts = state >> 12;
            let seq = state & Self::SEQUENCE_MASK;

            let now = Self::now_millis();
            let (ts, next_seq) = if now > last_ts {
                (now, 0)
            } else if seq < Self::SEQUENCE_MASK {
                // Same millisecond (or the clock stepped back): keep
                // counting against the last observed timestamp.
                (last_ts, seq + 1)
            } else {
                // Sequence exhausted, wait out the millisecond
                while Self::now_millis() <= last_ts {
                    std::hint::spin_loop();
                }
                continue;
            };

            let next_state = (ts << 12) | next_seq;
            if self
                .state
                .compare_exchange(state, next_state, Ordering::AcqRel, Ordering::Relaxed)
                .is_ok()
            {
                let id = ((ts - Snowflake::EPOCH) << 22)
                    | (i64::from(self.worker_id) << 12)
                    | next_seq;
                return Snowflake::new(id);
            }
            // Lost the race, retry with fresh state
        }
    }

    #[inline]
    fn now_millis() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as i64)
            .unwrap_or(0)
    }

    /// Worker ID this generator stamps into every ID
    pub fn worker_id(&self) -> u16 {
        self.worker_id
    }
}

impl Default for SnowflakeGenerator {
    fn default() -> Self {
        Self::new(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_roundtrip_inner_value() {
        let sf = Snowflake::new(987654321);
        assert_eq!(sf.into_inner(), 987654321);
    }

    #[test]
    fn test_zero_detection() {
        assert!(Snowflake::default().is_zero());
        assert!(!Snowflake::new(7).is_zero());
    }

    #[test]
    fn test_parse_and_display() {
        let sf = Snowflake::parse("987654321").unwrap();
        assert_eq!(sf.to_string(), "987654321");
        assert!(Snowflake::parse("not-a-number").is_err());
    }

    #[test]
    fn test_json_serializes_as_string() {
        let sf = Snowflake::new(123456789012345678);
        assert_eq!(
            serde_json::to_string(&sf).unwrap(),
            "\"123456789012345678\""
        );
    }

    #[test]
    fn test_json_deserializes_string_and_number() {
        let from_str: Snowflake = serde_json::from_str("\"123456789012345678\"").unwrap();
        assert_eq!(from_str.into_inner(), 123456789012345678);

        let from_num: Snowflake = serde_json::from_str("4242").unwrap();
        assert_eq!(from_num.into_inner(), 4242);
    }

    #[test]
    fn test_ids_are_unique_and_monotonic() {
        let gen = SnowflakeGenerator::new(3);
        let mut seen = HashSet::new();
        let mut last = Snowflake::new(0);

        for _ in 0..2000 {
            let id = gen.generate();
            assert!(id > last, "IDs must be strictly increasing");
            assert!(seen.insert(id), "duplicate ID");
            last = id;
        }
    }

    #[test]
    fn test_worker_id_embedded() {
        let gen = SnowflakeGenerator::new(42);
        assert_eq!(gen.generate().worker_id(), 42);
    }

    #[test]
    fn test_timestamp_within_generation_window() {
        let before = SnowflakeGenerator::now_millis();
        let id = SnowflakeGenerator::new(1).generate();
        let after = SnowflakeGenerator::now_millis();

        assert!(id.timestamp() >= before && id.timestamp() <= after);
    }

    #[test]
    fn test_concurrent_generation_is_collision_free() {
        let gen = Arc::new(SnowflakeGenerator::new(1));
        let ids = Arc::new(std::sync::Mutex::new(HashSet::new()));
        let mut handles = vec![];

        for _ in 0..4 {
            let gen = Arc::clone(&gen);
            let ids = Arc::clone(&ids);
            handles.push(thread::spawn(move || {
                let batch: Vec<_> = (0..1000).map(|_| gen.generate()).collect();
                ids.lock().unwrap().extend(batch);
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(ids.lock().unwrap().len(), 4000);
    }

    #[test]
    #[should_panic(expected = "worker ID must be < 1024")]
    fn test_worker_id_out_of_range() {
        SnowflakeGenerator::new(1024);
    }
}
