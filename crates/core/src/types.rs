/// Item primary keys are UUIDs assigned by the store at insert time.
pub type ItemId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
