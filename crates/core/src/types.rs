/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Server-assigned timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Event dates are stored as wall-clock timestamps without a zone.
pub type EventTimestamp = chrono::NaiveDateTime;
