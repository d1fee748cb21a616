use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The query name does not fall under any registered zone.
    #[error("Zone resolution failed: {0}")]
    ZoneResolution(String),

    /// The record store is unreachable or the query failed.
    #[error("Record fetch failed: {0}")]
    RecordFetch(String),

    /// A stored record could not be assembled into a resource record.
    /// The record is skipped and the batch continues.
    #[error("Malformed record: {0}")]
    RecordFormat(String),

    #[error("Schema provisioning failed: {0}")]
    Provision(String),

    #[error("Failed to send DNS reply: {0}")]
    Reply(String),
}
