use async_trait::async_trait;
use hickory_proto::op::ResponseCode;
use hickory_proto::rr::Record;
use zonestore_dns_domain::DomainError;

/// Output side of one inbound query: either a reply is written, or the query
/// is handed to the next handler in the chain.
#[async_trait]
pub trait QueryResponder: Send {
    /// Writes a reply echoing the original question and carrying `answers`.
    async fn write_reply(&mut self, answers: &[Record]) -> Result<(), DomainError>;

    /// Invokes the successor handler and returns its result.
    async fn pass_through(&mut self) -> Result<ResponseCode, DomainError>;
}
