mod answer_set;
mod handle_dns_query;

pub use handle_dns_query::{AnswerSource, HandleDnsQueryUseCase, QueryOutcome};
