pub mod dns;

pub use dns::{AnswerSource, HandleDnsQueryUseCase, QueryOutcome};
