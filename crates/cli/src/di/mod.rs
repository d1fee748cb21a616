mod dns;
mod repositories;

pub use dns::DnsServices;
pub use repositories::Repositories;
