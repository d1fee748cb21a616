mod record_assembler;
mod store_health;

pub use record_assembler::RecordAssembler;
pub use store_health::{StoreHealth, StoreStatus};
