pub mod memorize;
pub mod verse;

pub use memorize::{HideOutcome, MemorizeState, WordCell};
pub use verse::Verse;
