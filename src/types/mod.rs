pub mod filter_state;
pub mod record;

pub use filter_state::{Facet, FilterState};
pub use record::{DeriveConfig, ProgramRecord, RawProgram};
