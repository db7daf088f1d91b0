pub mod candidates;
pub mod render;
pub mod resolver;

pub use crate::domain::model::{Lookup, LookupOutcome, MoNumber, Observation, OutputMode};
pub use crate::domain::ports::ObservationSource;
