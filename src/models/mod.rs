pub mod speaker;
pub mod utterance;

pub use speaker::*;
pub use utterance::*;
