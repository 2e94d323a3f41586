//! Response handling: classification of success bodies and normalization of
//! every failure into a [`ResponseOutcome`](crate::ResponseOutcome).

pub mod classifier;
pub mod normalizer;

pub use classifier::{classify, is_message_response};
pub use normalizer::{fold, normalize};
