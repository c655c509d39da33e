//! `ewaste-core` — foundation building blocks for the e-waste shell.
//!
//! This crate contains **pure** primitives (no rendering, no IO).

pub mod error;
pub mod id;
pub mod machine;
pub mod value_object;

pub use error::DomainError;
pub use id::SubmissionId;
pub use machine::StateMachine;
pub use value_object::ValueObject;
