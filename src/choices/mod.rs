//! Choice enumerations for selectable fields.
//!
//! The pipeline is a single construction step:
//!
//! ```text
//! Input (string / names / pairs) → ChoiceSpec → Enumeration
//! ```
//!
//! An [`Enumeration`] is fully populated at construction and immutable
//! afterwards; every lookup is a pure read.

mod attr;
mod enumeration;
mod error;
mod spec;
mod value;

pub use enumeration::{ChoiceEntry, Enumeration, ValueMode};
pub use error::ChoiceError;
pub use spec::ChoiceSpec;
pub use value::ChoiceValue;
