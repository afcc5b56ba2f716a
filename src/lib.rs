//! Labeled-value enumerations for selectable form fields.
//!
//! An [`Enumeration`] turns a compact choice specification into an ordered,
//! immutable set of (value, label) pairs with symbolic access. To build an
//! integer enumeration starting at 1, a whitespace-separated string of names
//! is enough:
//!
//! ```
//! use choiceset::Enumeration;
//!
//! let colors = Enumeration::integers("red green blue yellow brown");
//! assert_eq!(*colors.attribute("RED").unwrap(), 1);
//! assert_eq!(*colors.attribute("GREEN").unwrap(), 2);
//! ```
//!
//! Entries are also reachable by declaration-order index, which is how a
//! form layer enumerates the selectable options:
//!
//! ```
//! # use choiceset::Enumeration;
//! # let colors = Enumeration::integers("red green blue yellow brown");
//! assert_eq!(colors[3].value, 4);
//! assert_eq!(colors[3].label, "yellow");
//! ```
//!
//! Explicit (value, label) pairs are used verbatim, with values of either
//! type:
//!
//! ```
//! use choiceset::Enumeration;
//!
//! let cards = Enumeration::integers(vec![
//!     ("AMEX", "American Express"),
//!     ("VISA", "Visa"),
//! ]);
//! assert_eq!(*cards.attribute("AMERICAN_EXPRESS").unwrap(), "AMEX");
//! assert_eq!(cards.label_for("VISA"), Some("Visa"));
//! ```
//!
//! For string enumerations where each name is its own value, use
//! [`Enumeration::strings`]:
//!
//! ```
//! use choiceset::Enumeration;
//!
//! let cards = Enumeration::strings("AMEX VISA DISCOVER");
//! assert_eq!(*cards.attribute("DISCOVER").unwrap(), "DISCOVER");
//! ```

pub mod choices;

pub use choices::{ChoiceEntry, ChoiceError, ChoiceSpec, ChoiceValue, Enumeration, ValueMode};
