//! Dataset adapters backing the `UserDataset` port.
//!
//! [`parse_users`] decodes the XML document; [`FileUserDataset`] reads it
//! from disk on every load.

mod file_dataset;
mod xml_records;

pub use file_dataset::FileUserDataset;
pub use xml_records::{DatasetParseError, parse_users};
