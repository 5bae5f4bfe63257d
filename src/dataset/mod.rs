//! Dataset subsystem for aerolookup
//!
//! Record stores are built once per dataset at process start and never
//! mutated. A reload builds a fresh store.
//!
//! # Invariants
//!
//! - Store order equals load order
//! - No code is longer than the dataset's maximum code length
//! - Records without a usable code are kept but never indexed

mod errors;
mod kind;
mod record;
mod store;
pub mod loader;

pub use errors::{DatasetError, DatasetResult};
pub use kind::{DatasetKind, FieldDef, FieldType, FilterDef, FilterKind};
pub use record::Record;
pub use store::RecordStore;
