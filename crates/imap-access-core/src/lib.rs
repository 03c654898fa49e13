//! # imap-access-core
//!
//! Filename convention codec and processing-input dependency model for the
//! IMAP data archive.
//!
//! This crate is the metadata layer governing which archive files exist, are
//! valid, and are grouped together:
//!
//! - **Naming**: the mission filename convention, parsed into immutable
//!   components and reconstructed byte-for-byte
//! - **Validation**: per-kind file path validators that report every field
//!   violation in one failure and derive canonical storage paths
//! - **Processing Inputs**: homogeneity-checked file groups with effective
//!   time coverage, collected and serialized so dependency resolution and a
//!   processing worker agree on exactly which files a step consumes
//!
//! File content never passes through this crate: parsing, validation, and
//! grouping touch only strings and return fresh values or fail with a typed
//! [`Error`].
//!
//! ## Example
//!
//! ```rust
//! use imap_access_core::prelude::*;
//!
//! // Dependency resolution side: group discovered files and serialize.
//! let science = ScienceInput::new(["imap_mag_l1a_burst_20240310_20240311_v01-01.cdf"])?;
//! let mut collection = ProcessingInputCollection::new();
//! collection.add(science);
//! let wire = collection.serialize()?;
//!
//! // Processing side: reconstruct and query.
//! let mut received = ProcessingInputCollection::new();
//! received.deserialize(&wire)?;
//! assert_eq!(received.filter_by_kind(ProcessingInputKind::Science).len(), 1);
//! # Ok::<(), imap_access_core::Error>(())
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rust_2018_idioms)]
#![warn(clippy::pedantic)]

pub mod archive_paths;
pub mod error;
pub mod mission;
pub mod naming;
pub mod observability;
pub mod processing_input;

pub use error::{Error, Result};

/// Prelude module for convenient imports.
///
/// # Example
///
/// ```rust
/// use imap_access_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::archive_paths::{
        AncillaryFilePath, ScienceFilePath, SpiceFilePath, Violation, ViolationReport,
        SPICE_DESCRIPTOR, SPICE_SOURCE,
    };
    pub use crate::error::{Error, Result};
    pub use crate::mission::{ArchiveExtension, DataLevel, Instrument, Version, MISSION};
    pub use crate::naming::{
        AncillaryComponents, FileNameComponents, ANCILLARY_CONVENTION, FILENAME_CONVENTION,
    };
    pub use crate::observability::{init_logging, LogFormat};
    pub use crate::processing_input::{
        AncillaryInput, ProcessingInput, ProcessingInputCollection, ProcessingInputKind,
        ScienceInput, SpiceInput, WireInput,
    };
}
