//! Processing inputs: homogeneity-checked file groups and their wire form.
//!
//! Dependency resolution groups archive files into [`ProcessingInput`]
//! entries — one per (source, data type, descriptor) — collects them in a
//! [`ProcessingInputCollection`], and serializes the collection to JSON. A
//! processing worker, usually a different process on a different host,
//! deserializes it and queries for the files it consumes.
//!
//! # Wire Format
//!
//! ```text
//! [
//!   {"type": "science",   "files": ["imap_mag_l1a_burst_20240310_20240311_v01-01.cdf", ...]},
//!   {"type": "ancillary", "files": ["imap_mag_offsets_20240101_v01-00.cdf", ...]},
//!   {"type": "spice",     "files": ["imap_sc_attitude_predict_20240101.ah.bc", ...]}
//! ]
//! ```
//!
//! The wire form carries only the kind tag and the ordered filename list.
//! Derived fields (source, data type, descriptor, time range) are never
//! serialized: reconstruction re-runs the same validation path as fresh
//! construction, so a hand-edited payload cannot forge them.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::archive_paths::{
    AncillaryFilePath, ScienceFilePath, SpiceFilePath, SPICE_DESCRIPTOR, SPICE_SOURCE,
};
use crate::error::{Error, Result};
use crate::mission::{DataLevel, Instrument};

/// The closed set of processing input kinds.
///
/// The kind tag dispatches variant construction both in memory and on the
/// wire; every match over it is exhaustive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProcessingInputKind {
    /// Science data products.
    Science,
    /// Calibration and other ancillary products.
    Ancillary,
    /// Orbit/attitude/pointing kernels.
    Spice,
}

impl ProcessingInputKind {
    /// Returns the wire tag for this kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Science => "science",
            Self::Ancillary => "ancillary",
            Self::Spice => "spice",
        }
    }

    /// Returns all kinds.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Science, Self::Ancillary, Self::Spice]
    }
}

impl fmt::Display for ProcessingInputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ProcessingInputKind {
    type Err = Error;

    fn from_str(tag: &str) -> Result<Self> {
        match tag {
            "science" => Ok(Self::Science),
            "ancillary" => Ok(Self::Ancillary),
            "spice" => Ok(Self::Spice),
            other => Err(Error::UnknownInputKind {
                kind: other.to_string(),
            }),
        }
    }
}

/// The wire form of one processing input.
///
/// A value type distinct from the in-memory entity: the minimum data needed
/// to reconstruct an equivalent input, and nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WireInput {
    /// The kind tag (`science`, `ancillary`, or `spice`).
    #[serde(rename = "type")]
    pub kind: String,
    /// The ordered filename list.
    pub files: Vec<String>,
}

/// Formats the derived-field sets for a homogeneity failure message.
fn mixed_message(
    sources: &BTreeSet<&str>,
    data_types: &BTreeSet<&str>,
    descriptors: &BTreeSet<&str>,
) -> String {
    let join = |set: &BTreeSet<&str>| set.iter().copied().collect::<Vec<_>>().join(", ");
    format!(
        "all files must share source, data type, and descriptor \
         (sources: [{}], data types: [{}], descriptors: [{}])",
        join(sources),
        join(data_types),
        join(descriptors)
    )
}

/// A group of science files sharing instrument, data level, and descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScienceInput {
    files: Vec<ScienceFilePath>,
    instrument: Instrument,
    data_level: DataLevel,
    descriptor: String,
}

impl ScienceInput {
    /// Builds a science input from one or more filenames (not paths).
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyInput`] for zero filenames, a validation error
    /// for any filename the science validator rejects, or
    /// [`Error::MixedInputs`] when the files do not all share instrument,
    /// data level, and descriptor.
    pub fn new<I, S>(filenames: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut files = Vec::new();
        for name in filenames {
            files.push(ScienceFilePath::new(name.as_ref())?);
        }
        if files.is_empty() {
            return Err(Error::EmptyInput);
        }

        let sources: BTreeSet<&str> = files.iter().map(|f| f.instrument().as_str()).collect();
        let data_types: BTreeSet<&str> = files.iter().map(|f| f.data_level().as_str()).collect();
        let descriptors: BTreeSet<&str> = files.iter().map(ScienceFilePath::descriptor).collect();
        if sources.len() != 1 || data_types.len() != 1 || descriptors.len() != 1 {
            return Err(Error::MixedInputs {
                message: mixed_message(&sources, &data_types, &descriptors),
            });
        }

        let instrument = files[0].instrument();
        let data_level = files[0].data_level();
        let descriptor = files[0].descriptor().to_string();
        Ok(Self {
            files,
            instrument,
            data_level,
            descriptor,
        })
    }

    /// Returns the validated member files, in input order.
    #[must_use]
    pub fn files(&self) -> &[ScienceFilePath] {
        &self.files
    }

    /// Returns the shared instrument.
    #[must_use]
    pub const fn instrument(&self) -> Instrument {
        self.instrument
    }

    /// Returns the shared data level.
    #[must_use]
    pub const fn data_level(&self) -> DataLevel {
        self.data_level
    }

    /// Returns the shared descriptor.
    #[must_use]
    pub fn descriptor(&self) -> &str {
        &self.descriptor
    }

    /// Returns the (earliest, latest) start date among member files.
    ///
    /// Member files are assumed to each cover exactly one nominal period, so
    /// the range is taken over start dates; end dates are not consulted.
    /// Downstream consumers rely on this shape — widening it to end dates
    /// would silently change their effective coverage.
    #[must_use]
    pub fn time_range(&self) -> (NaiveDate, NaiveDate) {
        let mut earliest = self.files[0].start_date();
        let mut latest = earliest;
        for file in &self.files[1..] {
            earliest = earliest.min(file.start_date());
            latest = latest.max(file.start_date());
        }
        (earliest, latest)
    }
}

/// A group of ancillary files sharing instrument and descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AncillaryInput {
    files: Vec<AncillaryFilePath>,
    instrument: Instrument,
    descriptor: String,
}

impl AncillaryInput {
    /// Builds an ancillary input from one or more filenames (not paths).
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyInput`] for zero filenames, a validation error
    /// for any filename the ancillary validator rejects, or
    /// [`Error::MixedInputs`] when the files do not all share instrument and
    /// descriptor.
    pub fn new<I, S>(filenames: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut files = Vec::new();
        for name in filenames {
            files.push(AncillaryFilePath::new(name.as_ref())?);
        }
        if files.is_empty() {
            return Err(Error::EmptyInput);
        }

        let sources: BTreeSet<&str> = files.iter().map(|f| f.instrument().as_str()).collect();
        let data_types: BTreeSet<&str> =
            std::iter::once(ProcessingInputKind::Ancillary.as_str()).collect();
        let descriptors: BTreeSet<&str> =
            files.iter().map(AncillaryFilePath::descriptor).collect();
        if sources.len() != 1 || descriptors.len() != 1 {
            return Err(Error::MixedInputs {
                message: mixed_message(&sources, &data_types, &descriptors),
            });
        }

        let instrument = files[0].instrument();
        let descriptor = files[0].descriptor().to_string();
        Ok(Self {
            files,
            instrument,
            descriptor,
        })
    }

    /// Returns the validated member files, in input order.
    #[must_use]
    pub fn files(&self) -> &[AncillaryFilePath] {
        &self.files
    }

    /// Returns the shared instrument.
    #[must_use]
    pub const fn instrument(&self) -> Instrument {
        self.instrument
    }

    /// Returns the shared descriptor.
    #[must_use]
    pub fn descriptor(&self) -> &str {
        &self.descriptor
    }

    /// Returns the (earliest start, latest effective end) across members.
    ///
    /// A member without a declared end date covers only its start date.
    #[must_use]
    pub fn time_range(&self) -> (NaiveDate, NaiveDate) {
        let mut earliest = self.files[0].start_date();
        let mut latest = self.files[0].effective_end_date();
        for file in &self.files[1..] {
            earliest = earliest.min(file.start_date());
            latest = latest.max(file.effective_end_date());
        }
        (earliest, latest)
    }

    /// Returns the member files required to cover `day`.
    ///
    /// Takes every member whose validity interval covers the day, narrowed
    /// to those carrying the highest version among that covering set. Empty
    /// when nothing covers the day.
    #[must_use]
    pub fn files_for_day(&self, day: NaiveDate) -> Vec<&str> {
        let covering: Vec<&AncillaryFilePath> =
            self.files.iter().filter(|f| f.covers(day)).collect();
        let Some(best) = covering.iter().map(|f| f.version()).max() else {
            return Vec::new();
        };
        covering
            .iter()
            .filter(|f| f.version() == best)
            .map(|f| f.file_name())
            .collect()
    }
}

/// A group of SPICE kernels.
///
/// Source, data type, and descriptor are fixed today (`sc_attitude`,
/// `spice`, `predict`), so there is no homogeneity to check beyond each
/// kernel's own validity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpiceInput {
    files: Vec<SpiceFilePath>,
}

impl SpiceInput {
    /// Builds a SPICE input from one or more kernel filenames (not paths).
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyInput`] for zero filenames, or a validation
    /// error for any filename the kernel validator rejects.
    pub fn new<I, S>(filenames: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut files = Vec::new();
        for name in filenames {
            files.push(SpiceFilePath::new(name.as_ref())?);
        }
        if files.is_empty() {
            return Err(Error::EmptyInput);
        }
        Ok(Self { files })
    }

    /// Returns the validated member kernels, in input order.
    #[must_use]
    pub fn files(&self) -> &[SpiceFilePath] {
        &self.files
    }
}

/// One dependency unit consumed by a processing step.
///
/// A closed tagged union over the kind set: the kinds are few, fixed, and
/// exhaustively handled in serialization, time-range computation, and
/// validation, so new kinds are added here and the compiler finds every
/// dispatch site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessingInput {
    /// Science data products.
    Science(ScienceInput),
    /// Calibration and other ancillary products.
    Ancillary(AncillaryInput),
    /// Orbit/attitude/pointing kernels.
    Spice(SpiceInput),
}

impl ProcessingInput {
    /// Returns the kind tag.
    #[must_use]
    pub const fn kind(&self) -> ProcessingInputKind {
        match self {
            Self::Science(_) => ProcessingInputKind::Science,
            Self::Ancillary(_) => ProcessingInputKind::Ancillary,
            Self::Spice(_) => ProcessingInputKind::Spice,
        }
    }

    /// Returns the source: the instrument name, or the fixed SPICE source.
    #[must_use]
    pub fn source(&self) -> &str {
        match self {
            Self::Science(input) => input.instrument().as_str(),
            Self::Ancillary(input) => input.instrument().as_str(),
            Self::Spice(_) => SPICE_SOURCE,
        }
    }

    /// Returns the data type: the data level for science inputs, the kind
    /// name otherwise.
    #[must_use]
    pub fn data_type(&self) -> &str {
        match self {
            Self::Science(input) => input.data_level().as_str(),
            Self::Ancillary(_) => ProcessingInputKind::Ancillary.as_str(),
            Self::Spice(_) => ProcessingInputKind::Spice.as_str(),
        }
    }

    /// Returns the shared descriptor.
    #[must_use]
    pub fn descriptor(&self) -> &str {
        match self {
            Self::Science(input) => input.descriptor(),
            Self::Ancillary(input) => input.descriptor(),
            Self::Spice(_) => SPICE_DESCRIPTOR,
        }
    }

    /// Returns the member filenames, in input order.
    #[must_use]
    pub fn filenames(&self) -> Vec<&str> {
        match self {
            Self::Science(input) => input.files.iter().map(ScienceFilePath::file_name).collect(),
            Self::Ancillary(input) => {
                input.files.iter().map(AncillaryFilePath::file_name).collect()
            }
            Self::Spice(input) => input.files.iter().map(SpiceFilePath::file_name).collect(),
        }
    }

    /// Returns the time range covered by the input, where defined.
    ///
    /// SPICE coverage semantics are not yet defined, so SPICE inputs report
    /// no range rather than an invented one.
    #[must_use]
    pub fn time_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        match self {
            Self::Science(input) => Some(input.time_range()),
            Self::Ancillary(input) => Some(input.time_range()),
            Self::Spice(_) => None,
        }
    }

    /// Returns the wire form: the kind tag and the ordered filename list,
    /// nothing derived.
    #[must_use]
    pub fn to_wire(&self) -> WireInput {
        WireInput {
            kind: self.kind().as_str().to_string(),
            files: self.filenames().iter().map(ToString::to_string).collect(),
        }
    }

    /// Reconstructs an input from its wire form, re-running the same
    /// validation path as fresh construction.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownInputKind`] for an unrecognized kind tag, and
    /// otherwise whatever the variant constructor returns for the filename
    /// list.
    pub fn from_wire(wire: &WireInput) -> Result<Self> {
        match wire.kind.parse::<ProcessingInputKind>()? {
            ProcessingInputKind::Science => ScienceInput::new(&wire.files).map(Self::Science),
            ProcessingInputKind::Ancillary => {
                AncillaryInput::new(&wire.files).map(Self::Ancillary)
            }
            ProcessingInputKind::Spice => SpiceInput::new(&wire.files).map(Self::Spice),
        }
    }
}

impl From<ScienceInput> for ProcessingInput {
    fn from(input: ScienceInput) -> Self {
        Self::Science(input)
    }
}

impl From<AncillaryInput> for ProcessingInput {
    fn from(input: AncillaryInput) -> Self {
        Self::Ancillary(input)
    }
}

impl From<SpiceInput> for ProcessingInput {
    fn from(input: SpiceInput) -> Self {
        Self::Spice(input)
    }
}

/// An ordered collection of processing inputs — the hand-off artifact between
/// dependency resolution and a processing worker.
///
/// Entries keep insertion order and are never deduplicated. There are no
/// cross-entry invariants beyond each entry's own validity.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProcessingInputCollection {
    inputs: Vec<ProcessingInput>,
}

impl ProcessingInputCollection {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one input.
    pub fn add(&mut self, input: impl Into<ProcessingInput>) {
        self.inputs.push(input.into());
    }

    /// Appends every input from `inputs`, preserving their order.
    pub fn extend(&mut self, inputs: impl IntoIterator<Item = ProcessingInput>) {
        self.inputs.extend(inputs);
    }

    /// Returns an iterator over the entries in collection order.
    pub fn iter(&self) -> impl Iterator<Item = &ProcessingInput> {
        self.inputs.iter()
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    /// Returns true when the collection holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }

    /// Serializes the collection to the JSON wire string, in collection
    /// order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialization`] if JSON encoding fails.
    pub fn serialize(&self) -> Result<String> {
        let wire: Vec<WireInput> = self.inputs.iter().map(ProcessingInput::to_wire).collect();
        serde_json::to_string(&wire).map_err(|e| Error::serialization(&e))
    }

    /// Replaces the collection's contents with the entries decoded from
    /// `wire`.
    ///
    /// Every entry is reconstructed through full construction validation
    /// before anything is replaced: on failure the collection is left
    /// untouched.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialization`] for malformed JSON,
    /// [`Error::UnknownInputKind`] for an unrecognized kind tag, and any
    /// construction error for filenames that fail validation.
    pub fn deserialize(&mut self, wire: &str) -> Result<()> {
        let entries: Vec<WireInput> =
            serde_json::from_str(wire).map_err(|e| Error::serialization(&e))?;
        let mut inputs = Vec::with_capacity(entries.len());
        for entry in &entries {
            inputs.push(ProcessingInput::from_wire(entry)?);
        }
        tracing::debug!(
            entries = inputs.len(),
            "reconstructed processing inputs from wire payload"
        );
        self.inputs = inputs;
        Ok(())
    }

    /// Returns the entries of the given kind, preserving collection order.
    #[must_use]
    pub fn filter_by_kind(&self, kind: ProcessingInputKind) -> Vec<&ProcessingInput> {
        self.inputs.iter().filter(|i| i.kind() == kind).collect()
    }
}

impl<'a> IntoIterator for &'a ProcessingInputCollection {
    type Item = &'a ProcessingInput;
    type IntoIter = std::slice::Iter<'a, ProcessingInput>;

    fn into_iter(self) -> Self::IntoIter {
        self.inputs.iter()
    }
}
