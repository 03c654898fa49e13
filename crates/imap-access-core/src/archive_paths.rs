//! Validated archive file paths and canonical storage-path derivation.
//!
//! This module is the single source of truth for where a named file lives in
//! the archive. The transfer client places and locates archive objects using
//! these paths, so the derivation must stay byte-identical for byte-identical
//! filenames.
//!
//! # Storage Layout
//!
//! ```text
//! imap/
//! ├── {instrument}/{data_level}/{YYYY}/{MM}/{filename}   # science products
//! ├── ancillary/{instrument}/{filename}                  # calibration products
//! └── spice/{filename}                                   # orbit/attitude kernels
//! ```
//!
//! Each validator parses its filename via [`crate::naming`], then runs a
//! field-legality pass that accumulates **every** violation found into one
//! [`ViolationReport`] before failing — callers see all problems in one
//! report, not one-at-a-time feedback. A validator that fails construction
//! never yields a partially-valid value.

use std::fmt;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::error::{Error, Result};
use crate::mission::{ArchiveExtension, DataLevel, Instrument, Version, MISSION};
use crate::naming::{final_segment, AncillaryComponents, FileNameComponents};

/// The fixed source tag under which SPICE products are produced today.
pub const SPICE_SOURCE: &str = "sc_attitude";

/// The only SPICE descriptor produced today.
pub const SPICE_DESCRIPTOR: &str = "predict";

/// Kernel extensions recognized by the minimal SPICE naming scheme.
pub const KERNEL_EXTENSIONS: &[&str] = &["bsp", "bc", "ck", "tls", "tsc", "tpc", "tf", "ti"];

/// Parses a `YYYYMMDD` field as a real calendar date.
///
/// Digit-shaped is not enough: day 32 must fail here even though it matches
/// the filename grammar.
fn parse_archive_date(field: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(field, "%Y%m%d").ok()
}

/// A single field-legality violation found while validating a filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// The mission field is not the mission literal.
    Mission {
        /// The mission value found in the filename.
        found: String,
    },
    /// The instrument field names no mission instrument.
    UnknownInstrument {
        /// The instrument value found in the filename.
        found: String,
    },
    /// The data level field names no pipeline level.
    UnknownDataLevel {
        /// The data level value found in the filename.
        found: String,
    },
    /// The start date is not a real `YYYYMMDD` calendar date.
    InvalidStartDate {
        /// The start date value found in the filename.
        found: String,
    },
    /// The end date is not a real `YYYYMMDD` calendar date.
    InvalidEndDate {
        /// The end date value found in the filename.
        found: String,
    },
    /// The version field does not match the `vNN-NN` grammar.
    InvalidVersion {
        /// The version value found in the filename.
        found: String,
    },
    /// The extension is legal but does not match the data level.
    ExtensionMismatch {
        /// The extension found in the filename.
        extension: String,
        /// The data level found in the filename.
        data_level: String,
    },
    /// The extension names no accepted archive format.
    UnknownExtension {
        /// The extension found in the filename.
        found: String,
    },
    /// A SPICE kernel name with no extension at all.
    MissingKernelExtension,
    /// A SPICE kernel extension outside the recognized set.
    UnknownKernelExtension {
        /// The extension found in the filename.
        found: String,
    },
    /// An empty file name.
    EmptyFileName,
    /// A file name containing whitespace.
    WhitespaceInFileName,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mission { found } => {
                write!(f, "invalid mission '{found}', expected '{MISSION}'")
            }
            Self::UnknownInstrument { found } => {
                let known: Vec<&str> = Instrument::all().iter().map(Instrument::as_str).collect();
                write!(
                    f,
                    "unknown instrument '{found}', expected one of: {}",
                    known.join(", ")
                )
            }
            Self::UnknownDataLevel { found } => {
                let known: Vec<&str> = DataLevel::all().iter().map(DataLevel::as_str).collect();
                write!(
                    f,
                    "unknown data level '{found}', expected one of: {}",
                    known.join(", ")
                )
            }
            Self::InvalidStartDate { found } => {
                write!(f, "invalid start date '{found}', expected a real YYYYMMDD date")
            }
            Self::InvalidEndDate { found } => {
                write!(f, "invalid end date '{found}', expected a real YYYYMMDD date")
            }
            Self::InvalidVersion { found } => {
                write!(f, "invalid version '{found}', expected vNN-NN")
            }
            Self::ExtensionMismatch {
                extension,
                data_level,
            } => write!(
                f,
                "extension '{extension}' does not match data level '{data_level}': \
                 l0 products use 'pkts', higher levels use 'cdf'"
            ),
            Self::UnknownExtension { found } => {
                write!(f, "extension '{found}' is not an accepted archive format")
            }
            Self::MissingKernelExtension => write!(f, "kernel name has no extension"),
            Self::UnknownKernelExtension { found } => {
                write!(
                    f,
                    "'{found}' is not a recognized kernel extension, expected one of: {}",
                    KERNEL_EXTENSIONS.join(", ")
                )
            }
            Self::EmptyFileName => write!(f, "file name is empty"),
            Self::WhitespaceInFileName => write!(f, "file name contains whitespace"),
        }
    }
}

/// Accumulator for field-legality violations.
///
/// Collects zero or more [`Violation`] records and converts to a failure only
/// if non-empty, preserving the report-everything-at-once contract.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViolationReport {
    violations: Vec<Violation>,
}

impl ViolationReport {
    /// Creates an empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a violation.
    pub fn push(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    /// Returns true when no violation has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Returns every violation recorded so far, in discovery order.
    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Converts the report into the composite validation error for
    /// `filename`.
    #[must_use]
    pub fn into_error(self, filename: &str) -> Error {
        Error::InvalidFile {
            filename: filename.to_string(),
            report: self,
        }
    }
}

impl fmt::Display for ViolationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for violation in &self.violations {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{violation}")?;
            first = false;
        }
        Ok(())
    }
}

/// A validated science file path.
///
/// Wraps parsed filename components whose fields have all passed the mission
/// legality rules: known instrument, known data level, real calendar dates,
/// well-formed version, and an extension consistent with the level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScienceFilePath {
    file_name: String,
    components: FileNameComponents,
    instrument: Instrument,
    data_level: DataLevel,
    start_date: NaiveDate,
    end_date: NaiveDate,
    version: Version,
    extension: ArchiveExtension,
}

impl ScienceFilePath {
    /// Validates a science filename or path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFormat`] when the name does not match the
    /// convention grammar, or [`Error::InvalidFile`] carrying every
    /// field-legality violation found.
    pub fn new(name_or_path: &str) -> Result<Self> {
        let components = FileNameComponents::parse(name_or_path)?;
        let file_name = components.to_string();
        let mut report = ViolationReport::new();

        if components.mission() != MISSION {
            report.push(Violation::Mission {
                found: components.mission().to_string(),
            });
        }

        let instrument = Instrument::from_tag(components.instrument());
        if instrument.is_none() {
            report.push(Violation::UnknownInstrument {
                found: components.instrument().to_string(),
            });
        }

        let data_level = DataLevel::from_tag(components.data_level());
        if data_level.is_none() {
            report.push(Violation::UnknownDataLevel {
                found: components.data_level().to_string(),
            });
        }

        let start_date = parse_archive_date(components.start_date());
        if start_date.is_none() {
            report.push(Violation::InvalidStartDate {
                found: components.start_date().to_string(),
            });
        }

        let end_date = parse_archive_date(components.end_date());
        if end_date.is_none() {
            report.push(Violation::InvalidEndDate {
                found: components.end_date().to_string(),
            });
        }

        let version = Version::from_tag(components.version());
        if version.is_none() {
            report.push(Violation::InvalidVersion {
                found: components.version().to_string(),
            });
        }

        let extension = ArchiveExtension::from_tag(components.extension());
        match extension {
            None => report.push(Violation::UnknownExtension {
                found: components.extension().to_string(),
            }),
            Some(extension) => {
                if let Some(data_level) = data_level {
                    if extension != data_level.archive_extension() {
                        report.push(Violation::ExtensionMismatch {
                            extension: components.extension().to_string(),
                            data_level: components.data_level().to_string(),
                        });
                    }
                }
            }
        }

        if let (true, Some(instrument), Some(data_level), Some(start_date), Some(end_date), Some(version), Some(extension)) = (
            report.is_empty(),
            instrument,
            data_level,
            start_date,
            end_date,
            version,
            extension,
        ) {
            return Ok(Self {
                file_name,
                components,
                instrument,
                data_level,
                start_date,
                end_date,
                version,
                extension,
            });
        }
        Err(report.into_error(&file_name))
    }

    /// Returns the bare filename.
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Returns the parsed filename components.
    #[must_use]
    pub fn components(&self) -> &FileNameComponents {
        &self.components
    }

    /// Returns the instrument that produced this file.
    #[must_use]
    pub const fn instrument(&self) -> Instrument {
        self.instrument
    }

    /// Returns the pipeline data level.
    #[must_use]
    pub const fn data_level(&self) -> DataLevel {
        self.data_level
    }

    /// Returns the instrument-defined descriptor.
    #[must_use]
    pub fn descriptor(&self) -> &str {
        self.components.descriptor()
    }

    /// Returns the start of the nominal coverage period.
    #[must_use]
    pub const fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// Returns the end of the nominal coverage period.
    #[must_use]
    pub const fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    /// Returns the software/data version pair.
    #[must_use]
    pub const fn version(&self) -> Version {
        self.version
    }

    /// Returns the archive extension.
    #[must_use]
    pub const fn extension(&self) -> ArchiveExtension {
        self.extension
    }

    /// Returns the canonical archive storage path for this file.
    ///
    /// `imap/{instrument}/{data_level}/{YYYY}/{MM}/{filename}`, with year and
    /// month taken from the start date. Pure function of already-validated
    /// fields; never fails.
    #[must_use]
    pub fn storage_path(&self) -> String {
        use chrono::Datelike;
        format!(
            "{MISSION}/{}/{}/{:04}/{:02}/{}",
            self.instrument.as_str(),
            self.data_level.as_str(),
            self.start_date.year(),
            self.start_date.month(),
            self.file_name
        )
    }

    /// Returns the storage path rooted at a local data directory.
    #[must_use]
    pub fn absolute_storage_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(self.storage_path())
    }
}

/// A validated ancillary file path.
///
/// Calibration products valid over an interval: a missing end date means the
/// product covers only its start date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AncillaryFilePath {
    file_name: String,
    components: AncillaryComponents,
    instrument: Instrument,
    start_date: NaiveDate,
    end_date: Option<NaiveDate>,
    version: Version,
    extension: ArchiveExtension,
}

impl AncillaryFilePath {
    /// Validates an ancillary filename or path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFormat`] when the name does not match the
    /// ancillary grammar, or [`Error::InvalidFile`] carrying every
    /// field-legality violation found.
    pub fn new(name_or_path: &str) -> Result<Self> {
        let components = AncillaryComponents::parse(name_or_path)?;
        let file_name = components.to_string();
        let mut report = ViolationReport::new();

        if components.mission() != MISSION {
            report.push(Violation::Mission {
                found: components.mission().to_string(),
            });
        }

        let instrument = Instrument::from_tag(components.instrument());
        if instrument.is_none() {
            report.push(Violation::UnknownInstrument {
                found: components.instrument().to_string(),
            });
        }

        let start_date = parse_archive_date(components.start_date());
        if start_date.is_none() {
            report.push(Violation::InvalidStartDate {
                found: components.start_date().to_string(),
            });
        }

        // None stays None: a single-date product has no end date to check.
        let mut end_date = None;
        if let Some(field) = components.end_date() {
            end_date = parse_archive_date(field);
            if end_date.is_none() {
                report.push(Violation::InvalidEndDate {
                    found: field.to_string(),
                });
            }
        }
        let end_date_ok = components.end_date().is_none() || end_date.is_some();

        let version = Version::from_tag(components.version());
        if version.is_none() {
            report.push(Violation::InvalidVersion {
                found: components.version().to_string(),
            });
        }

        let extension = ArchiveExtension::from_tag(components.extension());
        if extension.is_none() {
            report.push(Violation::UnknownExtension {
                found: components.extension().to_string(),
            });
        }

        if let (true, true, Some(instrument), Some(start_date), Some(version), Some(extension)) = (
            report.is_empty(),
            end_date_ok,
            instrument,
            start_date,
            version,
            extension,
        ) {
            return Ok(Self {
                file_name,
                components,
                instrument,
                start_date,
                end_date,
                version,
                extension,
            });
        }
        Err(report.into_error(&file_name))
    }

    /// Returns the bare filename.
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Returns the parsed filename components.
    #[must_use]
    pub fn components(&self) -> &AncillaryComponents {
        &self.components
    }

    /// Returns the instrument this product calibrates.
    #[must_use]
    pub const fn instrument(&self) -> Instrument {
        self.instrument
    }

    /// Returns the instrument-defined descriptor.
    #[must_use]
    pub fn descriptor(&self) -> &str {
        self.components.descriptor()
    }

    /// Returns the first date the product is valid for.
    #[must_use]
    pub const fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// Returns the declared end date, if the product carries a date range.
    #[must_use]
    pub const fn end_date(&self) -> Option<NaiveDate> {
        self.end_date
    }

    /// Returns the last date the product covers.
    ///
    /// A product without a declared end date covers only its start date.
    #[must_use]
    pub fn effective_end_date(&self) -> NaiveDate {
        self.end_date.unwrap_or(self.start_date)
    }

    /// Returns true when the product's validity interval covers `day`.
    #[must_use]
    pub fn covers(&self, day: NaiveDate) -> bool {
        self.start_date <= day && day <= self.effective_end_date()
    }

    /// Returns the software/data version pair.
    #[must_use]
    pub const fn version(&self) -> Version {
        self.version
    }

    /// Returns the archive extension.
    #[must_use]
    pub const fn extension(&self) -> ArchiveExtension {
        self.extension
    }

    /// Returns the canonical archive storage path for this file.
    #[must_use]
    pub fn storage_path(&self) -> String {
        format!(
            "{MISSION}/ancillary/{}/{}",
            self.instrument.as_str(),
            self.file_name
        )
    }

    /// Returns the storage path rooted at a local data directory.
    #[must_use]
    pub fn absolute_storage_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(self.storage_path())
    }
}

/// A validated SPICE kernel path.
///
/// The SPICE naming scheme is intentionally minimal today: the archive only
/// receives predicted attitude products from the `sc_attitude` source, and
/// the legality pass checks no more than that the name is a plausible kernel.
// TODO: parse kernel type and coverage from the name once the mission settles
// the SPICE naming scheme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpiceFilePath {
    file_name: String,
    kernel_extension: String,
}

impl SpiceFilePath {
    /// Validates a SPICE kernel filename or path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFile`] when the final path segment is empty,
    /// contains whitespace, or does not carry a recognized kernel extension.
    pub fn new(name_or_path: &str) -> Result<Self> {
        let file_name = final_segment(name_or_path).to_string();
        let mut report = ViolationReport::new();

        if file_name.is_empty() {
            report.push(Violation::EmptyFileName);
        }
        if file_name.contains(char::is_whitespace) {
            report.push(Violation::WhitespaceInFileName);
        }

        let kernel_extension = match file_name.rsplit_once('.') {
            None => {
                if !file_name.is_empty() {
                    report.push(Violation::MissingKernelExtension);
                }
                None
            }
            Some((_, extension)) => {
                if KERNEL_EXTENSIONS.contains(&extension) {
                    Some(extension.to_string())
                } else {
                    report.push(Violation::UnknownKernelExtension {
                        found: extension.to_string(),
                    });
                    None
                }
            }
        };

        if let (true, Some(kernel_extension)) = (report.is_empty(), kernel_extension) {
            return Ok(Self {
                file_name,
                kernel_extension,
            });
        }
        Err(report.into_error(&file_name))
    }

    /// Returns the bare filename.
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Returns the kernel extension.
    #[must_use]
    pub fn kernel_extension(&self) -> &str {
        &self.kernel_extension
    }

    /// Returns the canonical archive storage path for this kernel.
    #[must_use]
    pub fn storage_path(&self) -> String {
        format!("{MISSION}/spice/{}", self.file_name)
    }

    /// Returns the storage path rooted at a local data directory.
    #[must_use]
    pub fn absolute_storage_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(self.storage_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn science_accepts_a_valid_filename() {
        let path = ScienceFilePath::new("imap_mag_l1a_burst_20210101_20210102_v01-01.cdf").unwrap();

        assert_eq!(path.instrument(), Instrument::Mag);
        assert_eq!(path.data_level(), DataLevel::L1a);
        assert_eq!(path.descriptor(), "burst");
        assert_eq!(path.start_date(), NaiveDate::from_ymd_opt(2021, 1, 1).unwrap());
        assert_eq!(path.end_date(), NaiveDate::from_ymd_opt(2021, 1, 2).unwrap());
        assert_eq!(path.version(), Version { major: 1, minor: 1 });
        assert_eq!(path.extension(), ArchiveExtension::Cdf);
    }

    #[test]
    fn science_accepts_a_full_path() {
        let path =
            ScienceFilePath::new("/data/imap_mag_l1a_burst_20210101_20210102_v01-01.cdf").unwrap();
        assert_eq!(path.file_name(), "imap_mag_l1a_burst_20210101_20210102_v01-01.cdf");
    }

    #[test]
    fn science_storage_path_matches_the_archive_contract() {
        let path = ScienceFilePath::new("imap_mag_l1a_burst_20210101_20210102_v01-01.cdf").unwrap();
        assert_eq!(
            path.storage_path(),
            "imap/mag/l1a/2021/01/imap_mag_l1a_burst_20210101_20210102_v01-01.cdf"
        );
    }

    #[test]
    fn science_absolute_path_roots_at_the_data_dir() {
        let path = ScienceFilePath::new("imap_mag_l1a_burst_20210101_20210102_v01-01.cdf").unwrap();
        assert_eq!(
            path.absolute_storage_path(Path::new("/var/imap")),
            PathBuf::from(
                "/var/imap/imap/mag/l1a/2021/01/imap_mag_l1a_burst_20210101_20210102_v01-01.cdf"
            )
        );
    }

    #[test]
    fn level_zero_requires_packet_extension() {
        assert!(ScienceFilePath::new("imap_mag_l0_raw_20210101_20210102_v01-01.pkts").is_ok());

        let err =
            ScienceFilePath::new("imap_mag_l0_raw_20210101_20210102_v01-01.cdf").unwrap_err();
        let Error::InvalidFile { report, .. } = err else {
            panic!("expected a composite validation error");
        };
        assert_eq!(
            report.violations(),
            [Violation::ExtensionMismatch {
                extension: "cdf".to_string(),
                data_level: "l0".to_string(),
            }]
        );
    }

    #[test]
    fn processed_levels_reject_packet_extension() {
        let err =
            ScienceFilePath::new("imap_mag_l1a_burst_20210101_20210102_v01-01.pkts").unwrap_err();
        let Error::InvalidFile { report, .. } = err else {
            panic!("expected a composite validation error");
        };
        assert_eq!(
            report.violations(),
            [Violation::ExtensionMismatch {
                extension: "pkts".to_string(),
                data_level: "l1a".to_string(),
            }]
        );
    }

    #[test]
    fn out_of_range_date_fails_exactly_the_date_check() {
        let err =
            ScienceFilePath::new("imap_mag_l1a_burst_20210132_20210202_v01-01.cdf").unwrap_err();
        let Error::InvalidFile { report, .. } = err else {
            panic!("expected a composite validation error");
        };
        assert_eq!(
            report.violations(),
            [Violation::InvalidStartDate {
                found: "20210132".to_string(),
            }]
        );
    }

    #[test]
    fn every_violation_is_reported_at_once() {
        let err =
            ScienceFilePath::new("imap_sdc_l9z_burst_20210132_20210102_v01-01.cdf").unwrap_err();
        let Error::InvalidFile { report, .. } = &err else {
            panic!("expected a composite validation error");
        };
        assert_eq!(
            report.violations(),
            [
                Violation::UnknownInstrument {
                    found: "sdc".to_string(),
                },
                Violation::UnknownDataLevel {
                    found: "l9z".to_string(),
                },
                Violation::InvalidStartDate {
                    found: "20210132".to_string(),
                },
            ]
        );

        // The rendered error carries the whole union, not just the first.
        let message = err.to_string();
        assert!(message.contains("unknown instrument 'sdc'"));
        assert!(message.contains("unknown data level 'l9z'"));
        assert!(message.contains("invalid start date '20210132'"));
    }

    #[test]
    fn extension_mismatch_accumulates_with_other_violations() {
        let err =
            ScienceFilePath::new("imap_sdc_l0_raw_20210101_20210102_v01-01.cdf").unwrap_err();
        let Error::InvalidFile { report, .. } = err else {
            panic!("expected a composite validation error");
        };
        assert_eq!(report.violations().len(), 2);
        assert!(report.violations().contains(&Violation::UnknownInstrument {
            found: "sdc".to_string(),
        }));
        assert!(report.violations().contains(&Violation::ExtensionMismatch {
            extension: "cdf".to_string(),
            data_level: "l0".to_string(),
        }));
    }

    #[test]
    fn ancillary_accepts_single_date_and_range() {
        let ranged =
            AncillaryFilePath::new("imap_mag_offsets_20240101_20241231_v01-00.cdf").unwrap();
        assert_eq!(ranged.effective_end_date(), NaiveDate::from_ymd_opt(2024, 12, 31).unwrap());

        let single = AncillaryFilePath::new("imap_mag_offsets_20240101_v01-00.json").unwrap();
        assert_eq!(single.end_date(), None);
        assert_eq!(single.effective_end_date(), single.start_date());
        assert!(single.covers(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()));
        assert!(!single.covers(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap()));
    }

    #[test]
    fn ancillary_rejects_unknown_instrument() {
        let err = AncillaryFilePath::new("imap_sdc_offsets_20240101_v01-00.cdf").unwrap_err();
        let Error::InvalidFile { report, .. } = err else {
            panic!("expected a composite validation error");
        };
        assert_eq!(
            report.violations(),
            [Violation::UnknownInstrument {
                found: "sdc".to_string(),
            }]
        );
    }

    #[test]
    fn ancillary_storage_path_sits_under_the_instrument() {
        let path = AncillaryFilePath::new("imap_mag_offsets_20240101_v01-00.json").unwrap();
        assert_eq!(
            path.storage_path(),
            "imap/ancillary/mag/imap_mag_offsets_20240101_v01-00.json"
        );
    }

    #[test]
    fn spice_accepts_recognized_kernels() {
        let kernel = SpiceFilePath::new("imap_sc_attitude_predict_20240101.ah.bc").unwrap();
        assert_eq!(kernel.kernel_extension(), "bc");
        assert_eq!(
            kernel.storage_path(),
            "imap/spice/imap_sc_attitude_predict_20240101.ah.bc"
        );
    }

    #[test]
    fn spice_rejects_non_kernel_names() {
        let err = SpiceFilePath::new("imap_attitude.txt").unwrap_err();
        let Error::InvalidFile { report, .. } = err else {
            panic!("expected a composite validation error");
        };
        assert_eq!(
            report.violations(),
            [Violation::UnknownKernelExtension {
                found: "txt".to_string(),
            }]
        );

        assert!(SpiceFilePath::new("kernel with space.bsp").is_err());
        assert!(SpiceFilePath::new("no_extension").is_err());
    }
}
