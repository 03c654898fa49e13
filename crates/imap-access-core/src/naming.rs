//! Filename convention codec for the mission archive.
//!
//! This module is the single source of truth for the archive naming grammar.
//! It turns a convention string into named components and back; it does not
//! judge whether the component values are legal mission vocabulary — that is
//! the job of the validators in [`crate::archive_paths`].
//!
//! # Science Convention
//!
//! ```text
//! GRAMMAR (anchored at both ends, single '.' before the extension):
//!   <mission>_<instrument>_<datalevel>_<descriptor>_<startdate>_<enddate>_<version>.<extension>
//!
//!   mission    ::= "imap"
//!   instrument ::= [^_]+
//!   datalevel  ::= [^_]+
//!   descriptor ::= [^_]+        (mandatory; no optional-field legacy mode)
//!   startdate  ::= \d{8}        (YYYYMMDD)
//!   enddate    ::= \d{8}        (YYYYMMDD)
//!   version    ::= v\d{2}-\d{2}
//!   extension  ::= "cdf" | "pkts"
//! ```
//!
//! # Ancillary Convention
//!
//! Ancillary products carry a single date or a date range, and no data level:
//!
//! ```text
//!   <mission>_<instrument>_<descriptor>_<startdate>[_<enddate>]_<version>.<extension>
//!
//!   extension  ::= "cdf" | "json"
//! ```
//!
//! # Round-trip Law
//!
//! For every well-formed name `s`, `parse(s).to_string() == s`.
//!
//! # Examples
//!
//! ```rust
//! use imap_access_core::naming::FileNameComponents;
//!
//! let name = "imap_mag_l1a_burst_20210101_20210102_v01-01.cdf";
//! let components = FileNameComponents::parse(name)?;
//!
//! assert_eq!(components.instrument(), "mag");
//! assert_eq!(components.data_level(), "l1a");
//! assert_eq!(components.to_string(), name);
//! # Ok::<(), imap_access_core::Error>(())
//! ```

use std::fmt;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Error, Result};

/// Human-readable template of the science filename convention.
pub const FILENAME_CONVENTION: &str =
    "<mission>_<instrument>_<datalevel>_<descriptor>_<startdate>_<enddate>_<version>.<extension>";

/// Human-readable template of the ancillary filename convention.
pub const ANCILLARY_CONVENTION: &str =
    "<mission>_<instrument>_<descriptor>_<startdate>[_<enddate>]_<version>.<extension>";

static SCIENCE_GRAMMAR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?P<mission>imap)_(?P<instrument>[^_]+)_(?P<datalevel>[^_]+)_(?P<descriptor>[^_]+)_(?P<startdate>\d{8})_(?P<enddate>\d{8})_(?P<version>v\d{2}-\d{2})\.(?P<extension>cdf|pkts)$",
    )
    .expect("science filename grammar compiles")
});

static ANCILLARY_GRAMMAR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?P<mission>imap)_(?P<instrument>[^_]+)_(?P<descriptor>[^_]+)_(?P<startdate>\d{8})(?:_(?P<enddate>\d{8}))?_(?P<version>v\d{2}-\d{2})\.(?P<extension>cdf|json)$",
    )
    .expect("ancillary filename grammar compiles")
});

/// Reduces a bare filename or a full path to its final path segment.
pub(crate) fn final_segment(name_or_path: &str) -> &str {
    Path::new(name_or_path)
        .file_name()
        .and_then(|segment| segment.to_str())
        .unwrap_or(name_or_path)
}

/// Named components of a science filename.
///
/// Immutable once constructed: every field is present and non-empty, and the
/// [`fmt::Display`] impl reproduces the filename the components were parsed
/// from, byte for byte.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileNameComponents {
    mission: String,
    instrument: String,
    data_level: String,
    descriptor: String,
    start_date: String,
    end_date: String,
    version: String,
    extension: String,
}

impl FileNameComponents {
    /// Parses a filename against the science convention.
    ///
    /// Accepts either a bare filename or a full path; for a path only the
    /// final segment is considered. The grammar is anchored at both ends, so
    /// there are no partial matches and no partial components.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFormat`] carrying the offending string and the
    /// convention template when the grammar does not match. This is the only
    /// failure mode.
    pub fn parse(name_or_path: &str) -> Result<Self> {
        let name = final_segment(name_or_path);
        let captures = SCIENCE_GRAMMAR
            .captures(name)
            .ok_or_else(|| Error::invalid_format(name))?;

        Ok(Self {
            mission: captures["mission"].to_string(),
            instrument: captures["instrument"].to_string(),
            data_level: captures["datalevel"].to_string(),
            descriptor: captures["descriptor"].to_string(),
            start_date: captures["startdate"].to_string(),
            end_date: captures["enddate"].to_string(),
            version: captures["version"].to_string(),
            extension: captures["extension"].to_string(),
        })
    }

    /// Assembles components from field values already known to be well-formed.
    ///
    /// The mission field is fixed to the mission literal. No legality
    /// checking happens here — constructing from values outside the mission
    /// vocabulary produces a name the validators will reject.
    #[must_use]
    pub fn new(
        instrument: impl Into<String>,
        data_level: impl Into<String>,
        descriptor: impl Into<String>,
        start_date: impl Into<String>,
        end_date: impl Into<String>,
        version: impl Into<String>,
        extension: impl Into<String>,
    ) -> Self {
        Self {
            mission: crate::mission::MISSION.to_string(),
            instrument: instrument.into(),
            data_level: data_level.into(),
            descriptor: descriptor.into(),
            start_date: start_date.into(),
            end_date: end_date.into(),
            version: version.into(),
            extension: extension.into(),
        }
    }

    /// Returns the mission field.
    #[must_use]
    pub fn mission(&self) -> &str {
        &self.mission
    }

    /// Returns the instrument field.
    #[must_use]
    pub fn instrument(&self) -> &str {
        &self.instrument
    }

    /// Returns the data level field.
    #[must_use]
    pub fn data_level(&self) -> &str {
        &self.data_level
    }

    /// Returns the descriptor field.
    #[must_use]
    pub fn descriptor(&self) -> &str {
        &self.descriptor
    }

    /// Returns the start date field (`YYYYMMDD`).
    #[must_use]
    pub fn start_date(&self) -> &str {
        &self.start_date
    }

    /// Returns the end date field (`YYYYMMDD`).
    #[must_use]
    pub fn end_date(&self) -> &str {
        &self.end_date
    }

    /// Returns the version field (`vNN-NN`).
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Returns the extension field.
    #[must_use]
    pub fn extension(&self) -> &str {
        &self.extension
    }
}

impl fmt::Display for FileNameComponents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}_{}_{}_{}_{}_{}_{}.{}",
            self.mission,
            self.instrument,
            self.data_level,
            self.descriptor,
            self.start_date,
            self.end_date,
            self.version,
            self.extension
        )
    }
}

/// Named components of an ancillary filename.
///
/// Ancillary products are calibration data valid over an interval: the end
/// date is optional, and a missing end date means the product covers only its
/// start date.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AncillaryComponents {
    mission: String,
    instrument: String,
    descriptor: String,
    start_date: String,
    end_date: Option<String>,
    version: String,
    extension: String,
}

impl AncillaryComponents {
    /// Parses a filename against the ancillary convention.
    ///
    /// Accepts either a bare filename or a full path; for a path only the
    /// final segment is considered.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFormat`] carrying the offending string and the
    /// ancillary convention template when the grammar does not match.
    pub fn parse(name_or_path: &str) -> Result<Self> {
        let name = final_segment(name_or_path);
        let captures = ANCILLARY_GRAMMAR
            .captures(name)
            .ok_or_else(|| Error::invalid_ancillary_format(name))?;

        Ok(Self {
            mission: captures["mission"].to_string(),
            instrument: captures["instrument"].to_string(),
            descriptor: captures["descriptor"].to_string(),
            start_date: captures["startdate"].to_string(),
            end_date: captures.name("enddate").map(|m| m.as_str().to_string()),
            version: captures["version"].to_string(),
            extension: captures["extension"].to_string(),
        })
    }

    /// Returns the mission field.
    #[must_use]
    pub fn mission(&self) -> &str {
        &self.mission
    }

    /// Returns the instrument field.
    #[must_use]
    pub fn instrument(&self) -> &str {
        &self.instrument
    }

    /// Returns the descriptor field.
    #[must_use]
    pub fn descriptor(&self) -> &str {
        &self.descriptor
    }

    /// Returns the start date field (`YYYYMMDD`).
    #[must_use]
    pub fn start_date(&self) -> &str {
        &self.start_date
    }

    /// Returns the end date field, if the product carries a date range.
    #[must_use]
    pub fn end_date(&self) -> Option<&str> {
        self.end_date.as_deref()
    }

    /// Returns the version field (`vNN-NN`).
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Returns the extension field.
    #[must_use]
    pub fn extension(&self) -> &str {
        &self.extension
    }
}

impl fmt::Display for AncillaryComponents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}_{}_{}", self.mission, self.instrument, self.descriptor, self.start_date)?;
        if let Some(end_date) = &self.end_date {
            write!(f, "_{end_date}")?;
        }
        write!(f, "_{}.{}", self.version, self.extension)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_component() {
        let components =
            FileNameComponents::parse("imap_mag_l1a_burst_20210101_20210102_v01-01.cdf").unwrap();

        assert_eq!(components.mission(), "imap");
        assert_eq!(components.instrument(), "mag");
        assert_eq!(components.data_level(), "l1a");
        assert_eq!(components.descriptor(), "burst");
        assert_eq!(components.start_date(), "20210101");
        assert_eq!(components.end_date(), "20210102");
        assert_eq!(components.version(), "v01-01");
        assert_eq!(components.extension(), "cdf");
    }

    #[test]
    fn accepts_a_full_path_using_only_the_final_segment() {
        let components =
            FileNameComponents::parse("/mnt/data/imap_mag_l1a_burst_20210101_20210102_v01-01.pkts")
                .unwrap();
        assert_eq!(components.extension(), "pkts");
        assert_eq!(
            components.to_string(),
            "imap_mag_l1a_burst_20210101_20210102_v01-01.pkts"
        );
    }

    #[test]
    fn rejects_names_without_a_descriptor() {
        let err = FileNameComponents::parse("imap_mag_l1a_20210101_20210102_v01-01.cdf")
            .unwrap_err();
        assert!(matches!(err, Error::InvalidFormat { .. }));
        assert!(err.to_string().contains(FILENAME_CONVENTION));
    }

    #[test]
    fn rejects_partial_matches() {
        // Grammar anchors at both ends: no leading or trailing characters.
        for name in [
            "ximap_mag_l1a_burst_20210101_20210102_v01-01.cdf",
            "imap_mag_l1a_burst_20210101_20210102_v01-01.cdf.bak",
            "imap_mag_l1a_burst_20210101_20210102_v01-01",
            "imap_mag_l1a_burst_20210101_20210102_v01-01.txt",
            "imap_mag_l1a_burst_2021010_20210102_v01-01.cdf",
            "imap_mag_l1a_burst_20210101_20210102_v1-01.cdf",
            "",
        ] {
            assert!(
                matches!(
                    FileNameComponents::parse(name),
                    Err(Error::InvalidFormat { .. })
                ),
                "expected format failure for {name:?}"
            );
        }
    }

    #[test]
    fn construct_is_the_inverse_of_parse() {
        let name = "imap_swe_l0_raw_20250101_20250101_v02-03.pkts";
        let parsed = FileNameComponents::parse(name).unwrap();
        let constructed = FileNameComponents::new(
            "swe", "l0", "raw", "20250101", "20250101", "v02-03", "pkts",
        );
        assert_eq!(parsed, constructed);
        assert_eq!(constructed.to_string(), name);
    }

    #[test]
    fn ancillary_end_date_is_optional() {
        let ranged =
            AncillaryComponents::parse("imap_mag_offsets_20240101_20241231_v01-00.cdf").unwrap();
        assert_eq!(ranged.end_date(), Some("20241231"));

        let single = AncillaryComponents::parse("imap_mag_offsets_20240101_v01-00.json").unwrap();
        assert_eq!(single.end_date(), None);
        assert_eq!(single.descriptor(), "offsets");
        assert_eq!(
            single.to_string(),
            "imap_mag_offsets_20240101_v01-00.json"
        );
    }

    #[test]
    fn ancillary_rejects_science_shaped_names() {
        assert!(AncillaryComponents::parse(
            "imap_mag_l1a_burst_20210101_20210102_v01-01.cdf"
        )
        .is_err());
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn science_names_roundtrip(
                instrument in "[a-z0-9-]{1,10}",
                data_level in "[a-z0-9]{1,4}",
                descriptor in "[a-z0-9-]{1,12}",
                start_date in "[0-9]{8}",
                end_date in "[0-9]{8}",
                major in 0u8..100,
                minor in 0u8..100,
                extension in prop::sample::select(vec!["cdf", "pkts"]),
            ) {
                let name = format!(
                    "imap_{instrument}_{data_level}_{descriptor}_{start_date}_{end_date}_v{major:02}-{minor:02}.{extension}"
                );
                let components = FileNameComponents::parse(&name)
                    .unwrap_or_else(|e| panic!("failed to parse {name}: {e}"));

                prop_assert_eq!(components.instrument(), instrument.as_str());
                prop_assert_eq!(components.descriptor(), descriptor.as_str());
                prop_assert_eq!(components.to_string(), name);
            }

            #[test]
            fn ancillary_names_roundtrip(
                instrument in "[a-z0-9-]{1,10}",
                descriptor in "[a-z0-9-]{1,12}",
                start_date in "[0-9]{8}",
                end_date in proptest::option::of("[0-9]{8}"),
                major in 0u8..100,
                minor in 0u8..100,
                extension in prop::sample::select(vec!["cdf", "json"]),
            ) {
                let range = end_date.as_ref().map_or(String::new(), |d| format!("_{d}"));
                let name = format!(
                    "imap_{instrument}_{descriptor}_{start_date}{range}_v{major:02}-{minor:02}.{extension}"
                );
                let components = AncillaryComponents::parse(&name)
                    .unwrap_or_else(|e| panic!("failed to parse {name}: {e}"));

                prop_assert_eq!(components.end_date(), end_date.as_deref());
                prop_assert_eq!(components.to_string(), name);
            }
        }
    }
}
