//! Mission vocabulary: instruments, data levels, extensions, and versions.
//!
//! The filename convention ([`crate::naming`]) encodes provenance with values
//! drawn from the closed sets in this module. The sets are small, fixed, and
//! exhaustively handled everywhere they are dispatched on, so each is a plain
//! enum rather than an open string — an unknown tag is a validation failure,
//! not a new member.

use std::fmt;

/// The mission literal every archive filename starts with.
pub const MISSION: &str = "imap";

/// The fixed set of mission instruments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Instrument {
    /// Compact Dual Ion Composition Experiment.
    Codice,
    /// Global Solar Wind Structure imager.
    Glows,
    /// Energetic neutral atom imager, 45 degree mount.
    Hi45,
    /// Energetic neutral atom imager, 90 degree mount.
    Hi90,
    /// High-energy Ion Telescope.
    Hit,
    /// Interstellar Dust Experiment.
    Idex,
    /// Low-energy neutral atom imager.
    Lo,
    /// Magnetometer.
    Mag,
    /// Solar Wind and Pickup Ion instrument.
    Swapi,
    /// Solar Wind Electron instrument.
    Swe,
    /// Ultra-high-energy neutral atom imager, 45 degree mount.
    Ultra45,
    /// Ultra-high-energy neutral atom imager, 90 degree mount.
    Ultra90,
}

impl Instrument {
    /// Returns the filename tag for this instrument.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Codice => "codice",
            Self::Glows => "glows",
            Self::Hi45 => "hi-45",
            Self::Hi90 => "hi-90",
            Self::Hit => "hit",
            Self::Idex => "idex",
            Self::Lo => "lo",
            Self::Mag => "mag",
            Self::Swapi => "swapi",
            Self::Swe => "swe",
            Self::Ultra45 => "ultra-45",
            Self::Ultra90 => "ultra-90",
        }
    }

    /// Resolves a filename tag to an instrument, if it names one.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::all().iter().copied().find(|i| i.as_str() == tag)
    }

    /// Returns all mission instruments.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Codice,
            Self::Glows,
            Self::Hi45,
            Self::Hi90,
            Self::Hit,
            Self::Idex,
            Self::Lo,
            Self::Mag,
            Self::Swapi,
            Self::Swe,
            Self::Ultra45,
            Self::Ultra90,
        ]
    }
}

impl fmt::Display for Instrument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The fixed set of pipeline data levels.
///
/// `l0` is raw packet telemetry; everything above it is processed data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum DataLevel {
    L0,
    L1,
    L1a,
    L1b,
    L1c,
    L1d,
    L2,
    L3,
    L3a,
    L3b,
    L3c,
    L3d,
}

impl DataLevel {
    /// Returns the filename tag for this level.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::L0 => "l0",
            Self::L1 => "l1",
            Self::L1a => "l1a",
            Self::L1b => "l1b",
            Self::L1c => "l1c",
            Self::L1d => "l1d",
            Self::L2 => "l2",
            Self::L3 => "l3",
            Self::L3a => "l3a",
            Self::L3b => "l3b",
            Self::L3c => "l3c",
            Self::L3d => "l3d",
        }
    }

    /// Resolves a filename tag to a data level, if it names one.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::all().iter().copied().find(|l| l.as_str() == tag)
    }

    /// Returns all data levels.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::L0,
            Self::L1,
            Self::L1a,
            Self::L1b,
            Self::L1c,
            Self::L1d,
            Self::L2,
            Self::L3,
            Self::L3a,
            Self::L3b,
            Self::L3c,
            Self::L3d,
        ]
    }

    /// Returns true for the raw packet-telemetry level.
    #[must_use]
    pub const fn is_raw(&self) -> bool {
        matches!(self, Self::L0)
    }

    /// Returns the archive extension products at this level must carry.
    ///
    /// Raw level-0 products are packet files; every processed level is CDF.
    #[must_use]
    pub const fn archive_extension(&self) -> ArchiveExtension {
        if self.is_raw() {
            ArchiveExtension::Pkts
        } else {
            ArchiveExtension::Cdf
        }
    }
}

impl fmt::Display for DataLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// File extensions the archive accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArchiveExtension {
    /// Common Data Format, used for all processed science products.
    Cdf,
    /// Raw packet telemetry, used only for level-0 products.
    Pkts,
    /// JSON calibration tables, used by ancillary products.
    Json,
}

impl ArchiveExtension {
    /// Returns the filename tag for this extension.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Cdf => "cdf",
            Self::Pkts => "pkts",
            Self::Json => "json",
        }
    }

    /// Resolves a filename tag to an extension, if it names one.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "cdf" => Some(Self::Cdf),
            "pkts" => Some(Self::Pkts),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

impl fmt::Display for ArchiveExtension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A software/data version pair, encoded in filenames as `vNN-NN`.
///
/// Ordered by (major, minor) so the highest version of a product can be
/// selected with plain comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Version {
    /// Software version number.
    pub major: u8,
    /// Data version number.
    pub minor: u8,
}

impl Version {
    /// Parses a `vNN-NN` filename tag. Exactly two digits per pair.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        let rest = tag.strip_prefix('v')?;
        let (major, minor) = rest.split_once('-')?;
        if major.len() != 2 || minor.len() != 2 {
            return None;
        }
        if !major.bytes().all(|b| b.is_ascii_digit())
            || !minor.bytes().all(|b| b.is_ascii_digit())
        {
            return None;
        }
        Some(Self {
            major: major.parse().ok()?,
            minor: minor.parse().ok()?,
        })
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{:02}-{:02}", self.major, self.minor)
    }
}
