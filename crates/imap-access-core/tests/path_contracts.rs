//! Contract tests for archive storage-path derivation.
//!
//! The transfer client places and locates archive objects using these paths,
//! so the derivation must stay byte-identical for byte-identical filenames.

use std::path::{Path, PathBuf};

use imap_access_core::prelude::*;

#[test]
fn science_paths_slice_year_and_month_from_the_start_date() {
    let path = ScienceFilePath::new("imap_mag_l1a_burst_20210101_20210102_v01-01.cdf").unwrap();
    assert_eq!(
        path.storage_path(),
        "imap/mag/l1a/2021/01/imap_mag_l1a_burst_20210101_20210102_v01-01.cdf"
    );

    let path = ScienceFilePath::new("imap_swe_l2_counts_20251231_20251231_v12-00.cdf").unwrap();
    assert_eq!(
        path.storage_path(),
        "imap/swe/l2/2025/12/imap_swe_l2_counts_20251231_20251231_v12-00.cdf"
    );
}

#[test]
fn raw_products_share_the_same_layout() {
    let path = ScienceFilePath::new("imap_idex_l0_raw_20240229_20240229_v01-00.pkts").unwrap();
    assert_eq!(
        path.storage_path(),
        "imap/idex/l0/2024/02/imap_idex_l0_raw_20240229_20240229_v01-00.pkts"
    );
}

#[test]
fn the_same_filename_always_derives_the_same_path() {
    let name = "imap_hi-45_l1b_ena_20240601_20240602_v03-01.cdf";
    let first = ScienceFilePath::new(name).unwrap().storage_path();
    let second = ScienceFilePath::new(name).unwrap().storage_path();
    assert_eq!(first, second);
}

#[test]
fn a_path_input_derives_the_same_storage_path_as_its_filename() {
    let from_name =
        ScienceFilePath::new("imap_mag_l1a_burst_20210101_20210102_v01-01.cdf").unwrap();
    let from_path =
        ScienceFilePath::new("/staging/incoming/imap_mag_l1a_burst_20210101_20210102_v01-01.cdf")
            .unwrap();
    assert_eq!(from_name.storage_path(), from_path.storage_path());
}

#[test]
fn ancillary_and_spice_paths_sit_under_their_own_roots() {
    let ancillary = AncillaryFilePath::new("imap_mag_offsets_20240101_20241231_v01-00.cdf").unwrap();
    assert_eq!(
        ancillary.storage_path(),
        "imap/ancillary/mag/imap_mag_offsets_20240101_20241231_v01-00.cdf"
    );

    let kernel = SpiceFilePath::new("imap_sc_attitude_predict_20240101.ah.bc").unwrap();
    assert_eq!(
        kernel.storage_path(),
        "imap/spice/imap_sc_attitude_predict_20240101.ah.bc"
    );
}

#[test]
fn absolute_paths_root_at_the_local_data_dir() {
    let path = ScienceFilePath::new("imap_mag_l1a_burst_20210101_20210102_v01-01.cdf").unwrap();
    assert_eq!(
        path.absolute_storage_path(Path::new("/var/imap/data")),
        PathBuf::from(
            "/var/imap/data/imap/mag/l1a/2021/01/imap_mag_l1a_burst_20210101_20210102_v01-01.cdf"
        )
    );
}
