//! Tests for the parse orchestrator across its three entry modes

use std::collections::BTreeSet;

use super::super::ParseOutcome;
use super::{
    electricity_record, local_file_bytes, n, raw_workbook, server_file_bytes, t, test_parser,
    test_parser_with_config, water_record, write_fixture,
};
use crate::app::models::DataKind;
use crate::config::HandlerConfig;

#[test]
fn test_local_parse_success() {
    let (parser, dir) = test_parser(DataKind::Water);
    let local = write_fixture(
        dir.path(),
        "water-region-7.xlsx",
        &local_file_bytes(
            DataKind::Water,
            &[(1, "12 River Road", 104.5, 88.0), (2, "3 Mill Lane", 55.0, 40.0)],
        ),
    );

    let outcome = parser.parse_client_local_file(&local);
    let records = outcome.records().expect("expected success");
    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|r| r.region == 7));
    assert_eq!(records[0].address, "12 River Road");
    assert_eq!(records[1].address, "3 Mill Lane");
    assert!(outcome.server_regions().is_none());
}

#[test]
fn test_local_parse_is_idempotent() {
    let (parser, dir) = test_parser(DataKind::Electricity);
    let local = write_fixture(
        dir.path(),
        "electricity-region-4.xlsx",
        &local_file_bytes(DataKind::Electricity, &[(1, "4 Hill Street", 230.0, 112.5)]),
    );

    let first = parser.parse_client_local_file(&local);
    let second = parser.parse_client_local_file(&local);
    assert!(first.is_success());
    assert_eq!(first, second);
}

#[test]
fn test_local_parse_cell_error_discards_records() {
    let (parser, dir) = test_parser(DataKind::Water);
    // Second data row has a text where a reading belongs (C3)
    let bytes = raw_workbook(&[(
        "Data",
        vec![
            vec![t(DataKind::Water.headline())],
            vec![n(1.0), t("12 River Road"), n(104.5), n(88.0)],
            vec![n(2.0), t("3 Mill Lane"), t("bad"), n(40.0)],
        ],
    )]);
    let local = write_fixture(dir.path(), "water-region-7.xlsx", &bytes);

    let outcome = parser.parse_client_local_file(&local);
    assert_eq!(
        outcome,
        ParseOutcome::CellError {
            cell: "C3".to_string()
        }
    );
    assert!(outcome.records().is_none());
}

#[test]
fn test_local_parse_unresolvable_region_fails() {
    let (parser, dir) = test_parser(DataKind::Water);
    let local = write_fixture(
        dir.path(),
        "water-region.xlsx",
        &local_file_bytes(DataKind::Water, &[(1, "12 River Road", 104.5, 88.0)]),
    );

    let outcome = parser.parse_client_local_file(&local);
    assert!(matches!(outcome, ParseOutcome::Failed { .. }));
}

#[test]
fn test_checked_parse_success_carries_server_regions() {
    let (parser, dir) = test_parser(DataKind::Water);
    let server_records = vec![
        water_record(3, 1, "1 Dock Road", 10.0, 5.0),
        water_record(5, 1, "9 Park Row", 20.0, 15.0),
    ];
    let server = server_file_bytes(DataKind::Water, &server_records, &[3, 5]);
    write_fixture(dir.path(), "server-water.xlsx", &server);
    let local = write_fixture(
        dir.path(),
        "region-7.xlsx",
        &local_file_bytes(DataKind::Water, &[(1, "12 River Road", 104.5, 88.0)]),
    );

    let outcome = parser.parse_server_file_with_headlines_check("server-water.xlsx", &local);
    let records = outcome.records().expect("expected success");
    // Server rows come back in sheet order
    assert_eq!(records, server_records.as_slice());
    assert_eq!(
        outcome.server_regions(),
        Some(&BTreeSet::from([3, 5]))
    );
}

#[test]
fn test_headline_mismatch_stops_before_rows() {
    let (parser, dir) = test_parser(DataKind::Water);
    let server = server_file_bytes(
        DataKind::Electricity,
        &[electricity_record(7, 1, "4 Hill Street", 230.0, 112.5)],
        &[7],
    );
    write_fixture(dir.path(), "server.xlsx", &server);
    let local = write_fixture(
        dir.path(),
        "region-7.xlsx",
        &local_file_bytes(DataKind::Water, &[(1, "12 River Road", 104.5, 88.0)]),
    );

    // The server even contains the duplicate region 7: the headline check
    // still wins because it runs first
    let outcome = parser.parse_server_file_with_headlines_check("server.xlsx", &local);
    assert_eq!(outcome, ParseOutcome::HeadlineMismatch);
}

#[test]
fn test_duplicate_region_stops_before_rows() {
    let (parser, dir) = test_parser(DataKind::Water);
    // Region page says 7 exists; data rows are malformed on purpose so a
    // row parse would fail loudly if it ever ran
    let server = raw_workbook(&[
        (
            "Data",
            vec![
                vec![t(DataKind::Water.headline())],
                vec![t("garbage"), t("garbage")],
            ],
        ),
        ("Regions", vec![vec![n(3.0)], vec![n(7.0)]]),
    ]);
    write_fixture(dir.path(), "server.xlsx", &server);
    let local = write_fixture(
        dir.path(),
        "region-7.xlsx",
        &local_file_bytes(DataKind::Water, &[(1, "12 River Road", 104.5, 88.0)]),
    );

    let outcome = parser.parse_server_file_with_headlines_check("server.xlsx", &local);
    assert_eq!(outcome, ParseOutcome::DuplicateRegion { region: 7 });
}

#[test]
fn test_empty_local_headline_is_a_mismatch() {
    let (parser, dir) = test_parser(DataKind::Water);
    let server = server_file_bytes(DataKind::Water, &[], &[]);
    write_fixture(dir.path(), "server.xlsx", &server);
    // Local file whose first row starts with a number, not a headline
    let local = write_fixture(
        dir.path(),
        "region-7.xlsx",
        &raw_workbook(&[("Data", vec![vec![n(1.0), t("12 River Road"), n(1.0), n(2.0)]])]),
    );

    let outcome = parser.parse_server_file_with_headlines_check("server.xlsx", &local);
    assert_eq!(outcome, ParseOutcome::HeadlineMismatch);
}

#[test]
fn test_unreadable_local_file_fails_closed_as_mismatch() {
    let (parser, dir) = test_parser(DataKind::Water);
    let server = server_file_bytes(DataKind::Water, &[], &[]);
    write_fixture(dir.path(), "server.xlsx", &server);

    let missing = dir.path().join("region-7.xlsx");
    let outcome = parser.parse_server_file_with_headlines_check("server.xlsx", &missing);
    assert_eq!(outcome, ParseOutcome::HeadlineMismatch);
}

#[test]
fn test_missing_region_index_fails_by_default() {
    let (parser, dir) = test_parser(DataKind::Water);
    let server = raw_workbook(&[("Data", vec![vec![t(DataKind::Water.headline())]])]);
    write_fixture(dir.path(), "server.xlsx", &server);
    let local = write_fixture(
        dir.path(),
        "region-7.xlsx",
        &local_file_bytes(DataKind::Water, &[(1, "12 River Road", 104.5, 88.0)]),
    );

    let outcome = parser.parse_server_file_with_headlines_check("server.xlsx", &local);
    assert!(matches!(outcome, ParseOutcome::Failed { .. }));
}

#[test]
fn test_missing_region_index_permissive_policy() {
    let config = HandlerConfig::default().with_permissive_region_index(true);
    let (parser, dir) = test_parser_with_config(DataKind::Water, config);
    let server = raw_workbook(&[("Data", vec![vec![t(DataKind::Water.headline())]])]);
    write_fixture(dir.path(), "server.xlsx", &server);
    let local = write_fixture(
        dir.path(),
        "region-7.xlsx",
        &local_file_bytes(DataKind::Water, &[(1, "12 River Road", 104.5, 88.0)]),
    );

    let outcome = parser.parse_server_file_with_headlines_check("server.xlsx", &local);
    assert!(outcome.is_success());
    assert_eq!(outcome.server_regions(), Some(&BTreeSet::new()));
}

#[test]
fn test_server_cell_error_reports_coordinate() {
    let (parser, dir) = test_parser(DataKind::Water);
    let server = raw_workbook(&[
        (
            "Data",
            vec![
                vec![t(DataKind::Water.headline())],
                vec![n(1.0), t("1 Dock Road"), n(10.0), n(5.0), n(3.0)],
                vec![n(2.0), t("9 Park Row"), n(20.0), t("oops"), n(3.0)],
            ],
        ),
        ("Regions", vec![vec![n(3.0)]]),
    ]);
    write_fixture(dir.path(), "server.xlsx", &server);
    let local = write_fixture(
        dir.path(),
        "region-7.xlsx",
        &local_file_bytes(DataKind::Water, &[(1, "12 River Road", 104.5, 88.0)]),
    );

    let outcome = parser.parse_server_file_with_headlines_check("server.xlsx", &local);
    assert_eq!(
        outcome,
        ParseOutcome::CellError {
            cell: "D3".to_string()
        }
    );
}

#[test]
fn test_server_only_parse_skips_gating() {
    let (parser, dir) = test_parser(DataKind::Water);
    let server_records = vec![
        water_record(3, 1, "1 Dock Road", 10.0, 5.0),
        water_record(5, 2, "9 Park Row", 20.0, 15.0),
    ];
    let server = server_file_bytes(DataKind::Water, &server_records, &[3, 5]);
    write_fixture(dir.path(), "server.xlsx", &server);

    let outcome = parser.parse_server_file("server.xlsx");
    let records = outcome.records().expect("expected success");
    assert_eq!(records, server_records.as_slice());
    assert!(outcome.server_regions().is_none());
}

#[test]
fn test_missing_server_file_fails() {
    let (parser, _dir) = test_parser(DataKind::Water);
    let outcome = parser.parse_server_file("no-such-file.xlsx");
    assert!(matches!(outcome, ParseOutcome::Failed { .. }));
}
