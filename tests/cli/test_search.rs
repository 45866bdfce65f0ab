// Search command tests

use crate::common::SnapshotDir;
use std::sync::Arc;
use tandem::cli::commands::search::{execute, KindArg, SearchArgs};
use tandem::cli::OutputFormat;
use tandem::core::config::Config;
use tandem::core::services::Services;

fn test_services() -> Arc<Services> {
    Arc::new(Services::new(Config::default()))
}

fn args(query: &str, data: &SnapshotDir) -> SearchArgs {
    SearchArgs {
        query: query.to_string(),
        kind: None,
        data_dir: Some(data.path().to_path_buf()),
        limit: None,
        ids_only: false,
    }
}

#[test]
fn test_search_human_output() {
    let data = SnapshotDir::sample();
    let services = test_services();

    let result = execute(args("blade runner", &data), &services, OutputFormat::Human);
    assert!(result.is_ok());
}

#[test]
fn test_search_json_output() {
    let data = SnapshotDir::sample();
    let services = test_services();

    let result = execute(args("@movie rating>4", &data), &services, OutputFormat::Json);
    assert!(result.is_ok());
}

#[test]
fn test_search_no_results_is_not_an_error() {
    let data = SnapshotDir::sample();
    let services = test_services();

    let result = execute(args("zzzqqq", &data), &services, OutputFormat::Human);
    assert!(result.is_ok());
}

#[test]
fn test_search_blank_query_is_not_an_error() {
    let data = SnapshotDir::sample();
    let services = test_services();

    let result = execute(args("  ", &data), &services, OutputFormat::Human);
    assert!(result.is_ok());
}

#[test]
fn test_search_missing_data_dir_fails() {
    let data = SnapshotDir::sample();
    let services = test_services();

    let mut search_args = args("blade", &data);
    search_args.data_dir = Some(data.path().join("missing"));

    let err = execute(search_args, &services, OutputFormat::Human).unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn test_search_kind_flag() {
    let data = SnapshotDir::sample();
    let services = test_services();

    let mut search_args = args("blade", &data);
    search_args.kind = Some(KindArg::Note);

    // The @note prefix restricts to notes, where "blade" matches nothing
    let result = execute(search_args, &services, OutputFormat::Json);
    assert!(result.is_ok());
}

#[test]
fn test_search_ids_only() {
    let data = SnapshotDir::sample();
    let services = test_services();

    let mut search_args = args("blade", &data);
    search_args.ids_only = true;

    let result = execute(search_args, &services, OutputFormat::Human);
    assert!(result.is_ok());
}

#[test]
fn test_search_oversized_query_is_bad_request() {
    let data = SnapshotDir::sample();
    let mut config = Config::default();
    config.search.max_query_length = 8;
    let services = Arc::new(Services::new(config));

    let err = execute(
        args("a query well past eight bytes", &data),
        &services,
        OutputFormat::Human,
    )
    .unwrap_err();
    assert!(err.is_bad_request());
}
