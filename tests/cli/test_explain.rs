// Explain command tests

use tandem::cli::commands::explain::{execute, ExplainArgs};
use tandem::cli::OutputFormat;

fn args(query: &str) -> ExplainArgs {
    ExplainArgs {
        query: query.to_string(),
    }
}

#[test]
fn test_explain_full_syntax() {
    let result = execute(
        args("@movie status:finished rating>=4 \"blade\" alien OR aliens -spoiler"),
        OutputFormat::Human,
    );
    assert!(result.is_ok());
}

#[test]
fn test_explain_json_output() {
    let result = execute(args("@place visited:yes ramen"), OutputFormat::Json);
    assert!(result.is_ok());
}

#[test]
fn test_explain_empty_query() {
    let result = execute(args(""), OutputFormat::Human);
    assert!(result.is_ok());
}

#[test]
fn test_explain_malformed_query_never_fails() {
    for raw in ["\"unterminated", "rating>", ":::", "@", "- NOT"] {
        assert!(execute(args(raw), OutputFormat::Human).is_ok(), "failed on {raw}");
    }
}
