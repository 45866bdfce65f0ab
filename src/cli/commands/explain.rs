//! Explain command - show how a query string is parsed

use crate::cli::output::colors;
use crate::cli::OutputFormat;
use crate::core::error::Result;
use crate::core::search::{filter_summary, has_search_criteria, parse_query};
use clap::Args;
use serde::Serialize;

/// Arguments for the explain command
#[derive(Args, Debug)]
pub struct ExplainArgs {
    /// Query string to parse
    pub query: String,
}

/// Parsed-query breakdown
#[derive(Debug, Serialize)]
pub struct ExplainOutput {
    pub query: String,
    pub has_criteria: bool,
    pub filters: Vec<String>,
    pub term_groups: Vec<Vec<String>>,
    pub excluded_terms: Vec<String>,
}

/// Execute the explain command
pub fn execute(args: ExplainArgs, format: OutputFormat) -> Result<()> {
    let parsed = parse_query(&args.query);

    let output = ExplainOutput {
        query: args.query.clone(),
        has_criteria: has_search_criteria(&parsed),
        filters: filter_summary(&parsed),
        term_groups: parsed.term_groups().to_vec(),
        excluded_terms: parsed.excluded_terms().to_vec(),
    };

    match format {
        OutputFormat::Human => {
            println!("Query: {}", colors::label(&output.query));
            println!(
                "Search criteria: {}",
                if output.has_criteria { "yes" } else { "no" }
            );

            if !output.filters.is_empty() {
                println!("Filters:");
                for chip in &output.filters {
                    println!("  {}", colors::chip(chip));
                }
            }

            if !output.term_groups.is_empty() {
                println!("Terms:");
                for group in &output.term_groups {
                    println!("  {}", group.join(" OR "));
                }
            }

            if !output.excluded_terms.is_empty() {
                println!("Excluded:");
                for term in &output.excluded_terms {
                    println!("  -{term}");
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
