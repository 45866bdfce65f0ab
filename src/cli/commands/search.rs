//! Search command - query the library

use crate::cli::output::{colors, format_duration, format_relative_time_colored};
use crate::cli::OutputFormat;
use crate::core::error::Result;
use crate::core::search::{has_search_criteria, parse_query};
use crate::core::services::Services;
use crate::core::store::Library;
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;

/// Quick-filter entity kinds (mirrors the app's filter buttons)
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum KindArg {
    Movie,
    Tv,
    Game,
    Note,
    Place,
}

impl KindArg {
    fn tag(self) -> &'static str {
        match self {
            KindArg::Movie => "movie",
            KindArg::Tv => "tv",
            KindArg::Game => "game",
            KindArg::Note => "note",
            KindArg::Place => "place",
        }
    }
}

/// Arguments for the search command
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Search query (type tags, field filters, phrases, OR, -exclusions)
    pub query: String,

    /// Restrict to one entity kind (shorthand for a leading @tag)
    #[arg(long, short = 'K', value_enum)]
    pub kind: Option<KindArg>,

    /// Data directory holding the collection snapshots
    #[arg(long, short = 'd')]
    pub data_dir: Option<PathBuf>,

    /// Maximum number of results to display (1-50)
    #[arg(long, short = 'k')]
    pub limit: Option<usize>,

    /// Only show entity ids (no titles or snippets)
    #[arg(long)]
    pub ids_only: bool,
}

/// Execute the search command
pub fn execute(args: SearchArgs, services: &Arc<Services>, format: OutputFormat) -> Result<()> {
    let data_dir = args
        .data_dir
        .clone()
        .unwrap_or_else(|| services.config.data.dir.clone());
    let library = Library::load(&data_dir)?;

    // The quick filter is sugar for ordinary query text, exactly like
    // the filter buttons in the app
    let raw_query = match args.kind {
        Some(kind) => format!("@{} {}", kind.tag(), args.query),
        None => args.query.clone(),
    };

    let response = services.search.search(&raw_query, &library, args.limit)?;

    match format {
        OutputFormat::Human => {
            if response.results.is_empty() {
                if !has_search_criteria(&parse_query(&raw_query)) {
                    println!("Nothing to search for - try a word, a @type tag, or a field filter");
                } else {
                    println!("No results found for '{}'", colors::label(&raw_query));
                }
            } else if args.ids_only {
                for result in &response.results {
                    println!("{}", result.id);
                }
            } else {
                println!(
                    "Found {} result(s) in {}:\n",
                    colors::number(&response.count.to_string()),
                    format_duration(response.duration_ms as f64 / 1000.0)
                );

                for result in &response.results {
                    let mut line = format!(
                        "[{}] {} {} {}",
                        colors::rank(&result.rank.to_string()),
                        colors::entity(result.entity_type.as_str()),
                        colors::title(&result.title),
                        colors::dim(&format!("(score: {})", result.score))
                    );
                    if let Some(created_at) = &result.created_at {
                        line.push(' ');
                        line.push_str(&format_relative_time_colored(created_at));
                    }
                    println!("{line}");

                    if let Some(snippet) = &result.snippet {
                        for text_line in snippet.lines().take(3) {
                            println!("    {}", colors::dim(text_line));
                        }
                    }
                    println!();
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
