//! Command-line interface
//!
//! Subcommands: the interactive find panel, a headless one-shot search,
//! and the shot-list CSV export.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};

use crate::collect::{CollectReach, Focused, collect_shots};
use crate::config::Config;
use crate::error::FindError;
use crate::export::ShotListExporter;
use crate::project::{Project, load_project};
use crate::search::{MatchMode, Query, SearchScope, find_matches};

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Find shots and export shot lists from project snapshots"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Open the interactive find panel
    Find {
        /// Project snapshot files (JSON)
        #[arg(required = true)]
        projects: Vec<PathBuf>,
        /// Name of the sequence to focus initially
        #[arg(long)]
        sequence: Option<String>,
    },
    /// Search once and print matching shots
    Search {
        /// Text or regular expression to search for
        pattern: String,
        /// Project snapshot files (JSON)
        #[arg(required = true)]
        projects: Vec<PathBuf>,
        /// Treat the pattern as a regular expression
        #[arg(short = 'e', long)]
        regex: bool,
        /// Case-insensitive matching
        #[arg(short, long)]
        ignore_case: bool,
        /// Which shot fields to search
        #[arg(short, long, value_enum, default_value = "all")]
        scope: ScopeArg,
    },
    /// Export a sequence's shot list as CSV
    Export {
        /// Project snapshot file (JSON)
        project: PathBuf,
        /// Sequence to export (default: the project's first sequence)
        #[arg(long)]
        sequence: Option<String>,
        /// Output file (default: <sequence>.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, Default)]
pub enum ScopeArg {
    Names,
    Metadata,
    Tags,
    #[default]
    All,
}

impl From<ScopeArg> for SearchScope {
    fn from(scope: ScopeArg) -> Self {
        match scope {
            ScopeArg::Names => SearchScope::Names,
            ScopeArg::Metadata => SearchScope::Metadata,
            ScopeArg::Tags => SearchScope::TagNotes,
            ScopeArg::All => SearchScope::All,
        }
    }
}

pub fn load_projects(paths: &[PathBuf]) -> Result<Vec<Project>, FindError> {
    paths.iter().map(|p| load_project(p)).collect()
}

/// Find the position of a named sequence among the loaded projects.
pub fn locate_sequence(projects: &[Project], name: &str) -> Option<Focused> {
    projects.iter().enumerate().find_map(|(project, p)| {
        p.sequences()
            .iter()
            .position(|s| s.name == name)
            .map(|sequence| Focused { project, sequence })
    })
}

/// Run a one-shot search and print matches to stdout.
pub fn run_search_command(
    pattern: &str,
    paths: &[PathBuf],
    regex: bool,
    ignore_case: bool,
    scope: ScopeArg,
) -> Result<(), FindError> {
    let projects = load_projects(paths)?;
    let records = collect_shots(
        &projects,
        Focused {
            project: 0,
            sequence: 0,
        },
        CollectReach::All,
    );

    let query = Query {
        pattern: pattern.to_string(),
        mode: if regex {
            MatchMode::Regex
        } else {
            MatchMode::Plain
        },
        case_sensitive: !ignore_case,
        scope: scope.into(),
    };

    let matches = find_matches(&records, &query)?;
    for &index in &matches {
        let record = &records[index];
        println!(
            "{}/{}/{}: {} ({})",
            record.project, record.sequence, record.track, record.shot_name, record.clip_name
        );
    }
    eprintln!("{} match(es)", matches.len());

    Ok(())
}

/// Export one sequence's shot list; returns the path written.
pub fn run_export_command(
    project_path: &Path,
    sequence_name: Option<&str>,
    output: Option<&Path>,
    config: &Config,
) -> Result<PathBuf, FindError> {
    let project = load_project(project_path)?;

    let sequence = match sequence_name {
        Some(name) => project.sequence(name).ok_or_else(|| {
            FindError::ProjectLoad(format!(
                "project '{}' has no sequence named '{}'",
                project.name, name
            ))
        })?,
        None => project
            .sequences()
            .first()
            .copied()
            .ok_or_else(|| {
                FindError::ProjectLoad(format!("project '{}' has no sequences", project.name))
            })?,
    };

    let default_output = PathBuf::from(format!("{}.csv", sequence.name));
    let output = output.map(Path::to_path_buf).unwrap_or(default_output);

    ShotListExporter::new(&project, sequence, &config.export).write_to(&output)
}
