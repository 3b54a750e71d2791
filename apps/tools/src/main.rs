use std::{fmt::Write as _, path::PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use roster_core::{load_settings, load_store, RecordStore, RosterController, Summary, TableView};
use shared::domain::{RoleFilter, SortColumn};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "roster-tools", about = "Query the employee roster from the command line")]
struct Cli {
    #[arg(long)]
    config: Option<PathBuf>,
    /// JSON seed file overriding the configured one.
    #[arg(long)]
    seed: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Filtered and sorted roster table.
    List {
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long)]
        role: Option<String>,
        /// name, role or score
        #[arg(long)]
        sort: Option<SortColumn>,
        #[arg(long, requires = "sort")]
        desc: bool,
        #[arg(long)]
        json: bool,
    },
    Summary {
        #[arg(long)]
        json: bool,
    },
    Roles,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut settings = load_settings(cli.config.as_deref())?;
    if let Some(seed) = cli.seed {
        settings.seed_path = Some(seed);
    }

    let filter = EnvFilter::try_new(settings.log_directives())
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let store = load_store(settings.seed_path.as_deref())?;
    print!("{}", run_command(store, cli.command)?);
    Ok(())
}

fn run_command(store: RecordStore, command: Command) -> Result<String> {
    debug!(?command, employees = store.len(), "running roster query");
    let mut controller = RosterController::new(store);

    match command {
        Command::List {
            search,
            role,
            sort,
            desc,
            json,
        } => {
            controller.set_search(search);
            controller.set_role_filter(role.map_or(RoleFilter::All, |r| {
                RoleFilter::from_selection(&r)
            }));
            if let Some(column) = sort {
                controller.sort_by(column);
                if desc {
                    controller.sort_by(column);
                }
            }

            let view = controller.view();
            if json {
                Ok(format!("{}\n", serde_json::to_string_pretty(&view.table.rows)?))
            } else {
                Ok(render_table(&view.table))
            }
        }
        Command::Summary { json } => {
            let summary = controller.summary();
            if json {
                Ok(format!("{}\n", serde_json::to_string_pretty(&summary)?))
            } else {
                Ok(render_summary(&summary))
            }
        }
        Command::Roles => Ok(controller
            .roles()
            .iter()
            .map(|role| format!("{role}\n"))
            .collect()),
    }
}

fn render_table(table: &TableView) -> String {
    let headers: Vec<String> = table
        .headers
        .iter()
        .filter(|h| h.column.is_some())
        .map(|h| h.text())
        .chain(std::iter::once("Tier".to_string()))
        .collect();
    let rows: Vec<[String; 4]> = table
        .rows
        .iter()
        .map(|row| {
            [
                row.name.clone(),
                row.role.clone(),
                row.score.to_string(),
                row.class_name().to_string(),
            ]
        })
        .collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let header_cells: Vec<&str> = headers.iter().map(String::as_str).collect();
    push_line(&mut out, &header_cells, &widths);
    for row in &rows {
        let cells: Vec<&str> = row.iter().map(String::as_str).collect();
        push_line(&mut out, &cells, &widths);
    }
    if rows.is_empty() {
        out.push_str("(no employees match)\n");
    }
    out
}

fn push_line(out: &mut String, cells: &[&str], widths: &[usize]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    let _ = writeln!(out, "{}", line.trim_end());
}

fn render_summary(summary: &Summary) -> String {
    let mut out = String::new();
    for stat in summary.stats() {
        let _ = writeln!(out, "{}: {}", stat.label, stat.value);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(search: &str, role: Option<&str>, sort: Option<SortColumn>, desc: bool) -> String {
        run_command(
            RecordStore::default(),
            Command::List {
                search: search.to_string(),
                role: role.map(str::to_string),
                sort,
                desc,
                json: false,
            },
        )
        .expect("list")
    }

    #[test]
    fn lists_seed_roster_in_insertion_order() {
        let out = list("", None, None, false);
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("Name"));
        assert!(lines[1].starts_with("Alice Johnson"));
        assert!(lines[1].ends_with("high-performance"));
        assert!(lines[4].starts_with("David Mwangi"));
    }

    #[test]
    fn sorts_descending_with_indicator() {
        let out = list("", None, Some(SortColumn::Score), true);
        let lines: Vec<_> = out.lines().collect();
        assert!(lines[0].contains("Score ↓"));
        assert!(lines[1].starts_with("Fatou Kamara"));
        assert!(lines[4].starts_with("David Mwangi"));
    }

    #[test]
    fn filters_by_search_and_role() {
        let out = list("ali", None, None, false);
        assert_eq!(out.lines().count(), 2);
        assert!(out.contains("Alice Johnson"));

        let out = list("", Some("Nobody"), None, false);
        assert!(out.contains("(no employees match)"));
    }

    #[test]
    fn summary_prints_card_values() {
        let out = run_command(RecordStore::default(), Command::Summary { json: false })
            .expect("summary");
        assert_eq!(
            out,
            "Total Employees: 4\nAverage Score: 79.0\nTop Performer: Fatou Kamara\n"
        );
    }

    #[test]
    fn summary_json_includes_top_performer() {
        let out = run_command(RecordStore::default(), Command::Summary { json: true })
            .expect("summary");
        let value: serde_json::Value = serde_json::from_str(&out).expect("json");
        assert_eq!(value["count"], 4);
        assert_eq!(value["top_performer"]["name"], "Fatou Kamara");
    }

    #[test]
    fn roles_are_listed_once() {
        let out = run_command(RecordStore::default(), Command::Roles).expect("roles");
        assert_eq!(out, "Developer\nDesigner\nProject Manager\nQA Engineer\n");
    }

    #[test]
    fn parses_cli_arguments() {
        let cli = Cli::try_parse_from([
            "roster-tools",
            "list",
            "--sort",
            "score",
            "--desc",
            "--role",
            "Developer",
        ])
        .expect("parse");
        match cli.command {
            Command::List {
                sort, desc, role, ..
            } => {
                assert_eq!(sort, Some(SortColumn::Score));
                assert!(desc);
                assert_eq!(role.as_deref(), Some("Developer"));
            }
            other => panic!("unexpected command {other:?}"),
        }
        assert!(Cli::try_parse_from(["roster-tools", "list", "--sort", "salary"]).is_err());
    }

    #[test]
    fn descending_flag_needs_a_sort_column() {
        assert!(Cli::try_parse_from(["roster-tools", "list", "--desc"]).is_err());
        assert!(Cli::try_parse_from(["roster-tools", "list", "--sort", "name", "--desc"]).is_ok());
    }
}
