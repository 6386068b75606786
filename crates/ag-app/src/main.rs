//! Terminal driver for the catalog grid
//!
//! Plays the role of the rendering collaborator: reads grid events from
//! stdin, feeds them to the controller and prints the resulting snapshot.
//! Run with `--demo` to use the offline in-memory catalog instead of the
//! live artworks API.

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use ag_core::page_count;
use ag_data::{ArticSource, CatalogSource, MemorySource};
use ag_grid::{GridController, GridSnapshot};

const HELP: &str = "\
commands:
  n | next          next page
  p | prev          previous page
  g <page>          go to page (0-based)
  pick <row> ...    select exactly these row positions on this page
  all               select every row on this page
  none              clear this page's selection
  sel <count>       select the first <count> rows starting at this page
  show              reprint the current page
  h | help          this message
  q | quit          exit";

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let demo_mode = std::env::args().any(|a| a == "--demo");
    let source: Arc<dyn CatalogSource> = if demo_mode {
        info!("running against the in-memory demo catalog");
        Arc::new(MemorySource::seeded(125))
    } else {
        Arc::new(ArticSource::new())
    };

    let grid = GridController::new(source);
    grid.refresh().await;
    print_snapshot(&grid.snapshot());
    println!("{HELP}");

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let mut parts = line.split_whitespace();
        let Some(command) = parts.next() else {
            continue;
        };

        match command {
            "n" | "next" => grid.next_page().await,
            "p" | "prev" => grid.previous_page().await,
            "g" => {
                if let Some(page) = parts.next().and_then(|s| s.parse().ok()) {
                    grid.page_changed(page).await;
                } else {
                    println!("usage: g <page>");
                    continue;
                }
            }
            "pick" => {
                let snapshot = grid.snapshot();
                let selected: Vec<_> = parts
                    .filter_map(|s| s.parse::<usize>().ok())
                    .filter_map(|row| snapshot.records.get(row).cloned())
                    .collect();
                grid.selection_changed(&selected);
            }
            "all" => grid.select_all_toggled(true),
            "none" => grid.select_all_toggled(false),
            "sel" => {
                let count = parts.next().unwrap_or("");
                grid.bulk_select(count);
            }
            "show" => {}
            "h" | "help" => {
                println!("{HELP}");
                continue;
            }
            "q" | "quit" => break,
            other => {
                println!("unknown command {other:?}, try 'help'");
                continue;
            }
        }

        print_snapshot(&grid.snapshot());
    }

    Ok(())
}

fn print_snapshot(snapshot: &GridSnapshot) {
    let pages = page_count(snapshot.total, ag_core::PAGE_SIZE);
    println!(
        "page {}/{} | {} records total | {} selected here{}",
        snapshot.page,
        pages.saturating_sub(1),
        snapshot.total,
        snapshot.selected.len(),
        if snapshot.select_all { " | ALL" } else { "" },
    );

    let selected_ids: Vec<u64> = snapshot.selected.iter().map(|r| r.id).collect();
    for (row, record) in snapshot.records.iter().enumerate() {
        let mark = if selected_ids.contains(&record.id) {
            "x"
        } else {
            " "
        };
        println!(
            "  [{mark}] {row:>2}  {:<50} {}",
            record.display_title(),
            record.artist_display.as_deref().unwrap_or("-"),
        );
    }
    if snapshot.loading {
        println!("  (loading)");
    }
}
