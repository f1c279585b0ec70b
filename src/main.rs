//! Polyomino catalog runner (default binary).
//!
//! Generates the catalog, prints one summary line per rank and, when
//! `POLYOMINO_SHOW` is set, draws every shape grouped by rank.

use anyhow::{Context, Result};
use crossterm::tty::IsTty;

use polyomino_catalog::cli::{count_mismatches, init_tracing, summary_lines, CliConfig};
use polyomino_catalog::core::ShapeGenerator;
use polyomino_catalog::term::{print_frame, ShapeSheet};

fn main() -> Result<()> {
    init_tracing();

    let config = CliConfig::from_env().context("invalid configuration")?;
    tracing::info!(
        max_rank = config.generator.max_rank(),
        show = config.show,
        "generating catalog"
    );

    let catalog = ShapeGenerator::new(config.generator).generate();

    for line in summary_lines(&catalog) {
        println!("{line}");
    }
    for stats in count_mismatches(&catalog) {
        tracing::warn!(
            rank = stats.rank,
            entries = stats.entries,
            distinct_ids = stats.distinct_ids,
            "counts differ from the known polyomino enumeration"
        );
    }

    if config.show {
        let stdout = std::io::stdout();
        let color = stdout.is_tty();
        let (width, _) = crossterm::terminal::size().unwrap_or((80, 24));

        println!();
        let fb = ShapeSheet::default()
            .with_rank(config.rank)
            .render(&catalog, width);
        print_frame(&fb, color)?;
    }

    Ok(())
}
