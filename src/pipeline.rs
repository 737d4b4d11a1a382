//! The terminal pipeline stage: load the roster, chart every configured
//! group, and write the similarity reports.

use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::aggregate;
use crate::cli::Args;
use crate::config::{AppConfig, ChartConfig};
use crate::error::{Error, Result};
use crate::roster::{Record, Roster};
use crate::similarity;
use crate::starburst::{self, ChartSpec};

/// Runs the whole pipeline once. Every group yields an unweighted and a
/// weighted starburst; the similarity engine runs once over the full
/// roster. Outputs overwrite whatever a previous run left behind.
pub fn run(args: &Args, cfg: &AppConfig) -> Result<()> {
    fs::create_dir_all(&args.out_dir).map_err(|source| Error::Write {
        path: args.out_dir.clone(),
        source,
    })?;

    let roster = Roster::load(&args.input, cfg.weighting)?;
    info!(records = roster.records().len(), "roster loaded");

    render_group(
        &args.out_dir,
        &cfg.chart,
        "collective",
        "Collective",
        &roster.all(),
    )?;
    for group in &cfg.groups {
        let subset = roster.subset(&group.last_names);
        if subset.is_empty() {
            warn!(
                group = %group.name,
                "no roster records match this group; charts will be empty"
            );
        }
        render_group(&args.out_dir, &cfg.chart, &group.name, &group.title, &subset)?;
    }

    let rows = similarity::pairwise(&roster);
    let best = similarity::best_matches(&rows);
    write_artifact(
        &args.out_dir.join("similarity.csv"),
        similarity::pairwise_csv(&rows),
    )?;
    write_artifact(
        &args.out_dir.join("max_similarity.csv"),
        similarity::best_match_csv(&best),
    )?;
    info!(pairs = rows.len(), people = best.len(), "similarity written");

    Ok(())
}

fn render_group(
    out_dir: &Path,
    chart_cfg: &ChartConfig,
    name: &str,
    title: &str,
    records: &[&Record],
) -> Result<()> {
    let counts = aggregate::counts(records);
    let spec = ChartSpec::from_aggregate(format!("{title} CliftonStrengths Starburst"), &counts);
    let path = out_dir.join(format!("{name}-starburst.png"));
    starburst::render(&path, &spec, chart_cfg)?;
    info!(chart = %path.display(), "starburst rendered");

    let weighted = aggregate::weighted(records);
    let spec = ChartSpec::from_aggregate(
        format!("{title} CliftonStrengths Weighted Starburst"),
        &weighted,
    );
    let path = out_dir.join(format!("{name}-weighted-starburst.png"));
    starburst::render(&path, &spec, chart_cfg)?;
    info!(chart = %path.display(), "weighted starburst rendered");

    Ok(())
}

fn write_artifact(path: &Path, contents: String) -> Result<()> {
    fs::write(path, contents).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })
}
