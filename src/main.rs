use std::error::Error;
use std::path::{Path, PathBuf};

use clap::Parser;

use avroute::nasr::{self, FileFormat};

#[derive(Debug, thiserror::Error)]
#[error("{0}: {1}")]
struct DataLoadError(PathBuf, #[source] nasr::Error);

#[derive(Parser)]
struct Cli {
    /// Directory with NASR subscriber files (FIX_BASE.csv, NAV_BASE.csv,
    /// APT_BASE.csv, AWY_SEG.csv; each may also be gzipped as NAME.csv.gz)
    data_dir: PathBuf,

    /// Identifier of the start waypoint
    start: String,

    /// Identifier of the end waypoint
    end: String,

    /// Maximum number of waypoint expansions during the search
    #[arg(long, default_value_t = avroute::DEFAULT_STEP_LIMIT)]
    step_limit: usize,
}

pub fn main() -> Result<(), Box<dyn Error>> {
    colog::init();
    let cli = Cli::parse();

    let g = load_graph(&cli.data_dir)?;

    let route = avroute::find_route(&g, &cli.start, &cli.end, cli.step_limit)?;

    if route.is_empty() {
        println!("NO PATH FOUND.");
    } else {
        println!("RECOMMENDED FLIGHT PLAN:");
        println!("{}", route.join(" "));
    }

    Ok(())
}

fn load_graph(dir: &Path) -> Result<avroute::AirwayGraph, DataLoadError> {
    let mut g = avroute::AirwayGraph::default();

    load_file(&mut g, dir, "FIX_BASE.csv", |g, f, p| {
        nasr::add_fixes_from_file(g, f, p)
    })?;
    load_file(&mut g, dir, "NAV_BASE.csv", |g, f, p| {
        nasr::add_navaids_from_file(g, f, p)
    })?;
    load_file(&mut g, dir, "APT_BASE.csv", |g, f, p| {
        nasr::add_airports_from_file(g, f, p)
    })?;
    load_file(&mut g, dir, "AWY_SEG.csv", |g, f, p| {
        nasr::add_airway_segments_from_file(g, f, p)
    })?;

    Ok(g)
}

/// Loads a single NASR file into the graph, preferring the plain CSV and
/// falling back to its gzipped variant. A file missing entirely is skipped
/// with a warning, so a partial NASR subscription still produces a graph.
fn load_file<F>(
    g: &mut avroute::AirwayGraph,
    dir: &Path,
    name: &str,
    load: F,
) -> Result<(), DataLoadError>
where
    F: Fn(&mut avroute::AirwayGraph, FileFormat, &Path) -> Result<(), nasr::Error>,
{
    let plain = dir.join(name);
    if plain.is_file() {
        return load(g, FileFormat::Csv, &plain).map_err(|e| DataLoadError(plain, e));
    }

    let gz = dir.join(format!("{name}.gz"));
    if gz.is_file() {
        return load(g, FileFormat::CsvGz, &gz).map_err(|e| DataLoadError(gz, e));
    }

    log::warn!("{} not found in {}, skipping", name, dir.display());
    Ok(())
}
