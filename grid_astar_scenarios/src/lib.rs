use csv::ReaderBuilder;
use grid_astar::{grid::Grid, GridError, Point};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScenarioError {
    #[error("Could not read {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Could not parse scenario record: {0}")]
    Csv(#[from] csv::Error),
    #[error("Malformed map header line {0:?}")]
    Header(String),
    #[error("Map has {found} rows, expected {expected}")]
    MissingRows { expected: usize, found: usize },
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error("No benchmark named {0}")]
    UnknownBenchmark(String),
}

pub type Result<T> = std::result::Result<T, ScenarioError>;

#[allow(unused)]
#[derive(Debug, Deserialize)]
struct Record {
    bucket: u32,
    file_name: String,
    w: u32,
    h: u32,
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
    distance: f64,
}

/// A start and goal pair with the optimal octile distance between them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scenario {
    pub start: Point,
    pub goal: Point,
    pub distance: f64,
}

fn root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).to_path_buf()
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| ScenarioError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses a map in the Moving AI format. Only `.`, `G` and `S` are passable.
pub fn parse_map(map_str: &str) -> Result<Grid> {
    let lines: Vec<&str> = map_str.lines().collect();
    let parse_line = |i: usize, key: &str| -> Result<usize> {
        let line = lines.get(i).copied().unwrap_or_default();
        line.split_once(' ')
            .filter(|(k, _)| *k == key)
            .and_then(|(_, v)| v.trim().parse::<usize>().ok())
            .ok_or_else(|| ScenarioError::Header(line.to_owned()))
    };
    let h = parse_line(1, "height")?;
    let w = parse_line(2, "width")?;

    let offset = 4;
    let rows = &lines[offset.min(lines.len())..];
    if rows.len() < h {
        return Err(ScenarioError::MissingRows {
            expected: h,
            found: rows.len(),
        });
    }
    let mut matrix = vec![vec![1u8; h]; w];
    for (y, row) in rows.iter().take(h).enumerate() {
        for (x, tile) in row.bytes().take(w).enumerate() {
            matrix[x][y] = u8::from(![b'.', b'G', b'S'].contains(&tile));
        }
    }
    Ok(Grid::from_matrix(&matrix)?)
}

/// Parses a `.scen` file: a version line followed by tab-separated records.
pub fn parse_scenarios(scen_str: &str) -> Result<Vec<Scenario>> {
    let remaining_data = scen_str.lines().skip(1).collect::<Vec<_>>().join("\n");
    let mut csv_reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .from_reader(remaining_data.as_bytes());
    let mut scenarios = Vec::new();
    for result in csv_reader.deserialize() {
        let record: Record = result?;
        scenarios.push(Scenario {
            start: Point::new(record.x1, record.y1),
            goal: Point::new(record.x2, record.y2),
            distance: record.distance,
        });
    }
    Ok(scenarios)
}

pub fn load_map(name: &str) -> Result<Grid> {
    parse_map(&read(&root().join("maps").join(format!("{}.map", name)))?)
}

pub fn load_scenarios(name: &str) -> Result<Vec<Scenario>> {
    parse_scenarios(&read(
        &root().join("scenarios").join(format!("{}.map.scen", name)),
    )?)
}

/// Names of all bundled maps, sorted.
pub fn get_benchmark_names() -> Vec<String> {
    let maps = root().join("maps");
    let mut names: Vec<String> = WalkDir::new(&maps)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| entry.path().extension().is_some_and(|ext| ext == "map"))
        .filter_map(|entry| {
            entry
                .path()
                .file_stem()
                .and_then(|stem| stem.to_str())
                .map(str::to_owned)
        })
        .collect();
    names.sort();
    names
}

pub fn get_benchmark(name: &str) -> Result<(Grid, Vec<Scenario>)> {
    if !get_benchmark_names().iter().any(|n| n == name) {
        return Err(ScenarioError::UnknownBenchmark(name.to_owned()));
    }
    Ok((load_map(name)?, load_scenarios(name)?))
}
