//! Shared fixtures for integration tests.

#![allow(dead_code, clippy::unwrap_used)]

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

/// Interval tier description used by [`textgrid`].
pub type TierFixture<'a> = (&'a str, Vec<(f64, f64, &'a str)>);

/// Build an interval tier description.
pub fn tier<'a>(name: &'a str, intervals: &[(f64, f64, &'a str)]) -> TierFixture<'a> {
    (name, intervals.to_vec())
}

/// Render a long-format TextGrid with interval tiers.
pub fn textgrid(duration: f64, tiers: &[TierFixture<'_>]) -> String {
    let mut out = String::new();
    writeln!(out, "File type = \"ooTextFile\"").unwrap();
    writeln!(out, "Object class = \"TextGrid\"").unwrap();
    writeln!(out).unwrap();
    writeln!(out, "xmin = 0").unwrap();
    writeln!(out, "xmax = {duration}").unwrap();
    writeln!(out, "tiers? <exists>").unwrap();
    writeln!(out, "size = {}", tiers.len()).unwrap();
    writeln!(out, "item []:").unwrap();
    for (i, (name, intervals)) in tiers.iter().enumerate() {
        writeln!(out, "    item [{}]:", i + 1).unwrap();
        writeln!(out, "        class = \"IntervalTier\"").unwrap();
        writeln!(out, "        name = \"{name}\"").unwrap();
        writeln!(out, "        xmin = 0").unwrap();
        writeln!(out, "        xmax = {duration}").unwrap();
        writeln!(out, "        intervals: size = {}", intervals.len()).unwrap();
        for (j, (xmin, xmax, text)) in intervals.iter().enumerate() {
            writeln!(out, "        intervals [{}]:", j + 1).unwrap();
            writeln!(out, "            xmin = {xmin}").unwrap();
            writeln!(out, "            xmax = {xmax}").unwrap();
            writeln!(out, "            text = \"{text}\"").unwrap();
        }
    }
    out
}

/// Write `<base>.TextGrid` and `<base>.wav` into `dir`.
pub fn write_example(dir: &Path, base: &str, content: &str) -> (PathBuf, PathBuf) {
    let annotation = dir.join(format!("{base}.TextGrid"));
    let audio = dir.join(format!("{base}.wav"));
    std::fs::write(&annotation, content).unwrap();
    std::fs::write(&audio, b"RIFF\0\0\0\0WAVE").unwrap();
    (annotation, audio)
}

/// Example whose only marked interval starts too early.
pub fn too_early() -> String {
    textgrid(
        2.0,
        &[
            tier("words", &[(0.0, 2.0, "akka")]),
            tier("PA", &[(0.0, 0.01, ""), (0.01, 0.3, "pre"), (0.3, 2.0, "")]),
        ],
    )
}

/// Example whose only marked interval is well inside the window.
pub fn well_placed() -> String {
    textgrid(
        2.0,
        &[
            tier("words", &[(0.0, 2.0, "akka")]),
            tier("PA", &[(0.0, 0.1, ""), (0.1, 1.9, "pre"), (1.9, 2.0, "")]),
        ],
    )
}
