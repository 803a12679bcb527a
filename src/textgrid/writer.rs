//! TextGrid serialization.
//!
//! Always writes the long text format in UTF-8.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::constants::extensions::PENDING_WRITE;
use crate::constants::textgrid::{EXISTS, FILE_TYPE, OBJECT_CLASS};
use crate::error::{Error, Result};

use super::{TextGrid, Tier};

/// Serialize a TextGrid in the Praat long text format.
pub fn write_long_format<W: Write>(grid: &TextGrid, out: &mut W) -> std::io::Result<()> {
    writeln!(out, "File type = \"{FILE_TYPE}\"")?;
    writeln!(out, "Object class = \"{OBJECT_CLASS}\"")?;
    writeln!(out)?;
    writeln!(out, "xmin = {}", grid.xmin)?;
    writeln!(out, "xmax = {}", grid.xmax)?;
    writeln!(out, "tiers? {EXISTS}")?;
    writeln!(out, "size = {}", grid.tiers.len())?;
    writeln!(out, "item []:")?;

    for (index, tier) in grid.tiers.iter().enumerate() {
        writeln!(out, "    item [{}]:", index + 1)?;
        writeln!(out, "        class = \"{}\"", tier.class_name())?;
        writeln!(out, "        name = {}", quote(tier.name()))?;

        match tier {
            Tier::Interval(tier) => {
                writeln!(out, "        xmin = {}", tier.xmin)?;
                writeln!(out, "        xmax = {}", tier.xmax)?;
                writeln!(out, "        intervals: size = {}", tier.intervals.len())?;
                for (i, interval) in tier.intervals.iter().enumerate() {
                    writeln!(out, "        intervals [{}]:", i + 1)?;
                    writeln!(out, "            xmin = {}", interval.xmin)?;
                    writeln!(out, "            xmax = {}", interval.xmax)?;
                    writeln!(out, "            text = {}", quote(&interval.text))?;
                }
            }
            Tier::Point(tier) => {
                writeln!(out, "        xmin = {}", tier.xmin)?;
                writeln!(out, "        xmax = {}", tier.xmax)?;
                writeln!(out, "        points: size = {}", tier.points.len())?;
                for (i, point) in tier.points.iter().enumerate() {
                    writeln!(out, "        points [{}]:", i + 1)?;
                    writeln!(out, "            number = {}", point.time)?;
                    writeln!(out, "            mark = {}", quote(&point.mark))?;
                }
            }
        }
    }

    Ok(())
}

/// Write a TextGrid to `path`, replacing any existing file.
///
/// Content goes to a sibling temporary file first and is renamed over the
/// target once fully flushed, so the original stays intact if writing fails.
///
/// The output is always long-format UTF-8, so short-format or UTF-16 input
/// changes bytes even in tiers whose content is untouched.
pub fn write_textgrid(path: &Path, grid: &TextGrid) -> Result<()> {
    let pending = pending_path(path);
    let write_err = |source: std::io::Error| Error::AnnotationWrite {
        path: path.to_path_buf(),
        source,
    };

    let result = File::create(&pending).and_then(|file| {
        let mut writer = BufWriter::new(file);
        write_long_format(grid, &mut writer)?;
        writer.flush()?;
        writer.get_ref().sync_all()
    });

    if let Err(e) = result {
        let _ = std::fs::remove_file(&pending);
        return Err(write_err(e));
    }

    std::fs::rename(&pending, path).map_err(write_err)
}

/// Temporary path used while rewriting `path`.
fn pending_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".");
    name.push(PENDING_WRITE);
    path.with_file_name(name)
}

fn quote(text: &str) -> String {
    format!("\"{}\"", text.replace('"', "\"\""))
}
