//! JSON report files: tab-indented, keys sorted, non-ASCII left unescaped.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

/// Serialize `value` with one tab per indentation level.
pub fn to_tab_indented_json<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"\t");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    Ok(buf)
}

/// Write data to a temp sibling, then rename it over `target`.
fn atomic_write(target: &Path, data: &[u8]) -> Result<()> {
    if let Some(parent) = target.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let tmp_path = target.with_extension("tmp");
    let written = File::create(&tmp_path).and_then(|file| {
        let mut writer = BufWriter::new(file);
        writer.write_all(data)?;
        writer.flush()
    });
    if let Err(e) = written {
        std::fs::remove_file(&tmp_path).ok();
        return Err(e).with_context(|| format!("Failed to write {}", tmp_path.display()));
    }
    std::fs::rename(&tmp_path, target)
        .with_context(|| format!("Failed to move report into place: {}", target.display()))?;
    Ok(())
}

/// Write one report map as a JSON object.
///
/// Pass a `BTreeMap` to get lexicographically sorted keys.
pub fn write_report<T: Serialize + ?Sized>(path: &Path, report: &T) -> Result<()> {
    log::info!("Writing {}", path.display());
    let json = to_tab_indented_json(report)?;
    atomic_write(path, &json)
}
