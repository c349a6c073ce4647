/// Report writers: JSON, CSV and a plain-text summary.
use crate::analysis::{DuplicateGroup, NamePattern};
use crate::error::Result;
use crate::model::size::{format_average_size, format_count, format_size};
use crate::model::{DirectoryStatistics, FileInfo};
use std::fmt::Write as _;
use std::io::Write;

/// Pretty-printed JSON of any serialisable report.
pub fn write_json<T: serde::Serialize, W: Write>(report: &T, writer: W) -> Result<()> {
    serde_json::to_writer_pretty(writer, report)?;
    Ok(())
}

/// One CSV row per file, with a header row.
pub fn write_files_csv<W: Write>(files: &[FileInfo], writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for file in files {
        wtr.serialize(file)?;
    }
    wtr.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Human-readable summary of a statistics report.
pub fn render_text(stats: &DirectoryStatistics) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_summary(&mut out, stats);
    out
}

fn write_summary(out: &mut String, stats: &DirectoryStatistics) -> std::fmt::Result {
    writeln!(out, "Files:          {}", format_count(stats.total_files))?;
    writeln!(out, "Total size:     {}", format_size(stats.total_size))?;
    writeln!(out, "Total lines:    {}", format_count(stats.total_lines))?;
    writeln!(out, "Average size:   {}", format_average_size(stats.average_size))?;
    writeln!(out, "Average lines:  {:.1}", stats.average_lines)?;

    for (label, file) in [
        ("Largest file", &stats.largest_file),
        ("Newest file", &stats.newest_file),
        ("Oldest file", &stats.oldest_file),
    ] {
        if let Some(f) = file {
            writeln!(
                out,
                "{label:<15} {} ({}, {})",
                f.path.display(),
                format_size(f.size),
                f.modified.format("%Y-%m-%d %H:%M")
            )?;
        }
    }

    if !stats.language_stats.is_empty() {
        writeln!(out, "\nLanguages:")?;
        let mut langs: Vec<_> = stats.language_stats.iter().collect();
        langs.sort_by(|a, b| b.1.file_count.cmp(&a.1.file_count).then_with(|| a.0.cmp(b.0)));
        for (name, lang) in langs {
            writeln!(
                out,
                "  {name:<12} {:>6} files {:>10} {:>8} lines  [{}]",
                format_count(lang.file_count),
                format_size(lang.total_size),
                format_count(lang.total_lines),
                lang.extensions.join(", ")
            )?;
        }
    }

    if !stats.extensions.is_empty() {
        writeln!(out, "\nExtensions:")?;
        for (ext, count) in &stats.extensions {
            let ext = if ext.is_empty() { "(none)" } else { ext.as_str() };
            writeln!(out, "  {ext:<12} {count}")?;
        }
    }

    if !stats.largest_files.is_empty() {
        writeln!(out, "\nLargest files:")?;
        for f in &stats.largest_files {
            writeln!(out, "  {:>10}  {}", format_size(f.size), f.path.display())?;
        }
    }
    Ok(())
}

/// Text listing of duplicate groups.
pub fn render_duplicates(groups: &[DuplicateGroup]) -> String {
    let mut out = String::new();
    for g in groups {
        let _ = writeln!(out, "{}", g.label());
        for f in &g.files {
            let _ = writeln!(out, "  {}", f.display());
        }
    }
    out
}

/// Text listing of naming patterns.
pub fn render_patterns(patterns: &[NamePattern]) -> String {
    let mut out = String::new();
    for p in patterns {
        let _ = writeln!(out, "{} ({} files)", p.key(), p.files.len());
        for f in &p.files {
            let _ = writeln!(out, "  {}", f.display());
        }
    }
    out
}
