/// Sort files into `<dest>/<category>/` folders.
///
/// Planning is pure (no filesystem writes) so callers can show a dry run.
/// Applying a plan never overwrites: an existing destination is skipped.
use crate::analysis::classify;
use crate::error::{Error, Result};
use crate::rules::RuleTable;
use serde::Serialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Whether files are copied or moved into place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrganizeMode {
    Copy,
    Move,
}

/// One planned transfer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedMove {
    pub source: PathBuf,
    pub category: String,
    pub destination: PathBuf,
}

/// Outcome counts of [`apply_plan`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OrganizeSummary {
    pub transferred: u64,
    pub skipped: u64,
    pub failed: u64,
}

/// Map every existing file in `paths` to `dest/<category>/<file name>`.
pub fn plan_organization<P: AsRef<Path>>(
    paths: &[P],
    rules: &RuleTable,
    dest: &Path,
) -> Vec<PlannedMove> {
    paths
        .iter()
        .filter_map(|path| {
            let path = path.as_ref();
            let name = path.file_name()?;
            if !path.is_file() {
                debug!("organize: {} is not a file", path.display());
                return None;
            }
            let category = classify(path, rules);
            Some(PlannedMove {
                source: path.to_path_buf(),
                category: category.to_string(),
                destination: dest.join(category).join(name),
            })
        })
        .collect()
}

/// Execute a plan. Per-file failures are logged and counted.
pub fn apply_plan(plan: &[PlannedMove], mode: OrganizeMode) -> OrganizeSummary {
    let mut summary = OrganizeSummary::default();
    for step in plan {
        if step.destination.exists() {
            warn!(
                "organize: {} already exists, leaving {} in place",
                step.destination.display(),
                step.source.display()
            );
            summary.skipped += 1;
            continue;
        }
        match transfer(&step.source, &step.destination, mode) {
            Ok(()) => {
                debug!("organize: {} -> {}", step.source.display(), step.destination.display());
                summary.transferred += 1;
            }
            Err(e) => {
                warn!("organize: {e}");
                summary.failed += 1;
            }
        }
    }
    info!(
        "Organized {} files ({} skipped, {} failed)",
        summary.transferred, summary.skipped, summary.failed
    );
    summary
}

fn transfer(source: &Path, destination: &Path, mode: OrganizeMode) -> Result<()> {
    if let Some(parent) = destination.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }
    match mode {
        OrganizeMode::Copy => {
            fs::copy(source, destination).map_err(|e| Error::io(source, e))?;
        }
        OrganizeMode::Move => move_file(source, destination)?,
    }
    Ok(())
}

/// Rename, falling back to copy + remove across filesystems.
fn move_file(source: &Path, destination: &Path) -> Result<()> {
    match fs::rename(source, destination) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::CrossesDevices => {
            fs::copy(source, destination).map_err(|e| Error::io(source, e))?;
            fs::remove_file(source).map_err(|e| Error::io(source, e))
        }
        Err(e) => Err(Error::io(source, e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup() -> (TempDir, Vec<PathBuf>) {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("src");
        fs::create_dir(&src).unwrap();
        let files = ["main.py", "photo.png", "blob.unknownext"]
            .iter()
            .map(|n| {
                let p = src.join(n);
                fs::write(&p, n).unwrap();
                p
            })
            .collect();
        (tmp, files)
    }

    #[test]
    fn plan_maps_files_to_category_folders() {
        let (tmp, files) = setup();
        let dest = tmp.path().join("out");
        let plan = plan_organization(&files, &RuleTable::default(), &dest);

        let dests: Vec<_> = plan.iter().map(|p| p.destination.clone()).collect();
        assert_eq!(
            dests,
            vec![
                dest.join("Python").join("main.py"),
                dest.join("Images").join("photo.png"),
                dest.join("uncategorized").join("blob.unknownext"),
            ]
        );
        assert!(!dest.exists(), "planning must not touch the filesystem");
    }

    #[test]
    fn copy_keeps_sources() {
        let (tmp, files) = setup();
        let dest = tmp.path().join("out");
        let plan = plan_organization(&files, &RuleTable::default(), &dest);

        let summary = apply_plan(&plan, OrganizeMode::Copy);
        assert_eq!(summary.transferred, 3);
        assert!(files.iter().all(|f| f.exists()));
        assert_eq!(fs::read_to_string(dest.join("Python/main.py")).unwrap(), "main.py");
    }

    #[test]
    fn move_removes_sources() {
        let (tmp, files) = setup();
        let dest = tmp.path().join("out");
        let plan = plan_organization(&files, &RuleTable::default(), &dest);

        let summary = apply_plan(&plan, OrganizeMode::Move);
        assert_eq!(summary.transferred, 3);
        assert!(files.iter().all(|f| !f.exists()));
        assert!(dest.join("Images/photo.png").exists());
    }

    #[test]
    fn existing_destination_is_never_overwritten() {
        let (tmp, files) = setup();
        let dest = tmp.path().join("out");
        fs::create_dir_all(dest.join("Python")).unwrap();
        fs::write(dest.join("Python/main.py"), "keep me").unwrap();

        let plan = plan_organization(&files, &RuleTable::default(), &dest);
        let summary = apply_plan(&plan, OrganizeMode::Copy);
        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.transferred, 2);
        assert_eq!(fs::read_to_string(dest.join("Python/main.py")).unwrap(), "keep me");
    }

    #[test]
    fn vanished_source_counts_as_failure() {
        let (tmp, files) = setup();
        let dest = tmp.path().join("out");
        let plan = plan_organization(&files, &RuleTable::default(), &dest);
        fs::remove_file(&files[0]).unwrap();

        let summary = apply_plan(&plan, OrganizeMode::Copy);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.transferred, 2);
    }
}
