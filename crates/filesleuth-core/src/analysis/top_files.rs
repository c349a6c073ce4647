/// Top-N extraction over scanned files.
///
/// Sorting is stable and descending: files with equal keys keep their input
/// order.
use crate::model::FileInfo;
use std::cmp::Reverse;

/// Up to `n` files, largest first.
pub fn largest_files(files: &[FileInfo], n: usize) -> Vec<FileInfo> {
    top_by(files, n, |f| f.size)
}

/// Up to `n` files, most recently modified first.
pub fn newest_files(files: &[FileInfo], n: usize) -> Vec<FileInfo> {
    top_by(files, n, |f| f.modified)
}

fn top_by<K: Ord>(files: &[FileInfo], n: usize, key: impl Fn(&FileInfo) -> K) -> Vec<FileInfo> {
    if n == 0 || files.is_empty() {
        return Vec::new();
    }

    let mut order: Vec<&FileInfo> = files.iter().collect();
    order.sort_by_key(|f| Reverse(key(f)));
    order.into_iter().take(n).cloned().collect()
}
