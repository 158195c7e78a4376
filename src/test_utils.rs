use std::fs::create_dir_all;
use std::path::Path as StdPath;

use async_walkdir::WalkDir;
use futures_lite::StreamExt;
use similar::ChangeTag;
use similar::TextDiff;
use tempdir::TempDir;

use crate::Error;
use crate::Item;
use crate::path::normalize_separators;

// Paths, contents and directory flag of the fixture tree
pub(crate) static TEMP_FILES: &[(&str, &str, bool)] = &[
    ("x.txt", "hello", false),
    ("b", "", true),
    ("c", "", true),
    ("c/y.txt", "why", false),
    ("c/d", "", true),
    ("c/d/z.md", "# zed", false),
    ("c/d/empty", "", true),
    ("e", "", true),
    ("e/Notes.TXT", "notes", false),
];

/// Utility structure for managing a temporary test directory and its files.
///
/// The directory is seeded with:
///
/// ```text
/// x.txt
/// b/
/// c/y.txt
/// c/d/z.md
/// c/d/empty/
/// e/Notes.TXT
/// ```
#[derive(Debug)]
pub struct TestRoot {
    /// Root of the temporary test directory.
    pub root: TempDir,
    canonical: String,
}

impl TestRoot {
    /// Creates a new `TestRoot` seeded with the fixture tree.
    pub async fn new() -> Result<Self, Error> {
        let ret = Self::empty().await?;
        for (relative_path, contents, is_dir) in TEMP_FILES {
            if *is_dir {
                ret.create_dir(relative_path)?;
            } else {
                ret.create_file(relative_path, contents)?;
            }
        }
        Ok(ret)
    }

    /// Creates a new, empty `TestRoot`.
    pub async fn empty() -> Result<Self, Error> {
        let root = TempDir::new("rra").map_err(|e| Error::read("temporary directory", e))?;
        let canonical = tokio::fs::canonicalize(root.path())
            .await
            .map_err(|e| Error::read(root.path().to_string_lossy(), e))?;
        Ok(Self {
            canonical: normalize_separators(&canonical.to_string_lossy()),
            root,
        })
    }

    /// Path of the temporary directory as created.
    pub fn path(&self) -> &StdPath {
        self.root.path()
    }

    /// Canonical, slash separated path of the root.
    pub fn canonical(&self) -> String {
        self.canonical.clone()
    }

    /// Full name a listing reports for `relative_path` (slash separated).
    pub fn full_name(&self, relative_path: &str) -> String {
        format!("{}/{relative_path}", self.canonical)
    }

    /// Creates a file, and its parents, with `content`.
    pub fn create_file(&self, relative_path: &str, content: &str) -> Result<(), Error> {
        let full_path = self.root.path().join(relative_path);
        if let Some(parent) = full_path.parent() {
            create_dir_all(parent).map_err(|e| Error::read(parent.to_string_lossy(), e))?;
        }
        std::fs::write(&full_path, content).map_err(|e| Error::read(relative_path, e))
    }

    /// Creates a directory and its parents.
    pub fn create_dir(&self, relative_path: &str) -> Result<(), Error> {
        create_dir_all(self.root.path().join(relative_path))
            .map_err(|e| Error::read(relative_path, e))
    }

    /// Full names of all files on disk, sorted.
    ///
    /// Walks the tree independently of the crate's own traversal.
    pub async fn files_on_disk(&self) -> Result<Vec<String>, Error> {
        let mut files = vec![];
        let mut entries = WalkDir::new(self.root.path());
        while let Some(entry) = entries.next().await {
            let entry = entry.map_err(|e| Error::Read {
                what: "reading directory entry".into(),
                how: e.to_string(),
            })?;
            let file_type = entry
                .file_type()
                .await
                .map_err(|e| Error::Read {
                    what: entry.path().to_string_lossy().to_string(),
                    how: e.to_string(),
                })?;
            if file_type.is_dir() {
                continue;
            }
            let path = entry.path();
            let relative = path
                .strip_prefix(self.root.path())
                .map_err(|e| Error::InvalidArgument(e.to_string()))?;
            files.push(self.full_name(&normalize_separators(&relative.to_string_lossy())));
        }
        files.sort();
        Ok(files)
    }

    /// Returns none if the files in `items` are exactly the files on disk,
    /// or a string containing a diff of the two lists.
    pub async fn compare(&self, items: &[Item]) -> Result<Option<String>, Error> {
        let mut listed: Vec<String> = items
            .iter()
            .filter(|i| !i.is_dir())
            .map(|i| i.full_name.clone())
            .collect();
        listed.sort();
        let on_disk = self.files_on_disk().await?.join("\n");
        let listed = listed.join("\n");

        let diff = TextDiff::from_lines(&on_disk, &listed);
        let mut diffs = String::new();
        for change in diff.iter_all_changes() {
            let sign = match change.tag() {
                ChangeTag::Delete => "-",
                ChangeTag::Insert => "+",
                ChangeTag::Equal => continue,
            };
            diffs.push_str(&format!("{}{}", sign, change));
        }
        if diffs.is_empty() {
            Ok(None)
        } else {
            Ok(Some(diffs))
        }
    }
}
