use std::fs::Metadata;
use std::path::Path as StdPath;
use std::time::SystemTime;

#[cfg(feature = "json_schema")]
use schemars::JsonSchema;
use serde::Deserialize;
use serde::Serialize;

use crate::errors::Error;
use crate::utils::format_system_time;
use crate::utils::parse_system_time;

/// Represents the metadata of a file or directory.
///
/// Times are in RFC 3339 - Z format, for example
/// "2018-01-26T18:30:09.453Z".
#[cfg_attr(feature = "json_schema", derive(JsonSchema))]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Hash, Eq)]
pub struct FileStat {
    /// The size of the file in bytes. For directories, this may be zero or
    /// implementation-defined.
    pub size: u64,
    /// The last modification time.
    pub mtime: String,
    /// The last access time, if the platform records it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub atime: Option<String>,
    /// The creation time, if the platform records it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthtime: Option<String>,
    /// Whether this entry is a directory.
    pub is_directory: bool,
    /// Whether this entry is a regular file.
    pub is_file: bool,
    /// Whether write permission is missing.
    pub readonly: bool,
    /// Device id (Unix only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dev: Option<u64>,
    /// Inode number (Unix only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ino: Option<u64>,
    /// Permission and file type bits (Unix only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<u32>,
    /// Number of hard links (Unix only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nlink: Option<u64>,
    /// Owner user id (Unix only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid: Option<u32>,
    /// Owner group id (Unix only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gid: Option<u32>,
}

impl FileStat {
    /// Reads the metadata of `path`, following symbolic links.
    pub async fn from_path<P: AsRef<StdPath>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let metadata = tokio::fs::metadata(path)
            .await
            .map_err(|e| Error::read(path.to_string_lossy(), e))?;
        Ok(FileStat::from_metadata(&metadata))
    }

    /// Create a `FileStat` from a `Metadata` value.
    pub fn from_metadata(metadata: &Metadata) -> Self {
        let modified = metadata.modified().unwrap_or(SystemTime::UNIX_EPOCH);
        #[cfg_attr(not(unix), allow(unused_mut))]
        let mut stat = FileStat {
            size: metadata.len(),
            mtime: format_system_time(modified),
            atime: metadata.accessed().ok().map(format_system_time),
            birthtime: metadata.created().ok().map(format_system_time),
            is_directory: metadata.is_dir(),
            is_file: metadata.is_file(),
            readonly: metadata.permissions().readonly(),
            dev: None,
            ino: None,
            mode: None,
            nlink: None,
            uid: None,
            gid: None,
        };
        #[cfg(unix)]
        {
            use std::os::unix::fs::MetadataExt;
            stat.dev = Some(metadata.dev());
            stat.ino = Some(metadata.ino());
            stat.mode = Some(metadata.mode());
            stat.nlink = Some(metadata.nlink());
            stat.uid = Some(metadata.uid());
            stat.gid = Some(metadata.gid());
        }
        stat
    }

    /// Modification time as a `SystemTime`.
    pub fn modified(&self) -> Result<SystemTime, Error> {
        parse_system_time(&self.mtime)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn stat_of_file_and_dir() {
        let dir = tempdir::TempDir::new("stat").unwrap();
        let file = dir.path().join("f.bin");
        std::fs::write(&file, [1u8, 2, 3]).unwrap();

        let stat = FileStat::from_path(&file).await.unwrap();
        assert_eq!(stat.size, 3);
        assert!(stat.is_file);
        assert!(!stat.is_directory);
        assert!(stat.modified().unwrap() > SystemTime::UNIX_EPOCH);
        #[cfg(unix)]
        assert!(stat.ino.is_some());

        let stat = FileStat::from_path(dir.path()).await.unwrap();
        assert!(stat.is_directory);
        assert!(!stat.is_file);
    }

    #[tokio::test]
    async fn stat_of_missing_path() {
        let err = FileStat::from_path("/definitely/not/here").await.unwrap_err();
        assert!(matches!(err, Error::Read { .. }));
    }
}
