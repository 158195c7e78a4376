#[cfg(feature = "json_schema")]
use schemars::JsonSchema;
use serde::Deserialize;
use serde::Serialize;

use crate::DirError;
use crate::Error;
use crate::FileStat;

/// A file or folder found while listing.
///
/// Name, title and path fields are always present. Everything else is
/// filled in depending on [`crate::Options`]: `extension` and `depth` when
/// requested, `is_directory` once metadata has been read, `stats` and
/// `data` for files, `content` for folders in tree mode.
///
/// Text fields are lossy when a name is not valid UTF-8; the `*_raw` fields
/// keep the exact bytes.
#[cfg_attr(feature = "json_schema", derive(JsonSchema))]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Item {
    /// File name.
    pub name: String,
    /// File name bytes.
    pub name_raw: Vec<u8>,
    /// File name without extension.
    pub title: String,
    /// Path of the containing folder.
    pub path: String,
    /// Path bytes of the containing folder.
    pub path_raw: Vec<u8>,
    /// `path`, separator and `name`.
    pub full_name: String,
    /// Bytes of `full_name`.
    pub full_name_raw: Vec<u8>,
    /// Lowercase extension with its dot, `""` if there is none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,
    /// Folder depth below the listed path, which is 0.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth: Option<usize>,
    /// Set once metadata has been read.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_directory: Option<bool>,
    /// Failure to stat or read this item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<Error>,
    /// Free for callers; never touched while listing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom: Option<serde_json::Value>,
    /// Encoded file contents.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    /// Metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<FileStat>,
    /// Children of a folder in tree mode, or the reason they could not be
    /// listed. `None` for empty folders.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Listing>,
}

impl Item {
    /// `true` for folders, `false` for files and not yet classified items.
    pub fn is_dir(&self) -> bool {
        self.is_directory.unwrap_or(false)
    }

    /// Children in tree mode, if any were listed.
    pub fn children(&self) -> Option<&[Item]> {
        self.content.as_ref().and_then(Listing::items)
    }
}

/// Outcome of listing one folder.
#[cfg_attr(feature = "json_schema", derive(JsonSchema))]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Listing {
    /// The folder's items.
    Items(Vec<Item>),
    /// The folder itself could not be read.
    Failed(DirError),
}

impl Listing {
    /// Items, unless the folder could not be read.
    pub fn items(&self) -> Option<&[Item]> {
        match self {
            Listing::Items(items) => Some(items),
            Listing::Failed(_) => None,
        }
    }

    /// The failure, if the folder could not be read.
    pub fn failure(&self) -> Option<&DirError> {
        match self {
            Listing::Items(_) => None,
            Listing::Failed(e) => Some(e),
        }
    }

    /// Returns `true` if the folder could not be read.
    pub fn is_failed(&self) -> bool {
        matches!(self, Listing::Failed(_))
    }

    /// Converts into a `Result` for use with `?`.
    pub fn into_items(self) -> Result<Vec<Item>, DirError> {
        match self {
            Listing::Items(items) => Ok(items),
            Listing::Failed(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str) -> Item {
        Item {
            name: name.into(),
            name_raw: name.as_bytes().to_vec(),
            title: name.into(),
            path: "/a".into(),
            path_raw: b"/a".to_vec(),
            full_name: format!("/a/{name}"),
            full_name_raw: format!("/a/{name}").into_bytes(),
            extension: None,
            depth: None,
            is_directory: None,
            error: None,
            custom: None,
            data: None,
            stats: None,
            content: None,
        }
    }

    #[test]
    fn listing_accessors() {
        let ok = Listing::Items(vec![item("x")]);
        assert!(!ok.is_failed());
        assert_eq!(ok.items().map(|i| i.len()), Some(1));
        assert!(ok.failure().is_none());

        let failed = Listing::Failed(DirError {
            error: Error::InvalidArgument("nope".into()),
            path: "/a".into(),
        });
        assert!(failed.is_failed());
        assert!(failed.items().is_none());
        assert_eq!(failed.clone().into_items().unwrap_err().path, "/a");
    }

    #[test]
    fn unset_fields_are_not_serialized() {
        let json = serde_json::to_value(item("x")).unwrap();
        assert_eq!(json["full_name"], "/a/x");
        assert!(json.get("stats").is_none());
        assert!(json.get("is_directory").is_none());
    }

    #[test]
    fn tree_children() {
        let mut folder = item("c");
        folder.is_directory = Some(true);
        folder.content = Some(Listing::Items(vec![item("y.txt")]));
        assert!(folder.is_dir());
        assert_eq!(folder.children().unwrap()[0].name, "y.txt");
    }
}
