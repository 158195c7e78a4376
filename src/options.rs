#[cfg(feature = "json_schema")]
use schemars::JsonSchema;
use serde::Deserialize;
use serde::Serialize;

use crate::Encoding;
use crate::Error;

/// Shape of the returned listing.
#[cfg_attr(feature = "json_schema", derive(JsonSchema))]
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Every file (and folder, unless ignored) of the subtree in one flat
    /// vector.
    #[default]
    List = 1,
    /// Items nested like the file system; folders carry their children in
    /// [`crate::Item::content`].
    Tree = 2,
}

/// Settings of a listing.
///
/// Can be built with the chained setters or loaded from JSON with
/// camelCase keys; missing keys keep their defaults.
///
/// ```rust
/// # use recursive_readdir::{Mode, Options};
/// let options = Options::from_json(r#"{"mode": "tree", "ignoreFolders": false}"#).unwrap();
/// assert_eq!(options, Options::default().mode(Mode::Tree).ignore_folders(false));
/// ```
#[cfg_attr(feature = "json_schema", derive(JsonSchema))]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Options {
    /// List or tree output. Default: list.
    pub mode: Mode,
    /// Descend into sub folders. Default: true.
    pub recursive: bool,
    /// Attach a [`crate::FileStat`] to every item. Default: false.
    pub stats: bool,
    /// Drop folders without content. In list mode this leaves files only.
    /// Default: true.
    pub ignore_folders: bool,
    /// Attach the lowercase extension, dot included. Default: false.
    pub extensions: bool,
    /// Attach the folder depth, starting with 0 at the listed path.
    /// Default: false.
    pub deep: bool,
    /// Resolve `.`, `..` and symbolic links of every listed folder.
    /// Default: true.
    pub real_path: bool,
    /// Replace backslashes with forward slashes and use `/` as separator.
    /// Default: true.
    pub normalize_path: bool,
    /// Keep only items whose full name contains one of these strings.
    /// Entries with an extension are also pre-filtered against this list.
    pub include: Vec<String>,
    /// Drop items whose full name contains one of these strings.
    pub exclude: Vec<String>,
    /// Attach file contents. Default: false.
    pub read_content: bool,
    /// Encoding of attached contents. Default: base64.
    pub encoding: Encoding,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            mode: Mode::List,
            recursive: true,
            stats: false,
            ignore_folders: true,
            extensions: false,
            deep: false,
            real_path: true,
            normalize_path: true,
            include: Vec::new(),
            exclude: Vec::new(),
            read_content: false,
            encoding: Encoding::Base64,
        }
    }
}

impl Options {
    /// Parses options from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        serde_json::from_str(json).map_err(|e| Error::Parse {
            what: "options".into(),
            how: e.to_string(),
        })
    }

    /// Sets the output shape.
    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }
    /// Enables or disables recursion.
    pub fn recursive(mut self, yes: bool) -> Self {
        self.recursive = yes;
        self
    }
    /// Enables or disables stats.
    pub fn stats(mut self, yes: bool) -> Self {
        self.stats = yes;
        self
    }
    /// Enables or disables dropping of empty folders.
    pub fn ignore_folders(mut self, yes: bool) -> Self {
        self.ignore_folders = yes;
        self
    }
    /// Enables or disables extensions.
    pub fn extensions(mut self, yes: bool) -> Self {
        self.extensions = yes;
        self
    }
    /// Enables or disables depth information.
    pub fn deep(mut self, yes: bool) -> Self {
        self.deep = yes;
        self
    }
    /// Enables or disables canonicalization.
    pub fn real_path(mut self, yes: bool) -> Self {
        self.real_path = yes;
        self
    }
    /// Enables or disables separator normalization.
    pub fn normalize_path(mut self, yes: bool) -> Self {
        self.normalize_path = yes;
        self
    }
    /// Adds an include filter.
    pub fn include(mut self, pattern: impl Into<String>) -> Self {
        self.include.push(pattern.into());
        self
    }
    /// Adds an exclude filter.
    pub fn exclude(mut self, pattern: impl Into<String>) -> Self {
        self.exclude.push(pattern.into());
        self
    }
    /// Enables or disables content loading.
    pub fn read_content(mut self, yes: bool) -> Self {
        self.read_content = yes;
        self
    }
    /// Sets the content encoding.
    pub fn encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Whether listed items need a metadata pass at all.
    ///
    /// Plain shallow name listings skip the stat calls.
    pub(crate) fn needs_enrichment(&self) -> bool {
        self.stats
            || self.recursive
            || !self.ignore_folders
            || self.read_content
            || self.mode == Mode::Tree
    }
}
