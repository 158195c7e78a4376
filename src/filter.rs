use crate::Options;

/// Include and exclude rules of a listing.
///
/// Both lists hold plain substrings, matched against an item's full name.
/// The include list doubles as an extension allow-list for the early
/// pre-filter applied while a folder is read.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct FilterSet {
    /// Items must contain one of these. If empty, everything is included.
    include: Vec<String>,

    /// Items containing any of these are dropped.
    exclude: Vec<String>,
}

impl FilterSet {
    /// Creates a filter from include and exclude strings.
    pub fn create_with<S: AsRef<str>>(include: &[S], exclude: &[S]) -> Self {
        Self {
            include: include.iter().map(|s| s.as_ref().to_owned()).collect(),
            exclude: exclude.iter().map(|s| s.as_ref().to_owned()).collect(),
        }
    }

    pub fn from_options(options: &Options) -> Self {
        Self::create_with(&options.include, &options.exclude)
    }

    pub fn has_include(&self) -> bool {
        !self.include.is_empty()
    }

    /// Extension pre-filter. `ext` carries its dot and is compared as is.
    ///
    /// Entries without extension always pass, and so does everything when
    /// the include list is empty or holds an empty string.
    pub fn allows_extension(&self, ext: &str) -> bool {
        !self.has_include()
            || ext.is_empty()
            || self.include.iter().any(|i| i.is_empty() || i == ext)
    }

    /// Returns `true` when `full_name` contains an exclude string.
    pub fn is_excluded(&self, full_name: &str) -> bool {
        self.exclude.iter().any(|e| full_name.contains(e.as_str()))
    }

    /// Final inclusion check against the include substrings.
    pub fn is_included(&self, full_name: &str) -> bool {
        !self.has_include() || self.include.iter().any(|i| full_name.contains(i.as_str()))
    }
}
