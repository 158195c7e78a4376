use std::borrow::Cow;
use std::ffi::OsStr;
use std::path::Path as StdPath;
use std::path::PathBuf;

use log::debug;

use crate::Options;

/// Separator placed between a folder path and an entry name.
///
/// Chosen once per listing and carried by the walker, so listings running
/// side by side never see each other's setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Separator {
    /// `/`, used when paths are normalized.
    Slash,
    /// The platform separator.
    Native,
}

impl Separator {
    pub(crate) fn for_options(options: &Options) -> Self {
        if options.normalize_path {
            Separator::Slash
        } else {
            Separator::Native
        }
    }

    pub(crate) fn as_bytes(&self) -> &'static [u8] {
        match self {
            Separator::Slash => b"/",
            Separator::Native => std::path::MAIN_SEPARATOR_STR.as_bytes(),
        }
    }
}

/// A folder path in both text and raw byte form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ResolvedPath {
    pub text: String,
    pub raw: Vec<u8>,
}

impl ResolvedPath {
    pub(crate) fn from_raw(raw: Vec<u8>) -> Self {
        Self {
            text: String::from_utf8_lossy(&raw).into_owned(),
            raw,
        }
    }

    /// Appends `name` behind a separator, unless the path already ends
    /// with one.
    pub(crate) fn join(&self, name: &[u8], separator: Separator) -> ResolvedPath {
        let sep = separator.as_bytes();
        let mut raw = Vec::with_capacity(self.raw.len() + sep.len() + name.len());
        raw.extend_from_slice(&self.raw);
        if !raw.ends_with(sep) {
            raw.extend_from_slice(sep);
        }
        raw.extend_from_slice(name);
        ResolvedPath::from_raw(raw)
    }
}

/// Replaces every backslash with a forward slash.
pub fn normalize_separators(path: &str) -> String {
    path.replace('\\', "/")
}

/// Canonicalizes and reformats `path` according to `options`.
///
/// Canonicalization failures fall back to `path` unmodified.
pub(crate) async fn normalize(path: &StdPath, options: &Options) -> ResolvedPath {
    let resolved = if options.real_path {
        match tokio::fs::canonicalize(path).await {
            Ok(p) => p,
            Err(e) => {
                debug!("canonicalize({}) failed, keeping it: {e}", path.display());
                path.to_path_buf()
            }
        }
    } else {
        path.to_path_buf()
    };
    let mut raw = os_bytes(resolved.as_os_str()).into_owned();
    if options.normalize_path {
        for b in raw.iter_mut().filter(|b| **b == b'\\') {
            *b = b'/';
        }
    }
    ResolvedPath::from_raw(raw)
}

/// Raw bytes of an OS string. Exact on Unix, lossy UTF-8 elsewhere.
pub(crate) fn os_bytes(s: &OsStr) -> Cow<'_, [u8]> {
    #[cfg(unix)]
    {
        use std::os::unix::ffi::OsStrExt;
        Cow::Borrowed(s.as_bytes())
    }
    #[cfg(not(unix))]
    {
        match s.to_string_lossy() {
            Cow::Borrowed(t) => Cow::Borrowed(t.as_bytes()),
            Cow::Owned(t) => Cow::Owned(t.into_bytes()),
        }
    }
}

/// Inverse of [`os_bytes`]: a path usable for I/O.
pub(crate) fn path_from_bytes(raw: &[u8]) -> PathBuf {
    #[cfg(unix)]
    {
        use std::os::unix::ffi::OsStrExt;
        PathBuf::from(OsStr::from_bytes(raw))
    }
    #[cfg(not(unix))]
    {
        PathBuf::from(String::from_utf8_lossy(raw).into_owned())
    }
}
