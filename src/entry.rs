use std::ffi::OsStr;
use std::path::Path as StdPath;

use log::trace;

use crate::Item;
use crate::path::ResolvedPath;
use crate::path::os_bytes;
use crate::walker::Walker;

/// Extension of `name` with its dot, or `""`.
///
/// Follows `std::path::Path::extension`: `.bashrc` has none, `a.` has `.`.
pub(crate) fn extension_of(name: &str) -> String {
    StdPath::new(name)
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default()
}

/// Builds the item for entry `name` of folder `parent`.
///
/// Returns `None` when the entry is filtered out, either by the extension
/// pre-filter or by an exclude string.
pub(crate) fn build(
    parent: &ResolvedPath,
    name: &OsStr,
    walker: &Walker<'_>,
    depth: usize,
) -> Option<Item> {
    let name_raw = os_bytes(name).into_owned();
    let name = String::from_utf8_lossy(&name_raw).into_owned();
    let ext = extension_of(&name);

    if !walker.filter.allows_extension(&ext) {
        trace!("{name} in {}: extension {ext} not included", parent.text);
        return None;
    }

    let full = parent.join(&name_raw, walker.separator);
    if walker.filter.is_excluded(&full.text) {
        trace!("{}: excluded", full.text);
        return None;
    }

    Some(Item {
        title: name[..name.len() - ext.len()].to_owned(),
        name,
        name_raw,
        path: parent.text.clone(),
        path_raw: parent.raw.clone(),
        full_name: full.text,
        full_name_raw: full.raw,
        extension: walker.options.extensions.then(|| ext.to_lowercase()),
        depth: walker.options.deep.then_some(depth),
        is_directory: None,
        error: None,
        custom: None,
        data: None,
        stats: None,
        content: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Options;

    fn parent() -> ResolvedPath {
        ResolvedPath::from_raw(b"/a".to_vec())
    }

    #[test]
    fn extensions() {
        assert_eq!(extension_of("x.txt"), ".txt");
        assert_eq!(extension_of("archive.tar.GZ"), ".GZ");
        assert_eq!(extension_of("Makefile"), "");
        assert_eq!(extension_of(".bashrc"), "");
        assert_eq!(extension_of("a."), ".");
    }

    #[test]
    fn derived_fields() {
        let options = Options::default().extensions(true).deep(true);
        let walker = Walker::new(&options, None);
        let item = build(&parent(), OsStr::new("Photo.JPG"), &walker, 2).unwrap();

        assert_eq!(item.name, "Photo.JPG");
        assert_eq!(item.title, "Photo");
        assert_eq!(item.path, "/a");
        assert_eq!(item.full_name, "/a/Photo.JPG");
        assert_eq!(item.full_name_raw, b"/a/Photo.JPG");
        assert_eq!(item.extension.as_deref(), Some(".jpg"));
        assert_eq!(item.depth, Some(2));
        assert_eq!(item.is_directory, None);
    }

    #[test]
    fn optional_fields_off_by_default() {
        let options = Options::default();
        let walker = Walker::new(&options, None);
        let item = build(&parent(), OsStr::new("x.txt"), &walker, 0).unwrap();
        assert_eq!(item.extension, None);
        assert_eq!(item.depth, None);
    }

    #[test]
    fn filtered_entries() {
        let options = Options::default().include(".txt").exclude("secret");
        let walker = Walker::new(&options, None);

        assert!(build(&parent(), OsStr::new("x.txt"), &walker, 0).is_some());
        assert!(build(&parent(), OsStr::new("folder"), &walker, 0).is_some());
        assert!(build(&parent(), OsStr::new("x.md"), &walker, 0).is_none());
        assert!(build(&parent(), OsStr::new("secret.txt"), &walker, 0).is_none());
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_name_keeps_bytes() {
        use std::os::unix::ffi::OsStrExt;
        let options = Options::default();
        let walker = Walker::new(&options, None);
        let item = build(&parent(), OsStr::from_bytes(b"caf\xe9.txt"), &walker, 0).unwrap();
        assert_eq!(item.name_raw, b"caf\xe9.txt");
        assert_eq!(item.full_name_raw, b"/a/caf\xe9.txt");
        assert_eq!(item.name, "caf\u{fffd}.txt");
        assert_eq!(item.title, "caf\u{fffd}");
    }
}
