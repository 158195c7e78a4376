use log::warn;

use crate::Error;
use crate::FileStat;
use crate::Item;
use crate::Listing;
use crate::Mode;
use crate::path::path_from_bytes;
use crate::walker::Walker;

/// Result of one folder's metadata pass.
pub(crate) struct Enriched {
    pub items: Vec<Item>,
    /// The progress callback asked to stop.
    pub aborted: bool,
}

impl Walker<'_> {
    /// Reads metadata, contents and sub folders of `items`.
    ///
    /// Items are visited last to first, each one completely (including any
    /// recursion) before the next. The output keeps the surviving items in
    /// listing order, followed by the flattened sub folder items of list
    /// mode in visit order.
    pub(crate) async fn enrich(&self, items: Vec<Item>, depth: usize) -> Enriched {
        let total = items.len();
        let mut kept = Vec::with_capacity(total);
        let mut flattened = Vec::new();
        let mut aborted = false;

        for (visited, mut item) in items.into_iter().rev().enumerate() {
            if let Err(error) = self.enrich_item(&mut item, &mut flattened, depth).await {
                warn!("[enrich] {}: {error}", item.full_name);
                item.error = Some(error);
            }
            if let Some(progress) = self.progress {
                aborted = progress.on_item(&mut item, visited + 1, total);
            }

            let empty_folder = item.is_dir()
                && self.options.ignore_folders
                && item.content.is_none()
                && item.error.is_none();
            if !empty_folder && !aborted {
                kept.push(item);
            }
            if aborted {
                break;
            }
        }

        kept.reverse();
        kept.append(&mut flattened);
        Enriched {
            items: kept,
            aborted,
        }
    }

    async fn enrich_item(
        &self,
        item: &mut Item,
        flattened: &mut Vec<Item>,
        depth: usize,
    ) -> Result<(), Error> {
        let path = path_from_bytes(&item.full_name_raw);
        let metadata = tokio::fs::metadata(&path)
            .await
            .map_err(|e| Error::read(&item.full_name, e))?;
        let is_dir = metadata.is_dir();
        item.is_directory = Some(is_dir);
        if self.options.stats {
            item.stats = Some(FileStat::from_metadata(&metadata));
        }

        if self.options.read_content && !is_dir {
            let bytes = tokio::fs::read(&path)
                .await
                .map_err(|e| Error::read(&item.full_name, e))?;
            item.data = Some(self.options.encoding.encode(&bytes));
        }

        if is_dir && self.options.recursive {
            match (self.options.mode, self.list_dir(&path, depth + 1).await) {
                (Mode::List, Listing::Items(mut items)) => flattened.append(&mut items),
                // a folder that cannot be listed is reported on its own item
                (Mode::List, Listing::Failed(failure)) => return Err(failure.error),
                (Mode::Tree, Listing::Items(items)) if items.is_empty() => item.content = None,
                (Mode::Tree, nested) => item.content = Some(nested),
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::ffi::OsStr;
    use std::sync::Mutex;

    use super::*;
    use crate::Options;
    use crate::TestRoot;
    use crate::entry;
    use crate::path::ResolvedPath;

    fn full_names(items: &[Item]) -> Vec<String> {
        items.iter().map(|i| i.full_name.clone()).collect()
    }

    #[tokio::test]
    async fn list_mode_appends_sub_folders_after_siblings() {
        let root = TestRoot::new().await.unwrap();
        let options = Options::default();
        let walker = Walker::new(&options, None);

        let items = walker.read_directory(root.path(), 0).await.unwrap();
        let enriched = walker.enrich(items, 0).await;
        assert!(!enriched.aborted);
        // x.txt stays in place, then e/ (visited first), then c/ subtrees
        assert_eq!(
            full_names(&enriched.items),
            [
                root.full_name("x.txt"),
                root.full_name("e/Notes.TXT"),
                root.full_name("c/y.txt"),
                root.full_name("c/d/z.md"),
            ]
        );
    }

    #[tokio::test]
    async fn progress_sees_items_last_to_first() {
        let root = TestRoot::new().await.unwrap();
        let options = Options::default().recursive(false).ignore_folders(false);
        let seen = Mutex::new(Vec::new());
        let progress = |item: &mut Item, position: usize, total: usize| {
            seen.lock().unwrap().push((item.name.clone(), position, total));
            false
        };
        let walker = Walker::new(&options, Some(&progress));

        let items = walker.read_directory(root.path(), 0).await.unwrap();
        let enriched = walker.enrich(items, 0).await;
        assert_eq!(enriched.items.len(), 4);
        assert_eq!(
            *seen.lock().unwrap(),
            [
                ("x.txt".to_string(), 1, 4),
                ("e".to_string(), 2, 4),
                ("c".to_string(), 3, 4),
                ("b".to_string(), 4, 4),
            ]
        );
    }

    #[tokio::test]
    async fn abort_drops_trigger_and_unvisited() {
        let root = TestRoot::new().await.unwrap();
        let options = Options::default().recursive(false).ignore_folders(false);
        let progress = |item: &mut Item, _: usize, _: usize| item.name == "e";
        let walker = Walker::new(&options, Some(&progress));

        let items = walker.read_directory(root.path(), 0).await.unwrap();
        let enriched = walker.enrich(items, 0).await;
        assert!(enriched.aborted);
        assert_eq!(full_names(&enriched.items), [root.full_name("x.txt")]);
        assert_eq!(enriched.items[0].is_directory, Some(false));
    }

    #[tokio::test]
    async fn vanished_entry_keeps_error() {
        let root = TestRoot::new().await.unwrap();
        let options = Options::default();
        let walker = Walker::new(&options, None);
        let folder = ResolvedPath::from_raw(root.canonical().into_bytes());
        let ghost = entry::build(&folder, OsStr::new("ghost.txt"), &walker, 0).unwrap();

        let enriched = walker.enrich(vec![ghost], 0).await;
        assert_eq!(enriched.items.len(), 1);
        assert!(matches!(enriched.items[0].error, Some(Error::Read { .. })));
        assert_eq!(enriched.items[0].is_directory, None);
    }

    #[tokio::test]
    async fn content_is_encoded() {
        let root = TestRoot::new().await.unwrap();
        let options = Options::default()
            .recursive(false)
            .read_content(true)
            .encoding(crate::Encoding::Utf8);
        let walker = Walker::new(&options, None);

        let items = walker.read_directory(root.path(), 0).await.unwrap();
        let enriched = walker.enrich(items, 0).await;
        assert_eq!(enriched.items.len(), 1);
        assert_eq!(enriched.items[0].data.as_deref(), Some("hello"));
    }
}
