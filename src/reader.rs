use std::path::Path as StdPath;

use futures_lite::StreamExt;
use log::debug;

use crate::Error;
use crate::Item;
use crate::entry;
use crate::path::normalize;
use crate::path::path_from_bytes;
use crate::walker::Walker;

impl Walker<'_> {
    /// Shallow listing of one folder: no metadata, no recursion.
    ///
    /// Items come back sorted by raw name. Fails as a whole if the folder
    /// or one of its entries cannot be read.
    pub(crate) async fn read_directory(
        &self,
        path: &StdPath,
        depth: usize,
    ) -> Result<Vec<Item>, Error> {
        let folder = normalize(path, self.options).await;

        let mut entries = async_fs::read_dir(path_from_bytes(&folder.raw))
            .await
            .map_err(|e| Error::read(&folder.text, e))?;

        let mut items = Vec::new();
        while let Some(entry) = entries.next().await {
            let entry = entry.map_err(|e| Error::read(&folder.text, e))?;
            if let Some(item) = entry::build(&folder, &entry.file_name(), self, depth) {
                items.push(item);
            }
        }
        items.sort_by(|a, b| a.name_raw.cmp(&b.name_raw));

        debug!(
            "[read_directory] {}: {} entries at depth {depth}",
            folder.text,
            items.len()
        );
        Ok(items)
    }
}
