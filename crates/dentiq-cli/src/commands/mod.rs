pub mod calculator;
pub mod catalog;
pub mod config;
pub mod quest;
pub mod tips;

use std::collections::HashMap;

use dentiq_core::{Catalog, CatalogItem, WalkError};

/// Index `--answer` pairs by item id, rejecting ids the catalog does not know.
pub(crate) fn answers_by_item<T: CatalogItem>(
    catalog: &Catalog<T>,
    answers: Vec<(String, String)>,
) -> Result<HashMap<String, String>, WalkError> {
    let mut by_item = HashMap::new();
    for (item, option) in answers {
        if catalog.get(&item).is_none() {
            return Err(WalkError::UnknownItem(item));
        }
        by_item.insert(item, option);
    }
    Ok(by_item)
}
