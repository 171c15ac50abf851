/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::constants::PAGE_MAX;
use crate::error::TestRailResult;
use serde_json::Value;
use std::future::Future;
use tracing::{debug, warn};

/// Collects every item of a paginated listing
///
/// `fetch` is called with `(limit, offset)`, starting at offset 0 with
/// `limit = PAGE_MAX`, and must return one page. Items are read from the
/// `key` list of each page; a page that is itself a list is taken whole.
/// The loop stops when the page `size` (or the item count when `size` is
/// absent) is below `PAGE_MAX`, or when `fetch` returns `None` (a suppressed
/// error in `exc` mode). Errors from `fetch` are propagated.
pub async fn fetch_all<F, Fut>(key: &str, mut fetch: F) -> TestRailResult<Vec<Value>>
where
    F: FnMut(u32, u32) -> Fut,
    Fut: Future<Output = TestRailResult<Option<Value>>>,
{
    let mut result = Vec::new();
    let mut offset = 0u32;

    loop {
        let page = match fetch(PAGE_MAX, offset).await? {
            Some(page) => page,
            None => {
                warn!("No page returned for '{}' at offset {}, stopping", key, offset);
                break;
            }
        };

        let (items, size) = split_page(page, key);
        debug!("Fetched {} '{}' at offset {}", items.len(), key, offset);
        result.extend(items);

        if size < u64::from(PAGE_MAX) {
            break;
        }
        offset += PAGE_MAX;
    }

    Ok(result)
}

fn split_page(page: Value, key: &str) -> (Vec<Value>, u64) {
    match page {
        Value::Array(items) => {
            let size = items.len() as u64;
            (items, size)
        }
        Value::Object(mut map) => {
            let items = match map.remove(key) {
                Some(Value::Array(items)) => items,
                _ => Vec::new(),
            };
            let size = map
                .get("size")
                .and_then(Value::as_u64)
                .unwrap_or(items.len() as u64);
            (items, size)
        }
        _ => (Vec::new(), 0),
    }
}
