use crate::commands::CmdResult;
use crate::error::Result;
use crate::query::{run_query, CatalogQuery};
use crate::store::CatalogStore;

pub fn run<S: CatalogStore>(store: &S, query: &CatalogQuery) -> Result<CmdResult> {
    let products = store.load_products()?;
    Ok(CmdResult::default().with_listed_products(run_query(&products, query)))
}
