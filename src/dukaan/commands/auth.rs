use crate::auth::Verifier;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::CatalogStore;

/// Check the code against the verifier; on success persist the owner flag.
/// A rejected code persists nothing and reports a deliberately generic
/// message — there is no lockout or attempt counting.
pub fn login<S: CatalogStore, V: Verifier>(
    store: &mut S,
    verifier: &V,
    code: &str,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if verifier.verify(code) {
        store.set_authed(true)?;
        result.authed = Some(true);
        result.add_message(CmdMessage::success("Owner mode enabled."));
    } else {
        result.authed = Some(false);
        result.add_message(CmdMessage::error("Invalid code."));
    }
    Ok(result)
}

pub fn logout<S: CatalogStore>(store: &mut S) -> Result<CmdResult> {
    store.set_authed(false)?;
    let mut result = CmdResult::default().with_authed(false);
    result.add_message(CmdMessage::info("Owner mode disabled."));
    Ok(result)
}

pub fn status<S: CatalogStore>(store: &S) -> Result<CmdResult> {
    let authed = store.is_authed()?;
    let mut result = CmdResult::default().with_authed(authed);
    result.add_message(CmdMessage::info(if authed {
        "Owner mode is on."
    } else {
        "Owner mode is off."
    }));
    Ok(result)
}
