//! Human-readable route listings

use std::collections::{BTreeMap, BTreeSet};

/// `bundle -> controller -> actions`
pub type ActionTree = BTreeMap<String, BTreeMap<String, BTreeSet<String>>>;

/// Group `bundle.controller.action` names; names with fewer parts are skipped
pub fn action_tree<'a>(actions: impl IntoIterator<Item = &'a str>) -> ActionTree {
    let mut tree = ActionTree::new();

    for full in actions {
        let mut parts = full.splitn(3, '.');
        if let (Some(bundle), Some(controller), Some(action)) =
            (parts.next(), parts.next(), parts.next())
        {
            tree.entry(bundle.to_string())
                .or_default()
                .entry(controller.to_string())
                .or_default()
                .insert(action.to_string());
        }
    }

    tree
}

/// Render `path => action` lines with paths padded to a common width
pub fn format_listing<P: AsRef<str>, A: AsRef<str>>(entries: &[(P, A)]) -> Vec<String> {
    let width = entries
        .iter()
        .map(|(path, _)| path.as_ref().chars().count())
        .max()
        .unwrap_or(0);

    entries
        .iter()
        .map(|(path, action)| format!("{:<width$} => {}", path.as_ref(), action.as_ref()))
        .collect()
}
