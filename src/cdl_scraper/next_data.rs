//! Decoding of the embedded page-state document.
//!
//! The page state is parsed into a generic [`Value`] tree with every object
//! key converted from snake_case to camelCase. Structural navigation is a chain
//! of predicate-find steps that short-circuit on the first miss; leaf records
//! are projected with serde and default every missing field.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::warn;

use crate::error::{CdlError, Result};

/// Parse page-state JSON and normalize its keys.
pub(crate) fn parse_page_state(raw: &str) -> Result<Value> {
    let mut tree: Value = serde_json::from_str(raw)?;
    normalize_keys(&mut tree);
    Ok(tree)
}

/// The `props.pageProps` object every page state carries.
pub(crate) fn page_props(tree: &Value) -> Result<&Value> {
    tree.get("props")
        .and_then(|props| props.get("pageProps"))
        .filter(|props| props.is_object())
        .ok_or(CdlError::Schema {
            step: "props.pageProps",
        })
}

/// Descend from `pageProps` to the open tab of the default
/// container item, the layout both the standings and schedule pages use.
pub(crate) fn open_tab(page_props: &Value) -> Result<&Value> {
    let container = page_props
        .find_child("blocks", "cdlContainerBlockList")
        .ok_or(CdlError::Schema {
            step: "container block list",
        })?;
    let item = container
        .find_flagged("items", "default")
        .ok_or(CdlError::Schema {
            step: "default container item",
        })?;
    let tabs = item.find_child("blocks", "tabs").ok_or(CdlError::Schema {
        step: "tabs block",
    })?;
    tabs.find_flagged("tabs", "openDefault")
        .filter(|tab| tab.list("blocks").is_some())
        .ok_or(CdlError::Schema {
            step: "open default tab",
        })
}

/// Predicate-find steps over a page-state tree.
pub(crate) trait Navigate {
    /// The array stored under `key`, if there is one.
    fn list(&self, key: &str) -> Option<&[Value]>;

    /// The non-null `child` of the first element of `list_key` that has one.
    fn find_child(&self, list_key: &str, child: &str) -> Option<&Value>;

    /// The first element of `list_key` whose `flag` is `true`.
    fn find_flagged(&self, list_key: &str, flag: &str) -> Option<&Value>;
}

impl Navigate for Value {
    fn list(&self, key: &str) -> Option<&[Value]> {
        self.get(key).and_then(Value::as_array).map(Vec::as_slice)
    }

    fn find_child(&self, list_key: &str, child: &str) -> Option<&Value> {
        self.list(list_key)?
            .iter()
            .find_map(|item| item.get(child).filter(|c| !c.is_null()))
    }

    fn find_flagged(&self, list_key: &str, flag: &str) -> Option<&Value> {
        self.list(list_key)?
            .iter()
            .find(|item| item.get(flag).and_then(Value::as_bool) == Some(true))
    }
}

/// Project every entry into `T`, skipping (and logging) entries whose shape
/// does not fit.
pub(crate) fn project<'a, T: DeserializeOwned>(
    entries: impl IntoIterator<Item = &'a Value>,
    what: &'static str,
) -> Vec<T> {
    entries
        .into_iter()
        .filter_map(|entry| decode_entry(entry, what))
        .collect()
}

/// Decode one leaf record, logging and returning `None` if its shape does not
/// fit.
pub(crate) fn decode_entry<T: DeserializeOwned>(entry: &Value, what: &'static str) -> Option<T> {
    match T::deserialize(entry) {
        Ok(record) => Some(record),
        Err(e) => {
            warn!(error = %e, what, "skipping undecodable entry");
            None
        }
    }
}

/// Rewrite every object key in the tree with [`snake_to_camel`].
pub(crate) fn normalize_keys(value: &mut Value) {
    match value {
        Value::Object(map) => {
            let entries = std::mem::take(map);
            *map = entries
                .into_iter()
                .map(|(key, mut child)| {
                    normalize_keys(&mut child);
                    (snake_to_camel(&key), child)
                })
                .collect::<Map<String, Value>>();
        }
        Value::Array(items) => items.iter_mut().for_each(normalize_keys),
        _ => {}
    }
}

/// Convert a snake_case key to camelCase.
///
/// The first word is kept as is and each following word is capitalized with
/// the rest lowercased. Leading and trailing underscores are preserved and a
/// key with a single word is returned unchanged.
pub(crate) fn snake_to_camel(key: &str) -> String {
    let core = key.trim_matches('_');
    if core.is_empty() {
        return key.to_string();
    }

    let mut words = core.split('_').filter(|w| !w.is_empty());
    let Some(first) = words.next() else {
        return key.to_string();
    };
    let rest: Vec<&str> = words.collect();
    if rest.is_empty() {
        return key.to_string();
    }

    let leading = key.len() - key.trim_start_matches('_').len();
    let trailing = key.len() - key.trim_end_matches('_').len();

    let mut out = String::with_capacity(key.len());
    out.push_str(&key[..leading]);
    out.push_str(first);
    for word in rest {
        let mut chars = word.chars();
        if let Some(c) = chars.next() {
            out.extend(c.to_uppercase());
            out.push_str(&chars.as_str().to_lowercase());
        }
    }
    out.push_str(&key[key.len() - trailing..]);
    out
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde_json::json;

    use super::*;
    use crate::cdl_scraper::fixtures;

    #[test]
    fn test_snake_to_camel() {
        assert_eq!(snake_to_camel("team_name"), "teamName");
        assert_eq!(snake_to_camel("cdl_pro_standings"), "cdlProStandings");
        assert_eq!(snake_to_camel("home_team_games_won"), "homeTeamGamesWon");
        assert_eq!(snake_to_camel("pageProps"), "pageProps");
        assert_eq!(snake_to_camel("default"), "default");
        assert_eq!(snake_to_camel("_private_key_"), "_privateKey_");
        assert_eq!(snake_to_camel("__"), "__");
        assert_eq!(snake_to_camel("a__b"), "aB");
        assert_eq!(snake_to_camel("open_DEFAULT"), "openDefault");
        assert_eq!(snake_to_camel(""), "");
    }

    #[test]
    fn test_normalize_nested() {
        let tree = parse_page_state(
            r#"{"props":{"page_props":{"team_list":[{"team_name":"OpTic Texas"}]}}}"#,
        )
        .unwrap();
        assert_eq!(
            tree,
            json!({"props":{"pageProps":{"teamList":[{"teamName":"OpTic Texas"}]}}})
        );
    }

    #[test]
    fn test_page_props_required() {
        let tree = parse_page_state(r#"{"props":{}}"#).unwrap();
        let err = page_props(&tree).unwrap_err();
        assert!(matches!(
            err,
            CdlError::Schema {
                step: "props.pageProps"
            }
        ));
    }

    #[test]
    fn test_invalid_json() {
        let err = parse_page_state("{not json").unwrap_err();
        assert!(matches!(err, CdlError::Json(_)));
    }

    #[test]
    fn test_open_tab() {
        let mut tree = fixtures::season_page(json!([{ "marker": 1 }]));
        normalize_keys(&mut tree);
        let props = page_props(&tree).unwrap();
        let tab = open_tab(props).unwrap();
        assert_eq!(tab.list("blocks").unwrap(), &[json!({ "marker": 1 })]);
    }

    #[test]
    fn test_open_tab_without_open_tab() {
        let mut tree = fixtures::season_page(json!([]));
        tree["props"]["pageProps"]["blocks"][1]["cdl_container_block_list"]["items"][1]["blocks"]
            [1]["tabs"]["tabs"][1]["open_default"] = json!(false);
        normalize_keys(&mut tree);
        let props = page_props(&tree).unwrap();
        let err = open_tab(props).unwrap_err();
        assert!(matches!(
            err,
            CdlError::Schema {
                step: "open default tab"
            }
        ));
    }

    #[test]
    fn test_open_tab_without_default_item() {
        let mut tree = fixtures::season_page(json!([]));
        tree["props"]["pageProps"]["blocks"][1]["cdl_container_block_list"]["items"][1]
            ["default"] = json!("true");
        normalize_keys(&mut tree);
        let props = page_props(&tree).unwrap();
        let err = open_tab(props).unwrap_err();
        assert!(matches!(
            err,
            CdlError::Schema {
                step: "default container item"
            }
        ));
    }

    #[test]
    fn test_find_child_skips_null() {
        let tree = json!({ "blocks": [ { "tabs": null }, { "tabs": { "id": 2 } } ] });
        assert_eq!(tree.find_child("blocks", "tabs"), Some(&json!({ "id": 2 })));
        assert_eq!(tree.find_child("blocks", "missing"), None);
        assert_eq!(tree.find_child("nothing", "tabs"), None);
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct Named {
        name: String,
    }

    #[test]
    fn test_project_skips_bad_entries() {
        let entries = [json!({"name": "a"}), json!({"name": 3}), json!({"name": "c"})];
        let named: Vec<Named> = project(&entries, "named");
        assert_eq!(
            named,
            vec![
                Named {
                    name: "a".to_string()
                },
                Named {
                    name: "c".to_string()
                }
            ]
        );
    }
}
