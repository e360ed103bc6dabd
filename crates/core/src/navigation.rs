//! Navigation tree built from linked `navigation_item` content items.

use crate::constants::{
    CHILD_NAVIGATION_ITEMS_ELEMENT, CONTENT_ITEMS_ELEMENT, NAVIGATION_ITEM_TYPE,
    REDIRECT_TO_ITEM_ELEMENT, REDIRECT_TO_URL_ELEMENT, TITLE_ELEMENT, URL_SLUG_ELEMENT,
    VIEW_NAME_ELEMENT,
};
use crate::content::{ContentItem, ItemResponse, ModularContent};
use crate::{CoreError, CoreResult};
use serde::Serialize;

/// One node of the site navigation.
///
/// `url_path` is the full relative path without leading or trailing slashes. The root is `""`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct NavigationItem {
    pub codename: String,
    pub title: String,
    pub url_slug: String,
    pub url_path: String,
    pub redirect_to_url: Option<String>,
    pub redirect_to_item: Option<String>,
    pub content_items: Vec<String>,
    pub view_name: Option<String>,
    pub children: Vec<NavigationItem>,
}

impl NavigationItem {
    /// Build the tree rooted at `response.item`, following `child_navigation_items` through the
    /// response's modular content down to `max_depth` levels below the root.
    ///
    /// # Errors
    /// Returns `CoreError::NotNavigationItem` if the root is not a navigation item.
    pub fn build(response: &ItemResponse, max_depth: u32) -> CoreResult<Self> {
        let root = &response.item;
        if root.content_type() != NAVIGATION_ITEM_TYPE {
            return Err(CoreError::NotNavigationItem(root.codename().to_string()));
        }

        let mut branch = Vec::new();
        Ok(build_node(
            root,
            String::new(),
            &response.modular_content,
            0,
            max_depth,
            &mut branch,
        ))
    }

    /// Pre-order traversal, starting with `self`.
    pub fn iter(&self) -> Iter<'_> {
        Iter { stack: vec![self] }
    }

    pub fn find_by_codename(&self, codename: &str) -> Option<&NavigationItem> {
        self.iter().find(|item| item.codename == codename)
    }

    /// Walk the tree one slug per segment. Slugs match ASCII case-insensitively. Children with
    /// an empty slug are transparent: their own children are matched at the same level.
    pub fn find_by_path(&self, segments: &[&str]) -> Option<&NavigationItem> {
        segments
            .iter()
            .try_fold(self, |current, segment| current.find_child(segment))
    }

    fn find_child(&self, segment: &str) -> Option<&NavigationItem> {
        for child in &self.children {
            if child.url_slug.is_empty() {
                if let Some(found) = child.find_child(segment) {
                    return Some(found);
                }
            } else if child.url_slug.eq_ignore_ascii_case(segment) {
                return Some(child);
            }
        }
        None
    }
}

pub struct Iter<'a> {
    stack: Vec<&'a NavigationItem>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a NavigationItem;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.stack.pop()?;
        self.stack.extend(item.children.iter().rev());
        Some(item)
    }
}

fn child_path(parent_path: &str, slug: &str) -> String {
    match (parent_path.is_empty(), slug.is_empty()) {
        (_, true) => parent_path.to_string(),
        (true, false) => slug.to_string(),
        (false, false) => format!("{parent_path}/{slug}"),
    }
}

fn build_node(
    item: &ContentItem,
    url_path: String,
    modular: &ModularContent,
    depth: u32,
    max_depth: u32,
    branch: &mut Vec<String>,
) -> NavigationItem {
    let url_slug = item.text(URL_SLUG_ELEMENT).unwrap_or_default().to_string();

    branch.push(item.codename().to_string());
    let mut children = Vec::new();
    if depth < max_depth {
        for codename in item.linked_codenames(CHILD_NAVIGATION_ITEMS_ELEMENT) {
            if branch.contains(&codename) {
                tracing::warn!(codename = %codename, "navigation cycle detected, skipping");
                continue;
            }
            let Some(child) = modular.get(&codename) else {
                tracing::warn!(codename = %codename, "linked navigation item not delivered");
                continue;
            };
            if child.content_type() != NAVIGATION_ITEM_TYPE {
                tracing::warn!(
                    codename = %codename,
                    content_type = %child.content_type(),
                    "child navigation entry is not a navigation item"
                );
                continue;
            }
            let path = child_path(&url_path, child.text(URL_SLUG_ELEMENT).unwrap_or_default());
            children.push(build_node(child, path, modular, depth + 1, max_depth, branch));
        }
    }
    branch.pop();

    NavigationItem {
        codename: item.codename().to_string(),
        title: item.text(TITLE_ELEMENT).unwrap_or_default().to_string(),
        url_slug,
        url_path,
        redirect_to_url: item.text(REDIRECT_TO_URL_ELEMENT).map(str::to_string),
        redirect_to_item: item
            .linked_codenames(REDIRECT_TO_ITEM_ELEMENT)
            .into_iter()
            .next(),
        content_items: item.linked_codenames(CONTENT_ITEMS_ELEMENT),
        view_name: item.text(VIEW_NAME_ELEMENT).map(str::to_string),
        children,
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use serde_json::{json, Value};

    pub(crate) fn nav_item(codename: &str, slug: &str, children: &[&str], extra: Value) -> ContentItem {
        let mut elements = json!({
            "title": { "type": "text", "name": "Title", "value": codename.replace('_', " ") },
            "url_slug": { "type": "url_slug", "name": "URL slug", "value": slug },
            "child_navigation_items": {
                "type": "modular_content",
                "name": "Child navigation items",
                "value": children
            }
        });
        if let (Some(map), Some(extra)) = (elements.as_object_mut(), extra.as_object()) {
            for (k, v) in extra {
                map.insert(k.clone(), v.clone());
            }
        }
        serde_json::from_value(json!({
            "system": {
                "id": format!("id-{codename}"),
                "name": codename,
                "codename": codename,
                "type": "navigation_item"
            },
            "elements": elements
        }))
        .unwrap()
    }

    /// root
    /// ├── about (about)
    /// │   └── team (about/team, view "Team", content: team_page)
    /// ├── (group, empty slug)
    /// │   └── blog (blog, redirect_to_url)
    /// └── old-about (redirect_to_item: team)
    pub(crate) fn site() -> ItemResponse {
        let root = nav_item("root", "", &["about", "group", "old_about"], json!({}));
        let about = nav_item(
            "about",
            "about",
            &["team"],
            json!({ "content_items": { "type": "modular_content", "name": "Content", "value": ["about_page"] } }),
        );
        let team = nav_item(
            "team",
            "team",
            &[],
            json!({
                "content_items": { "type": "modular_content", "name": "Content", "value": ["team_page", "team_footer"] },
                "view_name": { "type": "text", "name": "View name", "value": "Team" }
            }),
        );
        let group = nav_item("group", "", &["blog"], json!({}));
        let blog = nav_item(
            "blog",
            "blog",
            &[],
            json!({ "redirect_to_url": { "type": "text", "name": "Redirect", "value": "https://blog.example.com" } }),
        );
        let old_about = nav_item(
            "old_about",
            "old-about",
            &[],
            json!({ "redirect_to_item": { "type": "modular_content", "name": "Redirect to item", "value": ["team"] } }),
        );

        let modular = [about, team, group, blog, old_about]
            .into_iter()
            .map(|i| (i.codename().to_string(), i))
            .collect();
        ItemResponse {
            item: root,
            modular_content: modular,
        }
    }

    #[test]
    fn build_computes_paths_and_fields() {
        let tree = NavigationItem::build(&site(), 6).unwrap();
        assert_eq!(tree.url_path, "");
        assert_eq!(tree.children.len(), 3);
        assert_eq!(tree.find_by_codename("about").unwrap().url_path, "about");

        let team = tree.find_by_codename("team").unwrap();
        assert_eq!(team.url_path, "about/team");
        assert_eq!(team.view_name.as_deref(), Some("Team"));
        assert_eq!(team.content_items, vec!["team_page", "team_footer"]);

        let blog = tree.find_by_codename("blog").unwrap();
        assert_eq!(blog.url_path, "blog");
        assert_eq!(blog.redirect_to_url.as_deref(), Some("https://blog.example.com"));

        let old = tree.find_by_codename("old_about").unwrap();
        assert_eq!(old.redirect_to_item.as_deref(), Some("team"));
    }

    #[test]
    fn root_slug_does_not_prefix_paths() {
        let mut response = site();
        response.item = nav_item("root", "home", &["about", "group", "old_about"], json!({}));
        let tree = NavigationItem::build(&response, 6).unwrap();
        assert_eq!(tree.url_path, "");
        assert_eq!(tree.find_by_codename("team").unwrap().url_path, "about/team");
    }

    #[test]
    fn iter_is_pre_order() {
        let tree = NavigationItem::build(&site(), 6).unwrap();
        let order: Vec<&str> = tree.iter().map(|i| i.codename.as_str()).collect();
        assert_eq!(order, vec!["root", "about", "team", "group", "blog", "old_about"]);
    }

    #[test]
    fn find_by_path_is_case_insensitive_and_skips_empty_slugs() {
        let tree = NavigationItem::build(&site(), 6).unwrap();
        assert_eq!(tree.find_by_path(&["About", "TEAM"]).unwrap().codename, "team");
        assert_eq!(tree.find_by_path(&["blog"]).unwrap().codename, "blog");
        assert_eq!(tree.find_by_path(&[]).unwrap().codename, "root");
        assert!(tree.find_by_path(&["about", "nobody"]).is_none());
    }

    #[test]
    fn depth_limits_descent() {
        let tree = NavigationItem::build(&site(), 1).unwrap();
        assert!(tree.find_by_codename("about").is_some());
        assert!(tree.find_by_codename("team").is_none());
    }

    #[test]
    fn cycles_are_not_followed() {
        let mut response = site();
        let looped = nav_item("team", "team", &["about"], json!({}));
        response.modular_content.insert("team".into(), looped);

        let tree = NavigationItem::build(&response, 10).unwrap();
        let team = tree.find_by_codename("team").unwrap();
        assert!(team.children.is_empty());
    }

    #[test]
    fn missing_and_foreign_children_are_skipped() {
        let mut response = site();
        response.modular_content.remove("group");
        let mut article = nav_item("old_about", "old-about", &[], json!({}));
        article.system.content_type = "article".into();
        response.modular_content.insert("old_about".into(), article);

        let tree = NavigationItem::build(&response, 6).unwrap();
        let codenames: Vec<&str> = tree.children.iter().map(|c| c.codename.as_str()).collect();
        assert_eq!(codenames, vec!["about"]);
    }

    #[test]
    fn root_must_be_a_navigation_item() {
        let mut response = site();
        response.item.system.content_type = "article".into();
        let err = NavigationItem::build(&response, 6).unwrap_err();
        assert!(matches!(err, CoreError::NotNavigationItem(c) if c == "root"));
    }
}
