//! HTML views rendered with minijinja.
//!
//! A view named `Team` is the template `Team.html` in the views directory.

use minijinja::{path_loader, Environment, ErrorKind};
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum ViewError {
    #[error("views directory does not exist: {}", .0.display())]
    MissingDir(PathBuf),
    #[error("view '{0}' not found")]
    NotFound(String),
    #[error("failed to render view '{name}': {source}")]
    Render {
        name: String,
        #[source]
        source: minijinja::Error,
    },
}

pub struct ViewEngine {
    env: Environment<'static>,
}

impl ViewEngine {
    /// Load templates lazily from `dir`.
    ///
    /// # Errors
    /// Returns `ViewError::MissingDir` if `dir` is not a directory.
    pub fn from_dir(dir: &Path) -> Result<Self, ViewError> {
        if !dir.is_dir() {
            return Err(ViewError::MissingDir(dir.to_path_buf()));
        }
        let mut env = Environment::new();
        env.set_loader(path_loader(dir));
        Ok(Self { env })
    }

    /// Build an engine from in-memory templates, keyed by file name.
    ///
    /// # Errors
    /// Returns `ViewError::Render` if a template fails to parse.
    pub fn from_templates<I>(templates: I) -> Result<Self, ViewError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut env = Environment::new();
        for (name, source) in templates {
            env.add_template_owned(name.clone(), source)
                .map_err(|source| ViewError::Render { name, source })?;
        }
        Ok(Self { env })
    }

    pub fn render<M: Serialize>(&self, view_name: &str, model: &M) -> Result<String, ViewError> {
        let file = format!("{view_name}.html");
        let template = self.env.get_template(&file).map_err(|e| match e.kind() {
            ErrorKind::TemplateNotFound => ViewError::NotFound(view_name.to_string()),
            _ => ViewError::Render {
                name: view_name.to_string(),
                source: e,
            },
        })?;
        template.render(model).map_err(|source| ViewError::Render {
            name: view_name.to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PageViewModel;
    use navmenu_core::{ContentItem, NavigationItem};
    use serde_json::json;
    use std::sync::Arc;

    fn model() -> PageViewModel {
        let navigation = NavigationItem {
            codename: "root".into(),
            title: "Home".into(),
            children: vec![NavigationItem {
                codename: "about".into(),
                title: "About us".into(),
                url_slug: "about".into(),
                url_path: "about".into(),
                ..NavigationItem::default()
            }],
            ..NavigationItem::default()
        };
        let item: ContentItem = serde_json::from_value(json!({
            "system": { "id": "1", "name": "About page", "codename": "about_page", "type": "page" },
            "elements": {
                "headline": { "type": "text", "name": "Headline", "value": "Roasting <since> 1999" },
                "body": { "type": "rich_text", "name": "Body", "value": "<p>We roast.</p>" }
            }
        }))
        .unwrap();
        PageViewModel {
            navigation: Arc::new(navigation),
            body: vec![item],
        }
    }

    #[test]
    fn shipped_default_view_renders_menu_and_body() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../views");
        let views = ViewEngine::from_dir(&dir).unwrap();
        let html = views.render("Default", &model()).unwrap();

        assert!(html.contains(r#"<a href="/about">About us</a>"#));
        assert!(html.contains("Roasting &lt;since&gt; 1999"));
        assert!(html.contains("<p>We roast.</p>"));
    }

    #[test]
    fn unknown_view_is_not_found() {
        let views = ViewEngine::from_templates([("Default.html".to_string(), "x".to_string())])
            .unwrap();
        let err = views.render("Missing", &model()).unwrap_err();
        assert!(matches!(err, ViewError::NotFound(name) if name == "Missing"));
    }

    #[test]
    fn missing_directory_is_rejected() {
        let err = ViewEngine::from_dir(Path::new("/definitely/not/here")).err().unwrap();
        assert!(matches!(err, ViewError::MissingDir(_)));
    }
}
