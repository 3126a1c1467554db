//! HTML views
//!
//! Templates are compiled into the binary and loaded into one shared
//! minijinja environment on first use.

use std::sync::OnceLock;

use axum::response::Html;
use minijinja::Environment;
use serde::Serialize;

use crate::error::PageError;

const TEMPLATES: &[(&str, &str)] = &[
    ("base.html", include_str!("../../templates/base.html")),
    ("home.html", include_str!("../../templates/home.html")),
    (
        "compliments_form.html",
        include_str!("../../templates/compliments_form.html"),
    ),
    (
        "compliments_results.html",
        include_str!("../../templates/compliments_results.html"),
    ),
    (
        "animal_facts.html",
        include_str!("../../templates/animal_facts.html"),
    ),
    (
        "image_filter.html",
        include_str!("../../templates/image_filter.html"),
    ),
    ("gif_search.html", include_str!("../../templates/gif_search.html")),
    ("error.html", include_str!("../../templates/error.html")),
];

static ENVIRONMENT: OnceLock<Environment<'static>> = OnceLock::new();

/// Shared template environment
pub fn environment() -> &'static Environment<'static> {
    ENVIRONMENT.get_or_init(|| {
        let mut env = Environment::new();
        for &(name, source) in TEMPLATES {
            env.add_template(name, source)
                .expect("Bundled templates must parse");
        }
        env
    })
}

/// Render a template into an HTML response body
pub fn render<S: Serialize>(name: &str, ctx: S) -> Result<Html<String>, PageError> {
    render_string(name, ctx).map(Html).map_err(|e| {
        tracing::error!("Failed to render {}: {:#}", name, e);
        PageError::internal("Something went wrong while rendering this page")
    })
}

/// Render a template to a plain string
pub fn render_string<S: Serialize>(name: &str, ctx: S) -> Result<String, minijinja::Error> {
    environment().get_template(name)?.render(ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use minijinja::context;

    #[test]
    fn test_all_templates_load() {
        for &(name, _) in TEMPLATES {
            assert!(environment().get_template(name).is_ok(), "{name}");
        }
    }

    #[test]
    fn test_html_is_escaped() {
        let html = render_string(
            "compliments_results.html",
            context! { users_name => "<script>", wants_compliments => false, compliments => Vec::<String>::new() },
        )
        .unwrap();
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }
}
