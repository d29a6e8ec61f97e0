//! Minimal server-side HTML for the listing and editor views.

use html_escape::{encode_double_quoted_attribute, encode_text};
use serde_json::Value;

use crate::views::{ViewError, ViewRenderer, INDEX_VIEW, MODIFY_VIEW};

const STYLESHEET: &str = "/styles/main.css";

/// Renders the `index` and `modify` views as plain HTML pages.
#[derive(Debug, Clone, Default)]
pub struct HtmlRenderer;

impl HtmlRenderer {
    pub fn new() -> Self {
        Self
    }

    fn index(&self, context: &Value) -> Result<String, ViewError> {
        let posts = context
            .get("posts")
            .and_then(Value::as_array)
            .ok_or_else(|| invalid(INDEX_VIEW, "missing posts array"))?;

        let mut body = String::from("<h1>Blog</h1>\n<a class=\"new\" href=\"/new\">New Post</a>\n<ul>\n");
        for post in posts {
            body.push_str(&post_item(post));
        }
        body.push_str("</ul>");

        Ok(page("Blog", &body))
    }

    fn modify(&self, context: &Value) -> Result<String, ViewError> {
        let heading = context
            .get("heading")
            .and_then(Value::as_str)
            .ok_or_else(|| invalid(MODIFY_VIEW, "missing heading"))?;
        let submit = context
            .get("submit")
            .and_then(Value::as_str)
            .ok_or_else(|| invalid(MODIFY_VIEW, "missing submit label"))?;

        // An edit link for a missing post renders the empty form.
        let post = context.get("post").filter(|post| post.is_object());
        let action = match post.and_then(|p| p.get("id")).and_then(Value::as_u64) {
            Some(id) => format!("/api/posts/{id}"),
            None => "/api/posts".to_string(),
        };
        let field = |name: &str| post.and_then(|p| text(p, name)).unwrap_or_default();

        let body = format!(
            "<h1>{heading}</h1>\n<form method=\"post\" action=\"{action}\">\n\
             <input type=\"text\" name=\"title\" placeholder=\"Title\" value=\"{}\" required>\n\
             <textarea name=\"content\" placeholder=\"Content\" rows=\"10\" required>{}</textarea>\n\
             <input type=\"text\" name=\"author\" placeholder=\"Author\" value=\"{}\" required>\n\
             <button type=\"submit\">{submit}</button>\n</form>",
            encode_double_quoted_attribute(field("title")),
            encode_text(field("content")),
            encode_double_quoted_attribute(field("author")),
            heading = encode_text(heading),
            submit = encode_text(submit),
        );

        Ok(page(heading, &body))
    }
}

impl ViewRenderer for HtmlRenderer {
    fn render(&self, view: &str, context: &Value) -> Result<String, ViewError> {
        match view {
            INDEX_VIEW => self.index(context),
            MODIFY_VIEW => self.modify(context),
            other => Err(ViewError::UnknownView(other.to_string())),
        }
    }
}

fn invalid(view: &str, reason: &str) -> ViewError {
    ViewError::InvalidContext {
        view: view.to_string(),
        reason: reason.to_string(),
    }
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{}</title>\n<link rel=\"stylesheet\" href=\"{STYLESHEET}\">\n</head>\n\
         <body>\n{body}\n</body>\n</html>\n",
        encode_text(title)
    )
}

fn post_item(post: &Value) -> String {
    let id = post.get("id").and_then(Value::as_u64).unwrap_or_default();
    let field = |name: &str| encode_text(text(post, name).unwrap_or_default());
    format!(
        "<li>\n<h2>{}</h2>\n<small>{}</small>\n<p>{}</p>\n<small>By: {}</small>\n\
         <a href=\"/edit/{id}\">Edit</a>\n<a href=\"/api/posts/delete/{id}\">Delete</a>\n</li>\n",
        field("title"),
        field("date"),
        field("content"),
        field("author"),
    )
}

/// String field of a JSON object.
fn text<'a>(object: &'a Value, key: &str) -> Option<&'a str> {
    object.get(key).and_then(Value::as_str)
}
