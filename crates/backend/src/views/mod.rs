//! HTML views.
//!
//! Pages with data are assembled in [`pages`]; content-only pages are plain
//! HTML files in the configured views directory.

use anyhow::Context;
use std::path::Path;

pub mod pages;

/// Escape untrusted text for HTML body and attribute context.
pub fn escape(text: &str) -> String {
    ammonia::clean_text(text)
}

pub fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width,initial-scale=1" />
  <title>{title}</title>
  <link rel="stylesheet" href="/css/style.css" />
</head>
<body>
  <nav class="site-nav">
    <a href="/">Home</a>
    <a href="/year">Timeline</a>
    <a href="/news">News</a>
    <a href="/about">About</a>
  </nav>
  <main>
{body}
  </main>
</body>
</html>
"#,
        title = escape(title),
        body = body
    )
}

/// Read `<views_dir>/<name>.html`. Names may contain `/` for sub-folders.
pub async fn render_template(views_dir: &Path, name: &str) -> anyhow::Result<String> {
    let path = views_dir.join(format!("{name}.html"));
    tokio::fs::read_to_string(&path)
        .await
        .with_context(|| format!("template {} not found at {}", name, path.display()))
}
