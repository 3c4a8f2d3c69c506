// ABOUTME: Web UI assets compiled into the binary.
// ABOUTME: The index page template and the static files served under /static/.

const INDEX_TEMPLATE: &str = include_str!("../assets/templates/index.html");
const VERSION_PLACEHOLDER: &str = "{{version}}";

/// Version string shown in the UI.
pub const APP_VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

/// A static file with its content type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticAsset {
    pub content_type: &'static str,
    pub body: &'static str,
}

const STATIC_ASSETS: &[(&str, StaticAsset)] = &[
    (
        "app.js",
        StaticAsset {
            content_type: "text/javascript; charset=utf-8",
            body: include_str!("../assets/static/app.js"),
        },
    ),
    (
        "style.css",
        StaticAsset {
            content_type: "text/css; charset=utf-8",
            body: include_str!("../assets/static/style.css"),
        },
    ),
];

/// Render the index page for the given version.
pub fn render_index(version: &str) -> String {
    INDEX_TEMPLATE.replace(VERSION_PLACEHOLDER, &escape_html(version))
}

/// Look up a static asset by its path relative to `/static/`.
pub fn static_asset(path: &str) -> Option<StaticAsset> {
    STATIC_ASSETS
        .iter()
        .find(|(name, _)| *name == path)
        .map(|(_, asset)| *asset)
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&#34;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
