//! Layout Shell
//!
//! The page skeleton every view extends: sidebar navigation, top bar,
//! flash-message region, and the `title`, `extra_css`, `content` and
//! `extra_scripts` blocks (see `templates/base.html`).
//!
//! Views embed a [`LayoutContext`] field named `layout`; the base template
//! reads everything it needs from there, so the current endpoint and the
//! pending flash messages are always passed in explicitly.

use askama::Template;

use crate::config::UiConfig;
use crate::view::error::ViewResult;
use crate::view::model::FlashMessage;
use crate::view::nav::{sidebar, Endpoint, NavLink};

/// Third-party asset URLs loaded by every page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assets {
    pub bootstrap_css: String,
    pub icons_css: String,
    pub chart_js: String,
    pub bootstrap_js: String,
}

impl Assets {
    pub fn from_config(config: &UiConfig) -> Self {
        Self {
            bootstrap_css: config.bootstrap_css_url.clone(),
            icons_css: config.icons_css_url.clone(),
            chart_js: config.chart_js_url.clone(),
            bootstrap_js: config.bootstrap_js_url.clone(),
        }
    }
}

/// Everything the base template needs for one page
#[derive(Debug, Clone)]
pub struct LayoutContext {
    pub app_name: String,
    pub title: String,
    pub heading: String,
    pub active: Endpoint,
    pub nav: Vec<NavLink>,
    pub flashes: Vec<FlashMessage>,
    pub assets: Assets,
    pub extra_stylesheets: Vec<String>,
    pub extra_scripts: Vec<String>,
}

impl LayoutContext {
    /// Create a layout for `active`, with the heading defaulting to the title
    pub fn new(config: &UiConfig, title: impl Into<String>, active: Endpoint) -> Self {
        let title = title.into();
        Self {
            app_name: config.app_name.clone(),
            heading: title.clone(),
            title,
            active,
            nav: sidebar(active),
            flashes: Vec::new(),
            assets: Assets::from_config(config),
            extra_stylesheets: Vec::new(),
            extra_scripts: Vec::new(),
        }
    }

    pub fn heading(mut self, heading: impl Into<String>) -> Self {
        self.heading = heading.into();
        self
    }

    pub fn flashes(mut self, flashes: Vec<FlashMessage>) -> Self {
        self.flashes = flashes;
        self
    }

    /// Append a stylesheet loaded after the base ones
    pub fn stylesheet(mut self, href: impl Into<String>) -> Self {
        self.extra_stylesheets.push(href.into());
        self
    }

    /// Append a script loaded after the base ones
    pub fn script(mut self, src: impl Into<String>) -> Self {
        self.extra_scripts.push(src.into());
        self
    }
}

/// The shell on its own, wrapping a pre-rendered content fragment
#[derive(Template)]
#[template(path = "shell.html")]
pub struct ShellPage {
    pub layout: LayoutContext,
    /// Raw HTML inserted unescaped into the content block
    pub content: String,
}

impl ShellPage {
    pub fn new(layout: LayoutContext, content: impl Into<String>) -> Self {
        Self {
            layout,
            content: content.into(),
        }
    }

    pub fn render_html(&self) -> ViewResult<String> {
        Ok(self.render()?)
    }
}

#[derive(Template)]
#[template(
    source = r#"<div class="alert alert-danger" role="alert">
    <h4 class="alert-heading">Error loading dashboard</h4>
    <p class="mb-1">{{ message }}</p>
    <small class="text-muted">Error code: {{ code }} | Request ID: {{ request_id }}</small>
</div>
<p>Please check the application logs for more details.</p>
<a href="/" class="btn btn-primary">Try Again</a>"#,
    ext = "html"
)]
struct ErrorBody<'a> {
    message: &'a str,
    code: &'a str,
    request_id: &'a str,
}

/// Full error page: the shell around an escaped error message
pub fn error_page(
    config: &UiConfig,
    message: &str,
    code: &str,
    request_id: &str,
) -> ViewResult<String> {
    let body = ErrorBody {
        message,
        code,
        request_id,
    }
    .render()?;
    let layout = LayoutContext::new(config, "Dashboard Error", Endpoint::Dashboard);
    ShellPage::new(layout, body).render_html()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(active: Endpoint) -> LayoutContext {
        LayoutContext::new(&UiConfig::default(), "Dashboard", active)
    }

    #[test]
    fn test_layout_defaults() {
        let ctx = layout(Endpoint::Dashboard);
        assert_eq!(ctx.title, "Dashboard");
        assert_eq!(ctx.heading, "Dashboard");
        assert_eq!(ctx.app_name, "Loan Portfolio Manager");
        assert!(ctx.flashes.is_empty());
        assert_eq!(ctx.nav.len(), 5);
    }

    #[test]
    fn test_shell_document_structure() {
        let html = ShellPage::new(layout(Endpoint::Dashboard), "<p id=\"body\">Hello</p>")
            .render_html()
            .unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Dashboard - Loan Portfolio Manager</title>"));
        assert!(html.contains("<p id=\"body\">Hello</p>"));
        assert!(html.contains("All Loans"));
        assert!(html.contains("Add New Loan"));
        assert!(html.contains("id=\"userMenu\""));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn test_shell_marks_active_link() {
        let html = ShellPage::new(layout(Endpoint::Settings), "")
            .render_html()
            .unwrap();

        assert!(html.contains(r#"<a class="nav-link active" href="/settings">"#));
        assert!(html.contains(r#"<a class="nav-link" href="/">"#));
        assert_eq!(html.matches("nav-link active").count(), 1);
    }

    #[test]
    fn test_shell_renders_flash_messages() {
        let ctx = layout(Endpoint::Dashboard).flashes(vec![
            FlashMessage::success("Loan added"),
            FlashMessage::danger("<b>Payment failed</b>"),
        ]);
        let html = ShellPage::new(ctx, "").render_html().unwrap();

        assert!(html.contains("alert alert-success alert-dismissible fade show"));
        assert!(html.contains("Loan added"));
        assert!(html.contains("alert-danger"));
        assert!(html.contains("&lt;b&gt;Payment failed"));
        assert!(!html.contains("<b>Payment failed</b>"));
    }

    #[test]
    fn test_shell_without_flashes_has_no_alerts() {
        let html = ShellPage::new(layout(Endpoint::Dashboard), "")
            .render_html()
            .unwrap();
        assert!(!html.contains("alert-dismissible"));
    }

    #[test]
    fn test_extra_assets_follow_base_assets() {
        let ctx = layout(Endpoint::Reports)
            .stylesheet("/static/css/reports.css")
            .script("/static/js/reports.js");
        let html = ShellPage::new(ctx, "").render_html().unwrap();

        let base_css = html.find("bootstrap.min.css").unwrap();
        let extra_css = html.find("/static/css/reports.css").unwrap();
        assert!(base_css < extra_css);

        let chart_js = html.find("chart.umd").unwrap();
        let bundle_js = html.find("bootstrap.bundle.min.js").unwrap();
        let extra_js = html.find("/static/js/reports.js").unwrap();
        assert!(chart_js < extra_js);
        assert!(bundle_js < extra_js);
    }

    #[test]
    fn test_heading_override() {
        let ctx = layout(Endpoint::Dashboard).heading("Portfolio Overview");
        let html = ShellPage::new(ctx, "").render_html().unwrap();
        assert!(html.contains("<h1 class=\"h2\">Portfolio Overview</h1>"));
    }

    #[test]
    fn test_error_page_escapes_message() {
        let html = error_page(&UiConfig::default(), "bad <snapshot>", "VIEW_ERROR", "req-42").unwrap();

        assert!(html.contains("<title>Dashboard Error - Loan Portfolio Manager</title>"));
        assert!(html.contains("Error loading dashboard"));
        assert!(html.contains("bad &lt;snapshot&gt;"));
        assert!(html.contains("Error code: VIEW_ERROR | Request ID: req-42"));
        assert!(html.contains(r#"<a class="nav-link active" href="/">"#));
    }
}
