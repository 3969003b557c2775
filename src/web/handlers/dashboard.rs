//! Dashboard home page: link table, search filter, and creation form.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Form, Query, State, rejection::FormRejection},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;

use super::{last_clicked_label, request_origin};
use crate::domain::entities::Link;
use crate::domain::errors::LinkError;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::validation::{is_valid_code, looks_like_url};

/// Query string of `GET /`.
#[derive(Debug, Default, Deserialize)]
pub struct DashboardQuery {
    /// Case-insensitive filter on code or target URL.
    pub q: Option<String>,
    /// Code of a link just created through the form.
    pub created: Option<String>,
}

/// Fields of the creation form.
#[derive(Debug, Default, Deserialize)]
pub struct CreateLinkForm {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub code: String,
}

/// One table row.
pub struct LinkView {
    pub code: String,
    pub short_url: String,
    pub target_url: String,
    pub total_clicks: i64,
    pub last_clicked: String,
}

impl LinkView {
    fn new(link: &Link, origin: &str) -> Self {
        Self {
            code: link.code.clone(),
            short_url: link.short_url(origin),
            target_url: link.target_url.clone(),
            total_clicks: link.total_clicks,
            last_clicked: last_clicked_label(link),
        }
    }
}

/// Template for the dashboard home page.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub links: Vec<LinkView>,
    pub total: usize,
    pub query: String,
    pub form_url: String,
    pub form_code: String,
    pub url_hint: Option<String>,
    pub code_hint: Option<String>,
    pub error: Option<String>,
    pub success: Option<String>,
}

/// Renders the dashboard home page.
///
/// # Endpoint
///
/// `GET /?q=<filter>`
pub async fn dashboard_handler(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
    headers: HeaderMap,
) -> Result<DashboardTemplate, AppError> {
    let mut page = render_page(&state, &headers, query.q.as_deref()).await?;

    page.success = query
        .created
        .filter(|code| is_valid_code(code))
        .map(|code| format!("Short link {code} created successfully."));

    Ok(page)
}

/// Handles the creation form.
///
/// # Endpoint
///
/// `POST /` (form-encoded `url`, `code`)
///
/// Shows inline hints for obviously wrong input before calling the service.
/// On success, redirects back to the dashboard with `303 See Other`.
/// Validation and conflict failures re-render the page with the message and
/// a 400/409 status.
pub async fn create_from_dashboard_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    form: Result<Form<CreateLinkForm>, FormRejection>,
) -> Result<Response, AppError> {
    let Form(form) = form?;

    let url_hint = url_hint(&form.url);
    let code_hint = code_hint(&form.code);

    if url_hint.is_some() || code_hint.is_some() {
        let mut page = render_page(&state, &headers, None).await?;
        page.form_url = form.url;
        page.form_code = form.code;
        page.url_hint = url_hint;
        page.code_hint = code_hint;
        return Ok((StatusCode::BAD_REQUEST, page).into_response());
    }

    match state
        .link_service
        .create_link(&form.url, Some(form.code.as_str()))
        .await
    {
        Ok(link) => Ok(Redirect::to(&format!("/?created={}", link.code)).into_response()),
        Err(e @ LinkError::Unexpected(_)) => Err(e.into()),
        Err(e) => {
            let message = e.to_string();
            let status = AppError::from(e).status();

            let mut page = render_page(&state, &headers, None).await?;
            page.form_url = form.url;
            page.form_code = form.code;
            page.error = Some(message);
            Ok((status, page).into_response())
        }
    }
}

async fn render_page(
    state: &AppState,
    headers: &HeaderMap,
    filter: Option<&str>,
) -> Result<DashboardTemplate, AppError> {
    let links = state.link_service.list_links().await?;
    let origin = request_origin(headers);
    let query = filter.unwrap_or_default().trim().to_string();

    let rows: Vec<LinkView> = filter_links(&links, &query)
        .map(|link| LinkView::new(link, &origin))
        .collect();

    Ok(DashboardTemplate {
        links: rows,
        total: links.len(),
        query,
        form_url: String::new(),
        form_code: String::new(),
        url_hint: None,
        code_hint: None,
        error: None,
        success: None,
    })
}

/// Links whose code or target URL contains `query`, ignoring case.
/// A blank query keeps everything.
fn filter_links<'a>(links: &'a [Link], query: &str) -> impl Iterator<Item = &'a Link> {
    let needle = query.trim().to_lowercase();

    links.iter().filter(move |link| {
        needle.is_empty()
            || link.code.to_lowercase().contains(&needle)
            || link.target_url.to_lowercase().contains(&needle)
    })
}

fn url_hint(url: &str) -> Option<String> {
    if url.trim().is_empty() {
        Some("Enter a valid URL".to_string())
    } else if !looks_like_url(url) {
        Some("URL should start with http(s) or domain".to_string())
    } else {
        None
    }
}

fn code_hint(code: &str) -> Option<String> {
    let code = code.trim();
    if code.is_empty() || is_valid_code(code) {
        None
    } else {
        Some("Codes must be 6-8 letters/numbers".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn link(code: &str, url: &str) -> Link {
        Link::new(code.to_string(), url.to_string(), 0, Utc::now(), None)
    }

    #[test]
    fn test_filter_links_matches_code_or_url() {
        let links = vec![
            link("Docs01", "https://docs.rs/"),
            link("promo9", "https://shop.example.com/sale"),
        ];

        let by_code: Vec<_> = filter_links(&links, "docs0").map(|l| l.code.as_str()).collect();
        assert_eq!(by_code, vec!["Docs01"]);

        let by_url: Vec<_> = filter_links(&links, "SHOP").map(|l| l.code.as_str()).collect();
        assert_eq!(by_url, vec!["promo9"]);

        assert_eq!(filter_links(&links, "  ").count(), 2);
        assert_eq!(filter_links(&links, "nothing").count(), 0);
    }

    #[test]
    fn test_url_hint() {
        assert_eq!(url_hint(" ").as_deref(), Some("Enter a valid URL"));
        assert_eq!(
            url_hint("localhost").as_deref(),
            Some("URL should start with http(s) or domain")
        );
        assert!(url_hint("example.com").is_none());
    }

    #[test]
    fn test_code_hint() {
        assert!(code_hint("").is_none());
        assert!(code_hint("abc123").is_none());
        assert_eq!(code_hint("ab").as_deref(), Some("Codes must be 6-8 letters/numbers"));
    }

    #[test]
    fn test_link_view_formats_never_clicked() {
        let view = LinkView::new(&link("abc123", "https://example.com/"), "http://localhost:3000");

        assert_eq!(view.short_url, "http://localhost:3000/abc123");
        assert_eq!(view.last_clicked, "Never clicked");
    }
}
