use axum::extract::{Query, State};
use axum::http::{header, HeaderMap, HeaderValue, StatusCode};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::Form;
use axum::Json;
use axum::Router;
use serde::Deserialize;

use super::pages::{
    render_blog_page, render_contact_page, render_home_page, BlogPageParams, ContactPageParams,
    ContactStatus, HomePageParams,
};
use super::AppState;
use crate::contact::{self, ContactForm};
use crate::listing::{ListingFilter, ListingQuery, ListingResponse, ListingState};
use crate::theme::{CookieStore, StoreError, ThemePreferences, ThemeState};

/// Create the router with all routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/blog", get(blog))
        .route("/contact", get(contact_form).post(contact_submit))
        .route("/preferences/theme", post(toggle_theme))
        .route("/preferences/color-scheme", post(toggle_color_scheme))
        .route("/api/posts", get(api_posts))
        .route("/healthz", get(health))
}

// ========== HTML Routes ==========

async fn home(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let catalog = state.fetcher.load().await;

    let html = render_home_page(&HomePageParams {
        prefs: preferences(&headers),
        site_name: &state.config.site_name,
        posts: catalog.posts(),
        fetch_failed: catalog.fetch_failed(),
    });
    Html(html.into_string()).into_response()
}

async fn blog(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<ListingQuery>,
) -> Response {
    let catalog = state.fetcher.load().await;
    let listing = ListingState::with_filter(ListingFilter::from(&params));
    let view = listing.view(catalog.posts());

    tracing::debug!(
        search = %listing.filter().search,
        category = listing.filter().category.label(),
        shown = view.len(),
        "Built blog listing"
    );

    let html = render_blog_page(&BlogPageParams {
        prefs: preferences(&headers),
        site_name: &state.config.site_name,
        all_posts: catalog.posts(),
        filter: listing.filter(),
        view: &view,
        fetch_failed: catalog.fetch_failed(),
    });
    Html(html.into_string()).into_response()
}

async fn contact_form(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let form = ContactForm::default();
    let html = render_contact_page(&ContactPageParams {
        prefs: preferences(&headers),
        site_name: &state.config.site_name,
        form: &form,
        status: ContactStatus::Fresh,
    });
    Html(html.into_string()).into_response()
}

async fn contact_submit(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<ContactForm>,
) -> Response {
    let prefs = preferences(&headers);

    match form.validate() {
        Ok(submission) => {
            contact::submit(&submission);
            let html = render_contact_page(&ContactPageParams {
                prefs,
                site_name: &state.config.site_name,
                form: &ContactForm::default(),
                status: ContactStatus::Sent,
            });
            Html(html.into_string()).into_response()
        }
        Err(errors) => {
            tracing::debug!(errors = %errors, "Rejected contact form");
            let html = render_contact_page(&ContactPageParams {
                prefs,
                site_name: &state.config.site_name,
                form: &form,
                status: ContactStatus::Invalid(&errors),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, Html(html.into_string())).into_response()
        }
    }
}

async fn health() -> &'static str {
    "OK"
}

// ========== Preference Routes ==========

#[derive(Debug, Default, Deserialize)]
pub struct ToggleForm {
    #[serde(default)]
    return_to: String,
}

async fn toggle_theme(headers: HeaderMap, Form(form): Form<ToggleForm>) -> Response {
    apply_toggle(&headers, &form, ThemeState::toggle_theme)
}

async fn toggle_color_scheme(headers: HeaderMap, Form(form): Form<ToggleForm>) -> Response {
    apply_toggle(&headers, &form, ThemeState::toggle_color_scheme)
}

/// Run one toggle against the visitor's cookies and redirect back with the
/// updated values.
fn apply_toggle<F>(headers: &HeaderMap, form: &ToggleForm, toggle: F) -> Response
where
    F: FnOnce(&ThemeState<CookieStore>) -> Result<ThemePreferences, StoreError>,
{
    let store = CookieStore::from_header(cookie_header(headers));
    let result = ThemeState::init(store).and_then(|state| {
        let prefs = toggle(&state)?;
        let cookies = state.teardown().set_cookie_headers()?;
        Ok((prefs, cookies))
    });

    let (prefs, cookies) = match result {
        Ok(updated) => updated,
        Err(e) => {
            tracing::error!("Failed to update theme preferences: {e}");
            return (StatusCode::INTERNAL_SERVER_ERROR, "Failed to update preferences")
                .into_response();
        }
    };

    tracing::debug!(
        theme = prefs.theme.as_str(),
        color_scheme = prefs.color_scheme.as_str(),
        "Theme preferences updated"
    );

    let target = if form.return_to.is_empty() {
        referer_path(headers).unwrap_or_default()
    } else {
        form.return_to.clone()
    };

    let mut response = Redirect::to(safe_return_to(&target)).into_response();
    for cookie in cookies {
        match HeaderValue::from_str(&cookie) {
            Ok(value) => {
                response.headers_mut().append(header::SET_COOKIE, value);
            }
            Err(e) => tracing::warn!("Skipping invalid Set-Cookie value: {e}"),
        }
    }
    response
}

/// Only same-site absolute paths that fit in a `Location` header are
/// accepted; anything else goes home.
fn safe_return_to(target: &str) -> &str {
    let same_site =
        target.starts_with('/') && !target.starts_with("//") && !target.contains('\\');
    let header_safe = !target.bytes().any(|b| b < 0x20 || b == 0x7f)
        && HeaderValue::from_str(target).is_ok();
    if same_site && header_safe {
        target
    } else {
        "/"
    }
}

/// Path and query of the `Referer`, when it names this site.
fn referer_path(headers: &HeaderMap) -> Option<String> {
    let referer = headers.get(header::REFERER)?.to_str().ok()?;
    let url = url::Url::parse(referer).ok()?;
    let host = headers.get(header::HOST).and_then(|h| h.to_str().ok());
    let referer_host = match (url.host_str(), url.port()) {
        (Some(name), Some(port)) => format!("{name}:{port}"),
        (Some(name), None) => name.to_string(),
        (None, _) => return None,
    };
    if host != Some(referer_host.as_str()) {
        return None;
    }
    Some(match url.query() {
        Some(query) => format!("{}?{query}", url.path()),
        None => url.path().to_string(),
    })
}

fn cookie_header(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::COOKIE)
        .and_then(|value| value.to_str().ok())
}

/// The visitor's stored preferences, or the defaults if they cannot be read.
fn preferences(headers: &HeaderMap) -> ThemePreferences {
    let store = CookieStore::from_header(cookie_header(headers));
    ThemePreferences::load(&store).unwrap_or_else(|e| {
        tracing::warn!("Failed to read theme preferences: {e}");
        ThemePreferences::default()
    })
}

// ========== API Routes ==========

async fn api_posts(State(state): State<AppState>, Query(params): Query<ListingQuery>) -> Response {
    let catalog = state.fetcher.load().await;
    let listing = ListingState::with_filter(ListingFilter::from(&params));
    let view = listing.view(catalog.posts());

    Json(ListingResponse::new(
        catalog.posts(),
        listing.filter(),
        &view,
        catalog.fetch_failed(),
    ))
    .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_return_to() {
        assert_eq!(safe_return_to("/blog?q=ai"), "/blog?q=ai");
        assert_eq!(safe_return_to("/"), "/");
        assert_eq!(safe_return_to(""), "/");
        assert_eq!(safe_return_to("//evil.example"), "/");
        assert_eq!(safe_return_to("https://evil.example"), "/");
        assert_eq!(safe_return_to("/\\evil.example"), "/");
        assert_eq!(safe_return_to("/blog\r\nSet-Cookie: x=1"), "/");
        assert_eq!(safe_return_to("/blog\0"), "/");
        assert_eq!(safe_return_to("/blog\x7f"), "/");
    }

    #[test]
    fn test_referer_path_same_host_only() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("localhost:8080"));
        headers.insert(
            header::REFERER,
            HeaderValue::from_static("http://localhost:8080/blog?category=Strategy"),
        );
        assert_eq!(
            referer_path(&headers).as_deref(),
            Some("/blog?category=Strategy")
        );

        headers.insert(
            header::REFERER,
            HeaderValue::from_static("https://elsewhere.example/blog"),
        );
        assert_eq!(referer_path(&headers), None);

        assert_eq!(referer_path(&HeaderMap::new()), None);
    }

    #[test]
    fn test_preferences_from_cookie_header() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("theme=dark; colorScheme=bain"),
        );
        let prefs = preferences(&headers);
        assert_eq!(prefs.theme.as_str(), "dark");
        assert_eq!(prefs.color_scheme.as_str(), "bain");

        assert_eq!(preferences(&HeaderMap::new()), ThemePreferences::default());
    }
}
