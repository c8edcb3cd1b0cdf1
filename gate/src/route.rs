//! Route table and per-navigation route requests.
//!
//! The app shell registers one router entry per [`Route`] variant. Every route
//! except the login surface and the catch-all sits behind the session gate.

#[cfg(test)]
#[path = "route_test.rs"]
mod route_test;

use crate::gate::Redirect;

/// Query parameter carrying the post-login destination.
pub const REDIRECT_PARAM: &str = "redirect";

/// A page of the site.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    Characters,
    Stories,
    Read { story_id: String },
    About,
    Assistant,
    AnonymousChat,
    Auth,
    NotFound,
}

impl Route {
    /// Resolve a location path. Query strings, fragments and trailing slashes
    /// are ignored.
    #[must_use]
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Self::Home,
            ["characters"] => Self::Characters,
            ["stories"] => Self::Stories,
            ["read", id] => Self::Read { story_id: (*id).to_owned() },
            ["about"] => Self::About,
            ["assistant"] => Self::Assistant,
            ["anonymous-chat"] => Self::AnonymousChat,
            ["auth"] => Self::Auth,
            _ => Self::NotFound,
        }
    }

    /// Canonical path for links. `NotFound` has no path of its own and maps to `/`.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Home | Self::NotFound => "/".to_owned(),
            Self::Characters => "/characters".to_owned(),
            Self::Stories => "/stories".to_owned(),
            Self::Read { story_id } => format!("/read/{story_id}"),
            Self::About => "/about".to_owned(),
            Self::Assistant => "/assistant".to_owned(),
            Self::AnonymousChat => "/anonymous-chat".to_owned(),
            Self::Auth => "/auth".to_owned(),
        }
    }

    /// Whether the route must be wrapped by the session gate.
    #[must_use]
    pub fn is_protected(&self) -> bool {
        !matches!(self, Self::Auth | Self::NotFound)
    }
}

/// One navigation event: where the visitor wants to go, and where to send
/// them after login if this is the login surface.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RouteRequest {
    pub path: String,
    pub redirect_to: Option<String>,
}

impl RouteRequest {
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into(), redirect_to: None }
    }

    /// Build from a router location, picking up the `redirect` parameter.
    #[must_use]
    pub fn from_path_and_query(path: impl Into<String>, query: &str) -> Self {
        let query = query.trim_start_matches('?');
        let redirect_to = url::form_urlencoded::parse(query.as_bytes())
            .find(|(k, _)| k == REDIRECT_PARAM)
            .map(|(_, v)| v.into_owned())
            .filter(|v| !v.is_empty());
        Self { path: path.into(), redirect_to }
    }

    #[must_use]
    pub fn route(&self) -> Route {
        Route::parse(&self.path)
    }

    /// Redirect to the login surface that returns here afterwards.
    #[must_use]
    pub fn login_redirect(&self, login_path: &str) -> Redirect {
        let back = self.path.split('#').next().unwrap_or_default();
        if back.is_empty() || back == "/" {
            return Redirect { to: login_path.to_owned() };
        }
        let query: String = url::form_urlencoded::Serializer::new(String::new())
            .append_pair(REDIRECT_PARAM, back)
            .finish();
        Redirect { to: format!("{login_path}?{query}") }
    }

    /// Where to go once signed in.
    #[must_use]
    pub fn post_login_target(&self) -> String {
        sanitize_redirect(self.redirect_to.as_deref())
    }
}

/// Accept only same-site absolute paths that do not lead back to the login
/// surface. Anything else falls back to `/`.
///
/// Control characters are rejected outright: URL parsers drop tab and
/// newline, so `/\t/host` would resolve as `//host`.
#[must_use]
pub fn sanitize_redirect(target: Option<&str>) -> String {
    let Some(target) = target.map(str::trim) else {
        return "/".to_owned();
    };
    if target.chars().any(char::is_control) {
        log::warn!("route: rejected redirect target with control characters");
        return "/".to_owned();
    }
    let same_site = target.starts_with('/') && !target.starts_with("//") && !target.contains('\\');
    if !same_site || Route::parse(target) == Route::Auth {
        return "/".to_owned();
    }
    target.to_owned()
}

/// Remove the deployment base (e.g. `/LCBAD`) from a location path.
#[must_use]
pub fn strip_base<'a>(base: &str, path: &'a str) -> &'a str {
    let base = base.trim_end_matches('/');
    if base.is_empty() {
        return path;
    }
    match path.strip_prefix(base) {
        Some("") => "/",
        Some(rest) if rest.starts_with('/') => rest,
        _ => path,
    }
}
