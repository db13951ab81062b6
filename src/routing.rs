//! Route table shared by the browser router and the static host.

use crate::content::{blog_post_by_slug, lesson_by_slug};
use crate::services::guard::GuardPolicy;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    SignIn,
    SignUp,
}

impl AuthMode {
    /// `mode=signup` in the query string selects the sign-up form.
    pub fn from_query(query: &str) -> Self {
        let query = query.trim_start_matches('?');
        let signup = query
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .any(|(k, v)| k == "mode" && v == "signup");

        if signup { Self::SignUp } else { Self::SignIn }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Self::SignIn => Self::SignUp,
            Self::SignUp => Self::SignIn,
        }
    }

    pub fn href(&self) -> &'static str {
        match self {
            Self::SignIn => "/auth",
            Self::SignUp => "/auth?mode=signup",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Learn,
    Lesson(String),
    Blog,
    BlogPost(String),
    Support,
    Auth(AuthMode),
    Dashboard,
    Builder,
    NotFound,
}

impl Route {
    pub fn parse(path: &str, query: &str) -> Self {
        let path = path.trim_end_matches('/');
        let segments: Vec<&str> =
            path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Self::Home,
            ["learn"] => Self::Learn,
            ["learn", slug] => Self::Lesson(slug.to_string()),
            ["blog"] => Self::Blog,
            ["blog", slug] => Self::BlogPost(slug.to_string()),
            ["support"] => Self::Support,
            ["auth"] => Self::Auth(AuthMode::from_query(query)),
            ["dashboard"] => Self::Dashboard,
            ["builder"] => Self::Builder,
            _ => Self::NotFound,
        }
    }

    pub fn href(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Learn => "/learn".to_string(),
            Self::Lesson(slug) => format!("/learn/{}", slug),
            Self::Blog => "/blog".to_string(),
            Self::BlogPost(slug) => format!("/blog/{}", slug),
            Self::Support => "/support".to_string(),
            Self::Auth(mode) => mode.href().to_string(),
            Self::Dashboard => "/dashboard".to_string(),
            Self::Builder => "/builder".to_string(),
            Self::NotFound => "/404".to_string(),
        }
    }

    /// Session requirement of the page, if any.
    pub fn guard(&self) -> Option<GuardPolicy> {
        match self {
            Self::Dashboard | Self::Builder => {
                Some(GuardPolicy::RequiresIdentity)
            }
            Self::Auth(_) => Some(GuardPolicy::ForbidsIdentity),
            _ => None,
        }
    }

    /// Whether the page exists; unknown lesson and article slugs still
    /// resolve client-side, where they redirect to their index.
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::NotFound)
    }

    /// Where a detail route with an unknown slug sends the visitor.
    pub fn fallback(&self) -> Option<Route> {
        match self {
            Self::Lesson(slug) if lesson_by_slug(slug).is_none() => {
                Some(Self::Learn)
            }
            Self::BlogPost(slug) if blog_post_by_slug(slug).is_none() => {
                Some(Self::Blog)
            }
            _ => None,
        }
    }
}

/// Nav highlighting: exact match, or a sub-page of `href`.
pub fn is_active(current: &str, href: &str) -> bool {
    if href == "/" {
        return current == "/";
    }
    current == href
        || current
            .strip_prefix(href)
            .is_some_and(|rest| rest.starts_with('/'))
}
