//! Simulated login and the portal route table.
//!
//! Login never talks to anything: after form validation it waits the
//! configured delay and always succeeds. Routes are not guarded; the
//! authenticated flag only decides which nav links are shown.

use std::time::Duration;

use shared_types::{AppError, LoginRequest, PortalUser, UserRole};
use validator::Validate;

use crate::config;

/// Portal routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Login,
    Engineer,
    Supervisor,
    Compliance,
    NotFound,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Login => "/login",
            Route::Engineer => "/engineer",
            Route::Supervisor => "/supervisor",
            Route::Compliance => "/compliance",
            Route::NotFound => "*",
        }
    }

    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "" => Route::Home,
            "/login" => Route::Login,
            "/engineer" => Route::Engineer,
            "/supervisor" => Route::Supervisor,
            "/compliance" => Route::Compliance,
            _ => {
                tracing::warn!(path, "404: attempted to access non-existent route");
                Route::NotFound
            }
        }
    }

    pub fn for_role(role: UserRole) -> Self {
        match role {
            UserRole::Engineer => Route::Engineer,
            UserRole::Supervisor => Route::Supervisor,
            UserRole::Compliance => Route::Compliance,
        }
    }
}

/// A navigation bar entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub route: Route,
    pub requires_auth: bool,
}

const NAV_LINKS: [NavLink; 4] = [
    NavLink {
        label: "Home",
        route: Route::Home,
        requires_auth: false,
    },
    NavLink {
        label: "Engineer Dashboard",
        route: Route::Engineer,
        requires_auth: true,
    },
    NavLink {
        label: "Supervisor Dashboard",
        route: Route::Supervisor,
        requires_auth: true,
    },
    NavLink {
        label: "Compliance Dashboard",
        route: Route::Compliance,
        requires_auth: true,
    },
];

/// Links visible in the nav bar for the given auth state.
pub fn nav_links(authenticated: bool) -> Vec<NavLink> {
    NAV_LINKS
        .into_iter()
        .filter(|link| !link.requires_auth || authenticated)
        .collect()
}

/// Whether the nav bar renders at all on `route` (hidden on the login page).
pub fn shows_nav(route: Route) -> bool {
    route != Route::Login
}

#[derive(Debug, Clone)]
pub struct Session {
    user: Option<PortalUser>,
    login_delay: Duration,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self::with_delay(config::portal_config().login_delay())
    }

    pub fn with_delay(login_delay: Duration) -> Self {
        Self {
            user: None,
            login_delay,
        }
    }

    pub fn user(&self) -> Option<&PortalUser> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Validate the form, wait out the simulated round trip and sign in.
    /// Only validation can fail.
    #[tracing::instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&mut self, request: LoginRequest) -> Result<Route, AppError> {
        request.validate()?;
        let role = request
            .role
            .ok_or_else(|| AppError::internal("validated login is missing a role"))?;

        tokio::time::sleep(self.login_delay).await;

        self.user = Some(PortalUser {
            email: request.email,
            role,
        });
        tracing::info!(role = role.as_str(), "login successful");
        Ok(Route::for_role(role))
    }

    pub fn logout(&mut self) {
        if let Some(user) = self.user.take() {
            tracing::info!(email = %user.email, "logged out");
        }
    }

    pub fn nav_links(&self) -> Vec<NavLink> {
        nav_links(self.is_authenticated())
    }
}
