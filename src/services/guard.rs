use crate::types::SessionState;

/// Sign-in entry point for visitors without a session.
pub const SIGN_IN_PATH: &str = "/auth";
/// Where signed-in users land when they hit an auth-only page.
pub const LANDING_PATH: &str = "/dashboard";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardPolicy {
    /// Only signed-in users may see the page.
    RequiresIdentity,
    /// Only visitors without a session may see the page.
    ForbidsIdentity,
}

impl GuardPolicy {
    pub fn redirect_target(&self) -> &'static str {
        match self {
            Self::RequiresIdentity => SIGN_IN_PATH,
            Self::ForbidsIdentity => LANDING_PATH,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Loading,
    Redirect { to: &'static str, replace: bool },
    Render,
}

/// What a guarded page should do for `state`.
///
/// Nothing is decided while the session is still initializing, whatever
/// identity it currently carries.
pub fn decide(state: &SessionState, policy: GuardPolicy) -> GuardDecision {
    if state.initializing {
        return GuardDecision::Loading;
    }

    let allowed = match policy {
        GuardPolicy::RequiresIdentity => state.is_authenticated(),
        GuardPolicy::ForbidsIdentity => !state.is_authenticated(),
    };

    if allowed {
        GuardDecision::Render
    } else {
        GuardDecision::Redirect {
            to: policy.redirect_target(),
            replace: true,
        }
    }
}
