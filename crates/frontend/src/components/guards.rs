//! Route guards
//!
//! Both guards are pure functions of (identity presence, loading flag); the
//! wrapper components only translate the outcome into a spinner, a redirect,
//! or the wrapped view.

use crate::app::Route;
use crate::auth::use_auth;
use crate::components::spinner::PageSpinner;
use yew::prelude::*;
use yew_router::prelude::*;

/// What a guard decided to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Identity resolution still pending; show a wait indicator
    Pending,
    /// Send the visitor elsewhere
    Redirect,
    /// Render the wrapped view
    Render,
}

/// Guard for views that require an identity
pub fn protected_outcome(has_identity: bool, is_loading: bool) -> GuardOutcome {
    if is_loading {
        GuardOutcome::Pending
    } else if has_identity {
        GuardOutcome::Render
    } else {
        GuardOutcome::Redirect
    }
}

/// Guard for views that only make sense without an identity
pub fn public_outcome(has_identity: bool, is_loading: bool) -> GuardOutcome {
    if is_loading {
        GuardOutcome::Pending
    } else if has_identity {
        GuardOutcome::Redirect
    } else {
        GuardOutcome::Render
    }
}

#[derive(Properties, PartialEq)]
pub struct GuardProps {
    pub children: Children,
}

/// Renders its children only for authenticated visitors; everyone else goes
/// to the login route
#[function_component(ProtectedRoute)]
pub fn protected_route(props: &GuardProps) -> Html {
    let auth = use_auth();
    match protected_outcome(auth.user.is_some(), auth.is_loading) {
        GuardOutcome::Pending => html! { <PageSpinner /> },
        GuardOutcome::Redirect => html! { <Redirect<Route> to={Route::Login} /> },
        GuardOutcome::Render => html! { {props.children.clone()} },
    }
}

/// Renders its children only for anonymous visitors; signed-in partners go
/// to the dashboard
#[function_component(PublicRoute)]
pub fn public_route(props: &GuardProps) -> Html {
    let auth = use_auth();
    match public_outcome(auth.user.is_some(), auth.is_loading) {
        GuardOutcome::Pending => html! { <PageSpinner /> },
        GuardOutcome::Redirect => html! { <Redirect<Route> to={Route::Dashboard} /> },
        GuardOutcome::Render => html! { {props.children.clone()} },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn protected_never_renders_while_loading() {
        assert_eq!(protected_outcome(true, true), GuardOutcome::Pending);
        assert_eq!(protected_outcome(false, true), GuardOutcome::Pending);
    }

    #[test]
    fn protected_redirects_anonymous_visitors() {
        assert_eq!(protected_outcome(false, false), GuardOutcome::Redirect);
        assert_eq!(protected_outcome(true, false), GuardOutcome::Render);
    }

    #[test]
    fn public_never_renders_for_signed_in_partners() {
        assert_eq!(public_outcome(true, true), GuardOutcome::Pending);
        assert_eq!(public_outcome(true, false), GuardOutcome::Redirect);
        assert_eq!(public_outcome(false, false), GuardOutcome::Render);
    }
}
