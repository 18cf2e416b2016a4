//! Application routes and providers

use crate::auth::AuthProvider;
use crate::components::{ProtectedRoute, PublicRoute, ToastProvider};
use crate::pages::{DashboardPage, LandingPage, LoginPage, OnboardingFlow};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    /// Single wizard route; the backend decides which step is current.
    #[at("/onboarding")]
    Onboarding,
    #[at("/dashboard")]
    Dashboard,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <LandingPage /> },
        Route::Login => html! {
            <PublicRoute>
                <LoginPage />
            </PublicRoute>
        },
        // Open to both anonymous visitors (account creation is the first
        // step) and signed-in partners resuming setup.
        Route::Onboarding => html! { <OnboardingFlow /> },
        Route::Dashboard => html! {
            <ProtectedRoute>
                <DashboardPage />
            </ProtectedRoute>
        },
        Route::NotFound => html! {
            <div class="min-h-screen flex items-center justify-center bg-gray-50">
                <div class="text-center">
                    <h1 class="text-3xl font-bold text-gray-900 mb-2">{"404"}</h1>
                    <p class="text-gray-500 mb-4">{"This page does not exist."}</p>
                    <Link<Route> to={Route::Home} classes="text-red-600 hover:underline">
                        {"Back to home"}
                    </Link<Route>>
                </div>
            </div>
        },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <ToastProvider>
            <BrowserRouter>
                <AuthProvider>
                    <Switch<Route> render={switch} />
                </AuthProvider>
            </BrowserRouter>
        </ToastProvider>
    }
}
