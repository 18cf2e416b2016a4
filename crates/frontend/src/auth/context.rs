//! Global identity context and provider
//!
//! Holds the authenticated partner for the lifetime of the page. Views never
//! mutate it directly; all changes go through reducer actions dispatched by
//! the session operations in [`super::session`].

use crate::api;
use crate::client::create_client;
use ding_http::types::UserInfo;
use std::rc::Rc;
use yew::prelude::*;

/// Identity state
#[derive(Clone, Debug, PartialEq)]
pub struct AuthContextData {
    pub user: Option<UserInfo>,
    /// True until the startup session probe has resolved either way.
    pub is_loading: bool,
}

/// Fields that can be patched locally without a server round trip
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub restaurant_id: Option<String>,
}

/// Identity context actions
pub enum AuthAction {
    SetUser(UserInfo),
    ClearUser,
    SetLoading(bool),
    Patch(UserPatch),
}

/// Identity context handle
pub type AuthContext = UseReducerHandle<AuthContextData>;

impl Default for AuthContextData {
    fn default() -> Self {
        Self {
            user: None,
            // Start loading until the startup probe settles.
            is_loading: true,
        }
    }
}

impl Reducible for AuthContextData {
    type Action = AuthAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            AuthAction::SetUser(user) => Rc::new(Self {
                user: Some(user),
                is_loading: self.is_loading,
            }),
            AuthAction::ClearUser => Rc::new(Self {
                user: None,
                is_loading: false,
            }),
            AuthAction::SetLoading(is_loading) => Rc::new(Self {
                is_loading,
                ..(*self).clone()
            }),
            AuthAction::Patch(patch) => {
                let user = self.user.clone().map(|mut user| {
                    if let Some(name) = patch.name {
                        user.name = name;
                    }
                    if let Some(email) = patch.email {
                        user.email = email;
                    }
                    if let Some(phone_number) = patch.phone_number {
                        user.phone_number = phone_number;
                    }
                    if let Some(restaurant_id) = patch.restaurant_id {
                        user.restaurant_id = Some(restaurant_id);
                    }
                    user
                });
                Rc::new(Self {
                    user,
                    is_loading: self.is_loading,
                })
            }
        }
    }
}

/// Auth provider props
#[derive(Properties, PartialEq)]
pub struct AuthProviderProps {
    pub children: Children,
}

/// Identity provider component
///
/// On mount, probes the session cookie and fetches the profile when it is
/// valid. Every outcome, including transport failure, ends with
/// `is_loading == false` and never reaches the view layer as a fault.
#[function_component(AuthProvider)]
pub fn auth_provider(props: &AuthProviderProps) -> Html {
    let auth_state = use_reducer(AuthContextData::default);

    {
        let auth_state = auth_state.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                run_session_probe(&auth_state).await;
                auth_state.dispatch(AuthAction::SetLoading(false));
            });
            || ()
        });
    }

    html! {
        <ContextProvider<AuthContext> context={auth_state}>
            {props.children.clone()}
        </ContextProvider<AuthContext>>
    }
}

async fn run_session_probe(auth_state: &AuthContext) {
    let client = match create_client() {
        Ok(client) => client,
        Err(error) => {
            gloo::console::error!("client init failed:", error.to_string());
            return;
        }
    };

    match api::call(client.verify_token()).await {
        Ok(verification) if verification.is_valid => {
            match api::call(client.me()).await {
                Ok(user) => auth_state.dispatch(AuthAction::SetUser(user)),
                Err(error) => {
                    gloo::console::warn!("profile fetch failed:", error.to_string());
                }
            }
        }
        Ok(_) => {}
        Err(error) => {
            gloo::console::warn!("session probe failed:", error.to_string());
        }
    }
}

/// Hook to use the identity context
#[hook]
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
        .expect("AuthContext not found. Make sure to wrap your component with AuthProvider")
}

/// Hook to get the current identity, if any
#[hook]
pub fn use_identity() -> Option<UserInfo> {
    let auth = use_auth();
    auth.user.clone()
}

/// Hook to check if an identity is present
#[hook]
pub fn use_is_authenticated() -> bool {
    let auth = use_auth();
    auth.user.is_some()
}
