use contracts::auth::{LoginRequest, RegisterRequest, UserInfo};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};
use crate::shared::api::ApiError;

#[derive(Clone, Debug)]
pub struct SessionState {
    pub token: Option<String>,
    pub user: Option<UserInfo>,
    /// True until the stored token (if any) has been validated on startup.
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            token: None,
            user: None,
            loading: true,
        }
    }
}

/// Handle over the session signals. Passed through context and injected into
/// every component and call that needs authentication state; there is no
/// module-level singleton.
#[derive(Clone, Copy)]
pub struct Session {
    state: RwSignal<SessionState>,
}

impl Session {
    fn new() -> Self {
        Self {
            state: RwSignal::new(SessionState::default()),
        }
    }

    pub fn loading(&self) -> bool {
        self.state.get().loading
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.get().token.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.state
            .get()
            .user
            .as_ref()
            .map(|u| u.is_admin())
            .unwrap_or(false)
    }

    pub fn user(&self) -> Option<UserInfo> {
        self.state.get().user
    }

    /// Persist the token and switch the session to authenticated.
    pub fn apply_login(&self, token: String, user: UserInfo) {
        storage::save_token(&token);
        self.state.set(SessionState {
            token: Some(token),
            user: Some(user),
            loading: false,
        });
    }

    /// Clear the persisted token and in-memory user. Idempotent.
    pub fn logout(&self) {
        storage::clear_token();
        self.state.set(SessionState {
            token: None,
            user: None,
            loading: false,
        });
    }

    /// Restore the session from a stored token. Validation failure demotes
    /// to logged-out silently; the user sees the login page, not an error.
    async fn load(&self) {
        let Some(token) = storage::get_token() else {
            self.state.update(|s| s.loading = false);
            return;
        };

        match api::me().await {
            Ok(user) => {
                self.state.set(SessionState {
                    token: Some(token),
                    user: Some(user),
                    loading: false,
                });
            }
            Err(e) => {
                log::info!("stored token rejected, logging out: {}", e);
                self.logout();
            }
        }
    }
}

/// Login and update the injected session on success.
pub async fn login(session: Session, request: LoginRequest) -> Result<(), ApiError> {
    let response = api::login(&request).await?;
    session.apply_login(response.token, response.user);
    Ok(())
}

/// Register and update the injected session on success.
pub async fn register(session: Session, request: RegisterRequest) -> Result<(), ApiError> {
    let response = api::register(&request).await?;
    session.apply_login(response.token, response.user);
    Ok(())
}

/// Session context provider component.
#[component]
pub fn SessionProvider(children: ChildrenFn) -> impl IntoView {
    let session = Session::new();

    Effect::new(move |_| {
        spawn_local(async move {
            session.load().await;
        });
    });

    provide_context(session);

    children()
}

/// Hook to access the session handle.
pub fn use_session() -> Session {
    use_context::<Session>().expect("SessionProvider not found in component tree")
}
