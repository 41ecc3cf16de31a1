//! Credential lifecycle operations: login, register, logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! These are the only writers of the session store. Each network operation
//! sets the loading flag for its duration, surfaces a toast on both
//! outcomes, and returns the result so forms can keep their own state on
//! failure. A failed operation leaves the session untouched.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::error::ApiError;
use super::gateway::Gateway;
use super::types::{AuthSuccess, LoginRequest, RegisterRequest};
use crate::state::notify::NotifyStore;
use crate::state::session::SessionStore;

#[cfg(feature = "hydrate")]
use gloo_net::http::Method;

#[cfg(any(test, feature = "hydrate"))]
const LOGIN_ENDPOINT: &str = "/login";
#[cfg(any(test, feature = "hydrate"))]
const REGISTER_ENDPOINT: &str = "/register";

/// Exchange credentials for a session via `POST /login`.
///
/// # Errors
///
/// Returns the failure after surfacing it as a toast; the session store is
/// unchanged on any error path.
pub async fn login(
    session: SessionStore,
    notify: NotifyStore,
    gateway: Gateway,
    request: &LoginRequest,
) -> Result<AuthSuccess, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        perform(session, notify, gateway, LOGIN_ENDPOINT, request, "Login successful!").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, notify, gateway, request);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Create an account and open a session via `POST /register`.
///
/// # Errors
///
/// Same contract as [`login`].
pub async fn register(
    session: SessionStore,
    notify: NotifyStore,
    gateway: Gateway,
    request: &RegisterRequest,
) -> Result<AuthSuccess, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        perform(
            session,
            notify,
            gateway,
            REGISTER_ENDPOINT,
            request,
            "Registration successful!",
        )
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, notify, gateway, request);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// End the session locally. Always succeeds; no backend call.
pub fn logout(session: SessionStore, notify: NotifyStore) {
    session.clear();
    notify.success("Logged out successfully!");
}

#[cfg(feature = "hydrate")]
async fn perform<B: serde::Serialize>(
    session: SessionStore,
    notify: NotifyStore,
    gateway: Gateway,
    endpoint: &str,
    request: &B,
    success_message: &str,
) -> Result<AuthSuccess, ApiError> {
    session.set_loading(true);
    let result = async {
        let response = gateway.submit(Method::POST, endpoint, request).await?;
        super::api::expect_json::<AuthSuccess>(response).await
    }
    .await;
    match &result {
        Ok(auth) => {
            session.set(auth.user.clone(), auth.token.clone());
            notify.success(success_message);
        }
        Err(error) => {
            log::warn!("credential operation failed: {error}");
            notify.error(error.to_string());
        }
    }
    session.set_loading(false);
    result
}
