//! API Client
//!
//! One method per backend operation. Every method answers with an
//! `ApiResponse` and never fails: transport and decode problems are logged
//! and turned into `{status: "error", data: null, code: 500}`, while
//! backend-reported errors pass through untouched.
//!
//! Operations that establish an identity (password login, registration,
//! OAuth) persist the returned payload verbatim on success and leave the
//! store alone otherwise. Payloads are read leniently: the backend owns their
//! shape, so a field the client does not know never fails a call.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use uuid::Uuid;

use vexon_core::{
    digest_password, ApiResponse, BillingAddress, CardDetails, ChatMessage, ChatReply,
    ContactForm, Generation, Plan, Session, SessionStore, SignupForm,
};

use crate::config::ClientConfig;
use crate::delay;
use crate::error::{ClientError, Result};
use crate::oauth::{CallbackParams, OAuthProvider};
use crate::transport::{ApiRequest, HttpTransport, Transport};

const LOGIN: &str = "/auth/login";
const REGISTER: &str = "/auth/register";
const FORGOT_PASSWORD: &str = "/auth/password/forgot";
const CONTACT: &str = "/mail/contact";
const MAP_PIN: &str = "/maps/pin";
const PLANS: &str = "/subscription-plans";
const SUBSCRIPTIONS: &str = "/subscriptions";
const CHAT: &str = "/ai/chat";

/// Message of every identity-establishing failure
const CONNECTION_FAILED: &str = "Network connection failed";

/// Canned output of the Neural Lab stub
pub const GENERATION_RESPONSE: &str = "Synthesized audio buffer ready for injection.";

/// Token count reported by the Neural Lab stub
pub const GENERATION_TOKENS: u32 = 42;

/// Vexon API client
#[derive(Clone)]
pub struct ApiClient {
    config: Arc<ClientConfig>,
    transport: Arc<dyn Transport>,
    store: Arc<dyn SessionStore>,
}

impl ApiClient {
    /// Create a client over any transport and session store
    pub fn new(
        config: ClientConfig,
        transport: Arc<dyn Transport>,
        store: Arc<dyn SessionStore>,
    ) -> Self {
        tracing::debug!(
            base_url = %config.base_url,
            transport = transport.name(),
            "API client created"
        );
        Self {
            config: Arc::new(config),
            transport,
            store,
        }
    }

    /// Create a client talking HTTP to `config.base_url`
    pub fn http(config: ClientConfig, store: Arc<dyn SessionStore>) -> Self {
        let transport = Arc::new(HttpTransport::new(config.base_url.clone()));
        Self::new(config, transport, store)
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    // ------------------------------------------------------------------
    // Authentication
    // ------------------------------------------------------------------

    /// Sign in with email and password
    pub async fn login(
        &self,
        email: &str,
        password: &str,
        captcha_token: Option<&str>,
    ) -> ApiResponse<Session> {
        let mut body = json!({
            "email": email,
            "password_hash": digest_password(password),
        });
        if let Some(token) = captcha_token {
            body["turnstile_token"] = json!(token);
        }

        self.authenticate(ApiRequest::post(LOGIN, body), "login", CONNECTION_FAILED)
            .await
    }

    /// Register a new account and sign in
    pub async fn signup(&self, form: &SignupForm, captcha_token: Option<&str>) -> ApiResponse<Session> {
        let password_hash = digest_password(&form.password);
        let mut body = json!({
            "username": form.username,
            "email": form.email,
            "first_name": form.first_name,
            "last_name": form.last_name,
            "password_hash": password_hash,
            "password_hash_confirmation": password_hash,
        });
        if let Some(token) = captcha_token {
            body["turnstile_token"] = json!(token);
        }

        self.authenticate(ApiRequest::post(REGISTER, body), "signup", CONNECTION_FAILED)
            .await
    }

    /// Ask the backend to mail a password reset link
    pub async fn forgot_password(&self, email: &str) -> ApiResponse<Value> {
        let request = ApiRequest::post(FORGOT_PASSWORD, json!({ "email": email }));
        settle(self.call(request).await, "forgot_password", CONNECTION_FAILED)
    }

    /// Exchange a Google access token for a session
    pub async fn login_with_google(&self, access_token: &str) -> ApiResponse<Session> {
        self.exchange_oauth_token(OAuthProvider::Google, access_token).await
    }

    /// Exchange a GitHub access token for a session
    pub async fn login_with_github(&self, access_token: &str) -> ApiResponse<Session> {
        self.exchange_oauth_token(OAuthProvider::GitHub, access_token).await
    }

    /// Exchange a provider token for a session
    pub async fn exchange_oauth_token(
        &self,
        provider: OAuthProvider,
        access_token: &str,
    ) -> ApiResponse<Session> {
        let request = ApiRequest::post(provider.token_path(), json!({ "access_token": access_token }));
        let failure = format!("{} Authentication failed", provider.label());
        self.authenticate(request, "oauth", &failure).await
    }

    /// Finish an OAuth redirect from the callback query parameters.
    ///
    /// Malformed callbacks are refused locally with code 400.
    pub async fn complete_oauth(&self, params: CallbackParams) -> ApiResponse<Session> {
        match params.into_exchange() {
            Ok((provider, token)) => self.exchange_oauth_token(provider, &token).await,
            Err(rejection) => {
                tracing::warn!("OAuth callback rejected: {}", rejection);
                ApiResponse::failure(rejection.message, 400)
            }
        }
    }

    /// Browser URL that starts the provider's sign-in flow
    pub fn oauth_redirect_url(&self, provider: OAuthProvider) -> String {
        self.config.url(&provider.redirect_path())
    }

    /// Forget the stored session
    pub fn logout(&self) -> ApiResponse<()> {
        match self.store.delete() {
            Ok(()) => {
                tracing::info!("Session cleared");
                ApiResponse::success("Logged out", None)
            }
            Err(e) => {
                tracing::error!("[logout] {}", e);
                ApiResponse::network_failure("Failed to clear session")
            }
        }
    }

    /// Stored session, `None` when absent or unreadable
    pub fn get_current_user(&self) -> Option<Session> {
        match self.store.load() {
            Ok(session) => session,
            Err(e) => {
                tracing::warn!(error = %e, "{}", e.user_message());
                None
            }
        }
    }

    /// `Authorization` header value for the stored session
    pub fn auth_header(&self) -> Option<String> {
        self.get_current_user().map(|s| s.bearer())
    }

    // ------------------------------------------------------------------
    // Email & maps
    // ------------------------------------------------------------------

    /// Send the contact form to the support mailbox
    pub async fn submit_contact_form(&self, form: &ContactForm) -> ApiResponse<Value> {
        let mut body = json!({
            "name": form.name,
            "email": form.email,
            "message": form.message,
        });
        if let Some(ref token) = form.captcha_token {
            body["turnstile_token"] = json!(token);
        }

        settle(
            self.call(ApiRequest::post(CONTACT, body)).await,
            "contact",
            "Failed to send message",
        )
    }

    /// Geocode an address for the contact page map
    pub async fn get_map_pin(&self, address: &str) -> ApiResponse<Value> {
        let request = ApiRequest::post(MAP_PIN, json!({ "address": address }));
        settle(self.call(request).await, "map_pin", "Failed to load map location")
    }

    // ------------------------------------------------------------------
    // Subscriptions & plans
    // ------------------------------------------------------------------

    /// List subscription plans, seeding the defaults on an empty backend.
    ///
    /// After seeding the list is fetched exactly once more and returned as
    /// is, even if it is still empty.
    pub async fn get_plans(&self) -> ApiResponse<Vec<Plan>> {
        let result = async {
            let mut plans: ApiResponse<Value> = self.call(ApiRequest::get(PLANS)).await?;

            if plans.is_success() && is_empty_listing(plans.data.as_ref()) {
                tracing::warn!("No plans found. Seeding backend with defaults...");
                self.seed_defaults().await?;
                plans = self.call(ApiRequest::get(PLANS)).await?;
            }

            Ok::<_, ClientError>(plans)
        }
        .await;

        settle(result, "plans", "Failed to fetch plans").and_then_data(plan_listing)
    }

    /// Push the default plan catalog to the backend
    pub async fn seed_plans(&self) -> ApiResponse<()> {
        match self.seed_defaults().await {
            Ok(()) => ApiResponse::success("Plans seeded", None),
            Err(e) => {
                tracing::error!("[seed_plans] {}", e);
                ApiResponse::network_failure("Failed to seed plans")
            }
        }
    }

    /// Seed responses are not inspected; only transport failures count.
    async fn seed_defaults(&self) -> Result<()> {
        for plan in Plan::default_catalog() {
            let mut body = serde_json::to_value(&plan)?;
            body["plan_slug"] = json!(plan.slug);
            let response = self.transport.send(ApiRequest::post(SUBSCRIPTIONS, body)).await?;
            tracing::debug!(slug = %plan.slug, status = response.status, "plan seeded");
        }
        Ok(())
    }

    /// Subscribe the signed-in account to a plan.
    ///
    /// When the payload carries a `user`, the stored session's user is
    /// replaced by it; the token is kept. Nothing else in the payload is read.
    pub async fn subscribe(&self, plan_slug: &str, card: &CardDetails) -> ApiResponse<Value> {
        let result = async {
            let request = ApiRequest::post(
                SUBSCRIPTIONS,
                json!({
                    "plan_slug": plan_slug,
                    "payment_method": card,
                    "billing_address": BillingAddress::default(),
                }),
            )
            .with_authorization(self.auth_header());

            let receipt: ApiResponse<Value> = self.call(request).await?;

            if let Some(user) = receipt
                .success_data()
                .and_then(|data| data.get("user"))
                .filter(|user| !user.is_null())
            {
                self.refresh_stored_user(user, plan_slug)?;
            }

            Ok::<_, ClientError>(receipt)
        }
        .await;

        settle(result, "subscribe", "Payment processing failed")
    }

    // ------------------------------------------------------------------
    // AI generation
    // ------------------------------------------------------------------

    /// Ask the support assistant, sending the whole conversation
    pub async fn generate_chat(&self, history: &[ChatMessage]) -> ApiResponse<ChatReply> {
        let request = ApiRequest::post(CHAT, json!({ "messages": history }))
            .with_authorization(self.auth_header());
        settle(self.call(request).await, "chat", "Neural uplink failed")
    }

    /// Neural Lab generation.
    ///
    /// Simulated: waits `generation_delay` and returns a canned result
    /// without contacting the backend.
    pub async fn generate_ai(&self, prompt: &str) -> ApiResponse<Generation> {
        tracing::info!("AI Request: {}", prompt);
        delay::sleep(self.config.generation_delay).await;

        let id = u32::try_from(Uuid::new_v4().as_u128() % 1000).unwrap_or_default();
        ApiResponse::success(
            "Generation completed",
            Some(Generation {
                id,
                prompt: prompt.to_string(),
                response: GENERATION_RESPONSE.into(),
                tokens_used: GENERATION_TOKENS,
            }),
        )
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    async fn call<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<ApiResponse<T>> {
        let response = self.transport.send(request).await?;
        response.json()
    }

    /// Send an identity-establishing request and persist the payload it yields
    async fn authenticate(&self, request: ApiRequest, operation: &str, failure: &str) -> ApiResponse<Session> {
        let result = async {
            let response: ApiResponse<Value> = self.call(request).await?;
            if let Some(payload) = response.success_data() {
                self.store.save_raw(payload)?;
                tracing::info!(operation, "Session established");
            }
            Ok::<_, ClientError>(response)
        }
        .await;

        settle(result, operation, failure).and_then_data(session_view)
    }

    /// Swap the user inside the stored session, keeping everything else
    fn refresh_stored_user(&self, user: &Value, plan_slug: &str) -> Result<()> {
        match self.store.load_raw()? {
            Some(Value::Object(mut stored)) => {
                stored.insert("user".into(), user.clone());
                self.store.save_raw(&Value::Object(stored))?;
                tracing::info!(plan = plan_slug, "Session plan updated");
            }
            Some(_) => tracing::warn!("Stored session is not an object; user not refreshed"),
            None => {}
        }
        Ok(())
    }
}

/// Typed view of a persisted session payload
fn session_view(payload: Value) -> Option<Session> {
    match serde_json::from_value(payload) {
        Ok(session) => Some(session),
        Err(e) => {
            tracing::warn!("Session payload has no typed view: {}", e);
            None
        }
    }
}

/// An absent, null or empty plan list triggers seeding
fn is_empty_listing(data: Option<&Value>) -> bool {
    match data {
        None | Some(Value::Null) => true,
        Some(Value::Array(items)) => items.is_empty(),
        Some(_) => false,
    }
}

/// Readable plans of a listing; unreadable entries are skipped
fn plan_listing(data: Value) -> Option<Vec<Plan>> {
    let Value::Array(items) = data else {
        tracing::warn!("Plan listing is not a list");
        return None;
    };

    let plans = items
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<Plan>(item) {
            Ok(plan) => Some(plan),
            Err(e) => {
                tracing::warn!("Skipping unreadable plan: {}", e);
                None
            }
        })
        .collect();
    Some(plans)
}

/// Fold a client error into the operation's failure envelope
fn settle<T>(result: Result<ApiResponse<T>>, operation: &str, failure: &str) -> ApiResponse<T> {
    match result {
        Ok(response) => {
            if !response.is_success() {
                tracing::info!(
                    operation,
                    code = response.code,
                    "Backend rejected request: {}",
                    response.message
                );
            }
            response
        }
        Err(e) => {
            log_failure(operation, &e);
            ApiResponse::network_failure(failure)
        }
    }
}

fn log_failure(operation: &str, error: &ClientError) {
    tracing::error!(operation, transient = error.is_transient(), "[API] {} error: {}", operation, error);
}
