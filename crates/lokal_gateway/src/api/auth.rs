// --- File: crates/lokal_gateway/src/api/auth.rs ---
use tracing::info;

use crate::gateway::{Gateway, RequestOptions};
use crate::models::{
    LoginRequest, MessageResponse, OtpRequest, OtpResponse, OtpVerifyRequest, PinLoginRequest,
    PinSetRequest, RefreshRequest, RegisterRequest, TokenResponse,
};
use crate::outcome::ApiResult;

impl Gateway {
    /// `POST /auth/register`. Stores the issued tokens on success.
    pub async fn register(&self, request: &RegisterRequest) -> ApiResult<TokenResponse> {
        let result = self
            .request("/auth/register", RequestOptions::post(request))
            .await;
        self.remember_tokens(result)
    }

    /// `POST /auth/login`. Stores the issued tokens on success.
    pub async fn login(&self, phone_number: &str, password: &str) -> ApiResult<TokenResponse> {
        let body = LoginRequest {
            phone_number: phone_number.to_string(),
            password: password.to_string(),
        };
        let result = self.request("/auth/login", RequestOptions::post(&body)).await;
        self.remember_tokens(result)
    }

    pub async fn request_otp(&self, phone_number: &str) -> ApiResult<OtpResponse> {
        let body = OtpRequest {
            phone_number: phone_number.to_string(),
        };
        self.request("/auth/otp/request", RequestOptions::post(&body))
            .await
    }

    /// `POST /auth/otp/verify`. Creates the account on first use.
    pub async fn verify_otp(&self, phone_number: &str, code: &str) -> ApiResult<TokenResponse> {
        let body = OtpVerifyRequest {
            phone_number: phone_number.to_string(),
            code: code.to_string(),
        };
        let result = self
            .request("/auth/otp/verify", RequestOptions::post(&body))
            .await;
        self.remember_tokens(result)
    }

    pub async fn pin_login(&self, phone_number: &str, pin: &str) -> ApiResult<TokenResponse> {
        let body = PinLoginRequest {
            phone_number: phone_number.to_string(),
            pin: pin.to_string(),
        };
        let result = self
            .request("/auth/pin/login", RequestOptions::post(&body))
            .await;
        self.remember_tokens(result)
    }

    pub async fn set_pin(&self, pin: &str, confirm_pin: &str) -> ApiResult<MessageResponse> {
        let body = PinSetRequest {
            pin: pin.to_string(),
            confirm_pin: confirm_pin.to_string(),
        };
        self.request("/auth/pin/set", RequestOptions::post(&body))
            .await
    }

    /// `POST /auth/refresh`. The backend rotates the refresh token, so both
    /// are replaced on success.
    pub async fn refresh(&self, refresh_token: &str) -> ApiResult<TokenResponse> {
        let body = RefreshRequest {
            refresh_token: refresh_token.to_string(),
        };
        let result = self.request("/auth/refresh", RequestOptions::post(&body)).await;
        self.remember_tokens(result)
    }

    /// `POST /auth/logout`. The local session is cleared whatever the
    /// server answers.
    pub async fn logout(&self) -> ApiResult<MessageResponse> {
        let result = self
            .request("/auth/logout", RequestOptions::post_empty())
            .await;
        self.session().clear();
        info!("Session cleared");
        result
    }

    fn remember_tokens(&self, result: ApiResult<TokenResponse>) -> ApiResult<TokenResponse> {
        if let ApiResult::Data(tokens) = &result {
            self.session()
                .set_tokens(&tokens.access_token, tokens.refresh_token.as_deref());
            info!("Signed in as user {}", tokens.user_id);
        }
        result
    }
}
