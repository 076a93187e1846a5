// File: services/lokal_cli/src/commands/auth.rs
use clap::Subcommand;
use lokal_common::{validation_error, LokalError};
use lokal_gateway::models::{
    MessageResponse, RegisterRequest, TokenResponse, UpdateProfileRequest, UserProfile,
};
use lokal_gateway::{ApiResult, Gateway};
use serde::Serialize;

use super::App;
use crate::prompt::secret;

#[derive(Subcommand, Debug)]
pub enum AuthAction {
    /// Create an account and sign in
    Register {
        /// Phone number, e.g. +27821234567
        phone_number: String,
        /// Prompted for when omitted
        #[arg(long, env = "LOKAL_PASSWORD", hide_env_values = true)]
        password: Option<String>,
        #[arg(long)]
        first_name: Option<String>,
        #[arg(long)]
        last_name: Option<String>,
    },
    /// Sign in with phone number and password
    Login {
        phone_number: String,
        /// Prompted for when omitted
        #[arg(long, env = "LOKAL_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },
    /// Send a one-time PIN by SMS
    RequestOtp { phone_number: String },
    /// Sign in with the SMS one-time PIN
    VerifyOtp { phone_number: String, code: String },
    /// Sign in with the quick-login PIN
    PinLogin {
        phone_number: String,
        /// Prompted for when omitted
        #[arg(long)]
        pin: Option<String>,
    },
    /// Set or change the quick-login PIN
    SetPin {
        /// Prompted for when omitted
        #[arg(long)]
        pin: Option<String>,
    },
    /// Exchange the stored refresh token for a new pair
    Refresh,
    /// Sign out and forget the stored tokens
    Logout,
    /// Show the signed-in profile
    Me,
    /// Update the signed-in profile
    UpdateProfile {
        #[arg(long)]
        first_name: Option<String>,
        #[arg(long)]
        last_name: Option<String>,
        #[arg(long)]
        email: Option<String>,
    },
}

pub async fn run(app: &App, action: AuthAction) -> Result<(), LokalError> {
    let gateway = &app.gateway;
    match action {
        AuthAction::Register {
            phone_number,
            password,
            first_name,
            last_name,
        } => {
            let request = RegisterRequest {
                phone_number,
                password: secret(password, "Password")?,
                first_name,
                last_name,
            };
            let signed_in = gateway.register(&request).await.map(SignedIn::from);
            app.output.emit(signed_in)
        }
        AuthAction::Login {
            phone_number,
            password,
        } => {
            let password = secret(password, "Password")?;
            let signed_in = gateway.login(&phone_number, &password).await;
            app.output.emit(signed_in.map(SignedIn::from))
        }
        AuthAction::RequestOtp { phone_number } => {
            app.output.emit(gateway.request_otp(&phone_number).await)
        }
        AuthAction::VerifyOtp { phone_number, code } => {
            let signed_in = gateway.verify_otp(&phone_number, &code).await;
            app.output.emit(signed_in.map(SignedIn::from))
        }
        AuthAction::PinLogin { phone_number, pin } => {
            let pin = secret(pin, "PIN")?;
            let signed_in = gateway.pin_login(&phone_number, &pin).await;
            app.output.emit(signed_in.map(SignedIn::from))
        }
        AuthAction::SetPin { pin } => {
            let (pin, confirm_pin) = match pin {
                Some(pin) => (pin.clone(), pin),
                None => (secret(None, "New PIN")?, secret(None, "Repeat PIN")?),
            };
            app.output.emit(gateway.set_pin(&pin, &confirm_pin).await)
        }
        AuthAction::Refresh => {
            let refresh_token = gateway
                .session()
                .refresh_token()
                .ok_or_else(|| validation_error("No refresh token stored; log in first"))?;
            let signed_in = gateway.refresh(&refresh_token).await;
            app.output.emit(signed_in.map(SignedIn::from))
        }
        AuthAction::Logout => app.output.emit(gateway.logout().await),
        AuthAction::Me => app.output.emit(gateway.me().await),
        AuthAction::UpdateProfile {
            first_name,
            last_name,
            email,
        } => {
            let update = UpdateProfileRequest {
                first_name,
                last_name,
                email,
            };
            app.output.emit(update_profile(gateway, update).await)
        }
    }
}

/// What the sign-in commands print. The tokens only go to the session
/// store.
#[derive(Debug, Serialize)]
struct SignedIn {
    user_id: String,
    token_type: String,
    expires_in: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    is_agent: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    is_new_user: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl From<TokenResponse> for SignedIn {
    fn from(token: TokenResponse) -> Self {
        Self {
            user_id: token.user_id,
            token_type: token.token_type,
            expires_in: token.expires_in,
            is_agent: token.is_agent,
            is_new_user: token.is_new_user,
            message: token.message,
        }
    }
}

/// The backend overwrites every profile field, so omitted flags keep the
/// current values.
async fn update_profile(
    gateway: &Gateway,
    update: UpdateProfileRequest,
) -> ApiResult<MessageResponse> {
    let current = match gateway.me().await {
        ApiResult::Data(profile) => profile,
        ApiResult::Error(message) => return ApiResult::Error(message),
    };
    gateway.update_me(&merge_profile(&current, update)).await
}

fn merge_profile(current: &UserProfile, update: UpdateProfileRequest) -> UpdateProfileRequest {
    UpdateProfileRequest {
        first_name: update.first_name.or_else(|| current.first_name.clone()),
        last_name: update.last_name.or_else(|| current.last_name.clone()),
        email: update.email.or_else(|| current.email.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lokal_gateway::Session;
    use serde_json::json;
    use std::sync::Arc;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn signed_in_gateway(base_url: &str) -> Gateway {
        let session = Session::in_memory();
        session.set_token(Some("user-token".to_string()));
        Gateway::new(base_url, Arc::new(session))
    }

    fn profile_json() -> serde_json::Value {
        json!({
            "id": "u-1",
            "phone_number": "+27821234567",
            "first_name": "Thandi",
            "last_name": "Mokoena",
            "email": "thandi@old.example",
            "kyc_status": "VERIFIED",
            "status": "ACTIVE",
            "referral_code": "LOK123"
        })
    }

    #[tokio::test]
    async fn test_update_profile_keeps_omitted_fields() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/me"))
            .respond_with(ResponseTemplate::new(200).set_body_json(profile_json()))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("PUT"))
            .and(path("/users/me"))
            .and(body_json(json!({
                "first_name": "Thandi",
                "last_name": "Mokoena",
                "email": "thandi@new.example"
            })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "message": "Profile updated" })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let update = UpdateProfileRequest {
            email: Some("thandi@new.example".into()),
            ..Default::default()
        };
        let result = update_profile(&signed_in_gateway(&server.uri()), update).await;

        assert_eq!(result.data().map(|m| m.message.as_str()), Some("Profile updated"));
    }

    #[tokio::test]
    async fn test_update_profile_stops_when_profile_unavailable() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/me"))
            .respond_with(
                ResponseTemplate::new(401).set_body_json(json!({ "detail": "Not authenticated" })),
            )
            .mount(&server)
            .await;
        Mock::given(method("PUT"))
            .and(path("/users/me"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let update = UpdateProfileRequest {
            first_name: Some("Sipho".into()),
            ..Default::default()
        };
        let result = update_profile(&signed_in_gateway(&server.uri()), update).await;

        assert_eq!(result.error(), Some("Not authenticated"));
    }

    #[test]
    fn test_signed_in_output_has_no_tokens() {
        let token: TokenResponse = serde_json::from_value(json!({
            "access_token": "secret-access",
            "refresh_token": "secret-refresh",
            "token_type": "bearer",
            "expires_in": 1800,
            "user_id": "u-1",
            "is_new_user": false
        }))
        .unwrap();

        let printed = serde_json::to_value(SignedIn::from(token)).unwrap();

        assert_eq!(
            printed,
            json!({
                "user_id": "u-1",
                "token_type": "bearer",
                "expires_in": 1800,
                "is_new_user": false
            })
        );
    }
}
