use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use poem::Request;
use poem_openapi::SecurityScheme;
use serde::{Deserialize, Serialize};

use crate::config::jwt_config::JwtConfig;

/// Claims carried by tokens from the external identity provider. Only the
/// email claim is used to scope user-owned data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub email: Option<String>,
    pub exp: u64,
}

fn decode_claims(token: &str, secret: &str) -> Result<Claims, String> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;

    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|e| format!("auth.token_validation_failed: {e}"))?;

    Ok(token_data.claims)
}

/// Bearer token authentication (HS256)
#[derive(SecurityScheme)]
#[oai(ty = "bearer", bearer_format = "JWT", checker = "bearer_checker")]
pub struct ApiBearer(pub Claims);

async fn bearer_checker(_req: &Request, bearer: poem_openapi::auth::Bearer) -> Option<Claims> {
    let config = JwtConfig::from_env();

    match decode_claims(&bearer.token, &config.secret) {
        Ok(claims) => Some(claims),
        Err(e) => {
            tracing::warn!("Bearer auth failed: {e}");
            None
        }
    }
}
