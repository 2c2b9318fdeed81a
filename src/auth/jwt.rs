use axum::extract::FromRef;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use time::OffsetDateTime;
use tracing::debug;
use uuid::Uuid;

use crate::{auth::claims::Claims, config::JwtConfig, state::AppState};

pub const ALGORITHM: Algorithm = Algorithm::HS256;

/// Signing and verification keys for auth tokens.
#[derive(Clone)]
pub struct JwtKeys {
    pub encoding: EncodingKey,
    pub decoding: DecodingKey,
    pub expiry_seconds: Option<i64>,
}

impl From<&JwtConfig> for JwtKeys {
    fn from(config: &JwtConfig) -> Self {
        Self {
            encoding: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding: DecodingKey::from_secret(config.secret.as_bytes()),
            expiry_seconds: config.expiry_seconds,
        }
    }
}

impl FromRef<AppState> for JwtKeys {
    fn from_ref(state: &AppState) -> Self {
        Self::from(&state.config.jwt)
    }
}

impl JwtKeys {
    pub fn claims_at(&self, user_id: Uuid, user_name: &str, issued_at: i64) -> Claims {
        Claims {
            user_id,
            iat: issued_at,
            exp: self.expiry_seconds.map(|ttl| issued_at + ttl),
            sub: user_name.to_owned(),
        }
    }

    /// Signs `{user_id}` with `user_name` as the subject.
    pub fn sign(&self, user_id: Uuid, user_name: &str) -> anyhow::Result<String> {
        let now = OffsetDateTime::now_utc().unix_timestamp();
        let claims = self.claims_at(user_id, user_name, now);
        let token = encode(&Header::new(ALGORITHM), &claims, &self.encoding)?;
        debug!(user_id = %user_id, "jwt signed");
        Ok(token)
    }

    pub fn verify(&self, token: &str) -> anyhow::Result<Claims> {
        let mut validation = Validation::new(ALGORITHM);
        if self.expiry_seconds.is_some() {
            validation.set_required_spec_claims(&["sub", "exp"]);
        } else {
            validation.set_required_spec_claims(&["sub"]);
        }
        let data = decode::<Claims>(token, &self.decoding, &validation)?;
        debug!(user_id = %data.claims.user_id, "jwt verified");
        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_keys(secret: &str, expiry_seconds: Option<i64>) -> JwtKeys {
        JwtKeys::from(&JwtConfig {
            secret: secret.into(),
            expiry_seconds,
        })
    }

    #[test]
    fn sign_and_verify() {
        let keys = make_keys("dev-secret", None);
        let user_id = Uuid::new_v4();
        let token = keys.sign(user_id, "dunder").expect("sign");
        let claims = keys.verify(&token).expect("verify");
        assert_eq!(claims.user_id, user_id);
        assert_eq!(claims.sub, "dunder");
        assert_eq!(claims.exp, None);
    }

    #[test]
    fn token_matches_independent_signature() {
        let keys = make_keys("dev-secret", None);
        let user_id = Uuid::new_v4();
        let token = keys.sign(user_id, "dunder").expect("sign");
        let iat = keys.verify(&token).expect("verify").iat;

        let expected = encode(
            &Header::new(Algorithm::HS256),
            &Claims {
                user_id,
                iat,
                exp: None,
                sub: "dunder".into(),
            },
            &EncodingKey::from_secret(b"dev-secret"),
        )
        .unwrap();
        assert_eq!(token, expected);
    }

    #[test]
    fn header_uses_hs256() {
        let keys = make_keys("dev-secret", None);
        let token = keys.sign(Uuid::new_v4(), "dunder").unwrap();
        let header = jsonwebtoken::decode_header(&token).unwrap();
        assert_eq!(header.alg, Algorithm::HS256);
    }

    #[test]
    fn configured_expiry_sets_exp() {
        let keys = make_keys("dev-secret", Some(300));
        let token = keys.sign(Uuid::new_v4(), "dunder").unwrap();
        let claims = keys.verify(&token).unwrap();
        assert_eq!(claims.exp, Some(claims.iat + 300));
    }

    #[test]
    fn expired_token_is_rejected() {
        let keys = make_keys("dev-secret", Some(60));
        let issued = OffsetDateTime::now_utc().unix_timestamp() - 3600;
        let claims = keys.claims_at(Uuid::new_v4(), "dunder", issued);
        let token = encode(&Header::new(ALGORITHM), &claims, &keys.encoding).unwrap();
        assert!(keys.verify(&token).is_err());
    }

    #[test]
    fn verify_rejects_other_secret() {
        let good = make_keys("same-secret", None);
        let bad = make_keys("other-secret", None);
        let token = good.sign(Uuid::new_v4(), "dunder").unwrap();
        assert!(bad.verify(&token).is_err());
    }
}
