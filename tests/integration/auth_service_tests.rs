//! Auth service integration tests
//!
//! End-to-end host flows: sign in, authorize, multi-factor challenge.

#[cfg(test)]
mod tests {
    use crate::common::{ConfigFactory, fixed_now};
    use chrono::Duration;
    use rafiq_auth::auth::totp;
    use rafiq_auth::{AuthError, AuthService, HasBaseClaims, SessionClaims, TokenError};

    fn service() -> AuthService {
        AuthService::new(&ConfigFactory::valid()).unwrap()
    }

    #[test]
    fn test_session_flow() {
        let service = service();
        let token = service.issue_session_at(7, fixed_now()).unwrap();
        let header = format!("Bearer {}", token);

        let claims = service
            .authorize_at(&header, fixed_now() + Duration::days(30))
            .unwrap();
        assert_eq!(claims.user_id, 7);
        assert_eq!(claims.base().issuer, "rafiq.com");
        assert_eq!(
            claims.base().expires_at,
            fixed_now() + Duration::days(365)
        );
    }

    #[test]
    fn test_issued_tokens_have_distinct_ids() {
        let service = service();
        let a = service.issue_session(7).unwrap();
        let b = service.issue_session(7).unwrap();
        assert_ne!(a, b);

        let a: SessionClaims = service.codec().parse(&a).unwrap().into_claims();
        let b: SessionClaims = service.codec().parse(&b).unwrap().into_claims();
        assert_ne!(a.base.id, b.base.id);
    }

    #[test]
    fn test_authorize_failures_are_unauthenticated() {
        let service = service();
        let expired = service.issue_session_at(7, fixed_now()).unwrap();

        let cases = [
            "Bearer".to_string(),
            "Bearer a.b".to_string(),
            "Bearer a.b.c".to_string(),
            format!("Bearer {}", expired),
        ];
        for header in &cases {
            let err = service
                .authorize_at(header, fixed_now() + Duration::days(366))
                .unwrap_err();
            assert!(err.is_unauthenticated(), "{}: {:?}", header, err);
            assert_eq!(err.status_code(), 401);
        }
    }

    #[test]
    fn test_expired_session_error_code() {
        let service = service();
        let token = service.issue_session_at(7, fixed_now()).unwrap();
        let err = service
            .verify_session_at(&token, fixed_now() + Duration::days(365))
            .unwrap_err();
        assert!(matches!(err, AuthError::Token(TokenError::Expired)));
        assert_eq!(err.error_code(), "TOKEN_EXPIRED");
    }

    #[test]
    fn test_passcode_flow() {
        let service = service();
        let payload = serde_json::json!({"new_email": "user@example.com"});
        let challenge = service
            .begin_passcode_at(7, "change_email", payload.clone(), fixed_now())
            .unwrap();

        let claims = service
            .redeem_passcode_at(
                &challenge.token,
                &challenge.passcode.to_string(),
                fixed_now() + Duration::seconds(299),
            )
            .unwrap();
        assert_eq!(claims.user_id, 7);
        assert_eq!(claims.request_type, "change_email");
        assert_eq!(claims.request_payload, payload);
        assert_eq!(claims.secret.len(), totp::SECRET_LEN);
    }

    #[test]
    fn test_passcode_challenges_use_fresh_secrets() {
        let service = service();
        let codec = service.codec();
        let first = service
            .begin_passcode_at(7, "login", serde_json::Value::Null, fixed_now())
            .unwrap();
        let second = service
            .begin_passcode_at(7, "login", serde_json::Value::Null, fixed_now())
            .unwrap();

        let first: rafiq_auth::PasscodeClaims = codec.parse(&first.token).unwrap().into_claims();
        let second: rafiq_auth::PasscodeClaims = codec.parse(&second.token).unwrap().into_claims();
        assert_ne!(first.secret, second.secret);
    }

    #[test]
    fn test_passcode_error_codes() {
        let service = service();
        let challenge = service
            .begin_passcode_at(7, "login", serde_json::Value::Null, fixed_now())
            .unwrap();

        let err = service
            .redeem_passcode_at(&challenge.token, "not-a-code", fixed_now())
            .unwrap_err();
        assert_eq!(err.error_code(), "INVALID_PASSCODE");

        let err = service
            .redeem_passcode_at(&challenge.token, "123456", fixed_now() + Duration::hours(1))
            .unwrap_err();
        assert_eq!(err.error_code(), "TOKEN_EXPIRED");
    }
}
