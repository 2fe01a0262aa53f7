use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use citaflow_client::auth::{
    AuthStore, Redirect, decode_claims, guard_authenticated, guard_super_admin,
};
use citaflow_core::models::business::Role;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;

fn make_token(payload: serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let body = URL_SAFE_NO_PAD.encode(payload.to_string().as_bytes());
    format!("{header}.{body}.signature")
}

fn owner_token() -> String {
    make_token(json!({
        "sub": "biz_1",
        "email": "owner@example.com",
        "name": "Salon Ana",
        "role": "OWNER",
        "iat": 1_700_000_000,
        "exp": 1_700_086_400
    }))
}

#[test]
fn test_decode_claims() {
    let claims = decode_claims(&owner_token()).expect("Failed to decode token");

    assert_eq!(claims.sub, "biz_1");
    assert_eq!(claims.email, "owner@example.com");
    assert_eq!(claims.name, "Salon Ana");
    assert_eq!(claims.role, Some(Role::Owner));
}

#[rstest]
#[case("not-a-jwt")]
#[case("a.b")]
#[case("a.b.c.d")]
#[case("header.!!!.signature")]
fn test_decode_rejects_malformed_tokens(#[case] token: &str) {
    assert!(decode_claims(token).is_err());
}

#[test]
fn test_decode_rejects_non_json_payload() {
    let not_json = format!(
        "h.{}.s",
        URL_SAFE_NO_PAD.encode(b"plain text payload")
    );
    assert!(decode_claims(&not_json).is_err());
}

#[test]
fn test_role_defaults_to_owner_when_claim_missing() {
    let token = make_token(json!({
        "sub": "biz_2",
        "email": "legacy@example.com",
        "name": "Legacy Biz",
        "iat": 1_700_000_000,
        "exp": 1_700_086_400
    }));

    let store = AuthStore::new();
    store.set_token(&token);

    assert_eq!(store.role(), Some(Role::Owner));
}

#[test]
fn test_auth_store_session_lifecycle() {
    let store = AuthStore::new();
    assert!(!store.is_authenticated());
    assert_eq!(store.token(), None);

    let token = owner_token();
    store.set_token(&token);
    assert!(store.is_authenticated());
    assert_eq!(store.token(), Some(token));

    let session = store.session().expect("session after set_token");
    assert_eq!(session.user_id, "biz_1");
    assert_eq!(session.name, "Salon Ana");

    store.logout();
    assert!(!store.is_authenticated());
    assert_eq!(store.session().map(|s| s.user_id), None);
}

#[test]
fn test_invalid_token_clears_session() {
    let store = AuthStore::new();
    store.set_token(&owner_token());
    assert!(store.is_authenticated());

    store.set_token("garbage");
    assert!(!store.is_authenticated());
}

#[test]
fn test_guard_authenticated() {
    let store = AuthStore::new();
    assert_eq!(guard_authenticated(&store), Err(Redirect::Login));
    assert_eq!(Redirect::Login.path(), "/login");

    store.set_token(&owner_token());
    assert_eq!(guard_authenticated(&store), Ok(()));
}

#[test]
fn test_guard_super_admin() {
    let store = AuthStore::new();
    assert_eq!(guard_super_admin(&store), Err(Redirect::Login));

    store.set_token(&owner_token());
    assert_eq!(guard_super_admin(&store), Err(Redirect::Dashboard));
    assert_eq!(Redirect::Dashboard.path(), "/dashboard");

    let admin = make_token(json!({
        "sub": "admin_1",
        "email": "root@example.com",
        "name": "Platform",
        "role": "SUPER_ADMIN",
        "iat": 1_700_000_000,
        "exp": 1_700_086_400
    }));
    store.set_token(&admin);
    assert_eq!(guard_super_admin(&store), Ok(()));
}
