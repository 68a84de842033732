use crate::claims::Claims;
use crate::role::Role;
use crate::store::SessionStore;

/// Outcome of one guard evaluation. Computed fresh on every navigation;
/// nothing is cached between evaluations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    /// Authenticated and, when a role set applies, authorized.
    Granted,
    /// No credential, or one that does not decode. Redirect to login,
    /// preserving the attempted path.
    MissingCredential,
    /// Decodable credential past its expiry. Redirect to login; the
    /// store has been cleared by the time the caller sees this.
    ExpiredCredential,
    /// Authenticated but the role claim is not in the required set.
    /// Redirect to the neutral authenticated landing, not to login.
    ForbiddenRole,
}

/// Pure decision: no storage access and no side effects, so every
/// branch is testable with a literal credential and a fixed clock.
///
/// Contract on `allowed`: an empty set restricts nothing beyond
/// authentication; a non-empty set denies a session whose role claim is
/// missing, unknown, or simply not a member.
pub fn evaluate(credential: Option<&str>, allowed: &[Role], now: i64) -> Access {
    let Some(credential) = credential else {
        return Access::MissingCredential;
    };
    // A malformed or tampered credential degrades to "not
    // authenticated", identical to having none.
    let Ok(claims) = Claims::decode(credential) else {
        return Access::MissingCredential;
    };
    if claims.expired_at(now) {
        return Access::ExpiredCredential;
    }
    if !allowed.is_empty() {
        match claims.role() {
            Some(role) if allowed.contains(&role) => {}
            _ => return Access::ForbiddenRole,
        }
    }
    Access::Granted
}

/// Effectful wrapper around [`evaluate`]: reads the store and, on an
/// expired credential, erases it so the next evaluation starts from
/// `MissingCredential`.
pub fn check_access(store: &dyn SessionStore, allowed: &[Role], now: i64) -> Access {
    let credential = store.load();
    let access = evaluate(credential.as_deref(), allowed, now);
    if access == Access::ExpiredCredential {
        store.clear();
    }
    access
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::claims::tests::token_with;
    use crate::store::MemoryStore;

    const NOW: i64 = 1_700_000_000;

    fn token(role: Option<&str>, exp: Option<i64>) -> String {
        let mut payload = serde_json::json!({ "sub": "9" });
        if let Some(role) = role {
            payload["role"] = serde_json::json!(role);
        }
        if let Some(exp) = exp {
            payload["exp"] = serde_json::json!(exp);
        }
        token_with(&payload)
    }

    #[test]
    fn no_credential_is_denied() {
        assert_eq!(evaluate(None, &[], NOW), Access::MissingCredential);
        assert_eq!(evaluate(None, &[Role::Admin], NOW), Access::MissingCredential);
    }

    #[test]
    fn malformed_credential_is_denied_like_absent() {
        for bad in ["", "a.b", "a.!!!.c", "a.bm8ganNvbg.c"] {
            assert_eq!(evaluate(Some(bad), &[], NOW), Access::MissingCredential, "{bad:?}");
        }
    }

    #[test]
    fn expired_credential_is_denied() {
        let stale = token(Some("ADMIN"), Some(NOW - 1));
        assert_eq!(evaluate(Some(&stale), &[], NOW), Access::ExpiredCredential);
    }

    #[test]
    fn missing_exp_never_expires() {
        let eternal = token(Some("COMUN"), None);
        assert_eq!(evaluate(Some(&eternal), &[], i64::MAX), Access::Granted);
    }

    #[test]
    fn empty_role_set_only_requires_authentication() {
        let sinRol = token(None, Some(NOW + 60));
        assert_eq!(evaluate(Some(&sinRol), &[], NOW), Access::Granted);
    }

    #[test]
    fn matching_role_is_granted() {
        let admin = token(Some("ADMIN"), Some(NOW + 60));
        assert_eq!(evaluate(Some(&admin), &[Role::Admin], NOW), Access::Granted);
    }

    #[test]
    fn mismatched_role_is_forbidden_not_unauthenticated() {
        let comun = token(Some("COMUN"), Some(NOW + 60));
        assert_eq!(evaluate(Some(&comun), &[Role::Admin], NOW), Access::ForbiddenRole);
    }

    #[test]
    fn missing_role_fails_a_non_empty_set() {
        let sinRol = token(None, None);
        assert_eq!(evaluate(Some(&sinRol), &[Role::Comun], NOW), Access::ForbiddenRole);
    }

    #[test]
    fn role_in_multi_role_set_is_granted() {
        let logistica = token(Some("LOGISTICA"), None);
        let allowed = [Role::Admin, Role::Logistica];
        assert_eq!(evaluate(Some(&logistica), &allowed, NOW), Access::Granted);
    }

    #[test]
    fn expiry_boundary_is_strict() {
        let atNow = token(None, Some(NOW));
        assert_eq!(evaluate(Some(&atNow), &[], NOW), Access::Granted);
    }

    #[test]
    fn check_access_clears_store_on_expiry() {
        let stale = token(Some("ADMIN"), Some(NOW - 1));
        let store = MemoryStore::with_credential(&stale);
        assert_eq!(check_access(&store, &[], NOW), Access::ExpiredCredential);
        assert_eq!(store.load(), None);
        // Next evaluation starts from the absent-credential state.
        assert_eq!(check_access(&store, &[], NOW), Access::MissingCredential);
    }

    #[test]
    fn check_access_leaves_valid_credential_in_place() {
        let fresh = token(Some("ADMIN"), Some(NOW + 60));
        let store = MemoryStore::with_credential(&fresh);
        assert_eq!(check_access(&store, &[Role::Admin], NOW), Access::Granted);
        assert_eq!(store.load().as_deref(), Some(fresh.as_str()));
    }

    #[test]
    fn check_access_keeps_credential_on_forbidden_role() {
        let comun = token(Some("COMUN"), None);
        let store = MemoryStore::with_credential(&comun);
        assert_eq!(check_access(&store, &[Role::Admin], NOW), Access::ForbiddenRole);
        assert!(store.load().is_some());
    }
}
