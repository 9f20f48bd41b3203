//! Navigation Guard Use Case
//!
//! Decides, for one page request, whether to render or redirect.
//!
//! | credential | account | auth route | verdict | decision |
//! |---|---|---|---|---|
//! | no  | -   | no  | -       | redirect `/auth` |
//! | no  | -   | yes | -       | render (anonymous) |
//! | yes | no  | no  | -       | redirect `/auth/useraccount` |
//! | yes | any | any | valid   | render (authenticated) |
//! | yes | any | any | invalid | clear session, redirect `/auth` |
//!
//! The validator runs at most once per request and only after the two
//! redirect-without-validation rows have been ruled out.

use std::sync::Arc;

use crate::application::config::GateConfig;
use crate::domain::decision::{GuardDecision, RenderContext};
use crate::domain::entity::session_record::SessionRecord;
use crate::domain::validator::{SessionValidator, ValidationRequest};
use crate::domain::value_object::route::{RedirectTarget, is_auth_route};
use crate::error::GateError;

/// Navigation guard use case
pub struct NavigationGuardUseCase<V>
where
    V: SessionValidator + Send + Sync + 'static,
{
    validator: Arc<V>,
    config: Arc<GateConfig>,
}

impl<V> NavigationGuardUseCase<V>
where
    V: SessionValidator + Send + Sync + 'static,
{
    pub fn new(validator: Arc<V>, config: Arc<GateConfig>) -> Self {
        Self { validator, config }
    }

    /// Decide what to do with a request for `path` carrying `session`.
    ///
    /// The returned decision is complete before anything is committed; if the
    /// caller drops this future mid-validation, no session change escapes.
    pub async fn decide(&self, session: SessionRecord, path: &str) -> GuardDecision {
        let auth_route = is_auth_route(path);

        if !session.credential_present() {
            if !auth_route {
                tracing::debug!(path, "Anonymous request, redirecting to sign-in");
                return GuardDecision::redirect(RedirectTarget::SignIn);
            }
            return GuardDecision::Render(self.render_context(session, false, auth_route));
        }

        if !session.account_linked() && !auth_route {
            tracing::debug!(path, "No linked account, redirecting to account setup");
            return GuardDecision::redirect(RedirectTarget::LinkAccount);
        }

        if self.is_valid(&session).await {
            GuardDecision::Render(self.render_context(session, true, auth_route))
        } else {
            tracing::info!(
                path,
                target = %RedirectTarget::SignIn,
                "Session invalid, clearing auth state"
            );
            GuardDecision::Redirect {
                target: RedirectTarget::SignIn,
                commit: Some(session.invalidated()),
            }
        }
    }

    /// One bounded validator call. Every failure is an invalid verdict.
    pub async fn is_valid(&self, session: &SessionRecord) -> bool {
        let request = ValidationRequest {
            session_token: session.session_token(),
            credential_present: session.credential_present(),
        };

        let bound = self.config.validator_timeout;
        match tokio::time::timeout(bound, self.validator.validate(request)).await {
            Ok(Ok(valid)) => valid,
            Ok(Err(e)) => {
                tracing::warn!(error = %e, "Session validation failed, treating as invalid");
                false
            }
            Err(_) => {
                let e = GateError::ValidatorTimeout(bound.as_millis());
                tracing::warn!(error = %e, "Session validation failed, treating as invalid");
                false
            }
        }
    }

    fn render_context(
        &self,
        session: SessionRecord,
        authenticated: bool,
        auth_route: bool,
    ) -> RenderContext {
        RenderContext {
            env: self.config.client_env(),
            authenticated,
            auth_route,
            session,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::session_key::SessionKey;
    use crate::error::GateResult;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    enum Behavior {
        Verdict(bool),
        Fail,
        Hang,
    }

    struct StubValidator {
        behavior: Behavior,
        calls: AtomicUsize,
        last_token: std::sync::Mutex<Option<String>>,
    }

    impl StubValidator {
        fn new(behavior: Behavior) -> Arc<Self> {
            Arc::new(Self {
                behavior,
                calls: AtomicUsize::new(0),
                last_token: std::sync::Mutex::new(None),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl SessionValidator for StubValidator {
        async fn validate(&self, request: ValidationRequest<'_>) -> GateResult<bool> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_token.lock().unwrap() = request.session_token.map(str::to_string);
            match self.behavior {
                Behavior::Verdict(valid) => Ok(valid),
                Behavior::Fail => Err(GateError::ValidatorStatus(500)),
                Behavior::Hang => {
                    tokio::time::sleep(Duration::from_secs(30)).await;
                    Ok(true)
                }
            }
        }
    }

    fn guard(validator: &Arc<StubValidator>) -> NavigationGuardUseCase<StubValidator> {
        let config = GateConfig {
            validator_timeout: Duration::from_millis(50),
            ..GateConfig::default()
        };
        NavigationGuardUseCase::new(validator.clone(), Arc::new(config))
    }

    fn credentialed() -> SessionRecord {
        SessionRecord::anonymous()
            .with(SessionKey::Credential, "cred")
            .with(SessionKey::SessionToken, "T1")
    }

    fn linked() -> SessionRecord {
        credentialed()
            .with(SessionKey::UserAccount, "acct")
            .with(SessionKey::Board, "b1")
            .with(SessionKey::Permission, "owner")
    }

    #[tokio::test]
    async fn test_anonymous_non_auth_redirects_without_validation() {
        let validator = StubValidator::new(Behavior::Verdict(true));
        let decision = guard(&validator)
            .decide(SessionRecord::anonymous(), "/dashboard")
            .await;

        assert_eq!(decision, GuardDecision::redirect(RedirectTarget::SignIn));
        assert_eq!(validator.calls(), 0);
    }

    #[tokio::test]
    async fn test_anonymous_auth_route_renders_unauthenticated() {
        let validator = StubValidator::new(Behavior::Verdict(true));
        let decision = guard(&validator)
            .decide(SessionRecord::anonymous(), "/auth")
            .await;

        match decision {
            GuardDecision::Render(ctx) => {
                assert!(!ctx.authenticated);
                assert!(ctx.auth_route);
                assert!(!ctx.show_chrome());
                assert_eq!(ctx.env.api_domain, "http://localhost:8080");
            }
            other => panic!("expected render, got {other:?}"),
        }
        assert_eq!(validator.calls(), 0);
    }

    #[tokio::test]
    async fn test_unlinked_non_auth_redirects_to_account_setup() {
        let validator = StubValidator::new(Behavior::Verdict(true));
        let decision = guard(&validator).decide(credentialed(), "/dashboard").await;

        assert_eq!(decision, GuardDecision::redirect(RedirectTarget::LinkAccount));
        assert_eq!(validator.calls(), 0);
    }

    #[tokio::test]
    async fn test_unlinked_auth_route_validates_then_renders() {
        let validator = StubValidator::new(Behavior::Verdict(true));
        let decision = guard(&validator)
            .decide(credentialed(), "/auth/useraccount")
            .await;

        assert!(decision.is_render());
        assert_eq!(validator.calls(), 1);
    }

    #[tokio::test]
    async fn test_linked_valid_renders_authenticated() {
        let validator = StubValidator::new(Behavior::Verdict(true));
        let decision = guard(&validator).decide(linked(), "/dashboard").await;

        match decision {
            GuardDecision::Render(ctx) => {
                assert!(ctx.authenticated);
                assert!(ctx.show_chrome());
                assert_eq!(ctx.session, linked());
            }
            other => panic!("expected render, got {other:?}"),
        }
        assert_eq!(validator.calls(), 1);
        assert_eq!(validator.last_token.lock().unwrap().as_deref(), Some("T1"));
    }

    #[tokio::test]
    async fn test_linked_invalid_clears_and_redirects() {
        for behavior in [Behavior::Verdict(false), Behavior::Fail, Behavior::Hang] {
            let validator = StubValidator::new(behavior);
            let decision = guard(&validator).decide(linked(), "/dashboard").await;

            match decision {
                GuardDecision::Redirect {
                    target,
                    commit: Some(record),
                } => {
                    assert_eq!(target, RedirectTarget::SignIn);
                    for key in SessionKey::AUTH_STATE {
                        assert_eq!(record.get(key), None);
                    }
                }
                other => panic!("expected clearing redirect, got {other:?}"),
            }
            assert_eq!(validator.calls(), 1);
        }
    }

    #[tokio::test]
    async fn test_invalid_on_auth_route_still_clears() {
        let validator = StubValidator::new(Behavior::Verdict(false));
        let decision = guard(&validator).decide(linked(), "/auth").await;

        assert_eq!(decision.redirect_target(), Some(RedirectTarget::SignIn));
        assert!(matches!(
            decision,
            GuardDecision::Redirect { commit: Some(_), .. }
        ));
    }

    #[tokio::test]
    async fn test_dropped_request_commits_nothing() {
        let validator = StubValidator::new(Behavior::Hang);
        let use_case = guard(&validator);

        // Caller goes away before the validator or its bound answers
        let outcome = tokio::time::timeout(
            Duration::from_millis(10),
            use_case.decide(linked(), "/dashboard"),
        )
        .await;

        // No decision means no record to commit
        assert!(outcome.is_err());
        assert_eq!(validator.calls(), 1);

        // Nothing keeps running after the drop
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(validator.calls(), 1);
    }
}
