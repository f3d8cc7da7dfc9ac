//! Shared test engine for the router integration tests.

use std::collections::HashSet;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU32, Ordering};

use async_trait::async_trait;
use serde_json::{Value, json};

use webauthn_gateway_axum::{
    AuthenticationInfo, AuthenticationOptionsRequest, AuthenticationVerdict,
    AuthenticationVerification, EngineError, ProtocolEngine, RegistrationInfo,
    RegistrationOptionsRequest, RegistrationVerdict, RegistrationVerification,
};

/// Protocol engine double driven entirely in-process.
///
/// Issued challenges are single-use; verifying a ceremony consumes its
/// challenge so replays come back unverified.
pub struct TestEngine {
    fail: bool,
    reject_ceremonies: bool,
    calls: Mutex<usize>,
    challenges: Mutex<HashSet<String>>,
    serial: AtomicU32,
}

impl TestEngine {
    pub fn new() -> Self {
        Self {
            fail: false,
            reject_ceremonies: false,
            calls: Mutex::new(0),
            challenges: Mutex::new(HashSet::new()),
            serial: AtomicU32::new(0),
        }
    }

    /// Engine whose every method fails outright.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new()
        }
    }

    /// Engine that returns unverified verdicts for every ceremony, as a
    /// real engine does for a stale counter or a consumed challenge.
    pub fn rejecting() -> Self {
        Self {
            reject_ceremonies: true,
            ..Self::new()
        }
    }

    pub fn call_count(&self) -> usize {
        *self.calls.lock().unwrap()
    }

    fn record(&self) {
        *self.calls.lock().unwrap() += 1;
    }

    fn issue_challenge(&self) -> String {
        let challenge = format!("challenge-{}", self.serial.fetch_add(1, Ordering::Relaxed));
        self.challenges.lock().unwrap().insert(challenge.clone());
        challenge
    }

    fn consume_challenge(&self, challenge: &str) -> bool {
        self.challenges.lock().unwrap().remove(challenge)
    }
}

#[async_trait]
impl ProtocolEngine for TestEngine {
    async fn generate_registration_options(
        &self,
        request: RegistrationOptionsRequest,
    ) -> Result<Value, EngineError> {
        self.record();
        if self.fail {
            return Err(EngineError::new("test engine failure"));
        }
        Ok(json!({
            "challenge": self.issue_challenge(),
            "rp": {"name": request.rp_name, "id": request.rp_id},
            "user": {"id": request.user_id, "name": request.user_name},
            "excludeCredentials": serde_json::to_value(&request.exclude_credentials).unwrap(),
            "authenticatorSelection":
                serde_json::to_value(&request.authenticator_selection).unwrap(),
            "attestation": request.attestation,
        }))
    }

    async fn verify_registration_response(
        &self,
        request: RegistrationVerification,
    ) -> Result<RegistrationVerdict, EngineError> {
        self.record();
        if self.fail {
            return Err(EngineError::new("test engine failure"));
        }
        let verified =
            !self.reject_ceremonies && self.consume_challenge(&request.expected_challenge);
        Ok(RegistrationVerdict {
            verified,
            registration_info: verified.then(|| RegistrationInfo {
                credential_id: b"test-credential-id".to_vec(),
                credential_public_key: b"test-public-key".to_vec(),
                counter: 0,
            }),
        })
    }

    async fn generate_authentication_options(
        &self,
        request: AuthenticationOptionsRequest,
    ) -> Result<Value, EngineError> {
        self.record();
        if self.fail {
            return Err(EngineError::new("test engine failure"));
        }
        Ok(json!({
            "challenge": self.issue_challenge(),
            "rpId": request.rp_id,
            "userVerification": request.user_verification,
            "allowCredentials": [],
        }))
    }

    async fn verify_authentication_response(
        &self,
        request: AuthenticationVerification,
    ) -> Result<AuthenticationVerdict, EngineError> {
        self.record();
        if self.fail {
            return Err(EngineError::new("test engine failure"));
        }
        let verified =
            !self.reject_ceremonies && self.consume_challenge(&request.expected_challenge);
        Ok(AuthenticationVerdict {
            verified,
            authentication_info: verified.then(|| AuthenticationInfo {
                new_counter: request.authenticator.counter + 1,
            }),
        })
    }
}
