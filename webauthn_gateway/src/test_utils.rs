//! Scripted protocol engine shared by the ceremony unit tests.

use std::collections::HashSet;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU32, Ordering};

use async_trait::async_trait;
use serde_json::{Value, json};

use crate::engine::{
    AuthenticationInfo, AuthenticationOptionsRequest, AuthenticationVerdict,
    AuthenticationVerification, EngineError, ProtocolEngine, RegistrationInfo,
    RegistrationOptionsRequest, RegistrationVerdict, RegistrationVerification,
};

/// In-process engine double.
///
/// Challenges are issued deterministically and are single-use: verifying a
/// ceremony consumes its challenge, so a replay with the same challenge
/// comes back unverified, mirroring a real engine's challenge store.
pub(crate) struct MockEngine {
    fail: bool,
    reject_ceremonies: bool,
    breach_contract: bool,
    calls: Mutex<Vec<&'static str>>,
    challenges: Mutex<HashSet<String>>,
    serial: AtomicU32,
}

impl MockEngine {
    pub(crate) fn new() -> Self {
        Self {
            fail: false,
            reject_ceremonies: false,
            breach_contract: false,
            calls: Mutex::new(Vec::new()),
            challenges: Mutex::new(HashSet::new()),
            serial: AtomicU32::new(0),
        }
    }

    /// Engine whose every method fails outright.
    pub(crate) fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new()
        }
    }

    /// Engine that returns unverified verdicts for every ceremony.
    pub(crate) fn rejecting() -> Self {
        Self {
            reject_ceremonies: true,
            ..Self::new()
        }
    }

    /// Engine that claims a registration verified without supplying the
    /// registration info block.
    pub(crate) fn contract_breaching() -> Self {
        Self {
            breach_contract: true,
            ..Self::new()
        }
    }

    pub(crate) fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub(crate) fn calls_to(&self, name: &str) -> usize {
        self.calls.lock().unwrap().iter().filter(|&&c| c == name).count()
    }

    fn record(&self, name: &'static str) {
        self.calls.lock().unwrap().push(name);
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
impl ProtocolEngine for MockEngine {
    async fn generate_registration_options(
        &self,
        request: RegistrationOptionsRequest,
    ) -> Result<Value, EngineError> {
        self.record("generate_registration_options");
        if self.fail {
            return Err(EngineError::new("mock engine failure"));
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
        self.record("verify_registration_response");
        if self.fail {
            return Err(EngineError::new("mock engine failure"));
        }
        if self.breach_contract {
            return Ok(RegistrationVerdict {
                verified: true,
                registration_info: None,
            });
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
        self.record("generate_authentication_options");
        if self.fail {
            return Err(EngineError::new("mock engine failure"));
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
        self.record("verify_authentication_response");
        if self.fail {
            return Err(EngineError::new("mock engine failure"));
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
