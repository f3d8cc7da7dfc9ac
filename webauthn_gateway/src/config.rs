use std::{env, sync::LazyLock};

/// Resident key policy requested for every registration ceremony.
pub(crate) const RESIDENT_KEY: &str = "required";

/// User verification preference requested for both ceremonies.
pub(crate) const USER_VERIFICATION: &str = "preferred";

/// Attestation conveyance requested from the authenticator. Attestation
/// statements are not collected for trust evaluation.
pub(crate) const ATTESTATION: &str = "none";

pub(crate) static DEFAULT_AUTHENTICATOR_ATTACHMENT: LazyLock<String> =
    LazyLock::new(|| match env::var("WEBAUTHN_DEFAULT_ATTACHMENT").ok() {
        None => "platform".to_string(),
        Some(v) => match v.to_lowercase().as_str() {
            "platform" => "platform".to_string(),
            "cross-platform" => "cross-platform".to_string(),
            invalid => {
                tracing::warn!(
                    "Invalid authenticator attachment: {}. Using default 'platform'",
                    invalid
                );
                "platform".to_string()
            }
        },
    });
