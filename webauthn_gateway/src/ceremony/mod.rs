mod errors;
mod extract;
mod options;
mod types;
mod verify;

pub use errors::CeremonyError;

pub use extract::{BodyFields, QueryParams};

pub use options::{build_authentication_options, build_registration_options};

pub use types::{
    AuthenticationResponse, CredentialDescriptor, RegistrationResponse, StoredAuthenticator,
    VerifiedRegistration,
};

pub use verify::{verify_authentication, verify_registration};
