//! Core types for the environment configuration

mod credentials;
mod environment;

pub use credentials::{Credentials, CREDENTIAL_KEYS, AUDIENCE_KEY, CLIENT_ID_KEY, URL_KEY};
pub use environment::{
    AuthConfig, EnvironmentConfig,
    API_SERVER_URL, CALLBACK_URL, PRODUCTION, SIGNING_ALGORITHMS,
};
