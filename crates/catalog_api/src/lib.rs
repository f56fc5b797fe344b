//! Types for communication between the catalog backend and the admin frontend.

pub mod request;
pub mod resource;
pub mod response;

/// Local storage key holding the session token.
pub const TOKEN_STORAGE_KEY: &str = "token";

/// Route the browser is sent to when the session ends.
pub const LOGIN_ROUTE: &str = "/login";

/// Endpoint resolving the current token into an identity.
pub const PROFILE_ENDPOINT: &str = "/api/auth/profile";

/// Endpoint accepting email and password.
pub const SIGN_IN_ENDPOINT: &str = "/login";
