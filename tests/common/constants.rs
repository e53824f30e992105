//! Shared constants for the end-to-end suites.
//!
//! When test data changes (fixture credentials, error envelope values, etc.),
//! update only this file.

// ============================================================================
// Backing store tables
// ============================================================================

pub const TASK_TABLE: &str = "task";

pub const PROVINCE_TABLE: &str = "province";

/// The user table is named "usserr" in the deployment's schema.
pub const USER_TABLE: &str = "usserr";

// ============================================================================
// Fixture user credentials
// ============================================================================

/// bcrypt hash of "123456", the password fixture users are created with
pub const PASSWORD_HASH_123456: &str =
    "$2y$12$NSsM4gEOR7MKogflKR7GMeYugkttjNhAJMvFdHrBLaLp2HzlggP5W";

/// bcrypt hash of "654321"
pub const PASSWORD_HASH_654321: &str =
    "$2a$12$ycxvFmxrGBiz5bPsmUzPH.03wwqmKTLME966YaMrhoucpQ3Dsmn9e";

// ============================================================================
// Problem-detail envelope values
// ============================================================================

pub const MAX_LENGTH_TYPE: &str = "http://localhost:8080/max-length";

pub const INVALID_REQUEST_BODY_TYPE: &str = "http://localhost:8080/invalid-request-body";

pub const RESOURCE_NOT_FOUND_TYPE: &str = "http://localhost:8080/resource-not-found";

pub const ACCESS_DENIED_TYPE: &str = "http://localhost:8080/access-denied";

/// Generic userMessage the API attaches to internal max-length failures
pub const INTERNAL_ERROR_USER_MESSAGE: &str = "An unexpected internal system error has occurred. \
     Please try again and if the problem persists, contact your system administrator";
