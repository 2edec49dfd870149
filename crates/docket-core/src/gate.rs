//! # Session Gate
//!
//! Gates the registry-mutating operations behind a single login.
//!
//! The credential check is a static, compiled-in comparison replicated
//! from the source system for parity. It is a placeholder, not a security
//! mechanism: a deployment intended for real use must replace it with a
//! proper credential store. The comparison itself is still constant-time
//! (`subtle`) so the placeholder does not leak match length or prefix.
//!
//! There is no session expiry, no multi-user distinction, and no lockout
//! after failed attempts; the gate is a single authenticated/unauthenticated
//! boolean.

use subtle::ConstantTimeEq;

/// Compiled-in administrator username.
pub const ADMIN_USERNAME: &str = "admin";

/// Compiled-in administrator password.
pub const ADMIN_PASSWORD: &str = "admin123";

/// Result of a login attempt. A rejection is a negative outcome, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Credentials matched; the gate is now open.
    Authenticated,
    /// Credentials did not match; prior gate state is untouched.
    Rejected,
}

/// Single-user authentication state.
#[derive(Debug, Default)]
pub struct SessionGate {
    authenticated: bool,
}

impl SessionGate {
    /// Create a closed gate.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluate a login attempt against the fixed credentials.
    ///
    /// Success opens the gate; failure leaves the current state untouched.
    pub fn attempt_login(&mut self, username: &str, password: &str) -> LoginOutcome {
        let user_ok = ct_str_eq(username, ADMIN_USERNAME);
        let pass_ok = ct_str_eq(password, ADMIN_PASSWORD);
        if user_ok && pass_ok {
            self.authenticated = true;
            LoginOutcome::Authenticated
        } else {
            LoginOutcome::Rejected
        }
    }

    /// Close the gate unconditionally.
    pub fn logout(&mut self) {
        self.authenticated = false;
    }

    /// Whether the gate is currently open.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }
}

/// Constant-time string comparison.
///
/// Pads both sides to the same length so `ct_eq` always runs over the same
/// number of bytes, then folds the length check into the result.
fn ct_str_eq(provided: &str, expected: &str) -> bool {
    let provided_bytes = provided.as_bytes();
    let expected_bytes = expected.as_bytes();

    let max_len = provided_bytes.len().max(expected_bytes.len());
    let mut padded_provided = vec![0u8; max_len];
    let mut padded_expected = vec![0u8; max_len];
    padded_provided[..provided_bytes.len()].copy_from_slice(provided_bytes);
    padded_expected[..expected_bytes.len()].copy_from_slice(expected_bytes);

    let bytes_match: bool = padded_provided.ct_eq(&padded_expected).into();
    bytes_match && provided_bytes.len() == expected_bytes.len()
}

// =============================================================================
// TESTS
// =============================================================================
