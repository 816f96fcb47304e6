//! # Signin - Client-side Login Flow
//!
//! This is a facade crate that re-exports all public APIs from the signin components.
//! Use this crate to get access to the whole login flow in one place.
//!
//! ## Usage
//!
//! Add to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! signin = { path = "../signin" }
//! ```
//!
//! ## Structure
//!
//! - **Core domain types**: `Credentials`, `AuthOutcome`, `View`, etc.
//! - **Port traits**: `LoginGateway`, `Navigator`, `ErrorDisplay`
//! - **Use case**: `LoginUseCase`
//! - **Adapters**: `ReqwestLoginGateway`, `InMemoryNavigator`, `SharedErrorDisplay`, etc.

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use signin_core::*;
}

// Re-export most commonly used core types at the root level
pub use signin_core::{
    AttemptId, AuthErrorMessage, AuthOutcome, Credentials, NavigationError,
    NavigationStateMachine, RawResponse, UserRecord, View, interpret,
};

// ============================================================================
// Port Traits
// ============================================================================

/// Port trait definitions
pub mod ports {
    pub use signin_core::{ErrorDisplay, LoginGateway, Navigator, TransportFailure};
}

// Re-export port traits at root level
pub use signin_core::{ErrorDisplay, LoginGateway, Navigator, TransportFailure};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use signin_application::*;
}

// Re-export use cases at root level
pub use signin_application::{LoginError, LoginResponse, LoginUseCase};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// Login endpoint clients
    pub mod gateway {
        pub use signin_adapters::gateway::*;
    }

    /// Navigation state holders
    pub mod navigation {
        pub use signin_adapters::navigation::*;
    }

    /// Error line holders
    pub mod display {
        pub use signin_adapters::display::*;
    }

    /// Configuration
    pub mod config {
        pub use signin_adapters::config::*;
    }
}

// Re-export commonly used adapters at root level
pub use signin_adapters::{
    InMemoryNavigator, MockLoginGateway, ReqwestLoginGateway, SharedErrorDisplay,
};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing port traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};
