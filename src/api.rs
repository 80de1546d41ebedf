//! API for providers of TLS contexts.
//!
//! To install a mechanism for producing TLS client parameters, implement
//! the [`TlsContextProvider`] trait and register a
//! [`ProviderDescriptor`][crate::ProviderDescriptor] for it in the
//! candidate registry. The selection pipeline in [`crate::select`] decides
//! which of the registered implementations is actually handed to the
//! caller on the current host.
//!
//! Example provider:
//!
//! ```
//! use sslcontext::{CheckFault, ContextBuildError, TlsContext, TlsContextProvider};
//! use rustls::crypto::CryptoProvider;
//! use std::sync::Arc;
//!
//! struct ExampleProvider;
//!
//! impl TlsContextProvider for ExampleProvider {
//!     fn available(&self) -> Result<bool, CheckFault> {
//!         // Anything that can only be answered by a constructed provider,
//!         // such as whether a native store opened successfully.
//!         Ok(true)
//!     }
//!
//!     fn context(&self, crypto: Arc<CryptoProvider>) -> Result<TlsContext, ContextBuildError> {
//!         let roots = rustls::RootCertStore::empty();
//!         // ...populate roots...
//!         # if roots.is_empty() { return Err(ContextBuildError::NoTrustAnchors); }
//!         let config = rustls::ClientConfig::builder_with_provider(crypto)
//!             .with_safe_default_protocol_versions()?
//!             .with_root_certificates(roots)
//!             .with_no_client_auth();
//!         Ok(TlsContext::new(config))
//!     }
//! }
//! ```

use rustls::ClientConfig;
use rustls::crypto::CryptoProvider;
use std::sync::Arc;
use thiserror::Error;

/// Error type returned when a selected provider cannot produce a context.
///
/// Always wraps the originating cause; it is surfaced verbatim to the
/// immediate caller of [`TlsContextProvider::context`], which may retry
/// with the next provider in the selection or report upstream.
#[derive(Debug, Error)]
pub enum ContextBuildError {
    /// Wrapper for std::io::Error (store or bundle could not be read).
    #[error("{0}")]
    IOError(#[from] std::io::Error),
    /// Wrapper for rustls::Error.
    #[error("{0}")]
    TLSError(#[from] rustls::Error),
    /// The provider holds no trust anchors, so any context it built
    /// would be unable to verify a peer.
    #[error("no trust anchors loaded")]
    NoTrustAnchors,
}

/// Error produced when an availability predicate could not be evaluated
/// at all, as opposed to evaluating to false.
///
/// Never propagated to the selection caller: the checker logs it and
/// treats the candidate as unavailable.
#[derive(Debug, Error)]
pub enum CheckFault {
    /// The predicate required I/O that failed.
    #[error("{0}")]
    IOError(#[from] std::io::Error),
    /// The surface the predicate needed to consult is not present.
    #[error("{0}")]
    Unsupported(&'static str),
}

/// An initialized TLS context, ready for handshakes.
///
/// Opaque handle over the rustls client configuration. Ownership transfers
/// entirely to the caller; the selection subsystem retains no reference.
#[derive(Debug)]
pub struct TlsContext(Arc<ClientConfig>);

impl TlsContext {
    /// Wrap a fully initialized [`ClientConfig`].
    pub fn new(config: ClientConfig) -> Self {
        Self(Arc::new(config))
    }

    /// Surrender the underlying [`ClientConfig`].
    pub fn into_client_config(self) -> Arc<ClientConfig> {
        self.0
    }
}

/// A candidate implementation of the TLS-context-producing capability.
///
/// Implementations are expected to be side-effecting (open native
/// resources, initialize cryptographic state) and must either return a
/// fully initialized [`TlsContext`] or fail with a [`ContextBuildError`]
/// wrapping the cause. A half-built context is never returned.
pub trait TlsContextProvider: Send + Sync {
    /// Instance-phase availability predicate, evaluated by the selection
    /// pipeline after construction and before the provider is handed to
    /// the caller. Exists because some availability conditions are only
    /// observable once state is initialized in the instance.
    ///
    /// The default passes, so providers with no instance-level condition
    /// need not implement it. An `Err` is treated as unavailable, not
    /// propagated.
    fn available(&self) -> Result<bool, CheckFault> {
        Ok(true)
    }

    /// Build a TLS context, drawing randomness from `crypto`.
    fn context(&self, crypto: Arc<CryptoProvider>) -> Result<TlsContext, ContextBuildError>;
}
