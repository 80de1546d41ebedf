//! Selection of a usable TLS context provider.
//!
//! TLS context construction depends on host facilities that are not
//! uniformly available: OS certificate stores, bundle files that may or
//! may not exist, stores that fail to open. A candidate implementation
//! that compiles in is not necessarily usable on the machine the binary
//! lands on. This crate picks, at process start, a working implementation
//! of the context-building capability from a closed, statically
//! registered candidate set, without the caller knowing which platforms
//! or runtime conditions are in effect.
//!
//! Candidates implement [`TlsContextProvider`] and are described by a
//! [`ProviderDescriptor`] in the compile-time [`registry`]. Selection
//! runs in ordered phases, cheapest first: the platform filter consults
//! only declared metadata, structural checks run without constructing
//! anything, and only candidates that survive both are constructed and
//! given a chance to veto themselves through an instance check.
//! [`usable_providers`] exposes the survivors as a lazy sequence in
//! registry order; most callers take the first:
//!
//! ```no_run
//! use sslcontext::{default_crypto_provider, usable_providers};
//!
//! let Some(provider) = usable_providers().next() else {
//!     panic!("no TLS capability available");
//! };
//! let context = provider.context(default_crypto_provider())?;
//! let config = context.into_client_config();
//! # Ok::<(), sslcontext::ContextBuildError>(())
//! ```
//!
//! Two built-in candidates are registered: [`PemFileRoots`], a universal
//! provider fed by the `SSL_CERT_FILE` environment variable, and (on
//! Unix) [`SystemRoots`], which reads the OS trust bundle from its
//! well-known location.

#![warn(missing_docs)]

pub mod api;
pub mod availability;
pub mod crypto_provider;
pub mod descriptor;
pub mod files;
pub mod registry;
pub mod select;
#[cfg(unix)]
pub mod system_roots;
#[cfg(test)]
mod testdata;

pub use api::{CheckFault, ContextBuildError, TlsContext, TlsContextProvider};
pub use crypto_provider::default_crypto_provider;
pub use descriptor::{Platform, ProviderDescriptor, StructuralCheck};
pub use files::PemFileRoots;
pub use select::{SelectedProvider, usable_providers, usable_providers_on};
#[cfg(unix)]
pub use system_roots::SystemRoots;
