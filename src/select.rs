//! The selection pipeline.
//!
//! Composes the candidate registry, the platform filter, and the
//! availability checker into a lazily evaluated, ordered sequence of
//! usable providers. Candidates are considered in registry order;
//! construction happens incrementally as the caller consumes the
//! sequence, so excluding a candidate early means it is never
//! instantiated, and consuming only the first survivor leaves the rest
//! untouched.
//!
//! An empty sequence is a valid result, not an error: it means no TLS
//! capability is available on this host and the caller decides what to
//! do about that.

use rustls::crypto::CryptoProvider;
use std::sync::Arc;

use crate::api::{ContextBuildError, TlsContext, TlsContextProvider};
use crate::availability::{passes_instance_checks, passes_structural_checks};
use crate::descriptor::{Platform, ProviderDescriptor};
use crate::registry;

/// A provider that survived platform filtering, structural checks,
/// construction, and instance checks, in that order.
pub struct SelectedProvider {
    name: &'static str,
    instance: Box<dyn TlsContextProvider>,
}

impl SelectedProvider {
    /// Registry name of the selected implementation.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Build a TLS context using the selected implementation.
    ///
    /// Failures are the provider's own, wrapped in
    /// [`ContextBuildError`] and surfaced verbatim; the caller may move
    /// on to the next provider in the sequence or report upstream.
    pub fn context(&self, crypto: Arc<CryptoProvider>) -> Result<TlsContext, ContextBuildError> {
        self.instance.context(crypto)
    }

    /// Surrender the underlying provider instance.
    pub fn into_inner(self) -> Box<dyn TlsContextProvider> {
        self.instance
    }
}

pub(crate) fn select_from(
    candidates: &'static [ProviderDescriptor],
    current: Platform,
) -> impl Iterator<Item = SelectedProvider> {
    candidates
        .iter()
        .filter(move |d| d.eligible_on(current))
        .filter(|d| passes_structural_checks(d))
        .filter_map(|d| {
            let instance = (d.construct)();
            if passes_instance_checks(d.name, instance.as_ref()) {
                log::debug!("TlsContextProvider: implementation is available: {}", d.name);
                Some(SelectedProvider {
                    name: d.name,
                    instance,
                })
            } else {
                None
            }
        })
}

/// All usable providers for `current`, in registry order.
///
/// The sequence is finite and lazy, and each call performs its own
/// independent enumeration; nothing is cached across invocations.
pub fn usable_providers_on(current: Platform) -> impl Iterator<Item = SelectedProvider> {
    select_from(registry::all_candidates(), current)
}

/// All usable providers for the platform this binary was compiled for.
pub fn usable_providers() -> impl Iterator<Item = SelectedProvider> {
    usable_providers_on(Platform::current())
}
