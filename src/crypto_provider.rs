//! Access to the process-global default [`CryptoProvider`] if there is
//! one, otherwise a crate-wide default.

use rustls::crypto::CryptoProvider;
use std::sync::Arc;

/// The process-global default [`CryptoProvider`] if one was installed,
/// otherwise `aws_lc_rs`.
///
/// This is the usual value to hand to
/// [`TlsContextProvider::context`][crate::TlsContextProvider::context]:
/// it carries the CSPRNG every built context draws from.
pub fn default_crypto_provider() -> Arc<CryptoProvider> {
    CryptoProvider::get_default()
        .cloned()
        .unwrap_or_else(|| Arc::new(rustls::crypto::aws_lc_rs::default_provider()))
}
