//! A TLS context provider that reads trust anchors from a PEM bundle
//! named by the `SSL_CERT_FILE` environment variable.
//!
//! This is the built-in universal candidate: it is declared for no
//! particular platform and its structural check simply asks whether the
//! variable points at a readable file. Loading and parsing happen at
//! construction time; a bundle that yields no usable anchors makes the
//! instance report itself unavailable rather than failing selection.

use rustls::RootCertStore;
use rustls::crypto::CryptoProvider;
use rustls_pki_types::CertificateDer;
use std::fs::File;
use std::io::{Cursor, Read};
use std::path::Path;
use std::sync::Arc;

use crate::api::{CheckFault, ContextBuildError, TlsContext, TlsContextProvider};
use crate::descriptor::{ProviderDescriptor, StructuralCheck};

const CERT_FILE_VAR: &str = "SSL_CERT_FILE";

pub(crate) const DESCRIPTOR: ProviderDescriptor = ProviderDescriptor {
    name: "PemFileRoots",
    platforms: &[],
    structural_checks: &[StructuralCheck {
        name: "ssl_cert_file_present",
        run: ssl_cert_file_present,
    }],
    construct,
};

fn construct() -> Box<dyn TlsContextProvider> {
    Box::new(PemFileRoots::from_env())
}

/// Structural check: `SSL_CERT_FILE` is set and names an existing file.
///
/// An unset variable or a missing file is an ordinary false. Metadata
/// errors other than not-found mean the question could not be answered
/// at all and surface as a fault.
fn ssl_cert_file_present() -> Result<bool, CheckFault> {
    let Some(path) = std::env::var_os(CERT_FILE_VAR) else {
        return Ok(false);
    };
    match std::fs::metadata(&path) {
        Ok(md) => Ok(md.is_file()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e.into()),
    }
}

/// Read a PEM bundle into a root store, tolerating individual entries
/// that do not parse as certificates.
///
/// Returns the store together with the number of entries that were
/// skipped, for diagnostics.
pub(crate) fn load_roots(path: &Path) -> std::io::Result<(RootCertStore, usize)> {
    let mut pem = Vec::new();
    File::open(path)?.read_to_end(&mut pem)?;
    let certs = rustls_pemfile::certs(&mut Cursor::new(&pem))
        .collect::<Result<Vec<CertificateDer<'static>>, _>>()?;
    let mut roots = RootCertStore::empty();
    let (_, skipped) = roots.add_parsable_certificates(certs);
    Ok((roots, skipped))
}

pub(crate) fn load_roots_logged(path: &Path) -> RootCertStore {
    match load_roots(path) {
        Ok((roots, skipped)) => {
            if skipped > 0 {
                log::warn!(
                    "Skipped {} unusable entries in trust bundle {}",
                    skipped,
                    path.display()
                );
            }
            roots
        }
        Err(e) => {
            log::warn!("Could not load trust bundle {}: {}", path.display(), e);
            RootCertStore::empty()
        }
    }
}

/// Trust anchors loaded from a PEM bundle on disk.
pub struct PemFileRoots {
    roots: RootCertStore,
}

impl PemFileRoots {
    fn from_env() -> Self {
        match std::env::var_os(CERT_FILE_VAR) {
            Some(path) => Self::from_path(Path::new(&path)),
            None => Self {
                roots: RootCertStore::empty(),
            },
        }
    }

    /// Load a provider from an explicit bundle path.
    pub fn from_path(path: &Path) -> Self {
        Self {
            roots: load_roots_logged(path),
        }
    }
}

impl TlsContextProvider for PemFileRoots {
    fn available(&self) -> Result<bool, CheckFault> {
        Ok(!self.roots.is_empty())
    }

    fn context(&self, crypto: Arc<CryptoProvider>) -> Result<TlsContext, ContextBuildError> {
        if self.roots.is_empty() {
            return Err(ContextBuildError::NoTrustAnchors);
        }
        let config = rustls::ClientConfig::builder_with_provider(crypto)
            .with_safe_default_protocol_versions()?
            .with_root_certificates(self.roots.clone())
            .with_no_client_auth();
        Ok(TlsContext::new(config))
    }
}
