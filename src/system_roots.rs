//! A TLS context provider backed by the operating system's trust bundle.
//!
//! Unix systems keep their CA bundle at one of a small number of
//! well-known paths. This candidate is declared for Linux and macOS and
//! its structural check asks whether any of those paths is present, so
//! hosts without a bundle never construct it.

use rustls::RootCertStore;
use rustls::crypto::CryptoProvider;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::api::{CheckFault, ContextBuildError, TlsContext, TlsContextProvider};
use crate::descriptor::{Platform, ProviderDescriptor, StructuralCheck};
use crate::files::load_roots_logged;

#[cfg(target_os = "linux")]
const BUNDLE_PATHS: &[&str] = &[
    "/etc/ssl/certs/ca-certificates.crt",
    "/etc/pki/tls/certs/ca-bundle.crt",
    "/etc/ssl/ca-bundle.pem",
    "/etc/pki/tls/cacert.pem",
];
#[cfg(not(target_os = "linux"))]
const BUNDLE_PATHS: &[&str] = &["/etc/ssl/cert.pem"];

pub(crate) const DESCRIPTOR: ProviderDescriptor = ProviderDescriptor {
    name: "SystemRoots",
    platforms: &[Platform::Linux, Platform::MacOs],
    structural_checks: &[StructuralCheck {
        name: "trust_bundle_present",
        run: trust_bundle_present,
    }],
    construct,
};

fn construct() -> Box<dyn TlsContextProvider> {
    Box::new(SystemRoots::new())
}

fn first_present<'a>(paths: impl IntoIterator<Item = &'a str>) -> Result<Option<PathBuf>, CheckFault> {
    for path in paths {
        match std::fs::metadata(path) {
            Ok(md) if md.is_file() => return Ok(Some(PathBuf::from(path))),
            Ok(_) => (),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => (),
            Err(e) => return Err(e.into()),
        }
    }
    Ok(None)
}

/// Structural check: some well-known bundle path exists.
fn trust_bundle_present() -> Result<bool, CheckFault> {
    Ok(first_present(BUNDLE_PATHS.iter().copied())?.is_some())
}

/// Trust anchors loaded from the host's CA bundle.
pub struct SystemRoots {
    roots: RootCertStore,
}

impl SystemRoots {
    fn new() -> Self {
        let roots = match first_present(BUNDLE_PATHS.iter().copied()) {
            Ok(Some(path)) => load_roots_logged(&path),
            Ok(None) => RootCertStore::empty(),
            Err(e) => {
                log::warn!("Could not probe system trust bundle: {}", e);
                RootCertStore::empty()
            }
        };
        Self { roots }
    }

    /// Load a provider from an explicit bundle path. Mostly useful for
    /// hosts that keep their bundle somewhere unusual.
    pub fn from_path(path: &Path) -> Self {
        Self {
            roots: load_roots_logged(path),
        }
    }
}

impl TlsContextProvider for SystemRoots {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::availability::passes_instance_checks;
    use crate::testdata;
    use std::io::Write;

    #[test]
    fn first_present_prefers_earlier_paths() {
        let dir = tempfile::tempdir().expect("tempdir");
        let a = dir.path().join("a.pem");
        let b = dir.path().join("b.pem");
        std::fs::write(&b, testdata::CACERT).expect("write");
        let paths = [a.to_str().unwrap(), b.to_str().unwrap()];
        let found = first_present(paths).expect("probe").expect("found");
        assert_eq!(found, b);

        std::fs::write(&a, testdata::CACERT).expect("write");
        let found = first_present(paths).expect("probe").expect("found");
        assert_eq!(found, a);
    }

    #[test]
    fn no_paths_present_is_false_not_a_fault() {
        let dir = tempfile::tempdir().expect("tempdir");
        let missing = dir.path().join("missing.pem");
        assert!(
            first_present([missing.to_str().unwrap()])
                .expect("probe")
                .is_none()
        );
    }

    #[test]
    fn directory_at_bundle_path_does_not_count() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert!(
            first_present([dir.path().to_str().unwrap()])
                .expect("probe")
                .is_none()
        );
    }

    #[test]
    fn explicit_path_load() {
        let mut f = tempfile::NamedTempFile::new().expect("tempfile");
        f.write_all(testdata::CACERT).expect("write bundle");
        let provider = SystemRoots::from_path(f.path());
        assert!(passes_instance_checks("SystemRoots", &provider));
    }
}
