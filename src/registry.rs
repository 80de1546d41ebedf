//! The closed candidate set.
//!
//! Candidates are assembled here at compile time, with per-platform
//! entries included through conditional compilation. Nothing is
//! discovered at runtime and nothing can be registered or removed after
//! the process starts. Declaration order is significant: it is the
//! selection precedence when more than one candidate turns out to be
//! usable, so the explicitly configured PEM bundle outranks the system
//! store.

use crate::descriptor::ProviderDescriptor;
use crate::files;
#[cfg(unix)]
use crate::system_roots;

#[cfg(unix)]
static CANDIDATES: &[ProviderDescriptor] = &[files::DESCRIPTOR, system_roots::DESCRIPTOR];
#[cfg(not(unix))]
static CANDIDATES: &[ProviderDescriptor] = &[files::DESCRIPTOR];

/// All statically registered candidates, in declaration order.
///
/// Pure enumeration: no side effects, deterministic across runs.
pub fn all_candidates() -> &'static [ProviderDescriptor] {
    CANDIDATES
}
