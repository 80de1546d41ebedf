//! Static metadata about candidate providers.
//!
//! A [`ProviderDescriptor`] is everything the selection pipeline knows
//! about a candidate before deciding to construct it: its name, the
//! platforms it is declared for, its structural availability checks, and
//! a constructor. Descriptors are `'static` data assembled at compile
//! time; the candidate set never changes after that.

use crate::api::{CheckFault, TlsContextProvider};

/// Identifier for the operating platform a candidate is declared for.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Platform {
    /// Linux.
    Linux,
    /// macOS.
    MacOs,
    /// Windows.
    Windows,
    /// Anything the crate was built for but does not specifically
    /// recognize. No descriptor declares this; it exists so that
    /// [`Platform::current`] is total.
    Other,
}

impl Platform {
    /// The platform this binary was compiled for.
    pub fn current() -> Self {
        if cfg!(target_os = "linux") {
            Self::Linux
        } else if cfg!(target_os = "macos") {
            Self::MacOs
        } else if cfg!(target_os = "windows") {
            Self::Windows
        } else {
            Self::Other
        }
    }
}

/// An availability predicate evaluable without constructing the candidate.
///
/// Runs before instantiation so that candidates already known to be
/// unusable never pay the cost, or incur the side effects, of
/// construction. An `Err` means the predicate itself could not be
/// evaluated; the checker logs that and excludes the candidate.
pub struct StructuralCheck {
    /// Name used in diagnostics when the check fails or faults.
    pub name: &'static str,
    /// The predicate.
    pub run: fn() -> Result<bool, CheckFault>,
}

/// Static metadata for one candidate provider.
pub struct ProviderDescriptor {
    /// Implementation name, recorded in the selection log.
    pub name: &'static str,
    /// Platforms the candidate is declared for. Empty means universal.
    pub platforms: &'static [Platform],
    /// Structural availability checks. May be empty; checking is opt-in.
    pub structural_checks: &'static [StructuralCheck],
    /// Constructor, called at most once per selection attempt and only
    /// after platform filtering and structural checks pass.
    pub construct: fn() -> Box<dyn TlsContextProvider>,
}

impl ProviderDescriptor {
    /// Whether the candidate is eligible on `current`.
    ///
    /// A descriptor with an empty platform set is eligible everywhere;
    /// a non-empty set requires membership. This is the cheapest gate
    /// and is evaluated before any other check.
    pub fn eligible_on(&self, current: Platform) -> bool {
        self.platforms.is_empty() || self.platforms.contains(&current)
    }
}
