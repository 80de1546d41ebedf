//! Two-phase availability checking.
//!
//! Structural checks run against the descriptor alone, before any
//! instance exists. Instance checks run against a constructed provider.
//! In both phases a predicate that cannot be evaluated is treated as a
//! failed check and logged; faults never propagate to the selection
//! caller.

use crate::api::TlsContextProvider;
use crate::descriptor::ProviderDescriptor;

/// Run all structural checks attached to `descriptor`.
///
/// True iff every predicate returns true. A descriptor with no attached
/// checks passes vacuously. A predicate that faults is logged at error
/// level and counted as false.
pub fn passes_structural_checks(descriptor: &ProviderDescriptor) -> bool {
    descriptor.structural_checks.iter().all(|check| {
        match (check.run)() {
            Ok(true) => true,
            Ok(false) => {
                log::debug!(
                    "{}: structural check {} excluded the candidate",
                    descriptor.name,
                    check.name
                );
                false
            }
            Err(e) => {
                log::error!(
                    "Can't run structural check {} for {}: {}",
                    check.name,
                    descriptor.name,
                    e
                );
                false
            }
        }
    })
}

/// Run the instance-phase availability predicate of a constructed
/// provider.
///
/// Same semantics as [`passes_structural_checks`] but the condition is
/// evaluated on the instance. A fault is logged at warning level and
/// counted as false.
pub fn passes_instance_checks(name: &'static str, instance: &dyn TlsContextProvider) -> bool {
    match instance.available() {
        Ok(ok) => ok,
        Err(e) => {
            log::warn!("Failed to run availability check on {} instance: {}", name, e);
            false
        }
    }
}
