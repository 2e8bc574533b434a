mod group;
mod user;

pub use group::{LldapGroup, LldapGroupSpec, LldapGroupStatus};
pub use user::{LldapUser, LldapUserSpec, LldapUserStatus};

use crate::registry::{self, Registry};

/// Group all LLDAP record kinds are served under.
pub const GROUP: &str = "lldap-operator.github.com";
/// Version all LLDAP record kinds are served under.
pub const VERSION: &str = "v1alpha1";

/// Registers both LLDAP record kinds, and their list kinds, with `registry`.
///
/// Calling this more than once on the same registry is a no-op.
pub fn add_to_registry(registry: &mut Registry) -> registry::Result<()> {
    registry.register::<LldapUser>()?.register::<LldapGroup>()?;

    Ok(())
}

/// Builds a registry that knows about every LLDAP record kind.
pub fn registry() -> registry::Result<Registry> {
    let mut registry = Registry::new();
    add_to_registry(&mut registry)?;

    Ok(registry)
}
