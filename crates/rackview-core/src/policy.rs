// ── Role policy ──
//
// Pure mapping from role to capability set. No permission state is
// stored anywhere else; everything downstream derives from this.

use crate::model::Role;

/// Boolean capabilities gating UI actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PermissionSet {
    /// May fetch and display the audit log.
    pub can_view_logs: bool,
    /// May create and delete server records.
    pub can_mutate_servers: bool,
}

impl PermissionSet {
    /// The least-privileged set: read-only inventory, no logs.
    pub const READ_ONLY: Self = Self {
        can_view_logs: false,
        can_mutate_servers: false,
    };
}

/// Derive the permission set for a role.
///
/// Total over all roles: anything that isn't `Admin` -- including
/// role strings the backend may add in the future -- gets the
/// least-privileged set.
pub fn permissions_for(role: Role) -> PermissionSet {
    match role {
        Role::Admin => PermissionSet {
            can_view_logs: true,
            can_mutate_servers: true,
        },
        Role::Standard | Role::Unknown => PermissionSet::READ_ONLY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_gets_full_permissions() {
        let perms = permissions_for(Role::Admin);
        assert!(perms.can_view_logs);
        assert!(perms.can_mutate_servers);
    }

    #[test]
    fn all_non_admin_roles_get_read_only() {
        for role in [Role::Standard, Role::Unknown] {
            let perms = permissions_for(role);
            assert!(!perms.can_view_logs, "{role} should not view logs");
            assert!(!perms.can_mutate_servers, "{role} should not mutate");
        }
    }
}
