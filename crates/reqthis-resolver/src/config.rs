//! Check configuration.

/// Which member-access forms the check reports. Filtering happens at
/// reporting time only; the resolution algorithm itself never changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CheckTargets {
    /// Report unqualified instance-variable references (and the unresolved
    /// references that fall out of the same lookup).
    pub fields: bool,
    /// Report unqualified instance-method calls.
    pub methods: bool,
}

impl CheckTargets {
    pub const fn all() -> CheckTargets {
        CheckTargets {
            fields: true,
            methods: true,
        }
    }

    pub const fn fields_only() -> CheckTargets {
        CheckTargets {
            fields: true,
            methods: false,
        }
    }

    pub const fn methods_only() -> CheckTargets {
        CheckTargets {
            fields: false,
            methods: true,
        }
    }
}

impl Default for CheckTargets {
    fn default() -> Self {
        CheckTargets::all()
    }
}
