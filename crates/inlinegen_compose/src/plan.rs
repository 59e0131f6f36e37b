//! Composition planning.
//!
//! Every choice that depends on more than one capability is made here, once
//! per descriptor. The member table then reads the plan instead of probing
//! capability combinations itself.

use inlinegen_foundation::{Capability, CapabilitySet};

/// Where interface members are implemented.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InterfaceStrategy {
    /// On the collection struct itself.
    Direct,
    /// On a nested helper class reached through `AsInterfaces()`.
    Delegated,
}

/// Which public enumerator the struct exposes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnumeratorVariant {
    /// No public `GetEnumerator`.
    None,
    /// `GetEnumerator` returning `IEnumerator<T>`.
    Interface,
    /// `GetEnumerator` returning a nested ref struct.
    RefStruct,
}

/// How an interface member with a public counterpart is bound.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Binding {
    /// The public method satisfies the interface implicitly.
    Public,
    /// An explicit implementation is emitted.
    Explicit,
}

/// Source of the non-generic `IEnumerable.GetEnumerator`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NonGenericEnumeration {
    /// Forward to the public `GetEnumerator`.
    Method,
    /// Forward through `IEnumerable<T>`.
    Generic,
    /// Own iterator body.
    Body,
    /// Throws; the public enumerator is a ref struct.
    Unsupported,
}

/// Source of `IEnumerable<T>.GetEnumerator`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GenericEnumeration {
    /// The public `GetEnumerator` satisfies it implicitly.
    Method,
    /// Own iterator body.
    Body,
    /// Throws; the public enumerator is a ref struct.
    Unsupported,
}

/// Every structural decision for one descriptor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CompositionPlan {
    /// The closed capability set.
    pub capabilities: CapabilitySet,
    /// Direct or delegated interfaces.
    pub strategy: InterfaceStrategy,
    /// Public enumerator shape.
    pub enumerator: EnumeratorVariant,
    /// How `ICollection<T>.Contains` is bound.
    pub contains: Binding,
    /// How `IList<T>.IndexOf` is bound.
    pub index_of: Binding,
    /// `IEnumerable` source, if `IEnumerable` is implemented.
    pub enumerable: Option<NonGenericEnumeration>,
    /// `IEnumerable<T>` source, if `IEnumerable<T>` is implemented.
    pub enumerable_t: Option<GenericEnumeration>,
}

impl CompositionPlan {
    /// Resolves the plan for a closed capability set.
    #[must_use]
    pub fn resolve(capabilities: CapabilitySet) -> Self {
        let has = |c| capabilities.contains(c);

        let strategy = if has(Capability::DelegatedInterfaces) {
            InterfaceStrategy::Delegated
        } else {
            InterfaceStrategy::Direct
        };
        let delegated = strategy == InterfaceStrategy::Delegated;

        let enumerator = if has(Capability::RefStructEnumerator) {
            EnumeratorVariant::RefStruct
        } else if has(Capability::GetEnumeratorMethod) {
            EnumeratorVariant::Interface
        } else {
            EnumeratorVariant::None
        };

        // The helper class has no public members of its own to forward to.
        let bind = |public: Capability| {
            if has(public) && !delegated {
                Binding::Public
            } else {
                Binding::Explicit
            }
        };

        let enumerable = has(Capability::IEnumerable).then(|| {
            if delegated {
                if has(Capability::IEnumerableT) {
                    NonGenericEnumeration::Generic
                } else {
                    NonGenericEnumeration::Body
                }
            } else {
                match enumerator {
                    EnumeratorVariant::Interface => NonGenericEnumeration::Method,
                    EnumeratorVariant::RefStruct => NonGenericEnumeration::Unsupported,
                    EnumeratorVariant::None if has(Capability::IEnumerableT) => {
                        NonGenericEnumeration::Generic
                    }
                    EnumeratorVariant::None => NonGenericEnumeration::Body,
                }
            }
        });

        let enumerable_t = has(Capability::IEnumerableT).then(|| {
            if delegated {
                GenericEnumeration::Body
            } else {
                match enumerator {
                    EnumeratorVariant::Interface => GenericEnumeration::Method,
                    EnumeratorVariant::RefStruct => GenericEnumeration::Unsupported,
                    EnumeratorVariant::None => GenericEnumeration::Body,
                }
            }
        });

        Self {
            capabilities,
            strategy,
            enumerator,
            contains: bind(Capability::ContainsMethod),
            index_of: bind(Capability::IndexOfMethod),
            enumerable,
            enumerable_t,
        }
    }

    /// Returns true if the capability is present.
    #[must_use]
    pub fn has(&self, capability: Capability) -> bool {
        self.capabilities.contains(capability)
    }

    /// Returns true if interfaces live on the helper class.
    #[must_use]
    pub fn is_delegated(&self) -> bool {
        self.strategy == InterfaceStrategy::Delegated
    }
}
