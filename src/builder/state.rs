//! Pending component updates.

/// A pending update to one URI component.
///
/// `Untouched` keeps the base URI's component, `Cleared` removes or resets
/// it, and `Set` replaces it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) enum Slot<T> {
    #[default]
    Untouched,
    Cleared,
    Set(T),
}

impl<T> Slot<T> {
    pub(crate) fn as_ref(&self) -> Slot<&T> {
        match self {
            Slot::Untouched => Slot::Untouched,
            Slot::Cleared => Slot::Cleared,
            Slot::Set(v) => Slot::Set(v),
        }
    }

    pub(crate) fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Slot<U> {
        match self {
            Slot::Untouched => Slot::Untouched,
            Slot::Cleared => Slot::Cleared,
            Slot::Set(v) => Slot::Set(f(v)),
        }
    }

    /// Applies the update to a component of the base URI.
    ///
    /// `cleared` is what the component becomes when the slot is `Cleared`.
    pub(crate) fn apply(self, base: T, cleared: T) -> T {
        match self {
            Slot::Untouched => base,
            Slot::Cleared => cleared,
            Slot::Set(v) => v,
        }
    }
}

impl Slot<String> {
    /// Sets a text value, treating the empty string as a removal.
    pub(crate) fn text(v: &str) -> Self {
        if v.is_empty() {
            Slot::Cleared
        } else {
            Slot::Set(v.to_owned())
        }
    }
}

/// A port update.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum PortUpdate {
    /// Use the default port of the resulting scheme.
    Default,
    Number(u16),
}

#[derive(Clone, PartialEq, Eq)]
pub(crate) struct Credentials {
    pub(crate) user: String,
    pub(crate) password: String,
}
