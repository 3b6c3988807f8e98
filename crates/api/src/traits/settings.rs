//! Read access to the daemon's configuration store

/// Boolean lookup against a configuration store
///
/// Implementations must be safe to read from any thread; a key-exchange
/// session consults its store at the moment it needs a value, so a store
/// that is reloaded at runtime takes effect for the next computation.
pub trait Settings: Send + Sync {
    /// Look up `key`, returning `default` when the key is absent
    fn get_bool(&self, key: &str, default: bool) -> bool;
}

impl<S: Settings + ?Sized> Settings for &S {
    fn get_bool(&self, key: &str, default: bool) -> bool {
        (**self).get_bool(key, default)
    }
}

impl<S: Settings + ?Sized> Settings for alloc::sync::Arc<S> {
    fn get_bool(&self, key: &str, default: bool) -> bool {
        (**self).get_bool(key, default)
    }
}
