/// Read-only access to environment variables.
///
/// Resolution reads through this port so that tests can supply a fixed map
/// instead of mutating process state.
pub trait EnvLookup {
    /// Value of `name`, or `None` when unset or not valid unicode.
    fn get(&self, name: &str) -> Option<String>;
}

impl<T: EnvLookup + ?Sized> EnvLookup for &T {
    fn get(&self, name: &str) -> Option<String> {
        (**self).get(name)
    }
}
