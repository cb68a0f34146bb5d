/// The last value produced by a shared pipeline.
///
/// Starts pending with a placeholder value and becomes resolved once the
/// pipeline has produced its value. A resolved result never goes back to
/// pending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedResult<T> {
    value: T,
    resolved: bool,
}

impl<T> CachedResult<T> {
    /// Creates a result that has not been produced yet.
    pub fn pending(placeholder: T) -> Self {
        Self {
            value: placeholder,
            resolved: false,
        }
    }

    /// Creates a result holding a produced value.
    pub fn resolved(value: T) -> Self {
        Self {
            value,
            resolved: true,
        }
    }

    /// Returns true once the pipeline has produced a value.
    pub fn is_resolved(&self) -> bool {
        self.resolved
    }

    /// Returns the current value (the placeholder while pending).
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Consumes the result and returns the current value.
    pub fn into_value(self) -> T {
        self.value
    }
}

impl<T: Default> Default for CachedResult<T> {
    fn default() -> Self {
        Self::pending(T::default())
    }
}
