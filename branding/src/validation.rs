/// Common interface for boundary validators.
///
/// Implementors check a single input shape and report a domain-specific
/// error. The type parameter may be unsized (e.g. `str`) so validators can
/// operate on borrowed string slices directly.
///
/// # Examples
///
/// ```
/// use branding::validation::Validator;
///
/// struct NonEmpty;
/// impl Validator<str> for NonEmpty {
///     type Error = String;
///
///     fn validate(&self, input: &str) -> Result<(), Self::Error> {
///         if input.is_empty() {
///             return Err("input cannot be empty".to_string());
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait Validator<T: ?Sized> {
    type Error;

    /// Validate the input, returning Err with a validation error on rejection.
    fn validate(&self, input: &T) -> Result<(), Self::Error>;
}
