/// Names the documentation group of an operation.
///
/// Implemented for string types; implement it on your own enum to avoid typos:
///
/// ```rust
/// use restdocs_core::ApiTag;
///
/// enum MyTag {
///     User,
///     Order,
/// }
///
/// impl ApiTag for MyTag {
///     fn name(&self) -> &str {
///         match self {
///             Self::User => "user api",
///             Self::Order => "order api",
///         }
///     }
/// }
///
/// assert_eq!(MyTag::User.name(), "user api");
/// assert_eq!("Sample".name(), "Sample");
/// ```
pub trait ApiTag {
    /// The display name of the tag.
    fn name(&self) -> &str;
}

impl ApiTag for str {
    fn name(&self) -> &str {
        self
    }
}

impl ApiTag for String {
    fn name(&self) -> &str {
        self
    }
}

impl<T> ApiTag for &T
where
    T: ApiTag + ?Sized,
{
    fn name(&self) -> &str {
        T::name(self)
    }
}
