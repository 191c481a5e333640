/// Builds a [`Name`](crate::name::Name) from unmasked components.
///
/// Every component is masked for the delimiter, so the macro can't fail.
///
/// ```
/// use masked_name::{Delimiter, name};
///
/// let dotted = name!("oss", "cs", "fau", "de");
/// assert_eq!(dotted.as_data_string(), "oss.cs.fau.de");
///
/// let slashed = name!(Delimiter::new('/').unwrap(); "usr", "a/b");
/// assert_eq!(slashed.as_data_string(), r"usr/a\/b");
/// ```
#[macro_export]
macro_rules! name {
    () => {
        $crate::name::Name::empty($crate::delimiter::Delimiter::default())
    };
    ($delimiter:expr; $($component:expr),* $(,)?) => {
        {
            let components: ::std::vec::Vec<::std::string::String> =
                ::std::vec![$(::std::string::ToString::to_string(&$component)),*];
            $crate::name::Name::from_unmasked(components, $delimiter)
        }
    };
    ($($component:expr),+ $(,)?) => {
        $crate::name!($crate::delimiter::Delimiter::default(); $($component),+)
    };
}
