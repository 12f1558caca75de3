#![doc = include_str!("../README.md")]

pub(crate) mod backing;
pub mod error;
pub mod list;
pub(crate) mod sort;

pub use error::ListError;
pub use list::{DynamicList, DEFAULT_CAPACITY};

/// Construct a [`DynamicList`](crate::list::DynamicList) from a sequence of elements
///
/// The capacity of the resulting list is exactly the number of elements given, an
/// empty invocation is the same as [`DynamicList::new`](crate::list::DynamicList::new).
#[macro_export]
macro_rules! dynamic_list {
    () => { $crate::list::DynamicList::new() };

    ( $($x:expr),+ $(,)? ) => {{
        $crate::list::DynamicList::from(vec![$(
            $x,
        ) *])
    }};
}
