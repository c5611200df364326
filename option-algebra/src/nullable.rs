//! Types carrying an in-band **null sentinel**.
//!
//! A [`Nullable`] type reserves one of its own values to mean "absent".
//! Converting it into an [`Option`] moves that sentinel out of band:
//!
//! - [`Option<T>`](Option): `None` is the sentinel, so conversion is
//!   the identity.
//! - `*const T` and `*mut T`: the null pointer is the sentinel, every
//!   other pointer becomes a [`NonNull<T>`].
//!
//! No pointer is ever dereferenced, so all conversions are safe.
//!
//! # Example
//!
//! ```rust
//! use option_algebra::option::{from_nullable, to_nullable};
//! use std::ptr::{self, NonNull};
//!
//! let x = 42;
//! let p: *const i32 = &x;
//!
//! assert_eq!(from_nullable(p), Some(NonNull::from(&x)));
//! assert_eq!(from_nullable(ptr::null::<i32>()), None);
//!
//! let back: *const i32 = to_nullable(from_nullable(p));
//! assert_eq!(back, p);
//! ```

use std::ptr::{self, NonNull};

/// A type with a distinguished null value.
///
/// Laws (not enforced by type system):
///
/// - `from_option(x.into_option()) == x`
/// - `from_option(o).into_option() == o`
pub trait Nullable: Sized {
    /// The type of non-null values.
    type Value;

    /// Move the sentinel out of band: null becomes `None`.
    fn into_option(self) -> Option<Self::Value>;

    /// Move `None` back into band as the sentinel.
    fn from_option(value: Option<Self::Value>) -> Self;

    /// The null sentinel itself.
    fn null() -> Self {
        Self::from_option(None)
    }
}

impl<T> Nullable for Option<T> {
    type Value = T;

    fn into_option(self) -> Option<T> {
        self
    }

    fn from_option(value: Option<T>) -> Self {
        value
    }
}

impl<T> Nullable for *const T {
    type Value = NonNull<T>;

    fn into_option(self) -> Option<NonNull<T>> {
        NonNull::new(self.cast_mut())
    }

    fn from_option(value: Option<NonNull<T>>) -> Self {
        value.map_or(ptr::null(), |p| p.as_ptr().cast_const())
    }
}

impl<T> Nullable for *mut T {
    type Value = NonNull<T>;

    fn into_option(self) -> Option<NonNull<T>> {
        NonNull::new(self)
    }

    fn from_option(value: Option<NonNull<T>>) -> Self {
        value.map_or(ptr::null_mut(), NonNull::as_ptr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_is_its_own_nullable() {
        assert_eq!(Some(1).into_option(), Some(1));
        assert_eq!(None::<i32>.into_option(), None);
        assert_eq!(<Option<i32>>::null(), None);
    }

    #[test]
    fn null_pointers_become_none() {
        assert_eq!(ptr::null::<u8>().into_option(), None);
        assert_eq!(ptr::null_mut::<u8>().into_option(), None);
        assert!(<*const u8>::null().is_null());
        assert!(<*mut u8>::null().is_null());
    }

    #[test]
    fn non_null_pointers_round_trip() {
        let mut x = 7u32;
        let m: *mut u32 = &mut x;
        let nn = m.into_option();
        assert_eq!(nn.map(NonNull::as_ptr), Some(m));
        assert_eq!(<*mut u32>::from_option(nn), m);

        let c: *const u32 = m;
        assert_eq!(<*const u32>::from_option(c.into_option()), c);
    }
}
