use core::ptr::{self, NonNull};

#[cfg(feature = "alloc")]
use alloc::{boxed::Box, rc::Rc, sync::Arc};

/// A handle through which a single element can be reached.
///
/// Raw pointers, references and the owning handles from `alloc` implement this. A custom handle
/// implements it by forwarding to the handle it stores, so the chain of `as_ptr` calls always ends
/// at a plain address.
pub trait PointerLike {
    /// The type reached by dereferencing the handle.
    type Element: ?Sized;

    /// Acquires a `*const` pointer to the element.
    fn as_ptr(&self) -> *const Self::Element;

    /// Returns true if the handle does not point at anything.
    fn is_null(&self) -> bool {
        self.as_ptr().is_null()
    }
}

/// A [`PointerLike`] handle that may also hand out mutable access to its element.
///
/// Shared handles such as `&T`, `*const T` and `Rc<T>` deliberately don't implement this.
pub trait PointerLikeMut: PointerLike {
    /// Acquires a `*mut` pointer to the element.
    fn as_mut_ptr(&mut self) -> *mut Self::Element;
}

/// A [`PointerLike`] handle with a null state.
pub trait Nullable: PointerLike {
    /// Creates a handle pointing at nothing.
    fn null() -> Self;
}

/// The element type of the pointer kind `P`.
pub type ElementOf<P> = <P as PointerLike>::Element;

// === Raw pointers === //

impl<T: ?Sized> PointerLike for *mut T {
    type Element = T;

    fn as_ptr(&self) -> *const T {
        *self
    }
}

impl<T: ?Sized> PointerLikeMut for *mut T {
    fn as_mut_ptr(&mut self) -> *mut T {
        *self
    }
}

impl<T> Nullable for *mut T {
    fn null() -> Self {
        ptr::null_mut()
    }
}

impl<T: ?Sized> PointerLike for *const T {
    type Element = T;

    fn as_ptr(&self) -> *const T {
        *self
    }
}

impl<T> Nullable for *const T {
    fn null() -> Self {
        ptr::null()
    }
}

impl<T: ?Sized> PointerLike for NonNull<T> {
    type Element = T;

    fn as_ptr(&self) -> *const T {
        NonNull::as_ptr(*self)
    }

    fn is_null(&self) -> bool {
        false
    }
}

impl<T: ?Sized> PointerLikeMut for NonNull<T> {
    fn as_mut_ptr(&mut self) -> *mut T {
        NonNull::as_ptr(*self)
    }
}

impl<T> PointerLike for Option<NonNull<T>> {
    type Element = T;

    fn as_ptr(&self) -> *const T {
        self.map_or(ptr::null(), |ptr| NonNull::as_ptr(ptr) as *const T)
    }

    fn is_null(&self) -> bool {
        self.is_none()
    }
}

impl<T> PointerLikeMut for Option<NonNull<T>> {
    fn as_mut_ptr(&mut self) -> *mut T {
        self.map_or(ptr::null_mut(), |ptr| NonNull::as_ptr(ptr))
    }
}

impl<T> Nullable for Option<NonNull<T>> {
    fn null() -> Self {
        None
    }
}

// === References === //

impl<'a, T: ?Sized> PointerLike for &'a T {
    type Element = T;

    fn as_ptr(&self) -> *const T {
        *self
    }

    fn is_null(&self) -> bool {
        false
    }
}

impl<'a, T: ?Sized> PointerLike for &'a mut T {
    type Element = T;

    fn as_ptr(&self) -> *const T {
        &**self
    }

    fn is_null(&self) -> bool {
        false
    }
}

impl<'a, T: ?Sized> PointerLikeMut for &'a mut T {
    fn as_mut_ptr(&mut self) -> *mut T {
        &mut **self
    }
}

// === Owning handles === //

#[cfg(feature = "alloc")]
impl<T: ?Sized> PointerLike for Box<T> {
    type Element = T;

    fn as_ptr(&self) -> *const T {
        &**self
    }

    fn is_null(&self) -> bool {
        false
    }
}

#[cfg(feature = "alloc")]
impl<T: ?Sized> PointerLikeMut for Box<T> {
    fn as_mut_ptr(&mut self) -> *mut T {
        &mut **self
    }
}

#[cfg(feature = "alloc")]
impl<T> PointerLike for Option<Box<T>> {
    type Element = T;

    fn as_ptr(&self) -> *const T {
        self.as_deref().map_or(ptr::null(), |value| value as *const T)
    }

    fn is_null(&self) -> bool {
        self.is_none()
    }
}

#[cfg(feature = "alloc")]
impl<T> PointerLikeMut for Option<Box<T>> {
    fn as_mut_ptr(&mut self) -> *mut T {
        self.as_deref_mut()
            .map_or(ptr::null_mut(), |value| value as *mut T)
    }
}

#[cfg(feature = "alloc")]
impl<T> Nullable for Option<Box<T>> {
    fn null() -> Self {
        None
    }
}

// Shared owners never hand out `&mut`, so they only get the immutable half.

#[cfg(feature = "alloc")]
impl<T: ?Sized> PointerLike for Rc<T> {
    type Element = T;

    fn as_ptr(&self) -> *const T {
        Rc::as_ptr(self)
    }

    fn is_null(&self) -> bool {
        false
    }
}

#[cfg(feature = "alloc")]
impl<T: ?Sized> PointerLike for Arc<T> {
    type Element = T;

    fn as_ptr(&self) -> *const T {
        Arc::as_ptr(self)
    }

    fn is_null(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use core::ptr::{self, NonNull};

    use super::{Nullable, PointerLike, PointerLikeMut};

    #[test]
    fn test_raw_null() {
        let p = <*mut u32 as Nullable>::null();

        assert!(PointerLike::is_null(&p));
        assert!(PointerLike::as_ptr(&p).is_null());

        let p = <*const u32 as Nullable>::null();

        assert!(PointerLike::is_null(&p));
    }

    #[test]
    fn test_raw_addresses_agree() {
        let mut value = 7u32;
        let mut p = &mut value as *mut u32;

        assert_eq!(PointerLike::as_ptr(&p), p as *const u32);
        assert_eq!(PointerLikeMut::as_mut_ptr(&mut p), p);
        assert!(!PointerLike::is_null(&p));
    }

    #[test]
    fn test_non_null() {
        let mut value = 7u32;
        let mut p = NonNull::from(&mut value);

        assert!(!PointerLike::is_null(&p));
        assert_eq!(PointerLikeMut::as_mut_ptr(&mut p), p.as_ptr());

        let mut none = <Option<NonNull<u32>> as Nullable>::null();

        assert!(PointerLike::is_null(&none));
        assert!(PointerLikeMut::as_mut_ptr(&mut none).is_null());

        let some = Some(p);

        assert!(!PointerLike::is_null(&some));
        assert_eq!(PointerLike::as_ptr(&some), p.as_ptr() as *const u32);
    }

    #[test]
    fn test_references() {
        let mut value = 7u32;
        let address = &value as *const u32;

        let shared = &value;

        assert!(ptr::eq(PointerLike::as_ptr(&shared), address));

        let mut unique = &mut value;

        assert!(ptr::eq(PointerLike::as_ptr(&unique), address));
        assert!(ptr::eq(PointerLikeMut::as_mut_ptr(&mut unique), address));
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn test_owning_handles() {
        use alloc::{boxed::Box, rc::Rc, sync::Arc};

        let mut boxed = Box::new(7u32);
        let address = &*boxed as *const u32;

        assert!(ptr::eq(PointerLike::as_ptr(&boxed), address));
        assert!(ptr::eq(PointerLikeMut::as_mut_ptr(&mut boxed), address));

        let mut maybe = Some(boxed);

        assert!(ptr::eq(PointerLike::as_ptr(&maybe), address));
        assert!(!PointerLike::is_null(&maybe));

        maybe = Nullable::null();

        assert!(PointerLike::is_null(&maybe));
        assert!(PointerLikeMut::as_mut_ptr(&mut maybe).is_null());

        let rc = Rc::new(7u32);

        assert!(ptr::eq(PointerLike::as_ptr(&rc), Rc::as_ptr(&rc)));

        let arc = Arc::new(7u32);

        assert!(ptr::eq(PointerLike::as_ptr(&arc), Arc::as_ptr(&arc)));
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn test_unsized_elements() {
        use alloc::{boxed::Box, vec};

        let boxed: Box<[u8]> = vec![1, 2, 3].into_boxed_slice();
        let element = PointerLike::as_ptr(&boxed);

        assert_eq!(unsafe { &*element }, &[1u8, 2, 3][..]);
    }
}
