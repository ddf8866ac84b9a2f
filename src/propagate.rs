use core::{
    fmt, mem,
    ops::{Deref, DerefMut},
    ptr::NonNull,
};

use crate::pointer::{Nullable, PointerLike, PointerLikeMut};

/// A pointer-like `P` whose pointee is only as mutable as the wrapper itself.
///
/// Through `&PropagateConst<P>` the element can only be observed; mutable access requires
/// `&mut PropagateConst<P>`. This holds even for kinds such as `*mut T` or `NonNull<T>` that
/// would otherwise hand out a mutable pointer from a shared borrow.
///
/// Like `Box` and `Rc`, the wrapper only has associated functions, called as
/// `PropagateConst::get(&pc)`. Method calls on a dereferencing wrapper always reach the pointee:
///
/// ```
/// use propagate_const::PropagateConst;
///
/// let mut pc = PropagateConst::wrap(Box::new(vec![1u8, 2, 3]));
///
/// pc.swap(0, 2);
///
/// assert_eq!(pc.get(0), Some(&3));
/// assert_eq!(pc.get(0), (*pc).get(0));
/// ```
///
/// The wrapper is move-only, even when `P` is `Copy`:
///
/// ```compile_fail
/// use propagate_const::PropagateConst;
///
/// let mut value = 1;
/// let a = PropagateConst::wrap(&mut value as *mut i32);
/// let b = a;
/// let c = a;
/// ```
///
/// ```compile_fail
/// use propagate_const::PropagateConst;
///
/// let a = PropagateConst::wrap(Box::new(1));
/// let b = Clone::clone(&a);
/// ```
///
/// and a shared borrow never yields a mutable pointer:
///
/// ```compile_fail
/// use propagate_const::PropagateConst;
///
/// fn poke(pc: &PropagateConst<*mut i32>) -> *mut i32 {
///     PropagateConst::get_mut(pc)
/// }
/// ```
///
/// Wrappers over plain addresses (`*mut T`, `*const T`, `NonNull<T>`, `Option<NonNull<T>>`)
/// convert into raw pointers of matching constness. Owning handles stay behind `get`/`get_mut`:
///
/// ```compile_fail
/// use propagate_const::PropagateConst;
///
/// let pc = PropagateConst::wrap(Box::new(1));
/// let raw: *const i32 = (&pc).into();
/// ```
#[repr(transparent)]
pub struct PropagateConst<P>(pub(crate) P);

impl<P> PropagateConst<P> {
    /// Wraps `underlying` as is.
    pub const fn wrap(underlying: P) -> Self {
        Self(underlying)
    }

    /// Returns the wrapped handle.
    ///
    /// Copying a `*mut T` out of the returned reference escapes the constness guarantee, so this
    /// is the explicit way out rather than an observer.
    pub const fn underlying(this: &Self) -> &P {
        &this.0
    }

    /// Returns the wrapped handle mutably, e.g. to reseat it.
    pub fn underlying_mut(this: &mut Self) -> &mut P {
        &mut this.0
    }

    /// Unwraps the handle.
    pub fn into_inner(this: Self) -> P {
        this.0
    }

    /// Swaps the handles of two wrappers. The pointees are not touched.
    pub fn swap(this: &mut Self, other: &mut Self) {
        mem::swap(&mut this.0, &mut other.0)
    }
}

// === Const observers === //

impl<P: PointerLike> PropagateConst<P> {
    /// Acquires a `*const` pointer to the pointee.
    pub fn get(this: &Self) -> *const P::Element {
        this.0.as_ptr()
    }

    /// Returns true if the wrapped handle does not point at anything.
    pub fn is_null(this: &Self) -> bool {
        this.0.is_null()
    }

    /// Returns a shared reference to the pointee.
    ///
    /// # Safety
    ///
    /// The handle must be non-null and its pointee must be valid for reads for the lifetime of
    /// the returned reference, with no live mutable reference to it.
    pub unsafe fn as_ref(this: &Self) -> &P::Element {
        &*Self::get(this)
    }
}

// === Non-const observers === //

impl<P: PointerLikeMut> PropagateConst<P> {
    /// Acquires a `*mut` pointer to the pointee.
    pub fn get_mut(this: &mut Self) -> *mut P::Element {
        this.0.as_mut_ptr()
    }

    /// Returns a unique reference to the pointee.
    ///
    /// # Safety
    ///
    /// The handle must be non-null and its pointee must be valid for reads and writes for the
    /// lifetime of the returned reference, with no other live reference to it.
    pub unsafe fn as_mut(this: &mut Self) -> &mut P::Element {
        &mut *Self::get_mut(this)
    }
}

impl<P: Deref> Deref for PropagateConst<P> {
    type Target = P::Target;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<P: DerefMut> DerefMut for PropagateConst<P> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

// === Nesting === //

impl<P: PointerLike> PointerLike for PropagateConst<P> {
    type Element = P::Element;

    fn as_ptr(&self) -> *const Self::Element {
        Self::get(self)
    }

    fn is_null(&self) -> bool {
        self.0.is_null()
    }
}

impl<P: PointerLikeMut> PointerLikeMut for PropagateConst<P> {
    fn as_mut_ptr(&mut self) -> *mut Self::Element {
        Self::get_mut(self)
    }
}

impl<P: Nullable> Nullable for PropagateConst<P> {
    fn null() -> Self {
        Self(P::null())
    }
}

// === Raw pointer conversions === //

// Only kinds that already are plain addresses convert into one.
macro_rules! impl_raw_conversions {
    ($(impl[$($gen:tt)*] $ptr:ty => $elem:ty;)*) => {$(
        impl<'a, $($gen)*> From<&'a PropagateConst<$ptr>> for *const $elem {
            fn from(pc: &'a PropagateConst<$ptr>) -> Self {
                PropagateConst::get(pc)
            }
        }
    )*};
}

macro_rules! impl_raw_conversions_mut {
    ($(impl[$($gen:tt)*] $ptr:ty => $elem:ty;)*) => {$(
        impl<'a, $($gen)*> From<&'a mut PropagateConst<$ptr>> for *mut $elem {
            fn from(pc: &'a mut PropagateConst<$ptr>) -> Self {
                PropagateConst::get_mut(pc)
            }
        }
    )*};
}

impl_raw_conversions! {
    impl[T: ?Sized] *mut T => T;
    impl[T: ?Sized] *const T => T;
    impl[T: ?Sized] NonNull<T> => T;
    impl[T] Option<NonNull<T>> => T;
}

impl_raw_conversions_mut! {
    impl[T: ?Sized] *mut T => T;
    impl[T: ?Sized] NonNull<T> => T;
    impl[T] Option<NonNull<T>> => T;
}

// === Formatting === //

impl<P: fmt::Debug> fmt::Debug for PropagateConst<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PropagateConst").field(&self.0).finish()
    }
}

impl<P: PointerLike> fmt::Pointer for PropagateConst<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Pointer::fmt(&Self::get(self), f)
    }
}

// === Free functions === //

/// Returns the handle wrapped by `pc`.
pub const fn get_underlying<P>(pc: &PropagateConst<P>) -> &P {
    PropagateConst::underlying(pc)
}

/// Returns the handle wrapped by `pc` mutably.
pub fn get_underlying_mut<P>(pc: &mut PropagateConst<P>) -> &mut P {
    PropagateConst::underlying_mut(pc)
}

/// Swaps the handles of `a` and `b`.
pub fn swap<P>(a: &mut PropagateConst<P>, b: &mut PropagateConst<P>) {
    PropagateConst::swap(a, b)
}
