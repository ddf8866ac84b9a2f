use core::{convert::TryFrom, mem, ptr::NonNull};

#[cfg(feature = "alloc")]
use alloc::{boxed::Box, rc::Rc, sync::Arc};

use crate::{pointer::Nullable, propagate::PropagateConst};

// === Construction === //

impl<P> PropagateConst<P> {
    /// Wraps anything that converts into `P` without ceremony.
    pub fn new<U: Into<P>>(underlying: U) -> Self {
        Self(underlying.into())
    }

    /// Wraps a value that only converts into `P` by acknowledging a possible failure.
    pub fn try_new<U>(underlying: U) -> Result<Self, P::Error>
    where
        P: TryFrom<U>,
    {
        P::try_from(underlying).map(Self)
    }

    /// Re-wraps the handle of `pu` as a `P`.
    ///
    /// Available whenever `U: Into<P>`:
    ///
    /// ```
    /// use core::ptr::NonNull;
    /// use propagate_const::PropagateConst;
    ///
    /// let mut value = 3;
    /// let pc = PropagateConst::wrap(NonNull::from(&mut value));
    /// let pc = PropagateConst::<Option<NonNull<i32>>>::from_propagated(pc);
    ///
    /// assert!(!PropagateConst::is_null(&pc));
    /// ```
    ///
    /// Pairs that don't convert implicitly are rejected at compile time:
    ///
    /// ```compile_fail
    /// use core::ptr::NonNull;
    /// use propagate_const::PropagateConst;
    ///
    /// let pc = PropagateConst::wrap(core::ptr::null_mut::<i32>());
    /// let pc = PropagateConst::<NonNull<i32>>::from_propagated(pc);
    /// ```
    pub fn from_propagated<U: Into<P>>(pu: PropagateConst<U>) -> Self {
        Self(pu.0.into())
    }

    /// Re-wraps the handle of `pu` through `P`'s fallible conversion.
    ///
    /// ```
    /// use propagate_const::PropagateConst;
    ///
    /// let pc = PropagateConst::wrap(vec![1u8, 2, 3].into_boxed_slice());
    /// let pc = PropagateConst::<Box<[u8; 3]>>::try_from_propagated(pc).unwrap();
    ///
    /// assert_eq!(*pc, [1, 2, 3]);
    /// ```
    pub fn try_from_propagated<U>(pu: PropagateConst<U>) -> Result<Self, P::Error>
    where
        P: TryFrom<U>,
    {
        P::try_from(pu.0).map(Self)
    }

    /// Converts the handle with `f`, e.g. for unsizing coercions that have no `From` impl.
    ///
    /// ```
    /// use core::fmt::Debug;
    /// use propagate_const::PropagateConst;
    ///
    /// let pc = PropagateConst::wrap(Box::new(4));
    /// let pc = PropagateConst::map_underlying(pc, |b| b as Box<dyn Debug>);
    ///
    /// assert_eq!(format!("{:?}", pc), "PropagateConst(4)");
    /// ```
    pub fn map_underlying<Q, F>(this: Self, f: F) -> PropagateConst<Q>
    where
        F: FnOnce(P) -> Q,
    {
        PropagateConst(f(this.0))
    }
}

impl<P: Nullable> PropagateConst<P> {
    /// Creates a wrapper whose handle points at nothing.
    pub fn null() -> Self {
        Self(P::null())
    }
}

impl<P: Default> Default for PropagateConst<P> {
    fn default() -> Self {
        Self(P::default())
    }
}

impl<P> From<P> for PropagateConst<P> {
    fn from(underlying: P) -> Self {
        Self(underlying)
    }
}

// === Assignment === //

impl<P> PropagateConst<P> {
    /// Reseats the handle, dropping the previous one.
    pub fn set<U: Into<P>>(this: &mut Self, underlying: U) {
        this.0 = underlying.into();
    }

    /// Reseats the handle, returning the previous one.
    pub fn replace<U: Into<P>>(this: &mut Self, underlying: U) -> P {
        mem::replace(&mut this.0, underlying.into())
    }

    /// Moves the handle of `pu` into `self`.
    pub fn assign_propagated<U: Into<P>>(this: &mut Self, pu: PropagateConst<U>) {
        this.0 = pu.0.into();
    }
}

impl<P: Default> PropagateConst<P> {
    /// Takes the handle, leaving `P::default()` in its place.
    pub fn take(this: &mut Self) -> P {
        mem::take(&mut this.0)
    }
}

// === Wrapper conversions === //

// Mirrors the `From` impls std offers between the underlying kinds.
macro_rules! impl_propagated_from {
    ($(impl[$($gen:tt)*] $from:ty => $to:ty;)*) => {$(
        impl<$($gen)*> From<PropagateConst<$from>> for PropagateConst<$to> {
            fn from(pu: PropagateConst<$from>) -> Self {
                Self::from_propagated(pu)
            }
        }
    )*};
}

impl_propagated_from! {
    impl['a, T: ?Sized] &'a mut T => NonNull<T>;
    impl[T: ?Sized] NonNull<T> => Option<NonNull<T>>;
}

#[cfg(feature = "alloc")]
impl_propagated_from! {
    impl[T: ?Sized] Box<T> => Option<Box<T>>;
    impl[T: ?Sized] Box<T> => Rc<T>;
    impl[T: ?Sized] Box<T> => Arc<T>;
}
