use core::{cmp::Ordering, ptr::NonNull};

#[cfg(feature = "alloc")]
use alloc::{boxed::Box, rc::Rc, sync::Arc};

use crate::{pointer::PointerLike, propagate::PropagateConst};

/// A sentinel compared against wrappers to ask whether their handle is null.
///
/// ```
/// use propagate_const::{Null, PropagateConst};
///
/// let pc = PropagateConst::<*mut u8>::null();
///
/// assert!(pc == Null);
/// assert!(Null == pc);
/// ```
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Null;

impl<P: PointerLike> PartialEq<Null> for PropagateConst<P> {
    fn eq(&self, _: &Null) -> bool {
        self.0.is_null()
    }
}

impl<P: PointerLike> PartialEq<PropagateConst<P>> for Null {
    fn eq(&self, pc: &PropagateConst<P>) -> bool {
        pc.0.is_null()
    }
}

// === Wrapper against wrapper === //

// Each method calls the same method on the handles exactly once. Pointees are never compared.

impl<P, Q> PartialEq<PropagateConst<Q>> for PropagateConst<P>
where
    P: PartialEq<Q>,
{
    fn eq(&self, other: &PropagateConst<Q>) -> bool {
        self.0.eq(&other.0)
    }

    #[allow(clippy::partialeq_ne_impl)]
    fn ne(&self, other: &PropagateConst<Q>) -> bool {
        self.0.ne(&other.0)
    }
}

impl<P: Eq> Eq for PropagateConst<P> {}

impl<P, Q> PartialOrd<PropagateConst<Q>> for PropagateConst<P>
where
    P: PartialOrd<Q>,
{
    fn partial_cmp(&self, other: &PropagateConst<Q>) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }

    fn lt(&self, other: &PropagateConst<Q>) -> bool {
        self.0.lt(&other.0)
    }

    fn le(&self, other: &PropagateConst<Q>) -> bool {
        self.0.le(&other.0)
    }

    fn gt(&self, other: &PropagateConst<Q>) -> bool {
        self.0.gt(&other.0)
    }

    fn ge(&self, other: &PropagateConst<Q>) -> bool {
        self.0.ge(&other.0)
    }
}

impl<P: Ord> Ord for PropagateConst<P> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

// === Wrapper against bare handle === //

/// Implements `==`, `!=`, `<`, `>`, `<=` and `>=` between `PropagateConst<T>` and a bare `T`,
/// in both operand orders.
///
/// A blanket impl over every right-hand side would collide with the wrapper-against-wrapper
/// impls, so each handle type opts in. Raw pointers, `NonNull`, references and the `alloc`
/// handles already do; a custom handle with its own comparison operators is registered like
/// this:
///
/// ```
/// use propagate_const::{propagate_const_cmp, PropagateConst};
///
/// #[derive(PartialEq, PartialOrd)]
/// struct Slot(u32);
///
/// propagate_const_cmp! {
///     impl[] Slot;
/// }
///
/// let pc = PropagateConst::wrap(Slot(2));
///
/// assert!(pc == Slot(2));
/// assert!(Slot(1) < pc);
/// ```
///
/// Every comparison is the handle's own operator, so for wide pointers the metadata (slice
/// length, vtable) takes part exactly as it does between two bare pointers.
///
/// `@lhs [generics] P, U, [where clauses]` and `@rhs ...` generate a single operand order for a
/// handle `P` compared against a `U`, e.g. for fundamental handles such as `Box<T>` where the
/// bare-handle-first order would be an orphan impl.
#[macro_export]
macro_rules! propagate_const_cmp {
    (@lhs [$($gen:tt)*] $p:ty, $u:ty, [$($clause:tt)*]) => {
        #[allow(unknown_lints, ambiguous_wide_pointer_comparisons)]
        impl<$($gen)*> ::core::cmp::PartialEq<$u> for $crate::PropagateConst<$p>
        where
            $p: ::core::cmp::PartialEq<$u>,
            $($clause)*
        {
            fn eq(&self, other: &$u) -> bool {
                ::core::cmp::PartialEq::eq($crate::PropagateConst::underlying(self), other)
            }

            #[allow(clippy::partialeq_ne_impl)]
            fn ne(&self, other: &$u) -> bool {
                ::core::cmp::PartialEq::ne($crate::PropagateConst::underlying(self), other)
            }
        }

        #[allow(unknown_lints, ambiguous_wide_pointer_comparisons)]
        impl<$($gen)*> ::core::cmp::PartialOrd<$u> for $crate::PropagateConst<$p>
        where
            $p: ::core::cmp::PartialOrd<$u>,
            $($clause)*
        {
            fn partial_cmp(&self, other: &$u) -> ::core::option::Option<::core::cmp::Ordering> {
                ::core::cmp::PartialOrd::partial_cmp($crate::PropagateConst::underlying(self), other)
            }

            fn lt(&self, other: &$u) -> bool {
                ::core::cmp::PartialOrd::lt($crate::PropagateConst::underlying(self), other)
            }

            fn le(&self, other: &$u) -> bool {
                ::core::cmp::PartialOrd::le($crate::PropagateConst::underlying(self), other)
            }

            fn gt(&self, other: &$u) -> bool {
                ::core::cmp::PartialOrd::gt($crate::PropagateConst::underlying(self), other)
            }

            fn ge(&self, other: &$u) -> bool {
                ::core::cmp::PartialOrd::ge($crate::PropagateConst::underlying(self), other)
            }
        }
    };

    (@rhs [$($gen:tt)*] $p:ty, $u:ty, [$($clause:tt)*]) => {
        #[allow(unknown_lints, ambiguous_wide_pointer_comparisons)]
        impl<$($gen)*> ::core::cmp::PartialEq<$crate::PropagateConst<$p>> for $u
        where
            $u: ::core::cmp::PartialEq<$p>,
            $($clause)*
        {
            fn eq(&self, other: &$crate::PropagateConst<$p>) -> bool {
                ::core::cmp::PartialEq::eq(self, $crate::PropagateConst::underlying(other))
            }

            #[allow(clippy::partialeq_ne_impl)]
            fn ne(&self, other: &$crate::PropagateConst<$p>) -> bool {
                ::core::cmp::PartialEq::ne(self, $crate::PropagateConst::underlying(other))
            }
        }

        #[allow(unknown_lints, ambiguous_wide_pointer_comparisons)]
        impl<$($gen)*> ::core::cmp::PartialOrd<$crate::PropagateConst<$p>> for $u
        where
            $u: ::core::cmp::PartialOrd<$p>,
            $($clause)*
        {
            fn partial_cmp(
                &self,
                other: &$crate::PropagateConst<$p>,
            ) -> ::core::option::Option<::core::cmp::Ordering> {
                ::core::cmp::PartialOrd::partial_cmp(self, $crate::PropagateConst::underlying(other))
            }

            fn lt(&self, other: &$crate::PropagateConst<$p>) -> bool {
                ::core::cmp::PartialOrd::lt(self, $crate::PropagateConst::underlying(other))
            }

            fn le(&self, other: &$crate::PropagateConst<$p>) -> bool {
                ::core::cmp::PartialOrd::le(self, $crate::PropagateConst::underlying(other))
            }

            fn gt(&self, other: &$crate::PropagateConst<$p>) -> bool {
                ::core::cmp::PartialOrd::gt(self, $crate::PropagateConst::underlying(other))
            }

            fn ge(&self, other: &$crate::PropagateConst<$p>) -> bool {
                ::core::cmp::PartialOrd::ge(self, $crate::PropagateConst::underlying(other))
            }
        }
    };

    ($(impl[$($gen:tt)*] $ty:ty $(where { $($clause:tt)* })?;)*) => {$(
        $crate::propagate_const_cmp!(@lhs [$($gen)*] $ty, $ty, [$($($clause)*)?]);
        $crate::propagate_const_cmp!(@rhs [$($gen)*] $ty, $ty, [$($($clause)*)?]);
    )*};
}

propagate_const_cmp! {
    impl[T: ?Sized] *mut T;
    impl[T: ?Sized] *const T;
    impl[T: ?Sized] NonNull<T>;
    impl[T: ?Sized] Option<NonNull<T>>;
}

#[cfg(feature = "alloc")]
propagate_const_cmp! {
    impl[T: ?Sized] Option<Box<T>>;
    impl[T: ?Sized] Rc<T>;
    impl[T: ?Sized] Arc<T>;
}

// References and `Box` are fundamental, so only the wrapper-first order is coherent.
propagate_const_cmp!(@lhs ['a, T: ?Sized] &'a T, &'a T, []);
propagate_const_cmp!(@lhs ['a, T: ?Sized] &'a mut T, &'a mut T, []);

#[cfg(feature = "alloc")]
propagate_const_cmp!(@lhs [T: ?Sized] Box<T>, Box<T>, []);

// `*mut T` and `*const T` have no operators between them; both sides meet at `*const T`.
macro_rules! impl_raw_cross_cmp {
    ($($lhs:ty => $rhs:ty;)*) => {$(
        #[allow(unknown_lints, ambiguous_wide_pointer_comparisons)]
        impl<T: ?Sized> PartialEq<$rhs> for $lhs {
            fn eq(&self, other: &$rhs) -> bool {
                PointerLike::as_ptr(self) == PointerLike::as_ptr(other)
            }
        }

        #[allow(unknown_lints, ambiguous_wide_pointer_comparisons)]
        impl<T: ?Sized> PartialOrd<$rhs> for $lhs {
            fn partial_cmp(&self, other: &$rhs) -> Option<Ordering> {
                PointerLike::as_ptr(self).partial_cmp(&PointerLike::as_ptr(other))
            }
        }
    )*};
}

impl_raw_cross_cmp! {
    PropagateConst<*mut T> => *const T;
    PropagateConst<*const T> => *mut T;
    *const T => PropagateConst<*mut T>;
    *mut T => PropagateConst<*const T>;
}
