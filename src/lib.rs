#![no_std]

//! A pointer wrapper that makes its owner's constness apply to the pointee.
//!
//! A struct holding a `*mut T` or `NonNull<T>` can mutate the pointee from `&self`. Wrapping the
//! field in [`PropagateConst`] closes that gap: `&self` only reaches a `*const T`, while
//! `&mut self` reaches a `*mut T`, the same way a directly held field behaves.
//!
//! # Example
//! ```
//! use core::ptr::NonNull;
//! use propagate_const::PropagateConst;
//!
//! struct Cursor {
//!     target: PropagateConst<NonNull<u32>>,
//! }
//!
//! impl Cursor {
//!     fn read(&self) -> u32 {
//!         unsafe { *PropagateConst::as_ref(&self.target) }
//!     }
//!
//!     fn write(&mut self, value: u32) {
//!         unsafe { *PropagateConst::as_mut(&mut self.target) = value }
//!     }
//! }
//!
//! let mut value = 1;
//! let mut cursor = Cursor {
//!     target: PropagateConst::new(&mut value),
//! };
//!
//! cursor.write(42);
//!
//! assert_eq!(cursor.read(), 42);
//! ```
//!
//! Owning handles such as `Box` dereference safely. The wrapper's own operations are associated
//! functions, so method calls go straight to the pointee:
//!
//! ```
//! use propagate_const::PropagateConst;
//!
//! let mut pc = PropagateConst::wrap(Box::new(vec![1, 2]));
//! pc.push(3);
//!
//! assert_eq!(pc.len(), 3);
//! ```

#[cfg(feature = "alloc")]
extern crate alloc;

mod cmp;
mod convert;
mod hash;
mod pointer;
mod propagate;

pub use cmp::Null;
pub use pointer::{ElementOf, Nullable, PointerLike, PointerLikeMut};
pub use propagate::{get_underlying, get_underlying_mut, swap, PropagateConst};
