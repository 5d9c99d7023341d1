// Copyright (C) 2025-2026 Daniel Mueller <deso@posteo.net>
// SPDX-License-Identifier: GPL-3.0-or-later

use std::fmt::Debug;
use std::fmt::Formatter;
use std::fmt::Result;
use std::rc::Rc;


/// The callable type underlying a [`Method`].
///
/// The first argument is the receiver the method is invoked on (the
/// "this" binding), the second the argument value handed to the
/// invocation.
pub type MethodFn<R, A> = dyn Fn(&mut R, &A);


/// A method as bound in a [`MethodTable`][crate::MethodTable].
///
/// A `Method` is a cheaply clonable handle to a callable taking a
/// mutable receiver and a shared argument value. Return values are
/// deliberately not modeled: when several implementations are fanned
/// out for a lifecycle hook there is no meaningful way to combine
/// them, so all implementations are treated as notifications.
pub struct Method<R, A>(Rc<MethodFn<R, A>>);

impl<R, A> Method<R, A> {
  /// Create a new `Method` wrapping the given callable.
  pub fn new<F>(f: F) -> Self
  where
    F: Fn(&mut R, &A) + 'static,
  {
    Self(Rc::new(f))
  }

  /// Invoke the method on `receiver` with the given arguments.
  pub fn call(&self, receiver: &mut R, args: &A) {
    (self.0)(receiver, args)
  }

  /// Check whether two `Method` objects refer to the same underlying
  /// callable.
  pub fn ptr_eq(&self, other: &Self) -> bool {
    Rc::ptr_eq(&self.0, &other.0)
  }
}

impl<R, A> Clone for Method<R, A> {
  fn clone(&self) -> Self {
    Self(Rc::clone(&self.0))
  }
}

impl<R, A> Debug for Method<R, A> {
  /// Format the `Method` into the given formatter.
  ///
  /// The wrapped callable is opaque, so all we can reasonably emit is
  /// its address.
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    write!(f, "{:p}", self.0)
  }
}
