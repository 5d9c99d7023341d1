// Copyright (C) 2025-2026 Daniel Mueller <deso@posteo.net>
// SPDX-License-Identifier: GPL-3.0-or-later

use std::fmt::Debug;
use std::fmt::Formatter;
use std::fmt::Result;
use std::mem::replace;

use crate::Method;


/// An insertion ordered mapping from method name to [`Method`].
///
/// A `MethodTable` describes the behavior surface of a mixin or of the
/// object being mixed into. Iteration visits entries in the order in
/// which names were first bound. That order is significant: when a
/// table acts as a mixin source, its methods are assigned to the
/// composed result in exactly this order, which in turn determines
/// which binding a name collision gets reported for.
pub struct MethodTable<R, A> {
  /// The methods, in first-binding order.
  // Lookup is linear. Tables hold the handful of methods a mixin
  // defines, so a map would not buy us anything here.
  methods: Vec<(String, Method<R, A>)>,
}

impl<R, A> MethodTable<R, A> {
  /// Create an empty `MethodTable`.
  pub fn new() -> Self {
    Self {
      methods: Vec::new(),
    }
  }

  /// Retrieve the number of methods in the table.
  pub fn len(&self) -> usize {
    self.methods.len()
  }

  /// Check whether the table contains no methods.
  pub fn is_empty(&self) -> bool {
    self.methods.is_empty()
  }

  /// Check whether a method is bound under `name`.
  pub fn contains(&self, name: &str) -> bool {
    self.methods.iter().any(|(n, _)| n == name)
  }

  /// Look up the method bound under `name`.
  pub fn get(&self, name: &str) -> Option<&Method<R, A>> {
    self
      .methods
      .iter()
      .find(|(n, _)| n == name)
      .map(|(_, method)| method)
  }

  /// Bind `method` under `name`, returning the previous binding, if
  /// any.
  ///
  /// Rebinding an already present name keeps the name's original
  /// position in iteration order.
  pub fn insert<N>(&mut self, name: N, method: Method<R, A>) -> Option<Method<R, A>>
  where
    N: Into<String>,
  {
    let name = name.into();
    match self.methods.iter_mut().find(|(n, _)| *n == name) {
      Some((_, slot)) => Some(replace(slot, method)),
      None => {
        self.methods.push((name, method));
        None
      },
    }
  }

  /// Remove the method bound under `name`, returning it, if any.
  pub fn remove(&mut self, name: &str) -> Option<Method<R, A>> {
    let idx = self.methods.iter().position(|(n, _)| n == name)?;
    Some(self.methods.remove(idx).1)
  }

  /// Invoke the method bound under `name`, if any.
  ///
  /// Returns whether a method was actually invoked. This is the entry
  /// point for frameworks triggering lifecycle notifications on a
  /// composed table.
  pub fn invoke(&self, name: &str, receiver: &mut R, args: &A) -> bool {
    match self.get(name) {
      Some(method) => {
        method.call(receiver, args);
        true
      },
      None => false,
    }
  }

  /// Retrieve an iterator over the (name, method) pairs, in
  /// first-binding order.
  pub fn iter(&self) -> impl Iterator<Item = (&str, &Method<R, A>)> {
    self
      .methods
      .iter()
      .map(|(name, method)| (name.as_str(), method))
  }

  /// Bind the given callable under `name`, in builder style.
  pub fn with<N, F>(mut self, name: N, f: F) -> Self
  where
    N: Into<String>,
    F: Fn(&mut R, &A) + 'static,
  {
    let _prev = self.insert(name, Method::new(f));
    self
  }
}

impl<R, A> Default for MethodTable<R, A> {
  fn default() -> Self {
    Self::new()
  }
}

impl<R, A> Clone for MethodTable<R, A> {
  fn clone(&self) -> Self {
    Self {
      methods: self.methods.clone(),
    }
  }
}

impl<R, A> Debug for MethodTable<R, A> {
  /// Format the `MethodTable` into the given formatter.
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    f.debug_map()
      .entries(self.methods.iter().map(|(n, m)| (n, m)))
      .finish()
  }
}
