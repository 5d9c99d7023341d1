// Copyright (C) 2025-2026 Daniel Mueller <deso@posteo.net>
// SPDX-License-Identifier: GPL-3.0-or-later

use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result;
use std::slice::Iter;


/// The built-in lifecycle notifications.
///
/// These are the hook methods a component framework invokes at defined
/// points of a component's life. Several mixins (and the object being
/// mixed into) may each implement the same notification, which is why
/// they receive fan-out treatment during composition instead of the
/// collision check applied to ordinary methods.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Lifecycle {
  /// The component is about to be mounted.
  WillMount,
  /// The component has been mounted.
  DidMount,
  /// The component is about to receive new properties.
  WillReceiveProps,
  /// The component is about to update.
  WillUpdate,
  /// The component has updated.
  DidUpdate,
  /// The component is about to be unmounted.
  WillUnmount,
}

impl Lifecycle {
  /// Retrieve all lifecycle notifications, in declared order.
  pub fn all() -> [Lifecycle; 6] {
    [
      Lifecycle::WillMount,
      Lifecycle::DidMount,
      Lifecycle::WillReceiveProps,
      Lifecycle::WillUpdate,
      Lifecycle::DidUpdate,
      Lifecycle::WillUnmount,
    ]
  }

  /// Retrieve the method name of the notification.
  pub fn name(&self) -> &'static str {
    match self {
      Lifecycle::WillMount => "componentWillMount",
      Lifecycle::DidMount => "componentDidMount",
      Lifecycle::WillReceiveProps => "componentWillReceiveProps",
      Lifecycle::WillUpdate => "componentWillUpdate",
      Lifecycle::DidUpdate => "componentDidUpdate",
      Lifecycle::WillUnmount => "componentWillUnmount",
    }
  }
}

impl Display for Lifecycle {
  /// Format the `Lifecycle` into the given formatter.
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    write!(f, "{}", self.name())
  }
}


/// The set of method names receiving fan-out treatment during
/// composition.
///
/// A `HookSet` is explicit configuration of a
/// [`Merger`][crate::Merger]: any vocabulary of hook names can be
/// supplied, making the composition machinery independent of one
/// particular framework's lifecycle naming. Names are processed in the
/// order in which they were given.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct HookSet {
  /// The hook names, in the order given. The first occurrence of a
  /// name wins; later duplicates are dropped.
  names: Vec<String>,
}

impl HookSet {
  /// Create a `HookSet` from the given names.
  pub fn new<I, S>(names: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    let mut set = Self { names: Vec::new() };
    for name in names {
      let name = name.into();
      if !set.contains(&name) {
        set.names.push(name)
      }
    }
    set
  }

  /// Create the `HookSet` covering the built-in [`Lifecycle`]
  /// notifications.
  pub fn lifecycle() -> Self {
    Self::new(Lifecycle::all().into_iter().map(|hook| hook.name()))
  }

  /// Retrieve the number of hook names in the set.
  pub fn len(&self) -> usize {
    self.names.len()
  }

  /// Check whether the set contains no hook names.
  pub fn is_empty(&self) -> bool {
    self.names.is_empty()
  }

  /// Check whether `name` is a recognized hook name.
  pub fn contains(&self, name: &str) -> bool {
    self.names.iter().any(|n| n == name)
  }

  /// Retrieve an iterator over the hook names, in declared order.
  pub fn iter(&self) -> Iter<'_, String> {
    self.names.iter()
  }
}
