// Copyright (C) 2025-2026 Daniel Mueller <deso@posteo.net>
// SPDX-License-Identifier: GPL-3.0-or-later

use thiserror::Error;


/// Errors that can occur while composing method tables.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum MergeError {
  /// A non-hook method name was about to be bound a second time.
  ///
  /// Non-hook methods cannot be combined: we know neither the intent
  /// nor the return value of the conflicting implementations. The
  /// mixin set has to be fixed; this error is not meant to be handled
  /// at runtime.
  #[error("target already has a method named `{name}`")]
  DuplicateMethod {
    /// The name of the method that was about to be bound twice.
    name: String,
  },
}
