// Copyright (C) 2025-2026 Daniel Mueller <deso@posteo.net>
// SPDX-License-Identifier: GPL-3.0-or-later

#![warn(
  future_incompatible,
  missing_copy_implementations,
  missing_debug_implementations,
  missing_docs,
  rust_2018_compatibility,
  rust_2018_idioms,
  trivial_numeric_casts,
  unreachable_pub,
  unstable_features,
  unused_import_braces,
  unused_qualifications,
  unused_results,
)]

//! A crate for composing mixin method tables onto a target method
//! table. A configurable set of lifecycle hook names receives fan-out
//! treatment: all implementations of such a hook are combined into a
//! single method invoking every one of them in order. All other
//! methods are bound exactly once, with name collisions reported as
//! errors.

mod error;
mod hooks;
mod merger;
mod method;
mod table;

pub use self::error::MergeError;
pub use self::hooks::HookSet;
pub use self::hooks::Lifecycle;
pub use self::merger::Merger;
pub use self::method::Method;
pub use self::method::MethodFn;
pub use self::table::MethodTable;
