// Copyright (C) 2025-2026 Daniel Mueller <deso@posteo.net>
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::HookSet;
use crate::MergeError;
use crate::Method;
use crate::MethodTable;


/// A composer of mixin method tables.
///
/// A `Merger` combines an ordered sequence of mixin
/// [`MethodTable`][crate::MethodTable] objects with a base table into
/// a new composed table. Methods whose name is in the merger's
/// [`HookSet`] are fanned out: every contributing implementation ends
/// up behind a single synthesized method that invokes all of them in
/// order. Every other method is bound exactly once; a second binding
/// of the same name is an error.
#[derive(Clone, Debug)]
pub struct Merger {
  /// The method names receiving fan-out treatment.
  hooks: HookSet,
}

impl Merger {
  /// Create a `Merger` recognizing the given hook names.
  pub fn new(hooks: HookSet) -> Self {
    Self { hooks }
  }

  /// Create a `Merger` recognizing the built-in
  /// [`Lifecycle`][crate::Lifecycle] notifications.
  pub fn lifecycle() -> Self {
    Self::new(HookSet::lifecycle())
  }

  /// Retrieve the hook names this merger recognizes.
  pub fn hooks(&self) -> &HookSet {
    &self.hooks
  }

  /// Compose `sources` over `base` into a new [`MethodTable`].
  ///
  /// Neither `base` nor any source is modified.
  ///
  /// For each hook name, the implementations of all sources defining
  /// it are collected in source order. If `base` also defines the
  /// name, its implementation is appended so that it runs last. The
  /// composed table then binds a single method under that name which
  /// invokes every collected implementation, in order, with the same
  /// receiver and arguments, ignoring individual return values. A
  /// panicking implementation unwinds out of the fan-out immediately;
  /// implementations after it do not run. Hook names without any
  /// contributing source keep whatever binding `base` has, if any.
  ///
  /// All non-hook methods are carried over as-is, in source order. If
  /// a name is already bound, whether by `base` or by an earlier
  /// source, composition fails with [`MergeError::DuplicateMethod`].
  pub fn compose<R, A>(
    &self,
    base: &MethodTable<R, A>,
    sources: &[MethodTable<R, A>],
  ) -> Result<MethodTable<R, A>, MergeError>
  where
    R: 'static,
    A: 'static,
  {
    let mut composed = base.clone();

    // Several mixins (and the base itself) may implement the same
    // lifecycle notification. Collect all implementations of each
    // hook name and bind a single method invoking all of them.
    for name in self.hooks.iter() {
      let mut collected = sources
        .iter()
        .filter_map(|source| source.get(name))
        .cloned()
        .collect::<Vec<_>>();

      if collected.is_empty() {
        // No contributor; the name stays untouched.
        continue
      }

      if let Some(existing) = base.get(name) {
        // The pre-existing implementation runs last.
        collected.push(existing.clone())
      }

      let combined = Method::new(move |receiver: &mut R, args: &A| {
        for method in &collected {
          method.call(receiver, args)
        }
      });
      let _prev = composed.insert(name.clone(), combined);
    }

    // Directly assign all remaining methods.
    for source in sources {
      for (name, method) in source.iter() {
        if self.hooks.contains(name) {
          continue
        }

        if composed.contains(name) {
          return Err(MergeError::DuplicateMethod {
            name: name.to_string(),
          })
        }

        let _prev = composed.insert(name, method.clone());
      }
    }

    Ok(composed)
  }

  /// Compose `sources` over `target` and replace `target` with the
  /// result.
  ///
  /// The composed table is applied only on success: a failed merge
  /// leaves `target` untouched.
  pub fn merge<R, A>(
    &self,
    target: &mut MethodTable<R, A>,
    sources: &[MethodTable<R, A>],
  ) -> Result<(), MergeError>
  where
    R: 'static,
    A: 'static,
  {
    *target = self.compose(target, sources)?;
    Ok(())
  }
}
