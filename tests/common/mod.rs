// Copyright (C) 2025-2026 Daniel Mueller <deso@posteo.net>
// SPDX-License-Identifier: GPL-3.0-or-later

use std::cell::RefCell;
use std::rc::Rc;

use mixin::Method;
use mixin::MethodTable;


/// A record of method invocations, shared between recording stubs and
/// the test body.
#[allow(unused)]
pub type Trace = Rc<RefCell<Vec<String>>>;

/// Create a new empty `Trace`.
#[allow(unused)]
pub fn trace() -> Trace {
  Rc::new(RefCell::new(Vec::new()))
}

/// Retrieve the labels recorded so far.
#[allow(unused)]
pub fn recorded(trace: &Trace) -> Vec<String> {
  trace.borrow().clone()
}


/// A minimal stand-in for a component that mixins get merged into.
#[derive(Debug, Default)]
#[allow(unused)]
pub struct Component {
  /// The number of method invocations this component has seen.
  pub invocations: usize,
}

/// The argument value handed to methods in these tests.
#[allow(unused)]
pub type Args = (u64, u64);


/// Create a `Method` that records its invocation under `label` and
/// counts it on the receiving `Component`.
#[allow(unused)]
pub fn recorder(trace: &Trace, label: &str) -> Method<Component, Args> {
  let trace = Rc::clone(trace);
  let label = label.to_string();

  Method::new(move |component: &mut Component, _args: &Args| {
    component.invocations += 1;
    trace.borrow_mut().push(label.clone())
  })
}

/// Create a `MethodTable` binding a recording stub for each given
/// (method name, trace label) pair.
#[allow(unused)]
pub fn recording_table(trace: &Trace, entries: &[(&str, &str)]) -> MethodTable<Component, Args> {
  let mut table = MethodTable::new();
  for (name, label) in entries {
    let _prev = table.insert(*name, recorder(trace, label));
  }
  table
}
