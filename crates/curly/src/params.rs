//! Named-parameter sources.
//!
//! Named placeholders (`{identifier}`) resolve through a [`ParamSource`].
//! Two families of sources exist: maps (any `HashMap`/`BTreeMap` of
//! [`Value`]s, including the [`NamedParams`] alias built by
//! [`params!`](crate::params!)) and structs via `#[derive(Params)]`.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use rustc_hash::FxHashMap;

use crate::value::Value;

/// Map type for ad-hoc named parameters.
///
/// Built conveniently by [`params!`](crate::params!).
pub type NamedParams = FxHashMap<String, Value>;

/// A source of named parameter values.
///
/// The engine queries the source once per named placeholder; `None` fails
/// the call with [`ParameterNotFound`](crate::FormatError::ParameterNotFound).
///
/// Sources must be stable for the duration of a formatting call. Sharing a
/// source across threads is safe exactly when the source itself is; the
/// engine adds no synchronization of its own.
pub trait ParamSource {
    /// Look up a parameter by name.
    fn get(&self, name: &str) -> Option<Value>;
}

impl<S: BuildHasher> ParamSource for HashMap<String, Value, S> {
    fn get(&self, name: &str) -> Option<Value> {
        HashMap::get(self, name).cloned()
    }
}

impl<S: BuildHasher> ParamSource for HashMap<&str, Value, S> {
    fn get(&self, name: &str) -> Option<Value> {
        HashMap::get(self, name).cloned()
    }
}

impl ParamSource for BTreeMap<String, Value> {
    fn get(&self, name: &str) -> Option<Value> {
        BTreeMap::get(self, name).cloned()
    }
}

impl ParamSource for BTreeMap<&str, Value> {
    fn get(&self, name: &str) -> Option<Value> {
        BTreeMap::get(self, name).cloned()
    }
}
