//! Declarative machine configuration.
//!
//! A configuration names the initial state and maps every state to its
//! outgoing event table. It deserializes from the JSON shape
//!
//! ```json
//! { "initial": "idle",
//!   "states": { "idle": { "transitions": { "start": "running" } },
//!               "running": { "transitions": { "stop": "idle" } } } }
//! ```
//!
//! Every field is optional on the wire. Missing pieces are not rejected here;
//! they surface later as failed operations on the machine.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// Outgoing transitions of a single state.
///
/// `transitions` is `None` when the state declares no table at all, which is
/// distinct from an empty table only on the wire; both reject every event.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateDefinition {
    #[serde(
        default,
        deserialize_with = "transitions_skipping_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub transitions: Option<BTreeMap<String, String>>,
}

impl StateDefinition {
    /// A state with an empty transition table.
    pub fn new() -> Self {
        Self {
            transitions: Some(BTreeMap::new()),
        }
    }

    /// Add an `event -> destination` entry, creating the table if needed.
    pub fn on(mut self, event: impl Into<String>, destination: impl Into<String>) -> Self {
        self.transitions
            .get_or_insert_with(BTreeMap::new)
            .insert(event.into(), destination.into());
        self
    }

    /// Destination for `event`, if this state defines it.
    ///
    /// An empty destination counts as undefined.
    pub fn destination(&self, event: &str) -> Option<&str> {
        self.transitions
            .as_ref()?
            .get(event)
            .map(String::as_str)
            .filter(|to| !to.is_empty())
    }

    /// Events with a usable destination, in sorted order.
    pub fn events(&self) -> impl Iterator<Item = &str> {
        self.transitions
            .iter()
            .flatten()
            .filter(|(_, to)| !to.is_empty())
            .map(|(event, _)| event.as_str())
    }
}

/// State name to definition mapping that remembers declaration order.
///
/// Re-inserting an existing name replaces its definition but keeps its
/// original position.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StateMap {
    entries: Vec<(String, StateDefinition)>,
    index: HashMap<String, usize>,
}

impl StateMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, definition: StateDefinition) {
        let name = name.into();
        match self.index.get(&name) {
            Some(&slot) => self.entries[slot].1 = definition,
            None => {
                self.index.insert(name.clone(), self.entries.len());
                self.entries.push((name, definition));
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&StateDefinition> {
        self.index.get(name).map(|&slot| &self.entries[slot].1)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// State names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StateDefinition)> {
        self.entries.iter().map(|(name, def)| (name.as_str(), def))
    }
}

impl<K: Into<String>> FromIterator<(K, StateDefinition)> for StateMap {
    fn from_iter<I: IntoIterator<Item = (K, StateDefinition)>>(iter: I) -> Self {
        let mut map = StateMap::new();
        for (name, definition) in iter {
            map.insert(name, definition);
        }
        map
    }
}

impl Serialize for StateMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, definition) in &self.entries {
            map.serialize_entry(name, definition)?;
        }
        map.end()
    }
}

struct StateMapVisitor;

impl<'de> Visitor<'de> for StateMapVisitor {
    type Value = StateMap;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of state names to state definitions")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<StateMap, A::Error> {
        let mut map = StateMap::new();
        while let Some((name, definition)) =
            access.next_entry::<String, Option<StateDefinition>>()?
        {
            map.insert(name, definition.unwrap_or_default());
        }
        Ok(map)
    }
}

impl<'de> Deserialize<'de> for StateMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(StateMapVisitor)
    }
}

/// Read an explicit `null` the same as an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Transition table where `null` destinations are dropped.
fn transitions_skipping_null<'de, D>(
    deserializer: D,
) -> Result<Option<BTreeMap<String, String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let table = Option::<BTreeMap<String, Option<String>>>::deserialize(deserializer)?;
    Ok(table.map(|entries| {
        entries
            .into_iter()
            .filter_map(|(event, to)| to.map(|to| (event, to)))
            .collect()
    }))
}

/// Complete machine configuration, immutable once handed to a machine.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineConfig {
    #[serde(default, deserialize_with = "null_as_default")]
    pub initial: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub states: StateMap,
}

impl MachineConfig {
    pub fn new(initial: impl Into<String>, states: StateMap) -> Self {
        Self {
            initial: initial.into(),
            states,
        }
    }

    /// Whether `initial` names a declared state.
    pub fn initial_is_declared(&self) -> bool {
        self.states.contains(&self.initial)
    }
}
