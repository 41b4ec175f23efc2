//! Layered lookup over a child mapping and its ancestors.

use ahash::RandomState;
use getset::Getters;
use indexmap::{Equivalent, IndexMap};
use log::trace;
use std::{fmt::Debug, hash::Hash, ops::Index};

pub type Layer<K, V> = IndexMap<K, V, RandomState>;

/// Mappings in priority order: the child first, then parents, then ancestors.
///
/// Lookups return the value of the first layer containing the key.
/// Writes only ever touch the child layer.
///
/// ```
/// use collectionish::AncestorChainMap;
///
/// let mut chain = AncestorChainMap::new([("b", 3), ("c", 4)]);
/// chain.add_parent([("a", 1), ("b", 2)]);
/// chain.add_ancestor([("a", 9), ("d", 5)]);
///
/// assert_eq!(chain[&"a"], 1);
/// assert_eq!(chain[&"b"], 3);
/// assert_eq!(chain.len(), 4);
/// ```
#[derive(Getters, Debug, Clone)]
#[getset(get = "pub")]
pub struct AncestorChainMap<K, V> {
    /// Never empty.
    layers: Vec<Layer<K, V>>,
}

impl<K: Hash + Eq, V> AncestorChainMap<K, V> {
    pub fn new(child: impl IntoIterator<Item = (K, V)>) -> Self {
        Self {
            layers: vec![child.into_iter().collect()],
        }
    }

    /// First layer is the child. No layers gives an empty child.
    pub fn from_layers<L: IntoIterator<Item = (K, V)>>(layers: impl IntoIterator<Item = L>) -> Self {
        let mut layers = layers
            .into_iter()
            .map(|layer| layer.into_iter().collect())
            .collect::<Vec<Layer<K, V>>>();
        if layers.is_empty() {
            layers.push(Layer::default());
        }
        Self { layers }
    }

    /// Inserts `mapping` right after the child, ahead of existing parents.
    pub fn add_parent(&mut self, mapping: impl IntoIterator<Item = (K, V)>) {
        let layer = mapping.into_iter().collect::<Layer<K, V>>();
        trace!("Adding parent layer of {} keys", layer.len());
        self.layers.insert(1, layer);
    }

    /// Appends `mapping` as the lowest priority layer.
    pub fn add_ancestor(&mut self, mapping: impl IntoIterator<Item = (K, V)>) {
        let layer = mapping.into_iter().collect::<Layer<K, V>>();
        trace!(
            "Adding ancestor layer of {} keys at depth {}",
            layer.len(),
            self.layers.len()
        );
        self.layers.push(layer);
    }

    pub fn get<Q: ?Sized + Hash + Equivalent<K>>(&self, key: &Q) -> Option<&V> {
        self.layers.iter().find_map(|layer| layer.get(key))
    }

    pub fn contains_key<Q: ?Sized + Hash + Equivalent<K>>(&self, key: &Q) -> bool {
        self.layers.iter().any(|layer| layer.contains_key(key))
    }

    /// Effective entries, child first, each key once in order of first appearance.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.layers.iter().enumerate().flat_map(move |(depth, layer)| {
            layer
                .iter()
                .filter(move |(key, _)| !self.layers[..depth].iter().any(|l| l.contains_key(*key)))
        })
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.iter().map(|(key, _)| key)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.iter().map(|(_, value)| value)
    }

    /// Number of distinct keys across all layers.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.iter().all(|layer| layer.is_empty())
    }

    /// Writes to the child, shadowing ancestors.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.child_mut().insert(key, value)
    }

    /// Removes from the child only, an ancestor value may show through afterwards.
    pub fn remove<Q: ?Sized + Hash + Equivalent<K>>(&mut self, key: &Q) -> Option<V> {
        self.child_mut().shift_remove(key)
    }

    pub fn child(&self) -> &Layer<K, V> {
        &self.layers[0]
    }

    fn child_mut(&mut self) -> &mut Layer<K, V> {
        &mut self.layers[0]
    }
}

impl<K: Hash + Eq + Clone, V: Clone> AncestorChainMap<K, V> {
    /// New chain with `child` in front of all current layers.
    pub fn new_child(&self, child: impl IntoIterator<Item = (K, V)>) -> Self {
        let mut layers = Vec::with_capacity(self.layers.len() + 1);
        layers.push(child.into_iter().collect());
        layers.extend(self.layers.iter().cloned());
        Self { layers }
    }

    /// Chain of every layer except the child.
    pub fn parents(&self) -> Self {
        Self::from_layers(self.layers[1..].iter().cloned())
    }

    /// Effective entries as one flat mapping.
    pub fn to_map(&self) -> Layer<K, V> {
        self.iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }
}

impl<K, V> Default for AncestorChainMap<K, V> {
    fn default() -> Self {
        Self {
            layers: vec![Layer::default()],
        }
    }
}

/// Equal when the effective mappings are equal, regardless of layering.
impl<K: Hash + Eq, V: PartialEq> PartialEq for AncestorChainMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(key, value)| other.get(key).map_or(false, |v| v == value))
    }
}

impl<K, V, Q> Index<&Q> for AncestorChainMap<K, V>
where
    K: Hash + Eq,
    Q: ?Sized + Hash + Equivalent<K> + Debug,
{
    type Output = V;

    /// Panics if no layer holds the key.
    fn index(&self, key: &Q) -> &V {
        match self.get(key) {
            Some(value) => value,
            None => panic!("Key {:?} not found in any layer", key),
        }
    }
}

impl<K: Hash + Eq, V> FromIterator<(K, V)> for AncestorChainMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{thread_rng, Rng};
    use std::collections::HashMap;

    fn family() -> AncestorChainMap<&'static str, i32> {
        let mut chain = AncestorChainMap::new([("b", 3), ("c", 4)]);
        chain.add_parent([("a", 1), ("b", 2)]);
        chain.add_ancestor([("a", 9), ("d", 5)]);
        chain
    }

    #[test]
    fn chained_lookup() {
        let chain = family();
        let expected = [("a", 1), ("b", 3), ("c", 4), ("d", 5)]
            .into_iter()
            .collect::<Layer<_, _>>();

        assert_eq!(chain.to_map(), expected);
        assert_eq!(chain.get("d"), Some(&5));
        assert_eq!(chain.get("e"), None);
        assert!(chain.contains_key("a"));
        assert_eq!(chain.len(), 4);
    }

    #[test]
    fn iteration_is_child_first() {
        let chain = family();
        assert_eq!(chain.keys().copied().collect::<Vec<_>>(), ["b", "c", "a", "d"]);
        assert_eq!(chain.values().copied().collect::<Vec<_>>(), [3, 4, 1, 5]);
    }

    #[test]
    fn parents_go_before_ancestors() {
        let mut chain = family();
        chain.add_parent([("d", 7)]);
        assert_eq!(chain[&"d"], 7);
        assert_eq!(chain.layers().len(), 4);
        assert_eq!(chain.layers()[1].get("d"), Some(&7));
    }

    #[test]
    fn parent_of_lone_child() {
        let mut chain = AncestorChainMap::new([("a", 1)]);
        chain.add_parent([("b", 2)]);
        assert_eq!(chain.layers().len(), 2);
        assert_eq!(chain.child().len(), 1);
    }

    #[test]
    fn writes_touch_child() {
        let mut chain = family();
        assert_eq!(chain.insert("a", 0), None);
        assert_eq!(chain[&"a"], 0);
        assert_eq!(chain.layers()[1].get("a"), Some(&1));

        assert_eq!(chain.remove("a"), Some(0));
        assert_eq!(chain[&"a"], 1);
        assert_eq!(chain.remove("d"), None);
        assert_eq!(chain[&"d"], 5);
    }

    #[test]
    fn derived_chains() {
        let chain = family();
        let child = chain.new_child([("c", 0)]);
        assert_eq!(child[&"c"], 0);
        assert_eq!(chain[&"c"], 4);

        let parents = chain.parents();
        assert_eq!(parents[&"b"], 2);
        assert!(!parents.contains_key("c"));
        assert!(AncestorChainMap::new([("a", 1)]).parents().is_empty());
    }

    #[test]
    fn equality_ignores_layering() {
        let flat = AncestorChainMap::new([("a", 1), ("b", 3), ("c", 4), ("d", 5)]);
        assert_eq!(family(), flat);
        assert_ne!(family(), AncestorChainMap::new([("a", 1)]));
    }

    #[test]
    #[should_panic]
    fn index_missing() {
        let _missing = family()[&"z"];
    }

    #[test]
    fn chain_doppelganger() {
        let mut rand = thread_rng();
        for _ in 0..100 {
            let layers = (0..rand.gen_range(1..6))
                .map(|_| {
                    (0..rand.gen_range(0..10))
                        .map(|_| (rand.gen_range(0..15u32), rand.gen::<i32>()))
                        .collect::<Vec<_>>()
                })
                .collect::<Vec<_>>();

            let chain = AncestorChainMap::from_layers(layers.clone());

            let mut model = HashMap::new();
            for layer in layers.iter().rev() {
                let layer = layer.iter().copied().collect::<HashMap<_, _>>();
                model.extend(layer);
            }

            assert_eq!(chain.len(), model.len());
            for (key, value) in &model {
                assert_eq!(chain.get(key), Some(value));
            }
        }
    }
}
