//! The HashMap

use super::root::{borrow, fmt, hash, iter, mem, ops};

use super::Config;
use super::entry::Entry;
use super::failure::{Failure, Result};
use super::hashcore::HashHooks;
use super::hashcore::capacity::{Capacity, MaxLoadFactor, SlotIndex, DEFAULT_CAPACITY};
use super::hashcore::slots::{Location, SlotArray};
use super::hashcore::slots_api::{ElementIntoIterator, ElementIterator, ElementIteratorMut};
use super::iterator::{
    KeyIterator, KeyValueIntoIterator, KeyValueIterator, KeyValueIteratorMut, ValueIterator,
    ValueIteratorMut,
};

#[cfg(feature = "with-std")]
use super::hashcore::DefaultHashHooks;

//
//  Public Interface
//

/// `HashMap`
///
/// An open addressing hash map, with linear probing.
#[cfg(not(feature = "with-std"))]
#[derive(Clone)]
pub struct HashMap<K, V, H: HashHooks> {
    hooks: H,
    max_load_factor: MaxLoadFactor,
    slots: SlotArray<Entry<K, V>>,
}

/// `HashMap`
///
/// An open addressing hash map, with linear probing.
#[cfg(feature = "with-std")]
#[derive(Clone)]
pub struct HashMap<K, V, H: HashHooks = DefaultHashHooks> {
    //  Hooks of the HashMap.
    hooks: H,
    //  The load factor which the number of elements stays strictly below.
    max_load_factor: MaxLoadFactor,
    //  The elements, and their accounting.
    slots: SlotArray<Entry<K, V>>,
}

impl<K, V, H: HashHooks + Default> HashMap<K, V, H> {
    /// Creates a new instance of the `HashMap` with a capacity of 16, and a
    /// maximum load factor of 0.75.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use lineprobe::hashmap::HashMap;
    /// let map: HashMap<i32, i32> = HashMap::new();
    ///
    /// assert_eq!(0, map.len());
    /// assert_eq!(16, map.capacity());
    /// assert_eq!(0.75, map.max_load_factor());
    /// ```
    pub fn new() -> Self { Self::with_hooks(H::default()) }

    /// Creates a new instance of the `HashMap` with a capacity of `capacity`,
    /// and a maximum load factor of 0.75.
    ///
    /// If `capacity` is 0, it is rounded up to 1.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use lineprobe::hashmap::HashMap;
    /// let map: HashMap<i32, i32> = HashMap::with_capacity(4);
    /// assert_eq!(4, map.capacity());
    ///
    /// let map: HashMap<i32, i32> = HashMap::with_capacity(0);
    /// assert_eq!(1, map.capacity());
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hooks(capacity, H::default())
    }

    /// Creates a new instance of the `HashMap` according to `config`.
    ///
    /// #   Errors
    ///
    /// Returns an error if `config` is invalid.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use lineprobe::hashmap::{Config, HashMap};
    /// let config = Config::default().with_initial_capacity(4).with_max_load_factor(0.5);
    /// let map: HashMap<i32, i32> = HashMap::try_with_config(config).unwrap();
    ///
    /// assert_eq!(4, map.capacity());
    /// assert_eq!(0.5, map.max_load_factor());
    ///
    /// let config = Config::default().with_initial_capacity(0);
    /// assert!(HashMap::<i32, i32>::try_with_config(config).is_err());
    /// ```
    pub fn try_with_config(config: Config) -> Result<Self> {
        Self::try_with_config_and_hooks(config, H::default())
    }

    /// Creates a new instance of the `HashMap` according to `config`.
    ///
    /// Calling this method is equivalent to calling `try_with_config` and
    /// panicking on error.
    ///
    /// #   Panics
    ///
    /// Panics if `config` is invalid.
    pub fn with_config(config: Config) -> Self {
        Self::try_with_config(config).unwrap_or_else(|failure| panic_from_failure(failure))
    }
}

impl<K, V, H: HashHooks> HashMap<K, V, H> {
    /// Creates a new instance of the `HashMap` with a capacity of 16, and a
    /// maximum load factor of 0.75.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use lineprobe::hashmap::{HashMap, DefaultHashHooks};
    /// let map: HashMap<i32, i32> = HashMap::with_hooks(DefaultHashHooks::default());
    ///
    /// assert_eq!(0, map.len());
    /// assert_eq!(16, map.capacity());
    /// ```
    pub fn with_hooks(hooks: H) -> Self {
        Self::with_capacity_and_hooks(DEFAULT_CAPACITY, hooks)
    }

    /// Creates a new instance of the `HashMap` with a capacity of `capacity`,
    /// and a maximum load factor of 0.75.
    ///
    /// If `capacity` is 0, it is rounded up to 1.
    pub fn with_capacity_and_hooks(capacity: usize, hooks: H) -> Self {
        Self {
            hooks,
            max_load_factor: MaxLoadFactor::default(),
            slots: SlotArray::new(Capacity::at_least_one(capacity)),
        }
    }

    /// Creates a new instance of the `HashMap` according to `config`.
    ///
    /// #   Errors
    ///
    /// Returns an error if `config` is invalid.
    pub fn try_with_config_and_hooks(config: Config, hooks: H) -> Result<Self> {
        let (capacity, max_load_factor) = config.parse()?;

        Ok(Self { hooks, max_load_factor, slots: SlotArray::new(capacity) })
    }

    /// Creates a new instance of the `HashMap` according to `config`.
    ///
    /// #   Panics
    ///
    /// Panics if `config` is invalid.
    pub fn with_config_and_hooks(config: Config, hooks: H) -> Self {
        Self::try_with_config_and_hooks(config, hooks)
            .unwrap_or_else(|failure| panic_from_failure(failure))
    }

    /// Returns the hooks of the instance.
    pub fn hooks(&self) -> &H { &self.hooks }

    /// Returns whether the instance contains any element, or not.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use lineprobe::hashmap::HashMap;
    /// let mut map: HashMap<_, _> = HashMap::new();
    /// assert!(map.is_empty());
    ///
    /// map.insert(1, 1);
    /// assert!(!map.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool { self.len() == 0 }

    /// Returns the number of elements contained in the instance.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use lineprobe::hashmap::HashMap;
    /// let mut map: HashMap<_, _> = HashMap::new();
    /// assert_eq!(0, map.len());
    ///
    /// map.insert(1, 2);
    /// assert_eq!(1, map.len());
    /// ```
    pub fn len(&self) -> usize { self.slots.size().0 }

    /// Returns the number of slots of the instance.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use lineprobe::hashmap::HashMap;
    /// let mut map: HashMap<_, _> = HashMap::with_capacity(4);
    /// assert_eq!(4, map.capacity());
    ///
    /// map.extend([(1, 1), (2, 2), (3, 3), (4, 4), (5, 5)]);
    /// assert_eq!(8, map.capacity());
    /// ```
    pub fn capacity(&self) -> usize { self.slots.capacity().get() }

    /// Returns the number of tombstones, that is slots whose element was
    /// erased and which were not reclaimed since.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use lineprobe::hashmap::HashMap;
    /// let mut map: HashMap<_, _> = HashMap::new();
    /// map.extend([(1, 1), (2, 2)]);
    ///
    /// map.erase(&1);
    /// assert_eq!(1, map.tombstones());
    ///
    /// map.clear();
    /// assert_eq!(0, map.tombstones());
    /// ```
    pub fn tombstones(&self) -> usize { self.slots.tombstones() }

    /// Returns the current load factor, the ratio of elements to slots.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use lineprobe::hashmap::HashMap;
    /// let mut map: HashMap<_, _> = HashMap::with_capacity(8);
    /// map.extend([(1, 1), (2, 2)]);
    ///
    /// assert_eq!(0.25, map.load_factor());
    /// ```
    pub fn load_factor(&self) -> f32 {
        self.len() as f32 / self.capacity() as f32
    }

    /// Returns the maximum load factor.
    ///
    /// The load factor always stays strictly below the maximum load factor.
    pub fn max_load_factor(&self) -> f32 { self.max_load_factor.get() }

    /// Returns a reference to the element in the slot at `index`, if any.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use lineprobe::hashmap::HashMap;
    /// let mut map: HashMap<_, _> = HashMap::new();
    /// map.insert("x", 1);
    ///
    /// let index = map.find("x").unwrap();
    /// assert_eq!(Some((&"x", &1)), map.get_at(index));
    /// ```
    pub fn get_at(&self, index: SlotIndex) -> Option<(&K, &V)> {
        self.slots.get_at(index).map(|e| (&e.key, &e.value))
    }

    /// Erases the element in the slot at `index`, if any.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use lineprobe::hashmap::HashMap;
    /// let mut map: HashMap<_, _> = HashMap::new();
    /// map.insert("x", 1);
    ///
    /// let index = map.find("x").unwrap();
    /// assert_eq!(Some(("x", 1)), map.erase_at(index));
    /// assert_eq!(None, map.erase_at(index));
    /// ```
    pub fn erase_at(&mut self, index: SlotIndex) -> Option<(K, V)> {
        self.slots.erase_at(index).map(Entry::into_pair)
    }

    /// Retains only the elements for which `predicate` returns true, erasing
    /// the others.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use lineprobe::hashmap::HashMap;
    /// let mut map: HashMap<_, _> = (0..8).map(|i| (i, i * 10)).collect();
    ///
    /// map.retain(|&k, v| { *v += 1; k % 2 == 0 });
    ///
    /// assert_eq!(4, map.len());
    /// assert_eq!(Some(&41), map.get(&4));
    /// assert_eq!(None, map.get(&5));
    /// ```
    pub fn retain<F>(&mut self, mut predicate: F)
    where
        F: FnMut(&K, &mut V) -> bool,
    {
        self.slots.retain(|e| predicate(&e.key, &mut e.value));
    }

    /// Clears the instance.
    ///
    /// The instance is then empty, although it retains its capacity.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use lineprobe::hashmap::HashMap;
    /// let mut map: HashMap<_, _> = HashMap::with_capacity(4);
    /// map.extend([(1, false), (2, true), (3, false)]);
    ///
    /// map.clear();
    /// assert_eq!(0, map.len());
    /// assert_eq!(8, map.capacity());
    /// ```
    pub fn clear(&mut self) { self.slots.clear() }

    /// Returns an iterator over the key-value pairs.
    ///
    /// The iteration order is the physical order of the slots. The borrow
    /// checker prevents modifying the instance during the iteration.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use lineprobe::hashmap::HashMap;
    /// let mut map: HashMap<_, _> = HashMap::new();
    /// map.extend([(1, 10), (2, 20), (3, 30)]);
    ///
    /// let mut pairs: Vec<_> = map.iter().collect();
    /// pairs.sort();
    ///
    /// assert_eq!(vec![(&1, &10), (&2, &20), (&3, &30)], pairs);
    /// ```
    pub fn iter(&self) -> KeyValueIterator<'_, K, V> {
        KeyValueIterator::create(ElementIterator::create(&self.slots))
    }

    /// Returns an iterator over the key-value pairs, granting mutable access to
    /// the values.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use lineprobe::hashmap::HashMap;
    /// let mut map: HashMap<_, _> = HashMap::new();
    /// map.extend([(1, 10), (2, 20)]);
    ///
    /// for (k, v) in map.iter_mut() {
    ///     *v += k;
    /// }
    ///
    /// assert_eq!(Some(&22), map.get(&2));
    /// ```
    pub fn iter_mut(&mut self) -> KeyValueIteratorMut<'_, K, V> {
        KeyValueIteratorMut::create(ElementIteratorMut::create(&mut self.slots))
    }

    /// Returns an iterator over the keys.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use lineprobe::hashmap::HashMap;
    /// let mut map: HashMap<_, _> = HashMap::new();
    /// map.extend([(1, 10), (2, 20), (3, 30)]);
    ///
    /// assert_eq!(6, map.keys().sum::<i32>());
    /// ```
    pub fn keys(&self) -> KeyIterator<'_, K, V> {
        KeyIterator::create(ElementIterator::create(&self.slots))
    }

    /// Returns an iterator over the values.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use lineprobe::hashmap::HashMap;
    /// let mut map: HashMap<_, _> = HashMap::new();
    /// map.extend([(1, 10), (2, 20), (3, 30)]);
    ///
    /// assert_eq!(60, map.values().sum::<i32>());
    /// ```
    pub fn values(&self) -> ValueIterator<'_, K, V> {
        ValueIterator::create(ElementIterator::create(&self.slots))
    }

    /// Returns an iterator over the values, granting mutable access.
    pub fn values_mut(&mut self) -> ValueIteratorMut<'_, K, V> {
        ValueIteratorMut::create(ElementIteratorMut::create(&mut self.slots))
    }
}

impl<K, V, H> HashMap<K, V, H>
where
    K: Eq + hash::Hash,
    H: HashHooks,
{
    /// Sets the maximum load factor.
    ///
    /// If the current load factor is not strictly below the new maximum, the
    /// instance is rehashed into as many times twice its capacity as necessary.
    ///
    /// #   Errors
    ///
    /// Returns an error if `factor` is not within `(0, 1]`, in which case the
    /// instance is unchanged.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use lineprobe::hashmap::HashMap;
    /// let mut map: HashMap<_, _> = HashMap::with_capacity(8);
    /// map.extend([(1, 1), (2, 2), (3, 3), (4, 4)]);
    ///
    /// assert!(map.try_set_max_load_factor(0.0).is_err());
    /// assert!(map.try_set_max_load_factor(1.5).is_err());
    /// assert_eq!(8, map.capacity());
    ///
    /// assert_eq!(Ok(()), map.try_set_max_load_factor(0.5));
    /// assert_eq!(16, map.capacity());
    /// assert_eq!(0.5, map.max_load_factor());
    /// ```
    pub fn try_set_max_load_factor(&mut self, factor: f32) -> Result<()> {
        let factor = MaxLoadFactor::new(factor)?;

        self.slots.try_fit(self.slots.size(), factor, &self.hooks)?;
        self.max_load_factor = factor;

        Ok(())
    }

    /// Sets the maximum load factor.
    ///
    /// Calling this method is equivalent to calling `try_set_max_load_factor`
    /// and panicking on error.
    ///
    /// #   Panics
    ///
    /// Panics if `factor` is not within `(0, 1]`.
    pub fn set_max_load_factor(&mut self, factor: f32) {
        self.try_set_max_load_factor(factor)
            .unwrap_or_else(|failure| panic_from_failure(failure));
    }

    /// Returns `true` if the map contains a value for the specified key.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use lineprobe::hashmap::HashMap;
    /// let mut map: HashMap<_, _> = HashMap::new();
    /// map.insert(1, false);
    ///
    /// assert!(map.contains_key(&1));
    /// assert!(!map.contains_key(&0));
    /// ```
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: borrow::Borrow<Q>,
        Q: ?Sized + Eq + hash::Hash,
    {
        self.find(key).is_some()
    }

    /// Returns the slot holding the key, if any.
    ///
    /// The `SlotIndex` is only valid until the next modification of the
    /// instance.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use lineprobe::hashmap::HashMap;
    /// let mut map: HashMap<_, _> = HashMap::new();
    /// map.insert(1, false);
    ///
    /// assert!(map.find(&1).is_some());
    /// assert_eq!(None, map.find(&0));
    /// ```
    pub fn find<Q>(&self, key: &Q) -> Option<SlotIndex>
    where
        K: borrow::Borrow<Q>,
        Q: ?Sized + Eq + hash::Hash,
    {
        self.slots.find(key, &self.hooks)
    }

    /// Returns a reference to the value corresponding to the key, if any.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use lineprobe::hashmap::HashMap;
    /// let mut map: HashMap<_, _> = HashMap::new();
    /// map.insert(1, false);
    ///
    /// assert_eq!(Some(&false), map.get(&1));
    /// assert_eq!(None, map.get(&0));
    /// ```
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: borrow::Borrow<Q>,
        Q: ?Sized + Eq + hash::Hash,
    {
        self.slots.get(key, &self.hooks).map(|e| &e.value)
    }

    /// Returns the key-value pair corresponding to the key, if any.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use lineprobe::hashmap::HashMap;
    /// let mut map: HashMap<_, _> = HashMap::new();
    /// map.insert(1, false);
    ///
    /// assert_eq!(Some((&1, &false)), map.get_key_value(&1));
    /// assert_eq!(None, map.get_key_value(&0));
    /// ```
    pub fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: borrow::Borrow<Q>,
        Q: ?Sized + Eq + hash::Hash,
    {
        self.slots.get(key, &self.hooks).map(|e| (&e.key, &e.value))
    }

    /// Returns a mutable reference to the value corresponding to the key, if
    /// any.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use lineprobe::hashmap::HashMap;
    /// let mut map: HashMap<_, _> = HashMap::new();
    /// map.insert(1, false);
    ///
    /// if let Some(e) = map.get_mut(&1) {
    ///     *e = true;
    /// }
    /// assert_eq!(Some(&true), map.get(&1));
    /// assert_eq!(None, map.get_mut(&0));
    /// ```
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: borrow::Borrow<Q>,
        Q: ?Sized + Eq + hash::Hash,
    {
        self.slots.get_mut(key, &self.hooks).map(|e| &mut e.value)
    }

    /// Returns a reference to the value corresponding to the key.
    ///
    /// #   Errors
    ///
    /// Returns `Failure::KeyNotFound` if the key is absent.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use lineprobe::failure::Failure;
    /// #   use lineprobe::hashmap::HashMap;
    /// let mut map: HashMap<_, _> = HashMap::new();
    /// map.insert("one", 1);
    ///
    /// assert_eq!(Ok(&1), map.at("one"));
    /// assert_eq!(Err(Failure::KeyNotFound), map.at("two"));
    /// ```
    pub fn at<Q>(&self, key: &Q) -> Result<&V>
    where
        K: borrow::Borrow<Q>,
        Q: ?Sized + Eq + hash::Hash,
    {
        self.get(key).ok_or(Failure::KeyNotFound)
    }

    /// Returns a mutable reference to the value corresponding to the key.
    ///
    /// #   Errors
    ///
    /// Returns `Failure::KeyNotFound` if the key is absent.
    pub fn at_mut<Q>(&mut self, key: &Q) -> Result<&mut V>
    where
        K: borrow::Borrow<Q>,
        Q: ?Sized + Eq + hash::Hash,
    {
        self.get_mut(key).ok_or(Failure::KeyNotFound)
    }

    /// Inserts a key-value pair into the map, overwriting the value of an
    /// existing key.
    ///
    /// Returns the previous value, if the key already existed.
    ///
    /// #   Errors
    ///
    /// Returns an error if the capacity cannot be increased to accomodate the
    /// new key, in which case the instance is unchanged.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use lineprobe::hashmap::HashMap;
    /// let mut map: HashMap<_, _> = HashMap::new();
    ///
    /// assert_eq!(Ok(None), map.try_insert(3, false));
    /// assert_eq!(Ok(Some(false)), map.try_insert(3, true));
    ///
    /// assert_eq!(Some(&true), map.get(&3));
    /// ```
    pub fn try_insert(&mut self, key: K, value: V) -> Result<Option<V>> {
        match self.slots.try_locate(&key, self.max_load_factor, &self.hooks)? {
            Location::Occupied(entry) => Ok(Some(mem::replace(&mut entry.value, value))),
            Location::Vacant(vacancy) => {
                vacancy.fill(Entry { key, value });
                Ok(None)
            },
        }
    }

    /// Inserts a key-value pair into the map, overwriting the value of an
    /// existing key.
    ///
    /// Calling this method is equivalent to calling `try_insert` and panicking
    /// on error.
    ///
    /// #   Panics
    ///
    /// Panics if the key-value pair cannot be inserted.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use lineprobe::hashmap::HashMap;
    /// let mut map: HashMap<_, _> = HashMap::new();
    ///
    /// assert_eq!(None, map.insert(3, false));
    /// assert_eq!(Some(false), map.insert(3, true));
    ///
    /// assert_eq!(Some(&true), map.get(&3));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.try_insert(key, value).unwrap_or_else(|failure| panic_from_failure(failure))
    }

    /// Inserts a key-value pair into the map, unless the key already exists.
    ///
    /// Returns whether the key already existed; if it did, the instance is
    /// unchanged and `key` and `value` are dropped.
    ///
    /// #   Errors
    ///
    /// Returns an error if the capacity cannot be increased to accomodate the
    /// new key, in which case the instance is unchanged.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use lineprobe::hashmap::HashMap;
    /// let mut map: HashMap<_, _> = HashMap::new();
    ///
    /// assert_eq!(Ok(false), map.try_insert_if_absent(3, false));
    /// assert_eq!(Ok(true), map.try_insert_if_absent(3, true));
    ///
    /// assert_eq!(Some(&false), map.get(&3));
    /// ```
    pub fn try_insert_if_absent(&mut self, key: K, value: V) -> Result<bool> {
        match self.slots.try_locate(&key, self.max_load_factor, &self.hooks)? {
            Location::Occupied(_) => Ok(true),
            Location::Vacant(vacancy) => {
                vacancy.fill(Entry { key, value });
                Ok(false)
            },
        }
    }

    /// Inserts a key-value pair into the map, unless the key already exists.
    ///
    /// Calling this method is equivalent to calling `try_insert_if_absent` and
    /// panicking on error.
    ///
    /// #   Panics
    ///
    /// Panics if the key-value pair cannot be inserted.
    pub fn insert_if_absent(&mut self, key: K, value: V) -> bool {
        self.try_insert_if_absent(key, value)
            .unwrap_or_else(|failure| panic_from_failure(failure))
    }

    /// Returns a mutable reference to the value corresponding to the key,
    /// inserting the result of `default` first if the key is absent.
    ///
    /// #   Errors
    ///
    /// Returns an error if the capacity cannot be increased to accomodate the
    /// new key, in which case the instance is unchanged.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use lineprobe::hashmap::HashMap;
    /// let mut map: HashMap<_, Vec<i32>> = HashMap::new();
    ///
    /// map.try_get_or_insert_with("a", Vec::new).unwrap().push(1);
    /// map.try_get_or_insert_with("a", Vec::new).unwrap().push(2);
    ///
    /// assert_eq!(Some(&vec![1, 2]), map.get("a"));
    /// ```
    pub fn try_get_or_insert_with<F>(&mut self, key: K, default: F) -> Result<&mut V>
    where
        F: FnOnce() -> V,
    {
        let entry = match self.slots.try_locate(&key, self.max_load_factor, &self.hooks)? {
            Location::Occupied(entry) => entry,
            Location::Vacant(vacancy) => vacancy.fill(Entry { key, value: default() }),
        };

        Ok(&mut entry.value)
    }

    /// Returns a mutable reference to the value corresponding to the key,
    /// inserting the result of `default` first if the key is absent.
    ///
    /// #   Panics
    ///
    /// Panics if the key-value pair cannot be inserted.
    pub fn get_or_insert_with<F>(&mut self, key: K, default: F) -> &mut V
    where
        F: FnOnce() -> V,
    {
        self.try_get_or_insert_with(key, default)
            .unwrap_or_else(|failure| panic_from_failure(failure))
    }

    /// Returns a mutable reference to the value corresponding to the key,
    /// inserting the default value first if the key is absent.
    ///
    /// #   Panics
    ///
    /// Panics if the key-value pair cannot be inserted.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use lineprobe::hashmap::HashMap;
    /// let mut map: HashMap<_, u32> = HashMap::new();
    ///
    /// for word in "the cat and the hat".split(' ') {
    ///     *map.get_or_insert_default(word) += 1;
    /// }
    ///
    /// assert_eq!(Some(&2), map.get("the"));
    /// assert_eq!(Some(&1), map.get("cat"));
    /// ```
    pub fn get_or_insert_default(&mut self, key: K) -> &mut V
    where
        V: Default,
    {
        self.get_or_insert_with(key, V::default)
    }

    /// Erases the key, and its value, if present.
    ///
    /// Returns whether the key was present.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use lineprobe::hashmap::HashMap;
    /// let mut map: HashMap<_, _> = HashMap::new();
    /// map.insert(1, "one");
    ///
    /// assert!(map.erase(&1));
    /// assert!(!map.erase(&1));
    /// assert!(map.is_empty());
    /// ```
    pub fn erase<Q>(&mut self, key: &Q) -> bool
    where
        K: borrow::Borrow<Q>,
        Q: ?Sized + Eq + hash::Hash,
    {
        self.slots.erase(key, &self.hooks).is_some()
    }

    /// Removes the key, returning its value, if present.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use lineprobe::hashmap::HashMap;
    /// let mut map: HashMap<_, _> = HashMap::new();
    /// map.insert(1, "one");
    ///
    /// assert_eq!(Some("one"), map.remove(&1));
    /// assert_eq!(None, map.remove(&1));
    /// ```
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: borrow::Borrow<Q>,
        Q: ?Sized + Eq + hash::Hash,
    {
        self.slots.erase(key, &self.hooks).map(|e| e.value)
    }

    /// Removes the key, returning both key and value, if present.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: borrow::Borrow<Q>,
        Q: ?Sized + Eq + hash::Hash,
    {
        self.slots.erase(key, &self.hooks).map(Entry::into_pair)
    }

    /// Rehashes all elements into `capacity` slots.
    ///
    /// Rehashing purges all tombstones. It may shrink the instance, as long as
    /// the current elements fit, even if the load factor then exceeds its
    /// maximum; the next insertion restores it.
    ///
    /// #   Errors
    ///
    /// Returns an error if `capacity` is 0, or smaller than the number of
    /// elements, in which case the instance is unchanged.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use lineprobe::failure::{CapacityError, Failure};
    /// #   use lineprobe::hashmap::HashMap;
    /// let mut map: HashMap<_, _> = HashMap::new();
    /// map.extend([(1, 1), (2, 2), (3, 3)]);
    ///
    /// assert_eq!(Ok(()), map.try_rehash(64));
    /// assert_eq!(64, map.capacity());
    /// assert_eq!(Some(&2), map.get(&2));
    ///
    /// assert_eq!(
    ///     Err(Failure::Capacity(CapacityError::BelowSize { requested: 2, size: 3 })),
    ///     map.try_rehash(2)
    /// );
    /// ```
    pub fn try_rehash(&mut self, capacity: usize) -> Result<()> {
        self.slots.try_rehash(capacity, &self.hooks)
    }

    /// Rehashes all elements into `capacity` slots.
    ///
    /// Calling this method is equivalent to calling `try_rehash` and panicking
    /// on error.
    ///
    /// #   Panics
    ///
    /// Panics if `capacity` is 0, or smaller than the number of elements.
    pub fn rehash(&mut self, capacity: usize) {
        self.try_rehash(capacity).unwrap_or_else(|failure| panic_from_failure(failure));
    }

    /// Reserves slots for `extra` more elements.
    ///
    /// Calling this method grows the instance, if necessary, so that `extra`
    /// more keys can be inserted without rehashing.
    ///
    /// #   Errors
    ///
    /// Returns an error if the capacity overflows, in which case the instance
    /// is unchanged.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use lineprobe::failure::{CapacityError, Failure};
    /// #   use lineprobe::hashmap::HashMap;
    /// let mut map: HashMap<i32, i32> = HashMap::with_capacity(4);
    ///
    /// assert_eq!(Ok(()), map.try_reserve(6));
    /// assert_eq!(16, map.capacity());
    ///
    /// assert_eq!(
    ///     Err(Failure::Capacity(CapacityError::Overflow)),
    ///     map.try_reserve(usize::MAX)
    /// );
    /// ```
    pub fn try_reserve(&mut self, extra: usize) -> Result<()> {
        self.slots.try_reserve(extra, self.max_load_factor, &self.hooks)
    }

    /// Reserves slots for `extra` more elements.
    ///
    /// Calling this method is equivalent to calling `try_reserve` and
    /// panicking on error.
    ///
    /// #   Panics
    ///
    /// Panics if the capacity overflows.
    pub fn reserve(&mut self, extra: usize) {
        self.try_reserve(extra).unwrap_or_else(|failure| panic_from_failure(failure));
    }

    /// Inserts multiple key-value pairs in the map, overwriting the values of
    /// existing keys.
    ///
    /// #   Errors
    ///
    /// Returns an error if any of the key-value pairs cannot be inserted, in
    /// which case the pairs preceeding it were inserted.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use lineprobe::hashmap::HashMap;
    /// let mut map: HashMap<_, _> = HashMap::new();
    /// assert_eq!(Ok(()), map.try_extend([(1, 1), (2, 2), (1, 3)]));
    /// assert_eq!(2, map.len());
    /// assert_eq!(Some(&3), map.get(&1));
    /// ```
    pub fn try_extend<C>(&mut self, collection: C) -> Result<()>
    where
        C: IntoIterator<Item = (K, V)>,
    {
        for (key, value) in collection {
            self.try_insert(key, value)?;
        }

        Ok(())
    }
}

impl<K, V, H: HashHooks + Default> Default for HashMap<K, V, H> {
    fn default() -> Self { Self::new() }
}

impl<K: fmt::Debug, V: fmt::Debug, H: HashHooks> fmt::Debug for HashMap<K, V, H> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.slots.debug("HashMap", f)
    }
}

impl<K, V, H, OH> PartialEq<HashMap<K, V, OH>> for HashMap<K, V, H>
where
    K: Eq + hash::Hash,
    V: PartialEq,
    H: HashHooks,
    OH: HashHooks,
{
    fn eq(&self, other: &HashMap<K, V, OH>) -> bool {
        self.len() == other.len() && self.iter().all(|(k, v)| other.get(k) == Some(v))
    }
}

impl<K, V, H> Eq for HashMap<K, V, H>
where
    K: Eq + hash::Hash,
    V: Eq,
    H: HashHooks,
{}

impl<K, Q, V, H> ops::Index<&Q> for HashMap<K, V, H>
where
    K: Eq + hash::Hash + borrow::Borrow<Q>,
    Q: ?Sized + Eq + hash::Hash,
    H: HashHooks,
{
    type Output = V;

    /// Returns a reference to the value corresponding to the key.
    ///
    /// #   Panics
    ///
    /// Panics if the key is absent.
    fn index(&self, key: &Q) -> &V {
        self.get(key).unwrap_or_else(|| panic_from_failure(Failure::KeyNotFound))
    }
}

impl<K, V, H> iter::Extend<(K, V)> for HashMap<K, V, H>
where
    K: Eq + hash::Hash,
    H: HashHooks,
{
    fn extend<C>(&mut self, collection: C)
    where
        C: IntoIterator<Item = (K, V)>,
    {
        self.try_extend(collection).unwrap_or_else(|failure| panic_from_failure(failure));
    }
}

impl<K, V, H> iter::FromIterator<(K, V)> for HashMap<K, V, H>
where
    K: Eq + hash::Hash,
    H: HashHooks + Default,
{
    fn from_iter<C>(collection: C) -> Self
    where
        C: IntoIterator<Item = (K, V)>
    {
        let mut result: HashMap<_, _, _> = HashMap::with_hooks(H::default());
        result.extend(collection);
        result
    }
}

impl<K, V, H: HashHooks> iter::IntoIterator for HashMap<K, V, H> {
    type Item = (K, V);
    type IntoIter = KeyValueIntoIterator<K, V>;

    fn into_iter(self) -> KeyValueIntoIterator<K, V> {
        KeyValueIntoIterator::create(ElementIntoIterator::create(self.slots))
    }
}

impl<'a, K, V, H: HashHooks> iter::IntoIterator for &'a HashMap<K, V, H> {
    type Item = (&'a K, &'a V);
    type IntoIter = KeyValueIterator<'a, K, V>;

    fn into_iter(self) -> KeyValueIterator<'a, K, V> { self.iter() }
}

impl<'a, K, V, H: HashHooks> iter::IntoIterator for &'a mut HashMap<K, V, H> {
    type Item = (&'a K, &'a mut V);
    type IntoIter = KeyValueIteratorMut<'a, K, V>;

    fn into_iter(self) -> KeyValueIteratorMut<'a, K, V> { self.iter_mut() }
}

#[cold]
#[inline(never)]
fn panic_from_failure(failure: Failure) -> ! {
    panic!("{}", failure);
}

#[cfg(all(test, feature = "with-std"))]
mod tests {

use std::mem;

use super::HashMap;

use crate::failure::{CapacityError, Failure};
use crate::hashmap::Config;
use crate::utils::tester::*;

fn modulo_map(capacity: usize) -> HashMap<u64, i32, ModuloHooks> {
    HashMap::with_capacity_and_hooks(capacity, ModuloHooks)
}

#[test]
fn size_of() {
    const PTR_SIZE: usize = mem::size_of::<usize>();

    //  Vec (3), size, tombstones, and load factor padded to a word.
    assert_eq!(6 * PTR_SIZE, mem::size_of::<HashMap<u8, u8, ModuloHooks>>());
}

#[test]
fn trait_debug() {
    let mut map = modulo_map(4);
    map.extend([(1, 10), (2, 20)]);
    map.erase(&1);

    assert_eq!(
        "HashMap { capacity: 4, length: 1, slots: [<empty>, <tombstone>, 2 => 20, <empty>] }",
        format!("{:?}", map)
    );
}

#[test]
fn trait_from_iterator() {
    let map: HashMap<_, _> =
        [(1, 1), (2, 2), (3, 3), (4, 4), (5, 5)].iter().copied().collect();

    assert_eq!(5, map.len());
}

#[test]
fn trait_clone() {
    let mut map = modulo_map(8);
    map.extend([(1, 10), (9, 90)]);
    map.erase(&1);

    let mut cloned = map.clone();
    assert_eq!(1, cloned.tombstones());

    //  Reclaims the tombstone left by 1.
    cloned.insert(17, 170);

    assert_eq!(1, map.len());
    assert_eq!(1, map.tombstones());
    assert_eq!(2, cloned.len());
    assert_eq!(0, cloned.tombstones());
    assert_eq!(Some(&90), cloned.get(&9));
}

#[test]
fn trait_eq() {
    let left: HashMap<u64, i32> = (0..20).map(|i| (i, i as i32 * 2)).collect();

    let mut right = modulo_map(4);
    right.extend((0..20).rev().map(|i| (i, i as i32 * 2)));

    assert!(left == right);

    right.insert(3, 0);
    assert!(left != right);

    right.insert(3, 6);
    right.insert(20, 40);
    assert!(left != right);
}

#[test]
fn trait_index() {
    let mut map: HashMap<_, _> = HashMap::new();
    map.insert(String::from("one"), 1);

    assert_eq!(1, map["one"]);
}

#[test]
#[should_panic(expected = "key not found")]
fn trait_index_missing() {
    let map: HashMap<String, i32> = HashMap::new();

    let value = map["one"];
    assert_eq!(0, value);
}

#[test]
fn into_iterator() {
    let mut map = modulo_map(8);
    map.extend([(3, 30), (1, 10), (2, 20)]);

    let pairs: Vec<_> = map.into_iter().collect();

    assert_eq!(vec![(1, 10), (2, 20), (3, 30)], pairs);
}

#[test]
fn into_iterator_mut() {
    let mut map = modulo_map(8);
    map.extend([(3, 30), (1, 10), (2, 20)]);

    for (k, v) in &mut map {
        *v += *k as i32;
    }

    assert_eq!(vec![11, 22, 33], map.values().copied().collect::<Vec<_>>());

    for v in map.values_mut() {
        *v = 0;
    }

    assert_eq!(0, map.values().sum::<i32>());
}

#[test]
fn round_trip() {
    let mut map: HashMap<_, _> = HashMap::new();

    for i in 0..1_000 {
        map.insert(i, i * 3);
    }

    for i in 0..1_000 {
        assert_eq!(Some(&(i * 3)), map.get(&i));
    }
    assert_eq!(1_000, map.len());
}

#[test]
fn load_factor_bound() {
    let mut map: HashMap<_, _> = HashMap::try_with_config(
        Config::default().with_initial_capacity(1).with_max_load_factor(0.5)
    ).unwrap();

    for i in 0..500 {
        map.insert(i, ());
        assert!(map.load_factor() < 0.5, "{} in {}", map.len(), map.capacity());
    }
}

#[test]
fn load_factor_full() {
    let config = Config::default().with_initial_capacity(1).with_max_load_factor(1.0);
    let mut map: HashMap<_, _> = HashMap::try_with_config(config).unwrap();

    map.insert(1, 1);
    assert_eq!(2, map.capacity());

    map.insert(2, 2);
    assert_eq!(4, map.capacity());

    map.insert(3, 3);
    assert_eq!(4, map.capacity());
}

#[test]
fn grow_before_placement() {
    let config = Config::default().with_initial_capacity(4).with_max_load_factor(0.75);
    let mut map: HashMap<_, _> = HashMap::try_with_config(config).unwrap();

    map.insert("a", 1);
    map.insert("b", 2);
    assert_eq!(4, map.capacity());

    map.insert("c", 3);
    assert_eq!(8, map.capacity());
    assert_eq!(3, map.len());

    assert_eq!(Some(&1), map.get("a"));
    assert_eq!(Some(&2), map.get("b"));
    assert_eq!(Some(&3), map.get("c"));
}

#[test]
fn overwrite_does_not_grow() {
    let config = Config::default().with_initial_capacity(4);
    let mut map: HashMap<_, _> = HashMap::try_with_config(config).unwrap();

    map.insert("a", 1);
    map.insert("b", 2);

    assert_eq!(Some(2), map.insert("b", 3));
    assert!(map.insert_if_absent("a", 4));
    *map.get_or_insert_default("a") += 1;

    assert_eq!(4, map.capacity());
    assert_eq!(Some(&2), map.get("a"));
    assert_eq!(Some(&3), map.get("b"));
}

#[test]
fn erase_then_find_collision() {
    let mut map = modulo_map(8);

    map.insert(1, 10);
    map.insert(9, 90);

    assert!(map.erase(&1));
    assert_eq!(Some(&90), map.get(&9));
    assert_eq!(None, map.get(&1));
}

#[test]
fn erase_then_reclaim() {
    let mut map = modulo_map(8);

    map.insert(1, 10);
    map.insert(9, 90);
    let reclaimed = map.find(&1).unwrap();

    map.erase(&1);
    map.insert(17, 170);

    assert_eq!(Some(reclaimed), map.find(&17));
    assert_eq!(8, map.capacity());
    assert_eq!(0, map.tombstones());
}

#[test]
fn erase_absent_is_idempotent() {
    let mut map = modulo_map(8);
    map.extend([(1, 10), (9, 90)]);

    let before = format!("{:?}", map);

    assert!(!map.erase(&17));
    assert!(!map.erase(&2));

    assert_eq!(2, map.len());
    assert_eq!(before, format!("{:?}", map));
}

#[test]
fn erase_then_insert_if_absent() {
    let mut map: HashMap<_, _> = HashMap::new();

    map.insert("x", 10);
    assert!(map.erase("x"));
    assert_eq!(None, map.get("x"));

    assert!(!map.insert_if_absent("x", 20));
    assert_eq!(Some(&20), map.get("x"));
}

#[test]
fn erase_does_not_shrink() {
    let mut map: HashMap<_, _> = (0..100).map(|i| (i, i)).collect();
    let capacity = map.capacity();

    for i in 0..100 {
        assert!(map.erase(&i));
    }

    assert!(map.is_empty());
    assert_eq!(capacity, map.capacity());
    assert_eq!(100, map.tombstones());
}

#[test]
fn churn_without_growth() {
    //  Repeated insert/erase cycles reuse tombstones, even once no slot is
    //  Empty any longer.
    let mut map = modulo_map(8);

    for i in 0..100 {
        map.insert(i, i as i32);
        assert!(map.erase(&i));
    }

    assert_eq!(8, map.capacity());
    assert!(map.is_empty());

    map.insert(1_000, 1);
    assert_eq!(Some(&1), map.get(&1_000));
    assert_eq!(None, map.get(&99));
}

#[test]
fn rehash_preserves_contents() {
    let mut map = modulo_map(16);

    for i in 0..10 {
        map.insert(i * 7, i as i32);
    }
    map.erase(&14);

    for capacity in [9, 10, 32, 1_000] {
        map.rehash(capacity);

        assert_eq!(capacity, map.capacity());
        assert_eq!(9, map.len());
        assert_eq!(0, map.tombstones());

        for i in (0..10).filter(|&i| i != 2) {
            assert_eq!(Some(&(i as i32)), map.get(&(i * 7)));
        }
        assert_eq!(None, map.get(&14));
    }
}

#[test]
fn rehash_then_insert_restores_load() {
    let mut map = modulo_map(16);
    map.extend([(1, 1), (2, 2), (3, 3)]);

    map.rehash(3);
    assert_eq!(None, map.get(&4));

    map.insert(4, 4);
    assert!(map.load_factor() < map.max_load_factor());
    assert_eq!(6, map.capacity());
}

#[test]
fn rehash_then_overwrite_restores_load() {
    let mut map = modulo_map(16);
    map.extend([(1, 1), (2, 2), (3, 3)]);

    map.rehash(3);
    assert_eq!(3, map.capacity());

    assert_eq!(Some(2), map.insert(2, 20));
    assert!(map.load_factor() < map.max_load_factor());
    assert_eq!(6, map.capacity());

    map.rehash(3);
    *map.get_or_insert_default(3) += 1;
    assert_eq!(6, map.capacity());
    assert_eq!(Some(&4), map.get(&3));
}

#[test]
fn churn_against_std() {
    use std::collections::HashMap as StdHashMap;

    fn admitted(map: &HashMap<u64, u32, ModuloHooks>) -> bool {
        (map.len() as f64) < f64::from(map.max_load_factor()) * map.capacity() as f64
    }

    for factor in [0.3, 0.75, 1.0] {
        let config = Config::default().with_initial_capacity(1).with_max_load_factor(factor);
        let mut map = HashMap::try_with_config_and_hooks(config, ModuloHooks).unwrap();
        let mut model = StdHashMap::new();
        let mut random = XorShift::new(0x5EED);

        for step in 0..50_000u32 {
            //  Few distinct home slots, to provoke long collision chains.
            let key = random.below(64) * 16 + random.below(2);

            match random.below(7) {
                0 | 1 => {
                    assert_eq!(model.insert(key, step), map.insert(key, step));
                    assert!(admitted(&map), "{} in {}", map.len(), map.capacity());
                },
                2 => {
                    let existed = model.contains_key(&key);
                    if !existed {
                        model.insert(key, step);
                    }

                    assert_eq!(existed, map.insert_if_absent(key, step));
                    assert!(admitted(&map), "{} in {}", map.len(), map.capacity());
                },
                3 | 4 => assert_eq!(model.remove(&key).is_some(), map.erase(&key)),
                5 => assert_eq!(model.get(&key), map.get(&key)),
                _ => {
                    if random.below(20) == 0 {
                        let capacity = map.len() + random.below(8) as usize;
                        map.rehash(capacity.max(1));
                        assert_eq!(0, map.tombstones());
                    }
                },
            }

            assert_eq!(model.len(), map.len());

            if step % 1_000 == 0 {
                assert_eq!(map.len(), map.iter().count());

                for (key, value) in &model {
                    assert_eq!(Some(value), map.get(key), "{} at step {}", key, step);
                }
            }
        }
    }
}

#[test]
fn rehash_invalid() {
    let mut map = modulo_map(8);
    map.extend([(1, 1), (2, 2)]);

    assert_eq!(
        Err(Failure::Capacity(CapacityError::BelowSize { requested: 1, size: 2 })),
        map.try_rehash(1)
    );

    map.clear();

    assert_eq!(Err(Failure::Capacity(CapacityError::Zero)), map.try_rehash(0));
    assert_eq!(8, map.capacity());
}

#[test]
#[should_panic(expected = "capacity 1 cannot hold 2 elements")]
fn rehash_panics() {
    let mut map = modulo_map(8);
    map.extend([(1, 1), (2, 2)]);

    map.rehash(1);
}

#[test]
fn set_max_load_factor_grows() {
    let mut map = modulo_map(8);
    map.extend([(1, 1), (2, 2), (3, 3)]);

    map.set_max_load_factor(0.25);

    assert_eq!(16, map.capacity());
    assert_eq!(0.25, map.max_load_factor());
    assert_eq!(Some(&3), map.get(&3));
}

#[test]
fn set_max_load_factor_invalid() {
    let mut map = modulo_map(8);

    assert!(map.try_set_max_load_factor(f32::NAN).is_err());
    assert_eq!(
        Err(Failure::Capacity(CapacityError::InvalidLoadFactor(2.0))),
        map.try_set_max_load_factor(2.0)
    );
    assert_eq!(0.75, map.max_load_factor());
}

#[test]
fn at() {
    let mut map = modulo_map(8);
    map.insert(1, 10);

    assert_eq!(Ok(&10), map.at(&1));
    assert_eq!(Err(Failure::KeyNotFound), map.at(&2));

    *map.at_mut(&1).unwrap() += 1;
    assert_eq!(Ok(&11), map.at(&1));
    assert_eq!(Err(Failure::KeyNotFound), map.at_mut(&9).map(|v| *v));
}

#[test]
fn remove_entry() {
    let mut map: HashMap<_, _> = HashMap::new();
    map.insert(String::from("key"), 1);

    assert_eq!(Some((String::from("key"), 1)), map.remove_entry("key"));
    assert_eq!(None, map.remove_entry("key"));
}

#[test]
fn erase_at_stale() {
    let mut map = modulo_map(8);
    map.insert(1, 10);

    let index = map.find(&1).unwrap();
    map.erase(&1);

    assert_eq!(None, map.get_at(index));
    assert_eq!(None, map.erase_at(index));
    assert_eq!(1, map.tombstones());
}

#[test]
fn drop_values() {
    let count = SpyCount::zero();

    {
        let mut map: HashMap<_, _> = HashMap::new();

        for i in 0..20 {
            map.insert(i, SpyElement::new(&count));
        }
        assert_eq!(20, count.get());

        //  Overwritten values are dropped.
        map.insert(0, SpyElement::new(&count));
        assert_eq!(20, count.get());

        //  Erased values are dropped.
        map.erase(&1);
        map.remove(&2);
        assert_eq!(18, count.get());

        //  Values that are not inserted are dropped.
        map.insert_if_absent(3, SpyElement::new(&count));
        assert_eq!(18, count.get());

        map.retain(|&k, _| k < 10);
        assert_eq!(8, count.get());
    }

    assert_eq!(0, count.get());
}

#[test]
fn clear_drops_values() {
    let count = SpyCount::zero();

    let mut map: HashMap<_, _> = HashMap::new();
    map.extend((0..5).map(|i| (i, SpyElement::new(&count))));

    map.clear();

    assert_eq!(0, count.get());
    assert_eq!(16, map.capacity());
    assert!(map.iter().next().is_none());
}

#[test]
fn panic_drop() {
    use std::panic::{AssertUnwindSafe, catch_unwind};

    let collection = vec![
        (PanickyDrop::new(0), 0),
        (PanickyDrop::new(1), 1),
        (PanickyDrop::panicky(2), 2),
        (PanickyDrop::new(3), 3),
    ];

    let mut map: HashMap<_, _> = HashMap::default();
    map.extend(collection);

    let panicked = catch_unwind(AssertUnwindSafe(|| {
        map.clear();
    }));
    assert!(panicked.is_err());

    //  Elements not yet cleared remain accounted for.
    assert!(map.len() < 4);
    assert_eq!(map.len(), map.iter().count());

    map.insert(PanickyDrop::new(4), 4);
    assert_eq!(Some(&4), map.get(&PanickyDrop::new(4)));
}

}   //  mod tests
