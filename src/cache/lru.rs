//! LRU List Module
//!
//! Recency-ordered storage for cache entries. Nodes live in a slot arena and
//! are doubly linked by index, so promotion and eviction are O(1).

use crate::cache::CacheEntry;

/// Node in the recency list.
#[derive(Debug)]
struct Node<K, V> {
    entry: CacheEntry<K, V>,
    prev: Option<usize>,
    next: Option<usize>,
}

// == LRU List ==
/// Doubly linked list of cache entries ordered by access time.
///
/// - Head = Most recently used
/// - Tail = Least recently used
///
/// Slots are addressed by the index returned from [`LruList::push_front`];
/// freed slots are reused by later inserts.
#[derive(Debug)]
pub struct LruList<K, V> {
    nodes: Vec<Option<Node<K, V>>>,
    head: Option<usize>,
    tail: Option<usize>,
    free_list: Vec<usize>,
    len: usize,
}

impl<K, V> Default for LruList<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> LruList<K, V> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            head: None,
            tail: None,
            free_list: Vec::new(),
            len: 0,
        }
    }

    // == Push Front ==
    /// Inserts `entry` as most recently used and returns its slot.
    pub fn push_front(&mut self, entry: CacheEntry<K, V>) -> usize {
        let idx = self.alloc_slot();
        self.nodes[idx] = Some(Node {
            entry,
            prev: None,
            next: self.head,
        });

        if let Some(head_idx) = self.head {
            if let Some(head) = &mut self.nodes[head_idx] {
                head.prev = Some(idx);
            }
        }
        self.head = Some(idx);
        if self.tail.is_none() {
            self.tail = Some(idx);
        }

        self.len += 1;
        idx
    }

    // == Move To Front ==
    /// Marks the entry in `idx` as most recently used.
    pub fn move_to_front(&mut self, idx: usize) {
        if self.head == Some(idx) || self.get(idx).is_none() {
            return;
        }

        self.unlink(idx);

        if let Some(node) = &mut self.nodes[idx] {
            node.prev = None;
            node.next = self.head;
        }
        if let Some(head_idx) = self.head {
            if let Some(head) = &mut self.nodes[head_idx] {
                head.prev = Some(idx);
            }
        }
        self.head = Some(idx);
        if self.tail.is_none() {
            self.tail = Some(idx);
        }
    }

    // == Pop Back ==
    /// Removes and returns the least recently used entry.
    ///
    /// Returns None if the list is empty.
    pub fn pop_back(&mut self) -> Option<CacheEntry<K, V>> {
        let tail_idx = self.tail?;
        self.unlink(tail_idx);
        let node = self.nodes[tail_idx].take()?;
        self.free_list.push(tail_idx);
        self.len -= 1;
        Some(node.entry)
    }

    pub fn get(&self, idx: usize) -> Option<&CacheEntry<K, V>> {
        self.nodes.get(idx)?.as_ref().map(|node| &node.entry)
    }

    pub fn get_mut(&mut self, idx: usize) -> Option<&mut CacheEntry<K, V>> {
        self.nodes.get_mut(idx)?.as_mut().map(|node| &mut node.entry)
    }

    /// Iterates entries from least to most recently used.
    pub fn iter_oldest_first(&self) -> impl Iterator<Item = &CacheEntry<K, V>> {
        let mut cursor = self.tail;
        std::iter::from_fn(move || {
            let node = self.nodes.get(cursor?)?.as_ref()?;
            cursor = node.prev;
            Some(&node.entry)
        })
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.free_list.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Detaches `idx` from its neighbours, fixing up head and tail.
    fn unlink(&mut self, idx: usize) {
        let (prev, next) = match &self.nodes[idx] {
            Some(node) => (node.prev, node.next),
            None => return,
        };

        match prev {
            Some(prev_idx) => {
                if let Some(prev_node) = &mut self.nodes[prev_idx] {
                    prev_node.next = next;
                }
            }
            None => self.head = next,
        }

        match next {
            Some(next_idx) => {
                if let Some(next_node) = &mut self.nodes[next_idx] {
                    next_node.prev = prev;
                }
            }
            None => self.tail = prev,
        }
    }

    fn alloc_slot(&mut self) -> usize {
        match self.free_list.pop() {
            Some(idx) => idx,
            None => {
                self.nodes.push(None);
                self.nodes.len() - 1
            }
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn list(keys: &[&'static str]) -> (LruList<&'static str, usize>, Vec<usize>) {
        let mut lru = LruList::new();
        let slots = keys
            .iter()
            .enumerate()
            .map(|(i, key)| lru.push_front(CacheEntry::new(*key, i)))
            .collect();
        (lru, slots)
    }

    fn keys_oldest_first(lru: &LruList<&'static str, usize>) -> Vec<&'static str> {
        lru.iter_oldest_first().map(|entry| entry.key).collect()
    }

    #[test]
    fn test_lru_new() {
        let lru: LruList<String, u32> = LruList::new();
        assert!(lru.is_empty());
        assert_eq!(lru.len(), 0);
        assert_eq!(lru.iter_oldest_first().count(), 0);
    }

    #[test]
    fn test_lru_push_front_order() {
        let (lru, _) = list(&["a", "b", "c"]);
        assert_eq!(lru.len(), 3);
        assert_eq!(keys_oldest_first(&lru), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_lru_move_to_front() {
        let (mut lru, slots) = list(&["a", "b", "c"]);

        lru.move_to_front(slots[0]);
        assert_eq!(keys_oldest_first(&lru), vec!["b", "c", "a"]);

        // Already most recent
        lru.move_to_front(slots[0]);
        assert_eq!(keys_oldest_first(&lru), vec!["b", "c", "a"]);

        // Middle node
        lru.move_to_front(slots[2]);
        assert_eq!(keys_oldest_first(&lru), vec!["b", "a", "c"]);
        assert_eq!(lru.len(), 3);
    }

    #[test]
    fn test_lru_pop_back() {
        let (mut lru, slots) = list(&["a", "b", "c"]);
        lru.move_to_front(slots[0]);

        assert_eq!(lru.pop_back().map(|e| e.key), Some("b"));
        assert_eq!(lru.pop_back().map(|e| e.key), Some("c"));
        assert_eq!(lru.pop_back().map(|e| e.key), Some("a"));
        assert_eq!(lru.pop_back(), None);
        assert!(lru.is_empty());
    }

    #[test]
    fn test_lru_slot_reuse() {
        let (mut lru, _) = list(&["a", "b"]);

        let evicted = lru.pop_back().unwrap();
        let slot = lru.push_front(CacheEntry::new("c", 2));

        assert_eq!(evicted.key, "a");
        assert_eq!(lru.get(slot).map(|e| e.key), Some("c"));
        assert_eq!(keys_oldest_first(&lru), vec!["b", "c"]);
        assert_eq!(lru.len(), 2);
    }

    #[test]
    fn test_lru_get_mut_and_stale_slot() {
        let (mut lru, slots) = list(&["a"]);

        if let Some(entry) = lru.get_mut(slots[0]) {
            entry.replace(99);
        }
        assert_eq!(lru.get(slots[0]).map(|e| e.value), Some(99));
        assert!(lru.get(42).is_none());

        lru.pop_back();
        assert!(lru.get(slots[0]).is_none());
        lru.move_to_front(slots[0]);
        assert!(lru.is_empty());
    }

    #[test]
    fn test_lru_clear() {
        let (mut lru, _) = list(&["a", "b"]);
        lru.clear();
        assert!(lru.is_empty());
        assert_eq!(lru.pop_back(), None);

        lru.push_front(CacheEntry::new("c", 0));
        assert_eq!(keys_oldest_first(&lru), vec!["c"]);
    }
}
