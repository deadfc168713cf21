use crate::page::Page;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

/// Cumulative cache counters.
///
/// `built` counts successful page materializations (failed builds are never
/// inserted and therefore never counted here).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub built: u64,
    pub evicted: u64,
}

/// Bounded page_index -> page map.
///
/// Eviction removes the lowest page index currently cached, not the least
/// recently used entry. This mirrors the reference behavior and is kept
/// deliberately: recency tracking is out of scope, and the ordered map makes
/// the policy visible (the victim is always `pages.pop_first()`).
#[derive(Debug)]
pub(crate) struct PageCache {
    pages: BTreeMap<usize, Arc<Page>>,
    capacity: usize,
    stats: CacheStats,
}

impl PageCache {
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            pages: BTreeMap::new(),
            capacity: capacity.max(1),
            stats: CacheStats::default(),
        }
    }

    pub(crate) fn get(&mut self, page_index: usize) -> Option<Arc<Page>> {
        match self.pages.get(&page_index) {
            Some(page) => {
                self.stats.hits += 1;
                Some(Arc::clone(page))
            }
            None => {
                self.stats.misses += 1;
                None
            }
        }
    }

    /// Insert a freshly built page, evicting the lowest-indexed entries while
    /// over capacity. The inserted page may itself be the victim; callers
    /// hold their own `Arc`, so the returned page stays usable either way.
    pub(crate) fn insert(&mut self, page_index: usize, page: Arc<Page>) {
        self.pages.insert(page_index, page);
        self.stats.built += 1;
        while self.pages.len() > self.capacity {
            if let Some((evicted, _)) = self.pages.pop_first() {
                self.stats.evicted += 1;
                debug!(page = evicted, "evicted table page");
            }
        }
    }

    /// Drop every cached page. Counters survive; pages do not.
    pub(crate) fn invalidate(&mut self) {
        if !self.pages.is_empty() {
            debug!(pages = self.pages.len(), "invalidated page cache");
        }
        self.pages.clear();
    }

    pub(crate) fn len(&self) -> usize {
        self.pages.len()
    }

    pub(crate) fn stats(&self) -> CacheStats {
        self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn page(index: usize) -> Arc<Page> {
        Arc::new(Page::new(index, 0, Vec::new()))
    }

    #[test]
    fn evicts_the_lowest_page_index() {
        let mut cache = PageCache::new(2);
        cache.insert(5, page(5));
        cache.insert(3, page(3));
        cache.insert(9, page(9));

        assert_eq!(cache.len(), 2);
        // 3 was the lowest index, so it went first even though it was the
        // most recently inserted before 9.
        assert!(cache.get(3).is_none());
        assert!(cache.get(5).is_some());
        assert!(cache.get(9).is_some());
        assert_eq!(cache.stats().evicted, 1);
    }

    #[test]
    fn counters_track_hits_misses_and_builds() {
        let mut cache = PageCache::new(4);
        assert!(cache.get(0).is_none());
        cache.insert(0, page(0));
        assert!(cache.get(0).is_some());

        let stats = cache.stats();
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.built, 1);
        assert_eq!(stats.evicted, 0);
    }

    #[test]
    fn invalidate_clears_pages_but_keeps_counters() {
        let mut cache = PageCache::new(4);
        cache.insert(0, page(0));
        cache.insert(1, page(1));
        cache.invalidate();

        assert_eq!(cache.len(), 0);
        assert!(cache.get(0).is_none());
        assert_eq!(cache.stats().built, 2);
    }
}
