use crossbeam_queue::ArrayQueue;

/// Bounded pool of reusable values.
///
/// `get` never blocks: an empty pool hands out a fresh default value, and
/// `put` on a full pool evicts the oldest entry.
pub struct Pool<T: Default> {
    pool: ArrayQueue<T>,
}

impl<T: Default> Pool<T> {
    /// `size` must be non-zero.
    pub fn new(size: usize) -> Self { Self { pool: ArrayQueue::new(size) } }

    pub fn get(&self) -> T { self.pool.pop().unwrap_or_default() }

    pub fn put(&self, value: T) { self.pool.force_push(value); }

    pub fn len(&self) -> usize { self.pool.len() }

    pub fn is_empty(&self) -> bool { self.pool.is_empty() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_from_empty_pool() {
        let pool = Pool::<Vec<u8>>::new(2);
        assert!(pool.is_empty());
        assert!(pool.get().is_empty());
    }

    #[test]
    fn test_reuse() {
        let pool = Pool::<Vec<u8>>::new(2);
        pool.put(vec![1, 2, 3]);
        assert_eq!(pool.len(), 1);
        assert_eq!(pool.get(), vec![1, 2, 3]);
        assert!(pool.is_empty());
    }

    #[test]
    fn test_overflow_evicts_oldest() {
        let pool = Pool::<Vec<u8>>::new(2);
        pool.put(vec![1]);
        pool.put(vec![2]);
        pool.put(vec![3]);
        assert_eq!(pool.len(), 2);
        assert_eq!(pool.get(), vec![2]);
        assert_eq!(pool.get(), vec![3]);
    }
}
