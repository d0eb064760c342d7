use crate::config::BufferConfig;
use crate::cursor::Cursor;

/// 分块追加的可增长缓冲区。
///
/// 元素按插入顺序存放在一组容量递增的分块中，追加时不会搬移已写入的元素，
/// 只有[`SpinedBuffer::into_vec`]会做一次整体搬移，因此总代价为O(n)。
#[derive(Clone)]
pub struct SpinedBuffer<E> {
    config: BufferConfig,
    chunks: Vec<Vec<E>>,
    len: usize,
}

impl<E> Default for SpinedBuffer<E> {
    fn default() -> Self {
        SpinedBuffer::new()
    }
}

impl<E> SpinedBuffer<E> {
    pub fn new() -> Self {
        SpinedBuffer::with_config(BufferConfig::default())
    }

    pub fn with_config(config: BufferConfig) -> Self {
        SpinedBuffer { config, chunks: Vec::new(), len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// 当前所有已分配分块的总容量。
    pub fn capacity(&self) -> usize {
        self.chunks.iter().map(Vec::capacity).sum()
    }

    pub fn push(&mut self, value: E) {
        if self.chunks.last().is_none_or(|chunk| chunk.len() == chunk.capacity()) {
            self.grow();
        }
        if let Some(chunk) = self.chunks.last_mut() {
            chunk.push(value);
            self.len += 1;
        }
    }

    fn grow(&mut self) {
        let index = self.chunks.len();
        let capacity = self.config.chunk_capacity(index);
        #[cfg(feature = "tracing")]
        tracing::trace!(chunk = index, capacity, len = self.len, "spined buffer grows");
        self.chunks.push(Vec::with_capacity(capacity));
    }

    /// 按插入顺序读取第`index`个元素。
    pub fn get(&self, mut index: usize) -> Option<&E> {
        if index >= self.len {
            return None;
        }
        for chunk in &self.chunks {
            if index < chunk.len() {
                return chunk.get(index);
            }
            index -= chunk.len();
        }
        None
    }

    pub fn iter(&self) -> impl Iterator<Item = &E> {
        self.chunks.iter().flatten()
    }

    /// 拉取游标直到耗尽，全部追加到缓冲区。
    pub fn drain_cursor<C>(&mut self, cursor: &mut C)
    where
        C: Cursor<Item = E> + ?Sized,
    {
        while let Some(value) = cursor.pull() {
            self.push(value);
        }
    }

    /// 展平为连续数组。
    pub fn into_vec(self) -> Vec<E> {
        let mut flat = Vec::with_capacity(self.len);
        for chunk in self.chunks {
            flat.extend(chunk);
        }
        flat
    }
}

impl<E> Extend<E> for SpinedBuffer<E> {
    fn extend<T: IntoIterator<Item = E>>(&mut self, iter: T) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<E> FromIterator<E> for SpinedBuffer<E> {
    fn from_iter<T: IntoIterator<Item = E>>(iter: T) -> Self {
        let mut buffer = SpinedBuffer::new();
        buffer.extend(iter);
        buffer
    }
}

impl<E> IntoIterator for SpinedBuffer<E> {
    type Item = E;
    type IntoIter = std::iter::Flatten<std::vec::IntoIter<Vec<E>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.chunks.into_iter().flatten()
    }
}

impl<E: std::fmt::Debug> std::fmt::Debug for SpinedBuffer<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_keeps_insertion_order() {
        let mut buffer = SpinedBuffer::new();
        for i in 0..100 {
            buffer.push(i);
        }
        assert_eq!(buffer.len(), 100);
        assert_eq!(buffer.iter().copied().collect::<Vec<_>>(), (0..100).collect::<Vec<_>>());
        assert_eq!(buffer.into_vec(), (0..100).collect::<Vec<_>>());
    }

    #[test]
    fn test_chunks_grow_without_moving() {
        let mut buffer = SpinedBuffer::new();
        buffer.extend(0..16);
        assert_eq!(buffer.chunk_count(), 1);
        let first = buffer.get(0).map(|v| v as *const i32);
        buffer.extend(16..17);
        assert_eq!(buffer.chunk_count(), 2);
        buffer.extend(17..33);
        assert_eq!(buffer.chunk_count(), 3);
        assert_eq!(buffer.capacity(), 16 + 16 + 32);
        assert_eq!(buffer.get(0).map(|v| v as *const i32), first);
    }

    #[test]
    fn test_get() {
        let mut buffer = SpinedBuffer::with_config(BufferConfig::new(1, 2).unwrap());
        buffer.extend(10..20);
        assert_eq!(buffer.get(0), Some(&10));
        assert_eq!(buffer.get(2), Some(&12));
        assert_eq!(buffer.get(9), Some(&19));
        assert_eq!(buffer.get(10), None);
    }

    #[test]
    fn test_empty() {
        let buffer: SpinedBuffer<String> = SpinedBuffer::new();
        assert!(buffer.is_empty());
        assert_eq!(buffer.chunk_count(), 0);
        assert_eq!(buffer.into_vec(), Vec::<String>::new());
    }

    #[test]
    fn test_into_iter_and_debug() {
        let buffer: SpinedBuffer<_> = (1..=5).collect();
        assert_eq!(format!("{buffer:?}"), "[1, 2, 3, 4, 5]");
        assert_eq!(buffer.into_iter().rev().collect::<Vec<_>>(), vec![5, 4, 3, 2, 1]);
    }
}
