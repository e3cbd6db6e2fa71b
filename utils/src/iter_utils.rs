use itertools::Itertools;

pub trait UtilsRunsIterExt<T>: Iterator<Item = T> {
    /// Splits the iterator into maximal runs of consecutive items sharing the
    /// same key. A key that reappears after a different one starts a new run.
    fn runs_by<K: PartialEq>(self, key: impl FnMut(&T) -> K) -> Vec<(K, Vec<T>)>;
}

impl<T, I: Iterator<Item = T>> UtilsRunsIterExt<T> for I {
    fn runs_by<K: PartialEq>(self, key: impl FnMut(&T) -> K) -> Vec<(K, Vec<T>)> {
        self.chunk_by(key)
            .into_iter()
            .map(|(key, run)| (key, run.collect_vec()))
            .collect_vec()
    }
}
