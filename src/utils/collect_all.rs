/// Like `collect` into a `Result`, except every item is looked at so that all of the errors get reported instead of only the first one.
pub(crate) trait CollectAll<R, E> {
    fn collect_all<F: FromIterator<R>>(self) -> Result<F, Vec<E>>;
}

impl<R, E, I: Iterator<Item = Result<R, E>>> CollectAll<R, E> for I {
    fn collect_all<F: FromIterator<R>>(self) -> Result<F, Vec<E>> {
        let mut errors = Vec::new();
        let results: Vec<R> = self.filter_map(|item| item.map_err(|e| errors.push(e)).ok()).collect();

        if errors.is_empty() {
            Ok(results.into_iter().collect())
        } else {
            Err(errors)
        }
    }
}
