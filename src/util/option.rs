pub(crate) trait OptionExtension<T> {
    /// Acts similarly to [`Option::unwrap`], but marks the [`None`] branch as a broken internal
    /// invariant of a collection rather than a recoverable failure.
    ///
    /// Links are only ever rewired by the owning container, which keeps every attached node linked
    /// in both directions. No panics doc is provided: reaching the panic is a bug in this crate,
    /// not a misuse by the caller.
    fn invariant(self) -> T;
}

impl<T> OptionExtension<T> for Option<T> {
    #[track_caller]
    fn invariant(self) -> T {
        match self {
            Some(val) => val,
            None => unreachable!("linked collection invariant violated"),
        }
    }
}
