/// Receives progress updates from a collection run.
///
/// Both callbacks default to doing nothing; `()` is the silent sink.
pub trait Progress {
    /// Called after each match id page with the ids received so far.
    fn ids_listed(&mut self, _fetched: usize, _total: usize) {}

    /// Called after each match record is stored.
    fn match_fetched(&mut self, _fetched: usize, _total: usize) {}
}

impl Progress for () {}
