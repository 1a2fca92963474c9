/// Seam for work that waits on the filesystem. The desktop event loop runs
/// it inline; each call finishes before the next UI event is handled.
pub fn run_blocking<F, T>(f: F) -> T
where
    F: FnOnce() -> T,
{
    f()
}
