use std::fmt::{self, Debug, Display, Formatter};

/// Displays every item yielded by a cloneable iterator, separated by a single space and without a
/// trailing separator. Each call to `fmt` renders from a fresh clone of the iterator.
pub struct SpaceSeparated<I>(pub I);

impl<I> SpaceSeparated<I> {
    pub const fn new(iter: I) -> SpaceSeparated<I> {
        SpaceSeparated(iter)
    }
}

impl<I> Display for SpaceSeparated<I>
where
    I: Iterator + Clone,
    I::Item: Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut iter = self.0.clone();

        if let Some(first) = iter.next() {
            write!(f, "{first}")?;
            for item in iter {
                write!(f, " {item}")?;
            }
        }
        Ok(())
    }
}

/// Debugs a cloneable iterator as a list of its items, for use as a field in a debug struct.
pub struct DebugEntries<I>(pub I);

impl<I> Debug for DebugEntries<I>
where
    I: Iterator + Clone,
    I::Item: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.clone()).finish()
    }
}
