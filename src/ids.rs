//! Sequential identifiers.
//!
//! Each aggregate root owns one [`IdGen`] per entity kind, so two libraries (or two test cases)
//! never share a counter. Numbers restart at `1` in each generator, entity identity is the pair of
//! the generator's [`IdSpace`] and the [`Id`].

use std::sync::atomic::{AtomicU64, Ordering};

prelude! {}

/// A sequential identifier, the first one handed out by an [`IdGen`] is `1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Id(u64);

impl Id {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }
    pub fn get(self) -> u64 {
        self.0
    }
}
impl From<u64> for Id {
    fn from(id: u64) -> Self {
        Self(id)
    }
}
impl Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Tags the ids handed out by one [`IdGen`], no two generators share a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IdSpace(u64);

impl IdSpace {
    fn fresh() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(0);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// Hands out increasing [`Id`]s, never reusing one.
///
/// Not `Clone`: a copy would hand out the same ids in the same [`IdSpace`].
///
/// ```rust
/// # records_rs::prelude! {}
/// let mut ids = IdGen::new();
/// assert_eq!(ids.next_id(), Id::new(1));
/// assert_eq!(ids.next_id(), Id::new(2));
/// assert_eq!(ids.peek(), Id::new(3));
/// ```
#[derive(Debug)]
pub struct IdGen {
    space: IdSpace,
    next: u64,
}

impl Default for IdGen {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGen {
    pub fn new() -> Self {
        Self::starting_at(1)
    }
    /// Generator whose first id is `first`, for resuming an existing numbering.
    pub fn starting_at(first: u64) -> Self {
        Self {
            space: IdSpace::fresh(),
            next: first,
        }
    }

    #[inline]
    pub fn space(&self) -> IdSpace {
        self.space
    }

    /// The id the next call to [`Self::next_id`] returns.
    pub fn peek(&self) -> Id {
        Id(self.next)
    }

    pub fn next_id(&mut self) -> Id {
        let id = Id(self.next);
        self.next += 1;
        id
    }
}
