prelude! {}

/// A book author.
///
/// Authors are created by [`Library::new_author`], which allocates their [`Id`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Author {
    space: IdSpace,
    id: Id,
    name: String,
}

impl HasId for Author {
    fn id(&self) -> Id {
        self.id
    }
}

impl Author {
    pub(crate) fn new(space: IdSpace, id: Id, name: impl Into<String>) -> Self {
        Self {
            space,
            id,
            name: name.into(),
        }
    }

    #[inline]
    pub fn id(&self) -> Id {
        self.id
    }
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// True if both were created by the same [`Library::new_author`] call.
    pub fn is_same(&self, other: &Self) -> bool {
        self.space == other.space && self.id == other.id
    }
}

impl Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} #{}", self.name, self.id)
    }
}
