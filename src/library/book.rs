prelude! {}

/// A catalog entry, always written by exactly one [`Author`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Book {
    space: IdSpace,
    id: Id,
    title: String,
    genre: String,
    year: i32,
    author: Author,
}

impl HasId for Book {
    fn id(&self) -> Id {
        self.id
    }
}

impl Book {
    pub(crate) fn new(
        space: IdSpace,
        id: Id,
        title: impl Into<String>,
        genre: impl Into<String>,
        year: i32,
        author: Author,
    ) -> Self {
        Self {
            space,
            id,
            title: title.into(),
            genre: genre.into(),
            year,
            author,
        }
    }

    #[inline]
    pub fn id(&self) -> Id {
        self.id
    }
    #[inline]
    pub fn title(&self) -> &str {
        &self.title
    }
    #[inline]
    pub fn genre(&self) -> &str {
        &self.genre
    }
    #[inline]
    pub fn year(&self) -> i32 {
        self.year
    }
    #[inline]
    pub fn author(&self) -> &Author {
        &self.author
    }
    pub fn author_id(&self) -> Id {
        self.author.id()
    }

    /// True if both were created by the same [`Library::new_book`] call.
    ///
    /// Books from different libraries may share an [`Id`], they are still different books.
    pub fn is_same(&self, other: &Self) -> bool {
        self.space == other.space && self.id == other.id
    }
}

impl Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "`{}` ({}, {}) by {}",
            self.title, self.genre, self.year, self.author
        )
    }
}
