//! Book search criteria.
//!
//! A [`Criteria`] is a partial record: any subset of its fields can be set. A book matches when
//! **at least one** of the fields that were set matches, this is a flat disjunction and not a
//! per-field conjunction. Textual fields match by case-insensitive substring containment, the year
//! matches by equality.

prelude! {
    regex::Regex,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Criteria {
    pub title: Option<String>,
    pub genre: Option<String>,
    pub year: Option<i32>,
    pub author_name: Option<String>,
}

impl Criteria {
    /// Empty criteria, matches nothing.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
    pub fn genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }
    pub fn year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }
    pub fn author_name(mut self, name: impl Into<String>) -> Self {
        self.author_name = Some(name.into());
        self
    }

    /// True if no field is set.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.genre.is_none()
            && self.year.is_none()
            && self.author_name.is_none()
    }

    /// Builds the matchers for the textual fields.
    pub fn compile(&self) -> Res<Matcher> {
        let opt = |s: &Option<String>| s.as_ref().map(|s| ci_contains(s)).transpose();
        Ok(Matcher {
            title: opt(&self.title).context(|| "in `title` criterion")?,
            genre: opt(&self.genre).context(|| "in `genre` criterion")?,
            year: self.year,
            author_name: opt(&self.author_name).context(|| "in `author_name` criterion")?,
        })
    }
}

/// Compiled [`Criteria`].
#[derive(Debug, Clone)]
pub struct Matcher {
    title: Option<Regex>,
    genre: Option<Regex>,
    year: Option<i32>,
    author_name: Option<Regex>,
}

impl Matcher {
    pub fn is_match(&self, book: &Book) -> bool {
        let text = |re: &Option<Regex>, s: &str| re.as_ref().map_or(false, |re| re.is_match(s));
        text(&self.title, book.title())
            || text(&self.genre, book.genre())
            || self.year == Some(book.year())
            || text(&self.author_name, book.author().name())
    }
}

#[cfg(test)]
mod tests {
    prelude! {}

    fn book(title: &str, genre: &str, year: i32, author: &str) -> Book {
        let mut lib = Library::new("Search", 1);
        let author = lib.new_author(author);
        lib.new_book(title, genre, year, &author)
    }

    #[test]
    fn empty_matches_nothing() {
        let criteria = Criteria::new();
        assert!(criteria.is_empty());
        let matcher = criteria.compile().unwrap();
        assert!(!matcher.is_match(&book("Dune", "SciFi", 1965, "Frank Herbert")));
    }

    #[test]
    fn any_field_is_enough() {
        let b = book("Dune", "SciFi", 1965, "Frank Herbert");
        let matcher = Criteria::new()
            .title("nope")
            .genre("nope")
            .author_name("herb")
            .compile()
            .unwrap();
        assert!(matcher.is_match(&b));

        let matcher = Criteria::new().title("nope").year(1965).compile().unwrap();
        assert!(matcher.is_match(&b));

        let matcher = Criteria::new().title("nope").year(1966).compile().unwrap();
        assert!(!matcher.is_match(&b));
    }

    #[test]
    fn textual_fields_ignore_case() {
        let b = book("Harry Potter", "Fantasy", 1997, "J.K. Rowling");
        assert!(Criteria::new().title("hARRY").compile().unwrap().is_match(&b));
        assert!(Criteria::new().genre("tas").compile().unwrap().is_match(&b));
        assert!(Criteria::new()
            .author_name("j.k.")
            .compile()
            .unwrap()
            .is_match(&b));
    }
}
