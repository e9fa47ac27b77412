//! Library catalog.
//!
//! The aggregate root is [`Library`]. It owns the id generators for [`Author`]s and [`Book`]s, so
//! entities should be created through [`Library::new_author`] and [`Library::new_book`] before
//! being [added](Library::add_book).
//!
//! ```rust
//! # records_rs::prelude! {}
//! let mut lib = Library::new("City Library", 100);
//! let rowling = lib.new_author("J.K. Rowling");
//! let hp = lib.new_book("Harry Potter", "Fantasy", 1997, &rowling);
//! lib.add_book(hp).expect("library has room");
//!
//! let found = lib.books_by_author("j.k. rowling");
//! assert_eq!(found.len(), 1);
//! assert_eq!(found[0].title(), "Harry Potter");
//! ```

prelude! {}

pub mod author;
pub mod book;
pub mod search;

pub use author::Author;
pub use book::Book;
pub use search::{Criteria, Matcher};

/// Identifies an author either by id or by name.
///
/// Name comparison is case-insensitive but otherwise exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorKey<'a> {
    Id(Id),
    Name(&'a str),
}
impl From<Id> for AuthorKey<'_> {
    fn from(id: Id) -> Self {
        Self::Id(id)
    }
}
impl<'a> From<&'a str> for AuthorKey<'a> {
    fn from(name: &'a str) -> Self {
        Self::Name(name)
    }
}
impl<'a> From<&'a String> for AuthorKey<'a> {
    fn from(name: &'a String) -> Self {
        Self::Name(name)
    }
}
impl AuthorKey<'_> {
    pub fn matches(self, author: &Author) -> bool {
        match self {
            Self::Id(id) => author.id() == id,
            Self::Name(name) => eq_upper(author.name(), name),
        }
    }
}

/// A bounded book catalog.
///
/// # Invariants
///
/// - `self.books.len() <= self.max_books`;
/// - no book appears twice in `self.books`, see [`Book::is_same`];
/// - `self.authors[i]` is the author of `self.books[i]`, authors are not deduplicated.
#[derive(Debug)]
pub struct Library {
    name: String,
    max_books: usize,
    books: Vec<Book>,
    authors: Vec<Author>,
    author_ids: IdGen,
    book_ids: IdGen,
}

impl Library {
    /// Constructor.
    pub fn new(name: impl Into<String>, max_books: usize) -> Self {
        Self::with_ids(name, max_books, IdGen::new(), IdGen::new())
    }

    /// Constructor with explicit id generators.
    pub fn with_ids(
        name: impl Into<String>,
        max_books: usize,
        author_ids: IdGen,
        book_ids: IdGen,
    ) -> Self {
        Self {
            name: name.into(),
            max_books,
            books: Vec::with_capacity(max_books.min(64)),
            authors: Vec::with_capacity(max_books.min(64)),
            author_ids,
            book_ids,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn max_books(&self) -> usize {
        self.max_books
    }
    pub fn len(&self) -> usize {
        self.books.len()
    }
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
    pub fn is_full(&self) -> bool {
        self.books.len() >= self.max_books
    }

    /// Creates an author with a fresh id.
    ///
    /// The author is not registered: authors enter the catalog with their books.
    pub fn new_author(&mut self, name: impl Into<String>) -> Author {
        let id = self.author_ids.next_id();
        Author::new(self.author_ids.space(), id, name)
    }

    /// Creates a book with a fresh id.
    pub fn new_book(
        &mut self,
        title: impl Into<String>,
        genre: impl Into<String>,
        year: i32,
        author: &Author,
    ) -> Book {
        let id = self.book_ids.next_id();
        Book::new(self.book_ids.space(), id, title, genre, year, author.clone())
    }

    /// Adds a book and its author to the catalog.
    ///
    /// Fails if the book is already in the catalog, or if the catalog is full. The catalog is left
    /// untouched on failure. A book created by another library is not a duplicate, even if its id
    /// is already used here.
    pub fn add_book(&mut self, book: Book) -> Res<()> {
        if self.books.iter().any(|b| b.is_same(&book)) {
            log::warn!("rejecting book {} in `{}`: duplicate", book, self.name);
            bail!(@lib @redef("book") book.title())
        }
        if self.is_full() {
            log::warn!("rejecting book {} in `{}`: library full", book, self.name);
            return Err(error!(@lib @full(format!("library `{}`", self.name)) self.max_books)
                .with_context(format!("while adding book `{}`", book.title())));
        }
        log::debug!("adding book {} to `{}`", book, self.name);
        self.authors.push(book.author().clone());
        self.books.push(book);
        Ok(())
    }

    /// Books in insertion order.
    pub fn books(&self) -> &[Book] {
        &self.books
    }
    /// Authors of the books in insertion order, one entry per book.
    pub fn authors(&self) -> &[Author] {
        &self.authors
    }

    pub fn book_by_id(&self, id: Id) -> Option<&Book> {
        find_id(&self.books, id)
    }
    pub fn author_by_id(&self, id: Id) -> Option<&Author> {
        find_id(&self.authors, id)
    }

    /// Books written by some author, see [`AuthorKey`].
    pub fn books_by_author<'a>(&self, author: impl Into<AuthorKey<'a>>) -> Vec<&Book> {
        let key = author.into();
        self.books
            .iter()
            .filter(|book| key.matches(book.author()))
            .collect()
    }

    /// Author of a book in the catalog.
    ///
    /// Fails if there is no book with this id.
    pub fn author_by_book_id(&self, id: Id) -> Res<&Author> {
        let book = self
            .book_by_id(id)
            .ok_or_else(|| error!(@lib @unknown("book") id.to_string()))
            .context(|| "book not found")?;
        Ok(book.author())
    }

    /// Books matching **any** of the fields set in `criteria`.
    ///
    /// ```rust
    /// # records_rs::prelude! {}
    /// let mut lib = Library::new("City Library", 100);
    /// let rowling = lib.new_author("J.K. Rowling");
    /// let martin = lib.new_author("George R.R. Martin");
    /// for book in [
    ///     lib.new_book("Harry Potter", "Fantasy", 1997, &rowling),
    ///     lib.new_book("Game of Thrones", "Fantasy", 1996, &martin),
    ///     lib.new_book("A Clash of Kings", "War", 1998, &martin),
    /// ] {
    ///     lib.add_book(book).unwrap();
    /// }
    ///
    /// let criteria = Criteria::new().title("Harry").genre("Fantasy");
    /// let titles: Vec<_> = lib.search(&criteria).unwrap()
    ///     .into_iter()
    ///     .map(|book| book.title())
    ///     .collect();
    /// assert_eq!(titles, ["Harry Potter", "Game of Thrones"]);
    /// ```
    pub fn search(&self, criteria: &Criteria) -> Res<Vec<&Book>> {
        let matcher = criteria
            .compile()
            .context(|| format!("searching library `{}`", self.name))?;
        Ok(self
            .books
            .iter()
            .filter(|book| matcher.is_match(book))
            .collect())
    }

    pub fn to_pretty_string(&self) -> String {
        let mut res = format!(
            "- {} [{}/{} books]",
            self.name,
            self.books.len(),
            self.max_books
        );
        for book in &self.books {
            res.push_str(&format!("\n  book #{} {}", book.id(), book));
        }
        if !self.authors.is_empty() {
            let authors = self.authors.iter().show_iter_cs(|a| a.to_string());
            res.push_str(&format!("\n  authors: {}", authors));
        }
        res
    }
}

#[cfg(test)]
mod tests {
    prelude! {}

    /// The catalog used throughout these tests, returns the ids of the two authors.
    fn city_library() -> (Library, Id, Id) {
        let mut lib = Library::new("City Library", 100);
        let rowling = lib.new_author("J.K. Rowling");
        let hp = lib.new_book("Harry Potter", "Fantasy", 1997, &rowling);
        lib.add_book(hp).unwrap();
        let martin = lib.new_author("George R.R. Martin");
        let got = lib.new_book("Game of Thrones", "Fantasy", 1996, &martin);
        lib.add_book(got).unwrap();
        let cok = lib.new_book("A Clash of Kings", "War", 1998, &martin);
        lib.add_book(cok).unwrap();
        (lib, rowling.id(), martin.id())
    }

    fn titles(books: Vec<&Book>) -> Vec<&str> {
        books.into_iter().map(|b| b.title()).collect()
    }

    #[test]
    fn sequential_ids() {
        let (lib, rowling, martin) = city_library();
        assert_eq!(rowling, Id::new(1));
        assert_eq!(martin, Id::new(2));
        let ids: Vec<u64> = lib.books().iter().map(|b| b.id().get()).collect();
        assert_eq!(ids, [1, 2, 3]);
    }

    #[test]
    fn authors_are_not_deduplicated() {
        let (lib, rowling, martin) = city_library();
        let ids: Vec<Id> = lib.authors().iter().map(|a| a.id()).collect();
        assert_eq!(ids, [rowling, martin, martin]);
    }

    #[test]
    fn duplicate_book() {
        let mut lib = Library::new("Small", 10);
        let author = lib.new_author("Ursula K. Le Guin");
        let book = lib.new_book("The Dispossessed", "SciFi", 1974, &author);
        lib.add_book(book.clone()).unwrap();
        let err = lib.add_book(book).unwrap_err();
        assert!(err.is_library());
        assert_eq!(lib.len(), 1);
        assert_eq!(lib.authors().len(), 1);
    }

    #[test]
    fn same_id_from_another_library() {
        let mut city = Library::new("City", 10);
        let rowling = city.new_author("J.K. Rowling");
        let hp = city.new_book("Harry Potter", "Fantasy", 1997, &rowling);

        let mut branch = Library::new("Branch", 10);
        let martin = branch.new_author("George R.R. Martin");
        let got = branch.new_book("Game of Thrones", "Fantasy", 1996, &martin);
        assert_eq!(hp.id(), got.id());
        assert_eq!(rowling.id(), martin.id());
        assert!(!hp.is_same(&got));
        assert!(!rowling.is_same(&martin));

        branch.add_book(got).unwrap();
        branch.add_book(hp.clone()).unwrap();
        assert_eq!(branch.len(), 2);
        assert!(branch.add_book(hp).unwrap_err().is_library());

        let hp = &branch.books()[1];
        assert_eq!(hp.title(), "Harry Potter");
        let author = branch.books()[1].author();
        assert!(author.is_same(&rowling));
        // by-id lookups return the first match
        assert_eq!(branch.author_by_book_id(Id::new(1)).unwrap().name(), "George R.R. Martin");
        assert_eq!(branch.authors()[1].name(), "J.K. Rowling");
    }

    #[test]
    fn author_of_book_is_the_book_author() {
        let mut lib = Library::new("Branch", 10);
        let martin = lib.new_author("George R.R. Martin");
        let got = lib.new_book("Game of Thrones", "Fantasy", 1996, &martin);
        lib.add_book(got).unwrap();

        let mut other = Library::new("Other", 10);
        let rowling = other.new_author("J.K. Rowling");
        let hp = lib.new_book("Harry Potter", "Fantasy", 1997, &rowling);
        let hp_id = hp.id();
        lib.add_book(hp).unwrap();

        let author = lib.author_by_book_id(hp_id).unwrap();
        assert_eq!(author.name(), "J.K. Rowling");
        assert!(author.is_same(&rowling));
    }

    #[test]
    fn full_library() {
        let mut lib = Library::new("Tiny", 1);
        let author = lib.new_author("Italo Calvino");
        let b1 = lib.new_book("Invisible Cities", "Novel", 1972, &author);
        let b2 = lib.new_book("The Baron in the Trees", "Novel", 1957, &author);
        lib.add_book(b1).unwrap();
        assert!(lib.is_full());
        let err = lib.add_book(b2).unwrap_err();
        assert!(err.is_library());
        assert_eq!(lib.len(), 1);
        assert_eq!(lib.authors().len(), 1);
    }

    #[test]
    fn zero_capacity() {
        let mut lib = Library::new("Closed", 0);
        let author = lib.new_author("Nobody");
        let book = lib.new_book("Nothing", "None", 2000, &author);
        assert!(lib.add_book(book).unwrap_err().is_library());
        assert!(lib.is_empty());
    }

    #[test]
    fn lookups() {
        let (lib, rowling, martin) = city_library();
        assert_eq!(lib.book_by_id(Id::new(2)).unwrap().title(), "Game of Thrones");
        assert!(lib.book_by_id(Id::new(42)).is_none());
        assert_eq!(lib.author_by_id(martin).unwrap().name(), "George R.R. Martin");
        assert!(lib.author_by_id(Id::new(42)).is_none());
        assert_eq!(lib.author_by_book_id(Id::new(1)).unwrap().id(), rowling);
        let err = lib.author_by_book_id(Id::new(42)).unwrap_err();
        assert!(err.is_library());
        assert!(err.to_string().contains("book not found"));
    }

    #[test]
    fn books_by_author() {
        let (lib, rowling, martin) = city_library();
        assert_eq!(titles(lib.books_by_author(rowling)), ["Harry Potter"]);
        assert_eq!(
            titles(lib.books_by_author(martin)),
            ["Game of Thrones", "A Clash of Kings"]
        );
        assert_eq!(titles(lib.books_by_author("j.k. rowling")), ["Harry Potter"]);
        // exact match, not containment
        assert!(lib.books_by_author("rowling").is_empty());
        assert!(lib.books_by_author(Id::new(42)).is_empty());
    }

    #[test]
    fn search_title() {
        let (lib, _, _) = city_library();
        let found = lib.search(&Criteria::new().title("Harry")).unwrap();
        assert_eq!(titles(found), ["Harry Potter"]);
    }

    #[test]
    fn search_is_a_disjunction() {
        let (lib, _, _) = city_library();
        let found = lib
            .search(&Criteria::new().title("harry").genre("fantasy"))
            .unwrap();
        assert_eq!(titles(found), ["Harry Potter", "Game of Thrones"]);

        let found = lib
            .search(&Criteria::new().title("Harry").genre("Fantasy"))
            .unwrap();
        assert_eq!(titles(found), ["Harry Potter", "Game of Thrones"]);
    }

    #[test]
    fn search_year_and_author() {
        let (lib, _, _) = city_library();
        let found = lib.search(&Criteria::new().year(1998)).unwrap();
        assert_eq!(titles(found), ["A Clash of Kings"]);
        let found = lib.search(&Criteria::new().author_name("martin")).unwrap();
        assert_eq!(titles(found), ["Game of Thrones", "A Clash of Kings"]);
        assert!(lib.search(&Criteria::new()).unwrap().is_empty());
    }

    #[test]
    fn injected_ids() {
        let mut lib = Library::with_ids("Branch", 5, IdGen::starting_at(10), IdGen::new());
        let author = lib.new_author("Jorge Luis Borges");
        let book = lib.new_book("Ficciones", "Short stories", 1944, &author);
        assert_eq!(author.id(), Id::new(10));
        assert_eq!(book.id(), Id::new(1));
        assert_eq!(book.author_id(), author.id());
    }

    #[test]
    fn pretty_string() {
        let (lib, _, _) = city_library();
        let pretty = lib.to_pretty_string();
        let mut lines = pretty.lines();
        assert_eq!(lines.next(), Some("- City Library [3/100 books]"));
        assert_eq!(
            lines.next(),
            Some("  book #1 `Harry Potter` (Fantasy, 1997) by J.K. Rowling #1")
        );
        assert_eq!(lines.last().map(|l| l.starts_with("  authors: J.K. Rowling #1")), Some(true));
    }
}
