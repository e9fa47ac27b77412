//! Typed indices into the [`University`](super::University) arenas.
//!
//! An index is only meaningful for the university that produced it.

safe_index::new! {
    /// Course index.
    Course,
    /// Maps a [`Course`] to something.
    map: CourseMap,
}

safe_index::new! {
    /// Group index.
    Group,
    /// Maps a [`Group`] to something.
    map: GroupMap,
}

safe_index::new! {
    /// Person index, for students and teachers alike.
    Person,
    /// Maps a [`Person`] to something.
    map: PersonMap,
}
