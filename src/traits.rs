prelude! {}

/// Entities carrying a sequential [`Id`].
pub trait HasId {
    fn id(&self) -> Id;
}

/// First element with identifier `id`.
pub fn find_id<'a, T>(elms: impl IntoIterator<Item = &'a T>, id: Id) -> Option<&'a T>
where
    T: HasId + 'a,
{
    elms.into_iter().find(|elm| elm.id() == id)
}
