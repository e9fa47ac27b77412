/// Imports this crate's prelude.
#[macro_export]
macro_rules! prelude {
    ($($imports:tt)*) => (
        use $crate::prelude::{*, $($imports)*};
    )
}

/// Defines a closed enumeration with a textual form.
///
/// Generates `Display`, an `ALL` constant listing the variants, and a `parse` function accepting
/// both the textual form and the variant name. Parse errors are tagged with the leading
/// `@lib`/`@uni` domain marker.
#[macro_export]
macro_rules! closed_enum {
    (
        @$tag:ident $desc:literal
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$var_meta:meta])*
                $variant:ident = $text:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        $vis enum $name {
            $(
                $(#[$var_meta])*
                $variant,
            )*
        }

        impl $name {
            /// All variants, in declaration order.
            pub const ALL: &'static [Self] = &[ $( Self::$variant, )* ];

            /// Textual form.
            pub fn as_str(self) -> &'static str {
                match self {
                    $( Self::$variant => $text, )*
                }
            }

            /// Parses the textual form or the variant name.
            pub fn parse(s: impl AsRef<str>) -> $crate::prelude::Res<Self> {
                let s = s.as_ref();
                $(
                    if s == $text || s == stringify!($variant) {
                        return Ok(Self::$variant);
                    }
                )*
                $crate::bail!(@$tag @unexpected($desc) s)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::Display::fmt(self.as_str(), fmt)
            }
        }
    };
}

pub use std::{
    fmt::{self, Display},
    mem,
};

pub use chrono;
pub use log;
pub use regex;
pub use smallvec::{smallvec, SmallVec};

#[macro_use]
pub mod res;

pub use crate::{
    bail, error,
    ids::{Id, IdGen, IdSpace},
    library::{self, Author, Book, Criteria, Library},
    prelude::res::{ErrorKind, Res, WithCtx},
    traits::*,
    university::{
        self, idx, Contact, Course, Discipline, Gender, Group, GroupCtx, Person, PersonInfo,
        RoleKind, Student, StudentStatus, Teacher, University,
    },
};

pub trait CollPrintExt: Sized {
    type Elm;
    fn show_iter<S>(self, show_elm: impl Fn(Self::Elm) -> S, sep: impl AsRef<str>) -> String
    where
        S: AsRef<str>;

    fn show_iter_cs<S>(self, show_elm: impl Fn(Self::Elm) -> S) -> String
    where
        S: AsRef<str>,
    {
        self.show_iter(show_elm, ", ")
    }
}
impl<T, E> CollPrintExt for T
where
    T: IntoIterator<Item = E>,
{
    type Elm = E;
    fn show_iter<S>(self, show_elm: impl Fn(Self::Elm) -> S, sep: impl AsRef<str>) -> String
    where
        S: AsRef<str>,
    {
        let sep = sep.as_ref();
        let mut s = String::new();
        for elm in self {
            if !s.is_empty() {
                s.push_str(sep);
            }
            s.push_str(show_elm(elm).as_ref())
        }
        s
    }
}

/// Case-insensitive matcher for a literal needle.
///
/// Special characters in the needle are escaped, so `"R.R."` only matches a literal `R.R.`.
pub fn ci_contains(needle: impl AsRef<str>) -> Res<regex::Regex> {
    let needle = needle.as_ref();
    regex::RegexBuilder::new(&regex::escape(needle))
        .case_insensitive(true)
        .build()
        .map_err(|e| error!("failed to build matcher for `{}`: {}", needle, e))
}

/// Exact comparison after uppercasing both sides.
pub fn eq_upper(lft: impl AsRef<str>, rgt: impl AsRef<str>) -> bool {
    lft.as_ref().to_uppercase() == rgt.as_ref().to_uppercase()
}

#[cfg(test)]
mod tests {
    prelude! {}

    #[test]
    fn show_iter_cs() {
        let s = ["a", "b", "c"].iter().show_iter_cs(|s| *s);
        assert_eq!(s, "a, b, c");
        let s = Vec::<&str>::new().into_iter().show_iter_cs(|s| s);
        assert_eq!(s, "");
    }

    #[test]
    fn ci_contains_escapes() {
        let re = ci_contains("r.r.").unwrap();
        assert!(re.is_match("George R.R. Martin"));
        assert!(!re.is_match("George RxRx Martin"));
    }

    #[test]
    fn eq_upper_is_exact() {
        assert!(eq_upper("j.k. rowling", "J.K. Rowling"));
        assert!(!eq_upper("rowling", "J.K. Rowling"));
    }
}
