//! Courses and subject areas.

prelude! {}

closed_enum! {
    @uni "discipline"
    /// Subject area of a [`Course`].
    pub enum Discipline {
        Mathematics = "mathematics",
        Physics = "physics",
        Chemistry = "chemistry",
        Biology = "biology",
        ComputerScience = "computerScience",
        Engineering = "engineering",
        Economics = "economics",
        History = "history",
        Literature = "literature",
        Philosophy = "philosophy",
        Languages = "languages",
        Arts = "arts",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Course {
    name: String,
    discipline: Discipline,
    credits: u32,
}

impl Course {
    pub fn new(name: impl Into<String>, discipline: Discipline, credits: u32) -> Self {
        Self {
            name: name.into(),
            discipline,
            credits,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }
    #[inline]
    pub fn discipline(&self) -> Discipline {
        self.discipline
    }
    #[inline]
    pub fn credits(&self) -> u32 {
        self.credits
    }
}

impl Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}, {} credits]", self.name, self.discipline, self.credits)
    }
}
