//! Study groups.
//!
//! A [`Group`] only stores indices, anything that needs the actual people takes the owning
//! [`University`] as argument. Roster modifications go through [`GroupCtx`].

prelude! {}

#[derive(Debug, Clone)]
pub struct Group {
    name: String,
    course: idx::Course,
    teacher: idx::Person,
    students: SmallVec<[idx::Person; 16]>,
}

impl Group {
    pub fn new(name: impl Into<String>, course: idx::Course, teacher: idx::Person) -> Self {
        Self {
            name: name.into(),
            course,
            teacher,
            students: smallvec![],
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }
    #[inline]
    pub fn course(&self) -> idx::Course {
        self.course
    }
    #[inline]
    pub fn teacher(&self) -> idx::Person {
        self.teacher
    }
    /// The roster, in insertion order.
    pub fn students(&self) -> &[idx::Person] {
        &self.students
    }
    pub fn len(&self) -> usize {
        self.students.len()
    }
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
    pub fn has_student(&self, student: idx::Person) -> bool {
        self.students.contains(&student)
    }

    /// Appends a student, `false` if it is already a member.
    pub(crate) fn insert_student(&mut self, student: idx::Person) -> bool {
        if self.has_student(student) {
            false
        } else {
            self.students.push(student);
            true
        }
    }
    pub(crate) fn remove_student_at(&mut self, pos: usize) -> idx::Person {
        self.students.remove(pos)
    }

    /// Position in the roster of the student with identifier `id`.
    ///
    /// Fails if no member has this id.
    pub fn student_position(&self, uni: &University, id: Id) -> Res<usize> {
        self.students
            .iter()
            .position(|p_idx| uni.person(*p_idx).map_or(false, |p| p.id() == id))
            .ok_or_else(|| self.unknown_student(id))
    }

    /// Member with identifier `id`.
    pub fn student_by_id<'u>(&'u self, uni: &'u University, id: Id) -> Res<&'u Person> {
        self.members(uni)
            .find(|p| p.id() == id)
            .ok_or_else(|| self.unknown_student(id))
    }

    fn unknown_student(&self, id: Id) -> res::Error {
        error!(@uni @unknown("student id") id.to_string())
            .with_context(format!("in group `{}`", self.name))
    }

    /// Members that are people of `uni`, in roster order.
    pub fn members<'u>(&'u self, uni: &'u University) -> impl Iterator<Item = &'u Person> + 'u {
        self.students.iter().filter_map(move |p_idx| uni.person(*p_idx))
    }

    fn gpas<'u>(&'u self, uni: &'u University) -> impl Iterator<Item = f64> + 'u {
        self.members(uni)
            .filter_map(Person::student)
            .map(Student::average_score)
    }

    /// Mean GPA of the members, `0` for an empty group.
    pub fn average_score(&self, uni: &University) -> f64 {
        if self.students.is_empty() {
            return 0.0;
        }
        self.gpas(uni).sum::<f64>() / self.students.len() as f64
    }

    /// Historical group average.
    ///
    /// Returns `0` for any non-empty group, and `0 / 0` (`NaN`) for an empty one. Use
    /// [`Self::average_score`] unless these exact results are needed.
    pub fn legacy_average_score(&self, uni: &University) -> f64 {
        if !self.students.is_empty() {
            return 0.0;
        }
        self.gpas(uni).sum::<f64>() / self.students.len() as f64
    }

    pub fn display(&self, uni: &University) -> String {
        let course = uni.course(self.course).map_or("<unknown course>", Course::name);
        let teacher = uni
            .person(self.teacher)
            .map_or_else(|| "<unknown teacher>".into(), Person::full_name);
        format!("{} ({}, taught by {})", self.name, course, teacher)
    }
}
