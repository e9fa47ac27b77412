//! University roster.
//!
//! The main type is [`University`], which owns the courses, groups and people arenas and indexes
//! them with the typed indices of [`idx`]. It also owns the person id generator: people are created
//! with [`University::new_teacher`] / [`University::new_student`] and then
//! [registered](University::add_person).
//!
//! Group rosters are modified by *entering* the group with [`University::enter_group`], which
//! yields a [`GroupCtx`].
//!
//! ```rust
//! # records_rs::prelude! { chrono::NaiveDate }
//! let mut uni = University::new("Northfield");
//! let algebra = uni.add_course(Course::new("Algebra", Discipline::Mathematics, 6));
//!
//! let info = |first: &str, last: &str| PersonInfo::new(
//!     first, last,
//!     NaiveDate::from_ymd_opt(1990, 3, 1).unwrap(),
//!     Gender::Other,
//!     Contact::new("someone@northfield.edu", "555-0100"),
//! );
//! let teacher = uni.new_teacher(info("Emmy", "Noether"), ["algebra"]);
//! let teacher = uni.add_person(teacher);
//! let student = uni.new_student(info("Carl", "Gauss"));
//! let student = uni.add_person(student);
//!
//! let group = uni.add_group(Group::new("ALG-1", algebra, teacher)).expect("known teacher");
//! let mut group_ctx = uni.enter_group(group).expect("known group");
//! group_ctx.add_student(student).expect("first insertion");
//! assert!(group_ctx.add_student(student).is_err());
//! assert_eq!(uni.find_group_by_course(algebra), Some(group));
//! ```

prelude! {}

pub mod course;
pub mod group;
pub mod idx;
pub mod person;

pub use course::{Course, Discipline};
pub use group::Group;
pub use person::{
    AcademicPerformance, Contact, Gender, Person, PersonInfo, Role, RoleKind, Student,
    StudentStatus, Teacher,
};

/// Aggregate of courses, groups and people.
pub struct University {
    name: String,
    courses: idx::CourseMap<Course>,
    groups: idx::GroupMap<Group>,
    people: idx::PersonMap<Person>,
    person_ids: IdGen,
}

impl fmt::Debug for University {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("University")
            .field("name", &self.name)
            .field("courses", &self.courses.len())
            .field("groups", &self.groups.len())
            .field("people", &self.people.len())
            .field("person_ids", &self.person_ids)
            .finish()
    }
}

impl std::ops::Index<idx::Course> for University {
    type Output = Course;
    fn index(&self, idx: idx::Course) -> &Self::Output {
        &self.courses[idx]
    }
}
impl std::ops::IndexMut<idx::Course> for University {
    fn index_mut(&mut self, idx: idx::Course) -> &mut Self::Output {
        &mut self.courses[idx]
    }
}

impl std::ops::Index<idx::Group> for University {
    type Output = Group;
    fn index(&self, idx: idx::Group) -> &Self::Output {
        &self.groups[idx]
    }
}

impl std::ops::Index<idx::Person> for University {
    type Output = Person;
    fn index(&self, idx: idx::Person) -> &Self::Output {
        &self.people[idx]
    }
}
impl std::ops::IndexMut<idx::Person> for University {
    fn index_mut(&mut self, idx: idx::Person) -> &mut Self::Output {
        &mut self.people[idx]
    }
}

impl University {
    /// Constructor.
    pub fn with_capacity(
        name: impl Into<String>,
        course_capa: usize,
        group_capa: usize,
        people_capa: usize,
    ) -> Self {
        Self {
            name: name.into(),
            courses: idx::CourseMap::with_capacity(course_capa),
            groups: idx::GroupMap::with_capacity(group_capa),
            people: idx::PersonMap::with_capacity(people_capa),
            person_ids: IdGen::new(),
        }
    }
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_capacity(name, 7, 7, 31)
    }
    /// Constructor with an explicit person id generator.
    pub fn with_ids(name: impl Into<String>, person_ids: IdGen) -> Self {
        let mut slf = Self::new(name);
        slf.person_ids = person_ids;
        slf
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Creates a teacher with a fresh id, see [`Self::add_person`].
    pub fn new_teacher<S: Into<String>>(
        &mut self,
        info: PersonInfo,
        specializations: impl IntoIterator<Item = S>,
    ) -> Person {
        Person::new(
            self.person_ids.next_id(),
            info,
            Teacher::new(specializations),
        )
    }
    /// Creates an active student with a fresh id, see [`Self::add_person`].
    pub fn new_student(&mut self, info: PersonInfo) -> Person {
        Person::new(self.person_ids.next_id(), info, Student::new())
    }

    pub fn add_course(&mut self, course: Course) -> idx::Course {
        log::debug!("`{}`: adding course {}", self.name, course);
        self.courses.push_idx(|_| course)
    }
    pub fn add_person(&mut self, person: Person) -> idx::Person {
        log::debug!("`{}`: adding {}", self.name, person);
        self.people.push_idx(|_| person)
    }
    /// Registers a group.
    ///
    /// Fails if the group's course is not a course of this university, or if its teacher is not a
    /// teacher of this university.
    pub fn add_group(&mut self, group: Group) -> Res<idx::Group> {
        if self.course(group.course()).is_none() {
            return Err(error!(@uni @unknown("course index") group.course().to_string())
                .with_context(format!("while adding group `{}`", group.name())));
        }
        let teacher = self.person(group.teacher()).ok_or_else(|| {
            error!(@uni @unknown("person index") group.teacher().to_string())
                .with_context(format!("while adding group `{}`", group.name()))
        })?;
        if !teacher.is_teacher() {
            log::warn!("rejecting group `{}`: {} is not a teacher", group.name(), teacher);
            bail!(@uni
                "cannot add group `{}` taught by {}, not a teacher",
                group.name(),
                teacher,
            )
        }
        log::debug!("`{}`: adding group `{}`", self.name, group.name());
        Ok(self.groups.push_idx(|_| group))
    }

    /// Course at some index, `None` if the index is not from this university.
    pub fn course(&self, course: idx::Course) -> Option<&Course> {
        self.courses.get(course)
    }
    /// Group at some index, `None` if the index is not from this university.
    pub fn group(&self, group: idx::Group) -> Option<&Group> {
        self.groups.get(group)
    }
    /// Person at some index, `None` if the index is not from this university.
    pub fn person(&self, person: idx::Person) -> Option<&Person> {
        self.people.get(person)
    }

    /// Courses appear in the order they were added in.
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }
    pub fn course_indices<'me>(&'me self) -> impl Iterator<Item = idx::Course> + 'me {
        self.courses.indices()
    }
    /// Groups appear in the order they were added in.
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }
    pub fn group_indices<'me>(&'me self) -> impl Iterator<Item = idx::Group> + 'me {
        self.groups.indices()
    }
    /// People appear in the order they were added in.
    pub fn people(&self) -> &[Person] {
        &self.people
    }
    pub fn person_indices<'me>(&'me self) -> impl Iterator<Item = idx::Person> + 'me {
        self.people.indices()
    }
    pub fn teachers(&self) -> impl Iterator<Item = &Person> {
        self.people.iter().filter(|p| p.is_teacher())
    }
    pub fn students(&self) -> impl Iterator<Item = &Person> {
        self.people.iter().filter(|p| p.is_student())
    }

    /// People with a given role, in the order they were added in.
    pub fn people_by_role(&self, role: RoleKind) -> Vec<&Person> {
        self.people.iter().filter(|p| p.role() == role).collect()
    }
    /// Same as [`Self::people_by_role`] for a textual role.
    ///
    /// Fails if `role` is not a known role.
    pub fn people_by_role_str(&self, role: impl AsRef<str>) -> Res<Vec<&Person>> {
        let role = RoleKind::parse(role)?;
        Ok(self.people_by_role(role))
    }

    pub fn person_by_id(&self, id: Id) -> Option<&Person> {
        find_id(self.people.iter(), id)
    }
    pub fn person_idx_by_id(&self, id: Id) -> Option<idx::Person> {
        self.people.indices().find(|p_idx| self[*p_idx].id() == id)
    }

    /// First group for some course.
    pub fn find_group_by_course(&self, course: idx::Course) -> Option<idx::Group> {
        self.groups.indices().find(|g_idx| self[*g_idx].course() == course)
    }

    /// Fails if `group` is not a group of this university.
    pub fn enter_group(&mut self, group: idx::Group) -> Res<GroupCtx> {
        if self.group(group).is_none() {
            bail!(@uni @unknown("group index") group.to_string())
        }
        Ok(GroupCtx {
            uni: self,
            g_idx: group,
        })
    }

    pub fn to_pretty_string(&self) -> String {
        let mut res = String::with_capacity(113);

        macro_rules! post {
            (line $($interp_str:tt)*) => {{
                if !res.is_empty() {
                    res.push('\n');
                }
                res.push_str(&format!($($interp_str)*));
            }};
        }

        post!(line "- {}", self.name);
        for course in self.courses.iter() {
            post!(line "  course {}", course);
        }
        for person in self.people.iter() {
            post!(line "  {}", person);
            if let Some(teacher) = person.teacher() {
                if !teacher.specializations().is_empty() {
                    let specs = teacher.specializations().iter().show_iter_cs(|s| s);
                    post!(line "    specializations: {}", specs);
                }
                if !teacher.courses().is_empty() {
                    let courses = teacher.courses().iter().show_iter_cs(|c| c.name());
                    post!(line "    teaches: {}", courses);
                }
            }
            if let Some(student) = person.student() {
                post!(
                    line "    {}, {} credits, gpa {:.2}",
                    student.status(),
                    student.total_credits(),
                    student.gpa()
                );
                if !student.enrolled_courses().is_empty() {
                    let courses = student.enrolled_courses().iter().show_iter_cs(|c| c.name());
                    post!(line "    enrolled in: {}", courses);
                }
            }
        }
        for group in self.groups.iter() {
            post!(line "  group {}", group.display(self));
            if !group.is_empty() {
                let members = group.members(self).show_iter_cs(Person::full_name);
                post!(line "    members: {}", members);
            }
        }

        res.shrink_to_fit();
        res
    }
}

/// A [`University`] along with one of its groups.
#[derive(Debug)]
pub struct GroupCtx<'a> {
    uni: &'a mut University,
    g_idx: idx::Group,
}

impl<'a> GroupCtx<'a> {
    pub fn current(&self) -> &Group {
        &self.uni[self.g_idx]
    }
    pub fn idx(&self) -> idx::Group {
        self.g_idx
    }
    pub fn university(&self) -> &University {
        self.uni
    }

    /// Adds a student to the roster.
    ///
    /// Fails if the person is not a student of this university, or is already a member.
    pub fn add_student(&mut self, student: idx::Person) -> Res<()> {
        let person = self.uni.person(student).ok_or_else(|| {
            error!(@uni @unknown("person index") student.to_string())
                .with_context(format!("in group `{}`", self.current().name()))
        })?;
        if !person.is_student() {
            bail!(@uni
                "cannot add {} to group `{}`, not a student",
                person,
                self.current().name(),
            )
        }
        let group = &mut self.uni.groups[self.g_idx];
        if !group.insert_student(student) {
            let person = &self.uni[student];
            log::warn!("{} is already in group `{}`", person, self.current().name());
            return Err(error!(@uni @redef("group member") person.full_name())
                .with_context(format!("in group `{}`", self.current().name())));
        }
        Ok(())
    }

    /// Removes the member with identifier `id` from the roster, returns its index.
    ///
    /// The person stays in the university. Fails if no member has this id.
    pub fn remove_student_by_id(&mut self, id: Id) -> Res<idx::Person> {
        let pos = self.current().student_position(self.uni, id)?;
        let removed = self.uni.groups[self.g_idx].remove_student_at(pos);
        log::debug!(
            "removed {} from group `{}`",
            self.uni[removed],
            self.current().name()
        );
        Ok(removed)
    }

    pub fn student_by_id(&self, id: Id) -> Res<&Person> {
        self.current().student_by_id(self.uni, id)
    }
    pub fn students(&self) -> &[idx::Person] {
        self.current().students()
    }

    pub fn average_score(&self) -> f64 {
        self.current().average_score(self.uni)
    }
    pub fn legacy_average_score(&self) -> f64 {
        self.current().legacy_average_score(self.uni)
    }
}

#[cfg(test)]
mod tests {
    prelude! {
        chrono::NaiveDate,
    }

    fn info(first: &str, last: &str) -> PersonInfo {
        PersonInfo::new(
            first,
            last,
            NaiveDate::from_ymd_opt(2001, 9, 1).unwrap(),
            Gender::Other,
            Contact::new(format!("{first}@uni.edu"), "555-0100"),
        )
    }

    struct Campus {
        uni: University,
        physics: idx::Course,
        chem: idx::Course,
        teacher: idx::Person,
        alice: idx::Person,
        bob: idx::Person,
        group: idx::Group,
    }

    fn campus() -> Campus {
        let mut uni = University::new("Test University");
        let physics = uni.add_course(Course::new("Mechanics", Discipline::Physics, 5));
        let chem = uni.add_course(Course::new("Organic", Discipline::Chemistry, 4));
        let teacher = uni.new_teacher(info("Marie", "Curie"), ["radioactivity"]);
        let teacher = uni.add_person(teacher);
        let mut alice = uni.new_student(info("Alice", "Smith"));
        alice.student_mut().unwrap().set_gpa(3.5);
        let alice = uni.add_person(alice);
        let mut bob = uni.new_student(info("Bob", "Jones"));
        bob.student_mut().unwrap().set_gpa(2.5);
        let bob = uni.add_person(bob);
        let group = uni
            .add_group(Group::new("PHY-1", physics, teacher))
            .unwrap();
        Campus {
            uni,
            physics,
            chem,
            teacher,
            alice,
            bob,
            group,
        }
    }

    #[test]
    fn person_ids_are_sequential_across_roles() {
        let c = campus();
        let ids: Vec<u64> = c.uni.people().iter().map(|p| p.id().get()).collect();
        assert_eq!(ids, [1, 2, 3]);
        assert_eq!(c.uni.person_by_id(Id::new(2)).unwrap().first_name(), "Alice");
        assert_eq!(c.uni.person_idx_by_id(Id::new(3)), Some(c.bob));
        assert!(c.uni.person_by_id(Id::new(4)).is_none());
    }

    #[test]
    fn people_by_role() {
        let c = campus();
        let students = c.uni.people_by_role(RoleKind::Student);
        assert_eq!(students.len(), 2);
        assert_eq!(c.uni.students().count(), 2);
        let teachers = c.uni.people_by_role_str("teacher").unwrap();
        assert_eq!(teachers.len(), 1);
        assert_eq!(teachers[0].full_name(), "Curie Marie");
        assert_eq!(c.uni.teachers().count(), 1);
        let err = c.uni.people_by_role_str("janitor").unwrap_err();
        assert!(err.is_university());
    }

    #[test]
    fn find_group_by_course() {
        let mut c = campus();
        assert_eq!(c.uni.find_group_by_course(c.physics), Some(c.group));
        assert_eq!(c.uni.find_group_by_course(c.chem), None);
        // same value, different course
        let other = c
            .uni
            .add_course(Course::new("Mechanics", Discipline::Physics, 5));
        assert_eq!(c.uni.find_group_by_course(other), None);
        // first match wins
        let second = c
            .uni
            .add_group(Group::new("PHY-2", c.physics, c.teacher))
            .unwrap();
        assert_ne!(second, c.group);
        assert_eq!(c.uni.find_group_by_course(c.physics), Some(c.group));
    }

    #[test]
    fn add_student() {
        let mut c = campus();
        let mut group = c.uni.enter_group(c.group).unwrap();
        group.add_student(c.alice).unwrap();
        group.add_student(c.bob).unwrap();
        let err = group.add_student(c.alice).unwrap_err();
        assert!(err.is_university());
        assert_eq!(group.students(), [c.alice, c.bob]);
        let err = group.add_student(c.teacher).unwrap_err();
        assert!(err.is_university());
        assert_eq!(group.students().len(), 2);
    }

    #[test]
    fn group_teacher_must_be_a_teacher() {
        let mut c = campus();
        let err = c
            .uni
            .add_group(Group::new("PHY-2", c.physics, c.alice))
            .unwrap_err();
        assert!(err.is_university());
        assert_eq!(c.uni.groups().len(), 1);
        for group in c.uni.groups() {
            assert!(c.uni[group.teacher()].is_teacher());
        }
    }

    #[test]
    fn indices_from_another_university() {
        let mut big = University::new("Big");
        let mut last = None;
        for name in ["A", "B", "C", "D", "E"] {
            let p = big.new_student(info(name, "Student"));
            last = Some(big.add_person(p));
        }
        let mut course = None;
        for name in ["Optics", "Acoustics", "Thermodynamics"] {
            course = Some(big.add_course(Course::new(name, Discipline::Physics, 3)));
        }
        let course = course.unwrap();
        let stranger = last.unwrap();

        let mut c = campus();
        assert!(c.uni.person(stranger).is_none());
        let err = c
            .uni
            .add_group(Group::new("PHY-2", course, c.teacher))
            .unwrap_err();
        assert!(err.is_university());
        let err = c
            .uni
            .add_group(Group::new("PHY-2", c.physics, stranger))
            .unwrap_err();
        assert!(err.is_university());

        let mut group = c.uni.enter_group(c.group).unwrap();
        let err = group.add_student(stranger).unwrap_err();
        assert!(err.is_university());
        assert!(group.students().is_empty());

        let foreign_group = {
            let t = big.new_teacher(info("Big", "Teacher"), ["optics"]);
            let t = big.add_person(t);
            big.add_group(Group::new("G1", course, t)).unwrap();
            big.add_group(Group::new("G2", course, t)).unwrap()
        };
        assert!(c.uni.enter_group(foreign_group).unwrap_err().is_university());
        assert_eq!(c.uni.groups().len(), 1);
    }

    #[test]
    fn remove_student_by_id() {
        let mut c = campus();
        let alice_id = c.uni[c.alice].id();
        let bob_id = c.uni[c.bob].id();
        let mut group = c.uni.enter_group(c.group).unwrap();
        group.add_student(c.alice).unwrap();
        group.add_student(c.bob).unwrap();

        let err = group.remove_student_by_id(Id::new(42)).unwrap_err();
        assert!(err.is_university());
        assert_eq!(group.students().len(), 2);

        assert_eq!(group.student_by_id(bob_id).unwrap().first_name(), "Bob");
        assert_eq!(group.remove_student_by_id(alice_id).unwrap(), c.alice);
        assert_eq!(group.students(), [c.bob]);
        assert_eq!(group.university().people().len(), 3);
        assert!(group.student_by_id(alice_id).unwrap_err().is_university());
        // still in the university
        assert!(c.uni.person_by_id(alice_id).is_some());
    }

    #[test]
    fn average_scores() {
        let mut c = campus();
        {
            let group = c.uni.enter_group(c.group).unwrap();
            assert_eq!(group.average_score(), 0.0);
            assert!(group.legacy_average_score().is_nan());
        }
        let mut group = c.uni.enter_group(c.group).unwrap();
        group.add_student(c.alice).unwrap();
        group.add_student(c.bob).unwrap();
        assert_eq!(group.average_score(), 3.0);
        assert_eq!(group.legacy_average_score(), 0.0);
    }

    #[test]
    fn enrollment_through_university() {
        let mut c = campus();
        let course = c.uni[c.physics].clone();
        c.uni[c.alice]
            .student_mut()
            .unwrap()
            .enroll_course(&course)
            .unwrap();
        c.uni[c.teacher]
            .teacher_mut()
            .unwrap()
            .assign_course(course);
        assert_eq!(c.uni[c.alice].student().unwrap().total_credits(), 5);
        let pretty = c.uni.to_pretty_string();
        assert!(pretty.contains("    enrolled in: Mechanics"));
        assert!(pretty.contains("    teaches: Mechanics"));
        assert!(pretty.contains("  group PHY-1 (Mechanics, taught by Curie Marie)"));
    }

    #[test]
    fn injected_ids() {
        let mut uni = University::with_ids("Resumed", IdGen::starting_at(100));
        let p = uni.new_student(info("Late", "Comer"));
        assert_eq!(p.id(), Id::new(100));
    }
}
