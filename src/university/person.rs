//! People of a university.
//!
//! A [`Person`] is a shared base record plus a [`Role`] carrying the role-specific data, either a
//! [`Teacher`] or a [`Student`]. The role is fixed at construction.

prelude! {
    chrono::{Datelike, Local, NaiveDate},
}

closed_enum! {
    @uni "gender"
    pub enum Gender {
        Male = "male",
        Female = "female",
        Other = "other",
    }
}

closed_enum! {
    @uni "role"
    /// Role of a [`Person`], see also [`Role`] for the role-specific data.
    pub enum RoleKind {
        Student = "student",
        Teacher = "teacher",
    }
}

closed_enum! {
    @uni "academic status"
    /// Academic status of a [`Student`].
    ///
    /// Any status may follow any other.
    pub enum StudentStatus {
        Active = "active",
        AcademicLeave = "academicLeave",
        Graduated = "graduated",
        Expelled = "expelled",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Contact {
    pub email: String,
    pub phone: String,
}
impl Contact {
    pub fn new(email: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            phone: phone.into(),
        }
    }
}

/// Everything a [`Person`] needs besides its id and role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonInfo {
    pub first_name: String,
    pub last_name: String,
    pub birth_day: NaiveDate,
    pub gender: Gender,
    pub contact: Contact,
}
impl PersonInfo {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        birth_day: NaiveDate,
        gender: Gender,
        contact: Contact,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            birth_day,
            gender,
            contact,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Teacher {
    specializations: SmallVec<[String; 4]>,
    courses: Vec<Course>,
}

impl Teacher {
    pub fn new<S: Into<String>>(specializations: impl IntoIterator<Item = S>) -> Self {
        Self {
            specializations: specializations.into_iter().map(Into::into).collect(),
            courses: Vec::with_capacity(3),
        }
    }

    pub fn specializations(&self) -> &[String] {
        &self.specializations
    }
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn assign_course(&mut self, course: Course) {
        self.courses.push(course)
    }
    /// Removes all courses called `name`, returns how many were removed.
    pub fn remove_course(&mut self, name: impl AsRef<str>) -> usize {
        let name = name.as_ref();
        let len = self.courses.len();
        self.courses.retain(|c| c.name() != name);
        len - self.courses.len()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AcademicPerformance {
    pub total_credits: u32,
    pub gpa: f64,
}
impl Default for AcademicPerformance {
    fn default() -> Self {
        Self {
            total_credits: 0,
            gpa: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    performance: AcademicPerformance,
    enrolled_courses: Vec<Course>,
    status: StudentStatus,
}

impl Default for Student {
    fn default() -> Self {
        Self::new()
    }
}

impl Student {
    /// An active student with no credits.
    pub fn new() -> Self {
        Self {
            performance: AcademicPerformance::default(),
            enrolled_courses: Vec::with_capacity(5),
            status: StudentStatus::Active,
        }
    }

    pub fn performance(&self) -> &AcademicPerformance {
        &self.performance
    }
    pub fn total_credits(&self) -> u32 {
        self.performance.total_credits
    }
    pub fn gpa(&self) -> f64 {
        self.performance.gpa
    }
    /// GPA is never computed, it only changes through this setter.
    pub fn set_gpa(&mut self, gpa: f64) {
        self.performance.gpa = gpa
    }
    /// Average score of the student, *i.e.* its GPA.
    pub fn average_score(&self) -> f64 {
        self.gpa()
    }

    pub fn enrolled_courses(&self) -> &[Course] {
        &self.enrolled_courses
    }
    pub fn status(&self) -> StudentStatus {
        self.status
    }

    /// Enrolls in a course and collects its credits.
    ///
    /// Fails if the student is not [active](StudentStatus::Active), in which case nothing changes.
    pub fn enroll_course(&mut self, course: &Course) -> Res<()> {
        if self.status != StudentStatus::Active {
            log::warn!(
                "refusing enrollment in `{}` for {} student",
                course.name(),
                self.status
            );
            bail!(@uni
                "cannot enroll in course `{}`, student status is `{}`",
                course.name(),
                self.status,
            )
        }
        let total = self
            .performance
            .total_credits
            .checked_add(course.credits())
            .ok_or_else(|| {
                error!(@uni
                    "cannot enroll in course `{}`, credit count overflows ({} + {})",
                    course.name(),
                    self.performance.total_credits,
                    course.credits(),
                )
            })?;
        self.enrolled_courses.push(course.clone());
        self.performance.total_credits = total;
        Ok(())
    }

    pub fn update_academic_status(&mut self, status: StudentStatus) {
        self.status = status
    }
}

/// Role-specific data of a [`Person`].
#[derive(Debug, Clone, PartialEq)]
pub enum Role {
    Teacher(Teacher),
    Student(Student),
}
impl Role {
    pub fn kind(&self) -> RoleKind {
        match self {
            Self::Teacher(_) => RoleKind::Teacher,
            Self::Student(_) => RoleKind::Student,
        }
    }
}
impl From<Teacher> for Role {
    fn from(t: Teacher) -> Self {
        Self::Teacher(t)
    }
}
impl From<Student> for Role {
    fn from(s: Student) -> Self {
        Self::Student(s)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    id: Id,
    info: PersonInfo,
    role: Role,
}

impl HasId for Person {
    fn id(&self) -> Id {
        self.id
    }
}

impl Person {
    /// Constructor, see also [`University::new_teacher`] and [`University::new_student`] which
    /// allocate the id.
    pub fn new(id: Id, info: PersonInfo, role: impl Into<Role>) -> Self {
        Self {
            id,
            info,
            role: role.into(),
        }
    }

    #[inline]
    pub fn id(&self) -> Id {
        self.id
    }
    pub fn info(&self) -> &PersonInfo {
        &self.info
    }
    pub fn first_name(&self) -> &str {
        &self.info.first_name
    }
    pub fn last_name(&self) -> &str {
        &self.info.last_name
    }
    pub fn birth_day(&self) -> NaiveDate {
        self.info.birth_day
    }
    pub fn gender(&self) -> Gender {
        self.info.gender
    }
    pub fn contact(&self) -> &Contact {
        &self.info.contact
    }

    /// `"<last name> <first name>"`.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.info.last_name, self.info.first_name)
    }

    /// Age in full years on `today`.
    pub fn age_at(&self, today: NaiveDate) -> i32 {
        let birth = self.info.birth_day;
        let mut age = today.year() - birth.year();
        if (today.month(), today.day()) < (birth.month(), birth.day()) {
            age -= 1
        }
        age
    }
    /// Age in full years, according to the local clock.
    pub fn age(&self) -> i32 {
        self.age_at(Local::now().date_naive())
    }

    pub fn role(&self) -> RoleKind {
        self.role.kind()
    }
    pub fn role_data(&self) -> &Role {
        &self.role
    }
    pub fn is_student(&self) -> bool {
        self.role() == RoleKind::Student
    }
    pub fn is_teacher(&self) -> bool {
        self.role() == RoleKind::Teacher
    }

    pub fn teacher(&self) -> Option<&Teacher> {
        match &self.role {
            Role::Teacher(t) => Some(t),
            Role::Student(_) => None,
        }
    }
    pub fn teacher_mut(&mut self) -> Option<&mut Teacher> {
        match &mut self.role {
            Role::Teacher(t) => Some(t),
            Role::Student(_) => None,
        }
    }
    pub fn student(&self) -> Option<&Student> {
        match &self.role {
            Role::Student(s) => Some(s),
            Role::Teacher(_) => None,
        }
    }
    pub fn student_mut(&mut self) -> Option<&mut Student> {
        match &mut self.role {
            Role::Student(s) => Some(s),
            Role::Teacher(_) => None,
        }
    }
}

impl Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} #{}", self.role(), self.full_name(), self.id)
    }
}
