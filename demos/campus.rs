//! Builds a small university, fills a group and prints the roster.

records_rs::prelude! {
    chrono::NaiveDate,
}

fn date(y: i32, m: u32, d: u32) -> Res<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d).ok_or_else(|| error!("illegal date {}-{}-{}", y, m, d))
}

fn info(first: &str, last: &str, birth_day: NaiveDate, gender: Gender) -> PersonInfo {
    let email = format!("{}.{}@northfield.edu", first, last).to_lowercase();
    PersonInfo::new(first, last, birth_day, gender, Contact::new(email, "555-0100"))
}

fn run() -> Res<University> {
    let mut uni = University::new("Northfield University");

    let algebra = uni.add_course(Course::new("Algebra", Discipline::Mathematics, 6));
    let databases = uni.add_course(Course::new(
        "Databases",
        Discipline::parse("computerScience")?,
        4,
    ));

    let noether = uni.new_teacher(
        info("Emmy", "Noether", date(1882, 3, 23)?, Gender::Female),
        ["algebra", "physics"],
    );
    let noether = uni.add_person(noether);
    let algebra_course = uni[algebra].clone();
    if let Some(teacher) = uni[noether].teacher_mut() {
        teacher.assign_course(algebra_course.clone())
    }

    let mut members = Vec::new();
    for (first, last, gpa) in [("Carl", "Gauss", 3.9), ("Sophie", "Germain", 3.7)] {
        let mut student = uni.new_student(info(first, last, date(2003, 4, 30)?, Gender::Other));
        if let Some(s) = student.student_mut() {
            s.set_gpa(gpa);
            s.enroll_course(&algebra_course)?;
        }
        members.push(uni.add_person(student));
    }

    let group = uni.add_group(Group::new("ALG-1", algebra, noether))?;
    let mut group_ctx = uni.enter_group(group)?;
    for student in members {
        group_ctx.add_student(student)?;
    }
    println!(
        "average score of `{}`: {:.2} (legacy computation: {})",
        group_ctx.current().name(),
        group_ctx.average_score(),
        group_ctx.legacy_average_score(),
    );

    if uni.find_group_by_course(databases).is_none() {
        println!("no group for course `{}` yet", uni[databases].name());
    }

    Ok(uni)
}

fn main() -> anyhow::Result<()> {
    simple_logger::SimpleLogger::new()
        .env()
        .without_timestamps()
        .init()?;

    let uni = run()?;
    println!("|==| roster");
    for line in uni.to_pretty_string().lines() {
        println!("| {}", line);
    }
    println!("|==| teachers");
    for teacher in uni.people_by_role(RoleKind::Teacher) {
        println!("| {}, {} years old", teacher.full_name(), teacher.age());
    }
    println!("|==|");
    Ok(())
}
