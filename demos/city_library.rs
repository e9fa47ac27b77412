//! Builds a small catalog and runs a few queries on it.
//!
//! Run with `RUST_LOG=debug` to see the catalog registrations.

records_rs::prelude! {}

fn run() -> Res<Library> {
    let mut lib = Library::new("City Library", 100);

    let rowling = lib.new_author("J.K. Rowling");
    let hp = lib.new_book("Harry Potter", "Fantasy", 1997, &rowling);
    lib.add_book(hp)?;

    let martin = lib.new_author("George R.R. Martin");
    let got = lib.new_book("Game of Thrones", "Fantasy", 1996, &martin);
    lib.add_book(got)?;
    let cok = lib.new_book("A Clash of Kings", "War", 1998, &martin);
    lib.add_book(cok.clone())?;

    // rejected, already in the catalog
    if let Err(e) = lib.add_book(cok) {
        println!("expected failure: {}", e);
    }

    Ok(lib)
}

fn main() -> anyhow::Result<()> {
    simple_logger::SimpleLogger::new()
        .env()
        .without_timestamps()
        .init()?;

    let lib = run()?;
    println!("|==| catalog");
    for line in lib.to_pretty_string().lines() {
        println!("| {}", line);
    }

    let criteria = Criteria::new().title("Harry").genre("Fantasy");
    let found = lib.search(&criteria)?;
    println!("|==| search title `Harry` or genre `Fantasy`");
    println!("| {}", found.iter().show_iter_cs(|b| b.title()));

    let by_martin = lib.books_by_author("george r.r. martin");
    println!("|==| books by George R.R. Martin");
    println!("| {}", by_martin.iter().show_iter_cs(|b| b.title()));

    let author = lib.author_by_book_id(Id::new(1))?;
    println!("|==| author of book #1: {}", author);
    println!("|==|");
    Ok(())
}
