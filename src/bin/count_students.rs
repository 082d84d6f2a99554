use clap::Parser;
use student_roster::count_students_from_path;

#[derive(Debug, Parser)]
#[command(name = "count-students")]
#[command(about = "Prints the aggregated student report for a CSV database")]
struct Args {
    /// Path to the CSV student database
    database: String,
}

fn main() {
    let args = Args::parse();

    match count_students_from_path(&args.database) {
        Ok(report) => println!("{}", report),
        Err(_) => {
            eprintln!("Cannot load the database");
            std::process::exit(1);
        }
    }
}
