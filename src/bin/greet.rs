use std::io::{self, BufRead};

fn main() -> io::Result<()> {
    println!("Welcome to Holberton School, what is your name?");

    let mut name = String::new();
    let bytes_read = io::stdin().lock().read_line(&mut name)?;
    if bytes_read > 0 {
        println!("Your name is: {}", name.trim_end_matches(['\r', '\n']));
    }

    println!("This important software is now closing");
    Ok(())
}
