//! Demonstration driver: reads a line-oriented text file into both list
//! containers and exercises the shared contract on each.

use std::fmt::Display;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use seq_list::{ArrayList, Cursor, LinkedList, List};

#[derive(Parser)]
#[command(
    name = "seq-list",
    about = "Exercises the list containers on a line-oriented text file",
    version
)]
struct Args {
    /// Path to a text file; every line becomes one list element
    path: PathBuf,
}

fn main() {
    let args = Args::parse();
    let lines = match read_lines(&args.path) {
        Ok(lines) => lines,
        Err(err) => {
            eprintln!("cannot read {}: {}", args.path.display(), err);
            process::exit(1);
        }
    };
    exercise::<ArrayList<String>>("array list", &lines);
    exercise::<LinkedList<String>>("linked list", &lines);
}

fn read_lines(path: &Path) -> io::Result<Vec<String>> {
    BufReader::new(File::open(path)?).lines().collect()
}

/// Runs the same contract diagnostics against any conforming container.
fn exercise<L>(label: &str, lines: &[String])
where
    L: List<String> + Default + Clone + Display,
{
    println!("testing {label}");
    let mut list = L::default();
    for line in lines {
        list.push(line.clone());
    }

    let mut copy = list.clone();
    println!("contains_all returned: {}", copy.contains_all(&list));
    copy.append_all(&list);
    println!("len after append_all: {}", copy.len());
    copy.remove_all(&list);
    println!("len after remove_all: {}", copy.len());
    copy.retain_all(&list);
    println!("len after retain_all: {}", copy.len());
    println!("to_vec returned {} elements", list.to_vec().len());
    println!("rendered: {list}");

    if !list.is_empty() {
        let index = list.len() / 2;
        let mut copy = list.clone();
        match copy.get(index).cloned() {
            Ok(value) => {
                println!("get({index}) returned: {value}");
                if let Ok(previous) = copy.set(index, value) {
                    println!("set({index}) returned: {previous}");
                }
                let missing = String::from("-- no such line --");
                println!(
                    "remove_value(missing) returned: {}",
                    copy.remove_value(&missing)
                );
                if let Ok(removed) = copy.remove_at(index) {
                    println!("remove_at({index}) returned: {removed}");
                    if copy.insert(index, removed).is_ok() {
                        println!("len after remove_at + insert: {}", copy.len());
                    }
                }
            }
            Err(err) => println!("get({index}) failed: {err}"),
        }
    }

    println!("{label} forward:");
    print_forward(&list);
    println!("{label} backward:");
    print_backward(&list);
    println!();
}

/// Prints the list front to back through its forward cursor.
fn print_forward<L: List<String>>(list: &L) {
    print!("[");
    for (i, value) in list.iter().enumerate() {
        if i > 0 {
            print!(" ");
        }
        print!("{value}");
    }
    println!("]");
}

/// Prints the list back to front through a bidirectional cursor created
/// at the end position.
fn print_backward<L: List<String>>(list: &L) {
    let mut cursor = match list.cursor_at(list.len()) {
        Ok(cursor) => cursor,
        Err(_) => return,
    };
    print!("[");
    let mut first = true;
    while cursor.has_previous() {
        match cursor.previous() {
            Ok(value) => {
                if !first {
                    print!(" ");
                }
                print!("{value}");
                first = false;
            }
            Err(_) => break,
        }
    }
    println!("]");
}
