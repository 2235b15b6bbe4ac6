use std::{
    env::{args, current_dir},
    fs::read_to_string,
    io,
    path::{Path, PathBuf},
    process::exit,
};

use plotree::{error::print_build_error, read_tree_from_string, OptionNode, PlotTree};

fn main() -> Result<(), io::Error> {
    let path = match args().nth(1) {
        Some(path) => PathBuf::from(path),
        None => {
            let mut assets_dir = current_dir()?;
            assets_dir.push("demos");
            assets_dir.push("assets");

            [assets_dir.as_path(), Path::new("story.txt")]
                .iter()
                .collect()
        }
    };

    let tree = read_tree(&path)?;

    for message in tree.log().iter() {
        eprintln!("{}", message);
    }

    play_story(&tree.clean());
    println!("FIN\n");

    Ok(())
}

fn play_story(tree: &PlotTree) {
    let mut plot = tree.root();

    loop {
        println!("{}\n", plot.text());

        let options = tree.options(plot).collect::<Vec<_>>();

        if options.is_empty() {
            break;
        }

        let option = ask_user_for_option(&options).unwrap_or_else(|| {
            println!("Exiting program.");
            exit(0);
        });

        println!("> {}\n", option.text());

        match tree.next(option) {
            Some(next) => plot = next,
            None => break,
        }
    }
}

fn ask_user_for_option<'a>(options: &[&'a OptionNode]) -> Option<&'a OptionNode> {
    println!("Choose:");

    for (i, option) in options.iter().enumerate() {
        println!("  {}. {}", i + 1, option.text());
    }

    println!("     ---");
    println!("  0. Exit story");
    println!("");

    let index = get_choice(options.len())?;
    Some(options[index])
}

fn get_choice(num_choices: usize) -> Option<usize> {
    loop {
        let mut input = String::new();

        if io::stdin().read_line(&mut input).is_err() {
            return None;
        }

        match input.trim().parse::<usize>() {
            Ok(0) => {
                return None;
            }
            Ok(i) if i > 0 && i <= num_choices => {
                return Some(i - 1);
            }
            _ => {
                println!("Not a valid option, try again:");
            }
        }
    }
}

fn read_tree(path: &Path) -> Result<PlotTree, io::Error> {
    let contents = read_to_string(path)?;

    match read_tree_from_string(&contents) {
        Ok(tree) => Ok(tree),
        Err(error) => {
            eprintln!("{}", print_build_error(&error).unwrap_or(format!("{}", error)));
            exit(1);
        }
    }
}
