use super::cli_reynolds::{create_template, report, run_from_dir, run_from_file, run_reference};
use std::path::Path;
use std::io::{self, Write};

pub fn run_interactive_menu() {
    loop {
        show_main_menu();
        let Some(choice) = get_user_input() else {
            break;
        };

        match choice.trim() {
            "1" => {
                if let Some(path) = ask("Enter file path: ") {
                    report(run_from_file(path.trim()));
                }
            }
            "2" => report(run_reference()),
            "3" => {
                if let Some(path) = ask("Enter template file path: ") {
                    let path = path.trim();
                    match create_template(path) {
                        Ok(()) => println!("Template written to {}", path),
                        Err(e) => report::<()>(Err(e)),
                    }
                }
            }
            "4" => report(run_from_dir(Path::new("."))),
            "0" => {
                println!("Goodbye!");
                break;
            }
            _ => println!("Invalid choice. Please try again."),
        }
    }
}
/* colors
Blue (\x1b[34m) - Welcome header text
Yellow (\x1b[33m) - Menu options
Cyan (\x1b[36m) - prompts
Reset (\x1b[0m) - Returns to normal color after each colored section
*/
fn show_main_menu() {
    println!(
        "\x1b[34m\n Wellcome to ReynoldsFilm: journal bearing film parameters\n
    and discretization grid for the Reynolds equation \n \x1b[0m"
    );
    println!("\x1b[33m1. Build task from parameter file\x1b[0m");
    println!("\x1b[33m2. Reference bearing\x1b[0m");
    println!("\x1b[33m3. Generate parameter template\x1b[0m");
    println!("\x1b[33m4. Task from bearing_params.json in current directory\x1b[0m");
    println!("\x1b[33m0. Exit\x1b[0m");
    print!("\x1b[36mEnter your choice: \x1b[0m");
    let _ = io::stdout().flush();
}

fn ask(prompt: &str) -> Option<String> {
    print!("\x1b[36m{}\x1b[0m", prompt);
    let _ = io::stdout().flush();
    get_user_input()
}

/// None on end of input or read failure
fn get_user_input() -> Option<String> {
    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input),
    }
}
