use std::io::{self, BufRead, Write};

use clap::Parser;
use standup::controller::controller::{Intent, NavigationController, View};
use standup::repository::repository::{PeopleRepository, RepositoryOptions};

/// 🎲 Standup runner, keeps a roster of people in a local JSON file and
/// picks a random winner from the attendees of each standup
#[derive(Parser, Debug)]
struct Cli {
    /// Location of the roster file. Reads / writes to this path. Note: Does not support shell paths, e.g. ~
    #[clap(short, long, default_value = "data/people.json")]
    data: std::path::PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let args = Cli::parse();

    let options = RepositoryOptions::default().set_roster_path(args.data);
    let repository = PeopleRepository::new(options)?;
    let mut controller = NavigationController::new(repository)?;

    let stdin = io::stdin();

    loop {
        render(controller.view());

        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let line = line.trim();

        if line == "quit" || line == "q" {
            break;
        }

        let Some(intent) = intent_for(controller.view(), line) else {
            println!("Unrecognised command: {:?}", line);
            continue;
        };

        // The controller leaves its view untouched on failure, so a bad
        // command just reports and re-renders
        if let Err(err) = controller.dispatch(intent) {
            println!("Error: {}", err);
        }
    }

    Ok(())
}

fn render(view: &View) {
    println!();

    match view {
        View::StandupCreate { sheet } => {
            println!("== Standup ==");
            for (index, row) in sheet.rows().iter().enumerate() {
                let mark = if row.attending { "x" } else { " " };
                println!("  [{}] {} {}", mark, index, row.person.name);
            }
            println!("Commands: toggle <row> | start | people | quit");
        }
        View::PeopleIndex { people } => {
            println!("== People ==");
            for (index, person) in people.iter().enumerate() {
                println!("  {} {} ({})", index, person.name, person.id);
            }
            println!("Commands: new | edit <row> | delete <row> | back | quit");
        }
        View::NewPerson => {
            println!("== New Person ==");
            println!("Type a name to create");
        }
        View::EditPerson { person } => {
            println!("== Edit Person ==");
            println!("Current name: {}", person.name);
            println!("Type a new name");
        }
        View::StandupShow { standup } => {
            let attendees: Vec<&str> = standup
                .people
                .iter()
                .map(|person| person.name.as_str())
                .collect();

            println!("== Standup Result ==");
            println!("Attendees: {}", attendees.join(", "));
            println!("🎉 Winner: {}", standup.winner.name);
            println!("Commands: back | quit");
        }
    }
}

// Maps a console line to an intent for the active view. Row numbers come
// from the view just rendered, so each intent carries its own id by value.
fn intent_for(view: &View, line: &str) -> Option<Intent> {
    let words: Vec<&str> = line.split_whitespace().collect();

    match view {
        View::StandupCreate { sheet } => match words.as_slice() {
            ["people"] => Some(Intent::EditPeople),
            ["start"] => Some(Intent::StartStandup),
            ["toggle", row] => {
                let row = sheet.rows().get(row.parse::<usize>().ok()?)?;

                Some(Intent::ToggleAttendance {
                    id: row.person.id.clone(),
                })
            }
            _ => None,
        },
        View::PeopleIndex { people } => match words.as_slice() {
            ["new"] => Some(Intent::AddNew),
            ["back"] => Some(Intent::BackToStandup),
            ["edit", row] => {
                let person = people.get(row.parse::<usize>().ok()?)?;

                Some(Intent::EditPerson {
                    id: person.id.clone(),
                })
            }
            ["delete", row] => {
                let person = people.get(row.parse::<usize>().ok()?)?;

                Some(Intent::DeletePerson {
                    id: person.id.clone(),
                })
            }
            _ => None,
        },
        View::NewPerson => (!line.is_empty()).then(|| Intent::CreatePerson {
            name: line.to_string(),
        }),
        View::EditPerson { .. } => (!line.is_empty()).then(|| Intent::UpdatePerson {
            name: line.to_string(),
        }),
        View::StandupShow { .. } => match words.as_slice() {
            ["back"] => Some(Intent::Back),
            _ => None,
        },
    }
}
