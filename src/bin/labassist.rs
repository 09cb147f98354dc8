// explain a lab program from the terminal, without running the server
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::{
    fs,
    io::{self, Read},
};

use lab_assistant::{edition::JOB_ROLES, explain_code, Edition, ExplainRequest};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = Command::new("labassist")
        .about("Lab Code Assistant command line")
        .subcommand_required(true)
        .subcommand(
            Command::new("explain")
                .aliases(["e", "x"])
                .about("Explain a lab program read from a file or stdin")
                .arg(Arg::new("file").help("Source file, '-' or absent for stdin"))
                .arg(Arg::new("language").long("language").short('l').help("Defaults to C"))
                .arg(Arg::new("concept").long("concept").short('c'))
                .arg(Arg::new("job-role").long("job-role").short('r'))
                .arg(
                    Arg::new("edition")
                        .long("edition")
                        .default_value("preview")
                        .value_parser(|s: &str| s.parse::<Edition>()),
                )
                .arg(Arg::new("pretty").long("pretty").action(ArgAction::SetTrue)),
        )
        .subcommand(Command::new("roles").about("List the recognised job roles"))
        .get_matches();

    match matches.subcommand() {
        Some(("explain", sub)) => explain(sub)?,
        Some(("roles", _)) => {
            for role in JOB_ROLES {
                println!("{}", role);
            }
        }
        _ => {
            eprintln!("Invalid command, use labassist help");
        }
    }
    Ok(())
}

fn explain(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let code = read_source(matches.get_one::<String>("file").map(String::as_str))?;
    let edition = matches
        .get_one::<Edition>("edition")
        .copied()
        .unwrap_or_default();

    let request = ExplainRequest {
        code: Some(code),
        language: matches.get_one::<String>("language").cloned(),
        concept: matches.get_one::<String>("concept").cloned(),
        job_role: matches.get_one::<String>("job-role").cloned(),
    };

    let explanation = explain_code(&request, edition);
    let out = if matches.get_flag("pretty") {
        serde_json::to_string_pretty(&explanation)?
    } else {
        serde_json::to_string(&explanation)?
    };
    println!("{}", out);

    Ok(())
}

fn read_source(path: Option<&str>) -> io::Result<String> {
    match path {
        None | Some("-") => {
            let mut code = String::new();
            io::stdin().read_to_string(&mut code)?;
            Ok(code)
        }
        Some(path) => fs::read_to_string(path),
    }
}
