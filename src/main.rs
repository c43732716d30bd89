use std::env;
use std::error::Error;
use std::process;

use clap::{App, Arg, ArgGroup, ArgMatches};
use log::debug;

use sokoban_search::config::{Method, SolverConfig};
use sokoban_search::solver::{self, can_go_there};
use sokoban_search::{Dir, LoadLevel, Solve, Warehouse};

fn main() {
    env_logger::init();

    let matches = App::new("sokoban-search")
        .author("martin-t")
        .version("0.1")
        .arg(
            Arg::with_name("macro")
                .short("m")
                .long("macro")
                .help("search over pushes instead of single steps"),
        ).arg(
            Arg::with_name("method")
                .long("method")
                .takes_value(true)
                .value_name("METHOD")
                .help("astar (default) or bfs"),
        ).arg(
            Arg::with_name("allow-taboo-push")
                .long("allow-taboo-push")
                .help("don't prune pushes onto taboo cells"),
        ).arg(
            Arg::with_name("status")
                .short("s")
                .long("status")
                .help("print stats whenever the search reaches a new depth"),
        ).arg(
            Arg::with_name("taboo")
                .short("t")
                .long("taboo")
                .help("only print the taboo cells"),
        ).arg(
            Arg::with_name("check")
                .long("check")
                .takes_value(true)
                .value_name("ACTIONS")
                .help("replay comma separated steps, e.g. Right,Right,Down"),
        ).arg(
            Arg::with_name("reach")
                .long("reach")
                .takes_value(true)
                .value_name("ROW,COL")
                .help("can the worker walk to the cell without pushing anything"),
        ).group(ArgGroup::with_name("task").args(&["taboo", "check", "reach"]))
        .arg(Arg::with_name("file").required(true))
        .get_matches();

    if let Err(err) = run(&matches) {
        println!("{}", err);
        process::exit(1);
    }
}

fn run(matches: &ArgMatches<'_>) -> Result<(), Box<dyn Error>> {
    let method = match matches.value_of("method") {
        Some(name) => name.parse()?,
        None => Method::default(),
    };
    let config = SolverConfig::new(method, matches.is_present("allow-taboo-push"));
    debug!("Using {:?}", config);

    // required arg
    let path = matches.value_of("file").unwrap_or_default();
    let warehouse = path.load_level().map_err(|err| {
        let current_dir = env::current_dir()
            .map(|dir| dir.display().to_string())
            .unwrap_or_default();
        format!("Can't load level {} in {}: {}", path, current_dir, err)
    })?;

    if matches.is_present("taboo") {
        println!("{}", warehouse.format_taboo());
    } else if let Some(actions) = matches.value_of("check") {
        check(&warehouse, actions)?;
    } else if let Some(dest) = matches.value_of("reach") {
        let dest = parse_row_col(dest)?;
        println!("{}", can_go_there(&warehouse, dest));
    } else {
        println!("{}\n", warehouse);
        println!("Solving {}...", path);
        let print_status = matches.is_present("status");
        if matches.is_present("macro") {
            println!("{}", warehouse.solve_macro(config, print_status)?);
        } else {
            println!("{}", warehouse.solve_elementary(config, print_status)?);
        }
    }

    Ok(())
}

fn check(warehouse: &Warehouse, actions: &str) -> Result<(), Box<dyn Error>> {
    let actions = actions
        .split(',')
        .map(|name| parse_dir(name.trim()))
        .collect::<Result<Vec<_>, _>>()?;
    match solver::check_action_seq(warehouse, &actions) {
        Ok(moved) => println!("{}", moved),
        Err(err) => println!("{}", err),
    }
    Ok(())
}

fn parse_dir(name: &str) -> Result<Dir, Box<dyn Error>> {
    match name.to_lowercase().as_str() {
        "up" | "u" => Ok(Dir::Up),
        "down" | "d" => Ok(Dir::Down),
        "left" | "l" => Ok(Dir::Left),
        "right" | "r" => Ok(Dir::Right),
        _ => Err(format!("Unknown action: {}", name).into()),
    }
}

fn parse_row_col(s: &str) -> Result<(i32, i32), Box<dyn Error>> {
    let parts: Vec<_> = s.split(',').map(str::trim).collect();
    if parts.len() != 2 {
        return Err(format!("Expected ROW,COL, got: {}", s).into());
    }
    Ok((parts[0].parse()?, parts[1].parse()?))
}
