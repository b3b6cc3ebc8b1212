#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Place { row: i64, column: i64 },
    New,
    Help,
    Quit,
}

pub fn parse_command(line: &str) -> Result<Command, String> {
    let mut parts = line.split_whitespace();
    let Some(first) = parts.next() else {
        return Err("Enter a move as `row column`, or `help`".to_string());
    };

    match first.to_ascii_lowercase().as_str() {
        "new" | "n" => return Ok(Command::New),
        "help" | "h" | "?" => return Ok(Command::Help),
        "quit" | "q" | "exit" => return Ok(Command::Quit),
        _ => {}
    }

    let row = parse_index(first, "row")?;
    let column = match parts.next() {
        Some(value) => parse_index(value, "column")?,
        None => return Err("Missing column, expected `row column`".to_string()),
    };
    if parts.next().is_some() {
        return Err("Too many values, expected `row column`".to_string());
    }

    Ok(Command::Place { row, column })
}

fn parse_index(value: &str, name: &str) -> Result<i64, String> {
    value
        .parse::<i64>()
        .map_err(|_| format!("Invalid {} '{}'", name, value))
}
