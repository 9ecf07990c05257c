#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    Move(String),
    Undo,
    Moves,
    Board,
    Status,
    Perft(usize),
    New,
    Help,
    Quit,
    Unknown(String),
}

pub fn parse_console_command(line: &str) -> Option<ConsoleCommand> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }
    let parts: Vec<&str> = trimmed.split_whitespace().collect();

    let cmd = match parts[0] {
        "undo" => ConsoleCommand::Undo,
        "moves" => ConsoleCommand::Moves,
        "board" | "d" => ConsoleCommand::Board,
        "status" => ConsoleCommand::Status,
        "perft" => match parts.get(1).map(|v| v.parse::<usize>()) {
            None => ConsoleCommand::Perft(1),
            Some(Ok(depth)) if parts.len() == 2 => ConsoleCommand::Perft(depth),
            _ => ConsoleCommand::Unknown(trimmed.to_string()),
        },
        "new" => ConsoleCommand::New,
        "help" | "?" => ConsoleCommand::Help,
        "quit" | "exit" => ConsoleCommand::Quit,
        mv if parts.len() == 1 => ConsoleCommand::Move(mv.to_string()),
        _ => ConsoleCommand::Unknown(trimmed.to_string()),
    };

    Some(cmd)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_lines_ignored() {
        assert_eq!(parse_console_command(""), None);
        assert_eq!(parse_console_command("   \t"), None);
    }

    #[test]
    fn test_keywords() {
        assert_eq!(parse_console_command("undo"), Some(ConsoleCommand::Undo));
        assert_eq!(parse_console_command(" exit "), Some(ConsoleCommand::Quit));
        assert_eq!(parse_console_command("perft 3"), Some(ConsoleCommand::Perft(3)));
        assert_eq!(parse_console_command("perft"), Some(ConsoleCommand::Perft(1)));
    }

    #[test]
    fn test_malformed_perft_depth_is_unknown() {
        assert_eq!(
            parse_console_command("perft x"),
            Some(ConsoleCommand::Unknown("perft x".to_string()))
        );
        assert_eq!(
            parse_console_command("perft -2"),
            Some(ConsoleCommand::Unknown("perft -2".to_string()))
        );
        assert_eq!(
            parse_console_command("perft 2 3"),
            Some(ConsoleCommand::Unknown("perft 2 3".to_string()))
        );
    }

    #[test]
    fn test_single_token_is_a_move() {
        assert_eq!(
            parse_console_command("e7e8q"),
            Some(ConsoleCommand::Move("e7e8q".to_string()))
        );
        assert_eq!(
            parse_console_command("play e2e4"),
            Some(ConsoleCommand::Unknown("play e2e4".to_string()))
        );
    }
}
