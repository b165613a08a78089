#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Home,
    Tweets,
    About,
    Classify,
    Map,
    Help,
    Quit,
}

pub fn parse_command(input: &str) -> Option<Command> {
    let input = input.strip_prefix(':').unwrap_or(input).trim();

    if input.is_empty() {
        return None;
    }

    match input {
        "home" => Some(Command::Home),
        "tweets" | "t" => Some(Command::Tweets),
        "about" => Some(Command::About),
        "classify" | "fetch" | "c" => Some(Command::Classify),
        "map" | "m" => Some(Command::Map),
        "help" | "h" => Some(Command::Help),
        "quit" | "q" => Some(Command::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command_pages() {
        assert_eq!(parse_command(":home"), Some(Command::Home));
        assert_eq!(parse_command("tweets"), Some(Command::Tweets));
        assert_eq!(parse_command(":about"), Some(Command::About));
    }

    #[test]
    fn test_parse_command_actions() {
        assert_eq!(parse_command(":classify"), Some(Command::Classify));
        assert_eq!(parse_command(":fetch"), Some(Command::Classify));
        assert_eq!(parse_command(":map"), Some(Command::Map));
    }

    #[test]
    fn test_parse_command_aliases() {
        assert_eq!(parse_command(":q"), Some(Command::Quit));
        assert_eq!(parse_command(":h"), Some(Command::Help));
        assert_eq!(parse_command(":m"), Some(Command::Map));
        assert_eq!(parse_command(":t"), Some(Command::Tweets));
        assert_eq!(parse_command(":c"), Some(Command::Classify));
    }

    #[test]
    fn test_parse_command_empty() {
        assert_eq!(parse_command(""), None);
        assert_eq!(parse_command(":"), None);
    }

    #[test]
    fn test_parse_command_unknown() {
        assert_eq!(parse_command(":frobnicate"), None);
    }
}
