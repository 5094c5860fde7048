//! REPL input parsing

/// One line of REPL input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplCommand<'a> {
    /// Plain text: set the query and search in one go
    Search(&'a str),
    /// `/query <text>`: set the query without searching
    SetQuery(&'a str),
    /// `/search`: search with the current query
    ExecuteSearch,
    /// `/view`: print the current view again
    View,
    /// `/status`: show the fetch status
    Status,
    Help,
    Quit,
    Unknown(&'a str),
}

impl<'a> ReplCommand<'a> {
    /// Parse a line. Plain text is kept verbatim so the query is never altered.
    pub fn parse(line: &'a str) -> Self {
        let trimmed = line.trim_start();
        if !trimmed.starts_with('/') {
            return ReplCommand::Search(line);
        }

        let (name, rest) = match trimmed.split_once(' ') {
            Some((name, rest)) => (name, rest),
            None => (trimmed.trim_end(), ""),
        };

        match name {
            "/query" | "/set" => ReplCommand::SetQuery(rest),
            "/search" | "/s" => ReplCommand::ExecuteSearch,
            "/view" | "/v" => ReplCommand::View,
            "/status" => ReplCommand::Status,
            "/help" | "/h" | "/?" => ReplCommand::Help,
            "/quit" | "/exit" | "/q" => ReplCommand::Quit,
            _ => ReplCommand::Unknown(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_verbatim_search() {
        assert_eq!(ReplCommand::parse("  love "), ReplCommand::Search("  love "));
        assert_eq!(ReplCommand::parse(""), ReplCommand::Search(""));
    }

    #[test]
    fn test_set_query_keeps_rest_verbatim() {
        assert_eq!(
            ReplCommand::parse("/query be kind "),
            ReplCommand::SetQuery("be kind ")
        );
        assert_eq!(ReplCommand::parse("/query"), ReplCommand::SetQuery(""));
    }

    #[test]
    fn test_commands_and_aliases() {
        assert_eq!(ReplCommand::parse("/search"), ReplCommand::ExecuteSearch);
        assert_eq!(ReplCommand::parse("/s "), ReplCommand::ExecuteSearch);
        assert_eq!(ReplCommand::parse("/v"), ReplCommand::View);
        assert_eq!(ReplCommand::parse("/status"), ReplCommand::Status);
        assert_eq!(ReplCommand::parse("/?"), ReplCommand::Help);
        assert_eq!(ReplCommand::parse("/exit"), ReplCommand::Quit);
        assert_eq!(ReplCommand::parse("/nope x"), ReplCommand::Unknown("/nope"));
    }
}
