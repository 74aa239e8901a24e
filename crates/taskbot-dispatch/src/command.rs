//! Operator command parsing.
//!
//! One declarative table maps each command name to its arity and its
//! field binding, so the arity check is written (and tested) once
//! instead of per command. Tokens are split on whitespace; `title` and
//! `description` tokens have their underscores unescaped to spaces (the
//! convention the welcome text tells the operator to use), while ids,
//! dates, and pagination tokens pass through verbatim for the service
//! to validate.

use crate::replies;

/// A parsed operator command, ready to dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start,
    Create {
        title: String,
        description: String,
        due_date: String,
    },
    List {
        page: Option<String>,
        page_size: Option<String>,
    },
    View {
        task_id: String,
    },
    Update {
        task_id: String,
        title: String,
        description: String,
        due_date: String,
    },
    Complete {
        task_id: String,
    },
    Delete {
        task_id: String,
    },
}

/// Everything the parser can say about one line of operator input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Parsed {
    /// A well-formed command.
    Command(Command),
    /// A known command with the wrong argument shape; reply with usage.
    Usage(&'static str),
    /// A slash command no handler is registered for.
    Unknown(String),
    /// Free text without a leading slash.
    NotCommand,
}

/// Replace the documented escape token with a space.
#[must_use]
pub fn unescape(token: &str) -> String {
    token.replace('_', " ")
}

struct CommandSpec {
    name: &'static str,
    min_args: usize,
    max_args: usize,
    usage: &'static str,
    bind: fn(&[&str]) -> Command,
}

const COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        name: "start",
        min_args: 0,
        max_args: 0,
        usage: replies::USAGE_START,
        bind: |_| Command::Start,
    },
    CommandSpec {
        name: "create",
        min_args: 3,
        max_args: 3,
        usage: replies::USAGE_CREATE,
        bind: |args| Command::Create {
            title: unescape(args[0]),
            description: unescape(args[1]),
            due_date: args[2].to_string(),
        },
    },
    CommandSpec {
        name: "list",
        min_args: 0,
        max_args: 2,
        usage: replies::USAGE_LIST,
        bind: |args| Command::List {
            page: args.first().map(|s| (*s).to_string()),
            page_size: args.get(1).map(|s| (*s).to_string()),
        },
    },
    CommandSpec {
        name: "view",
        min_args: 1,
        max_args: 1,
        usage: replies::USAGE_VIEW,
        bind: |args| Command::View {
            task_id: args[0].to_string(),
        },
    },
    CommandSpec {
        name: "update",
        min_args: 4,
        max_args: 4,
        usage: replies::USAGE_UPDATE,
        bind: |args| Command::Update {
            task_id: args[0].to_string(),
            title: unescape(args[1]),
            description: unescape(args[2]),
            due_date: args[3].to_string(),
        },
    },
    CommandSpec {
        name: "complete",
        min_args: 1,
        max_args: 1,
        usage: replies::USAGE_COMPLETE,
        bind: |args| Command::Complete {
            task_id: args[0].to_string(),
        },
    },
    CommandSpec {
        name: "delete",
        min_args: 1,
        max_args: 1,
        usage: replies::USAGE_DELETE,
        bind: |args| Command::Delete {
            task_id: args[0].to_string(),
        },
    },
];

/// Parse one line of operator input.
pub fn parse(text: &str) -> Parsed {
    let mut tokens = text.split_whitespace();
    let Some(head) = tokens.next() else {
        return Parsed::NotCommand;
    };
    let Some(name) = head.strip_prefix('/') else {
        return Parsed::NotCommand;
    };

    let args: Vec<&str> = tokens.collect();
    let Some(spec) = COMMANDS.iter().find(|spec| spec.name == name) else {
        return Parsed::Unknown(name.to_string());
    };

    if args.len() < spec.min_args || args.len() > spec.max_args {
        return Parsed::Usage(spec.usage);
    }

    Parsed::Command((spec.bind)(&args))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_binds_three_tokens_and_unescapes_text_fields() {
        let parsed = parse("/create Buy_milk Get_2L 2024-05-01");
        assert_eq!(
            parsed,
            Parsed::Command(Command::Create {
                title: "Buy milk".to_string(),
                description: "Get 2L".to_string(),
                due_date: "2024-05-01".to_string(),
            })
        );
    }

    #[test]
    fn create_arity_mismatch_is_a_usage_error() {
        assert_eq!(parse("/create only two"), Parsed::Usage(replies::USAGE_CREATE));
        assert_eq!(
            parse("/create one two three four"),
            Parsed::Usage(replies::USAGE_CREATE)
        );
    }

    #[test]
    fn list_accepts_zero_one_or_two_args() {
        assert_eq!(
            parse("/list"),
            Parsed::Command(Command::List {
                page: None,
                page_size: None
            })
        );
        assert_eq!(
            parse("/list 2"),
            Parsed::Command(Command::List {
                page: Some("2".to_string()),
                page_size: None
            })
        );
        assert_eq!(
            parse("/list 2 5"),
            Parsed::Command(Command::List {
                page: Some("2".to_string()),
                page_size: Some("5".to_string())
            })
        );
        assert_eq!(parse("/list 2 5 9"), Parsed::Usage(replies::USAGE_LIST));
    }

    #[test]
    fn id_tokens_pass_through_verbatim() {
        // Even a non-numeric token: the service rejects it, not us.
        assert_eq!(
            parse("/view abc"),
            Parsed::Command(Command::View {
                task_id: "abc".to_string()
            })
        );
    }

    #[test]
    fn update_binds_id_then_unescaped_fields() {
        let parsed = parse("/update 7 New_title New_description 2024-06-01");
        assert_eq!(
            parsed,
            Parsed::Command(Command::Update {
                task_id: "7".to_string(),
                title: "New title".to_string(),
                description: "New description".to_string(),
                due_date: "2024-06-01".to_string(),
            })
        );
    }

    #[test]
    fn single_id_commands_require_exactly_one_arg() {
        assert_eq!(parse("/view"), Parsed::Usage(replies::USAGE_VIEW));
        assert_eq!(parse("/complete"), Parsed::Usage(replies::USAGE_COMPLETE));
        assert_eq!(parse("/delete 1 2"), Parsed::Usage(replies::USAGE_DELETE));
        assert_eq!(
            parse("/complete 7"),
            Parsed::Command(Command::Complete {
                task_id: "7".to_string()
            })
        );
    }

    #[test]
    fn start_takes_no_args() {
        assert_eq!(parse("/start"), Parsed::Command(Command::Start));
        assert_eq!(parse("/start now"), Parsed::Usage(replies::USAGE_START));
    }

    #[test]
    fn unregistered_commands_are_reported_as_unknown() {
        assert_eq!(parse("/frobnicate 1"), Parsed::Unknown("frobnicate".to_string()));
    }

    #[test]
    fn free_text_is_not_a_command() {
        assert_eq!(parse("hello there"), Parsed::NotCommand);
        assert_eq!(parse("   "), Parsed::NotCommand);
        assert_eq!(parse(""), Parsed::NotCommand);
    }

    #[test]
    fn unescape_replaces_every_underscore() {
        assert_eq!(unescape("a_b_c"), "a b c");
        assert_eq!(unescape("plain"), "plain");
    }
}
