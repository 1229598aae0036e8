//! The fixed command table.
//!
//! Rows are matched in order, so table order is dispatch priority. The
//! autocomplete vocabulary and the `help` text are both derived from here.

/// How the normalized input has to look for a row to match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Form {
    /// The whole input equals the name.
    Exact,
    /// The input is the name, one space, then an argument.
    WithArgument,
}

/// What a matched row does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Help,
    Clear,
    Status,
    /// Look up a section, select it, print its details.
    Navigate,
    /// Look up a section and print its details.
    Show,
    /// Print the current section's details.
    List,
    /// Canned output, independent of state.
    Text(&'static [&'static str]),
}

#[derive(Debug)]
pub struct Command {
    pub name: &'static str,
    pub form: Form,
    pub usage: &'static str,
    pub summary: &'static str,
    pub action: Action,
}

impl Command {
    /// Argument carried by `input` if this row matches it (`""` for exact forms).
    pub fn match_input<'a>(&self, input: &'a str) -> Option<&'a str> {
        match self.form {
            Form::Exact => (input == self.name).then_some(""),
            Form::WithArgument => input
                .strip_prefix(self.name)
                .and_then(|rest| rest.strip_prefix(' '))
                .map(str::trim),
        }
    }
}

const UPTIME: &[&str] = &["System uptime: 47 days, 12:34:56"];

const WHOAMI: &[&str] = &["root@hosting-control"];

const PS: &[&str] = &[
    "  PID USER       %CPU %MEM COMMAND",
    "    1 root        0.0  0.1 /sbin/init",
    "  812 www-data    2.3  1.4 nginx: worker process",
    "  944 mysql       5.1 12.8 /usr/sbin/mysqld",
    " 1203 www-data    1.7  3.2 php-fpm: pool www",
    " 1877 redis       0.4  0.9 redis-server *:6379",
    " 2210 postfix     0.1  0.3 /usr/lib/postfix/sbin/master",
];

const DF: &[&str] = &[
    "Filesystem      Size  Used Avail Use% Mounted on",
    "/dev/sda1       100G   78G   22G  78% /",
    "/dev/sdb1       500G  312G  188G  63% /var/www",
    "/dev/sdc1       1.0T  410G  590G  41% /backups",
    "tmpfs           7.8G  1.2M  7.8G   1% /run",
];

const FREE: &[&str] = &[
    "               total        used        free      shared  buff/cache   available",
    "Mem:            15Gi       9.6Gi       1.2Gi       312Mi       4.9Gi       5.4Gi",
    "Swap:          4.0Gi       256Mi       3.8Gi",
];

pub const COMMANDS: &[Command] = &[
    Command {
        name: "help",
        form: Form::Exact,
        usage: "help",
        summary: "Show this help message",
        action: Action::Help,
    },
    Command {
        name: "clear",
        form: Form::Exact,
        usage: "clear",
        summary: "Clear terminal",
        action: Action::Clear,
    },
    Command {
        name: "status",
        form: Form::Exact,
        usage: "status",
        summary: "Show system status",
        action: Action::Status,
    },
    Command {
        name: "section",
        form: Form::WithArgument,
        usage: "section <name>",
        summary: "Navigate to section (files, settings, stats, etc)",
        action: Action::Navigate,
    },
    Command {
        name: "cat",
        form: Form::WithArgument,
        usage: "cat <name>",
        summary: "Show section details without navigating",
        action: Action::Show,
    },
    Command {
        name: "ls",
        form: Form::Exact,
        usage: "ls",
        summary: "List current resources",
        action: Action::List,
    },
    Command {
        name: "uptime",
        form: Form::Exact,
        usage: "uptime",
        summary: "Show system uptime",
        action: Action::Text(UPTIME),
    },
    Command {
        name: "whoami",
        form: Form::Exact,
        usage: "whoami",
        summary: "Show current user",
        action: Action::Text(WHOAMI),
    },
    Command {
        name: "ps",
        form: Form::Exact,
        usage: "ps",
        summary: "Show running processes",
        action: Action::Text(PS),
    },
    Command {
        name: "df",
        form: Form::Exact,
        usage: "df",
        summary: "Show disk usage",
        action: Action::Text(DF),
    },
    Command {
        name: "free",
        form: Form::Exact,
        usage: "free",
        summary: "Show memory usage",
        action: Action::Text(FREE),
    },
];

/// Command names eligible for autocomplete, in table order.
pub fn vocabulary() -> Vec<&'static str> {
    COMMANDS.iter().map(|c| c.name).collect()
}

/// Help rows with no table entry; typing them still reports "Command not found".
const HELP_ONLY: &[(&str, &str)] = &[("exit", "Close terminal (unavailable)")];

pub fn help_lines() -> Vec<String> {
    let mut lines = Vec::with_capacity(COMMANDS.len() + HELP_ONLY.len() + 1);
    lines.push("Available commands:".to_string());
    let rows = COMMANDS
        .iter()
        .map(|c| (c.usage, c.summary))
        .chain(HELP_ONLY.iter().copied());
    for (usage, summary) in rows {
        lines.push(format!("  {:<15}- {}", usage, summary));
    }
    lines
}

/// Command name recorded for the startup banner entry.
pub const BANNER_COMMAND: &str = "system";

pub const BANNER: &[&str] = &[
    "╔══════════════════════════════════════════════════╗",
    "║   HOSTING CONTROL TERMINAL v2.0.1                ║",
    "║   System online • All services operational       ║",
    "╚══════════════════════════════════════════════════╝",
    "",
    "Type \"help\" for available commands",
    "Type \"section <name>\" to navigate sections",
];
