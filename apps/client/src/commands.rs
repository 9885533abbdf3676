//! Parses one line of session input into a command.

use std::path::PathBuf;

use thiserror::Error;

use crate::models::form::BulletStyle;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    SkillAdd(String),
    SkillRemove(String),
    ExperienceAdd,
    ExperienceSet {
        reference: String,
        field: String,
        value: String,
    },
    ExperienceRemove(String),
    ProjectAdd,
    ProjectSet {
        reference: String,
        field: String,
        value: String,
    },
    ProjectRemove(String),
    JobDescription(String),
    JobDescriptionAppend(String),
    TopK(u32),
    Rewrite(bool),
    IncludeProjects(bool),
    Style(BulletStyle),
    Upload(PathBuf),
    Drop(PathBuf),
    Response(String),
    Tailor,
    Copy,
    Reset,
    Show,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command '{0}'. Type `help` for the list.")]
    Unknown(String),

    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("Invalid value '{value}': {reason}")]
    InvalidValue { value: String, reason: &'static str },
}

pub const HELP: &str = "\
Commands:
  skill add <name> | skill rm <name>
  exp add | exp set <n|id> <company|role|start|end|bullets> <value> | exp rm <n|id>
  proj add | proj set <n|id> <name|bullets> <value> | proj rm <n|id>
  jd <text> | jd+ <line>          job description (\\n for line breaks)
  topk <n> | rewrite on|off | projects on|off | style concise|balanced|detailed
  upload <path> | drop <path>     select a resume PDF
  response <text>                 edit the response panel
  tailor | copy | reset | show | help | quit";

/// Splits off the first whitespace-delimited word.
fn next_word(input: &str) -> (&str, &str) {
    let input = input.trim_start();
    match input.find(char::is_whitespace) {
        Some(idx) => (&input[..idx], input[idx..].trim_start()),
        None => (input, ""),
    }
}

fn require_text(rest: &str, usage: &'static str) -> Result<String, CommandError> {
    let text = rest.trim();
    if text.is_empty() {
        return Err(CommandError::Usage(usage));
    }
    Ok(text.to_string())
}

fn parse_switch(value: &str) -> Result<bool, CommandError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "on" | "yes" | "true" | "1" => Ok(true),
        "off" | "no" | "false" | "0" => Ok(false),
        other => Err(CommandError::InvalidValue {
            value: other.to_string(),
            reason: "expected on or off",
        }),
    }
}

/// `<ref> <field> <value>`; the value keeps its inner spacing.
fn parse_set(rest: &str, usage: &'static str) -> Result<(String, String, String), CommandError> {
    let (reference, rest) = next_word(rest);
    let (field, value) = next_word(rest);
    if reference.is_empty() || field.is_empty() {
        return Err(CommandError::Usage(usage));
    }
    Ok((
        reference.to_string(),
        field.to_ascii_lowercase(),
        value.trim_end().to_string(),
    ))
}

pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
    let (verb, rest) = next_word(line);
    if verb.is_empty() {
        return Ok(None);
    }

    let command = match verb.to_ascii_lowercase().as_str() {
        "skill" => {
            const USAGE: &str = "skill add|rm <name>";
            let (action, name) = next_word(rest);
            match action {
                "add" => Command::SkillAdd(require_text(name, USAGE)?),
                "rm" | "remove" => Command::SkillRemove(require_text(name, USAGE)?),
                _ => return Err(CommandError::Usage(USAGE)),
            }
        }
        "exp" => {
            const USAGE: &str = "exp add | exp set <n|id> <field> <value> | exp rm <n|id>";
            let (action, args) = next_word(rest);
            match action {
                "add" => Command::ExperienceAdd,
                "set" => {
                    let (reference, field, value) = parse_set(args, USAGE)?;
                    Command::ExperienceSet {
                        reference,
                        field,
                        value,
                    }
                }
                "rm" | "remove" => Command::ExperienceRemove(require_text(args, USAGE)?),
                _ => return Err(CommandError::Usage(USAGE)),
            }
        }
        "proj" => {
            const USAGE: &str = "proj add | proj set <n|id> <field> <value> | proj rm <n|id>";
            let (action, args) = next_word(rest);
            match action {
                "add" => Command::ProjectAdd,
                "set" => {
                    let (reference, field, value) = parse_set(args, USAGE)?;
                    Command::ProjectSet {
                        reference,
                        field,
                        value,
                    }
                }
                "rm" | "remove" => Command::ProjectRemove(require_text(args, USAGE)?),
                _ => return Err(CommandError::Usage(USAGE)),
            }
        }
        "jd" => Command::JobDescription(rest.trim_end().to_string()),
        "jd+" => Command::JobDescriptionAppend(rest.trim_end().to_string()),
        "topk" => {
            let value = require_text(rest, "topk <n>")?;
            let n = value.parse::<u32>().map_err(|_| CommandError::InvalidValue {
                value,
                reason: "expected a non-negative number",
            })?;
            Command::TopK(n)
        }
        "rewrite" => Command::Rewrite(parse_switch(&require_text(rest, "rewrite on|off")?)?),
        "projects" => {
            Command::IncludeProjects(parse_switch(&require_text(rest, "projects on|off")?)?)
        }
        "style" => {
            let value = require_text(rest, "style concise|balanced|detailed")?;
            let style = BulletStyle::parse(&value).ok_or(CommandError::InvalidValue {
                value,
                reason: "expected concise, balanced or detailed",
            })?;
            Command::Style(style)
        }
        "upload" => Command::Upload(PathBuf::from(require_text(rest, "upload <path>")?)),
        "drop" => Command::Drop(PathBuf::from(require_text(rest, "drop <path>")?)),
        "response" => Command::Response(rest.trim_end().to_string()),
        "tailor" => Command::Tailor,
        "copy" => Command::Copy,
        "reset" | "clear" => Command::Reset,
        "show" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(Some(command))
}
