use std::io::{BufRead, Write};
use anyhow::{Context, Result};
use log::{debug, info};
use regex::Regex;
use crate::models::GoalPlan;
use crate::utils::gpa::{calculate_gpa, Gradebook};
use crate::utils::insights::{build_report, render_summary, render_table, save_plan, suggestions};

const HELP: &str = "Commands:
  add <name>, <grade>, <credits>   add a course grade
  table                            list courses
  gpa                              show current GPA
  suggest                          show improvement suggestions
  goal <target>; <timeline>        set an academic goal
  json                             print the full report as JSON
  help                             show this message
  quit                             leave
";

#[derive(Debug, PartialEq)]
pub enum Command {
    Add { name: String, grade: String, credits: i64 },
    Table,
    Gpa,
    Suggest,
    Goal { target: String, timeline: String },
    Json,
    Help,
    Quit,
    Unknown(String),
}

pub struct Parser {
    add: Regex,
    goal: Regex,
    leading_int: Regex,
}

impl Parser {
    pub fn new() -> Result<Self> {
        Ok(Self {
            add: Regex::new(r"^add\s+(?P<name>[^,]*),(?P<grade>[^,]*),(?P<credits>.*)$")
                .context("Failed to compile add pattern")?,
            goal: Regex::new(r"^goal\s+(?P<target>[^;]*);(?P<timeline>.*)$")
                .context("Failed to compile goal pattern")?,
            leading_int: Regex::new(r"^[+-]?\d+").context("Failed to compile credits pattern")?,
        })
    }

    pub fn parse(&self, line: &str) -> Command {
        let line = line.trim();
        if let Some(caps) = self.add.captures(line) {
            let credits = self.parse_credits(&caps["credits"]);
            return Command::Add {
                name: caps["name"].trim().to_string(),
                grade: caps["grade"].trim().to_string(),
                credits,
            };
        }
        if let Some(caps) = self.goal.captures(line) {
            return Command::Goal {
                target: caps["target"].trim().to_string(),
                timeline: caps["timeline"].trim().to_string(),
            };
        }
        match line {
            "table" => Command::Table,
            "gpa" => Command::Gpa,
            "suggest" => Command::Suggest,
            "json" => Command::Json,
            "help" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => Command::Unknown(other.to_string()),
        }
    }

    // Takes the leading integer and ignores whatever follows it, so "3.5" is 3 and "4 credits" is 4.
    // Text without a leading integer becomes 0 and the add is rejected like any other bad input.
    fn parse_credits(&self, text: &str) -> i64 {
        self.leading_int
            .find(text.trim())
            .and_then(|m| m.as_str().parse::<i64>().ok())
            .unwrap_or(0)
    }
}

// Holds everything the insights page keeps while it is open.
pub struct Session {
    pub book: Gradebook,
    pub goal: Option<GoalPlan>,
    parser: Parser,
}

impl Session {
    pub fn new(book: Gradebook) -> Result<Self> {
        Ok(Self { book, goal: None, parser: Parser::new()? })
    }

    // Reads commands line by line until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        for line in input.lines() {
            let line = line.context("Failed to read command")?;
            if line.trim().is_empty() {
                continue;
            }
            let command = self.parser.parse(&line);
            if command == Command::Quit {
                break;
            }
            self.execute(command, &mut output)?;
            output.flush().context("Failed to flush output")?;
        }
        info!("Session ended with {} course(s)", self.book.len());
        Ok(())
    }

    pub fn execute<W: Write>(&mut self, command: Command, output: &mut W) -> Result<()> {
        match command {
            Command::Add { name, grade, credits } => {
                if self.book.add_course(&name, &grade, credits).is_none() {
                    debug!("Add ignored for line with name {:?}", name);
                }
            }
            Command::Table => write!(output, "{}", render_table(self.book.records()))?,
            Command::Gpa => write!(output, "{}", render_summary(calculate_gpa(self.book.records())))?,
            Command::Suggest => {
                for suggestion in suggestions() {
                    writeln!(output, "- {}", suggestion)?;
                }
            }
            Command::Goal { target, timeline } => {
                if let Some(plan) = save_plan(&target, &timeline) {
                    self.goal = Some(plan);
                }
            }
            Command::Json => {
                let report = build_report(&self.book, self.goal.as_ref());
                let json = serde_json::to_string_pretty(&report).context("Failed to encode report")?;
                writeln!(output, "{}", json)?;
            }
            Command::Help => write!(output, "{}", HELP)?,
            Command::Quit => {}
            Command::Unknown(line) => writeln!(output, "Unknown command {:?}, type `help` for the list", line)?,
        }
        Ok(())
    }
}
