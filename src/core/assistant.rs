//! Rule-based HR assistant answering free-text messages from the directory.
//!
//! Rules are checked in order: stop words, greetings, an employee code, a
//! mentioned employee name, help, time/date, then a fallback. Every reply has
//! a text form and a speech-friendly form.

use crate::core::profile::EmployeeProfile;
use crate::core::query;
use crate::domain::model::Dataset;
use crate::utils::error::{DirectoryError, Result};
use chrono::{DateTime, Local, TimeZone};
use regex::Regex;
use serde::Serialize;
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplyKind {
    Stop,
    Greeting,
    Employee,
    UnknownCode,
    Help,
    Time,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reply {
    pub kind: ReplyKind,
    pub text: String,
    pub voice: String,
}

impl Reply {
    fn new(kind: ReplyKind, text: impl Into<String>, voice: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            voice: voice.into(),
        }
    }
}

pub struct Assistant<'a> {
    dataset: &'a Dataset,
    stop: Regex,
    greeting: Regex,
    code: Regex,
    help: Regex,
    clock: Regex,
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| DirectoryError::ConfigError {
        message: format!("Invalid assistant pattern {}: {}", pattern, e),
    })
}

impl<'a> Assistant<'a> {
    pub fn new(dataset: &'a Dataset) -> Result<Self> {
        Ok(Self {
            dataset,
            stop: compile(r"\b(stop|interrupt|cancel|nevermind|wait)\b")?,
            greeting: compile(r"\b(hello|hi|hey|good morning|good afternoon)\b")?,
            code: compile(r"vipl\w+")?,
            help: compile(r"\bhelp\b")?,
            clock: compile(r"\b(time|date)\b")?,
        })
    }

    pub fn respond(&self, message: &str) -> Reply {
        self.respond_at(message, Local::now())
    }

    /// Same as `respond`, with the clock supplied by the caller.
    pub fn respond_at<Tz>(&self, message: &str, now: DateTime<Tz>) -> Reply
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let message = message.trim().to_lowercase();
        let reply = self.reply_for(&message, now);
        tracing::debug!("Assistant replied with {:?} to {:?}", reply.kind, message);
        reply
    }

    fn reply_for<Tz>(&self, message: &str, now: DateTime<Tz>) -> Reply
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        if self.stop.is_match(message) {
            return Reply::new(
                ReplyKind::Stop,
                "🛑 Stopped! What would you like to know instead?",
                "Stopped! What would you like to know instead?",
            );
        }

        if self.greeting.is_match(message) {
            return self.greeting_reply();
        }

        if let Some(code) = self.code.find(message) {
            let code = code.as_str();
            return match query::find_by_code_ignore_case(self.dataset.records(), code) {
                Some(employee) => {
                    let profile = EmployeeProfile::new(employee);
                    Reply::new(ReplyKind::Employee, profile.card(), profile.spoken())
                }
                None => {
                    let code = code.to_uppercase();
                    Reply::new(
                        ReplyKind::UnknownCode,
                        format!("❌ No employee found with code: {}", code),
                        format!("No employee found with code {}", code),
                    )
                }
            };
        }

        if let Some(employee) = query::mentioned_in(self.dataset.records(), message) {
            let profile = EmployeeProfile::new(employee);
            return Reply::new(ReplyKind::Employee, profile.card(), profile.spoken());
        }

        if self.help.is_match(message) {
            return Reply::new(
                ReplyKind::Help,
                "🤖 I can help you with:\n\
                 \n\
                 Employee search:\n\
                 • Mention an employee's first name or surname\n\
                 • Give an employee code, e.g. \"Employee VIPL2SP24054\"\n\
                 \n\
                 Other:\n\
                 • Ask for the current time or date\n\
                 • Say \"stop\" to cancel and ask something else",
                "I can help you with employee search and the current time. \
                 Mention an employee by name or give their employee code. \
                 You can say stop at any time to ask something else.",
            );
        }

        if self.clock.is_match(message) {
            return Reply::new(
                ReplyKind::Time,
                format!("🕐 Current Time: {}", now.format("%Y-%m-%d %H:%M:%S")),
                format!(
                    "The current date and time is {}",
                    now.format("%B %d, %Y at %I:%M %p")
                ),
            );
        }

        Reply::new(
            ReplyKind::Fallback,
            "🤔 I'm not sure about that. Try mentioning an employee by name or code, \
             or type \"help\" for more options.",
            "I'm not sure about that. I can help you find employee information. \
             Try mentioning an employee by name or code, or say help.",
        )
    }

    fn greeting_reply(&self) -> Reply {
        let names: Vec<String> = self
            .dataset
            .iter()
            .map(|employee| employee.first_name.trim())
            .filter(|name| !name.is_empty())
            .take(3)
            .map(|name| format!("'{}'", name))
            .collect();

        let mut text = "Hello! 👋 I'm your HR Assistant. I can look up employee information \
                        by name or employee code."
            .to_string();
        if !names.is_empty() {
            text.push_str(&format!(
                "\n\nTry asking about employees like {}!",
                names.join(", ")
            ));
        }
        text.push_str("\n\n💡 Tip: say 'stop' anytime to ask something else.");

        Reply::new(
            ReplyKind::Greeting,
            text,
            "Hello! I'm your HR Assistant. I can help you with employee information. \
             You can interrupt me anytime by saying stop.",
        )
    }
}
