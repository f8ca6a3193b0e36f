//! Console notifier and interactive form input
//!
//! The engines treat notifications as opaque side effects; here they become
//! colored terminal lines and a y/N prompt. The form driver walks the
//! resolved fields one at a time, re-resolving after every answer so
//! conditional fields appear the moment their discriminator matches.

use std::io::{self, BufRead, Write};

use async_trait::async_trait;
use campus_engine::{FormEngine, Notifier};
use campus_forms::{Control, ResolvedField};
use colored::Colorize;

use crate::error::CliError;

pub struct ConsoleNotifier;

impl ConsoleNotifier {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Notifier for ConsoleNotifier {
    async fn confirm(&self, title: &str, text: &str) -> bool {
        println!("{} {}", title.bold(), text);
        matches!(read_line("Confirm [y/N]: ").as_deref(), Ok("y") | Ok("Y") | Ok("yes"))
    }

    fn info(&self, message: &str) {
        println!("{} {message}", "i".blue().bold());
    }

    fn success(&self, message: &str) {
        println!("{} {message}", "ok".green().bold());
    }

    fn error(&self, message: &str) {
        eprintln!("{} {message}", "error:".red().bold());
    }

    fn warning(&self, message: &str) {
        println!("{} {message}", "warning:".yellow().bold());
    }
}

fn read_line(prompt: &str) -> io::Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Prompt for every visible field in order. Blank input keeps the current
/// value, so edit mode only touches what the user changes. Progress is
/// tracked by field name, not position: an answer can hide or reveal
/// conditional fields, and the walk must neither skip nor repeat a field
/// when the resolved list shifts underneath it.
pub fn fill_form(form: &mut FormEngine) -> Result<(), CliError> {
    let mut done: Vec<String> = Vec::new();
    while let Some(field) = next_unfilled(form, &done) {
        done.push(field.name.clone());

        let marker = if field.required { " *" } else { "" };
        if let Some(error) = &field.error {
            println!("  {}", error.red());
        }

        match &field.control {
            Control::Checkbox { checked } => {
                let current = if *checked { "yes" } else { "no" };
                let answer = read_line(&format!("{}{marker} [{current}]: ", field.label))?;
                match answer.to_lowercase().as_str() {
                    "" => {}
                    "y" | "yes" | "true" => form.set_value(&field.name, true),
                    _ => form.set_value(&field.name, false),
                }
            }
            Control::Select { options, selected } => {
                if options.is_empty() {
                    println!("{}{marker}: no choices available", field.label);
                    continue;
                }
                println!("{}{marker}:", field.label);
                for (i, option) in options.iter().enumerate() {
                    let mark = if &option.value == selected { "*" } else { " " };
                    println!("  {mark}{}) {}", i + 1, option.label);
                }
                let answer = read_line("Choice: ")?;
                if let Ok(n) = answer.parse::<usize>() {
                    if let Some(option) = options.get(n.saturating_sub(1)) {
                        form.set_value(&field.name, option.value.clone());
                    }
                }
            }
            Control::SearchSelect { options } => {
                if options.is_empty() {
                    println!("{}{marker}: no choices available", field.label);
                    continue;
                }
                let mut widget = match form.search_widget(&field.name) {
                    Some(widget) => widget,
                    None => continue,
                };
                loop {
                    let query = read_line(&format!("{}{marker} (search): ", field.label))?;
                    if query.is_empty() {
                        break;
                    }
                    widget.set_query(query);
                    if widget.no_results() {
                        println!("  no results");
                        continue;
                    }
                    for (i, option) in widget.filtered().iter().enumerate() {
                        println!("  {}) {}", i + 1, option.label);
                    }
                    let pick = read_line("Choice: ")?;
                    if let Ok(n) = pick.parse::<usize>() {
                        if let Some(value) = widget.select(n.saturating_sub(1)) {
                            form.set_value(&field.name, value);
                            break;
                        }
                    }
                }
            }
            Control::Textarea | Control::Text { .. } => {
                let current = field.value.as_str().unwrap_or_default();
                let hint = if current.is_empty() {
                    String::new()
                } else {
                    format!(" [{current}]")
                };
                let answer = read_line(&format!("{}{marker}{hint}: ", field.label))?;
                if !answer.is_empty() {
                    form.set_value(&field.name, answer);
                }
            }
        }
    }
    Ok(())
}

/// First visible field not yet prompted for.
fn next_unfilled(form: &FormEngine, done: &[String]) -> Option<ResolvedField> {
    form.fields().into_iter().find(|f| !done.iter().any(|name| name == &f.name))
}
