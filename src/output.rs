use clap::ValueEnum;
use colored::Colorize;

use crate::error::Result;
use crate::merge::Conflict;
use crate::model::{Priority, Status, Task};
use crate::stats::Statistics;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Json,
    Pretty,
    Minimal,
}

fn status_symbol(status: Status) -> &'static str {
    match status {
        Status::Todo => "[ ]",
        Status::InProgress => "[>]",
        Status::Review => "[?]",
        Status::Done => "[x]",
        Status::Cancelled => "[-]",
    }
}

fn priority_symbol(priority: Priority) -> &'static str {
    match priority {
        Priority::Low => "!",
        Priority::Medium => "!!",
        Priority::High => "!!!",
        Priority::Urgent => "!!!!",
    }
}

/// First eight characters of an id, enough to address a task on the CLI.
pub fn short_id(id: &str) -> &str {
    &id[..id.len().min(8)]
}

pub fn print_task(task: &Task, format: Format) -> Result<()> {
    match format {
        Format::Json => println!("{}", serde_json::to_string(&task)?),
        Format::Pretty => {
            let header = format!(
                "{} {} - {} {}",
                status_symbol(task.status),
                short_id(&task.id),
                priority_symbol(task.priority),
                task.title
            );
            if task.is_deleted() {
                println!("{} {}", header.dimmed(), "(deleted)".red());
            } else if task.status == Status::Done {
                println!("{}", header.green());
            } else {
                println!("{header}");
            }
            if !task.description.is_empty() {
                println!("  {}", task.description);
            }
            let due = match task.due_date {
                Some(due) => format!("Due: {}", due.format("%Y-%m-%d")),
                None => "No due date".to_string(),
            };
            let tags = if task.tags.is_empty() {
                "No tags".to_string()
            } else {
                let tags: Vec<&str> = task.tags.iter().map(String::as_str).collect();
                format!("Tags: {}", tags.join(", "))
            };
            println!("  {due} | {tags}");
            println!("  Created: {}", task.created_at.format("%Y-%m-%d %H:%M"));
        }
        Format::Minimal => {
            println!(
                "{:8} {:4} {:11} {}",
                short_id(&task.id),
                priority_symbol(task.priority),
                task.status.to_string(),
                task.title
            );
        }
    }
    Ok(())
}

pub fn print_tasks(tasks: &[Task], format: Format) -> Result<()> {
    match format {
        Format::Json => println!("{}", serde_json::to_string(tasks)?),
        Format::Pretty => {
            for task in tasks {
                print_task(task, Format::Pretty)?;
                println!();
            }
        }
        Format::Minimal => {
            println!("{:8} {:4} {:11} TITLE", "ID", "PRI", "STATUS");
            println!("{}", "-".repeat(50));
            for task in tasks {
                print_task(task, Format::Minimal)?;
            }
        }
    }
    Ok(())
}

pub fn print_conflicts(conflicts: &[Conflict], format: Format) -> Result<()> {
    match format {
        Format::Json => println!("{}", serde_json::to_string(conflicts)?),
        Format::Pretty | Format::Minimal => {
            for conflict in conflicts {
                println!(
                    "{} {} on task {}",
                    "conflict:".yellow(),
                    conflict.field,
                    short_id(&conflict.task_id)
                );
                println!("  local:  {}", conflict.local_value);
                println!("  remote: {}", conflict.remote_value);
                println!("  chosen: {} ({})", conflict.chosen_value.bold(), conflict.reason);
            }
        }
    }
    Ok(())
}

pub fn print_stats(stats: &Statistics, format: Format) -> Result<()> {
    match format {
        Format::Json => println!("{}", serde_json::to_string(stats)?),
        Format::Pretty | Format::Minimal => {
            println!("Total tasks: {}", stats.total);
            println!("By status:");
            for (status, count) in &stats.by_status {
                println!("  {status}: {count}");
            }
            println!("By priority:");
            for (priority, count) in &stats.by_priority {
                println!("  {priority}: {count}");
            }
            println!("Overdue tasks: {}", stats.overdue);
            println!("Completed in last 7 days: {}", stats.completed_last_week);
        }
    }
    Ok(())
}
