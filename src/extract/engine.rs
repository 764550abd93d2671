use anyhow::Result;
use colored::Colorize;

use crate::query::field_value_regex;
use crate::redis::{SearchCommand, SearchCommandError, run_search};

use super::reply::{Reply, truncate_chars};

/// Field whose value is extracted from each payload line.
pub const ID_FIELD: &str = "serviceId";
/// Payload lines must mention this category to be considered.
pub const CATEGORY_MARKER: &str = "cudb";
/// The onboarding service is itself indexed under the same type; it is
/// never an organization.
pub const SENTINEL_ID: &str = "onboarding";

const PREVIEW_LINES: usize = 10;
const PREVIEW_CHARS: usize = 100;

/// Runs one search and extracts organization IDs from the raw reply,
/// narrating every step on stdout.
pub struct ExtractionEngine {
    command: SearchCommand,
}

impl ExtractionEngine {
    pub fn new(command: SearchCommand) -> Self {
        Self { command }
    }

    pub fn command(&self) -> &SearchCommand {
        &self.command
    }

    /// The full operation: invoke redis-cli, inspect the reply, extract.
    ///
    /// A non-zero exit from the external tool is reported and absorbed
    /// (empty result). Spawn and IO faults propagate.
    pub fn run(&self) -> Result<Vec<String>> {
        println!("{}", "🔍 Debugging organization extraction...".cyan());

        let stdout = match run_search(&self.command) {
            Ok(stdout) => stdout,
            Err(err @ SearchCommandError::NonZeroExit { .. }) => {
                println!("{} {err}", "❌ Error:".red());
                return Ok(Vec::new());
            }
            Err(err) => return Err(err.into()),
        };

        let reply = Reply::parse(&stdout);
        tracing::debug!(lines = reply.line_count(), "captured search reply");
        self.print_reply_preview(&reply);

        let organizations = self.extract(&reply);

        println!();
        println!(
            "{}",
            format!("✅ Extracted {} active organizations", organizations.len()).green()
        );
        let preview: Vec<&str> = organizations
            .iter()
            .take(PREVIEW_LINES)
            .map(String::as_str)
            .collect();
        println!("📋 Organizations: {preview:?}");

        Ok(organizations)
    }

    /// Pure extraction over an already-captured reply. Value lines that fail
    /// any check are skipped without disturbing collected results.
    pub fn extract(&self, reply: &Reply) -> Vec<String> {
        let field_token = format!("\"{ID_FIELD}\":\"");
        let category_token = format!("\"{CATEGORY_MARKER}\"");
        let field_regex =
            field_value_regex(ID_FIELD).expect("the id field compiles to a valid regex");

        let mut organizations = Vec::new();
        for pair in reply.pairs() {
            let line = pair.value;
            println!();
            println!("🔍 Processing line {}:", pair.value_index);
            println!("   Contains '{ID_FIELD}': {}", line.contains(ID_FIELD));
            println!(
                "   Contains '{CATEGORY_MARKER}': {}",
                line.contains(CATEGORY_MARKER)
            );

            if !(line.contains(&field_token) && line.contains(&category_token)) {
                println!("   {}", "❌ Conditions not met".red());
                continue;
            }

            match field_regex.captures(line) {
                Some(caps) => {
                    let service_id = caps[1].to_string();
                    println!("   Found {ID_FIELD}: {service_id}");
                    if service_id == SENTINEL_ID {
                        println!(
                            "   {}",
                            format!("❌ Skipped ({SENTINEL_ID}): {service_id}").yellow()
                        );
                    } else {
                        println!("   {}", format!("✅ Added: {service_id}").green());
                        organizations.push(service_id);
                    }
                }
                None => println!("   {}", format!("❌ No {ID_FIELD} match found").red()),
            }
        }

        organizations
    }

    fn print_reply_preview(&self, reply: &Reply) {
        println!("📊 Total lines: {}", reply.line_count());
        println!("📊 First few lines:");
        for (i, line) in reply.lines().iter().take(PREVIEW_LINES).enumerate() {
            let shown = truncate_chars(line, PREVIEW_CHARS);
            if shown.len() < line.len() {
                println!("   {i}: {shown}...");
            } else {
                println!("   {i}: {shown}");
            }
        }
    }
}
