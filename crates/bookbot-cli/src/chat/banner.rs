//! Welcome banner display for chat sessions.

use console::style;

/// Print the welcome banner at the start of a chat session.
pub fn print_welcome(model: &str, session_id: &str) {
    println!();
    println!("  {} {}", "📚", style("BookBot").cyan().bold());
    println!(
        "  {}",
        style("AI book recommendation companion").dim()
    );
    println!();
    println!("  {}  {}", style("Model:").bold(), style(model).dim());
    println!(
        "  {}  {}",
        style("Session:").bold(),
        style(&session_id[..8.min(session_id.len())]).dim()
    );
    println!();
    println!(
        "  {}",
        style("Answer the questions to get recommendations; /help for commands").dim()
    );
    println!("  {}", style("---").dim());
    println!();
}
