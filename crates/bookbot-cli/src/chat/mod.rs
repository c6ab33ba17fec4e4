//! Interactive chat loop.
//!
//! Coordinates the conversation lifecycle against the terminal: welcome
//! banner, greeting, multiple-choice question stages, recommendation
//! delivery, and the free-form discussion loop with slash commands.
//! Input is blocked while a generate call is in flight.

mod banner;
mod commands;

use console::style;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use indicatif::{ProgressBar, ProgressStyle};

use bookbot_core::conversation::Conversation;
use bookbot_types::chat::Role;
use bookbot_types::session::{Mode, SessionStage, UserAction};

use commands::ChatCommand;

/// Run the chat loop until the user exits.
pub async fn run(
    conversation: &mut Conversation,
    model: &str,
    startup_notice: Option<String>,
) -> anyhow::Result<()> {
    banner::print_welcome(model, &conversation.id().to_string());

    if let Some(notice) = startup_notice {
        println!("  {} {}", style("!").yellow().bold(), style(notice).yellow());
        println!();
    }

    let mut rendered = 0;
    let mut last_mode = conversation.mode();

    generate_with_spinner(conversation, None).await;
    rendered = render_new_turns(conversation, rendered, &mut last_mode);

    loop {
        match conversation.stage() {
            SessionStage::AwaitingAnswer(_) => {
                let Some(options) = current_options(conversation) else {
                    // Question turn missing would be a state machine bug;
                    // bail out of the loop rather than spin.
                    tracing::error!("awaiting an answer but no question turn found");
                    break;
                };

                let Ok(choice) = Select::with_theme(&ColorfulTheme::default())
                    .items(&options)
                    .default(0)
                    .interact()
                else {
                    break;
                };

                let action = UserAction::SelectOption(options[choice].clone());
                generate_with_spinner(conversation, Some(action)).await;
                rendered = render_new_turns(conversation, rendered, &mut last_mode);
            }

            SessionStage::Discussing => {
                let Ok(line) = Input::<String>::with_theme(&ColorfulTheme::default())
                    .with_prompt("You")
                    .allow_empty(true)
                    .interact_text()
                else {
                    break;
                };
                let line = line.trim().to_string();
                if line.is_empty() {
                    continue;
                }

                if let Some(command) = commands::parse(&line) {
                    match command {
                        ChatCommand::Help => {
                            commands::print_help();
                            continue;
                        }
                        ChatCommand::History => {
                            print_history(conversation);
                            continue;
                        }
                        ChatCommand::Exit => {
                            println!("\n  {}", style("Session ended.").dim());
                            break;
                        }
                        ChatCommand::Reset => {
                            rendered = 0;
                            generate_with_spinner(conversation, Some(UserAction::Reset)).await;
                            rendered = render_new_turns(conversation, rendered, &mut last_mode);
                            continue;
                        }
                        ChatCommand::Mode => {
                            rendered = 0;
                            generate_with_spinner(conversation, Some(UserAction::ToggleMode)).await;
                            rendered = render_new_turns(conversation, rendered, &mut last_mode);
                            continue;
                        }
                        ChatCommand::Unknown(cmd) => {
                            println!(
                                "  {} Unknown command: {} (try /help)",
                                style("!").yellow().bold(),
                                cmd
                            );
                            continue;
                        }
                    }
                }

                generate_with_spinner(conversation, Some(UserAction::FreeText(line))).await;
                rendered = render_new_turns(conversation, rendered, &mut last_mode);
            }

            // Transient stages; the loop never observes them at the top.
            SessionStage::Greeting | SessionStage::Recommending => break,
        }
    }

    Ok(())
}

/// Run `start` (no action) or `handle_action` behind a spinner so the user
/// cannot submit a second action while a call is in flight.
async fn generate_with_spinner(conversation: &mut Conversation, action: Option<UserAction>) {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .expect("static spinner template"),
    );
    spinner.set_message("thinking...");
    spinner.enable_steady_tick(std::time::Duration::from_millis(80));

    match action {
        None => conversation.start().await,
        Some(action) => conversation.handle_action(action).await,
    }

    spinner.finish_and_clear();
}

/// The options of the question currently awaiting an answer.
fn current_options(conversation: &Conversation) -> Option<Vec<String>> {
    conversation
        .transcript()
        .turns()
        .iter()
        .rev()
        .find(|t| t.is_question)
        .map(|t| t.options.clone())
}

/// Print assistant turns appended since the last render; returns the new
/// high-water mark. User turns are echoed by the input widgets already.
fn render_new_turns(conversation: &Conversation, rendered: usize, last_mode: &mut Mode) -> usize {
    let snapshot = conversation.snapshot();

    if snapshot.mode != *last_mode {
        *last_mode = snapshot.mode;
        if snapshot.mode.is_offline() {
            match snapshot.last_error {
                Some(err) => println!(
                    "\n  {} {}",
                    style("!").yellow().bold(),
                    style(format!("An error occurred ({err}); offline mode engaged.")).yellow()
                ),
                None => println!(
                    "\n  {}",
                    style("Running in offline mode. Some features may be limited.").yellow()
                ),
            }
        } else {
            println!("\n  {}", style("Back online.").green());
        }
    }

    let turns = snapshot.transcript.turns();
    for turn in &turns[rendered.min(turns.len())..] {
        if turn.role == Role::Assistant && !turn.is_question {
            println!();
            println!("  {}", style("BOOKBOT").magenta().bold());
            println!("  {}", turn.content.replace('\n', "\n  "));
            println!();
        } else if turn.is_question {
            println!("  {}", style(&turn.content).bold());
        }
    }

    turns.len()
}

/// Print the full conversation history with speaker labels.
fn print_history(conversation: &Conversation) {
    println!();
    println!("  {}", style("Conversation history:").bold());
    println!();
    for turn in conversation.transcript().turns() {
        let label = match turn.role {
            Role::User => style("YOU").green().bold(),
            Role::Assistant => style("BOOKBOT").magenta().bold(),
        };
        println!("  {label}  {}", turn.content.replace('\n', "\n       "));
    }
    println!();
}
