//! CLI host — stdin/stdout chat loop owning the session state.

use tokio::io::{AsyncBufReadExt, BufReader};

use crate::chatbot::{ConversationState, TurnHandler};

/// Run a single screening session over stdin/stdout.
///
/// Reads one line per turn, prints the assistant's response, and stops once
/// the session is over (exit keyword or completed flow) or stdin closes.
pub async fn run(handler: &TurnHandler, state: &mut ConversationState) -> std::io::Result<()> {
    let stdin = tokio::io::stdin();
    let reader = BufReader::new(stdin);
    let mut lines = reader.lines();

    eprint!("> ");
    while let Some(line) = lines.next_line().await? {
        let line = line.trim().to_string();
        if line.is_empty() {
            eprint!("> ");
            continue;
        }

        let response = handler.handle(&line, state).await;
        println!("\n{}\n", response);

        if state.is_session_over() {
            break;
        }
        eprint!("> ");
    }

    Ok(())
}
