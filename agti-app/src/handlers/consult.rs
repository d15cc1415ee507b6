use agti_advisor::ConsultantAgent;
use anyhow::Result;
use shared_types::Language;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::i18n::strings;
use crate::render::{render_message, render_transcript};
use crate::session::SubmitRejected;
use crate::state::{reduce, Action, AppState, View};

const REPL_HELP: &str = "Commands: /lang en|id, /reset, /help, /quit";

/// One line typed into the consultation prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplInput {
    Message(String),
    SetLanguage(Language),
    Reset,
    Help,
    Quit,
    Blank,
    Invalid(String),
}

pub fn parse_input(line: &str) -> ReplInput {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return ReplInput::Blank;
    }
    if !trimmed.starts_with('/') {
        return ReplInput::Message(trimmed.to_string());
    }

    let mut parts = trimmed.split_whitespace();
    let command = parts.next().unwrap_or_default();
    match command {
        "/quit" | "/exit" => ReplInput::Quit,
        "/reset" => ReplInput::Reset,
        "/help" => ReplInput::Help,
        "/lang" => match parts.next().map(str::parse::<Language>) {
            Some(Ok(language)) => ReplInput::SetLanguage(language),
            Some(Err(err)) => ReplInput::Invalid(err.to_string()),
            None => ReplInput::Invalid("usage: /lang en|id".to_string()),
        },
        other => ReplInput::Invalid(format!("unknown command {other}")),
    }
}

/// Single question, single answer
pub async fn ask(
    agent: &ConsultantAgent<'_>,
    state: AppState,
    query: &str,
    json: bool,
) -> Result<(AppState, String)> {
    let mut state = reduce(state, Action::Navigate(View::Advisory));

    let ticket = match state.consultation.begin(query) {
        Ok(ticket) => ticket,
        Err(SubmitRejected::Blank) => anyhow::bail!("Question must not be empty"),
        Err(SubmitRejected::Pending) => anyhow::bail!("A consultation is already in progress"),
    };

    let reply = agent.advise(ticket.query(), ticket.language()).await;
    state.consultation.complete(ticket, reply);

    let output = if json {
        serde_json::to_string_pretty(state.consultation.messages())?
    } else {
        state
            .consultation
            .last_message()
            .map(|m| m.content.clone())
            .unwrap_or_default()
    };
    Ok((state, output))
}

/// Interactive consultation over `reader`/`writer` until `/quit` or end of input
pub async fn run_repl<R, W>(
    agent: &ConsultantAgent<'_>,
    state: AppState,
    reader: R,
    writer: &mut W,
) -> Result<AppState>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut state = reduce(state, Action::Navigate(View::Advisory));

    writer.write_all(repl_header(&state).as_bytes()).await?;
    writer
        .write_all(render_transcript(state.consultation.messages()).as_bytes())
        .await?;
    writer.flush().await?;

    let mut lines = reader.lines();
    while let Some(line) = lines.next_line().await? {
        match parse_input(&line) {
            ReplInput::Quit => break,
            ReplInput::Blank => continue,
            ReplInput::Help => {
                writer.write_all(format!("{REPL_HELP}\n").as_bytes()).await?;
            }
            ReplInput::Invalid(reason) => {
                writer.write_all(format!("{reason}\n{REPL_HELP}\n").as_bytes()).await?;
            }
            ReplInput::Reset => {
                state = reduce(state, Action::ResetConsultation);
                write_last(&state, writer).await?;
            }
            ReplInput::SetLanguage(language) => {
                let changed = language != state.language;
                state = reduce(state, Action::SetLanguage(language));
                if changed {
                    write_last(&state, writer).await?;
                }
            }
            ReplInput::Message(text) => match state.consultation.begin(&text) {
                Ok(ticket) => {
                    let analyzing = strings(ticket.language()).ai.analyzing;
                    writer.write_all(format!("... {analyzing}\n").as_bytes()).await?;
                    writer.flush().await?;

                    let reply = agent.advise(ticket.query(), ticket.language()).await;
                    if state.consultation.complete(ticket, reply) {
                        write_last(&state, writer).await?;
                    }
                }
                Err(rejected) => {
                    tracing::debug!(?rejected, "Consultation input not submitted");
                }
            },
        }
        writer.flush().await?;
    }

    writer.flush().await?;
    Ok(state)
}

fn repl_header(state: &AppState) -> String {
    let t = strings(state.language);
    format!(
        "{}: {}\n{}\n{}\n\n",
        state.view.title(t),
        t.ai.title,
        t.ai.placeholder,
        REPL_HELP
    )
}

async fn write_last<W: AsyncWrite + Unpin>(state: &AppState, writer: &mut W) -> Result<()> {
    if let Some(message) = state.consultation.last_message() {
        writer
            .write_all(format!("\n{}", render_message(message)).as_bytes())
            .await?;
    }
    Ok(())
}
