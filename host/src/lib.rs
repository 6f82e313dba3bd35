//! Codefolio - host process
//!
//! Owns the workbench and talks to the page over JSON lines:
//! - requests arrive on stdin, replies leave on stdout in order
//! - timers are driven from a tokio interval
//! - Rust owns all state

mod commands;
mod ipc;
mod state;

use codefolio_core::{Config, CoreError, Result};
use state::AppState;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::sync::mpsc;
use tokio::time::{Instant, MissedTickBehavior};

const TICK: Duration = Duration::from_millis(50);
const CONFIG_ENV: &str = "CODEFOLIO_CONFIG";

pub fn run() {
    // Initialize logging
    codefolio_core::init_logging();

    if let Err(e) = try_run() {
        tracing::error!(error = %e, "Codefolio host failed");
        std::process::exit(1);
    }
}

fn try_run() -> Result<()> {
    let config = load_config()?;
    let state = AppState::new(config)?;
    state.initialize()?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    tracing::info!("Codefolio host started");
    runtime.block_on(serve(state, tokio::io::stdin(), tokio::io::stdout()))
}

fn load_config() -> Result<Config> {
    match std::env::var_os(CONFIG_ENV) {
        Some(path) => Config::load(path),
        None => Ok(Config::default()),
    }
}

/// Serve requests from `reader` until it closes.
async fn serve<R, W>(state: AppState, reader: R, writer: W) -> Result<()>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin + Send + 'static,
{
    let (tx, rx) = mpsc::channel::<String>(64);
    let writer_task = tokio::spawn(write_lines(writer, rx));
    let ticker = tokio::spawn(run_ticker(state.clone(), tx.clone(), TICK));

    let mut lines = BufReader::new(reader).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let reply = ipc::handle_line(&state, &line);
        if tx.send(reply).await.is_err() {
            tracing::warn!("Output closed, stopping");
            break;
        }
    }

    ticker.abort();
    let dropped = state.shutdown();
    tracing::info!(dropped, "Input closed, shutting down");

    drop(tx);
    match writer_task.await {
        Ok(result) => result,
        Err(e) => Err(CoreError::Io(std::io::Error::other(e))),
    }
}

async fn write_lines<W>(mut writer: W, mut rx: mpsc::Receiver<String>) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    while let Some(line) = rx.recv().await {
        writer.write_all(line.as_bytes()).await?;
        writer.write_all(b"\n").await?;
        writer.flush().await?;
    }
    Ok(())
}

/// Advance the workbench by real elapsed time on every tick.
async fn run_ticker(state: AppState, tx: mpsc::Sender<String>, period: Duration) {
    let mut interval = tokio::time::interval(period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut last = Instant::now();

    loop {
        interval.tick().await;
        let now = Instant::now();
        let elapsed = now - last;
        last = now;

        let Some(push) = state.advance(elapsed) else {
            continue;
        };

        match serde_json::to_string(&push) {
            Ok(line) => {
                if tx.send(line).await.is_err() {
                    break;
                }
            }
            Err(e) => tracing::warn!(error = %e, "Failed to encode view update"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::test_state;
    use codefolio_core::TabId;
    use tokio::io::AsyncReadExt;

    fn state() -> AppState {
        test_state()
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticker_pushes_view_changes() {
        let state = state();
        state
            .with_workbench(|wb| {
                wb.open_tab(TabId::Projects);
                Ok(())
            })
            .unwrap();

        let (tx, mut rx) = mpsc::channel(8);
        let ticker = tokio::spawn(run_ticker(state.clone(), tx, TICK));

        let line = rx.recv().await.unwrap();
        let push: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(push["event"], "view-changed");
        assert_eq!(push["view"]["fading_panels"], serde_json::json!([]));
        assert_eq!(push["view"]["tabs"]["active_tab"], "projects");

        ticker.abort();
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticker_runs_contact_timeline() {
        let state = state();
        state
            .with_workbench(|wb| {
                wb.set_contact_field(codefolio_core::ContactField::Name, "Ada".into());
                wb.set_contact_field(codefolio_core::ContactField::Email, "a@b.c".into());
                wb.set_contact_field(codefolio_core::ContactField::Message, "Hi".into());
                wb.submit_contact();
                Ok(())
            })
            .unwrap();

        let (tx, mut rx) = mpsc::channel(8);
        let ticker = tokio::spawn(run_ticker(state.clone(), tx, TICK));

        let sent: serde_json::Value = serde_json::from_str(&rx.recv().await.unwrap()).unwrap();
        assert_eq!(sent["view"]["contact"]["phase"], "sent");
        assert_eq!(sent["effects"][0]["type"], "scroll_into_view");

        let reset: serde_json::Value = serde_json::from_str(&rx.recv().await.unwrap()).unwrap();
        assert_eq!(reset["view"]["contact"]["phase"], "idle");

        ticker.abort();
    }

    #[tokio::test]
    async fn test_serve_replies_in_order() {
        let state = state();
        let input = b"{\"cmd\":\"open_tab\",\"tab\":\"skills\"}\n\n{\"cmd\":\"get_theme\"}\n";
        let (client, server) = tokio::io::duplex(1 << 20);

        serve(state, &input[..], server).await.unwrap();

        let mut output = String::new();
        let mut client = client;
        client.read_to_string(&mut output).await.unwrap();

        let replies: Vec<serde_json::Value> = output
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .filter(|v: &serde_json::Value| v.get("event").is_none())
            .collect();
        assert_eq!(replies.len(), 2);
        assert_eq!(replies[0]["data"]["active_tab"], "skills");
        assert_eq!(replies[1]["data"]["theme"], "dark");
    }
}
