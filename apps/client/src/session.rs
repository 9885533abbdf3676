//! Interactive terminal session: stdin commands in, changed sections out.

use std::io::Write;

use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::sync::watch;
use tracing::{debug, info};

use crate::commands::{self, Command, HELP};
use crate::components::{
    action_buttons, experiences, filters_grid, jd_input, projects, response_view, skills,
    upload_row, ComponentError, View,
};
use crate::state::AppState;

/// What the loop should do after a command.
#[derive(Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    /// Print every section, not just the changed ones.
    Redraw,
    Print(String),
    Quit,
}

/// Applies one command. Tailor runs in the background; everything else finishes here.
pub async fn dispatch(state: &AppState, command: Command) -> Result<Flow, ComponentError> {
    let store = &state.store;
    match command {
        Command::SkillAdd(name) => {
            skills::add_skill(store, &name);
        }
        Command::SkillRemove(name) => {
            skills::remove_skill(store, &name);
        }
        Command::ExperienceAdd => {
            experiences::add(store);
        }
        Command::ExperienceSet {
            reference,
            field,
            value,
        } => experiences::edit(store, &reference, &field, &value)?,
        Command::ExperienceRemove(reference) => experiences::delete(store, &reference)?,
        Command::ProjectAdd => {
            projects::add(store);
        }
        Command::ProjectSet {
            reference,
            field,
            value,
        } => projects::edit(store, &reference, &field, &value)?,
        Command::ProjectRemove(reference) => projects::delete(store, &reference)?,
        Command::JobDescription(text) => jd_input::set(store, &text),
        Command::JobDescriptionAppend(line) => jd_input::append_line(store, &line),
        Command::TopK(n) => filters_grid::select_top_k(store, n)?,
        Command::Rewrite(on) => filters_grid::set_rewrite(store, on),
        Command::IncludeProjects(on) => filters_grid::set_include_projects(store, on),
        Command::Style(style) => filters_grid::set_bullet_style(store, style),
        Command::Upload(path) => upload_row::pick(store, &path),
        Command::Drop(path) => upload_row::drop_file(store, &path),
        Command::Response(text) => response_view::edit(store, &text),
        Command::Tailor => {
            action_buttons::tailor(state);
        }
        Command::Copy => action_buttons::copy(state).await,
        Command::Reset => action_buttons::reset(state),
        Command::Show => return Ok(Flow::Redraw),
        Command::Help => return Ok(Flow::Print(HELP.to_string())),
        Command::Quit => return Ok(Flow::Quit),
    }
    Ok(Flow::Continue)
}

fn print_sections(sections: &[String]) {
    let mut out = std::io::stdout().lock();
    for section in sections {
        let _ = writeln!(out, "{section}\n");
    }
    let _ = out.flush();
}

/// Redraws changed sections whenever the store revision moves, including
/// changes made by background submissions and banner timers.
async fn render_loop(state: AppState, mut revisions: watch::Receiver<u64>) {
    let mut view = View::new();
    print_sections(&view.full(&state.store.snapshot()));
    while revisions.changed().await.is_ok() {
        let changed = view.refresh(&state.store.snapshot());
        if !changed.is_empty() {
            print_sections(&changed);
        }
    }
}

pub async fn run(state: AppState) -> Result<()> {
    run_with_input(state, BufReader::new(tokio::io::stdin())).await
}

pub async fn run_with_input<R>(state: AppState, input: R) -> Result<()>
where
    R: AsyncBufRead + Unpin,
{
    info!(endpoint = %state.client.endpoint(), "session started");
    if state.config.api_base_url.is_empty() {
        info!("TAILOR_API_BASE_URL is not set; `tailor` will fail until it is");
    }
    println!("{HELP}\n");

    let renderer = tokio::spawn(render_loop(state.clone(), state.store.subscribe()));

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        let command = match commands::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                println!("{e}");
                continue;
            }
        };
        debug!(?command, "dispatching");
        match dispatch(&state, command).await {
            Ok(Flow::Continue) => {}
            Ok(Flow::Redraw) => print_sections(&View::new().full(&state.store.snapshot())),
            Ok(Flow::Print(text)) => println!("{text}"),
            Ok(Flow::Quit) => break,
            Err(e) => println!("{e}"),
        }
    }

    renderer.abort();
    info!("session ended");
    Ok(())
}
