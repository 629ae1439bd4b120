use std::io::{self, IsTerminal, Write};
use std::time::Duration;

use anyhow::Context;
use marquee_core::{update, AppState, Msg, PageViewModel, Theme};
use marquee_engine::EngineHandle;
use marquee_logging::{marquee_debug, marquee_info, marquee_warn};

use super::cli::Cli;
use super::config::AppConfig;
use super::effects::EffectRunner;
use super::ui::palette::Palette;
use super::ui::render;
use super::{logging, persistence};

const EVENT_WAIT: Duration = Duration::from_millis(200);

pub fn run_app(cli: Cli) -> anyhow::Result<()> {
    logging::initialize(cli.log);

    let mut config = AppConfig::load(cli.config.as_deref())?;
    config.apply_env(|name| std::env::var(name).ok());
    config.apply_cli(&cli);
    if config.api.api_key.trim().is_empty() {
        marquee_warn!("No API key configured; every list will fail to load");
    }

    let engine =
        EngineHandle::new(config.fetch_settings()).context("starting the fetch engine")?;
    let runner = EffectRunner::new(engine, config.prefs_path.clone());
    let color =
        !cli.no_color && io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none();
    let mut shell = Shell {
        state: AppState::new(),
        runner,
        color,
        live: cli.live,
    };

    for msg in startup_messages(&cli, persistence::load_theme(&config.prefs_path)) {
        shell.dispatch(msg);
    }
    shell.dispatch(Msg::PageOpened);
    if shell.live {
        shell.render_if_dirty()?;
    }

    while !shell.state.is_settled() {
        let batch = shell.runner.next_batch(EVENT_WAIT);
        if batch.is_empty() {
            continue;
        }
        marquee_debug!("Applying {} completion(s) before render", batch.len());
        for msg in batch {
            shell.dispatch(msg);
        }
        if shell.live {
            shell.render_if_dirty()?;
        }
    }

    marquee_info!("All categories settled");
    if !shell.live {
        shell.print(&shell.state.view())?;
    }
    Ok(())
}

/// Theme messages applied before the page is opened.
fn startup_messages(cli: &Cli, stored: Option<Theme>) -> Vec<Msg> {
    let mut msgs = Vec::new();
    if let Some(theme) = stored {
        msgs.push(Msg::ThemeRestored(theme));
    }
    if let Some(forced) = cli.theme {
        msgs.push(Msg::ThemeSelected(forced.into()));
    }
    if cli.toggle_theme {
        msgs.push(Msg::ThemeToggled);
    }
    msgs
}

struct Shell {
    state: AppState,
    runner: EffectRunner,
    color: bool,
    live: bool,
}

impl Shell {
    fn dispatch(&mut self, msg: Msg) {
        let mut pending = vec![msg];
        while let Some(msg) = pending.pop() {
            let state = std::mem::take(&mut self.state);
            let (state, effects) = update(state, msg);
            self.state = state;
            pending.extend(self.runner.run(effects));
        }
    }

    fn render_if_dirty(&mut self) -> anyhow::Result<()> {
        if self.state.consume_dirty() {
            let view = self.state.view();
            self.print(&view)?;
        }
        Ok(())
    }

    fn print(&self, view: &PageViewModel) -> anyhow::Result<()> {
        let palette = Palette::for_theme(view.theme, self.color);
        let mut out = io::stdout().lock();
        for line in render::render(view, palette) {
            writeln!(out, "{line}")?;
        }
        writeln!(out)?;
        out.flush()?;
        Ok(())
    }
}
