use std::sync::Arc;

use color_eyre::eyre::Result;
use tokio::sync::Mutex;

use crate::{
    core::{msg::Msg, raw_msg::RawMsg, state::AppState},
    infrastructure::{
        clipboard::{ClipboardLike, MemoryClipboard, SystemClipboard},
        config::Config,
        tui::{self, event_source::EventSource, TuiLike},
    },
    integration::runtime::Runtime,
    presentation::view,
};

/// Drives the whole application: pulls events from the terminal (or a
/// scripted queue), feeds them through the runtime, and renders.
pub struct AppRunner {
    runtime: Runtime,
    tui: Option<Arc<Mutex<dyn TuiLike + Send>>>,
    events: EventSource,
}

impl AppRunner {
    /// Interactive runner on a real (or test) terminal.
    pub fn new_with_tui(config: Config, tui: Arc<Mutex<dyn TuiLike + Send>>) -> Self {
        Self::build(config, Some(tui), Box::new(SystemClipboard::new()))
    }

    /// Headless runner over a scripted event queue, for integration tests.
    pub fn new_headless(config: Config, events: impl IntoIterator<Item = tui::Event>) -> Self {
        let mut runner = Self::build(config, None, Box::new(MemoryClipboard::default()));
        runner.events = EventSource::test(events);
        runner
    }

    fn build(
        config: Config,
        tui: Option<Arc<Mutex<dyn TuiLike + Send>>>,
        clipboard: Box<dyn ClipboardLike + Send>,
    ) -> Self {
        let initial_state = AppState::with_config(config);
        let runtime = Runtime::with_clipboard(initial_state, clipboard);
        let events = match &tui {
            Some(tui) => EventSource::real(tui.clone()),
            None => EventSource::test([]),
        };
        Self {
            runtime,
            tui,
            events,
        }
    }

    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    pub fn runtime_mut(&mut self) -> &mut Runtime {
        &mut self.runtime
    }

    /// Run the main loop: handle events, update state and render.
    pub async fn run(&mut self) -> Result<()> {
        if let Some(tui) = &self.tui {
            tui.lock().await.enter()?;
        }

        loop {
            let mut should_render = self.tui.is_none();

            match self.events.next().await {
                Some(event) => match event {
                    tui::Event::Quit => self.runtime.send_raw_msg(RawMsg::Quit),
                    tui::Event::Tick => {
                        let dt = self.runtime.state().config.tick_interval();
                        self.runtime.send_msg(Msg::Tick(dt));
                    }
                    tui::Event::Render => should_render = true,
                    tui::Event::Key(key) => self.runtime.send_raw_msg(RawMsg::Key(key)),
                    tui::Event::Resize(w, h) => {
                        if let Some(tui) = &self.tui {
                            tui.lock()
                                .await
                                .resize(ratatui::prelude::Rect::new(0, 0, w, h))?;
                        }
                        self.runtime.send_raw_msg(RawMsg::Resize(w, h));
                        should_render = true;
                    }
                    tui::Event::Error => {
                        self.runtime
                            .send_raw_msg(RawMsg::Error("terminal event stream failed".into()));
                    }
                    tui::Event::Init
                    | tui::Event::FocusGained
                    | tui::Event::FocusLost
                    | tui::Event::Paste(_)
                    | tui::Event::Mouse(_)
                    | tui::Event::Closed => {}
                },
                // The event source is exhausted (test queue) or the
                // terminal closed; shut down cleanly.
                None => break,
            }

            if let Err(e) = self.runtime.run_update_cycle() {
                log::error!("runtime error: {e}");
                self.runtime.send_raw_msg(RawMsg::Error(e));
            }

            if should_render {
                self.render().await?;
            }

            if self.runtime.state().system.should_suspend {
                self.suspend().await?;
            }

            if self.runtime.state().system.should_quit {
                break;
            }
        }

        if let Some(tui) = &self.tui {
            tui.lock().await.exit()?;
        }
        Ok(())
    }

    async fn render(&mut self) -> Result<()> {
        let state = self.runtime.state().clone();
        if let Some(tui) = &self.tui {
            tui.lock().await.draw(&mut |f| {
                view::render(f, &state);
            })?;
        }
        Ok(())
    }

    /// Hand the terminal back to the shell until the process is resumed.
    async fn suspend(&mut self) -> Result<()> {
        if let Some(tui) = &self.tui {
            let mut guard = tui.lock().await;
            guard.suspend()?;
            guard.resume()?;
        }
        self.runtime.send_raw_msg(RawMsg::Resume);
        self.runtime
            .run_update_cycle()
            .map_err(color_eyre::eyre::Error::msg)?;
        Ok(())
    }
}
