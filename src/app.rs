use crate::companion::Companion;
use crate::config::SiteConfig;
use crate::content::Content;
use crate::event::{AppEvent, Event, EventHandler};
use crate::navigate::{Navigate, SystemBrowser};
use crate::ui::components::companion::companion_rect;
use color_eyre::Result;
use ratatui::{
    crossterm::event::{
        KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    layout::{Position, Rect},
    DefaultTerminal,
};
use std::time::Instant;

/// The page sections reachable from the header tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    About,
    Roadmap,
    Feedback,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::About, Section::Roadmap, Section::Feedback];

    pub fn title(&self) -> &'static str {
        match self {
            Section::About => "About",
            Section::Roadmap => "Roadmap",
            Section::Feedback => "Feedback",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Section::About => Section::Roadmap,
            Section::Roadmap => Section::Feedback,
            Section::Feedback => Section::About,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Section::About => Section::Feedback,
            Section::Roadmap => Section::About,
            Section::Feedback => Section::Roadmap,
        }
    }
}

/// Application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    pub running: bool,
    /// Currently displayed page section.
    pub section: Section,
    /// The floating robot's animation state machine.
    pub companion: Companion,
    /// Site configuration (owns the chatbot URL).
    pub config: SiteConfig,
    /// Page copy.
    pub content: Content,
    /// Event handler.
    pub events: EventHandler,
    /// Last known terminal area, used for mouse hit-testing.
    pub viewport: Rect,
    /// Browser hand-off seam.
    navigator: Box<dyn Navigate>,
}

impl App {
    /// Constructs a new instance of [`App`] with the system browser as the
    /// redirect target.
    pub fn new() -> Result<Self> {
        Self::with_parts(SiteConfig::default(), Box::new(SystemBrowser))
    }

    /// Constructor with injectable config and navigator, used by tests.
    pub fn with_parts(config: SiteConfig, navigator: Box<dyn Navigate>) -> Result<Self> {
        Ok(Self {
            running: true,
            section: Section::About,
            companion: Companion::new(),
            config,
            content: Content::embedded()?,
            events: EventHandler::new(),
            viewport: Rect::default(),
            navigator,
        })
    }

    /// Run the application's main loop.
    pub async fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        self.companion.start(Instant::now());
        tracing::info!("landing page mounted, companion cycles running");

        let mut needs_redraw = true;
        while self.running {
            let size = terminal.size()?;
            self.viewport = Rect::new(0, 0, size.width, size.height);

            if needs_redraw {
                terminal.draw(|frame| frame.render_widget(&self, frame.area()))?;
                // save power
                needs_redraw = false;
            }

            match self.events.next().await? {
                Event::Tick => {
                    // redraw only when a cycle actually flipped something
                    if self.companion.advance(Instant::now()) {
                        needs_redraw = true;
                    }
                }
                Event::Crossterm(event) => match event {
                    crossterm::event::Event::Key(key_event) => {
                        self.handle_key_events(key_event)?;
                        needs_redraw = true;
                    }
                    crossterm::event::Event::Mouse(mouse_event) => {
                        self.handle_mouse_events(mouse_event);
                    }
                    crossterm::event::Event::Resize(_, _) => needs_redraw = true,
                    _ => {}
                },
                Event::App(app_event) => match app_event {
                    AppEvent::NextSection => {
                        self.section = self.section.next();
                        needs_redraw = true;
                    }
                    AppEvent::PrevSection => {
                        self.section = self.section.prev();
                        needs_redraw = true;
                    }
                    AppEvent::Activate => self.activate_companion(),
                    AppEvent::Quit => self.quit(),
                },
            }
        }

        self.companion.stop();
        tracing::info!("landing page unmounted");
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    pub fn handle_key_events(&mut self, key_event: KeyEvent) -> Result<()> {
        match key_event.code {
            KeyCode::Esc | KeyCode::Char('q') => self.events.send(AppEvent::Quit),
            KeyCode::Char('c' | 'C') if key_event.modifiers == KeyModifiers::CONTROL => {
                self.events.send(AppEvent::Quit)
            }
            KeyCode::Right | KeyCode::Tab | KeyCode::Char('l') => {
                self.events.send(AppEvent::NextSection)
            }
            KeyCode::Left | KeyCode::BackTab | KeyCode::Char('h') => {
                self.events.send(AppEvent::PrevSection)
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.events.send(AppEvent::Activate),
            _ => {}
        }
        Ok(())
    }

    /// A left click inside the companion's screen area counts as activation.
    /// Clicks anywhere else are ignored.
    pub fn handle_mouse_events(&mut self, mouse_event: MouseEvent) {
        if let MouseEventKind::Down(MouseButton::Left) = mouse_event.kind {
            let target = companion_rect(self.viewport);
            if target.contains(Position::new(mouse_event.column, mouse_event.row)) {
                self.events.send(AppEvent::Activate);
            }
        }
    }

    /// Hands the user off to the external chatbot and quits. This is the TUI
    /// analogue of the page navigating away: the cycles die with the app as
    /// part of normal teardown. A failed browser launch is logged, not
    /// retried; the hand-off itself is unconditional.
    pub fn activate_companion(&mut self) {
        tracing::info!(url = %self.config.chatbot_url, "companion activated, opening chatbot");
        if let Err(e) = self.navigator.navigate(&self.config.chatbot_url) {
            tracing::warn!("browser launch failed: {e}");
        }
        self.quit();
    }

    /// Set running to false to quit the application.
    pub fn quit(&mut self) {
        self.running = false;
    }
}
