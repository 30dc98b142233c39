//! Wiring between a quote source, the browsing session and a renderer.
//!
//! The controller is the only owner of the session. Every operation takes
//! `&mut self` and runs to completion before returning, so a refresh can never
//! interleave with another load or with navigation.

use std::io;

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, error};

use crate::domain::Session;
use crate::infra::{LoadError, QuoteSource, load_groups};

/// Something that can display the current session.
///
/// Implementations must cope with an empty session, which is what a failed
/// first load leaves behind.
pub trait Renderer {
    fn render(&mut self, session: &Session) -> io::Result<()>;
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn render(&mut self, session: &Session) -> io::Result<()> {
        (**self).render(session)
    }
}

/// Optional labels shown above a group, next to the date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Labels {
    /// Show the group number
    pub group: bool,
    /// Show how many quotes the group holds
    pub count: bool,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            group: true,
            count: true,
        }
    }
}

/// Errors surfaced by controller operations.
#[derive(Debug, Error)]
pub enum ControllerError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("failed to render quotes: {0}")]
    Render(#[from] io::Error),
}

/// Drives a session from load, refresh and navigation events.
pub struct Controller<S, R> {
    source: S,
    renderer: R,
    session: Session,
    rng: StdRng,
}

impl<S: QuoteSource, R: Renderer> Controller<S, R> {
    /// Creates a controller with an empty session and an entropy-seeded shuffle.
    pub fn new(source: S, renderer: R) -> Self {
        Self::with_rng(source, renderer, StdRng::from_entropy())
    }

    /// Creates a controller with a fixed shuffle sequence.
    pub fn with_rng(source: S, renderer: R, rng: StdRng) -> Self {
        Self {
            source,
            renderer,
            session: Session::default(),
            rng,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Initial load. See [`Controller::refresh`] for failure behaviour.
    pub fn load(&mut self) -> Result<(), ControllerError> {
        self.run_load(false)
    }

    /// Reloads the sheet bypassing caches, then shows the first group with
    /// authors hidden.
    ///
    /// If the fetch fails the error is logged, the current session is kept and
    /// rendered as-is, and the error is returned.
    pub fn refresh(&mut self) -> Result<(), ControllerError> {
        self.run_load(true)
    }

    pub fn next(&mut self) -> Result<(), ControllerError> {
        self.apply(Session::next)
    }

    pub fn previous(&mut self) -> Result<(), ControllerError> {
        self.apply(Session::previous)
    }

    pub fn toggle_authors(&mut self) -> Result<(), ControllerError> {
        self.apply(Session::toggle_authors)
    }

    pub fn shuffle(&mut self) -> Result<(), ControllerError> {
        let session = std::mem::take(&mut self.session);
        self.session = session.shuffle(&mut self.rng);
        self.render()
    }

    /// Renders the current session again.
    pub fn render(&mut self) -> Result<(), ControllerError> {
        self.renderer.render(&self.session)?;
        Ok(())
    }

    fn apply(&mut self, transition: fn(Session) -> Session) -> Result<(), ControllerError> {
        let session = std::mem::take(&mut self.session);
        self.session = transition(session);
        debug!(
            index = self.session.index(),
            show_authors = self.session.show_authors(),
            "session updated"
        );
        self.render()
    }

    /// A load failure takes precedence over a render failure that follows it;
    /// the render error is only logged in that case.
    fn run_load(&mut self, cache_bust: bool) -> Result<(), ControllerError> {
        match load_groups(&self.source, cache_bust) {
            Ok(groups) => {
                self.session = Session::loaded(groups);
                self.render()
            }
            Err(err) => {
                error!(
                    source = %self.source.location(),
                    error = %err,
                    "failed to load quotes, keeping current groups"
                );
                if let Err(render_err) = self.render() {
                    error!(error = %render_err, "failed to render after load failure");
                }
                Err(err.into())
            }
        }
    }
}
