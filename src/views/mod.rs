pub mod organizer;
pub mod sponsor;

use std::future::Future;
use tokio::sync::mpsc;
use tracing::debug;

use crate::error::Result;

pub use organizer::{OrganizerCommand, OrganizerSnapshot, OrganizerView, TableRow};
pub use sponsor::{CardAction, EventCard, EventDetails, SponsorCommand, SponsorSnapshot, SponsorView};

pub trait BoardView {
    type Command: Send + 'static;

    type Completion: Send + 'static;

    fn name(&self) -> &'static str;

    fn handle(&mut self, command: Self::Command, dispatcher: &Dispatcher<Self::Completion>) -> Result<()>;

    fn complete(&mut self, completion: Self::Completion) -> Result<()>;

    fn reconcile(&mut self) -> bool;
}

pub struct Dispatcher<C> {
    tx: mpsc::UnboundedSender<C>,
}

impl<C> Clone for Dispatcher<C> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}

impl<C: Send + 'static> Dispatcher<C> {
    pub(crate) fn new(tx: mpsc::UnboundedSender<C>) -> Self {
        Self { tx }
    }

    pub fn dispatch(&self, completion: C) -> bool {
        self.tx.send(completion).is_ok()
    }

    pub fn spawn<F>(&self, work: F)
    where
        F: Future<Output = C> + Send + 'static,
    {
        let dispatcher = self.clone();
        tokio::spawn(async move {
            let completion = work.await;
            if !dispatcher.dispatch(completion) {
                debug!("View loop gone, dropping completion");
            }
        });
    }
}
