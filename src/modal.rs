//! Lifecycle of the feed dialogs: opening, closing, and resetting the form
//! state they embed.
//!
//! A [`ModalController`] never looks elements up on its own. It is handed a
//! [`ModalElements`] set and a [`Surface`] to act on, and reacts to one
//! [`Event`] at a time. [`Page`] ties the pieces together over a parsed HTML
//! document and serializes event dispatch the way a browser's event loop does.

use super::*;

mod controller;
mod elements;
mod event;
mod page;
mod state;
mod surface;

pub use {
  controller::ModalController,
  elements::ModalElements,
  event::{Event, MessageDetail},
  page::{HtmlSurface, Page},
  state::DialogState,
  surface::Surface,
};
