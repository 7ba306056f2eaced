use super::*;

/// Drives one dialog through its `Closed`/`Open` lifecycle.
///
/// Form state is reset when the dialog reports that it closed, not when the
/// close button is pressed, so a dialog dismissed by the system (Escape)
/// comes back as empty as one closed through the button.
#[derive(Debug, Clone)]
pub struct ModalController {
  elements: ModalElements,
  present_messages: bool,
  state: DialogState,
}

impl ModalController {
  fn close<S: Surface>(&mut self, surface: &mut S) -> Option<Event<S::Node>> {
    if !surface.close_dialog(&self.elements.dialog) {
      return None;
    }

    debug!(dialog = %self.elements.dialog, "dialog closing");

    surface
      .element(&self.elements.dialog)
      .map(|dialog| Event::Close { dialog })
  }

  pub fn elements(&self) -> &ModalElements {
    &self.elements
  }

  /// Handles a single event to completion.
  ///
  /// When the handler closes the dialog, the dialog's close notification is
  /// returned for the caller to deliver next.
  pub fn handle<S: Surface>(
    &mut self,
    surface: &mut S,
    event: &Event<S::Node>,
  ) -> Option<Event<S::Node>> {
    match event {
      Event::Click { target } => self.on_click(surface, target),
      Event::Close { dialog } => {
        self.on_close(surface, dialog);
        None
      }
      Event::Input { target, value } => {
        self.on_input(surface, target, value);
        None
      }
      Event::ShowMessage(detail) => {
        if self.present_messages {
          surface.alert(&detail.alert);
        }
        None
      }
      Event::Submit { form } => {
        self.on_submit(surface, form);
        None
      }
    }
  }

  #[must_use]
  pub fn new(elements: ModalElements) -> Self {
    Self {
      state: DialogState::new(&elements.fields),
      elements,
      present_messages: false,
    }
  }

  fn on_click<S: Surface>(
    &mut self,
    surface: &mut S,
    target: &S::Node,
  ) -> Option<Event<S::Node>> {
    if surface.matches(target, &self.elements.open_button) {
      if surface.show_modal(&self.elements.dialog) {
        debug!(dialog = %self.elements.dialog, "dialog opened");
        self.state.set_open(true);
      }

      return None;
    }

    let on_backdrop = surface.matches(target, &self.elements.dialog);

    if on_backdrop
      || surface.matches(target, &self.elements.scoped_close_button())
    {
      return self.close(surface);
    }

    None
  }

  fn on_close<S: Surface>(&mut self, surface: &mut S, dialog: &S::Node) {
    if !surface.matches(dialog, &self.elements.dialog) {
      return;
    }

    self.state.set_open(false);

    for field in &self.elements.fields {
      surface.set_value(field, "");
    }

    self.state.clear_fields();

    if let Some(container) = &self.elements.form_container {
      surface.clear_contents(container);
    }

    debug!(dialog = %self.elements.dialog, "dialog closed and reset");
  }

  fn on_input<S: Surface>(
    &mut self,
    surface: &mut S,
    target: &S::Node,
    value: &str,
  ) {
    if let Some(field) = self
      .elements
      .fields
      .iter()
      .find(|field| surface.matches(target, field))
    {
      trace!(field = %field, "tracked field changed");
      self.state.record(field, value);
    }
  }

  fn on_submit<S: Surface>(&mut self, surface: &mut S, form: &S::Node) {
    let Some(search_form) = &self.elements.search_form else {
      return;
    };

    if !surface.matches(form, search_form)
      || !surface.is_open(&self.elements.dialog)
    {
      return;
    }

    self.state.set_open(true);

    if let Some(container) = &self.elements.form_container {
      debug!(container = %container, "clearing previous search results");
      surface.clear_contents(container);
    }
  }

  pub fn state(&self) -> &DialogState {
    &self.state
  }

  /// Also present the document-wide "show message" signal through this
  /// controller's surface.
  #[must_use]
  pub fn with_messages(self) -> Self {
    Self {
      present_messages: true,
      ..self
    }
  }
}
