use super::*;

/// A [`Surface`] over a parsed HTML document.
///
/// Dialogs are open while they carry the `open` attribute and input values
/// live in the `value` attribute. Presented messages are kept in order.
pub struct HtmlSurface {
  alerts: Vec<String>,
  document: dom_query::Document,
}

impl HtmlSurface {
  pub fn alerts(&self) -> &[String] {
    &self.alerts
  }

  pub fn html(&self) -> String {
    self.document.html().to_string()
  }

  pub fn parse(html: &str) -> Self {
    Self {
      alerts: Vec::new(),
      document: dom_query::Document::from(html),
    }
  }

  /// Replaces the contents of the matched element with `html`, as a server
  /// response swapped into the page would.
  pub fn render(&mut self, selector: &str, html: &str) {
    self.document.select(selector).set_html(html);
  }
}

impl Surface for HtmlSurface {
  type Node = NodeId;

  fn alert(&mut self, message: &str) {
    info!(message, "presenting message");
    self.alerts.push(message.to_string());
  }

  fn clear_contents(&mut self, selector: &str) {
    self.document.select(selector).set_html("");
  }

  fn close_dialog(&mut self, selector: &str) -> bool {
    if !self.is_open(selector) {
      return false;
    }

    self.document.select(selector).remove_attr("open");

    true
  }

  fn element(&self, selector: &str) -> Option<NodeId> {
    self
      .document
      .select(selector)
      .nodes()
      .first()
      .map(|node| node.id)
  }

  fn is_open(&self, selector: &str) -> bool {
    self.document.select(selector).attr("open").is_some()
  }

  fn matches(&self, node: &NodeId, selector: &str) -> bool {
    self
      .document
      .select(selector)
      .nodes()
      .iter()
      .any(|candidate| candidate.id == *node)
  }

  fn set_value(&mut self, selector: &str, value: &str) {
    self.document.select(selector).set_attr("value", value);
  }

  fn show_modal(&mut self, selector: &str) -> bool {
    let dialog = self.document.select(selector);

    if !dialog.exists() || dialog.attr("open").is_some() {
      return false;
    }

    dialog.set_attr("open", "");

    true
  }

  fn value(&self, selector: &str) -> Option<String> {
    self
      .document
      .select(selector)
      .attr("value")
      .map(|value| value.to_string())
  }
}

/// A document with modal controllers attached to it.
///
/// Events are queued and delivered one at a time, each to every controller,
/// before the next one is taken. Close notifications raised while handling an
/// event join the back of the queue.
pub struct Page {
  controllers: Vec<ModalController>,
  queue: VecDeque<Event<NodeId>>,
  surface: HtmlSurface,
}

impl Page {
  pub fn alerts(&self) -> &[String] {
    self.surface.alerts()
  }

  pub fn attach(&mut self, controller: ModalController) {
    debug!(dialog = %controller.elements().dialog, "attaching controller");
    self.controllers.push(controller);
  }

  /// Activates the first element matching `selector`.
  pub fn click(&mut self, selector: &str) {
    if let Some(target) = self.target(selector) {
      self.dispatch(Event::Click { target });
    }
  }

  /// The controller attached to the dialog `selector`.
  pub fn controller(&self, dialog: &str) -> Option<&ModalController> {
    self
      .controllers
      .iter()
      .find(|controller| controller.elements().dialog == dialog)
  }

  /// Queues `event` and runs the queue until it is empty.
  pub fn dispatch(&mut self, event: Event<NodeId>) {
    self.queue.push_back(event);

    while let Some(event) = self.queue.pop_front() {
      trace!(?event, "dispatching event");

      for controller in &mut self.controllers {
        if let Some(next) = controller.handle(&mut self.surface, &event) {
          self.queue.push_back(next);
        }
      }
    }
  }

  pub fn html(&self) -> String {
    self.surface.html()
  }

  pub fn is_open(&self, dialog: &str) -> bool {
    self.surface.is_open(dialog)
  }

  pub fn parse(html: &str) -> Self {
    Self {
      controllers: Vec::new(),
      queue: VecDeque::new(),
      surface: HtmlSurface::parse(html),
    }
  }

  /// Dismisses every open dialog the way the Escape key does, without going
  /// through any of its controls.
  pub fn press_escape(&mut self) {
    let dialogs = self
      .controllers
      .iter()
      .map(|controller| controller.elements().dialog.clone())
      .collect::<Vec<_>>();

    for dialog in dialogs {
      if self.surface.close_dialog(&dialog)
        && let Some(node) = self.surface.element(&dialog)
      {
        debug!(dialog = %dialog, "dialog dismissed");
        self.dispatch(Event::Close { dialog: node });
      }
    }
  }

  /// Raises the document-wide "show message" signal.
  pub fn raise_message(&mut self, detail: MessageDetail) {
    self.dispatch(Event::ShowMessage(detail));
  }

  pub fn render(&mut self, selector: &str, html: &str) {
    self.surface.render(selector, html);
  }

  pub fn submit(&mut self, selector: &str) {
    if let Some(form) = self.target(selector) {
      self.dispatch(Event::Submit { form });
    }
  }

  pub fn surface(&self) -> &HtmlSurface {
    &self.surface
  }

  fn target(&self, selector: &str) -> Option<NodeId> {
    let target = self.surface.element(selector);

    if target.is_none() {
      warn!(selector, "no element matches event target");
    }

    target
  }

  /// Types `value` into the first input matching `selector`.
  pub fn type_into(&mut self, selector: &str, value: &str) {
    if let Some(target) = self.target(selector) {
      self.surface.set_value(selector, value);

      self.dispatch(Event::Input {
        target,
        value: value.to_string(),
      });
    }
  }

  pub fn value(&self, selector: &str) -> Option<String> {
    self.surface.value(selector)
  }
}
