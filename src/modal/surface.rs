use super::*;

/// The part of a UI document a [`ModalController`] reads and drives.
///
/// Every element is addressed by CSS selector. Operations on a selector that
/// matches nothing do nothing.
pub trait Surface {
  type Node: Clone + Debug + PartialEq;

  /// Presents `message` to the user for acknowledgment.
  fn alert(&mut self, message: &str);

  /// Removes everything rendered inside the matched element.
  fn clear_contents(&mut self, selector: &str);

  /// Hides the dialog. Returns `false` when it was not open.
  fn close_dialog(&mut self, selector: &str) -> bool;

  fn element(&self, selector: &str) -> Option<Self::Node>;

  fn is_open(&self, selector: &str) -> bool;

  /// Whether `node` is one of the elements `selector` matches.
  fn matches(&self, node: &Self::Node, selector: &str) -> bool;

  fn set_value(&mut self, selector: &str, value: &str);

  /// Shows the dialog modally. Returns `false` when it was already open.
  fn show_modal(&mut self, selector: &str) -> bool;

  fn value(&self, selector: &str) -> Option<String>;
}
