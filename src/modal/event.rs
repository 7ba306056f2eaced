use super::*;

/// A UI event delivered to a [`ModalController`], targeting surface nodes of
/// type `N`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event<N> {
  /// A pointer activation landing on `target`.
  Click { target: N },
  /// The dialog's own notification that it transitioned to closed, whatever
  /// closed it.
  Close { dialog: N },
  /// The user changed the value of an input.
  Input { target: N, value: String },
  /// The document-wide "show message" signal.
  ShowMessage(MessageDetail),
  Submit { form: N },
}

/// Payload of the "show message" signal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageDetail {
  pub alert: String,
}

impl MessageDetail {
  /// Name of the document-level event carrying this payload.
  pub const EVENT_NAME: &'static str = "showMessage";

  pub fn new(alert: impl Into<String>) -> Self {
    Self {
      alert: alert.into(),
    }
  }

  /// Reads the message out of an `HX-Trigger` response header value.
  ///
  /// Accepts either the named form, `{"showMessage": {"alert": "..."}}`, or
  /// the bare detail, `{"alert": "..."}`. Valid JSON that carries no message
  /// yields `None`.
  pub fn from_trigger(json: &str) -> Result<Option<Self>> {
    let value = serde_json::from_str::<serde_json::Value>(json)?;

    let detail = match value.get(Self::EVENT_NAME) {
      Some(named) => Self::deserialize(named),
      None => Self::deserialize(&value),
    };

    Ok(detail.ok())
  }
}
