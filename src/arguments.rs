use super::*;

#[derive(Parser)]
#[command(name = "feedbasket-extract")]
#[command(
  about = "Extract the readable content of an HTML document as JSON",
  long_about = None
)]
pub(crate) struct Arguments {
  #[arg(
    long,
    env = "FEEDBASKET_CHAR_THRESHOLD",
    default_value_t = 500,
    help = "Minimum number of characters an article should have"
  )]
  char_threshold: usize,
  #[arg(long, help = "Ignore JSON-LD metadata in the document")]
  disable_json_ld: bool,
  #[arg(
    value_name = "HTML",
    help = "HTML document to extract, or `-` to read it from stdin"
  )]
  html: Option<String>,
  #[arg(long, help = "Keep class attributes in the extracted content")]
  keep_classes: bool,
  #[arg(
    long,
    value_name = "N",
    env = "FEEDBASKET_MAX_ELEMENTS",
    help = "Refuse documents with more than N elements"
  )]
  max_elements: Option<usize>,
  #[arg(
    long,
    help = "Print only the article text, whitespace-collapsed, as a JSON string"
  )]
  text: bool,
  #[arg(
    long,
    value_name = "URL",
    env = "FEEDBASKET_BASE_URL",
    help = "URL the document was fetched from, for resolving relative links"
  )]
  url: Option<String>,
}

impl Arguments {
  fn options(&self) -> ExtractOptions {
    ExtractOptions::builder()
      .base_url(self.url.clone())
      .char_threshold(self.char_threshold)
      .disable_json_ld(self.disable_json_ld)
      .keep_classes(self.keep_classes)
      .max_elems_to_parse(self.max_elements)
      .text_only(self.text)
      .build()
  }

  fn read_html(html: String) -> Result<String> {
    if html != "-" {
      return Ok(html);
    }

    let mut buffer = String::new();

    io::stdin()
      .read_to_string(&mut buffer)
      .map_err(Error::from)?;

    Ok(buffer)
  }

  pub(crate) fn run(self) -> Result {
    let options = self.options();

    let html = Self::read_html(
      self
        .html
        .filter(|html| !html.is_empty())
        .ok_or(Error::MissingArgument)?,
    )?;

    debug!(bytes = html.len(), "extracting document");

    let json = Extractor::new(options).extract(&html)?.to_json()?;

    let mut stdout = io::stdout().lock();

    stdout
      .write_all(json.as_bytes())
      .context("failed to write extraction to stdout")?;

    stdout.flush().context("failed to flush stdout")?;

    Ok(())
  }
}
