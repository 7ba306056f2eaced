use feedbasket::{Article, Extraction};

fn article() -> Article {
  Article::new(
    "Rust 2024 Edition Released".into(),
    Some("Jane Doe".into()),
    None,
    Some("en".into()),
    "<div><p>The 2024 edition is out.</p></div>".into(),
    "The 2024 edition is out.".into(),
    Some("The Rust project announces the 2024 edition.".into()),
    Some("Example News".into()),
    None,
  )
}

#[test]
fn article_output_shape() {
  insta::assert_json_snapshot!(article(), @r#"
  {
    "title": "Rust 2024 Edition Released",
    "byline": "Jane Doe",
    "dir": null,
    "lang": "en",
    "content": "<div><p>The 2024 edition is out.</p></div>",
    "textContent": "The 2024 edition is out.",
    "length": 24,
    "excerpt": "The Rust project announces the 2024 edition.",
    "siteName": "Example News",
    "publishedTime": null
  }
  "#);
}

#[test]
fn extraction_output_is_the_bare_value() {
  let extraction = Extraction::Article(Some(Box::new(article())));

  assert_eq!(
    serde_json::from_str::<serde_json::Value>(&extraction.to_json().unwrap())
      .unwrap(),
    serde_json::to_value(article()).unwrap()
  );

  insta::assert_json_snapshot!(
    Extraction::Text(Some("The 2024 edition is out.".into())),
    @r#""The 2024 edition is out.""#
  );

  insta::assert_json_snapshot!(Extraction::Article(None), @"null");
}
