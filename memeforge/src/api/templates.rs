//! Inline HTML pages for the meme UI.

use html_escape::{encode_double_quoted_attribute, encode_text};

pub const FORM_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><title>Memeforge</title></head>
<body>
  <h1>Create a meme</h1>
  <form action="/create" method="POST">
    <label>Image URL <input type="text" name="image_url"></label><br>
    <label>Quote body <input type="text" name="body"></label><br>
    <label>Author <input type="text" name="author"></label><br>
    <button type="submit">Create</button>
  </form>
  <p><a href="/">Random meme</a></p>
</body>
</html>
"#;

pub fn meme_page(file_name: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head><title>Memeforge</title></head>
<body>
  <img src="/static/{src}" alt="meme">
  <p><a href="/">Another one</a> | <a href="/create">Create your own</a></p>
</body>
</html>
"#,
        src = encode_double_quoted_attribute(file_name)
    )
}

pub fn error_page(message: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head><title>Memeforge - error</title></head>
<body>
  <h1>Something went wrong</h1>
  <p>{msg}</p>
  <p><a href="/create">Try again</a></p>
</body>
</html>
"#,
        msg = encode_text(message)
    )
}
