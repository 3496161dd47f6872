use super::*;

#[test]
fn new_rejects_zero_pages() {
    assert!(Cli::try_parse_from(["photobook", "new", "--pages", "0"]).is_err());
}

#[test]
fn new_accepts_page_count() {
    let cli = Cli::try_parse_from(["photobook", "new", "--pages", "3"]).unwrap();
    assert!(matches!(cli.command, Command::New { pages: 3, template: None }));
}

#[test]
fn new_defaults_to_one_page() {
    let cli = Cli::try_parse_from(["photobook", "new"]).unwrap();
    assert!(matches!(cli.command, Command::New { pages: 1, .. }));
}

#[test]
fn background_needs_color_or_image() {
    assert!(Cli::try_parse_from(["photobook", "background", "doc.json"]).is_err());
    assert!(Cli::try_parse_from(["photobook", "background", "doc.json", "--color", "#fff", "--image", "a.jpg"]).is_err());
    assert!(Cli::try_parse_from(["photobook", "background", "doc.json", "--image", "a.jpg", "--intensity", "0.4"]).is_ok());
}
