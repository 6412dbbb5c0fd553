use console::Style;
use once_cell::sync::Lazy;
use shelf::model::Category;

pub struct ShelfTheme {
    pub header: Style,
    pub sorted_header: Style,
    pub muted: Style,
    pub selected: Style,
    pub star: Style,
    pub price: Style,
    pub title: Style,
}

pub static THEME: Lazy<ShelfTheme> = Lazy::new(|| ShelfTheme {
    header: Style::new().bold(),
    sorted_header: Style::new().bold().underlined(),
    muted: Style::new().color256(246).italic(),
    selected: Style::new().cyan(),
    star: Style::new().yellow(),
    price: Style::new().green(),
    title: Style::new().bold(),
});

/// Badge colour per category; unknown categories are dimmed.
pub fn category_style(category: &Category) -> Style {
    match category {
        Category::Electronics => Style::new().blue(),
        Category::Clothing => Style::new().green(),
        Category::Books => Style::new().yellow(),
        Category::Home => Style::new().magenta(),
        Category::Other(_) => Style::new().dim(),
    }
}
