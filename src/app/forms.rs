//! Search and settings form state.
//!
//! The search overlay holds a free-text title field and two option pickers
//! built from the catalog's genre and author tables. The settings overlay
//! holds the day/night choice. Both produce plain key/value form data on
//! submit, which is what [`FilterSpec::from_form`](crate::domain::FilterSpec::from_form)
//! and [`CatalogController::apply_theme`](crate::app::CatalogController::apply_theme)
//! consume.

use super::modes::SearchField;
use crate::domain::filter::ANY;
use crate::domain::Catalog;
use crate::ui::theme::ThemeSetting;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use std::collections::BTreeMap;

/// One selectable entry of an [`OptionPicker`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerOption {
    /// Submitted value: a table key or [`ANY`].
    pub value: String,
    /// Display name.
    pub name: String,
}

/// A single-choice selector with type-to-narrow.
///
/// The first option is always the wildcard (`"any"`, labelled
/// `"All <Things>"`); the rest are the table entries sorted by display
/// name. Typing narrows the visible options with fuzzy matching, but the
/// wildcard never disappears, so there is always something selected.
#[derive(Debug, Clone)]
pub struct OptionPicker {
    options: Vec<PickerOption>,
    query: String,
    visible: Vec<usize>,
    selected: usize,
}

impl OptionPicker {
    /// Builds a picker from a key → display name table.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use zbooks::app::forms::OptionPicker;
    ///
    /// let table = BTreeMap::from([
    ///     ("scifi".to_string(), "Science Fiction".to_string()),
    ///     ("fantasy".to_string(), "Fantasy".to_string()),
    /// ]);
    /// let picker = OptionPicker::new("All Genres", &table);
    /// let names: Vec<&str> = picker.visible_options().map(|o| o.name.as_str()).collect();
    /// assert_eq!(names, ["All Genres", "Fantasy", "Science Fiction"]);
    /// assert_eq!(picker.value(), "any");
    /// ```
    #[must_use]
    pub fn new(all_label: &str, table: &BTreeMap<String, String>) -> Self {
        let mut entries: Vec<PickerOption> = table
            .iter()
            .map(|(value, name)| PickerOption {
                value: value.clone(),
                name: name.clone(),
            })
            .collect();
        entries.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.value.cmp(&b.value)));

        let mut options = Vec::with_capacity(entries.len() + 1);
        options.push(PickerOption {
            value: ANY.to_string(),
            name: all_label.to_string(),
        });
        options.extend(entries);

        let visible = (0..options.len()).collect();
        Self {
            options,
            query: String::new(),
            visible,
            selected: 0,
        }
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Options passing the current query, in display order.
    pub fn visible_options(&self) -> impl Iterator<Item = &PickerOption> {
        self.visible.iter().map(|&i| &self.options[i])
    }

    /// Index of the selected option among [`visible_options`](Self::visible_options).
    #[must_use]
    pub const fn selected_index(&self) -> usize {
        self.selected
    }

    /// The selected option.
    #[must_use]
    pub fn selected(&self) -> &PickerOption {
        let index = self.visible.get(self.selected).copied().unwrap_or(0);
        &self.options[index]
    }

    /// Submitted value of the selected option.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.selected().value
    }

    pub fn push_char(&mut self, c: char) {
        self.query.push(c);
        self.refilter();
    }

    pub fn pop_char(&mut self) {
        self.query.pop();
        self.refilter();
    }

    /// Clears the narrowing query, keeping the current selection.
    pub fn clear_query(&mut self) {
        self.query.clear();
        self.refilter();
    }

    pub fn move_down(&mut self) {
        self.selected = (self.selected + 1) % self.visible.len();
    }

    pub fn move_up(&mut self) {
        if self.selected == 0 {
            self.selected = self.visible.len() - 1;
        } else {
            self.selected -= 1;
        }
    }

    /// Character ranges of `name` matched by the current query.
    #[must_use]
    pub fn highlight_ranges(&self, name: &str) -> Vec<(usize, usize)> {
        if self.query.is_empty() {
            return vec![];
        }

        let matcher = SkimMatcherV2::default();
        let query = self.query.to_lowercase();
        let mut indices: Vec<usize> = query
            .split_whitespace()
            .filter_map(|token| matcher.fuzzy_indices(name, token))
            .flat_map(|(_score, indices)| indices)
            .collect();
        indices.sort_unstable();
        indices.dedup();
        coalesce_indices(&indices)
    }

    fn refilter(&mut self) {
        let previous = self.visible.get(self.selected).copied();

        if self.query.is_empty() {
            self.visible = (0..self.options.len()).collect();
        } else {
            let matcher = SkimMatcherV2::default();
            let query = self.query.to_lowercase();
            let tokens: Vec<&str> = query.split_whitespace().collect();
            self.visible = self
                .options
                .iter()
                .enumerate()
                .filter(|(i, option)| {
                    let name = option.name.to_lowercase();
                    *i == 0 || tokens.iter().all(|token| matcher.fuzzy_match(&name, token).is_some())
                })
                .map(|(i, _)| i)
                .collect();
        }

        self.selected = previous
            .and_then(|prev| self.visible.iter().position(|&i| i == prev))
            .unwrap_or_else(|| self.selected.min(self.visible.len() - 1));

        tracing::trace!(query = %self.query, visible = self.visible.len(), "picker refiltered");
    }
}

/// Coalesces sorted character indices into `(start, end)` ranges with an
/// exclusive end.
#[must_use]
pub fn coalesce_indices(indices: &[usize]) -> Vec<(usize, usize)> {
    let mut ranges = Vec::new();
    let mut start = None;
    let mut prev = None;

    for &idx in indices {
        match (start, prev) {
            (None, _) => {
                start = Some(idx);
                prev = Some(idx);
            }
            (Some(_), Some(p)) if idx == p + 1 => {
                prev = Some(idx);
            }
            (Some(s), Some(p)) => {
                ranges.push((s, p + 1));
                start = Some(idx);
                prev = Some(idx);
            }
            _ => {}
        }
    }

    if let (Some(s), Some(p)) = (start, prev) {
        ranges.push((s, p + 1));
    }

    ranges
}

/// State of the search overlay.
#[derive(Debug, Clone)]
pub struct SearchForm {
    focus: SearchField,
    title: String,
    genre: OptionPicker,
    author: OptionPicker,
}

impl SearchForm {
    /// Builds the form with pickers for `catalog`'s genres and authors.
    #[must_use]
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            focus: SearchField::Title,
            title: String::new(),
            genre: OptionPicker::new("All Genres", catalog.genres()),
            author: OptionPicker::new("All Authors", catalog.authors()),
        }
    }

    #[must_use]
    pub const fn focus(&self) -> SearchField {
        self.focus
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub const fn genre(&self) -> &OptionPicker {
        &self.genre
    }

    #[must_use]
    pub const fn author(&self) -> &OptionPicker {
        &self.author
    }

    /// Prepares the form for display: focuses the title field and drops any
    /// leftover picker queries. Field values are kept between openings.
    pub fn open(&mut self) {
        self.focus = SearchField::Title;
        self.genre.clear_query();
        self.author.clear_query();
    }

    pub fn next_field(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn prev_field(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Types `c` into the focused field.
    pub fn input(&mut self, c: char) {
        match self.focus {
            SearchField::Title => self.title.push(c),
            SearchField::Genre => self.genre.push_char(c),
            SearchField::Author => self.author.push_char(c),
        }
    }

    pub fn backspace(&mut self) {
        match self.focus {
            SearchField::Title => {
                self.title.pop();
            }
            SearchField::Genre => self.genre.pop_char(),
            SearchField::Author => self.author.pop_char(),
        }
    }

    /// Moves the focused picker's selection down. No-op on the title field.
    pub fn picker_down(&mut self) {
        match self.focus {
            SearchField::Title => {}
            SearchField::Genre => self.genre.move_down(),
            SearchField::Author => self.author.move_down(),
        }
    }

    pub fn picker_up(&mut self) {
        match self.focus {
            SearchField::Title => {}
            SearchField::Genre => self.genre.move_up(),
            SearchField::Author => self.author.move_up(),
        }
    }

    /// Submitted values keyed by `title`, `genre` and `author`.
    #[must_use]
    pub fn form_data(&self) -> BTreeMap<String, String> {
        BTreeMap::from([
            ("title".to_string(), self.title.clone()),
            ("genre".to_string(), self.genre.value().to_string()),
            ("author".to_string(), self.author.value().to_string()),
        ])
    }
}

/// State of the settings overlay.
#[derive(Debug, Clone, Copy, Default)]
pub struct SettingsForm {
    choice: ThemeSetting,
}

impl SettingsForm {
    #[must_use]
    pub const fn choice(&self) -> ThemeSetting {
        self.choice
    }

    /// Syncs the form with the applied setting before it is shown.
    pub fn open(&mut self, current: ThemeSetting) {
        self.choice = current;
    }

    pub fn toggle(&mut self) {
        self.choice = self.choice.toggled();
    }

    /// Submitted values keyed by `theme`.
    #[must_use]
    pub fn form_data(&self) -> BTreeMap<String, String> {
        BTreeMap::from([("theme".to_string(), self.choice.as_str().to_string())])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FilterSpec;

    fn table(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
        entries.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect()
    }

    fn authors() -> OptionPicker {
        OptionPicker::new(
            "All Authors",
            &table(&[("tolkien", "J.R.R. Tolkien"), ("austen", "Jane Austen"), ("herbert", "Frank Herbert")]),
        )
    }

    #[test]
    fn picker_lists_wildcard_then_sorted_names() {
        let picker = authors();
        let values: Vec<&str> = picker.visible_options().map(|o| o.value.as_str()).collect();
        assert_eq!(values, ["any", "herbert", "tolkien", "austen"]);
    }

    #[test]
    fn narrowing_keeps_the_wildcard() {
        let mut picker = authors();
        for c in "jane".chars() {
            picker.push_char(c);
        }
        let names: Vec<&str> = picker.visible_options().map(|o| o.name.as_str()).collect();
        assert_eq!(names, ["All Authors", "Jane Austen"]);

        for c in "zzz".chars() {
            picker.push_char(c);
        }
        assert_eq!(picker.visible_options().count(), 1);
        assert_eq!(picker.value(), ANY);
    }

    #[test]
    fn selection_wraps_and_survives_clearing_the_query() {
        let mut picker = authors();
        picker.move_up();
        assert_eq!(picker.value(), "austen");
        picker.move_down();
        assert_eq!(picker.value(), ANY);

        picker.move_down();
        picker.move_down();
        assert_eq!(picker.value(), "tolkien");
        picker.push_char('t');
        picker.push_char('o');
        assert_eq!(picker.value(), "tolkien");
        picker.clear_query();
        assert_eq!(picker.value(), "tolkien");
        assert_eq!(picker.selected_index(), 2);
    }

    #[test]
    fn selection_clamps_when_option_filtered_out() {
        let mut picker = authors();
        picker.move_up();
        for c in "herb".chars() {
            picker.push_char(c);
        }
        assert_eq!(picker.visible_options().count(), 2);
        assert_eq!(picker.selected_index(), 1);
        assert_eq!(picker.value(), "herbert");
    }

    #[test]
    fn highlight_ranges_follow_query() {
        let mut picker = authors();
        assert!(picker.highlight_ranges("Jane Austen").is_empty());
        picker.push_char('a');
        picker.push_char('u');
        picker.push_char('s');
        assert_eq!(picker.highlight_ranges("Jane Austen"), vec![(5, 8)]);
    }

    #[test]
    fn every_query_word_must_match() {
        let mut picker = authors();
        for c in "fr herb".chars() {
            picker.push_char(c);
        }
        let names: Vec<&str> = picker.visible_options().map(|o| o.name.as_str()).collect();
        assert_eq!(names, ["All Authors", "Frank Herbert"]);
        assert_eq!(picker.highlight_ranges("Frank Herbert"), vec![(0, 2), (6, 10)]);

        picker.push_char(' ');
        picker.push_char('q');
        assert_eq!(picker.visible_options().count(), 1);
    }

    #[test]
    fn coalesces_consecutive_indices() {
        assert_eq!(coalesce_indices(&[0, 1, 2, 5, 7, 8]), vec![(0, 3), (5, 6), (7, 9)]);
        assert!(coalesce_indices(&[]).is_empty());
    }

    #[test]
    fn search_form_routes_input_to_focused_field() {
        let catalog = Catalog::new(
            vec![],
            table(&[("austen", "Jane Austen")]),
            table(&[("romance", "Romance"), ("horror", "Horror")]),
        )
        .unwrap();
        let mut form = SearchForm::new(&catalog);

        form.input('e');
        form.input('m');
        form.input('x');
        form.backspace();
        form.next_field();
        form.picker_down();
        form.next_field();
        form.picker_down();
        form.picker_down();

        let data = form.form_data();
        assert_eq!(data["title"], "em");
        assert_eq!(data["genre"], "horror");
        assert_eq!(data["author"], ANY);

        let spec = FilterSpec::from_form(&data);
        assert_eq!(spec.genre, "horror");

        form.open();
        assert_eq!(form.focus(), SearchField::Title);
        assert_eq!(form.title(), "em");
    }

    #[test]
    fn settings_form_reports_theme() {
        let mut form = SettingsForm::default();
        assert_eq!(form.form_data()["theme"], "day");
        form.toggle();
        assert_eq!(form.form_data()["theme"], "night");
        form.open(ThemeSetting::Day);
        assert_eq!(form.choice(), ThemeSetting::Day);
    }
}
