//! Pagination and view-state controller.
//!
//! [`CatalogController`] owns the current match set and the pagination
//! cursor, and drives a [`Renderer`] to show the result list one page at a
//! time. It also resolves selected ids to books for the detail view and maps
//! the day/night setting onto the surface's color tokens.
//!
//! # State Transitions
//!
//! ```text
//!            start_search                 show_next_page
//! (any) ───────────────────▶ cursor = min(P, L) ───────────▶ cursor += page
//!                                    │                            │
//!                                    └── cursor == L: Exhausted ◀─┘
//! ```
//!
//! Every operation checks the regions it needs before touching the surface.
//! Multi-step updates run against a
//! [`SurfaceSnapshot`](crate::ui::renderer::SurfaceSnapshot) that is restored
//! if any step fails, and the controller commits its own state only after the
//! whole update succeeded. A failed render leaves both sides as they were.

use crate::domain::error::Result;
use crate::domain::filter::{filter, FilterSpec};
use crate::domain::{Book, Catalog};
use crate::ui::renderer::{DetailView, Panel, PaginationControl, PreviewItem, Region, Renderer};
use crate::ui::theme::{ColorTokens, ThemeSetting};
use std::num::NonZeroUsize;

/// Default number of previews rendered per page.
pub const BOOKS_PER_PAGE: usize = 36;

/// Regions touched by [`CatalogController::start_search`].
const SEARCH_REGIONS: [Region; 3] = [Region::List, Region::Message, Region::Pagination];

/// Regions touched by [`CatalogController::show_next_page`].
const PAGE_REGIONS: [Region; 2] = [Region::List, Region::Pagination];

/// Runs `update` against `renderer`, restoring the surface if it fails.
fn render_atomically<R, F>(renderer: &mut R, update: F) -> Result<()>
where
    R: Renderer + ?Sized,
    F: FnOnce(&mut R) -> Result<()>,
{
    let snapshot = renderer.snapshot();
    match update(&mut *renderer) {
        Ok(()) => Ok(()),
        Err(error) => {
            tracing::warn!(error = %error, "render failed, restoring surface");
            renderer.restore(snapshot);
            Err(error)
        }
    }
}

/// Owns the match set and pagination cursor for one browsing session.
#[derive(Debug, Clone)]
pub struct CatalogController {
    catalog: Catalog,
    page_size: NonZeroUsize,
    spec: FilterSpec,
    matches: Vec<Book>,
    cursor: usize,
    theme: ThemeSetting,
}

impl CatalogController {
    /// Creates a controller whose match set is the whole catalog and whose
    /// cursor is at zero. Nothing is rendered until
    /// [`start_search`](Self::start_search) runs.
    #[must_use]
    pub fn new(catalog: Catalog, page_size: NonZeroUsize) -> Self {
        let matches = catalog.books().to_vec();
        Self {
            catalog,
            page_size,
            spec: FilterSpec::default(),
            matches,
            cursor: 0,
            theme: ThemeSetting::default(),
        }
    }

    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Books matching the last submitted search, in catalog order.
    #[must_use]
    pub fn matches(&self) -> &[Book] {
        &self.matches
    }

    /// The last submitted search.
    #[must_use]
    pub const fn spec(&self) -> &FilterSpec {
        &self.spec
    }

    /// Count of matches already rendered.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub const fn page_size(&self) -> NonZeroUsize {
        self.page_size
    }

    #[must_use]
    pub const fn theme(&self) -> ThemeSetting {
        self.theme
    }

    /// Matches not yet rendered.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.matches.len().saturating_sub(self.cursor)
    }

    /// Runs `spec` against the catalog and renders the first page.
    ///
    /// Clears the list, toggles the empty-result message, renders up to one
    /// page and refreshes the "show more" control, in that order. Afterwards
    /// the cursor equals the size of the first page.
    ///
    /// Returns the number of previews rendered.
    ///
    /// # Errors
    ///
    /// Returns [`ZbooksError::RenderSurface`](crate::domain::ZbooksError::RenderSurface)
    /// if the list, message or pagination region is missing, or any other
    /// error from the renderer. The previous match set, cursor and surface
    /// contents are kept in that case.
    pub fn start_search<R>(&mut self, spec: &FilterSpec, renderer: &mut R) -> Result<usize>
    where
        R: Renderer + ?Sized,
    {
        let _span = tracing::debug_span!("start_search",
            title_len = spec.title.len(),
            genre = %spec.genre,
            author = %spec.author
        )
        .entered();

        let matches = filter(self.catalog.books(), spec);
        let first_page = matches.len().min(self.page_size.get());
        let items = self.render_page(&matches[..first_page]);
        let control = PaginationControl::new(matches.len(), first_page);

        renderer.check_mounted(&SEARCH_REGIONS)?;
        render_atomically(renderer, |r| {
            r.clear_list()?;
            r.set_empty_indicator(matches.is_empty())?;
            r.render_preview_page(&items)?;
            r.set_pagination_label(&control.label, control.enabled)
        })?;

        tracing::info!(
            match_count = matches.len(),
            rendered = first_page,
            remaining = control.remaining,
            "search applied"
        );

        self.spec = spec.clone();
        self.matches = matches;
        self.cursor = first_page;
        Ok(first_page)
    }

    /// Appends the next page of matches to the list.
    ///
    /// Renders `matches[cursor..min(cursor + P, L)]` and advances the cursor
    /// by the number rendered. When everything is already shown only the
    /// "show more" control is refreshed and `0` is returned.
    ///
    /// # Errors
    ///
    /// Returns [`ZbooksError::RenderSurface`](crate::domain::ZbooksError::RenderSurface)
    /// if the list or pagination region is missing, or any other renderer
    /// error. Neither the cursor nor the rendered list moves.
    pub fn show_next_page<R>(&mut self, renderer: &mut R) -> Result<usize>
    where
        R: Renderer + ?Sized,
    {
        let start = self.cursor;
        let end = (start + self.page_size.get()).min(self.matches.len());
        let _span = tracing::debug_span!("show_next_page", start, end).entered();

        let items = self.render_page(&self.matches[start..end]);
        let control = PaginationControl::new(self.matches.len(), end);

        renderer.check_mounted(&PAGE_REGIONS)?;
        render_atomically(renderer, |r| {
            if !items.is_empty() {
                r.render_preview_page(&items)?;
            }
            r.set_pagination_label(&control.label, control.enabled)
        })?;

        self.cursor = end;
        tracing::debug!(rendered = end - start, remaining = control.remaining, "page appended");
        Ok(end - start)
    }

    /// Label and enabled flag for the "show more" control at the current
    /// cursor.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::num::NonZeroUsize;
    /// use zbooks::app::CatalogController;
    /// use zbooks::domain::Catalog;
    /// use zbooks::ui::renderer::ShowMore;
    ///
    /// let controller = CatalogController::new(Catalog::default(), NonZeroUsize::MIN);
    /// assert_eq!(controller.remaining_label().state(), ShowMore::Exhausted);
    /// ```
    #[must_use]
    pub fn remaining_label(&self) -> PaginationControl {
        PaginationControl::new(self.matches.len(), self.cursor)
    }

    /// Resolves `id` against the full catalog and opens its detail view.
    ///
    /// Returns `Ok(None)` without touching the surface when no book has that
    /// id.
    ///
    /// # Errors
    ///
    /// Returns [`ZbooksError::RenderSurface`](crate::domain::ZbooksError::RenderSurface)
    /// if the detail region is missing.
    pub fn select<R>(&self, id: &str, renderer: &mut R) -> Result<Option<&Book>>
    where
        R: Renderer + ?Sized,
    {
        let Some(book) = self.catalog.find(id) else {
            tracing::debug!(id, "selected id not in catalog");
            return Ok(None);
        };

        let detail = self.detail_view(book);
        renderer.check_mounted(&[Region::Detail])?;
        render_atomically(renderer, |r| {
            r.show_detail(&detail)?;
            r.open_panel(Panel::Detail)
        })?;

        tracing::debug!(id, title = %book.title, "detail opened");
        Ok(Some(book))
    }

    /// Maps a submitted theme value to color tokens and applies them.
    ///
    /// `"night"` selects the night pair; every other value selects day.
    ///
    /// # Errors
    ///
    /// Returns [`ZbooksError::RenderSurface`](crate::domain::ZbooksError::RenderSurface)
    /// if the document region is missing; the setting is not changed.
    pub fn apply_theme<R>(&mut self, value: &str, renderer: &mut R) -> Result<ThemeSetting>
    where
        R: Renderer + ?Sized,
    {
        let setting = ThemeSetting::from_value(value);
        renderer.apply_color_tokens(ColorTokens::for_setting(setting))?;

        tracing::info!(theme = setting.as_str(), "color scheme applied");
        self.theme = setting;
        Ok(setting)
    }

    /// Contents of the detail view for `book`.
    #[must_use]
    pub fn detail_view(&self, book: &Book) -> DetailView {
        DetailView {
            id: book.id.clone(),
            title: book.title.clone(),
            subtitle: format!("{} ({})", self.catalog.author_name(&book.author), book.published_year()),
            description: book.description.clone(),
            cover: book.image.clone(),
            blur: book.image.clone(),
        }
    }

    fn render_page(&self, records: &[Book]) -> Vec<PreviewItem> {
        records
            .iter()
            .map(|book| PreviewItem {
                id: book.id.clone(),
                image: book.image.clone(),
                title: book.title.clone(),
                author: self.catalog.author_name(&book.author).to_string(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ZbooksError;
    use crate::ui::renderer::{ShowMore, SurfaceSnapshot};
    use crate::ui::surface::TerminalSurface;
    use std::collections::BTreeMap;

    fn catalog(count: usize) -> Catalog {
        let books = (0..count)
            .map(|i| {
                serde_json::from_value(serde_json::json!({
                    "id": format!("b{i}"),
                    "title": if i % 2 == 0 { format!("The Book {i}") } else { format!("Volume {i}") },
                    "author": if i % 3 == 0 { "known" } else { "ghost" },
                    "genres": ["fiction"],
                    "description": format!("About book {i}."),
                    "image": format!("https://covers.test/{i}.jpg"),
                    "published": "2004-05-06T00:00:00Z",
                }))
                .unwrap()
            })
            .collect();
        let authors = BTreeMap::from([("known".to_string(), "Known Author".to_string())]);
        Catalog::new(books, authors, BTreeMap::new()).unwrap()
    }

    fn controller(count: usize, page: usize) -> CatalogController {
        CatalogController::new(catalog(count), NonZeroUsize::new(page).unwrap())
    }

    #[test]
    fn start_search_renders_first_page() {
        let mut ctl = controller(50, 36);
        let mut surface = TerminalSurface::mounted();

        assert_eq!(ctl.start_search(&FilterSpec::default(), &mut surface).unwrap(), 36);
        assert_eq!(ctl.cursor(), 36);
        assert_eq!(surface.items().len(), 36);
        assert_eq!(surface.pagination().label, "Show more (14)");
        assert!(surface.pagination().enabled);
        assert!(!surface.is_empty_message_visible());
    }

    #[test]
    fn show_next_page_walks_to_exhaustion() {
        let mut ctl = controller(50, 36);
        let mut surface = TerminalSurface::mounted();
        ctl.start_search(&FilterSpec::default(), &mut surface).unwrap();

        assert_eq!(ctl.show_next_page(&mut surface).unwrap(), 14);
        assert_eq!(surface.items().len(), 50);
        assert_eq!(ctl.remaining_label().state(), ShowMore::Exhausted);
        assert_eq!(surface.pagination().label, "Show more (0)");
        assert!(!surface.pagination().enabled);

        assert_eq!(ctl.show_next_page(&mut surface).unwrap(), 0);
        assert_eq!(ctl.cursor(), 50);
        assert_eq!(surface.items().len(), 50);
    }

    #[test]
    fn page_count_is_ceiling_of_matches_over_page_size() {
        for (len, page) in [(0, 3), (1, 3), (9, 3), (10, 3), (7, 1)] {
            let mut ctl = controller(len, page);
            let mut surface = TerminalSurface::mounted();
            let mut calls = usize::from(ctl.start_search(&FilterSpec::default(), &mut surface).unwrap() > 0);
            while ctl.show_next_page(&mut surface).unwrap() > 0 {
                calls += 1;
            }
            assert_eq!(calls, (len + page - 1) / page, "len={len} page={page}");
            assert_eq!(surface.items().len(), len);
        }
    }

    #[test]
    fn empty_result_shows_message() {
        let mut ctl = controller(5, 36);
        let mut surface = TerminalSurface::mounted();
        let spec = FilterSpec { title: "zzz".to_string(), ..FilterSpec::default() };

        assert_eq!(ctl.start_search(&spec, &mut surface).unwrap(), 0);
        assert!(surface.is_empty_message_visible());
        assert!(surface.items().is_empty());
        assert!(!surface.pagination().enabled);
    }

    #[test]
    fn new_search_replaces_previous_results() {
        let mut ctl = controller(50, 10);
        let mut surface = TerminalSurface::mounted();
        ctl.start_search(&FilterSpec::default(), &mut surface).unwrap();
        ctl.show_next_page(&mut surface).unwrap();

        let spec = FilterSpec { title: "the".to_string(), ..FilterSpec::default() };
        ctl.start_search(&spec, &mut surface).unwrap();
        assert_eq!(ctl.matches().len(), 25);
        assert_eq!(ctl.cursor(), 10);
        assert_eq!(surface.items().len(), 10);
        assert_eq!(ctl.spec().title, "the");
    }

    #[test]
    fn missing_region_leaves_state_unchanged() {
        let mut ctl = controller(50, 36);
        let mut surface = TerminalSurface::mounted();
        ctl.start_search(&FilterSpec::default(), &mut surface).unwrap();

        surface.unmount(Region::Pagination);
        let err = ctl.show_next_page(&mut surface).unwrap_err();
        assert!(matches!(err, ZbooksError::RenderSurface("pagination")));
        assert_eq!(ctl.cursor(), 36);
        assert_eq!(surface.items().len(), 36);

        let spec = FilterSpec { title: "the".to_string(), ..FilterSpec::default() };
        assert!(ctl.start_search(&spec, &mut surface).is_err());
        assert_eq!(ctl.matches().len(), 50);
        assert_eq!(surface.items().len(), 36);
    }

    /// Accepts everything except preview renders.
    struct PreviewFails(TerminalSurface);

    impl Renderer for PreviewFails {
        fn check_mounted(&self, regions: &[Region]) -> Result<()> {
            self.0.check_mounted(regions)
        }
        fn render_preview_page(&mut self, _items: &[PreviewItem]) -> Result<()> {
            Err(ZbooksError::RenderSurface("list"))
        }
        fn clear_list(&mut self) -> Result<()> {
            self.0.clear_list()
        }
        fn show_detail(&mut self, detail: &DetailView) -> Result<()> {
            self.0.show_detail(detail)
        }
        fn set_pagination_label(&mut self, text: &str, enabled: bool) -> Result<()> {
            self.0.set_pagination_label(text, enabled)
        }
        fn set_empty_indicator(&mut self, visible: bool) -> Result<()> {
            self.0.set_empty_indicator(visible)
        }
        fn apply_color_tokens(&mut self, tokens: ColorTokens) -> Result<()> {
            self.0.apply_color_tokens(tokens)
        }
        fn open_panel(&mut self, panel: Panel) -> Result<()> {
            self.0.open_panel(panel)
        }
        fn close_panel(&mut self, panel: Panel) -> Result<()> {
            self.0.close_panel(panel)
        }
        fn snapshot(&self) -> SurfaceSnapshot {
            self.0.snapshot()
        }
        fn restore(&mut self, snapshot: SurfaceSnapshot) {
            self.0.restore(snapshot);
        }
    }

    #[test]
    fn failed_page_render_restores_surface() {
        let mut ctl = controller(10, 3);
        let mut surface = TerminalSurface::mounted();
        ctl.start_search(&FilterSpec::default(), &mut surface).unwrap();

        let mut failing = PreviewFails(surface);
        let spec = FilterSpec { title: "zzz".to_string(), ..FilterSpec::default() };
        assert!(ctl.start_search(&spec, &mut failing).is_err());
        assert!(ctl.show_next_page(&mut failing).is_err());

        let mut surface = failing.0;
        let ids: Vec<&str> = surface.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["b0", "b1", "b2"]);
        assert!(!surface.is_empty_message_visible());
        assert_eq!(surface.pagination().label, "Show more (7)");
        assert!(surface.pagination().enabled);
        assert_eq!(ctl.cursor(), 3);

        assert_eq!(ctl.show_next_page(&mut surface).unwrap(), 3);
        let ids: Vec<&str> = surface.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["b0", "b1", "b2", "b3", "b4", "b5"]);
        assert_eq!(ctl.cursor(), 6);
    }

    #[test]
    fn failed_detail_render_keeps_panel_closed() {
        struct PanelFails(TerminalSurface);

        impl Renderer for PanelFails {
            fn check_mounted(&self, regions: &[Region]) -> Result<()> {
                self.0.check_mounted(regions)
            }
            fn render_preview_page(&mut self, items: &[PreviewItem]) -> Result<()> {
                self.0.render_preview_page(items)
            }
            fn clear_list(&mut self) -> Result<()> {
                self.0.clear_list()
            }
            fn show_detail(&mut self, detail: &DetailView) -> Result<()> {
                self.0.show_detail(detail)
            }
            fn set_pagination_label(&mut self, text: &str, enabled: bool) -> Result<()> {
                self.0.set_pagination_label(text, enabled)
            }
            fn set_empty_indicator(&mut self, visible: bool) -> Result<()> {
                self.0.set_empty_indicator(visible)
            }
            fn apply_color_tokens(&mut self, tokens: ColorTokens) -> Result<()> {
                self.0.apply_color_tokens(tokens)
            }
            fn open_panel(&mut self, _panel: Panel) -> Result<()> {
                Err(ZbooksError::RenderSurface("detail"))
            }
            fn close_panel(&mut self, panel: Panel) -> Result<()> {
                self.0.close_panel(panel)
            }
            fn snapshot(&self) -> SurfaceSnapshot {
                self.0.snapshot()
            }
            fn restore(&mut self, snapshot: SurfaceSnapshot) {
                self.0.restore(snapshot);
            }
        }

        let ctl = controller(3, 3);
        let mut failing = PanelFails(TerminalSurface::mounted());
        assert!(ctl.select("b1", &mut failing).is_err());
        assert!(failing.0.detail().is_none());
        assert_eq!(failing.0.active_panel(), None);
    }

    #[test]
    fn preview_items_resolve_authors_with_fallback() {
        let mut ctl = controller(3, 36);
        let mut surface = TerminalSurface::mounted();
        ctl.start_search(&FilterSpec::default(), &mut surface).unwrap();

        let authors: Vec<&str> = surface.items().iter().map(|i| i.author.as_str()).collect();
        assert_eq!(authors, vec!["Known Author", "ghost", "ghost"]);
        assert_eq!(surface.items()[0].image, "https://covers.test/0.jpg");
    }

    #[test]
    fn select_opens_detail_for_known_id() {
        let ctl = controller(3, 36);
        let mut surface = TerminalSurface::mounted();

        let book = ctl.select("b0", &mut surface).unwrap().unwrap();
        assert_eq!(book.id, "b0");

        let detail = surface.detail().unwrap();
        assert_eq!(detail.subtitle, "Known Author (2004)");
        assert_eq!(detail.cover, detail.blur);
        assert_eq!(surface.active_panel(), Some(Panel::Detail));
    }

    #[test]
    fn select_searches_full_catalog_not_just_matches() {
        let mut ctl = controller(6, 36);
        let mut surface = TerminalSurface::mounted();
        let spec = FilterSpec { title: "volume".to_string(), ..FilterSpec::default() };
        ctl.start_search(&spec, &mut surface).unwrap();

        assert!(ctl.matches().iter().all(|b| b.id != "b0"));
        assert!(ctl.select("b0", &mut surface).unwrap().is_some());
    }

    #[test]
    fn select_unknown_id_is_a_no_op() {
        let ctl = controller(3, 36);
        let mut surface = TerminalSurface::mounted();

        assert!(ctl.select("missing", &mut surface).unwrap().is_none());
        assert!(surface.detail().is_none());
        assert_eq!(surface.active_panel(), None);
    }

    #[test]
    fn apply_theme_sets_tokens() {
        let mut ctl = controller(1, 36);
        let mut surface = TerminalSurface::mounted();

        assert_eq!(ctl.apply_theme("night", &mut surface).unwrap(), ThemeSetting::Night);
        assert_eq!(surface.tokens(), ColorTokens::for_setting(ThemeSetting::Night));

        assert_eq!(ctl.apply_theme("sepia", &mut surface).unwrap(), ThemeSetting::Day);
        assert_eq!(surface.tokens(), ColorTokens::for_setting(ThemeSetting::Day));
        assert_eq!(ctl.theme(), ThemeSetting::Day);
    }

    #[test]
    fn apply_theme_without_document_keeps_setting() {
        let mut ctl = controller(1, 36);
        let mut surface = TerminalSurface::with_regions(&[Region::List]);

        assert!(ctl.apply_theme("night", &mut surface).is_err());
        assert_eq!(ctl.theme(), ThemeSetting::Day);
    }
}
