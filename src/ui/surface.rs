//! Retained terminal surface.
//!
//! [`TerminalSurface`] is the plugin's [`Renderer`]. It keeps the rendered
//! preview list, the pagination control, the detail contents, the open panel
//! and the active color tokens; the drawing layer turns that into ANSI output
//! on every frame.

use crate::domain::error::Result;
use crate::ui::renderer::{DetailView, Panel, PreviewItem, Region, Renderer, SurfaceSnapshot};
use crate::ui::theme::ColorTokens;
use std::collections::HashSet;

/// Label and enabled flag of the "show more" button as last set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationButton {
    pub label: String,
    pub enabled: bool,
}

impl Default for PaginationButton {
    fn default() -> Self {
        Self {
            label: "Show more (0)".to_string(),
            enabled: false,
        }
    }
}

/// Retained model of everything the controller has rendered.
#[derive(Debug, Clone)]
pub struct TerminalSurface {
    mounted: HashSet<Region>,
    items: Vec<PreviewItem>,
    pagination: PaginationButton,
    empty_message: bool,
    detail: Option<DetailView>,
    open_panel: Option<Panel>,
    tokens: ColorTokens,
}

impl Default for TerminalSurface {
    fn default() -> Self {
        Self::mounted()
    }
}

impl TerminalSurface {
    /// A surface with every region mounted.
    #[must_use]
    pub fn mounted() -> Self {
        Self::with_regions(&Region::ALL)
    }

    /// A surface with only `regions` mounted.
    #[must_use]
    pub fn with_regions(regions: &[Region]) -> Self {
        Self {
            mounted: regions.iter().copied().collect(),
            items: Vec::new(),
            pagination: PaginationButton::default(),
            empty_message: false,
            detail: None,
            open_panel: None,
            tokens: ColorTokens::default(),
        }
    }

    /// Detaches a region. Later operations on it fail.
    pub fn unmount(&mut self, region: Region) {
        tracing::debug!(region = region.name(), "region unmounted");
        self.mounted.remove(&region);
    }

    pub fn mount(&mut self, region: Region) {
        self.mounted.insert(region);
    }

    #[must_use]
    pub fn is_mounted(&self, region: Region) -> bool {
        self.mounted.contains(&region)
    }

    fn require(&self, region: Region) -> Result<()> {
        if self.is_mounted(region) {
            Ok(())
        } else {
            tracing::debug!(region = region.name(), "region missing");
            Err(region.unavailable())
        }
    }

    #[must_use]
    pub fn items(&self) -> &[PreviewItem] {
        &self.items
    }

    #[must_use]
    pub const fn pagination(&self) -> &PaginationButton {
        &self.pagination
    }

    #[must_use]
    pub const fn is_empty_message_visible(&self) -> bool {
        self.empty_message
    }

    #[must_use]
    pub const fn detail(&self) -> Option<&DetailView> {
        self.detail.as_ref()
    }

    #[must_use]
    pub const fn active_panel(&self) -> Option<Panel> {
        self.open_panel
    }

    #[must_use]
    pub const fn tokens(&self) -> ColorTokens {
        self.tokens
    }
}

impl Renderer for TerminalSurface {
    fn check_mounted(&self, regions: &[Region]) -> Result<()> {
        regions.iter().try_for_each(|region| self.require(*region))
    }

    fn render_preview_page(&mut self, items: &[PreviewItem]) -> Result<()> {
        self.require(Region::List)?;
        self.items.extend_from_slice(items);
        tracing::trace!(added = items.len(), total = self.items.len(), "preview page appended");
        Ok(())
    }

    fn clear_list(&mut self) -> Result<()> {
        self.require(Region::List)?;
        self.items.clear();
        Ok(())
    }

    fn show_detail(&mut self, detail: &DetailView) -> Result<()> {
        self.require(Region::Detail)?;
        self.detail = Some(detail.clone());
        Ok(())
    }

    fn set_pagination_label(&mut self, text: &str, enabled: bool) -> Result<()> {
        self.require(Region::Pagination)?;
        self.pagination = PaginationButton {
            label: text.to_string(),
            enabled,
        };
        Ok(())
    }

    fn set_empty_indicator(&mut self, visible: bool) -> Result<()> {
        self.require(Region::Message)?;
        self.empty_message = visible;
        Ok(())
    }

    fn apply_color_tokens(&mut self, tokens: ColorTokens) -> Result<()> {
        self.require(Region::Document)?;
        self.tokens = tokens;
        Ok(())
    }

    fn open_panel(&mut self, panel: Panel) -> Result<()> {
        self.require(panel.region())?;
        self.open_panel = Some(panel);
        Ok(())
    }

    fn close_panel(&mut self, panel: Panel) -> Result<()> {
        self.require(panel.region())?;
        if self.open_panel == Some(panel) {
            self.open_panel = None;
        }
        Ok(())
    }

    fn snapshot(&self) -> SurfaceSnapshot {
        SurfaceSnapshot {
            items: self.items.clone(),
            empty_message: self.empty_message,
            pagination_label: self.pagination.label.clone(),
            pagination_enabled: self.pagination.enabled,
            detail: self.detail.clone(),
            open_panel: self.open_panel,
        }
    }

    fn restore(&mut self, snapshot: SurfaceSnapshot) {
        tracing::debug!(items = snapshot.items.len(), "surface restored");
        self.items = snapshot.items;
        self.empty_message = snapshot.empty_message;
        self.pagination = PaginationButton {
            label: snapshot.pagination_label,
            enabled: snapshot.pagination_enabled,
        };
        self.detail = snapshot.detail;
        self.open_panel = snapshot.open_panel;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ZbooksError;
    use crate::ui::theme::ThemeSetting;

    fn item(id: &str) -> PreviewItem {
        PreviewItem {
            id: id.to_string(),
            image: String::new(),
            title: format!("Title {id}"),
            author: "Someone".to_string(),
        }
    }

    #[test]
    fn pages_accumulate_until_cleared() {
        let mut surface = TerminalSurface::mounted();
        surface.render_preview_page(&[item("1"), item("2")]).unwrap();
        surface.render_preview_page(&[item("3")]).unwrap();
        assert_eq!(surface.items().len(), 3);

        surface.clear_list().unwrap();
        assert!(surface.items().is_empty());
    }

    #[test]
    fn unmounted_region_rejects_writes_without_changes() {
        let mut surface = TerminalSurface::mounted();
        surface.render_preview_page(&[item("1")]).unwrap();
        surface.unmount(Region::List);

        let err = surface.render_preview_page(&[item("2")]).unwrap_err();
        assert!(matches!(err, ZbooksError::RenderSurface("list")));
        assert!(surface.clear_list().is_err());
        assert_eq!(surface.items().len(), 1);

        surface.mount(Region::List);
        assert!(surface.clear_list().is_ok());
    }

    #[test]
    fn check_mounted_reports_first_missing_region() {
        let surface = TerminalSurface::with_regions(&[Region::List]);
        assert!(surface.check_mounted(&[Region::List]).is_ok());
        let err = surface.check_mounted(&[Region::List, Region::Pagination, Region::Message]).unwrap_err();
        assert!(matches!(err, ZbooksError::RenderSurface("pagination")));
    }

    #[test]
    fn only_one_panel_is_open() {
        let mut surface = TerminalSurface::mounted();
        surface.open_panel(Panel::Search).unwrap();
        surface.open_panel(Panel::Settings).unwrap();
        assert_eq!(surface.active_panel(), Some(Panel::Settings));

        surface.close_panel(Panel::Search).unwrap();
        assert_eq!(surface.active_panel(), Some(Panel::Settings));

        surface.close_panel(Panel::Settings).unwrap();
        assert_eq!(surface.active_panel(), None);
    }

    #[test]
    fn restore_puts_back_list_and_controls() {
        let mut surface = TerminalSurface::mounted();
        surface.render_preview_page(&[item("1"), item("2")]).unwrap();
        surface.set_pagination_label("Show more (4)", true).unwrap();
        let snapshot = surface.snapshot();

        surface.clear_list().unwrap();
        surface.set_empty_indicator(true).unwrap();
        surface.set_pagination_label("Show more (0)", false).unwrap();
        surface.open_panel(Panel::Search).unwrap();

        surface.restore(snapshot);
        assert_eq!(surface.items(), [item("1"), item("2")]);
        assert!(!surface.is_empty_message_visible());
        assert_eq!(surface.pagination().label, "Show more (4)");
        assert!(surface.pagination().enabled);
        assert_eq!(surface.active_panel(), None);
    }

    #[test]
    fn color_tokens_need_the_document_region() {
        let mut surface = TerminalSurface::with_regions(&[Region::List]);
        let night = ColorTokens::for_setting(ThemeSetting::Night);
        assert!(surface.apply_color_tokens(night).is_err());
        assert_eq!(surface.tokens(), ColorTokens::default());
    }
}
