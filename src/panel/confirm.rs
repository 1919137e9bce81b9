//! Yes/No confirmation pages.

use super::pages::{Page, PageId, PageKind, SettingsPanel};
use crate::host::IconRef;
use crate::input::Action;
use crate::ui::layout::confirm_page_size;
use crate::ui::{Button, IconButtonFactory};

/// A root button opening a prompt with "No" and "Yes" answers.
///
/// "No" is always bound to [`Action::Dismiss`]; "Yes" to the action being
/// confirmed.
#[derive(Debug)]
pub struct ConfirmPage {
    opener: Button,
    prompt: String,
    no_button: Button,
    yes_button: Button,
    page: PageId,
}

impl ConfirmPage {
    pub fn new(
        kind: PageKind,
        opener: (IconRef, Action),
        prompt: &str,
        confirm: Action,
        factory: &mut IconButtonFactory,
        panel: &mut SettingsPanel,
    ) -> Self {
        let (icon, open_action) = opener;
        let opener = factory.create_icon_button(icon, open_action);
        let no_button = factory.create_text_button("No", Action::Dismiss);
        let yes_button = factory.create_text_button("Yes", confirm);
        let size = confirm_page_size(factory.metrics(), prompt);
        let page = panel.add_page(Page::new(kind, size));
        Self {
            opener,
            prompt: prompt.to_string(),
            no_button,
            yes_button,
            page,
        }
    }

    pub fn opener(&self) -> &Button {
        &self.opener
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn no_button(&self) -> &Button {
        &self.no_button
    }

    pub fn yes_button(&self) -> &Button {
        &self.yes_button
    }

    pub fn page(&self) -> PageId {
        self.page
    }
}
