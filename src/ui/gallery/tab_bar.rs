// SPDX-License-Identifier: MPL-2.0
//! Category tabs.

use super::Message;
use crate::catalog::label_case;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Row, Text};
use iced::Element;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    category: String,
    label: String,
}

impl Tab {
    fn new(category: String) -> Self {
        let label = label_case(&category);
        Self { category, label }
    }

    /// Raw category value, as found in the data file.
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }
}

/// One tab per category with at most one active.
///
/// Once the bar holds any tab, exactly one of them is active.
#[derive(Debug, Clone, Default)]
pub struct TabBar {
    tabs: Vec<Tab>,
    active: Option<usize>,
}

impl TabBar {
    /// Builds the bar with the first category active.
    pub fn from_categories<I, S>(categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tabs: Vec<Tab> = categories
            .into_iter()
            .map(|c| Tab::new(c.into()))
            .collect();
        let active = if tabs.is_empty() { None } else { Some(0) };
        Self { tabs, active }
    }

    #[must_use]
    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    #[must_use]
    pub fn labels(&self) -> Vec<&str> {
        self.tabs.iter().map(Tab::label).collect()
    }

    /// Makes `category` the active tab. Returns `false` for an unknown
    /// category, leaving the bar untouched.
    pub fn activate(&mut self, category: &str) -> bool {
        match self.tabs.iter().position(|t| t.category == category) {
            Some(index) => {
                self.active = Some(index);
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn is_active(&self, index: usize) -> bool {
        self.active == Some(index)
    }

    #[must_use]
    pub fn active_tab(&self) -> Option<&Tab> {
        self.active.and_then(|i| self.tabs.get(i))
    }

    #[must_use]
    pub fn active_category(&self) -> Option<&str> {
        self.active_tab().map(Tab::category)
    }

    pub fn clear(&mut self) {
        self.tabs.clear();
        self.active = None;
    }
}

pub fn view(bar: &TabBar) -> Element<'_, Message> {
    let tabs = bar.tabs().iter().enumerate().map(|(index, tab)| {
        button(Text::new(tab.label()).size(typography::BODY))
            .padding([spacing::XS, spacing::MD])
            .style(styles::button::tab(bar.is_active(index)))
            .on_press(Message::SelectCategory(tab.category().to_string()))
            .into()
    });

    Row::with_children(tabs).spacing(spacing::XS).into()
}
