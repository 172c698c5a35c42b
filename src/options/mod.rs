//! Per-screen configuration
//!
//! Options are grouped in categories. Every field is optional so two values can
//! be merged field by field: a set field on the incoming side wins, an unset
//! one keeps whatever the receiving side already had.

use serde::{Deserialize, Serialize};

fn merge_field<T: Clone>(into: &mut Option<T>, from: &Option<T>) {
    if from.is_some() {
        into.clone_from(from);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Options {
    pub top_bar: TopBarOptions,
    pub animations: AnimationsOptions,
    pub fab: FabOptions,
    pub layout: LayoutOptions,
    pub bottom_tabs: BottomTabsOptions,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TopBarOptions {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub visible: Option<bool>,
    pub animate: Option<bool>,
    pub background_color: Option<String>,
    pub back_button_visible: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnimationsOptions {
    pub push: AnimationOptions,
    pub pop: AnimationOptions,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnimationOptions {
    pub enabled: Option<bool>,
    pub duration_ms: Option<u64>,
}

/// Floating action button
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FabOptions {
    pub id: Option<String>,
    pub visible: Option<bool>,
    pub icon: Option<String>,
    pub background_color: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutOptions {
    pub background_color: Option<String>,
    pub orientation: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BottomTabsOptions {
    pub visible: Option<bool>,
    pub current_tab_id: Option<String>,
}

impl Options {
    /// Merge `other` into `self`; fields set in `other` win
    pub fn merge_with(&mut self, other: &Options) {
        self.top_bar.merge_with(&other.top_bar);
        self.animations.merge_with(&other.animations);
        self.fab.merge_with(&other.fab);
        self.layout.merge_with(&other.layout);
        self.bottom_tabs.merge_with(&other.bottom_tabs);
    }

    /// Independent copy of `self` with `other` merged on top
    pub fn merged(&self, other: &Options) -> Options {
        let mut result = self.clone();
        result.merge_with(other);
        result
    }

    pub fn clear_top_bar_options(mut self) -> Self {
        self.top_bar = TopBarOptions::default();
        self
    }

    pub fn clear_animation_options(mut self) -> Self {
        self.animations = AnimationsOptions::default();
        self
    }

    pub fn clear_fab_options(mut self) -> Self {
        self.fab = FabOptions::default();
        self
    }

    /// Copy suitable for forwarding to an ancestor controller.
    ///
    /// Top-bar, animation and fab categories belong to the stack that owns the
    /// chrome and are stripped; every other category travels up unchanged.
    pub fn for_parent(&self) -> Options {
        self.clone()
            .clear_top_bar_options()
            .clear_animation_options()
            .clear_fab_options()
    }
}

impl TopBarOptions {
    pub fn merge_with(&mut self, other: &TopBarOptions) {
        merge_field(&mut self.title, &other.title);
        merge_field(&mut self.subtitle, &other.subtitle);
        merge_field(&mut self.visible, &other.visible);
        merge_field(&mut self.animate, &other.animate);
        merge_field(&mut self.background_color, &other.background_color);
        merge_field(&mut self.back_button_visible, &other.back_button_visible);
    }
}

impl AnimationsOptions {
    pub fn merge_with(&mut self, other: &AnimationsOptions) {
        self.push.merge_with(&other.push);
        self.pop.merge_with(&other.pop);
    }
}

impl AnimationOptions {
    pub fn merge_with(&mut self, other: &AnimationOptions) {
        merge_field(&mut self.enabled, &other.enabled);
        merge_field(&mut self.duration_ms, &other.duration_ms);
    }

    /// Animations run unless explicitly disabled
    pub fn is_enabled(&self) -> bool {
        self.enabled.unwrap_or(true)
    }
}

impl FabOptions {
    pub fn merge_with(&mut self, other: &FabOptions) {
        merge_field(&mut self.id, &other.id);
        merge_field(&mut self.visible, &other.visible);
        merge_field(&mut self.icon, &other.icon);
        merge_field(&mut self.background_color, &other.background_color);
    }

    pub fn merged(&self, other: &FabOptions) -> FabOptions {
        let mut result = self.clone();
        result.merge_with(other);
        result
    }

    /// True when any fab field is set
    pub fn has_value(&self) -> bool {
        self.id.is_some()
            || self.visible.is_some()
            || self.icon.is_some()
            || self.background_color.is_some()
    }
}

impl LayoutOptions {
    pub fn merge_with(&mut self, other: &LayoutOptions) {
        merge_field(&mut self.background_color, &other.background_color);
        merge_field(&mut self.orientation, &other.orientation);
    }
}

impl BottomTabsOptions {
    pub fn merge_with(&mut self, other: &BottomTabsOptions) {
        merge_field(&mut self.visible, &other.visible);
        merge_field(&mut self.current_tab_id, &other.current_tab_id);
    }
}
