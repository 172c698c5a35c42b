use super::FabHost;
use crate::options::FabOptions;
use tracing::debug;

/// Applies floating action button options to screens that can host one
#[derive(Debug, Default, Clone, Copy)]
pub struct FabPresenter;

impl FabPresenter {
    /// Replace the host's button with `fab`; an empty or hidden fab removes it
    pub fn apply_options(&self, fab: &FabOptions, host: &dyn FabHost) {
        if fab.has_value() && fab.visible != Some(false) {
            debug!("Applying fab {:?}", fab.id);
            host.set_fab(Some(fab.clone()));
        } else {
            host.set_fab(None);
        }
    }

    /// Merge `fab` into whatever the host currently shows
    pub fn merge_options(&self, fab: &FabOptions, host: &dyn FabHost) {
        let merged = host.fab().unwrap_or_default().merged(fab);
        if merged.visible == Some(false) {
            host.set_fab(None);
        } else {
            host.set_fab(Some(merged));
        }
    }
}
