use tracing::debug;

use crate::models::{CompanyInfo, CompanyInfoPatch, SelectionConfig};

/// Owner of the session's [`CompanyInfo`]. All writes go through
/// [`patch`](Self::patch), which never clears fields it was not given.
#[derive(Debug, Clone, Default)]
pub struct CompanyInfoStore {
    info: CompanyInfo,
}

impl CompanyInfoStore {
    pub fn new(info: CompanyInfo) -> Self {
        Self { info }
    }

    pub fn current(&self) -> &CompanyInfo {
        &self.info
    }

    pub fn patch(
        &mut self,
        patch: CompanyInfoPatch,
    ) {
        if patch.is_empty() {
            return;
        }
        debug!(?patch, "patching company info");
        self.info.apply(patch);
    }

    /// Pushes the calculator's jurisdiction and entity type into the record,
    /// plus the customer's address when they supplied one.
    pub fn sync_selection(
        &mut self,
        selection: &SelectionConfig,
    ) {
        let address = selection.custom_address().map(str::to_string);

        self.patch(CompanyInfoPatch {
            jurisdiction: Some(selection.jurisdiction),
            entity_type: Some(selection.entity_type),
            address,
            ..Default::default()
        });
    }
}
