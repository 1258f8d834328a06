//! Session state for one run of the formation assistant.
//!
//! The calculator selection, the company record and the sidebar live here.
//! Selection changes are pushed into the company record immediately, so the
//! preview always reflects the latest quote inputs.

use formation_core::{
    CompanyInfoPatch, CompanyInfoStore, PriceTable, Quote, QuoteCalculator, SelectionConfig,
    document::{Clock, DocumentFields, DocumentSettings, IdentifierSource, render_document},
};
use rust_decimal::Decimal;

use crate::sidebar::SidebarState;

#[derive(Debug, Clone, Default)]
pub struct Session {
    selection: SelectionConfig,
    store: CompanyInfoStore,
    pub sidebar: SidebarState,
    prices: PriceTable,
    document: DocumentSettings,
}

impl Session {
    pub fn new(
        prices: PriceTable,
        document: DocumentSettings,
    ) -> Self {
        Self {
            prices,
            document,
            ..Default::default()
        }
    }

    pub fn selection(&self) -> &SelectionConfig {
        &self.selection
    }

    pub fn company(&self) -> &CompanyInfoStore {
        &self.store
    }

    /// Replaces the selection and syncs it into the company record.
    pub fn select(
        &mut self,
        selection: SelectionConfig,
    ) {
        self.store.sync_selection(&selection);
        self.selection = selection;
    }

    pub fn update_company(
        &mut self,
        patch: CompanyInfoPatch,
    ) {
        self.store.patch(patch);
    }

    pub fn quote(&self) -> Quote {
        QuoteCalculator::new(&self.prices).calculate(&self.selection)
    }

    pub fn total(&self) -> Decimal {
        self.quote().total
    }

    /// Derives fresh document fields; every call draws new identifiers.
    pub fn document_fields<C, S>(
        &self,
        clock: &C,
        ids: &mut S,
    ) -> DocumentFields
    where
        C: Clock + ?Sized,
        S: IdentifierSource + ?Sized,
    {
        DocumentFields::derive(
            self.store.current(),
            self.selection.address_type,
            &self.document,
            clock,
            ids,
        )
    }

    pub fn preview<C, S>(
        &self,
        clock: &C,
        ids: &mut S,
    ) -> String
    where
        C: Clock + ?Sized,
        S: IdentifierSource + ?Sized,
    {
        render_document(&self.document_fields(clock, ids))
    }
}
