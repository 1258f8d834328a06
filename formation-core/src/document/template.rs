use serde::{Deserialize, Serialize};

use crate::models::EntityType;

/// Which set of articles the preview renders.
///
/// Only two exist: nonprofits get the limited liability company articles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemplateVariant {
    /// Articles of Incorporation, with the share-class section.
    ArticlesOfIncorporation,
    /// Articles of Organization, with the management-structure section.
    ArticlesOfOrganization,
}

/// One page of the preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentPage {
    Articles(TemplateVariant),
    /// Perjury notice and filer details, shared by every variant.
    DeliveryNotice,
}

pub fn select_document_template(entity_type: EntityType) -> TemplateVariant {
    match entity_type {
        EntityType::Corporation => TemplateVariant::ArticlesOfIncorporation,
        EntityType::Llc | EntityType::Nonprofit => TemplateVariant::ArticlesOfOrganization,
    }
}

impl TemplateVariant {
    pub fn title(&self) -> &'static str {
        match self {
            Self::ArticlesOfIncorporation => "Articles of Incorporation for a Profit Corporation",
            Self::ArticlesOfOrganization => {
                "Articles of Organization for a Limited Liability Company"
            }
        }
    }

    pub fn statute(&self) -> &'static str {
        match self {
            Self::ArticlesOfIncorporation => {
                "filed pursuant to § 7-102-101 and § 7-102-102 of the Colorado Revised Statutes (C.R.S.)"
            }
            Self::ArticlesOfOrganization => {
                "filed pursuant to § 7-90-301 and § 7-80-204 of the Colorado Revised Statutes (C.R.S.)"
            }
        }
    }

    /// How the articles refer to the entity.
    pub fn entity_noun(&self) -> &'static str {
        match self {
            Self::ArticlesOfIncorporation => "corporation",
            Self::ArticlesOfOrganization => "limited liability company",
        }
    }

    /// Label of the block listing the people forming the entity.
    pub fn formers_label(&self) -> &'static str {
        match self {
            Self::ArticlesOfIncorporation => "The name(s) and address(es) of the incorporator(s)",
            Self::ArticlesOfOrganization => {
                "The name(s) and address(es) of the person(s) forming the limited liability company"
            }
        }
    }

    /// The variant's first page followed by the shared delivery notice.
    pub fn pages(&self) -> [DocumentPage; 2] {
        [DocumentPage::Articles(*self), DocumentPage::DeliveryNotice]
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn corporation_gets_articles_of_incorporation() {
        assert_eq!(
            select_document_template(EntityType::Corporation),
            TemplateVariant::ArticlesOfIncorporation
        );
    }

    #[test]
    fn llc_and_nonprofit_get_articles_of_organization() {
        assert_eq!(
            select_document_template(EntityType::Llc),
            TemplateVariant::ArticlesOfOrganization
        );
        assert_eq!(
            select_document_template(EntityType::Nonprofit),
            TemplateVariant::ArticlesOfOrganization
        );
    }

    #[test]
    fn every_variant_ends_with_delivery_notice() {
        for variant in [
            TemplateVariant::ArticlesOfIncorporation,
            TemplateVariant::ArticlesOfOrganization,
        ] {
            let pages = variant.pages();
            assert_eq!(pages[0], DocumentPage::Articles(variant));
            assert_eq!(pages[1], DocumentPage::DeliveryNotice);
        }
    }
}
