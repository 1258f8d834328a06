//! Plain-text rendering of the document preview.

use std::fmt;

use super::fields::DocumentFields;
use super::template::{DocumentPage, TemplateVariant};

const SECRETARY_OF_STATE: &str = "Colorado Secretary of State";
const REGISTERED_AGENT: &str = "Rocky Mountain RA LLC";
const REGISTERED_AGENT_ADDRESS: [&str; 3] = ["110 16th Street, Suite 1460", "Denver CO 80202", "US"];
const PAID_PLACEHOLDER: &str = "$XX.XX";
const PAGE_BREAK: &str = "────────────────────────────────────────────────────────────";

const AGENT_CONSENT: &str =
    "The person above has agreed to be appointed as the registered agent for this entity.";

const PERJURY_DISCLAIMER: &str = "Causing this document to be delivered to the Secretary of State \
for filing shall constitute the affirmation or acknowledgment of each individual causing such \
delivery, under penalties of perjury, that the document is the individual's act and deed, or that \
the individual in good faith believes the document is the act and deed of the person on whose \
behalf the individual is causing the document to be delivered for filing, taken in conformity \
with the requirements of part 3 of article 90 of title 7, C.R.S., and, if applicable, the \
constituent documents, and the organic statutes, and that the individual in good faith believes \
the facts stated in the document are true and the document complies with the requirements of \
that Part, the constituent documents, and the organic statutes.";

const PERJURY_NOTICE: &str = "This perjury notice applies to each individual who causes this \
document to be delivered to the Secretary of State, whether or not such individual is named in \
the document as one who has caused it to be delivered.";

const FILER_LABEL: &str = "Name(s) and address(es) of the individual(s) causing the document to be delivered for filing";

/// The full preview for one set of fields, one page after another.
///
/// ```
/// use formation_core::CompanyInfo;
/// use formation_core::document::{
///     DocumentFields, DocumentPreview, DocumentSettings, FixedClock, FixedIdentifiers,
/// };
///
/// let fields = DocumentFields::derive(
///     &CompanyInfo::default(),
///     Default::default(),
///     &DocumentSettings::default(),
///     &FixedClock(chrono::NaiveDateTime::default()),
///     &mut FixedIdentifiers(0),
/// );
/// let text = DocumentPreview(&fields).to_string();
///
/// assert!(text.contains("Articles of Incorporation"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct DocumentPreview<'a>(pub &'a DocumentFields);

impl fmt::Display for DocumentPreview<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let fields = self.0;

        for (index, page) in fields.template.pages().iter().enumerate() {
            if index > 0 {
                writeln!(f, "{PAGE_BREAK}")?;
            }
            match page {
                DocumentPage::Articles(variant) => write_articles(f, fields, *variant)?,
                DocumentPage::DeliveryNotice => write_delivery_notice(f, fields)?,
            }
        }

        Ok(())
    }
}

/// Renders every page of the preview for `fields`.
pub fn render_document(fields: &DocumentFields) -> String {
    DocumentPreview(fields).to_string()
}

fn write_articles(
    f: &mut fmt::Formatter<'_>,
    fields: &DocumentFields,
    variant: TemplateVariant,
) -> fmt::Result {
    writeln!(f, "{SECRETARY_OF_STATE}")?;
    writeln!(f, "  ID#        {}", fields.filing_id)?;
    writeln!(f, "  Document#  {}", fields.document_number)?;
    writeln!(f, "  Filed on:  {}", fields.filed_on)?;
    writeln!(f, "  Paid:      {PAID_PLACEHOLDER}")?;
    writeln!(f)?;

    writeln!(f, "{}", variant.title())?;
    writeln!(f, "{}", variant.statute())?;
    writeln!(f)?;

    writeln!(
        f,
        "The domestic entity name of the {} is {}",
        variant.entity_noun(),
        fields.company_name
    )?;
    write_address(f, "The principal office street address is", &fields.principal_address)?;
    write_address(f, "The principal office mailing address is", &fields.principal_address)?;

    writeln!(f, "The name of the registered agent is {REGISTERED_AGENT}")?;
    write_address(
        f,
        "The registered agent's street address is",
        &REGISTERED_AGENT_ADDRESS,
    )?;
    write_address(
        f,
        "The registered agent's mailing address is",
        &REGISTERED_AGENT_ADDRESS,
    )?;
    writeln!(f, "{AGENT_CONSENT}")?;

    match variant {
        TemplateVariant::ArticlesOfIncorporation => {
            writeln!(
                f,
                "The classes of shares and number of shares of each class that the corporation is authorized to issue are"
            )?;
            writeln!(f, "  The corporation is authorized to issue:")?;
            writeln!(f, "  Common shares - 1000")?;
        }
        TemplateVariant::ArticlesOfOrganization => {
            writeln!(f, "The management of the limited liability company is vested in")?;
            writeln!(f, "  ☑ Managers  ☐ Members")?;
        }
    }
    write_person(f, variant.formers_label(), fields)?;

    writeln!(f)?;
    writeln!(f, "{PERJURY_DISCLAIMER}")
}

fn write_delivery_notice(
    f: &mut fmt::Formatter<'_>,
    fields: &DocumentFields,
) -> fmt::Result {
    writeln!(f, "{PERJURY_NOTICE}")?;
    write_person(f, FILER_LABEL, fields)
}

fn write_address<S: AsRef<str>>(
    f: &mut fmt::Formatter<'_>,
    label: &str,
    lines: &[S; 3],
) -> fmt::Result {
    writeln!(f, "{label}")?;
    for line in lines {
        writeln!(f, "  {}", line.as_ref())?;
    }
    Ok(())
}

fn write_person(
    f: &mut fmt::Formatter<'_>,
    label: &str,
    fields: &DocumentFields,
) -> fmt::Result {
    writeln!(f, "{label}")?;
    writeln!(f, "  {}", fields.owner_name)?;
    write_lines(f, &fields.principal_address)
}

fn write_lines(
    f: &mut fmt::Formatter<'_>,
    lines: &[String],
) -> fmt::Result {
    for line in lines {
        writeln!(f, "  {line}")?;
    }
    Ok(())
}
