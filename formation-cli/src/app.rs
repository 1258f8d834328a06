//! Command handlers behind the `formation` binary.
//!
//! Each handler returns the text to print so the flows can be tested without
//! a terminal.

use std::{fmt, io::Write};

use anyhow::{Context, Result};
use formation_chat::{APOLOGY, ChatClient, Conversation, GREETING, SendOutcome};
use formation_core::{
    PriceTable, Quote, SelectionConfig,
    display::{
        ADDRESS_TYPE_NAMES, BUSINESS_SERVICE_NAMES, ENTITY_TYPE_NAMES, JURISDICTION_NAMES,
        lookup_display_name,
    },
    document::{DocumentSettings, address_line},
};
use formation_data::PriceScheduleLoader;
use rand::Rng;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, info};

use crate::{
    config::{AppConfig, ConfigError},
    models::CustomerForm,
    name_check::{NameCheckError, NameChecker},
    sidebar::NavItem,
    state::Session,
    utils::{format_money, yes_no},
};

/// The configured price schedule, or the built-in table when none is set.
pub fn load_prices(config: &AppConfig) -> Result<PriceTable> {
    match &config.pricing.schedule {
        Some(path) => {
            let table = PriceScheduleLoader::load_from_path(path)
                .with_context(|| format!("loading price schedule {}", path.display()))?;
            info!(path = %path.display(), "using price schedule");
            Ok(table)
        }
        None => Ok(PriceTable::standard().clone()),
    }
}

pub fn new_session(config: &AppConfig) -> Result<Session> {
    let prices = load_prices(config)?;
    let document = DocumentSettings::try_from(&config.document).map_err(ConfigError::from)?;
    Ok(Session::new(prices, document))
}

// ─── quote ───────────────────────────────────────────────────────────────────

/// Selection summary, itemized quote and the amount due.
pub struct QuoteReport<'a> {
    pub selection: &'a SelectionConfig,
    pub quote: &'a Quote,
}

impl fmt::Display for QuoteReport<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let selection = self.selection;

        writeln!(
            f,
            "State:        {}",
            lookup_display_name(selection.jurisdiction.as_str(), JURISDICTION_NAMES)
        )?;
        writeln!(
            f,
            "Entity:       {}",
            lookup_display_name(selection.entity_type.as_str(), ENTITY_TYPE_NAMES)
        )?;
        writeln!(
            f,
            "Address:      {}",
            lookup_display_name(selection.address_type.as_str(), ADDRESS_TYPE_NAMES)
        )?;
        if let Some(address) = selection.custom_address() {
            writeln!(f, "              {}", address_line(address))?;
        }
        writeln!(
            f,
            "Service:      {}",
            lookup_display_name(selection.business_service.as_str(), BUSINESS_SERVICE_NAMES)
        )?;
        writeln!(f, "BOI filing:   {}", yes_no(selection.wants_boi_filing))?;
        writeln!(f, "Paper seal:   {}", yes_no(selection.wants_paper_seal))?;
        writeln!(f, "EIN:          {}", yes_no(selection.wants_ein))?;
        writeln!(
            f,
            "Anonymous:    {}",
            yes_no(selection.anonymous_formation_applies())
        )?;
        writeln!(f)?;

        writeln!(f, "{}", self.quote)?;
        writeln!(f, "Amount due: {}", format_money(self.quote.total))
    }
}

pub fn quote_report(session: &Session) -> String {
    let quote = session.quote();
    debug!(total = %quote.total, "quote report built");

    QuoteReport {
        selection: session.selection(),
        quote: &quote,
    }
    .to_string()
}

// ─── preview ─────────────────────────────────────────────────────────────────

/// Validates the contact form and writes it into the company record.
/// All validation messages are returned together.
pub fn apply_customer_form(
    session: &mut Session,
    form: &CustomerForm,
) -> Result<()> {
    if let Err(errors) = form.validate_for_submit() {
        anyhow::bail!("customer form is incomplete:\n  {}", errors.join("\n  "));
    }

    session.update_company(form.to_patch());
    Ok(())
}

// ─── check-name ──────────────────────────────────────────────────────────────

pub async fn check_name<R: Rng>(
    checker: &NameChecker<R>,
    name: &str,
) -> Result<String> {
    match checker.check(name).await {
        Ok(result) => Ok(format!("{}: {}", name.trim(), result.message())),
        Err(NameCheckError::EmptyName) => anyhow::bail!("请输入公司名称"),
        Err(e) => Err(e.into()),
    }
}

// ─── chat ────────────────────────────────────────────────────────────────────

const PROMPT: &str = "> ";

const CHAT_HELP: &str = "\
/quit             leave the chat
/toggle           collapse or expand the sidebar
/nav <item>       switch to home, services or faq
/login, /logout   mock sign-in
/sidebar          show the sidebar";

/// Sends one message and returns the text to show: the reply, or the
/// apology when the request failed. Blank input is an error.
pub async fn send_once<C: ChatClient>(
    conversation: &mut Conversation<C>,
    message: &str,
) -> Result<String> {
    match conversation.send(message).await {
        SendOutcome::Ignored => anyhow::bail!("message is empty"),
        SendOutcome::Replied(reply) => Ok(reply),
        SendOutcome::Failed(_) => Ok(APOLOGY.to_string()),
    }
}

/// Reads lines from `input` until EOF or `/quit`. Plain lines go to the
/// assistant; lines starting with `/` drive the session's sidebar.
pub async fn run_chat<C, I, W>(
    conversation: &mut Conversation<C>,
    session: &mut Session,
    input: I,
    out: &mut W,
) -> Result<()>
where
    C: ChatClient,
    I: AsyncBufRead + Unpin,
    W: Write,
{
    writeln!(out, "{GREETING}")?;
    writeln!(out, "(/help for commands)")?;

    let mut lines = input.lines();
    loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;

        let Some(line) = lines.next_line().await.context("reading chat input")? else {
            break;
        };
        let line = line.trim();

        if let Some(command) = line.strip_prefix('/') {
            if !sidebar_command(session, command, out)? {
                break;
            }
            continue;
        }

        match conversation.send(line).await {
            SendOutcome::Ignored => {}
            SendOutcome::Replied(reply) => writeln!(out, "{reply}")?,
            SendOutcome::Failed(_) => writeln!(out, "{APOLOGY}")?,
        }
    }

    info!(
        messages = conversation.messages().len(),
        "chat session ended"
    );
    Ok(())
}

/// Returns `false` when the chat should end.
fn sidebar_command<W: Write>(
    session: &mut Session,
    command: &str,
    out: &mut W,
) -> Result<bool> {
    let (name, arg) = command
        .split_once(char::is_whitespace)
        .map_or((command, ""), |(name, arg)| (name, arg.trim()));

    match name {
        "quit" | "exit" => return Ok(false),
        "help" => writeln!(out, "{CHAT_HELP}")?,
        "toggle" => {
            session.sidebar.toggle();
            writeln!(out, "{}", session.sidebar)?;
        }
        "nav" => match NavItem::parse(arg) {
            Some(item) => {
                session.sidebar.select(item);
                writeln!(out, "{}", session.sidebar)?;
            }
            None => writeln!(out, "unknown page '{arg}'")?,
        },
        "login" => {
            session.sidebar.login();
            writeln!(out, "{}", session.sidebar)?;
        }
        "logout" => {
            session.sidebar.logout();
            writeln!(out, "{}", session.sidebar)?;
        }
        "sidebar" => writeln!(out, "{}", session.sidebar)?,
        other => writeln!(out, "unknown command '/{other}'")?,
    }

    Ok(true)
}

#[cfg(test)]
mod tests {
    use formation_core::{AddressType, Jurisdiction};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn quote_report_lists_selection_and_total() {
        let mut session = Session::default();
        session.select(SelectionConfig {
            jurisdiction: Jurisdiction::Wyoming,
            address_type: AddressType::Custom,
            custom_address_text: Some("1 Elk Rd".to_string()),
            wants_ein: true,
            wants_anonymous_formation: true,
            ..Default::default()
        });

        let report = quote_report(&session);

        assert!(report.contains("怀俄明州"), "{report}");
        assert!(report.contains("              1 Elk Rd, Albany NY 12207, US\n"));
        assert!(report.contains("EIN:          yes"));
        assert!(report.contains("Anonymous:    yes"));
        assert!(report.ends_with("Amount due: $847\n"), "{report}");
    }

    #[test]
    fn incomplete_customer_form_reports_all_errors() {
        let mut session = Session::default();
        let form = CustomerForm {
            owner_name: "San Zhang".to_string(),
            ..Default::default()
        };

        let err = apply_customer_form(&mut session, &form).unwrap_err();

        let message = err.to_string();
        assert!(message.contains("Phone number is required."));
        assert!(message.contains("Email is required."));
        assert_eq!(session.company().current().owner_name, "张三");
    }

    #[test]
    fn load_prices_without_schedule_is_standard() {
        let prices = load_prices(&AppConfig::default()).unwrap();

        assert_eq!(&prices, PriceTable::standard());
    }
}
