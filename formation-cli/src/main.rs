use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tokio::io::BufReader;
use tracing::{debug, warn};

use formation_chat::{Conversation, DeepSeekClient};
use formation_cli::{
    app, config,
    logging,
    models::CustomerForm,
    name_check::{NameCheckSettings, NameChecker},
};
use formation_core::{
    AddressType, BusinessService, CompanyInfoPatch, EntityType, Jurisdiction, SelectionConfig,
    document::{RandomIdentifiers, SystemClock},
};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// US company formation assistant: price quotes, formation document
/// previews, name checks and a chat helpdesk.
#[derive(Debug, Parser)]
#[command(name = "formation", version)]
struct Cli {
    /// Config file (defaults to `formation.toml` in the working directory).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `formation_core=trace,info`.
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Also append log output to this file.
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Price schedule CSV; overrides `[pricing] schedule`.
    #[arg(long, global = true)]
    prices: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print an itemized price quote.
    Quote(SelectionArgs),
    /// Render the formation document preview.
    Preview(PreviewArgs),
    /// Check whether a company name is available (simulated).
    CheckName(CheckNameArgs),
    /// Talk to the helpdesk assistant.
    Chat(ChatArgs),
    /// Write a default config file.
    ConfigInit(ConfigInitArgs),
}

#[derive(Debug, Args)]
struct SelectionArgs {
    /// Formation state, e.g. Wyoming or "New York".
    #[arg(long, default_value_t = Jurisdiction::Colorado)]
    state: Jurisdiction,

    /// Entity type: CORP, LLC or NONPROFIT.
    #[arg(long, default_value_t = EntityType::Corporation)]
    entity: EntityType,

    /// Registered address option: public, unique or custom.
    #[arg(long, default_value_t = AddressType::Public)]
    address: AddressType,

    /// Address text, used with `--address custom`.
    #[arg(long)]
    custom_address: Option<String>,

    /// Add the BOI filing.
    #[arg(long)]
    boi: bool,

    /// Add the paper seal.
    #[arg(long)]
    seal: bool,

    /// Add the EIN application.
    #[arg(long)]
    ein: bool,

    /// Add anonymous formation (Wyoming only).
    #[arg(long)]
    anonymous: bool,

    /// Business service: registration, annual or taxation.
    #[arg(long, default_value_t = BusinessService::Registration)]
    service: BusinessService,
}

impl SelectionArgs {
    fn into_selection(self) -> SelectionConfig {
        if self.custom_address.is_some() && self.address != AddressType::Custom {
            warn!("--custom-address is ignored unless --address custom");
        }

        SelectionConfig {
            jurisdiction: self.state,
            entity_type: self.entity,
            address_type: self.address,
            custom_address_text: self.custom_address,
            wants_boi_filing: self.boi,
            wants_paper_seal: self.seal,
            wants_ein: self.ein,
            wants_anonymous_formation: self.anonymous,
            business_service: self.service,
        }
    }
}

#[derive(Debug, Args)]
struct PreviewArgs {
    #[command(flatten)]
    selection: SelectionArgs,

    #[arg(long)]
    company_name: Option<String>,

    #[arg(long)]
    owner_name: Option<String>,

    /// Contact phone; giving any contact field validates the whole form.
    #[arg(long)]
    phone: Option<String>,

    #[arg(long)]
    email: Option<String>,

    #[arg(long)]
    wechat: Option<String>,

    /// Document year (four digits); overrides `[document] year`.
    #[arg(long, value_parser = clap::value_parser!(i32).range(1000..=9999))]
    year: Option<i32>,
}

#[derive(Debug, Args)]
struct CheckNameArgs {
    name: String,

    /// Simulated lookup delay; overrides `[name_check] delay_ms`.
    #[arg(long)]
    delay_ms: Option<u64>,
}

#[derive(Debug, Args)]
struct ChatArgs {
    /// Send one message and exit instead of starting a session.
    #[arg(long)]
    message: Option<String>,

    /// List the models the endpoint offers and exit.
    #[arg(long)]
    list_models: bool,
}

#[derive(Debug, Args)]
struct ConfigInitArgs {
    #[arg(long, default_value = config::CONFIG_FILE_NAME)]
    path: PathBuf,

    /// Overwrite an existing file.
    #[arg(long)]
    force: bool,
}

// ─── entry point ─────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init_default_logging();

    let cli = Cli::parse();

    if let Some(level) = &cli.log_level {
        logging::set_log_level(level)?;
    }
    if let Some(path) = &cli.log_file {
        logging::enable_file_logging(path)?;
    }

    if let Command::ConfigInit(args) = &cli.command {
        config::init_config(&args.path, args.force)?;
        println!("wrote {}", args.path.display());
        return Ok(());
    }

    let mut config = config::load_config(cli.config.as_deref())?;
    if let Some(prices) = cli.prices {
        config.pricing.schedule = Some(prices);
    }
    debug!(?config, "configuration loaded");

    match cli.command {
        Command::Quote(args) => {
            let mut session = app::new_session(&config)?;
            session.select(args.into_selection());
            print!("{}", app::quote_report(&session));
        }

        Command::Preview(args) => {
            if let Some(year) = args.year {
                config.document.year = year;
            }
            let mut session = app::new_session(&config)?;
            session.select(args.selection.into_selection());
            session.update_company(CompanyInfoPatch {
                company_name: args.company_name,
                owner_name: args.owner_name.clone(),
                ..Default::default()
            });

            if args.phone.is_some() || args.email.is_some() || args.wechat.is_some() {
                let form = CustomerForm {
                    owner_name: args
                        .owner_name
                        .unwrap_or_else(|| session.company().current().owner_name.clone()),
                    phone: args.phone.unwrap_or_default(),
                    email: args.email.unwrap_or_default(),
                    wechat: args.wechat.unwrap_or_default(),
                };
                app::apply_customer_form(&mut session, &form)?;
            }

            let mut ids = RandomIdentifiers::new();
            println!("{}", session.preview(&SystemClock, &mut ids));
        }

        Command::CheckName(args) => {
            let mut settings = NameCheckSettings::from(&config.name_check);
            if let Some(ms) = args.delay_ms {
                settings.delay = std::time::Duration::from_millis(ms);
            }
            let checker = NameChecker::new(settings);
            println!("{}", app::check_name(&checker, &args.name).await?);
        }

        Command::Chat(args) => {
            let settings = config.chat.to_settings()?;
            let client = DeepSeekClient::new(settings).context("building chat client")?;

            if args.list_models {
                for model in client.list_models().await? {
                    println!("{model}");
                }
                return Ok(());
            }

            debug!(
                base_url = %client.settings().base_url,
                model = %client.settings().model,
                "chat client ready"
            );

            let mut conversation = Conversation::new(client);
            match args.message {
                Some(message) => {
                    println!("{}", app::send_once(&mut conversation, &message).await?);
                }
                None => {
                    let mut session = app::new_session(&config)?;
                    let stdin = BufReader::new(tokio::io::stdin());
                    let mut stdout = std::io::stdout();
                    app::run_chat(&mut conversation, &mut session, stdin, &mut stdout).await?;
                }
            }
        }

        Command::ConfigInit(_) => {}
    }

    Ok(())
}
