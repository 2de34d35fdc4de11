//! 命令行前端
//!
//! 每个命令先登录 (`--user/--password`)，再按角色检查能否打开对应视图。

mod commands;

use crate::auth::{self, require_view};
use crate::core::{Config, PosError, PosState};
use crate::reporting::TimeRange;
use crate::storage::RedbStateStore;
use anyhow::Context;
use chrono_tz::Tz;
use clap::{Args, Parser, Subcommand};
use shared::{Category, PaymentMethod, View};
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Parser, Debug)]
#[command(name = "pos-terminal", version, about = "Single-station restaurant point of sale")]
pub struct Cli {
    /// Login name; the role is inferred from it
    #[arg(long, global = true, env = "POS_USER")]
    pub user: Option<String>,

    #[arg(long, global = true, env = "POS_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Overrides WORK_DIR
    #[arg(long, global = true)]
    pub work_dir: Option<PathBuf>,

    /// Overrides TIMEZONE (IANA name, e.g. Asia/Colombo)
    #[arg(long, global = true, value_parser = parse_tz)]
    pub timezone: Option<Tz>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the role and views for the given credentials
    Login,
    /// Browse and manage the menu
    #[command(subcommand)]
    Menu(MenuCommand),
    /// Ring up an order and take payment
    Order(OrderArgs),
    /// Kitchen board
    #[command(subcommand)]
    Kitchen(KitchenCommand),
    /// Sales dashboard
    Report(ReportArgs),
}

#[derive(Subcommand, Debug)]
pub enum MenuCommand {
    /// List menu items
    List {
        /// Category filter (omit for all)
        #[arg(long, value_parser = parse_category)]
        category: Option<Category>,
        /// Case-insensitive name search
        #[arg(long, default_value = "")]
        search: String,
    },
    /// Add a new item at the top of the menu
    Add(MenuItemArgs),
    /// Change fields of an existing item
    Edit {
        id: String,
        #[command(flatten)]
        fields: MenuEditArgs,
    },
    /// Remove an item (orders keep their own copy)
    Delete {
        id: String,
        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },
    /// Mark an item in or out of stock
    Availability {
        id: String,
        #[arg(action = clap::ArgAction::Set, value_parser = clap::builder::BoolishValueParser::new())]
        available: bool,
    },
}

#[derive(Args, Debug)]
pub struct MenuItemArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub price: i64,
    #[arg(long, value_parser = parse_category)]
    pub category: Option<Category>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub image: Option<String>,
    #[arg(long)]
    pub vegetarian: bool,
    #[arg(long)]
    pub vegan: bool,
    /// Create the item out of stock
    #[arg(long)]
    pub unavailable: bool,
}

#[derive(Args, Debug)]
pub struct MenuEditArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub price: Option<i64>,
    #[arg(long, value_parser = parse_category)]
    pub category: Option<Category>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub image: Option<String>,
    #[arg(long)]
    pub vegetarian: Option<bool>,
    #[arg(long)]
    pub vegan: Option<bool>,
}

#[derive(Args, Debug)]
pub struct OrderArgs {
    /// Item to add, as ID[:QTY[:NOTE]]; repeatable
    #[arg(long = "item", short = 'i')]
    pub items: Vec<ItemArg>,
    /// Add one random available item
    #[arg(long)]
    pub surprise: bool,
    /// Discount percent (0, 5 or 10)
    #[arg(long, default_value_t = 0)]
    pub discount: u8,
    #[arg(long, default_value = "cash", value_parser = parse_payment_method)]
    pub pay: PaymentMethod,
    /// Cash handed over (cash payments only)
    #[arg(long)]
    pub tendered: Option<i64>,
    /// Table number (defaults to TABLE_ID)
    #[arg(long)]
    pub table: Option<String>,
    /// Send the receipt to the printer
    #[arg(long)]
    pub print: bool,
}

#[derive(Subcommand, Debug)]
pub enum KitchenCommand {
    /// Show active tickets
    List,
    /// Move an order to its next status
    Advance { id: String },
}

#[derive(Args, Debug)]
pub struct ReportArgs {
    #[arg(long, default_value = "daily", value_parser = parse_range)]
    pub range: TimeRange,
    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

/// `ID[:QTY[:NOTE]]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemArg {
    pub id: String,
    pub quantity: u32,
    pub note: Option<String>,
}

impl FromStr for ItemArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(3, ':');
        let id = parts.next().unwrap_or_default().trim();
        if id.is_empty() {
            return Err(format!("missing item id in '{}'", s));
        }
        let quantity = match parts.next().map(str::trim) {
            None | Some("") => 1,
            Some(q) => q
                .parse::<u32>()
                .ok()
                .filter(|q| (1..=i32::MAX as u32).contains(q))
                .ok_or_else(|| format!("invalid quantity '{}'", q))?,
        };
        let note = parts
            .next()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(str::to_string);
        Ok(Self {
            id: id.to_string(),
            quantity,
            note,
        })
    }
}

fn parse_tz(s: &str) -> Result<Tz, String> {
    s.parse::<Tz>().map_err(|e| e.to_string())
}

fn parse_category(s: &str) -> Result<Category, String> {
    s.parse::<Category>().map_err(|e| e.to_string())
}

fn parse_payment_method(s: &str) -> Result<PaymentMethod, String> {
    s.parse::<PaymentMethod>().map_err(|e| e.to_string())
}

fn parse_range(s: &str) -> Result<TimeRange, String> {
    s.parse::<TimeRange>().map_err(|e| e.to_string())
}

impl Cli {
    /// Apply command-line overrides on top of the environment config
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(dir) = &self.work_dir {
            config.work_dir = dir.clone();
        }
        if let Some(tz) = self.timezone {
            config.timezone = Some(tz);
        }
    }

    /// View the command needs, `None` for `login`
    pub fn required_view(&self) -> Option<View> {
        match &self.command {
            Commands::Login => None,
            Commands::Menu(MenuCommand::List { .. }) => Some(View::OrderEntry),
            Commands::Menu(_) => Some(View::MenuManagement),
            Commands::Order(_) => Some(View::OrderEntry),
            Commands::Kitchen(_) => Some(View::KitchenBoard),
            Commands::Report(_) => Some(View::Dashboard),
        }
    }
}

/// Run a parsed command against the terminal state in `config.work_dir`
pub async fn run(cli: Cli, config: Config) -> anyhow::Result<()> {
    let user = auth::login(
        cli.user.as_deref().unwrap_or_default(),
        cli.password.as_deref().unwrap_or_default(),
    )
    .map_err(PosError::from)?;
    if let Some(view) = cli.required_view() {
        require_view(&user, view).map_err(PosError::from)?;
    }

    if let Commands::Login = cli.command {
        println!("{}", commands::login_summary(&user));
        return Ok(());
    }

    let db_path = config.db_path();
    let store = RedbStateStore::open(&db_path)
        .with_context(|| format!("failed to open database at {}", db_path.display()))?;
    let mut state = PosState::load(store);

    let output = match cli.command {
        Commands::Login => String::new(),
        Commands::Menu(cmd) => commands::menu(&mut state, cmd)?,
        Commands::Order(args) => commands::order(&mut state, &config, &user, args).await?,
        Commands::Kitchen(cmd) => commands::kitchen(&mut state, &config, cmd)?,
        Commands::Report(args) => commands::report(&state, &config, args)?,
    };
    if !output.is_empty() {
        println!("{}", output.trim_end());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_spec_parsing() {
        assert_eq!(
            "2".parse::<ItemArg>().unwrap(),
            ItemArg {
                id: "2".into(),
                quantity: 1,
                note: None
            }
        );
        assert_eq!(
            "11:3".parse::<ItemArg>().unwrap(),
            ItemArg {
                id: "11".into(),
                quantity: 3,
                note: None
            }
        );
        assert_eq!(
            "4:2:no egg: well done".parse::<ItemArg>().unwrap(),
            ItemArg {
                id: "4".into(),
                quantity: 2,
                note: Some("no egg: well done".into())
            }
        );
        assert!("".parse::<ItemArg>().is_err());
        assert!("4:0".parse::<ItemArg>().is_err());
        assert!("4:x".parse::<ItemArg>().is_err());
        assert!("1:4294967295".parse::<ItemArg>().is_err());
        assert_eq!("1:2147483647".parse::<ItemArg>().unwrap().quantity, 2_147_483_647);
    }

    #[test]
    fn test_parse_order_command() {
        let cli = Cli::try_parse_from([
            "pos-terminal",
            "--user",
            "nimal",
            "--password",
            "pw",
            "order",
            "--item",
            "1:2",
            "-i",
            "7",
            "--discount",
            "10",
            "--pay",
            "card",
        ])
        .unwrap();
        assert_eq!(cli.required_view(), Some(View::OrderEntry));
        match cli.command {
            Commands::Order(args) => {
                assert_eq!(args.items.len(), 2);
                assert_eq!(args.discount, 10);
                assert_eq!(args.pay, PaymentMethod::Card);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_views_per_command() {
        let parse = |args: &[&str]| {
            let mut full = vec!["pos-terminal"];
            full.extend_from_slice(args);
            Cli::try_parse_from(full).unwrap()
        };
        assert_eq!(parse(&["login"]).required_view(), None);
        assert_eq!(parse(&["menu", "list"]).required_view(), Some(View::OrderEntry));
        assert_eq!(
            parse(&["menu", "delete", "3", "--yes"]).required_view(),
            Some(View::MenuManagement)
        );
        assert_eq!(
            parse(&["menu", "availability", "3", "off"]).required_view(),
            Some(View::MenuManagement)
        );
        assert_eq!(parse(&["kitchen", "list"]).required_view(), Some(View::KitchenBoard));
        assert_eq!(
            parse(&["report", "--range", "monthly"]).required_view(),
            Some(View::Dashboard)
        );
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::try_parse_from([
            "pos-terminal",
            "--work-dir",
            "/tmp/pos",
            "--timezone",
            "Asia/Colombo",
            "login",
        ])
        .unwrap();
        let mut config = Config::with_work_dir("./elsewhere");
        cli.apply_overrides(&mut config);
        assert_eq!(config.work_dir, PathBuf::from("/tmp/pos"));
        assert_eq!(config.timezone, Some(chrono_tz::Asia::Colombo));
    }
}
