//! `solid-demo` - wires the library's strategies together from the command line.
//!
//! Configuration comes from an optional TOML file (`--config`); flags given on
//! the command line take precedence over it.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use solid_patterns::article::{
    ArticleDraft, ArticleProcessor, InMemoryRepository, RandomIdGenerator,
};
use solid_patterns::coffee::{
    AdvancedCoffeeMachine, AllInOneMachine, BasicCoffeeMachine, CappuccinoMachine, EspressoMachine,
    LatteCoffeeMachine, LatteMachine, LegacyBasicMachine,
};
use solid_patterns::employee::{
    Employee, EmployeeReport, EmployeeStore, InMemoryEmployeeStore, SalaryCalculator,
};
use solid_patterns::export::process_data;
use solid_patterns::finance::{FlatTax, InvoiceGenerator, PlainInvoice, TaxCalculator};
use solid_patterns::notification::{console_logger, file_logger, process_message};
use solid_patterns::series::{
    Average, PositiveSum, Sum, process_filtered_financial_data, process_financial_data,
};
use solid_patterns::shapes::{Rectangle, Shape, Square, widen};
use solid_patterns::{Channel, Config, CustomerTier, Error, Format, Result, root};

#[derive(Parser, Debug)]
#[command(name = "solid-demo", version, about = "SOLID principles, wired at runtime")]
struct Cli {
    /// TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute a discount for a purchase amount
    Discount {
        /// Purchase amount
        amount: f64,
        /// Customer tier (regular, premium, vip, super-vip)
        #[arg(short, long)]
        tier: Option<CustomerTier>,
    },
    /// Send a notification
    Notify {
        /// Recipient
        to: String,
        /// Message body
        message: String,
        /// Delivery channel (email, sms)
        #[arg(long)]
        channel: Option<Channel>,
    },
    /// Serialize a sample table
    Export {
        /// Output format (json, csv, xml)
        #[arg(short, long)]
        format: Option<Format>,
    },
    /// Validate, format, store and announce an article
    Article {
        /// Article title
        #[arg(long)]
        title: String,
        /// Article body
        #[arg(long)]
        content: String,
        /// Author, also the notification recipient
        #[arg(long)]
        author: String,
    },
    /// Run every coffee machine
    Coffee,
    /// Resize a rectangle and a square
    Shapes,
    /// Reduce the sample financial series
    Series,
    /// Payroll, report and storage for a sample employee
    Employee,
    /// Route a log message through both loggers
    Log {
        /// Message text
        #[arg(default_value = "Processing message...")]
        message: String,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "solid_patterns=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(Error::Article(e)) => {
            eprintln!("Error processing article: {e}");
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    match cli.command {
        Command::Discount { amount, tier } => {
            let tier = tier.unwrap_or(config.discount.tier);
            let calculator = root::discount_calculator(tier);
            println!("{tier}: {}", calculator.calculate(amount));
        }
        Command::Notify {
            to,
            message,
            channel,
        } => {
            let channel = channel.unwrap_or(config.notification.channel);
            root::notifier(channel, io::stdout()).send_notification(&to, &message)?;
        }
        Command::Export { format } => {
            let format = format.unwrap_or(config.export.format);
            let serializer = root::row_serializer(format);
            println!("{}", process_data(&sample_rows(), &*serializer)?);
        }
        Command::Article {
            title,
            content,
            author,
        } => {
            let mut processor = ArticleProcessor::with_rules(
                config.validation,
                InMemoryRepository::new(RandomIdGenerator),
                root::notification_service(config.notification.channel, io::stdout()),
            );
            let article = processor.process(&ArticleDraft::new(title, content, author))?;
            println!("{}", serde_json::to_string_pretty(&article)?);
        }
        Command::Coffee => {
            println!("basic: {}", BasicCoffeeMachine.brew_espresso());
            println!("advanced: {}", AdvancedCoffeeMachine.brew_cappuccino());
            println!("latte: {}", LatteCoffeeMachine.brew_latte());
            match LegacyBasicMachine.brew_latte() {
                Ok(drink) => println!("legacy: {drink}"),
                Err(e) => println!("legacy: {e}"),
            }
        }
        Command::Shapes => {
            let mut rectangle = Rectangle::new(5.0, 10.0);
            println!("rectangle initial: {}", rectangle.area());
            widen(&mut rectangle, 10.0);
            println!("rectangle after: {}", rectangle.area());

            let mut square = Square::new(5.0);
            println!("square initial: {}", square.area());
            square.set_side(7.0);
            println!("square after: {}", square.area());
        }
        Command::Series => {
            let data = [-10.0, 5.0, 15.0, -5.0, 10.0];
            println!("{}", process_financial_data(&Sum, &data));
            println!("{}", process_financial_data(&Average, &data));
            println!("{}", process_filtered_financial_data(&PositiveSum, &data));
            println!("tax on 1000: {}", FlatTax::default().tax(1000.0));
            println!("{}", PlainInvoice.invoice(1000.0));
        }
        Command::Employee => {
            let employee = Employee::new("Ana Souza", "Engineer", 5000.0);
            let mut store = InMemoryEmployeeStore::new();
            println!("salary: {}", SalaryCalculator.calculate(&employee));
            println!("{}", EmployeeReport.generate(&employee));
            store.save(&employee)?;
            println!("stored employees: {}", store.employees().len());
        }
        Command::Log { message } => {
            process_message(&message, console_logger);
            process_message(&message, file_logger);
        }
    }
    Ok(())
}

fn sample_rows() -> Vec<Vec<String>> {
    [
        ["name", "age"],
        ["João das Couves", "30"],
        ["Fulano de Tal", "40"],
        ["Ciclano Beltrano", "25"],
    ]
    .iter()
    .map(|row| row.iter().map(ToString::to_string).collect())
    .collect()
}
