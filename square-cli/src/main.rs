//! Square CLI
//!
//! Command-line driver for the Square payment integration, intended for
//! exercising sandbox credentials end to end.

use std::collections::HashMap;

use anyhow::Result;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

use square_checkout::{SquarePaymentMethod, StaticSettingsStore};
use square_gateway::SquareClient;
use square_types::{CurrencyCode, PaymentAttempt, PaymentId, PaymentMethod, RefundAttempt};

mod config;
mod fixture;

use fixture::{SeedAddress, SeededDirectory};

#[derive(Parser)]
#[command(name = "square")]
#[command(author, version, about = "Square payment integration CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Charge a tokenized card
    Charge {
        /// Card token produced by the Web Payments SDK
        #[arg(long)]
        token: String,
        /// Order total in major units, e.g. 19.99
        #[arg(long)]
        total: Decimal,
        /// Buyer email
        #[arg(long, default_value = "buyer@example.com")]
        email: String,
        #[arg(long, default_value = "1 Main St")]
        line1: String,
        #[arg(long, default_value = "Springfield")]
        city: String,
        /// State or province abbreviation
        #[arg(long, default_value = "IL")]
        region: String,
        /// Two-letter country code
        #[arg(long, default_value = "US")]
        country: String,
        #[arg(long, default_value = "62704")]
        postal_code: String,
        #[arg(long, default_value = "USD")]
        currency: String,
    },
    /// Refund a captured payment
    Refund {
        /// Transaction id returned by a charge
        #[arg(long)]
        transaction: String,
        /// Amount to refund in major units
        #[arg(long)]
        amount: Decimal,
        /// Original order total in major units
        #[arg(long)]
        total: Decimal,
        #[arg(long, default_value = "USD")]
        currency: String,
    },
    /// Print the card-form script URL for the configured environment
    ScriptUrl,
    /// Print the client-side widget configuration
    WidgetConfig,
    /// Print the capability flags advertised to the host
    Capabilities,
}

fn payment_method(
    currency: &str,
    email: String,
    address: SeedAddress,
) -> Result<SquarePaymentMethod<SquareClient, SeededDirectory, StaticSettingsStore>> {
    let settings = config::settings_from_env()?;
    let directory = SeededDirectory::new(email, address, CurrencyCode::new(currency));
    Ok(SquarePaymentMethod::new(
        SquareClient::new(),
        directory,
        StaticSettingsStore::new(settings),
    ))
}

fn default_fixture(currency: &str) -> Result<SquarePaymentMethod<SquareClient, SeededDirectory, StaticSettingsStore>> {
    payment_method(
        currency,
        "buyer@example.com".to_string(),
        SeedAddress {
            line1: "1 Main St".to_string(),
            city: "Springfield".to_string(),
            region: "IL".to_string(),
            country: "US".to_string(),
            postal_code: "62704".to_string(),
        },
    )
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Charge {
            token,
            total,
            email,
            line1,
            city,
            region,
            country,
            postal_code,
            currency,
        } => {
            let method = payment_method(
                &currency,
                email,
                SeedAddress {
                    line1,
                    city,
                    region,
                    country,
                    postal_code,
                },
            )?;

            // The charge path reads the token from the submitted form, so
            // feed the argument through the same parsing.
            let form = HashMap::from([("paymenttoken".to_string(), token)]);
            let mut attempt = PaymentAttempt::new(method.directory().customer_id(), total);
            attempt.custom_values = method.payment_info(&form);

            let outcome = method.process_payment(&mut attempt).await?;
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        }

        Commands::Refund {
            transaction,
            amount,
            total,
            currency,
        } => {
            let method = default_fixture(&currency)?;
            let outcome = method
                .refund(&RefundAttempt {
                    transaction_id: PaymentId::new(transaction),
                    amount_to_refund: amount,
                    order_total: total,
                })
                .await?;
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        }

        Commands::ScriptUrl => {
            let method = default_fixture("USD")?;
            println!("{}", method.payment_form_script_url().await?);
        }

        Commands::WidgetConfig => {
            let method = default_fixture("USD")?;
            let widget = method.widget_config().await?;
            println!("{}", serde_json::to_string_pretty(&widget)?);
        }

        Commands::Capabilities => {
            let method = default_fixture("USD")?;
            println!("{}", serde_json::to_string_pretty(&method.capabilities())?);
        }
    }

    Ok(())
}
